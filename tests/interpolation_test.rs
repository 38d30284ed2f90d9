#[cfg(test)]
mod tests {
    use growth_screen::{ReferenceSample, ReferenceTable, Sex};

    fn sample(age_months: u32, sex: Sex, height_mean_cm: f64) -> ReferenceSample {
        ReferenceSample {
            age_months,
            sex,
            height_mean_cm,
            height_sd_cm: 2.0,
            weight_mean_kg: 5.0,
            weight_sd_kg: 0.5,
        }
    }

    #[test]
    fn clamps_below_smallest_sampled_age() {
        let table = ReferenceTable::who_2006();
        let standard = table.standard_at(0.0, Sex::Male);
        assert_eq!(standard.height_mean_cm, 49.9);
        assert_eq!(standard.height_sd_cm, 1.89);
        assert_eq!(standard.weight_mean_kg, 3.3);
        assert_eq!(standard.weight_sd_kg, 0.39);
    }

    #[test]
    fn clamps_above_largest_sampled_age() {
        let table = ReferenceTable::who_2006();
        let standard = table.standard_at(72.0, Sex::Female);
        assert_eq!(standard.height_mean_cm, 109.4);
        assert_eq!(standard.weight_mean_kg, 17.9);
    }

    #[test]
    fn exact_sample_age_returns_the_sample() {
        let table = ReferenceTable::who_2006();
        let standard = table.standard_at(24.0, Sex::Male);
        assert_eq!(standard.height_mean_cm, 87.1);
        assert_eq!(standard.height_sd_cm, 2.88);
        assert_eq!(standard.weight_mean_kg, 12.2);
        assert_eq!(standard.weight_sd_kg, 1.12);
    }

    #[test]
    fn interpolates_between_bracketing_samples() {
        // 18 months lies midway between the 12- and 24-month samples
        let table = ReferenceTable::who_2006();
        let standard = table.standard_at(18.0, Sex::Male);
        let expected = 75.7 + (87.1 - 75.7) * 0.5;
        assert!((standard.height_mean_cm - expected).abs() < 1e-9);
        assert!(standard.height_mean_cm > 75.7 && standard.height_mean_cm < 87.1);
        assert!(standard.weight_mean_kg > 9.6 && standard.weight_mean_kg < 12.2);
    }

    #[test]
    fn interpolated_height_mean_is_monotonic_in_age() {
        let table = ReferenceTable::who_2006();
        for sex in [Sex::Male, Sex::Female] {
            let mut previous = 0.0;
            for age in 0..=60 {
                let mean = table.standard_at(f64::from(age), sex).height_mean_cm;
                assert!(mean >= previous, "height mean decreased at {age} months");
                previous = mean;
            }
        }
    }

    #[test]
    fn sexes_use_distinct_samples() {
        let table = ReferenceTable::who_2006();
        let male = table.standard_at(24.0, Sex::Male);
        let female = table.standard_at(24.0, Sex::Female);
        assert_eq!(male.height_mean_cm, 87.1);
        assert_eq!(female.height_mean_cm, 86.4);
    }

    #[test]
    fn sorts_unsorted_input() {
        let table = ReferenceTable::new(vec![
            sample(6, Sex::Male, 60.0),
            sample(0, Sex::Male, 50.0),
            sample(0, Sex::Female, 49.0),
        ])
        .unwrap();
        let standard = table.standard_at(3.0, Sex::Male);
        assert!((standard.height_mean_cm - 55.0).abs() < 1e-9);
    }

    #[test]
    fn age_range_reports_table_bounds() {
        let table = ReferenceTable::who_2006();
        assert_eq!(table.age_range(Sex::Male), (0, 60));
        assert_eq!(table.age_range(Sex::Female), (0, 60));
    }

    #[test]
    fn rejects_duplicate_age_for_one_sex() {
        let result = ReferenceTable::new(vec![
            sample(0, Sex::Male, 50.0),
            sample(0, Sex::Male, 51.0),
            sample(0, Sex::Female, 49.0),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_sex() {
        let result = ReferenceTable::new(vec![
            sample(0, Sex::Male, 50.0),
            sample(6, Sex::Male, 60.0),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_positive_statistics() {
        let mut bad = sample(0, Sex::Male, 50.0);
        bad.height_sd_cm = 0.0;
        let result = ReferenceTable::new(vec![bad, sample(0, Sex::Female, 49.0)]);
        assert!(result.is_err());

        let mut nan = sample(0, Sex::Male, 50.0);
        nan.weight_mean_kg = f64::NAN;
        let result = ReferenceTable::new(vec![nan, sample(0, Sex::Female, 49.0)]);
        assert!(result.is_err());
    }
}
