#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use growth_screen::{
        CohortStatistics, GrowthAssessment, PrevalenceBand, group_prevalence, monthly_trend,
    };

    fn normal() -> GrowthAssessment {
        GrowthAssessment::from_raw_scores(0.0, 0.0, 0.0)
    }

    fn at_risk() -> GrowthAssessment {
        GrowthAssessment::from_raw_scores(-1.5, 0.0, 0.0)
    }

    fn stunted() -> GrowthAssessment {
        GrowthAssessment::from_raw_scores(-2.5, -2.5, -2.5)
    }

    fn severely_stunted() -> GrowthAssessment {
        GrowthAssessment::from_raw_scores(-3.5, -3.5, -3.5)
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn counts_cases_across_axes() {
        let cohort = vec![normal(), at_risk(), stunted(), severely_stunted()];
        let stats = CohortStatistics::from_assessments(&cohort);

        assert_eq!(stats.screened, 4);
        assert_eq!(stats.stunted_cases, 2);
        assert_eq!(stats.stunting_at_risk, 1);
        assert_eq!(stats.underweight_cases, 2);
        assert_eq!(stats.wasting_cases, 2);
        assert_eq!(stats.prevalence_pct(), 50.0);
        assert_eq!(stats.band(), PrevalenceBand::High);
    }

    #[test]
    fn empty_cohort_has_zero_prevalence() {
        let stats = CohortStatistics::from_assessments(&[]);
        assert_eq!(stats.screened, 0);
        assert_eq!(stats.prevalence_pct(), 0.0);
        assert_eq!(stats.band(), PrevalenceBand::Low);
    }

    #[test]
    fn prevalence_bands_use_dashboard_cutoffs() {
        assert_eq!(PrevalenceBand::from_percentage(0.0), PrevalenceBand::Low);
        assert_eq!(PrevalenceBand::from_percentage(5.9), PrevalenceBand::Low);
        assert_eq!(PrevalenceBand::from_percentage(6.0), PrevalenceBand::Medium);
        assert_eq!(PrevalenceBand::from_percentage(7.9), PrevalenceBand::Medium);
        assert_eq!(PrevalenceBand::from_percentage(8.0), PrevalenceBand::High);
        assert_eq!(PrevalenceBand::from_percentage(100.0), PrevalenceBand::High);
    }

    #[test]
    fn groups_sort_by_prevalence_descending() {
        let records = vec![
            ("Wori", normal()),
            ("Wori", normal()),
            ("Kema", stunted()),
            ("Kema", normal()),
        ];
        let groups = group_prevalence(records.iter().map(|(label, a)| (*label, a)));

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Kema");
        assert_eq!(groups[0].screened, 2);
        assert_eq!(groups[0].stunted_cases, 1);
        assert_eq!(groups[0].prevalence_pct, 50.0);
        assert_eq!(groups[0].band, PrevalenceBand::High);
        assert_eq!(groups[1].label, "Wori");
        assert_eq!(groups[1].stunted_cases, 0);
        assert_eq!(groups[1].band, PrevalenceBand::Low);

        // Every record lands in exactly one group
        let grouped_total: usize = groups.iter().map(|g| g.screened).sum();
        assert_eq!(grouped_total, records.len());
    }

    #[test]
    fn monthly_trend_reports_change_from_previous_month() {
        let records = vec![
            (date(2024, 1, 5), normal()),
            (date(2024, 1, 20), stunted()),
            (date(2024, 2, 3), normal()),
            (date(2024, 2, 10), normal()),
        ];
        let trend = monthly_trend(&records);

        assert_eq!(trend.len(), 2);
        assert_eq!((trend[0].year, trend[0].month), (2024, 1));
        assert_eq!(trend[0].screened, 2);
        assert_eq!(trend[0].stunted_cases, 1);
        assert_eq!(trend[0].prevalence_pct, 50.0);
        assert_eq!(trend[0].change_pct, None);
        assert_eq!(trend[1].prevalence_pct, 0.0);
        assert_eq!(trend[1].change_pct, Some(-50.0));
    }

    #[test]
    fn monthly_trend_orders_unsorted_input() {
        let records = vec![
            (date(2024, 3, 1), normal()),
            (date(2024, 1, 15), stunted()),
            (date(2024, 2, 10), normal()),
            (date(2024, 1, 2), normal()),
        ];
        let trend = monthly_trend(&records);

        assert_eq!(trend.len(), 3);
        assert_eq!((trend[0].year, trend[0].month), (2024, 1));
        assert_eq!(trend[0].screened, 2);
        assert_eq!((trend[2].year, trend[2].month), (2024, 3));
    }

    #[test]
    fn monthly_trend_of_empty_records_is_empty() {
        assert!(monthly_trend(&[]).is_empty());
    }

    #[test]
    fn summary_reports_all_counts() {
        let stats = CohortStatistics::from_assessments(&[normal(), severely_stunted()]);
        let summary = stats.summary();

        assert!(summary.contains("Children Screened: 2"));
        assert!(summary.contains("Stunting Cases: 1"));
        assert!(summary.contains("Stunting Prevalence: 50.0% (tinggi)"));
    }
}
