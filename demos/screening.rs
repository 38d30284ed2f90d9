//! Walks a handful of measurements through the screening pipeline and
//! prints the assessments, recommendations, and cohort summary.
//!
//! Run with `RUST_LOG=debug` to see the per-assessment logging.

use anyhow::Result;
use chrono::NaiveDate;
use growth_screen::{
    CohortStatistics, GrowthScreener, Sex, age_in_months_from_iso, group_prevalence,
    recommendations,
};

fn main() -> Result<()> {
    env_logger::init();

    let screener = GrowthScreener::new();
    let reference_date =
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid reference date");

    let records = [
        ("Airmadidi", 87.1, 12.2, "2022-06-01", Sex::Male),
        ("Airmadidi", 75.0, 10.1, "2022-06-01", Sex::Male),
        ("Kalawat", 95.0, 13.8, "2021-03-15", Sex::Female),
        ("Kalawat", 60.3, 5.9, "2023-11-20", Sex::Female),
    ];

    let mut assessments = Vec::new();
    let mut labelled = Vec::new();
    for (village, height_cm, weight_kg, birth_iso, sex) in records {
        let assessment = screener.assess_record(height_cm, weight_kg, birth_iso, sex, reference_date)?;
        println!(
            "{village}: HFA {:+.2} WFA {:+.2} WFH {:+.2} -> {}",
            assessment.height_for_age,
            assessment.weight_for_age,
            assessment.weight_for_height,
            assessment.stunting_status,
        );
        for message in recommendations(&assessment, age_in_months_from_iso(birth_iso, reference_date)) {
            println!("  - {message}");
        }
        assessments.push(assessment);
        labelled.push((village, assessment));
    }

    println!();
    let stats = CohortStatistics::from_assessments(&assessments);
    print!("{}", stats.summary());

    for group in group_prevalence(labelled.iter().map(|(village, a)| (*village, a))) {
        println!(
            "  {}: {}/{} stunted, {:.1}% ({})",
            group.label, group.stunted_cases, group.screened, group.prevalence_pct, group.band
        );
    }

    println!();
    println!("{}", serde_json::to_string_pretty(&assessments[1])?);

    Ok(())
}
