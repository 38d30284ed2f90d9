//! Cohort-level screening statistics
//!
//! Aggregations over assessment results: per-axis case counts, stunting
//! prevalence with severity banding, per-group breakdowns, monthly trends,
//! and a human-readable summary.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use itertools::Itertools;

use crate::models::assessment::GrowthAssessment;
use crate::models::types::StuntingStatus;

/// Prevalence severity band used by dashboards and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrevalenceBand {
    /// Below 6% stunting prevalence
    Low,
    /// 6% to below 8%
    Medium,
    /// 8% and above
    High,
}

impl PrevalenceBand {
    /// Band a stunting prevalence percentage
    #[must_use]
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 8.0 {
            Self::High
        } else if pct >= 6.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Get the display label for this band
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "rendah",
            Self::Medium => "sedang",
            Self::High => "tinggi",
        }
    }
}

impl fmt::Display for PrevalenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Basic statistics over a screened cohort
#[derive(Debug, Clone, Default)]
pub struct CohortStatistics {
    /// Number of assessments in the cohort
    pub screened: usize,
    /// Stunting cases (stunting and severe stunting tiers)
    pub stunted_cases: usize,
    /// Children in the stunting-risk tier
    pub stunting_at_risk: usize,
    /// Underweight cases (underweight and severe underweight tiers)
    pub underweight_cases: usize,
    /// Wasting cases (wasting and severe wasting tiers)
    pub wasting_cases: usize,
}

impl CohortStatistics {
    /// Aggregate a cohort of assessments
    #[must_use]
    pub fn from_assessments(assessments: &[GrowthAssessment]) -> Self {
        let mut stats = Self {
            screened: assessments.len(),
            ..Self::default()
        };

        for assessment in assessments {
            if assessment.stunting_status.is_case() {
                stats.stunted_cases += 1;
            }
            if assessment.stunting_status == StuntingStatus::AtRisk {
                stats.stunting_at_risk += 1;
            }
            if assessment.underweight_status.is_case() {
                stats.underweight_cases += 1;
            }
            if assessment.wasting_status.is_case() {
                stats.wasting_cases += 1;
            }
        }

        stats
    }

    /// Stunting prevalence as a percentage of the screened cohort
    #[must_use]
    pub fn prevalence_pct(&self) -> f64 {
        percentage(self.stunted_cases, self.screened)
    }

    /// Severity band for the cohort's stunting prevalence
    #[must_use]
    pub fn band(&self) -> PrevalenceBand {
        PrevalenceBand::from_percentage(self.prevalence_pct())
    }

    /// Generate a human-readable cohort summary
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Screening Cohort Summary:\n");
        summary.push_str(&format!("  Children Screened: {}\n", self.screened));
        summary.push_str(&format!("  Stunting Cases: {}\n", self.stunted_cases));
        summary.push_str(&format!("  At Risk of Stunting: {}\n", self.stunting_at_risk));
        summary.push_str(&format!("  Underweight Cases: {}\n", self.underweight_cases));
        summary.push_str(&format!("  Wasting Cases: {}\n", self.wasting_cases));
        summary.push_str(&format!(
            "  Stunting Prevalence: {:.1}% ({})\n",
            self.prevalence_pct(),
            self.band()
        ));
        summary
    }
}

/// Stunting prevalence for one named group, e.g. a village or district
#[derive(Debug, Clone, PartialEq)]
pub struct GroupPrevalence {
    /// Group label
    pub label: String,
    /// Number of children screened in the group
    pub screened: usize,
    /// Stunting cases in the group
    pub stunted_cases: usize,
    /// Stunting prevalence percentage
    pub prevalence_pct: f64,
    /// Severity band for the prevalence
    pub band: PrevalenceBand,
}

/// Break stunting prevalence down by group label
///
/// Groups are returned sorted by prevalence, highest first; ties keep
/// label order.
#[must_use]
pub fn group_prevalence<'a, I>(records: I) -> Vec<GroupPrevalence>
where
    I: IntoIterator<Item = (&'a str, &'a GrowthAssessment)>,
{
    let mut groups: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for (label, assessment) in records {
        let entry = groups.entry(label).or_default();
        entry.0 += 1;
        if assessment.stunting_status.is_case() {
            entry.1 += 1;
        }
    }

    let mut result: Vec<GroupPrevalence> = groups
        .into_iter()
        .map(|(label, (screened, stunted_cases))| {
            let prevalence_pct = percentage(stunted_cases, screened);
            GroupPrevalence {
                label: label.to_string(),
                screened,
                stunted_cases,
                prevalence_pct,
                band: PrevalenceBand::from_percentage(prevalence_pct),
            }
        })
        .collect();
    result.sort_by(|a, b| {
        b.prevalence_pct
            .partial_cmp(&a.prevalence_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    result
}

/// One calendar month of screening results
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    /// Calendar year
    pub year: i32,
    /// Calendar month (1-12)
    pub month: u32,
    /// Number of children screened this month
    pub screened: usize,
    /// Stunting cases this month
    pub stunted_cases: usize,
    /// Stunting prevalence percentage this month
    pub prevalence_pct: f64,
    /// Percentage-point change in prevalence since the previous point
    pub change_pct: Option<f64>,
}

/// Monthly stunting trend over dated assessments
///
/// Points are ordered chronologically; months with no measurements are
/// omitted rather than zero-filled.
#[must_use]
pub fn monthly_trend(records: &[(NaiveDate, GrowthAssessment)]) -> Vec<TrendPoint> {
    let mut sorted: Vec<(NaiveDate, &GrowthAssessment)> =
        records.iter().map(|(date, a)| (*date, a)).collect();
    sorted.sort_by_key(|(date, _)| (date.year(), date.month()));

    let grouped = sorted.iter().chunk_by(|(date, _)| (date.year(), date.month()));
    let mut points = Vec::new();
    for ((year, month), group) in &grouped {
        let mut screened = 0;
        let mut stunted_cases = 0;
        for (_, assessment) in group {
            screened += 1;
            if assessment.stunting_status.is_case() {
                stunted_cases += 1;
            }
        }
        points.push(TrendPoint {
            year,
            month,
            screened,
            stunted_cases,
            prevalence_pct: percentage(stunted_cases, screened),
            change_pct: None,
        });
    }

    for i in 1..points.len() {
        points[i].change_pct = Some(points[i].prevalence_pct - points[i - 1].prevalence_pct);
    }
    points
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
