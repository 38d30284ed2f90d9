//! Growth assessment pipeline
//!
//! `GrowthScreener` turns a validated measurement into Z-scores and status
//! classifications against a growth reference table.

use chrono::NaiveDate;

use crate::algorithm::age::age_in_months_from_iso;
use crate::config::ScreeningConfig;
use crate::error::Result;
use crate::models::assessment::GrowthAssessment;
use crate::models::measurement::Measurement;
use crate::models::types::Sex;
use crate::reference::ReferenceTable;

/// Assesses measurements against a growth reference table
#[derive(Debug, Clone)]
pub struct GrowthScreener {
    table: ReferenceTable,
    config: ScreeningConfig,
}

impl Default for GrowthScreener {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowthScreener {
    /// Create a screener backed by the built-in WHO 2006 table
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: ReferenceTable::who_2006(),
            config: ScreeningConfig::default(),
        }
    }

    /// Create a screener backed by a custom reference table
    #[must_use]
    pub fn with_table(table: ReferenceTable) -> Self {
        Self {
            table,
            config: ScreeningConfig::default(),
        }
    }

    /// Replace the screening configuration
    #[must_use]
    pub fn with_config(mut self, config: ScreeningConfig) -> Self {
        self.config = config;
        self
    }

    /// The reference table backing this screener
    #[must_use]
    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    /// Assess a single measurement
    ///
    /// Ages outside the sampled range are clamped to the nearest boundary
    /// sample; the standard itself only covers children up to 60 months, so
    /// a warning is logged for older ages.
    #[must_use]
    pub fn assess(&self, measurement: &Measurement) -> GrowthAssessment {
        if self.config.log_out_of_range && measurement.age_months() > self.config.max_age_months {
            log::warn!(
                "age {} months exceeds the {}-month range of the growth standard; scores use the boundary sample",
                measurement.age_months(),
                self.config.max_age_months
            );
        }

        let standard = self
            .table
            .standard_at(f64::from(measurement.age_months()), measurement.sex());
        debug_assert!(
            standard.height_mean_cm > 0.0
                && standard.height_sd_cm > 0.0
                && standard.weight_sd_kg > 0.0,
            "reference statistics are positive by table construction"
        );

        let height_for_age =
            (measurement.height_cm() - standard.height_mean_cm) / standard.height_sd_cm;
        let weight_for_age =
            (measurement.weight_kg() - standard.weight_mean_kg) / standard.weight_sd_kg;

        // Simplified weight-for-height: the expected weight scales the
        // reference weight by the child's height relative to the reference
        // height. Proportional approximation, not the WHO height-indexed
        // weight-for-height table.
        let expected_weight =
            standard.weight_mean_kg * (measurement.height_cm() / standard.height_mean_cm);
        let weight_for_height =
            (measurement.weight_kg() - expected_weight) / standard.weight_sd_kg;

        let assessment =
            GrowthAssessment::from_raw_scores(height_for_age, weight_for_age, weight_for_height);
        log::debug!(
            "assessed {} child at {} months: HFA {:.2}, WFA {:.2}, WFH {:.2}",
            measurement.sex(),
            measurement.age_months(),
            assessment.height_for_age,
            assessment.weight_for_age,
            assessment.weight_for_height
        );
        assessment
    }

    /// Assess a raw record: height, weight, ISO birth date, and sex
    ///
    /// Derives the age at `reference_date`, validates the measurement, and
    /// assesses it. An empty or invalid birth date is treated as age 0, as
    /// in [`age_in_months_from_iso`]; callers should validate required
    /// fields upstream.
    pub fn assess_record(
        &self,
        height_cm: f64,
        weight_kg: f64,
        birth_iso: &str,
        sex: Sex,
        reference_date: NaiveDate,
    ) -> Result<GrowthAssessment> {
        let age_months = age_in_months_from_iso(birth_iso, reference_date);
        let measurement = Measurement::new(height_cm, weight_kg, age_months, sex)?;
        Ok(self.assess(&measurement))
    }
}
