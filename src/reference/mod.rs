//! Growth reference tables
//!
//! This module contains the reference sample model, the validated table
//! that owns a set of samples, and age interpolation over the table. The
//! built-in table carries the WHO Child Growth Standards 2006 samples;
//! callers and tests may substitute alternate tables through
//! [`ReferenceTable::new`].

mod who;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{GrowthScreenError, Result};
use crate::models::types::Sex;

/// One (age, sex) sample of the growth reference
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSample {
    /// Age in whole months
    pub age_months: u32,
    /// Sex the sample applies to
    pub sex: Sex,
    /// Mean height in centimetres
    pub height_mean_cm: f64,
    /// Height standard deviation in centimetres
    pub height_sd_cm: f64,
    /// Mean weight in kilograms
    pub weight_mean_kg: f64,
    /// Weight standard deviation in kilograms
    pub weight_sd_kg: f64,
}

/// Reference statistics at a specific age, interpolated where necessary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthStandard {
    /// Mean height in centimetres
    pub height_mean_cm: f64,
    /// Height standard deviation in centimetres
    pub height_sd_cm: f64,
    /// Mean weight in kilograms
    pub weight_mean_kg: f64,
    /// Weight standard deviation in kilograms
    pub weight_sd_kg: f64,
}

impl From<&ReferenceSample> for GrowthStandard {
    fn from(sample: &ReferenceSample) -> Self {
        Self {
            height_mean_cm: sample.height_mean_cm,
            height_sd_cm: sample.height_sd_cm,
            weight_mean_kg: sample.weight_mean_kg,
            weight_sd_kg: sample.weight_sd_kg,
        }
    }
}

/// An immutable, validated set of growth reference samples
///
/// Invariants, checked at construction: every statistic is finite and
/// strictly positive, each sex has at least one sample, and each (sex, age)
/// pair appears exactly once. Samples are stored sorted by sex and
/// ascending age so lookups never re-sort.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    samples: Vec<ReferenceSample>,
}

impl ReferenceTable {
    /// Build a table from arbitrary samples, validating the invariants
    pub fn new(mut samples: Vec<ReferenceSample>) -> Result<Self> {
        for sample in &samples {
            let stats = [
                sample.height_mean_cm,
                sample.height_sd_cm,
                sample.weight_mean_kg,
                sample.weight_sd_kg,
            ];
            if stats.iter().any(|v| !v.is_finite() || *v <= 0.0) {
                return Err(GrowthScreenError::InvalidReferenceTable(format!(
                    "sample at {} months ({}) has a non-positive statistic",
                    sample.age_months, sample.sex
                )));
            }
        }

        samples.sort_by_key(|s| (s.sex, s.age_months));

        if samples
            .iter()
            .tuple_windows()
            .any(|(a, b)| a.sex == b.sex && a.age_months == b.age_months)
        {
            return Err(GrowthScreenError::InvalidReferenceTable(
                "duplicate (sex, age) sample".to_string(),
            ));
        }

        for sex in [Sex::Male, Sex::Female] {
            if !samples.iter().any(|s| s.sex == sex) {
                return Err(GrowthScreenError::InvalidReferenceTable(format!(
                    "no samples for sex: {sex}"
                )));
            }
        }

        Ok(Self { samples })
    }

    /// The built-in WHO Child Growth Standards 2006 table
    #[must_use]
    pub fn who_2006() -> Self {
        Self::new(who::WHO_2006_SAMPLES.to_vec()).expect("built-in WHO 2006 table is valid")
    }

    /// All samples, sorted by sex and ascending age
    #[must_use]
    pub fn samples(&self) -> &[ReferenceSample] {
        &self.samples
    }

    /// Smallest and largest sampled age for a sex
    #[must_use]
    pub fn age_range(&self, sex: Sex) -> (u32, u32) {
        let mut ages = self.samples_for(sex).map(|s| s.age_months);
        let first = ages.next().unwrap_or(0);
        let last = ages.last().unwrap_or(first);
        (first, last)
    }

    /// Reference statistics at an arbitrary age for a sex
    ///
    /// Ages at or outside the sampled range return the boundary sample
    /// unchanged (no extrapolation). In between, each statistic is linearly
    /// interpolated between the two bracketing samples; an age equal to a
    /// sampled age takes the lower end of its half-open bracket (ratio 0)
    /// and so returns that sample exactly.
    #[must_use]
    pub fn standard_at(&self, age_months: f64, sex: Sex) -> GrowthStandard {
        let samples: Vec<&ReferenceSample> = self.samples_for(sex).collect();
        debug_assert!(!samples.is_empty(), "table holds samples for both sexes");

        let first = samples[0];
        let last = samples[samples.len() - 1];
        if age_months <= f64::from(first.age_months) {
            return first.into();
        }
        if age_months >= f64::from(last.age_months) {
            return last.into();
        }

        for (lower, upper) in samples.iter().tuple_windows() {
            let lower_age = f64::from(lower.age_months);
            let upper_age = f64::from(upper.age_months);
            if age_months >= lower_age && age_months < upper_age {
                let ratio = (age_months - lower_age) / (upper_age - lower_age);
                return GrowthStandard {
                    height_mean_cm: lower.height_mean_cm
                        + (upper.height_mean_cm - lower.height_mean_cm) * ratio,
                    height_sd_cm: lower.height_sd_cm
                        + (upper.height_sd_cm - lower.height_sd_cm) * ratio,
                    weight_mean_kg: lower.weight_mean_kg
                        + (upper.weight_mean_kg - lower.weight_mean_kg) * ratio,
                    weight_sd_kg: lower.weight_sd_kg
                        + (upper.weight_sd_kg - lower.weight_sd_kg) * ratio,
                };
            }
        }

        // Unreachable for finite ages: the brackets cover the full range
        last.into()
    }

    /// All samples for one sex, ascending by age
    fn samples_for(&self, sex: Sex) -> impl Iterator<Item = &ReferenceSample> {
        self.samples.iter().filter(move |s| s.sex == sex)
    }
}
