//! WHO Child Growth Standards 2006 reference samples
//!
//! Sparse samples of the length/height and weight references for ages 0-60
//! months. Intermediate ages are covered by interpolation in the table.

use crate::models::types::Sex;
use crate::reference::ReferenceSample;

/// Built-in reference samples, one per (sex, sampled age)
pub(crate) const WHO_2006_SAMPLES: [ReferenceSample; 14] = [
    ReferenceSample {
        age_months: 0,
        sex: Sex::Male,
        height_mean_cm: 49.9,
        height_sd_cm: 1.89,
        weight_mean_kg: 3.3,
        weight_sd_kg: 0.39,
    },
    ReferenceSample {
        age_months: 6,
        sex: Sex::Male,
        height_mean_cm: 67.6,
        height_sd_cm: 2.33,
        weight_mean_kg: 7.9,
        weight_sd_kg: 0.78,
    },
    ReferenceSample {
        age_months: 12,
        sex: Sex::Male,
        height_mean_cm: 75.7,
        height_sd_cm: 2.44,
        weight_mean_kg: 9.6,
        weight_sd_kg: 0.89,
    },
    ReferenceSample {
        age_months: 24,
        sex: Sex::Male,
        height_mean_cm: 87.1,
        height_sd_cm: 2.88,
        weight_mean_kg: 12.2,
        weight_sd_kg: 1.12,
    },
    ReferenceSample {
        age_months: 36,
        sex: Sex::Male,
        height_mean_cm: 96.1,
        height_sd_cm: 3.24,
        weight_mean_kg: 14.3,
        weight_sd_kg: 1.38,
    },
    ReferenceSample {
        age_months: 48,
        sex: Sex::Male,
        height_mean_cm: 103.3,
        height_sd_cm: 3.56,
        weight_mean_kg: 16.3,
        weight_sd_kg: 1.68,
    },
    ReferenceSample {
        age_months: 60,
        sex: Sex::Male,
        height_mean_cm: 110.0,
        height_sd_cm: 3.78,
        weight_mean_kg: 18.3,
        weight_sd_kg: 2.01,
    },
    ReferenceSample {
        age_months: 0,
        sex: Sex::Female,
        height_mean_cm: 49.1,
        height_sd_cm: 1.86,
        weight_mean_kg: 3.2,
        weight_sd_kg: 0.38,
    },
    ReferenceSample {
        age_months: 6,
        sex: Sex::Female,
        height_mean_cm: 65.7,
        height_sd_cm: 2.24,
        weight_mean_kg: 7.3,
        weight_sd_kg: 0.74,
    },
    ReferenceSample {
        age_months: 12,
        sex: Sex::Female,
        height_mean_cm: 74.0,
        height_sd_cm: 2.36,
        weight_mean_kg: 9.0,
        weight_sd_kg: 0.85,
    },
    ReferenceSample {
        age_months: 24,
        sex: Sex::Female,
        height_mean_cm: 86.4,
        height_sd_cm: 2.85,
        weight_mean_kg: 11.5,
        weight_sd_kg: 1.08,
    },
    ReferenceSample {
        age_months: 36,
        sex: Sex::Female,
        height_mean_cm: 95.1,
        height_sd_cm: 3.20,
        weight_mean_kg: 13.9,
        weight_sd_kg: 1.35,
    },
    ReferenceSample {
        age_months: 48,
        sex: Sex::Female,
        height_mean_cm: 102.7,
        height_sd_cm: 3.58,
        weight_mean_kg: 15.9,
        weight_sd_kg: 1.66,
    },
    ReferenceSample {
        age_months: 60,
        sex: Sex::Female,
        height_mean_cm: 109.4,
        height_sd_cm: 3.81,
        weight_mean_kg: 17.9,
        weight_sd_kg: 2.03,
    },
];
