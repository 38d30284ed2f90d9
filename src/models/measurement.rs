//! Validated anthropometric measurement input

use crate::error::{GrowthScreenError, Result};
use crate::models::types::Sex;

/// A single anthropometric measurement of a child
///
/// Construction validates that height and weight are finite and strictly
/// positive, so the assessment arithmetic never sees NaN or infinity.
///
/// Measurements are transient: one is consumed per assessment and nothing
/// here is persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    height_cm: f64,
    weight_kg: f64,
    age_months: u32,
    sex: Sex,
}

impl Measurement {
    /// Create a validated measurement
    ///
    /// `age_months` is the age in whole months; the growth standard covers
    /// 0-60 months and older ages are clamped during assessment.
    pub fn new(height_cm: f64, weight_kg: f64, age_months: u32, sex: Sex) -> Result<Self> {
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(GrowthScreenError::InvalidMeasurement(format!(
                "height must be a positive number of centimetres, got {height_cm}"
            )));
        }
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(GrowthScreenError::InvalidMeasurement(format!(
                "weight must be a positive number of kilograms, got {weight_kg}"
            )));
        }

        Ok(Self {
            height_cm,
            weight_kg,
            age_months,
            sex,
        })
    }

    /// Height in centimetres
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Age in whole months
    #[must_use]
    pub const fn age_months(&self) -> u32 {
        self.age_months
    }

    /// Sex of the child
    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }
}
