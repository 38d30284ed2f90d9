//! Growth assessment result model

use serde::{Deserialize, Serialize};

use crate::algorithm::classify;
use crate::models::types::{StuntingStatus, UnderweightStatus, WastingStatus};
use crate::utils::rounding::round_to_places;

/// Result of assessing one measurement against the growth standard
///
/// Z-scores are rounded to two decimal places; the status fields and the
/// `is_stunted` flag are derived from the rounded scores, so the stored
/// fields are always mutually consistent. Field names and status labels
/// serialize in the form the dashboard stores (`heightForAge`,
/// `"Stunting Berat"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthAssessment {
    /// Height-for-age Z-score
    pub height_for_age: f64,
    /// Weight-for-age Z-score
    pub weight_for_age: f64,
    /// Weight-for-height Z-score (proportional approximation)
    pub weight_for_height: f64,
    /// Height-for-age status tier
    pub stunting_status: StuntingStatus,
    /// Weight-for-age status tier
    pub underweight_status: UnderweightStatus,
    /// Weight-for-height status tier
    pub wasting_status: WastingStatus,
    /// Binary stunting flag, true for both stunting tiers
    pub is_stunted: bool,
}

impl GrowthAssessment {
    /// Build an assessment from raw (unrounded) Z-scores
    ///
    /// Rounds each score to two decimal places, then classifies the rounded
    /// values.
    #[must_use]
    pub fn from_raw_scores(height_for_age: f64, weight_for_age: f64, weight_for_height: f64) -> Self {
        let height_for_age = round_to_places(height_for_age, 2);
        let weight_for_age = round_to_places(weight_for_age, 2);
        let weight_for_height = round_to_places(weight_for_height, 2);

        Self {
            height_for_age,
            weight_for_age,
            weight_for_height,
            stunting_status: classify::stunting_status(height_for_age),
            underweight_status: classify::underweight_status(weight_for_age),
            wasting_status: classify::wasting_status(weight_for_height),
            is_stunted: classify::is_stunted(height_for_age),
        }
    }
}
