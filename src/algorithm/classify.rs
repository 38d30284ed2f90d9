//! Threshold classification of growth Z-scores
//!
//! Every axis uses the same 4-tier shape with strict `<` cutoffs at -3, -2
//! and -1: a score exactly on a cutoff belongs to the tier above it, so
//! -2.0 falls in the at-risk tier, not the stunting tier.

use crate::models::types::{StuntingStatus, UnderweightStatus, WastingStatus};

/// Classify a height-for-age Z-score
#[must_use]
pub fn stunting_status(z: f64) -> StuntingStatus {
    if z < -3.0 {
        StuntingStatus::SeverelyStunted
    } else if z < -2.0 {
        StuntingStatus::Stunted
    } else if z < -1.0 {
        StuntingStatus::AtRisk
    } else {
        StuntingStatus::Normal
    }
}

/// Classify a weight-for-age Z-score
#[must_use]
pub fn underweight_status(z: f64) -> UnderweightStatus {
    if z < -3.0 {
        UnderweightStatus::SeverelyUnderweight
    } else if z < -2.0 {
        UnderweightStatus::Underweight
    } else if z < -1.0 {
        UnderweightStatus::AtRisk
    } else {
        UnderweightStatus::Normal
    }
}

/// Classify a weight-for-height Z-score
#[must_use]
pub fn wasting_status(z: f64) -> WastingStatus {
    if z < -3.0 {
        WastingStatus::SeverelyWasted
    } else if z < -2.0 {
        WastingStatus::Wasted
    } else if z < -1.0 {
        WastingStatus::AtRisk
    } else {
        WastingStatus::Normal
    }
}

/// Binary stunting flag, true for both stunting tiers
///
/// Referral and notification triggers branch on this flag rather than on
/// the full 4-tier status.
#[must_use]
pub fn is_stunted(height_for_age: f64) -> bool {
    height_for_age < -2.0
}
