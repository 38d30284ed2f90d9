//! Common domain type definitions
//!
//! This module contains the enum types shared across the screening models:
//! the child's sex and the categorical status for each assessment axis.
//! Status labels are the Indonesian terms the surrounding dashboard
//! displays and persists.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GrowthScreenError, Result};

/// Sex of a child, as indexed by the growth reference tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Parse a sex from common textual encodings
    ///
    /// The assessment is meaningless without a sex, so there is no unknown
    /// fallback; unrecognized input is an error.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "1" | "l" | "laki-laki" => Ok(Self::Male),
            "f" | "female" | "2" | "p" | "perempuan" => Ok(Self::Female),
            other => Err(GrowthScreenError::InvalidMeasurement(format!(
                "unrecognized sex: {other}"
            ))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// Height-for-age status tiers
///
/// Ordered by severity: `Normal < AtRisk < Stunted < SeverelyStunted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StuntingStatus {
    /// Z-score >= -1
    Normal,
    /// -2 <= Z-score < -1
    #[serde(rename = "Risiko Stunting")]
    AtRisk,
    /// -3 <= Z-score < -2
    #[serde(rename = "Stunting")]
    Stunted,
    /// Z-score < -3
    #[serde(rename = "Stunting Berat")]
    SeverelyStunted,
}

impl StuntingStatus {
    /// Convert a numeric tier (0-3) to `StuntingStatus`
    #[must_use]
    pub const fn from_i32(value: i32) -> Self {
        match value {
            1 => Self::AtRisk,
            2 => Self::Stunted,
            3 => Self::SeverelyStunted,
            _ => Self::Normal,
        }
    }

    /// Get the numeric tier for this status
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the display label for this status
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::AtRisk => "Risiko Stunting",
            Self::Stunted => "Stunting",
            Self::SeverelyStunted => "Stunting Berat",
        }
    }

    /// Whether this tier counts as a stunting case in reports
    #[must_use]
    pub const fn is_case(self) -> bool {
        matches!(self, Self::Stunted | Self::SeverelyStunted)
    }
}

impl fmt::Display for StuntingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Weight-for-age status tiers
///
/// Ordered by severity: `Normal < AtRisk < Underweight < SeverelyUnderweight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UnderweightStatus {
    /// Z-score >= -1
    Normal,
    /// -2 <= Z-score < -1
    #[serde(rename = "Risiko Gizi Kurang")]
    AtRisk,
    /// -3 <= Z-score < -2
    #[serde(rename = "Gizi Kurang")]
    Underweight,
    /// Z-score < -3
    #[serde(rename = "Gizi Buruk")]
    SeverelyUnderweight,
}

impl UnderweightStatus {
    /// Convert a numeric tier (0-3) to `UnderweightStatus`
    #[must_use]
    pub const fn from_i32(value: i32) -> Self {
        match value {
            1 => Self::AtRisk,
            2 => Self::Underweight,
            3 => Self::SeverelyUnderweight,
            _ => Self::Normal,
        }
    }

    /// Get the numeric tier for this status
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the display label for this status
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::AtRisk => "Risiko Gizi Kurang",
            Self::Underweight => "Gizi Kurang",
            Self::SeverelyUnderweight => "Gizi Buruk",
        }
    }

    /// Whether this tier counts as an underweight case in reports
    #[must_use]
    pub const fn is_case(self) -> bool {
        matches!(self, Self::Underweight | Self::SeverelyUnderweight)
    }
}

impl fmt::Display for UnderweightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Weight-for-height status tiers
///
/// Ordered by severity: `Normal < AtRisk < Wasted < SeverelyWasted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WastingStatus {
    /// Z-score >= -1
    Normal,
    /// -2 <= Z-score < -1
    #[serde(rename = "Risiko Kurus")]
    AtRisk,
    /// -3 <= Z-score < -2
    #[serde(rename = "Kurus")]
    Wasted,
    /// Z-score < -3
    #[serde(rename = "Kurus Berat")]
    SeverelyWasted,
}

impl WastingStatus {
    /// Convert a numeric tier (0-3) to `WastingStatus`
    #[must_use]
    pub const fn from_i32(value: i32) -> Self {
        match value {
            1 => Self::AtRisk,
            2 => Self::Wasted,
            3 => Self::SeverelyWasted,
            _ => Self::Normal,
        }
    }

    /// Get the numeric tier for this status
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the display label for this status
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::AtRisk => "Risiko Kurus",
            Self::Wasted => "Kurus",
            Self::SeverelyWasted => "Kurus Berat",
        }
    }

    /// Whether this tier counts as a wasting case in reports
    #[must_use]
    pub const fn is_case(self) -> bool {
        matches!(self, Self::Wasted | Self::SeverelyWasted)
    }
}

impl fmt::Display for WastingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
