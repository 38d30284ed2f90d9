//! A Rust library for assessing child growth against the WHO Child Growth
//! Standards: Z-score computation, stunting risk classification, advisory
//! recommendations, and cohort screening statistics.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod reference;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::ScreeningConfig;
pub use error::{GrowthScreenError, Result};
pub use models::{
    GrowthAssessment, Measurement, Sex, StuntingStatus, UnderweightStatus, WastingStatus,
};
pub use reference::{GrowthStandard, ReferenceSample, ReferenceTable};

// Assessment pipeline
pub use algorithm::age::{age_in_months, age_in_months_from_iso, current_age_in_months};
pub use algorithm::assess::GrowthScreener;
pub use algorithm::recommend::recommendations;

// Screening statistics
pub use algorithm::statistics::{
    CohortStatistics, GroupPrevalence, PrevalenceBand, TrendPoint, group_prevalence, monthly_trend,
};
