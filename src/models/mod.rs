//! Domain models for growth screening
//!
//! This module contains the measurement input, the assessment result, and
//! the shared enum types used across both.

pub mod assessment;
pub mod measurement;
pub mod types;

pub use assessment::GrowthAssessment;
pub use measurement::Measurement;
pub use types::{Sex, StuntingStatus, UnderweightStatus, WastingStatus};
