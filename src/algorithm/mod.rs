//! Algorithm implementations for growth screening
//!
//! This module contains the assessment pipeline: age derivation, Z-score
//! computation, status classification, advisory recommendations, and
//! cohort-level screening statistics.

pub mod age;
pub mod assess;
pub mod classify;
pub mod recommend;
pub mod statistics;
