//! Configuration for the growth screener.

/// Configuration for the `GrowthScreener`
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    /// Oldest age (in whole months) the growth standard is meant to cover
    pub max_age_months: u32,
    /// Log a warning when a measurement's age falls outside the standard range
    pub log_out_of_range: bool,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            max_age_months: 60,
            log_out_of_range: true,
        }
    }
}
