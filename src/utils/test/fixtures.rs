//! Synthetic measurement fixtures
//!
//! Generators for plausible child measurements, used by the test suite to
//! exercise the assessment pipeline across the supported age range.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::measurement::Measurement;
use crate::models::types::Sex;
use crate::reference::ReferenceTable;

/// Deterministic RNG for reproducible fixtures
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generate a random valid measurement within the 0-60 month range
///
/// Heights and weights are drawn around the reference statistics at the
/// sampled age, spanning roughly -5 to +5 standard deviations so every
/// status tier is reachable.
pub fn random_measurement<R: Rng>(rng: &mut R, table: &ReferenceTable) -> Measurement {
    let sex = if rng.random_bool(0.5) {
        Sex::Male
    } else {
        Sex::Female
    };
    let age_months = rng.random_range(0..=60);
    let standard = table.standard_at(f64::from(age_months), sex);

    let height_cm =
        (standard.height_mean_cm + standard.height_sd_cm * rng.random_range(-5.0..5.0)).max(1.0);
    let weight_kg =
        (standard.weight_mean_kg + standard.weight_sd_kg * rng.random_range(-5.0..5.0)).max(0.1);

    Measurement::new(height_cm, weight_kg, age_months, sex)
        .expect("generated measurement values are positive")
}
