//! Explicit decimal rounding
//!
//! Z-scores are reported to two decimal places. Rounding is half away from
//! zero (`f64::round` on the scaled value): 2.125 rounds to 2.13 and
//! -2.125 to -2.13.

/// Round a value to the given number of decimal places, half away from zero
#[must_use]
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::round_to_places;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to_places(2.125, 2), 2.13);
        assert_eq!(round_to_places(-2.125, 2), -2.13);
    }

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round_to_places(-4.201_388, 2), -4.2);
        assert_eq!(round_to_places(0.004_9, 2), 0.0);
        assert_eq!(round_to_places(1.0, 2), 1.0);
    }
}
