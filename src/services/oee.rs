/// Overall Equipment Effectiveness: availability × performance × quality.
///
/// Each factor is clamped to [0, 1] before multiplying, so a derived factor
/// that drifts out of range (negative utilization from excess downtime,
/// performance above 1 from a misconfigured capacity) cannot push the OEE
/// outside [0, 1].
pub fn oee(availability: f64, performance: f64, quality: f64) -> f64 {
    clamp_unit(availability) * clamp_unit(performance) * clamp_unit(quality)
}

fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oee_multiplies_in_range_factors() {
        assert_eq!(oee(1.0, 1.0, 1.0), 1.0);
        assert_eq!(oee(0.5, 0.5, 0.5), 0.125);
        assert_eq!(oee(0.9375, 0.9375, 1.0), 0.9375 * 0.9375);
    }

    #[test]
    fn oee_clamps_factors_above_one() {
        assert_eq!(oee(1.5, 2.0, 1.1), 1.0);
        assert_eq!(oee(0.5, 3.0, 1.0), 0.5);
    }

    #[test]
    fn oee_clamps_negative_factors_to_zero() {
        assert_eq!(oee(-0.2, 0.9, 0.9), 0.0);
        assert_eq!(oee(0.9, -1.0, 0.9), 0.0);
    }
}
