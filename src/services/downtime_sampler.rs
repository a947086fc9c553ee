use rand::Rng;

/// Unplanned stoppage minutes accumulated over one shift, plus the setup
/// penalty incurred when at least one stoppage happened.
#[derive(Debug, Clone, PartialEq)]
pub struct DowntimeSample {
    pub total: f64,
    pub setup: f64,
}

pub trait DowntimeSampler {
    fn sample(&mut self, shift_hours: f64, probability: f64, setup_time: f64) -> DowntimeSample;
}

/// Models one independent stoppage opportunity per whole hour of a shift.
/// A stoppage occurs with `probability` percent chance and lasts a uniform
/// 5 to 25 minutes. Any stoppage at all costs a single `setup_time` restart
/// regardless of how many occurred.
pub struct HourlyDowntimeSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> HourlyDowntimeSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DowntimeSampler for HourlyDowntimeSampler<R> {
    fn sample(&mut self, shift_hours: f64, probability: f64, setup_time: f64) -> DowntimeSample {
        // Fractional shifts are floored to whole-hour trials, minimum one.
        let hours = (shift_hours.floor() as usize).max(1);
        let mut total = 0.0;

        for _ in 0..hours {
            let event_roll = self.rng.gen_range(0.0..100.0);
            if event_roll < probability {
                total += self.rng.gen_range(5.0..25.0);
            }
        }

        let setup = if total > 0.0 { setup_time } else { 0.0 };
        DowntimeSample { total, setup }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_probability_never_samples_downtime() {
        let mut sampler = HourlyDowntimeSampler::new(StdRng::seed_from_u64(7));
        for _ in 0..100 {
            let sample = sampler.sample(8.0, 0.0, 20.0);
            assert_eq!(sample, DowntimeSample { total: 0.0, setup: 0.0 });
        }
    }

    #[test]
    fn certain_probability_samples_every_hour() {
        let mut sampler = HourlyDowntimeSampler::new(StdRng::seed_from_u64(7));
        let sample = sampler.sample(8.0, 100.0, 20.0);

        // Eight stoppages of 5..25 minutes each.
        assert!(sample.total >= 40.0);
        assert!(sample.total < 200.0);
        assert_eq!(sample.setup, 20.0);
    }

    #[test]
    fn fractional_shift_hours_floor_to_whole_trials() {
        let mut sampler = HourlyDowntimeSampler::new(StdRng::seed_from_u64(42));
        // 1.9 hours => exactly one trial.
        let sample = sampler.sample(1.9, 100.0, 0.0);
        assert!(sample.total >= 5.0);
        assert!(sample.total < 25.0);
    }

    #[test]
    fn sub_hour_shift_still_runs_one_trial() {
        let mut sampler = HourlyDowntimeSampler::new(StdRng::seed_from_u64(42));
        let sample = sampler.sample(0.5, 100.0, 10.0);
        assert!(sample.total >= 5.0);
        assert!(sample.total < 25.0);
        assert_eq!(sample.setup, 10.0);
    }

    #[test]
    fn setup_penalty_is_zero_without_stoppages() {
        let mut sampler = HourlyDowntimeSampler::new(StdRng::seed_from_u64(1));
        let sample = sampler.sample(12.0, 0.0, 45.0);
        assert_eq!(sample.setup, 0.0);
    }
}
