use crate::domain::parameters::SimulationParameters;
use crate::services::downtime_sampler::{DowntimeSample, DowntimeSampler};

// A mock sampler that returns the same downtime for every shift.
pub struct FixedDowntimeSampler {
    pub total: f64,
    pub setup: f64,
}

impl DowntimeSampler for FixedDowntimeSampler {
    fn sample(&mut self, _shift_hours: f64, _probability: f64, _setup_time: f64) -> DowntimeSample {
        DowntimeSample {
            total: self.total,
            setup: self.setup,
        }
    }
}

/// A deterministic single-shift configuration: 450 productive minutes at
/// 100 units/hour with perfect quality.
pub fn baseline_parameters() -> SimulationParameters {
    SimulationParameters {
        capacity: 100.0,
        shift_hours: 8.0,
        planned_downtime: 30.0,
        unplanned_probability: 0.0,
        quality_rate: 100.0,
        days: 1,
        shifts_per_day: 1,
        setup_time: 20.0,
    }
}
