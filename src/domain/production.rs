use serde::{Deserialize, Serialize};

/// Good units produced on one simulated day. Days are 1-indexed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DaySeriesPoint {
    pub day: usize,
    pub good_units: f64,
}

/// Aggregated outcome of one simulation run. Built once by the engine and
/// never mutated afterwards; each run produces a wholly new value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub series: Vec<DaySeriesPoint>,
    pub total_downtime_minutes: f64,
    pub total_scrap: f64,
    pub total_good: f64,
    pub avg_daily_output: f64,
    pub per_shift_output: f64,
    pub utilization: f64,
    pub performance: f64,
    pub quality: f64,
    pub oee: f64,
    pub throughput_per_hour: f64,
}
