use thiserror::Error;

use crate::domain::parameters::{ParameterError, ParameterWarning, SimulationParameters};
use crate::domain::production::{DaySeriesPoint, SimulationResult};
use crate::services::downtime_sampler::{DowntimeSampler, HourlyDowntimeSampler};
use crate::services::oee::oee;
use crate::services::params_yaml::{ParamsYamlError, deserialize_parameters_from_yaml_str};

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("failed to read parameter file: {0}")]
    ReadParams(#[from] std::io::Error),
    #[error("failed to parse parameter yaml: {0}")]
    ParseParams(#[from] ParamsYamlError),
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),
}

pub(crate) fn simulate_from_params_file(
    params_path: &str,
) -> Result<(SimulationResult, Vec<ParameterWarning>), SimulationError> {
    let params_yaml = std::fs::read_to_string(params_path)?;
    let params = deserialize_parameters_from_yaml_str(&params_yaml)?;
    let warnings = params.warnings();
    let result = run_simulation(&params)?;
    Ok((result, warnings))
}

pub(crate) fn run_simulation(
    params: &SimulationParameters,
) -> Result<SimulationResult, SimulationError> {
    let mut sampler = HourlyDowntimeSampler::new(rand::thread_rng());
    run_simulation_with_sampler(params, &mut sampler)
}

pub(crate) fn run_simulation_with_sampler<S: DowntimeSampler + ?Sized>(
    params: &SimulationParameters,
    sampler: &mut S,
) -> Result<SimulationResult, SimulationError> {
    params.validate()?;

    let minutes_per_shift = params.shift_hours * 60.0;
    // May be negative when planned downtime fills the shift; the per-shift
    // clamp below keeps production at zero in that case.
    let base_runtime = minutes_per_shift - params.planned_downtime;
    let quality_factor = params.quality_rate / 100.0;
    let ideal_throughput = params.capacity * params.shift_hours;

    let mut series = Vec::with_capacity(params.days);
    let mut total_downtime_minutes = 0.0;
    let mut total_scrap = 0.0;
    let mut total_good = 0.0;

    for day in 1..=params.days {
        let mut day_production = 0.0;
        for _ in 0..params.shifts_per_day {
            let downtime = sampler.sample(
                params.shift_hours,
                params.unplanned_probability,
                params.setup_time,
            );

            let effective_runtime = (base_runtime - downtime.total).max(0.0);
            let produced_units = effective_runtime / 60.0 * params.capacity;
            let good_units = produced_units * quality_factor;
            let scrap_units = (produced_units - good_units).max(0.0);

            day_production += good_units;
            total_good += good_units;
            total_scrap += scrap_units;
            total_downtime_minutes += params.planned_downtime + downtime.total + downtime.setup;
        }

        series.push(DaySeriesPoint {
            day,
            good_units: day_production,
        });
    }

    let total_shifts = (params.days * params.shifts_per_day) as f64;
    let avg_daily_output = guarded_div(total_good, params.days as f64);
    let per_shift_output = guarded_div(total_good, total_shifts);
    let total_runtime = total_shifts * minutes_per_shift;
    let utilization = if total_runtime > 0.0 {
        (total_runtime - total_downtime_minutes) / total_runtime
    } else {
        0.0
    };
    let performance = guarded_div(per_shift_output, ideal_throughput);
    let quality = quality_factor;

    Ok(SimulationResult {
        series,
        total_downtime_minutes,
        total_scrap,
        total_good,
        avg_daily_output,
        per_shift_output,
        utilization,
        performance,
        quality,
        oee: oee(utilization, performance, quality),
        throughput_per_hour: guarded_div(per_shift_output, params.shift_hours),
    })
}

// Rates with a zero or negative denominator report as zero instead of NaN.
fn guarded_div(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
