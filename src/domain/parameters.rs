use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("capacity must be greater than zero")]
    NonPositiveCapacity,
    #[error("shift hours must be greater than zero")]
    NonPositiveShiftHours,
    #[error("planned downtime must not be negative")]
    NegativePlannedDowntime,
    #[error("unplanned probability must be between 0 and 100")]
    ProbabilityOutOfRange,
    #[error("quality rate must be between 0 and 100")]
    QualityRateOutOfRange,
    #[error("days must be greater than zero")]
    ZeroDays,
    #[error("shifts per day must be greater than zero")]
    ZeroShiftsPerDay,
    #[error("setup time must not be negative")]
    NegativeSetupTime,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterWarning {
    #[error(
        "planned downtime ({planned_downtime} min) is at least the shift length ({minutes_per_shift} min); every shift will produce zero units"
    )]
    PlannedDowntimeFillsShift {
        planned_downtime: f64,
        minutes_per_shift: f64,
    },
}

/// Operating parameters for one simulation run.
///
/// Missing fields in a parameter file fall back to the defaults below, so a
/// partial file is accepted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationParameters {
    /// Units produced per hour when running at full rate.
    pub capacity: f64,
    /// Length of one shift in hours.
    pub shift_hours: f64,
    /// Scheduled non-productive minutes per shift.
    pub planned_downtime: f64,
    /// Percent chance, evaluated independently each hour, of an unplanned stoppage.
    pub unplanned_probability: f64,
    /// Percent of produced units that are non-defective.
    pub quality_rate: f64,
    /// Number of days simulated.
    pub days: usize,
    /// Number of shifts per day.
    pub shifts_per_day: usize,
    /// Minutes added once per shift if any unplanned stoppage occurred.
    pub setup_time: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            capacity: 100.0,
            shift_hours: 8.0,
            planned_downtime: 30.0,
            unplanned_probability: 15.0,
            quality_rate: 95.0,
            days: 7,
            shifts_per_day: 1,
            setup_time: 20.0,
        }
    }
}

impl SimulationParameters {
    /// Rejects values outside the documented ranges. Non-finite values fail
    /// the same checks.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.capacity > 0.0 && self.capacity.is_finite()) {
            return Err(ParameterError::NonPositiveCapacity);
        }
        if !(self.shift_hours > 0.0 && self.shift_hours.is_finite()) {
            return Err(ParameterError::NonPositiveShiftHours);
        }
        if !(self.planned_downtime >= 0.0 && self.planned_downtime.is_finite()) {
            return Err(ParameterError::NegativePlannedDowntime);
        }
        if !(self.unplanned_probability >= 0.0 && self.unplanned_probability <= 100.0) {
            return Err(ParameterError::ProbabilityOutOfRange);
        }
        if !(self.quality_rate >= 0.0 && self.quality_rate <= 100.0) {
            return Err(ParameterError::QualityRateOutOfRange);
        }
        if self.days == 0 {
            return Err(ParameterError::ZeroDays);
        }
        if self.shifts_per_day == 0 {
            return Err(ParameterError::ZeroShiftsPerDay);
        }
        if !(self.setup_time >= 0.0 && self.setup_time.is_finite()) {
            return Err(ParameterError::NegativeSetupTime);
        }
        Ok(())
    }

    /// Configurations that are accepted but almost certainly mistakes.
    /// The engine clamps the resulting negative runtime to zero, so these
    /// runs complete but produce nothing.
    pub fn warnings(&self) -> Vec<ParameterWarning> {
        let mut warnings = Vec::new();
        let minutes_per_shift = self.shift_hours * 60.0;
        if self.planned_downtime >= minutes_per_shift {
            warnings.push(ParameterWarning::PlannedDowntimeFillsShift {
                planned_downtime: self.planned_downtime,
                minutes_per_shift,
            });
        }
        warnings
    }
}
