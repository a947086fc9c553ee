pub mod downtime_sampler;
pub mod oee;
pub mod params_yaml;
pub mod series_plot;
pub mod simulation;
