use crate::domain::production::{DaySeriesPoint, SimulationResult};
use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeriesPlotError {
    #[error("failed to read report file: {0}")]
    ReadReport(#[from] std::io::Error),
    #[error("failed to parse report yaml: {0}")]
    ParseReport(#[from] serde_yaml::Error),
    #[error("report contains an empty production series")]
    EmptySeries,
    #[error("failed to render production chart: {0}")]
    Render(String),
}

pub fn plot_series_from_report_file(
    input_path: &str,
    output_path: &str,
) -> Result<(), SeriesPlotError> {
    let report_yaml = std::fs::read_to_string(input_path)?;
    let result: SimulationResult = serde_yaml::from_str(&report_yaml)?;
    if result.series.is_empty() {
        return Err(SeriesPlotError::EmptySeries);
    }
    write_series_chart_png(output_path, &result.series)
}

/// Line chart of good units per simulated day.
pub fn write_series_chart_png(
    output_path: &str,
    series: &[DaySeriesPoint],
) -> Result<(), SeriesPlotError> {
    if series.is_empty() {
        return Ok(());
    }

    let max_units = series
        .iter()
        .map(|point| point.good_units)
        .fold(f64::NEG_INFINITY, f64::max);
    let max_y = if max_units > 0.0 { max_units * 1.1 } else { 1.0 };
    let max_x = series.len() as i32 + 1;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| SeriesPlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Good Units per Day", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0.0..max_y)
        .map_err(|e| SeriesPlotError::Render(e.to_string()))?;

    let label_count = series.len().min(10).max(1);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Day")
        .y_desc("Good units")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(label_count)
        .draw()
        .map_err(|e| SeriesPlotError::Render(e.to_string()))?;

    let line_color = RGBColor(30, 122, 204);
    chart
        .draw_series(LineSeries::new(
            series.iter().map(|point| (point.day as i32, point.good_units)),
            &line_color,
        ))
        .map_err(|e| SeriesPlotError::Render(e.to_string()))?;
    chart
        .draw_series(series.iter().map(|point| {
            Circle::new(
                (point.day as i32, point.good_units),
                4,
                ShapeStyle::from(&line_color).filled(),
            )
        }))
        .map_err(|e| SeriesPlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| SeriesPlotError::Render(e.to_string()))?;
    Ok(())
}
