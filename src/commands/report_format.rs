use crate::domain::production::SimulationResult;

/// Plain-text KPI panel for one simulation run.
pub fn format_simulation_report(result: &SimulationResult) -> String {
    let mut lines = Vec::new();
    lines.push("Production Line Report".to_string());
    lines.push(format!("Utilization: {}", format_percentage(result.utilization)));
    lines.push(format!("Performance: {}", format_percentage(result.performance)));
    lines.push(format!("Quality: {}", format_percentage(result.quality)));
    lines.push(format!("OEE: {}", format_percentage(result.oee)));
    lines.push(format!(
        "Throughput: {:.0} units/h",
        result.throughput_per_hour
    ));
    lines.push(String::new());
    lines.push(format!(
        "Average daily output: {:.0} units",
        result.avg_daily_output
    ));
    lines.push(format!(
        "Output per shift: {:.0} units",
        result.per_shift_output
    ));
    lines.push(format!("Total good units: {:.0}", result.total_good));
    lines.push(format!("Total scrap: {:.0} units", result.total_scrap));
    lines.push(format!(
        "Total downtime: {}",
        format_hours(result.total_downtime_minutes)
    ));

    lines.join("\n")
}

fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

fn format_hours(minutes: f64) -> String {
    format!("{:.1} h", minutes / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::production::DaySeriesPoint;

    fn build_result() -> SimulationResult {
        SimulationResult {
            series: vec![DaySeriesPoint { day: 1, good_units: 750.0 }],
            total_downtime_minutes: 30.0,
            total_scrap: 0.0,
            total_good: 750.0,
            avg_daily_output: 750.0,
            per_shift_output: 750.0,
            utilization: 0.9375,
            performance: 0.9375,
            quality: 1.0,
            oee: 0.87890625,
            throughput_per_hour: 93.75,
        }
    }

    #[test]
    fn format_simulation_report_includes_kpis_and_stats() {
        let output = format_simulation_report(&build_result());

        assert!(output.contains("Production Line Report"));
        assert!(output.contains("Utilization: 93.8%"));
        assert!(output.contains("Performance: 93.8%"));
        assert!(output.contains("Quality: 100.0%"));
        assert!(output.contains("OEE: 87.9%"));
        assert!(output.contains("Throughput: 94 units/h"));
        assert!(output.contains("Average daily output: 750 units"));
        assert!(output.contains("Output per shift: 750 units"));
        assert!(output.contains("Total good units: 750"));
        assert!(output.contains("Total scrap: 0 units"));
        assert!(output.contains("Total downtime: 0.5 h"));
    }
}
