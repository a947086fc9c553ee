use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_simulation_report;
use crate::services::series_plot::write_series_chart_png;
use crate::services::simulation::simulate_from_params_file;

pub fn simulate_command(cmd: Commands) {
    if let Commands::Simulate { params, output } = cmd {
        let (result, warnings) = match simulate_from_params_file(&params) {
            Ok(simulation) => simulation,
            Err(e) => {
                eprintln!("Failed to simulate production line: {e}");
                std::process::exit(1);
            }
        };

        for warning in &warnings {
            eprintln!("Warning: {warning}");
        }

        let yaml = match serde_yaml::to_string(&result) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize simulation report: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write simulation report: {e}");
            std::process::exit(1);
        }

        let chart_path = format!("{output}.png");
        if let Err(e) = write_series_chart_png(&chart_path, &result.series) {
            eprintln!("Failed to write production chart: {e}");
            std::process::exit(1);
        }

        println!("{}", format_simulation_report(&result));
        println!();
        println!("Simulation report written to {output}");
        println!("Production chart written to {chart_path}");
    }
}
