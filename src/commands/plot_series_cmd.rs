use crate::commands::base_commands::Commands;
use crate::services::series_plot::plot_series_from_report_file;

pub fn plot_series_command(cmd: Commands) {
    if let Commands::PlotSeries { input, output } = cmd {
        match plot_series_from_report_file(&input, &output) {
            Ok(()) => println!("Production chart written to {output}"),
            Err(e) => {
                eprintln!("Failed to plot production series: {e}");
                std::process::exit(1);
            }
        }
    }
}
