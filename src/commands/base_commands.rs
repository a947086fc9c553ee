use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the production-line simulation from a parameter file
    Simulate {
        /// Parameter YAML file
        #[arg(short, long)]
        params: String,
        /// Output YAML report file
        #[arg(short, long)]
        output: String,
    },
    /// Write a parameter file with the default operating values
    Init {
        /// Output parameter YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Plot the day-by-day production series from a saved report
    PlotSeries {
        /// Report YAML file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
