use crate::commands::base_commands::Commands;
use crate::domain::parameters::SimulationParameters;
use crate::services::params_yaml::serialize_parameters_to_yaml;

pub fn init_command(cmd: Commands) {
    if let Commands::Init { output } = cmd {
        let params = SimulationParameters::default();
        let mut buffer = Vec::new();
        if let Err(e) = serialize_parameters_to_yaml(&mut buffer, &params) {
            eprintln!("Failed to serialize default parameters: {e}");
            std::process::exit(1);
        }
        if let Err(e) = std::fs::write(&output, buffer) {
            eprintln!("Failed to write parameter file: {e}");
            std::process::exit(1);
        }
        println!("Default parameters written to {output}");
    }
}
