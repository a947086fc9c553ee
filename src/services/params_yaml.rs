use crate::domain::parameters::SimulationParameters;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParamsYamlError {
    #[error("failed to parse parameter yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub fn deserialize_parameters_from_yaml_str(
    yaml: &str,
) -> Result<SimulationParameters, ParamsYamlError> {
    Ok(serde_yaml::from_str(yaml)?)
}

pub fn serialize_parameters_to_yaml<W: Write>(
    writer: &mut W,
    params: &SimulationParameters,
) -> io::Result<()> {
    let yaml = serde_yaml::to_string(params)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writer.write_all(yaml.as_bytes())
}
