//! Mission file loading.

use std::fs;
use std::path::Path;

use super::schema::MissionSpec;
use super::validate::validate_mission;
use crate::error::{Error, Result};

/// Parse and validate a mission from YAML text
pub fn parse_mission(yaml: &str) -> Result<MissionSpec> {
    let spec: MissionSpec = serde_yaml::from_str(yaml)
        .map_err(|e| Error::ConfigError(format!("Failed to parse mission YAML: {e}")))?;
    validate_mission(&spec)?;
    Ok(spec)
}

/// Load a mission from a YAML file
///
/// The file is read, parsed and validated; any failure is reported
/// before a search starts.
pub fn load_mission<P: AsRef<Path>>(path: P) -> Result<MissionSpec> {
    let yaml = fs::read_to_string(path.as_ref()).map_err(|e| {
        let path = path.as_ref().display();
        Error::ConfigError(format!("Failed to read mission file {path}: {e}"))
    })?;
    parse_mission(&yaml)
}
