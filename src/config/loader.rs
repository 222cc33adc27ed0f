//! Loader for the RON motion config file.

use ron::Options;
use std::fs;
use std::path::Path;

use super::motion::MotionConfig;

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Read and parse a motion config file. Range checks are left to the caller.
pub fn load_motion_config(path: &Path) -> Result<MotionConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_motion_config(&contents, &file_name)
}

/// Parse motion config RON text. Missing fields keep their default values.
pub fn parse_motion_config(contents: &str, file_name: &str) -> Result<MotionConfig, ConfigLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}
