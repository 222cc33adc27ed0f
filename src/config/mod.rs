//! Config domain: motion tuning loaded from `assets/config/motion.ron`.

mod loader;
mod motion;
#[cfg(test)]
mod tests;

pub use loader::{ConfigLoadError, load_motion_config, parse_motion_config};
pub use motion::{ConfigError, MotionConfig};

use bevy::prelude::*;
use std::path::{Path, PathBuf};

/// Validated motion tuning used when spawning characters.
#[derive(Resource, Debug, Clone, Default)]
pub struct MotionSettings(pub MotionConfig);

pub struct ConfigPlugin {
    pub path: PathBuf,
}

impl Default for ConfigPlugin {
    fn default() -> Self {
        Self {
            path: PathBuf::from("assets/config/motion.ron"),
        }
    }
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(MotionSettings(resolve_motion_config(&self.path)));
    }
}

/// Load and validate the config file, falling back to defaults when either step fails.
pub(crate) fn resolve_motion_config(path: &Path) -> MotionConfig {
    let config = match load_motion_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using default motion config", e);
            return MotionConfig::default();
        }
    };

    match config.validate() {
        Ok(()) => {
            info!("Loaded motion config from {}", path.display());
            config
        }
        Err(errors) => {
            for error in &errors {
                error!("Rejected {}: {}", path.display(), error);
            }
            warn!(
                "{} invalid value(s) in {}; using default motion config",
                errors.len(),
                path.display()
            );
            MotionConfig::default()
        }
    }
}
