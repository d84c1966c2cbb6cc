//! Locating and reading the TOML settings of the `gridsketch` command.
//!
//! Settings come from the first source that names a file:
//!
//! | Source | When the file is missing |
//! |--------|--------------------------|
//! | `--config <path>` | error |
//! | `GRIDSKETCH_CONFIG` environment variable | error |
//! | `gridsketch.toml` in the working directory | skipped |
//! | `config.toml` in the platform config directory | skipped |
//!
//! When no file is found the built-in defaults of [`AppConfig`] apply.

use std::{
    env,
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use gridsketch::{GridsketchError, config::AppConfig};

/// Environment variable naming a settings file
pub const CONFIG_ENV: &str = "GRIDSKETCH_CONFIG";

/// Settings file picked up from the working directory
const LOCAL_FILE: &str = "gridsketch.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings in {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl From<ConfigError> for GridsketchError {
    fn from(err: ConfigError) -> Self {
        GridsketchError::Config(err.to_string())
    }
}

/// Where a candidate settings file came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Flag,
    Environment,
    WorkingDir,
    Platform,
}

impl Origin {
    /// Files the user named must exist; discovered ones are optional
    fn is_required(self) -> bool {
        matches!(self, Self::Flag | Self::Environment)
    }
}

/// Loads the settings for one command run.
///
/// # Errors
///
/// Returns [`GridsketchError::Config`] when a named file cannot be read or
/// any chosen file is not valid settings TOML.
pub fn load_config(flag: Option<&Path>) -> Result<AppConfig, GridsketchError> {
    for (origin, path) in candidates(flag, env::var_os(CONFIG_ENV)) {
        if !origin.is_required() && !path.is_file() {
            debug!(origin:?, path:?; "No settings file");
            continue;
        }
        info!(origin:?, path:?; "Reading settings");
        return Ok(read_config(&path)?);
    }

    debug!("Using built-in settings");
    Ok(AppConfig::default())
}

/// Lists the candidate files in lookup order; an empty variable is ignored
fn candidates(flag: Option<&Path>, env_value: Option<OsString>) -> Vec<(Origin, PathBuf)> {
    let mut found = Vec::new();
    if let Some(path) = flag {
        found.push((Origin::Flag, path.to_path_buf()));
    }
    if let Some(value) = env_value.filter(|value| !value.is_empty()) {
        found.push((Origin::Environment, PathBuf::from(value)));
    }
    found.push((Origin::WorkingDir, PathBuf::from(LOCAL_FILE)));
    match ProjectDirs::from("com", "gridsketch", "gridsketch") {
        Some(dirs) => found.push((Origin::Platform, dirs.config_dir().join("config.toml"))),
        None => debug!("No platform config directory"),
    }
    found
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })
}
