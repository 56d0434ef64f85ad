// src/system/config_loader.rs

use crate::{
    constants::{CONFIG_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILENAME, MAX_PRECISION},
    models::TimerConfig,
};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Failure to load the reporter configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Could not read config file '{path}': {source}")]
    Read {
        /// The file path.
        path: String,
        /// The I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for a `TimerConfig`.
    #[error("Could not parse config file '{path}': {source}")]
    Parse {
        /// The file path.
        path: String,
        /// The TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// `TIMEWRAP_CONFIG` referenced an undefined variable or home directory.
    #[error("Failed to expand config path '{template}': {message}")]
    Expand {
        /// The unexpanded value.
        template: String,
        /// Why expansion failed.
        message: String,
    },
    /// `precision` is larger than nanosecond resolution.
    #[error("Precision {0} is out of range (0..={max}).", max = MAX_PRECISION)]
    InvalidPrecision(usize),
}

/// Where a config path came from. Only the implicit default location may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given by the caller.
    Explicit(PathBuf),
    /// Read from `TIMEWRAP_CONFIG`.
    Environment(PathBuf),
    /// The file in the system config directory.
    Default(PathBuf),
}

impl ConfigSource {
    /// The path regardless of origin.
    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(p) | Self::Environment(p) | Self::Default(p) => p,
        }
    }
}

/// Loads the reporter configuration.
///
/// Lookup order:
/// 1. `explicit` (e.g. `--config` on the command line);
/// 2. the `TIMEWRAP_CONFIG` environment variable, with `~` and `$VAR` expanded;
/// 3. `<config dir>/timewrap/timewrap.toml`.
///
/// If the default file does not exist the built-in defaults are returned. A path given
/// explicitly or through the environment must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<TimerConfig, ConfigError> {
    let source = resolve_config_source(explicit, env::var(CONFIG_ENV_VAR).ok())?;
    match source {
        Some(ConfigSource::Default(path)) if !path.exists() => {
            log::debug!(
                "No config file at '{}'. Using defaults.",
                path.display()
            );
            Ok(TimerConfig::default())
        }
        Some(source) => load_config_from(source.path()),
        None => {
            log::debug!("System config directory not found. Using defaults.");
            Ok(TimerConfig::default())
        }
    }
}

/// Picks the config file location without touching the filesystem.
pub fn resolve_config_source(
    explicit: Option<&Path>,
    env_value: Option<String>,
) -> Result<Option<ConfigSource>, ConfigError> {
    if let Some(path) = explicit {
        return Ok(Some(ConfigSource::Explicit(path.to_path_buf())));
    }

    if let Some(template) = env_value.filter(|v| !v.trim().is_empty()) {
        let expanded = shellexpand::full(&template).map_err(|e| ConfigError::Expand {
            template: template.clone(),
            message: e.to_string(),
        })?;
        return Ok(Some(ConfigSource::Environment(PathBuf::from(
            expanded.into_owned(),
        ))));
    }

    Ok(dirs::config_dir()
        .map(|dir| ConfigSource::Default(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))))
}

/// Reads and validates a single config file.
pub fn load_config_from(path: &Path) -> Result<TimerConfig, ConfigError> {
    log::debug!("Loading timer config from '{}'", path.display());
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config: TimerConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    validate(&config)?;
    Ok(config)
}

/// Checks values that TOML alone cannot constrain.
pub fn validate(config: &TimerConfig) -> Result<(), ConfigError> {
    if config.precision > MAX_PRECISION {
        return Err(ConfigError::InvalidPrecision(config.precision));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ReportFormat, SinkKind};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_config_from_full_file() {
        // --- Setup ---
        let file = write_config(
            r#"
            enabled = false
            precision = 2
            format = "json"
            sink = "stderr"
            "#,
        );

        // --- Execute ---
        let config = load_config_from(file.path()).unwrap();

        // --- Assert ---
        assert_eq!(
            config,
            TimerConfig {
                enabled: false,
                precision: 2,
                format: ReportFormat::Json,
                sink: SinkKind::Stderr,
            }
        );
    }

    #[test]
    fn test_explicit_path_takes_priority_over_env() {
        let explicit = Path::new("/tmp/explicit.toml");
        let source =
            resolve_config_source(Some(explicit), Some("/tmp/from_env.toml".to_string())).unwrap();
        assert_eq!(source, Some(ConfigSource::Explicit(explicit.to_path_buf())));
    }

    #[test]
    fn test_env_path_is_expanded() {
        let home = dirs::home_dir().unwrap();
        let source = resolve_config_source(None, Some("~/timewrap.toml".to_string())).unwrap();
        assert_eq!(
            source,
            Some(ConfigSource::Environment(home.join("timewrap.toml")))
        );
    }

    #[test]
    fn test_blank_env_value_falls_through_to_default() {
        let source = resolve_config_source(None, Some("   ".to_string())).unwrap();
        if let Some(source) = source {
            assert!(matches!(source, ConfigSource::Default(_)));
            assert!(source.path().ends_with("timewrap/timewrap.toml"));
        }
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let result = load_config(Some(&missing));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let file = write_config("precision = \"four\"");
        let result = load_config_from(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_precision_out_of_range_is_rejected() {
        let file = write_config("precision = 12");
        let result = load_config_from(file.path());
        assert!(matches!(result, Err(ConfigError::InvalidPrecision(12))));
    }
}
