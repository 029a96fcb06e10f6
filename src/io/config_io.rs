use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::model::config::DashConfig;

const APP_DIR: &str = "studydash";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("no state directory available; pass --state-dir")]
    NoStateDir,
}

/// `<config-dir>/studydash/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

/// `<data-dir>/studydash`
pub fn default_state_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR))
}

/// Resolve the state directory from an explicit override or the platform default
pub fn resolve_state_dir(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(dir) => Ok(dir.to_path_buf()),
        None => default_state_dir().ok_or(ConfigError::NoStateDir),
    }
}

/// Load the config. An explicitly named file must exist; a missing file at
/// the default location means "use defaults".
pub fn load_config(explicit: Option<&Path>) -> Result<DashConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => {
                debug!("no config file, using defaults");
                return Ok(DashConfig::default());
            }
        },
    };
    let config = read_config(&path)?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<DashConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::EditMode;
    use tempfile::TempDir;

    #[test]
    fn explicit_file_is_read() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "sample_data = false\n[ui]\nedit_mode = \"create\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert!(!config.sample_data);
        assert_eq!(config.ui.edit_mode, EditMode::Create);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_config(Some(&tmp.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn bad_toml_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "sample_data = [not valid").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn explicit_state_dir_wins() {
        let dir = resolve_state_dir(Some(Path::new("/tmp/sd"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/sd"));
    }
}
