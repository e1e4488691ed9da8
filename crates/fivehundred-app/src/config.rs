use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

pub const DEFAULT_CONFIG_PATH: &str = "fivehundred.yaml";
pub const SEATS: usize = 4;

/// Game configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GameConfig {
    #[serde(default = "default_players")]
    pub players: Vec<String>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: default_players(),
            seed: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load and validate configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: GameConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Built-in defaults when the default config path is absent; any other
    /// missing path is still an error through `from_path`.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        if self.players.len() != SEATS {
            return Err(ValidationError::InvalidField {
                field: "players".to_string(),
                message: format!(
                    "exactly {SEATS} player names are required, got {}",
                    self.players.len()
                ),
            });
        }

        for (index, name) in self.players.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ValidationError::InvalidField {
                    field: format!("players[{index}]"),
                    message: "player name must not be empty".to_string(),
                });
            }
        }

        self.logging.normalize();
        if self.logging.level().is_none() {
            return Err(ValidationError::InvalidField {
                field: "logging.level".to_string(),
                message: format!("unknown logging level '{}'", self.logging.level),
            });
        }

        Ok(())
    }

    /// The four seat names as a fixed array; call after `validate`.
    pub fn seat_names(&self) -> Result<[String; SEATS], ValidationError> {
        self.players
            .clone()
            .try_into()
            .map_err(|_| ValidationError::InvalidField {
                field: "players".to_string(),
                message: format!("exactly {SEATS} player names are required"),
            })
    }
}

fn default_players() -> Vec<String> {
    ["North", "East", "South", "West"]
        .map(String::from)
        .to_vec()
}

/// Logging block; defaults to info-level output on stderr.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.level.trim().is_empty() {
            self.level = default_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid config at {path}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, GameConfig, ValidationError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_full_config() {
        let file = write_config(
            "players: [Ann, Ben, Cho, Dee]\nseed: 42\nlogging:\n  level: debug\n",
        );
        let cfg = GameConfig::from_path(file.path()).unwrap();
        assert_eq!(cfg.players, vec!["Ann", "Ben", "Cho", "Dee"]);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let file = write_config("seed: 7\n");
        let cfg = GameConfig::from_path(file.path()).unwrap();
        assert_eq!(cfg.players.len(), 4);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn wrong_player_count_is_rejected_with_field() {
        let file = write_config("players: [Ann, Ben, Cho]\n");
        let error = GameConfig::from_path(file.path()).unwrap_err();
        match error {
            ConfigError::Invalid {
                source: ValidationError::InvalidField { field, .. },
                ..
            } => assert_eq!(field, "players"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_player_name_is_rejected_with_index() {
        let mut cfg = GameConfig::default();
        cfg.players[2] = "  ".to_string();
        let error = cfg.validate().unwrap_err();
        assert_eq!(
            error,
            ValidationError::InvalidField {
                field: "players[2]".to_string(),
                message: "player name must not be empty".to_string(),
            }
        );
    }

    #[test]
    fn unknown_logging_level_is_rejected() {
        let mut cfg = GameConfig::default();
        cfg.logging.level = "loud".to_string();
        let error = cfg.validate().unwrap_err();
        match error {
            ValidationError::InvalidField { field, .. } => assert_eq!(field, "logging.level"),
        }
    }

    #[test]
    fn missing_default_path_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = GameConfig::load_or_default(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn seat_names_round_trip() {
        let cfg = GameConfig::default();
        let names = cfg.seat_names().unwrap();
        assert_eq!(names[0], "North");
        assert_eq!(names[3], "West");
    }
}
