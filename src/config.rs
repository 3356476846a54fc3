use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::offset::OffsetMode;
use crate::error::ConfigError;

/// Optional override file looked up in the working directory.
pub const CONFIG_FILE: &str = "gaintrace.json";

/// Position-controller trace: one file, two value columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionSource {
    pub path: PathBuf,
    pub target_column: usize,
    pub actual_column: usize,
}

impl Default for PositionSource {
    fn default() -> Self {
        Self {
            path: PathBuf::from("_slash_position_controller_data.csv"),
            target_column: 3,
            actual_column: 8,
        }
    }
}

/// A gain log: one value column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainSource {
    pub path: PathBuf,
    #[serde(default = "GainSource::default_column")]
    pub column: usize,
}

impl GainSource {
    fn default_column() -> usize {
        1
    }

    fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
            column: Self::default_column(),
        }
    }

    fn kp() -> Self {
        Self::new("_slash_gain_kp.csv")
    }

    fn kd() -> Self {
        Self::new("_slash_gain_kd.csv")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "GainTrace".to_string(),
            width: 1200.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub position: PositionSource,
    #[serde(default = "GainSource::kp")]
    pub kp: GainSource,
    #[serde(default = "GainSource::kd")]
    pub kd: GainSource,
    /// Raw timestamp units per displayed second.
    pub time_divisor: f64,
    pub offset_mode: OffsetMode,
    pub window: WindowConfig,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            position: PositionSource::default(),
            kp: GainSource::kp(),
            kd: GainSource::kd(),
            time_divisor: 1e9,
            offset_mode: OffsetMode::default(),
            window: WindowConfig::default(),
        }
    }
}

impl TraceConfig {
    /// Read `path` if it exists, otherwise fall back to the built-in defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Config loaded from {:?}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_recorded_topics() {
        let c = TraceConfig::default();
        assert_eq!(c.position.path, PathBuf::from("_slash_position_controller_data.csv"));
        assert_eq!(c.position.target_column, 3);
        assert_eq!(c.position.actual_column, 8);
        assert_eq!(c.kp.path, PathBuf::from("_slash_gain_kp.csv"));
        assert_eq!(c.kp.column, 1);
        assert_eq!(c.kd.path, PathBuf::from("_slash_gain_kd.csv"));
        assert_eq!(c.kd.column, 1);
        assert_eq!(c.time_divisor, 1e9);
        assert_eq!(c.offset_mode, OffsetMode::Shared);
    }

    #[test]
    fn partial_json_overrides_named_fields_only() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "offset_mode": "per_source", "kd": {{ "path": "kd.csv" }}, "position": {{ "actual_column": 9 }} }}"#
        )
        .unwrap();

        let c = TraceConfig::load_or_default(file.path()).unwrap();
        assert_eq!(c.offset_mode, OffsetMode::PerSource);
        assert_eq!(c.kd.path, PathBuf::from("kd.csv"));
        assert_eq!(c.kd.column, 1);
        assert_eq!(c.position.actual_column, 9);
        assert_eq!(c.position.target_column, 3);
        assert_eq!(c.kp, GainSource::kp());
        assert_eq!(c.time_divisor, 1e9);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let c = TraceConfig::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(c, TraceConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = TraceConfig::load_or_default(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
