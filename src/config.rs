use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::hvac::{RoomInput, SystemType};
use crate::report::ReportFormat;

/// 기본 설정 파일 이름.
pub const CONFIG_FILE: &str = "config.toml";

/// 실 입력에서 생략된 값에 쓰는 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomDefaults {
    pub lighting_w_per_sqft: f64,
    pub infiltration_per_hr: f64,
    pub fresh_air_ratio: f64,
    pub exhaust_ratio: f64,
    pub temp_required_c: f64,
    pub rh_required_percent: f64,
}

impl Default for RoomDefaults {
    fn default() -> Self {
        let room = RoomInput::default();
        Self {
            lighting_w_per_sqft: room.lighting,
            infiltration_per_hr: room.infiltration,
            fresh_air_ratio: room.fresh_air_ratio,
            exhaust_ratio: room.exhaust_ratio,
            temp_required_c: room.temp_required,
            rh_required_percent: room.rh_required,
        }
    }
}

impl RoomDefaults {
    /// 기본값을 채운 실 입력을 만든다. 치수/인원/장비 부하는 0이다.
    pub fn base_room(&self) -> RoomInput {
        RoomInput {
            lighting: self.lighting_w_per_sqft,
            infiltration: self.infiltration_per_hr,
            fresh_air_ratio: self.fresh_air_ratio,
            exhaust_ratio: self.exhaust_ratio,
            temp_required: self.temp_required_c,
            rh_required: self.rh_required_percent,
            ..RoomInput::default()
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// auto / ko / en
    pub language: String,
    pub report_format: ReportFormat,
    pub default_system_type: SystemType,
    pub room_defaults: RoomDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            report_format: ReportFormat::Text,
            default_system_type: SystemType::ChilledWater,
            room_defaults: RoomDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나, 없으면 기본 설정으로 파일을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "created default config");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
