//! 프로젝트(존/실 구성) 파일을 읽어 실별 계산과 존별 합계를 만든다.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::hvac::{self, AhuSelection, CalculationResult, RoomInput, SystemType, ZoneContext};
use crate::standards;

/// 프로젝트 파일 처리 중 발생 가능한 오류.
#[derive(Debug)]
pub enum ProjectError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
    /// 확장자로 형식을 판단할 수 없음
    UnsupportedFormat(String),
    /// 참조 테이블에도 없고 ACPH 범위도 직접 지정하지 않은 등급
    UnknownClassification {
        zone: String,
        standard: Option<String>,
        classification: String,
    },
}

impl std::fmt::Display for ProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectError::Io(e) => write!(f, "project I/O error: {e}"),
            ProjectError::Toml(e) => write!(f, "project TOML error: {e}"),
            ProjectError::Json(e) => write!(f, "project JSON error: {e}"),
            ProjectError::UnsupportedFormat(ext) => {
                write!(f, "unsupported project file format: {ext}")
            }
            ProjectError::UnknownClassification {
                zone,
                standard,
                classification,
            } => write!(
                f,
                "zone '{zone}': classification '{classification}' not found in standard '{}' \
                 and no acph_min/acph_max given",
                standard.as_deref().unwrap_or("-")
            ),
        }
    }
}

impl std::error::Error for ProjectError {}

impl From<std::io::Error> for ProjectError {
    fn from(value: std::io::Error) -> Self {
        ProjectError::Io(value)
    }
}

impl From<toml::de::Error> for ProjectError {
    fn from(value: toml::de::Error) -> Self {
        ProjectError::Toml(value)
    }
}

impl From<serde_json::Error> for ProjectError {
    fn from(value: serde_json::Error) -> Self {
        ProjectError::Json(value)
    }
}

/// 프로젝트 파일의 실 항목. 생략한 값은 설정의 기본값을 쓴다.
/// 키는 snake_case이며, 직렬화된 `RoomInput`과 같은 camelCase 키도 받는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, alias = "peopleCount")]
    pub people_count: Option<u32>,
    #[serde(default, alias = "equipmentLoad")]
    pub equipment_load: Option<f64>,
    #[serde(default)]
    pub lighting: Option<f64>,
    #[serde(default)]
    pub infiltration: Option<f64>,
    #[serde(default, alias = "freshAirRatio")]
    pub fresh_air_ratio: Option<f64>,
    #[serde(default, alias = "exhaustRatio")]
    pub exhaust_ratio: Option<f64>,
    #[serde(default, alias = "tempRequired")]
    pub temp_required: Option<f64>,
    #[serde(default, alias = "rhRequired")]
    pub rh_required: Option<f64>,
}

impl RoomSpec {
    pub fn to_input(&self, base: &RoomInput) -> RoomInput {
        RoomInput {
            length: self.length,
            width: self.width,
            height: self.height,
            people_count: self.people_count.unwrap_or(base.people_count),
            equipment_load: self.equipment_load.unwrap_or(base.equipment_load),
            lighting: self.lighting.unwrap_or(base.lighting),
            infiltration: self.infiltration.unwrap_or(base.infiltration),
            fresh_air_ratio: self.fresh_air_ratio.unwrap_or(base.fresh_air_ratio),
            exhaust_ratio: self.exhaust_ratio.unwrap_or(base.exhaust_ratio),
            temp_required: self.temp_required.unwrap_or(base.temp_required),
            rh_required: self.rh_required.unwrap_or(base.rh_required),
        }
    }
}

/// 프로젝트 파일의 존 항목.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSpec {
    pub name: String,
    #[serde(default)]
    pub standard: Option<String>,
    pub classification: String,
    #[serde(default, alias = "systemType")]
    pub system_type: Option<SystemType>,
    /// 지정하면 참조 테이블 값보다 우선한다.
    #[serde(default, alias = "acphMin")]
    pub acph_min: Option<u32>,
    #[serde(default, alias = "acphMax")]
    pub acph_max: Option<u32>,
    #[serde(default)]
    pub rooms: Vec<RoomSpec>,
}

impl ZoneSpec {
    /// 참조 테이블과 직접 지정한 ACPH 범위를 합쳐 계산 조건을 만든다.
    pub fn resolve(&self, default_system: SystemType) -> Result<ZoneContext, ProjectError> {
        let system_type = self.system_type.unwrap_or(default_system);
        let found = self
            .standard
            .as_deref()
            .and_then(|s| standards::find_classification(s, &self.classification));

        let (acph_min, acph_max) = match (found, self.acph_min, self.acph_max) {
            (_, Some(min), Some(max)) => (min, max),
            (Some(c), min, max) => (min.unwrap_or(c.acph_min), max.unwrap_or(c.acph_max)),
            (None, _, _) => {
                return Err(ProjectError::UnknownClassification {
                    zone: self.name.clone(),
                    standard: self.standard.clone(),
                    classification: self.classification.clone(),
                })
            }
        };
        let classification = found
            .map(|c| c.classification.to_string())
            .unwrap_or_else(|| self.classification.clone());
        Ok(ZoneContext::new(acph_min, acph_max, classification, system_type))
    }
}

/// 프로젝트 정의.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, alias = "peakMaxTempC")]
    pub peak_max_temp_c: Option<f64>,
    #[serde(default, alias = "peakMinTempC")]
    pub peak_min_temp_c: Option<f64>,
    #[serde(default, alias = "outdoorHumidityPercent")]
    pub outdoor_humidity_percent: Option<f64>,
    #[serde(default)]
    pub zones: Vec<ZoneSpec>,
}

/// 실 하나의 입력과 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomReport {
    pub name: String,
    pub input: RoomInput,
    pub result: CalculationResult,
}

/// 존 합계. AHU는 존 전체 풍량으로 다시 선정한다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSummary {
    pub room_count: usize,
    pub total_area: f64,
    pub total_resultant_cfm: f64,
    pub total_cooling_load_tr: f64,
    pub total_chilled_water_gpm: f64,
    pub ahu: AhuSelection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneReport {
    pub name: String,
    pub standard: Option<String>,
    pub context: ZoneContext,
    pub rooms: Vec<RoomReport>,
    pub summary: ZoneSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub name: String,
    pub location: String,
    pub zones: Vec<ZoneReport>,
    pub total_cooling_load_tr: f64,
    pub total_resultant_cfm: f64,
}

impl Project {
    pub fn from_toml_str(src: &str) -> Result<Self, ProjectError> {
        Ok(toml::from_str(src)?)
    }

    pub fn from_json_str(src: &str) -> Result<Self, ProjectError> {
        Ok(serde_json::from_str(src)?)
    }

    /// 확장자(.toml/.json)로 형식을 판단해 프로젝트 파일을 읽는다.
    pub fn from_path(path: &Path) -> Result<Self, ProjectError> {
        let content = fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        match ext.as_str() {
            "toml" => Self::from_toml_str(&content),
            "json" => Self::from_json_str(&content),
            other => Err(ProjectError::UnsupportedFormat(other.to_string())),
        }
    }

    /// 기본 설정으로 평가한다.
    pub fn evaluate(&self) -> Result<ProjectReport, ProjectError> {
        self.evaluate_with(&Config::default())
    }

    /// 존마다 계산 조건을 확정하고 실별 계산 후 존 합계를 만든다.
    pub fn evaluate_with(&self, cfg: &Config) -> Result<ProjectReport, ProjectError> {
        let base = cfg.room_defaults.base_room();
        let mut zones = Vec::with_capacity(self.zones.len());
        for zone in &self.zones {
            let context = zone.resolve(cfg.default_system_type)?;
            tracing::debug!(
                zone = %zone.name,
                classification = %context.classification,
                acph_min = context.acph_min,
                acph_max = context.acph_max,
                "resolved zone"
            );
            let rooms: Vec<RoomReport> = zone
                .rooms
                .iter()
                .map(|spec| {
                    if spec.length <= 0.0 || spec.width <= 0.0 || spec.height <= 0.0 {
                        tracing::warn!(
                            zone = %zone.name,
                            room = %spec.name,
                            "room has non-positive dimensions; results will be degenerate"
                        );
                    }
                    let input = spec.to_input(&base);
                    let result = hvac::calculate(&input, &context);
                    RoomReport {
                        name: spec.name.clone(),
                        input,
                        result,
                    }
                })
                .collect();
            let summary = summarize(&rooms);
            zones.push(ZoneReport {
                name: zone.name.clone(),
                standard: zone.standard.clone(),
                context,
                rooms,
                summary,
            });
        }

        let total_cooling_load_tr: f64 = zones.iter().map(|z| z.summary.total_cooling_load_tr).sum();
        let total_resultant_cfm: f64 = zones.iter().map(|z| z.summary.total_resultant_cfm).sum();
        tracing::info!(project = %self.name, zones = zones.len(), "project evaluated");
        Ok(ProjectReport {
            name: self.name.clone(),
            location: self.location.clone(),
            zones,
            total_cooling_load_tr,
            total_resultant_cfm,
        })
    }
}

/// 존 내 실 결과를 합산하고 전체 풍량으로 AHU를 선정한다.
pub fn summarize(rooms: &[RoomReport]) -> ZoneSummary {
    let total_area: f64 = rooms.iter().map(|r| r.result.area).sum();
    let total_resultant_cfm: f64 = rooms.iter().map(|r| r.result.resultant_cfm).sum();
    let total_cooling_load_tr: f64 = rooms.iter().map(|r| r.result.ahu_cooling_load_tr).sum();
    let total_chilled_water_gpm: f64 = rooms.iter().map(|r| r.result.chilled_water_gpm).sum();
    ZoneSummary {
        room_count: rooms.len(),
        total_area,
        total_resultant_cfm,
        total_cooling_load_tr,
        total_chilled_water_gpm,
        ahu: hvac::select_ahu(total_resultant_cfm),
    }
}
