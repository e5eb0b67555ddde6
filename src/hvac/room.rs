use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 공조 방식. `Ventilation`은 제습/냉각코일 관련 출력을 0으로 만든다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemType {
    #[serde(rename = "Chilled Water")]
    ChilledWater,
    #[serde(rename = "DX")]
    Dx,
    #[serde(rename = "Ventilation")]
    Ventilation,
}

impl SystemType {
    pub fn label(&self) -> &'static str {
        match self {
            SystemType::ChilledWater => "Chilled Water",
            SystemType::Dx => "DX",
            SystemType::Ventilation => "Ventilation",
        }
    }

    /// 제습·냉방 부하 계산 대상인지 여부.
    pub fn is_conditioned(&self) -> bool {
        !matches!(self, SystemType::Ventilation)
    }
}

impl Default for SystemType {
    fn default() -> Self {
        SystemType::ChilledWater
    }
}

impl std::fmt::Display for SystemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 알 수 없는 공조 방식 문자열.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSystemType(pub String);

impl std::fmt::Display for UnknownSystemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown system type: {}", self.0)
    }
}

impl std::error::Error for UnknownSystemType {}

impl FromStr for SystemType {
    type Err = UnknownSystemType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        match normalized.as_str() {
            "chilledwater" | "chw" | "cw" => Ok(SystemType::ChilledWater),
            "dx" => Ok(SystemType::Dx),
            "ventilation" | "vent" => Ok(SystemType::Ventilation),
            _ => Err(UnknownSystemType(s.to_string())),
        }
    }
}

/// 실(room) 단위 계산 입력. 길이 단위는 미터.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomInput {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// 재실 인원
    pub people_count: u32,
    /// 장비 발열 [kW]
    pub equipment_load: f64,
    /// 조명 부하 [W/sqft]
    pub lighting: f64,
    /// 침기 환기 횟수 [1/h]
    pub infiltration: f64,
    /// 외기 비율 (실 CFM 대비)
    pub fresh_air_ratio: f64,
    /// 배기 비율 (실 CFM 대비)
    pub exhaust_ratio: f64,
    /// 요구 온도 [°C]. 현재 계산식에는 사용하지 않는다.
    pub temp_required: f64,
    /// 요구 상대습도 [%]. 현재 계산식에는 사용하지 않는다.
    pub rh_required: f64,
}

impl Default for RoomInput {
    fn default() -> Self {
        Self {
            length: 0.0,
            width: 0.0,
            height: 0.0,
            people_count: 0,
            equipment_load: 0.0,
            lighting: 1.75,
            infiltration: 2.0,
            fresh_air_ratio: 0.1,
            exhaust_ratio: 0.0,
            temp_required: 24.0,
            rh_required: 50.0,
        }
    }
}

impl RoomInput {
    /// 치수만 지정하고 나머지는 기본값을 쓰는 입력을 만든다.
    pub fn with_dimensions(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
            ..Self::default()
        }
    }
}

/// 존(zone) 단위 계산 조건. 청정도 등급에서 결정된 ACPH 범위를 담는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneContext {
    pub acph_min: u32,
    pub acph_max: u32,
    /// 청정도 등급 문자열 (예: "ISO 6", "GRADE A", "Class100K")
    pub classification: String,
    pub system_type: SystemType,
}

impl ZoneContext {
    pub fn new(
        acph_min: u32,
        acph_max: u32,
        classification: impl Into<String>,
        system_type: SystemType,
    ) -> Self {
        Self {
            acph_min,
            acph_max,
            classification: classification.into(),
            system_type,
        }
    }
}
