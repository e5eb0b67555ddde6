//! 장비 선정 테이블: AHU 크기, 송풍기 모델, 모터 마력, 코일 열수, 필터 단수.

use serde::{Serialize, Serializer};

use super::rounding::ceil_to_step;
use super::rules::{
    first_match, COOLING_COIL_ROW_RULES, DEFAULT_COIL_ROWS, DEFAULT_FILTER_STAGES,
    FILTER_STAGE_RULES,
};

/// 테이블 범위를 벗어났을 때 표시하는 문자열.
pub const REFER: &str = "Refer";

/// 정압 [Pa]. 덕트 설계로 산출하지 않고 고정값을 쓴다.
pub const STATIC_PRESSURE: f64 = 150.0;

/// AHU 풍량 올림 단위 [CFM]
pub const AHU_CFM_STEP: f64 = 250.0;

/// 선정 테이블 조회 결과. 최대 규격을 넘으면 `Refer`(제조사 문의)가 된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<T> {
    Sized(T),
    Refer,
}

impl<T> Selection<T> {
    pub fn sized(&self) -> Option<&T> {
        match self {
            Selection::Sized(v) => Some(v),
            Selection::Refer => None,
        }
    }

    pub fn is_refer(&self) -> bool {
        matches!(self, Selection::Refer)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Sized(v) => write!(f, "{v}"),
            Selection::Refer => f.write_str(REFER),
        }
    }
}

impl<T: Serialize> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selection::Sized(v) => v.serialize(serializer),
            Selection::Refer => serializer.serialize_str(REFER),
        }
    }
}

/// AHU 규격 테이블: (최대 CFM, 규격). 오름차순.
const AHU_SIZE_TABLE: &[(f64, &str)] = &[
    (1300.0, "200"),
    (1600.0, "225"),
    (2100.0, "250"),
    (2700.0, "280"),
    (3450.0, "315"),
    (4250.0, "355"),
    (5250.0, "400"),
    (6750.0, "450"),
    (8500.0, "500"),
    (10750.0, "560"),
    (13500.0, "630"),
    (17000.0, "710"),
    (21500.0, "800"),
    (27000.0, "900"),
    (34000.0, "1000"),
    (43000.0, "1120"),
    (49000.0, "1200"),
    (68000.0, "1450"),
];

/// 표준 모터 마력 [HP]. 오름차순.
const MOTOR_HP_OPTIONS: &[f64] = &[
    1.0, 1.5, 2.0, 3.0, 5.0, 7.5, 10.0, 12.5, 15.0, 20.0, 25.0, 30.0, 40.0, 50.0, 60.0, 75.0,
];

// 모터 동력 환산: 6356 × 팬효율 × 모터효율 × 여유율 × (inWG→mm 환산)
const FAN_POWER_DIVISOR: f64 = 6356.0 * 0.7 * 0.9 * 1.1 * 25.4;

pub fn round_up_to_ahu_cfm(resultant_cfm: f64) -> f64 {
    ceil_to_step(resultant_cfm, AHU_CFM_STEP)
}

/// CFM 이상인 가장 작은 구간의 AHU 규격을 고른다.
pub fn ahu_size_by_cfm(cfm: f64) -> Selection<&'static str> {
    AHU_SIZE_TABLE
        .iter()
        .find(|(limit, _)| cfm <= *limit)
        .map(|(_, size)| Selection::Sized(*size))
        .unwrap_or(Selection::Refer)
}

/// 송풍기 모델명. 규격 범위를 넘으면 "BDB-Refer"가 된다.
pub fn blower_model(cfm: f64) -> String {
    format!("BDB-{}", ahu_size_by_cfm(cfm))
}

/// 풍량과 정압으로 필요한 축동력[HP]을 추정한다.
pub fn fan_power_hp(cfm: f64, static_pressure: f64) -> f64 {
    (cfm * static_pressure) / FAN_POWER_DIVISOR
}

/// 필요 동력 이상인 가장 작은 표준 모터 마력을 고른다.
pub fn motor_hp(cfm: f64, static_pressure: f64) -> Selection<f64> {
    let power = fan_power_hp(cfm, static_pressure);
    MOTOR_HP_OPTIONS
        .iter()
        .find(|hp| power <= **hp)
        .map(|hp| Selection::Sized(*hp))
        .unwrap_or(Selection::Refer)
}

pub fn cooling_coil_rows(classification: &str) -> u8 {
    first_match(COOLING_COIL_ROW_RULES, classification, DEFAULT_COIL_ROWS)
}

/// 필터 단수. 등급 문자열은 대문자로 바꿔 비교한다.
pub fn filter_stages(classification: &str) -> u8 {
    let upper = classification.to_uppercase();
    first_match(FILTER_STAGE_RULES, &upper, DEFAULT_FILTER_STAGES)
}

/// AHU 한 대에 대한 선정 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AhuSelection {
    pub ahu_cfm: f64,
    pub ahu_size: Selection<&'static str>,
    pub blower_model: String,
    pub static_pressure: f64,
    pub motor_hp: Selection<f64>,
}

/// 설계 풍량을 250 CFM 단위로 올린 뒤 AHU/송풍기/모터를 선정한다.
pub fn select_ahu(resultant_cfm: f64) -> AhuSelection {
    let ahu_cfm = round_up_to_ahu_cfm(resultant_cfm);
    AhuSelection {
        ahu_cfm,
        ahu_size: ahu_size_by_cfm(ahu_cfm),
        blower_model: blower_model(ahu_cfm),
        static_pressure: STATIC_PRESSURE,
        motor_hp: motor_hp(ahu_cfm, STATIC_PRESSURE),
    }
}
