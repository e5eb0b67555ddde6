use super::geometry::Geometry;
use super::room::{RoomInput, SystemType, ZoneContext};
use super::rounding::{ceil_to, ceil_to_step, max_or_nan, round_half_up};
use super::rules::{first_match, DEFAULT_TERMINAL_SUPPLY_RATIO, TERMINAL_SUPPLY_RULES};

/// 건공기 밀도 [lb/ft³]
const AIR_DENSITY_LB_PER_CUFT: f64 = 0.075;
const LB_PER_KG: f64 = 2.20462;
/// 제습 설계 습도비 차 [kg/kg]
const HUMIDITY_RATIO_DELTA: f64 = 0.015;
const GRAINS_PER_LB: f64 = 7000.0;
const DEHUMIDIFICATION_FACTOR: f64 = 0.68;
/// 최종 풍량 올림 단위 [CFM]
pub const RESULTANT_CFM_STEP: f64 = 25.0;

/// 풍량 산정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Airflow {
    pub acph: u32,
    pub room_cfm: f64,
    pub fresh_air_cfm: f64,
    pub exhaust_cfm: f64,
    /// 반올림 전 값 [kg/h]
    pub water_vapor_kg_hr: f64,
    pub dehumidification_cfm: f64,
    pub resultant_cfm: f64,
    pub terminal_supply_sqft: f64,
}

/// ACPH 범위의 중간값을 정수로 반올림한다.
pub fn design_acph(acph_min: u32, acph_max: u32) -> u32 {
    let mid = (f64::from(acph_min) + f64::from(acph_max)) / 2.0;
    round_half_up(mid) as u32
}

/// 체적[ft³]과 시간당 환기횟수로 실 풍량[CFM]을 구한다.
pub fn room_cfm(volume_cuft: f64, acph: u32) -> f64 {
    (volume_cuft * f64::from(acph) / 60.0).ceil()
}

pub fn ratio_cfm(room_cfm: f64, ratio: f64) -> f64 {
    (room_cfm * ratio).ceil()
}

/// 외기에서 제거해야 할 수증기량 [kg/h].
pub fn water_vapor_kg_hr(fresh_air_cfm: f64) -> f64 {
    ((fresh_air_cfm * AIR_DENSITY_LB_PER_CUFT * 60.0) / LB_PER_KG) * HUMIDITY_RATIO_DELTA
        / GRAINS_PER_LB
}

pub fn dehumidification_cfm(water_vapor_kg_hr: f64) -> f64 {
    (water_vapor_kg_hr / (DEHUMIDIFICATION_FACTOR * HUMIDITY_RATIO_DELTA)).ceil()
}

/// 실+외기 풍량과 제습 풍량 중 큰 값을 25 CFM 단위로 올린다.
pub fn resultant_cfm(room_cfm: f64, fresh_air_cfm: f64, dehumidification_cfm: f64) -> f64 {
    ceil_to_step(
        max_or_nan(room_cfm + fresh_air_cfm, dehumidification_cfm),
        RESULTANT_CFM_STEP,
    )
}

/// 등급별 터미널 공급 비율 [CFM/sqft].
pub fn terminal_supply_ratio(classification: &str) -> f64 {
    first_match(
        TERMINAL_SUPPLY_RULES,
        classification,
        DEFAULT_TERMINAL_SUPPLY_RATIO,
    )
}

pub fn terminal_supply_sqft(resultant_cfm: f64, classification: &str) -> f64 {
    ceil_to(resultant_cfm / terminal_supply_ratio(classification), 2)
}

/// 풍량 관련 단계를 정해진 순서로 계산한다.
pub fn derive(geometry: &Geometry, room: &RoomInput, zone: &ZoneContext) -> Airflow {
    let acph = design_acph(zone.acph_min, zone.acph_max);
    let room_cfm = room_cfm(geometry.volume_cuft, acph);
    let fresh_air_cfm = ratio_cfm(room_cfm, room.fresh_air_ratio);
    let exhaust_cfm = ratio_cfm(room_cfm, room.exhaust_ratio);

    let (water_vapor, dehumidification) = match zone.system_type {
        SystemType::Ventilation => (0.0, 0.0),
        SystemType::ChilledWater | SystemType::Dx => {
            let vapor = water_vapor_kg_hr(fresh_air_cfm);
            (vapor, dehumidification_cfm(vapor))
        }
    };

    let resultant = resultant_cfm(room_cfm, fresh_air_cfm, dehumidification);

    Airflow {
        acph,
        room_cfm,
        fresh_air_cfm,
        exhaust_cfm,
        water_vapor_kg_hr: water_vapor,
        dehumidification_cfm: dehumidification,
        resultant_cfm: resultant,
        terminal_supply_sqft: terminal_supply_sqft(resultant, &zone.classification),
    }
}
