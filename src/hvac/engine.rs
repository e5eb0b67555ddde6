use serde::Serialize;

use super::equipment::{self, Selection};
use super::room::{RoomInput, ZoneContext};
use super::rounding::round_to;
use super::{airflow, geometry, hydraulic, thermal};

/// 실 1개에 대한 공조 계산 결과. 모든 필드는 입력으로부터 결정되는 파생값이다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// 면적 [m²], 소수 2자리
    pub area: f64,
    /// 체적 [m³], 소수 2자리
    pub volume: f64,
    pub room_cfm: f64,
    pub fresh_air_cfm: f64,
    pub exhaust_cfm: f64,
    pub water_vapor_kg_hr: f64,
    pub dehumidification_cfm: f64,
    /// 25 CFM 단위
    pub resultant_cfm: f64,
    pub terminal_supply_sqft: f64,
    pub cooling_load_tr: f64,
    pub room_ac_load_tr: f64,
    pub cfm_ac_load_tr: f64,
    /// 250 CFM 단위
    pub ahu_cfm: f64,
    pub ahu_size: Selection<&'static str>,
    pub static_pressure: f64,
    pub blower_model: String,
    pub motor_hp: Selection<f64>,
    pub cooling_coil_rows: u8,
    pub ahu_cooling_load_tr: f64,
    pub filter_stages: u8,
    pub chilled_water_gpm: f64,
    pub chilled_water_lps: f64,
    pub flow_velocity_ms: f64,
    pub pipe_size_mm: f64,
    pub acph: u32,
}

/// 실/존 입력으로 풍량, 냉방부하, 장비 선정, 냉수 배관을 한 번에 계산한다.
///
/// 입력 검증은 하지 않는다. 음수나 0 치수는 그대로 산술 전파되어 0/음수/NaN 또는
/// 테이블 기본값으로 귀결된다.
pub fn calculate(room: &RoomInput, zone: &ZoneContext) -> CalculationResult {
    let geo = geometry::room_geometry(room);
    let air = airflow::derive(&geo, room, zone);
    let load = thermal::derive(&geo, room, zone.system_type, air.resultant_cfm);
    let ahu = equipment::select_ahu(air.resultant_cfm);
    let water = hydraulic::derive(zone.system_type, load.ahu_cooling_load_tr);

    CalculationResult {
        area: round_to(geo.area_sqm, 2),
        volume: round_to(geo.volume_cum, 2),
        room_cfm: air.room_cfm,
        fresh_air_cfm: air.fresh_air_cfm,
        exhaust_cfm: air.exhaust_cfm,
        water_vapor_kg_hr: round_to(air.water_vapor_kg_hr, 2),
        dehumidification_cfm: air.dehumidification_cfm,
        resultant_cfm: air.resultant_cfm,
        terminal_supply_sqft: air.terminal_supply_sqft,
        cooling_load_tr: load.cooling_load_tr,
        room_ac_load_tr: load.room_ac_load_tr,
        cfm_ac_load_tr: load.cfm_ac_load_tr,
        ahu_cfm: ahu.ahu_cfm,
        ahu_size: ahu.ahu_size,
        static_pressure: ahu.static_pressure,
        blower_model: ahu.blower_model,
        motor_hp: ahu.motor_hp,
        cooling_coil_rows: equipment::cooling_coil_rows(&zone.classification),
        ahu_cooling_load_tr: load.ahu_cooling_load_tr,
        filter_stages: equipment::filter_stages(&zone.classification),
        chilled_water_gpm: water.chilled_water_gpm,
        chilled_water_lps: round_to(water.chilled_water_lps, 2),
        flow_velocity_ms: water.flow_velocity_ms,
        pipe_size_mm: water.pipe_size_mm,
        acph: air.acph,
    }
}
