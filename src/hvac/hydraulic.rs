use std::f64::consts::PI;

use super::room::SystemType;
use super::rounding::round_to;
use crate::units::{convert_water_flow, WaterFlowUnit};

/// 냉수 배관 설계 유속 [m/s]
pub const DESIGN_VELOCITY_M_S: f64 = 2.0;
/// 1 US GPM = 0.00006309 m³/s
const M3_S_PER_GPM: f64 = 0.000_063_09;

/// 냉수 유량 및 배관 사이징 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hydraulics {
    pub chilled_water_gpm: f64,
    /// 반올림 전 값 [L/s]
    pub chilled_water_lps: f64,
    pub flow_velocity_ms: f64,
    pub pipe_size_mm: f64,
}

/// 냉수 방식일 때 TR당 2.4 GPM(= ×24/6)으로 유량을 구한다.
pub fn chilled_water_gpm(system_type: SystemType, ahu_cooling_load_tr: f64) -> f64 {
    match system_type {
        SystemType::ChilledWater => round_to(ahu_cooling_load_tr * 24.0 / 6.0, 2),
        SystemType::Dx | SystemType::Ventilation => 0.0,
    }
}

/// 연속 방정식 A = Q/v 로부터 배관 내경[mm]을 구해 올림한다.
pub fn pipe_size_mm(gpm: f64, velocity_m_s: f64) -> f64 {
    if gpm > 0.0 {
        let flow_m3_s = gpm * M3_S_PER_GPM;
        ((4.0 * flow_m3_s / (PI * velocity_m_s)).sqrt() * 1000.0).ceil()
    } else {
        0.0
    }
}

pub fn derive(system_type: SystemType, ahu_cooling_load_tr: f64) -> Hydraulics {
    let gpm = chilled_water_gpm(system_type, ahu_cooling_load_tr);
    Hydraulics {
        chilled_water_gpm: gpm,
        chilled_water_lps: convert_water_flow(gpm, WaterFlowUnit::UsGpm, WaterFlowUnit::LiterPerSecond),
        flow_velocity_ms: DESIGN_VELOCITY_M_S,
        pipe_size_mm: pipe_size_mm(gpm, DESIGN_VELOCITY_M_S),
    }
}
