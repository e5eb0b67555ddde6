use super::geometry::Geometry;
use super::room::{RoomInput, SystemType};
use super::rounding::{ceil_to_half, max_or_nan};

/// 재실자 1인당 현열 [W]
pub const PEOPLE_SENSIBLE_W: f64 = 70.0;
/// 침기 부하 계수
const INFILTRATION_FACTOR: f64 = 1.08;
/// 1 TR = 3516.85 W
pub const WATTS_PER_TR: f64 = 3516.85;
const ROOM_AC_DIVISOR: f64 = 12000.0;

/// 냉방 부하 산정 결과. TR 값은 모두 0.5 단위로 올림되어 있다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalLoad {
    pub people_w: f64,
    pub equipment_w: f64,
    pub lighting_w: f64,
    pub infiltration_w: f64,
    pub total_w: f64,
    pub cooling_load_tr: f64,
    pub room_ac_load_tr: f64,
    pub cfm_ac_load_tr: f64,
    pub ahu_cooling_load_tr: f64,
}

/// 방식별 TR당 풍량 [CFM/TR]. 환기 방식은 냉방 부하가 없다.
pub fn cfm_per_tr(system_type: SystemType) -> Option<f64> {
    match system_type {
        SystemType::ChilledWater => Some(400.0),
        SystemType::Dx => Some(300.0),
        SystemType::Ventilation => None,
    }
}

pub fn derive(
    geometry: &Geometry,
    room: &RoomInput,
    system_type: SystemType,
    resultant_cfm: f64,
) -> ThermalLoad {
    let people_w = f64::from(room.people_count) * PEOPLE_SENSIBLE_W;
    let equipment_w = room.equipment_load * 1000.0;
    let lighting_w = room.lighting * geometry.area_sqft;
    let infiltration_w = geometry.volume_cuft * room.infiltration * INFILTRATION_FACTOR;
    let total_w = people_w + equipment_w + lighting_w + infiltration_w;

    let cooling_load_tr = ceil_to_half(total_w / WATTS_PER_TR);
    let room_ac_load_tr = if system_type.is_conditioned() {
        ceil_to_half(total_w / ROOM_AC_DIVISOR)
    } else {
        0.0
    };
    let cfm_ac_load_tr = cfm_per_tr(system_type)
        .map(|per_tr| ceil_to_half(resultant_cfm / per_tr))
        .unwrap_or(0.0);

    ThermalLoad {
        people_w,
        equipment_w,
        lighting_w,
        infiltration_w,
        total_w,
        cooling_load_tr,
        room_ac_load_tr,
        cfm_ac_load_tr,
        ahu_cooling_load_tr: max_or_nan(cooling_load_tr, cfm_ac_load_tr),
    }
}
