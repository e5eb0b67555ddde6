use crate::units::{convert_area, convert_volume, AreaUnit, VolumeUnit};

use super::room::RoomInput;

/// 실 치수를 미터/피트 양쪽 단위로 정규화한 값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub area_sqm: f64,
    pub area_sqft: f64,
    pub volume_cum: f64,
    pub volume_cuft: f64,
}

/// 길이·폭·높이[m]로 면적과 체적을 구한다. 부호나 크기는 검사하지 않는다.
pub fn normalize(length_m: f64, width_m: f64, height_m: f64) -> Geometry {
    let area_sqm = length_m * width_m;
    let volume_cum = area_sqm * height_m;
    Geometry {
        area_sqm,
        area_sqft: convert_area(area_sqm, AreaUnit::SquareMeter, AreaUnit::SquareFoot),
        volume_cum,
        volume_cuft: convert_volume(volume_cum, VolumeUnit::CubicMeter, VolumeUnit::CubicFoot),
    }
}

pub fn room_geometry(room: &RoomInput) -> Geometry {
    normalize(room.length, room.width, room.height)
}
