use serde::{Deserialize, Serialize};

/// 1 ft = 0.3048 m
pub const M_PER_FT: f64 = 0.3048;
/// 1 in = 0.0254 m
pub const M_PER_IN: f64 = 0.0254;

/// 실 치수/배관 내경에 쓰는 길이 단위. 기준은 미터.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Centimeter,
    Inch,
    Foot,
}

impl LengthUnit {
    /// 1 단위가 몇 미터인지.
    fn meters(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Inch => M_PER_IN,
            LengthUnit::Foot => M_PER_FT,
        }
    }
}

pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value * from.meters() / to.meters()
}
