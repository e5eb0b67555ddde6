use serde::{Deserialize, Serialize};

/// 1 US GPM = 0.06309 L/s
pub const LPS_PER_GPM: f64 = 0.06309;

/// 수량(水量) 단위. 내부 기준은 L/s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterFlowUnit {
    LiterPerSecond,
    UsGpm,
    CubicMeterPerHour,
}

fn to_lps(value: f64, unit: WaterFlowUnit) -> f64 {
    match unit {
        WaterFlowUnit::LiterPerSecond => value,
        WaterFlowUnit::UsGpm => value * LPS_PER_GPM,
        WaterFlowUnit::CubicMeterPerHour => value / 3.6,
    }
}

fn from_lps(lps: f64, unit: WaterFlowUnit) -> f64 {
    match unit {
        WaterFlowUnit::LiterPerSecond => lps,
        WaterFlowUnit::UsGpm => lps / LPS_PER_GPM,
        WaterFlowUnit::CubicMeterPerHour => lps * 3.6,
    }
}

/// 수량을 변환한다.
pub fn convert_water_flow(value: f64, from: WaterFlowUnit, to: WaterFlowUnit) -> f64 {
    from_lps(to_lps(value, from), to)
}
