use serde::{Deserialize, Serialize};

/// 냉동능력 단위. 내부 기준은 W.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoolingCapacityUnit {
    Watt,
    Kilowatt,
    /// 냉동톤, 1 TR = 3516.85 W
    TonRefrigeration,
    BtuPerHour,
}

fn to_watt(value: f64, unit: CoolingCapacityUnit) -> f64 {
    match unit {
        CoolingCapacityUnit::Watt => value,
        CoolingCapacityUnit::Kilowatt => value * 1000.0,
        CoolingCapacityUnit::TonRefrigeration => value * 3516.85,
        CoolingCapacityUnit::BtuPerHour => value * 0.293_071,
    }
}

fn from_watt(w: f64, unit: CoolingCapacityUnit) -> f64 {
    match unit {
        CoolingCapacityUnit::Watt => w,
        CoolingCapacityUnit::Kilowatt => w / 1000.0,
        CoolingCapacityUnit::TonRefrigeration => w / 3516.85,
        CoolingCapacityUnit::BtuPerHour => w / 0.293_071,
    }
}

/// 냉동능력을 변환한다.
pub fn convert_cooling_capacity(
    value: f64,
    from: CoolingCapacityUnit,
    to: CoolingCapacityUnit,
) -> f64 {
    from_watt(to_watt(value, from), to)
}
