use serde::{Deserialize, Serialize};

/// 1 CFM = 1.699011 m³/h
const M3H_PER_CFM: f64 = 1.699_011;

/// 풍량 단위. 내부 기준은 CFM이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirflowUnit {
    Cfm,
    CubicMeterPerHour,
    CubicMeterPerSecond,
    LiterPerSecond,
}

fn to_cfm(value: f64, unit: AirflowUnit) -> f64 {
    match unit {
        AirflowUnit::Cfm => value,
        AirflowUnit::CubicMeterPerHour => value / M3H_PER_CFM,
        AirflowUnit::CubicMeterPerSecond => value * 3600.0 / M3H_PER_CFM,
        AirflowUnit::LiterPerSecond => value * 3.6 / M3H_PER_CFM,
    }
}

fn from_cfm(cfm: f64, unit: AirflowUnit) -> f64 {
    match unit {
        AirflowUnit::Cfm => cfm,
        AirflowUnit::CubicMeterPerHour => cfm * M3H_PER_CFM,
        AirflowUnit::CubicMeterPerSecond => cfm * M3H_PER_CFM / 3600.0,
        AirflowUnit::LiterPerSecond => cfm * M3H_PER_CFM / 3.6,
    }
}

/// 풍량을 변환한다.
pub fn convert_airflow(value: f64, from: AirflowUnit, to: AirflowUnit) -> f64 {
    from_cfm(to_cfm(value, from), to)
}
