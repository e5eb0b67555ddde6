use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    UnknownQuantity(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "unknown unit: {u}"),
            ConversionError::UnknownQuantity(q) => write!(f, "unsupported quantity: {q}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 물리량 이름("airflow", "cooling" 등)을 해석한다.
pub fn parse_quantity(s: &str) -> Result<QuantityKind, ConversionError> {
    s.parse().map_err(ConversionError::UnknownQuantity)
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시: `m`, `ft`, `sqft`, `cfm`, `m3/h`, `gpm`, `l/s`, `tr`, `kw`, `c`.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Area => {
            let from = parse_area_unit(from_unit_str)?;
            let to = parse_area_unit(to_unit_str)?;
            Ok(convert_area(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        QuantityKind::Airflow => {
            let from = parse_airflow_unit(from_unit_str)?;
            let to = parse_airflow_unit(to_unit_str)?;
            Ok(convert_airflow(value, from, to))
        }
        QuantityKind::WaterFlow => {
            let from = parse_water_flow_unit(from_unit_str)?;
            let to = parse_water_flow_unit(to_unit_str)?;
            Ok(convert_water_flow(value, from, to))
        }
        QuantityKind::CoolingCapacity => {
            let from = parse_cooling_unit(from_unit_str)?;
            let to = parse_cooling_unit(to_unit_str)?;
            Ok(convert_cooling_capacity(value, from, to))
        }
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "cm" => Ok(LengthUnit::Centimeter),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeter),
        "ft2" | "ft^2" | "sqft" => Ok(AreaUnit::SquareFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m3" | "m^3" | "cum" => Ok(VolumeUnit::CubicMeter),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "ft3" | "ft^3" | "cuft" => Ok(VolumeUnit::CubicFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_airflow_unit(s: &str) -> Result<AirflowUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "cfm" => Ok(AirflowUnit::Cfm),
        "m3/h" | "cmh" => Ok(AirflowUnit::CubicMeterPerHour),
        "m3/s" => Ok(AirflowUnit::CubicMeterPerSecond),
        "l/s" | "lps" => Ok(AirflowUnit::LiterPerSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_water_flow_unit(s: &str) -> Result<WaterFlowUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "gpm" | "usgpm" => Ok(WaterFlowUnit::UsGpm),
        "l/s" | "lps" => Ok(WaterFlowUnit::LiterPerSecond),
        "m3/h" | "cmh" => Ok(WaterFlowUnit::CubicMeterPerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_cooling_unit(s: &str) -> Result<CoolingCapacityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "w" | "watt" => Ok(CoolingCapacityUnit::Watt),
        "kw" => Ok(CoolingCapacityUnit::Kilowatt),
        "tr" | "rt" | "ton" => Ok(CoolingCapacityUnit::TonRefrigeration),
        "btu/h" | "btuh" => Ok(CoolingCapacityUnit::BtuPerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
