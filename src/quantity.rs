use std::str::FromStr;

/// 단위 변환기가 다루는 물리량 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Length,
    Area,
    Volume,
    Airflow,
    WaterFlow,
    CoolingCapacity,
    Temperature,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 7] = [
        QuantityKind::Length,
        QuantityKind::Area,
        QuantityKind::Volume,
        QuantityKind::Airflow,
        QuantityKind::WaterFlow,
        QuantityKind::CoolingCapacity,
        QuantityKind::Temperature,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            QuantityKind::Length => "length",
            QuantityKind::Area => "area",
            QuantityKind::Volume => "volume",
            QuantityKind::Airflow => "airflow",
            QuantityKind::WaterFlow => "water-flow",
            QuantityKind::CoolingCapacity => "cooling",
            QuantityKind::Temperature => "temperature",
        }
    }
}

impl FromStr for QuantityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', "-");
        QuantityKind::ALL
            .into_iter()
            .find(|k| k.name() == key)
            .ok_or_else(|| s.to_string())
    }
}
