//! 단위 정의 및 변환 모듈 모음. 계산 엔진의 m→ft 환산 계수도 여기서 정의한다.

pub mod airflow;
pub mod area;
pub mod cooling_capacity;
pub mod length;
pub mod temperature;
pub mod volume;
pub mod water_flow;

pub use airflow::{convert_airflow, AirflowUnit};
pub use area::{convert_area, AreaUnit, SQFT_PER_SQM};
pub use cooling_capacity::{convert_cooling_capacity, CoolingCapacityUnit};
pub use length::{convert_length, LengthUnit, M_PER_FT, M_PER_IN};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use volume::{convert_volume, VolumeUnit, CUFT_PER_CUM};
pub use water_flow::{convert_water_flow, WaterFlowUnit, LPS_PER_GPM};
