//! 클린룸 공조(HVAC) 용량 계산 엔진.
//! 치수 정규화 → 풍량 → 냉방부하 → 장비 선정 → 냉수 배관 순서의 순수 함수로 구성한다.

pub mod airflow;
pub mod engine;
pub mod equipment;
pub mod geometry;
pub mod hydraulic;
pub mod room;
pub mod rounding;
pub mod rules;
pub mod thermal;

pub use engine::{calculate, CalculationResult};
pub use equipment::{
    ahu_size_by_cfm, blower_model, cooling_coil_rows, filter_stages, motor_hp, select_ahu,
    AhuSelection, Selection, REFER, STATIC_PRESSURE,
};
pub use room::{RoomInput, SystemType, UnknownSystemType, ZoneContext};
