//! 클린룸 공조 설계 계산 라이브러리. 계산 엔진과 참조 데이터, 프로젝트/보고서 처리를
//! 라이브러리로 분리해 CLI 외의 호출자도 같은 계산을 쓰도록 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod hvac;
pub mod i18n;
pub mod project;
pub mod quantity;
pub mod report;
pub mod standards;
pub mod ui_cli;
pub mod units;
