//! 계산 결과를 텍스트 표, JSON, TOML로 출력한다.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

use crate::hvac::{CalculationResult, RoomInput, ZoneContext};
use crate::i18n::{keys, Translator};
use crate::project::{ProjectReport, ZoneSummary};
use crate::standards::Classification;

/// 보고서 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
    Toml,
}

#[derive(Debug)]
pub enum ReportError {
    Json(serde_json::Error),
    Toml(toml::ser::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Json(e) => write!(f, "JSON output error: {e}"),
            ReportError::Toml(e) => write!(f, "TOML output error: {e}"),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<serde_json::Error> for ReportError {
    fn from(value: serde_json::Error) -> Self {
        ReportError::Json(value)
    }
}

impl From<toml::ser::Error> for ReportError {
    fn from(value: toml::ser::Error) -> Self {
        ReportError::Toml(value)
    }
}

/// 실 단건 계산의 입력과 결과 묶음.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCalculation<'a> {
    pub room: &'a RoomInput,
    pub zone: &'a ZoneContext,
    pub result: &'a CalculationResult,
}

const LABEL_WIDTH: usize = 30;

fn row(out: &mut String, label: &str, value: impl Display) {
    let _ = writeln!(out, "  {label:<width$} {value}", width = LABEL_WIDTH);
}

fn serialize<T: Serialize>(value: &T, format: ReportFormat) -> Result<Option<String>, ReportError> {
    match format {
        ReportFormat::Text => Ok(None),
        ReportFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
        ReportFormat::Toml => Ok(Some(toml::to_string_pretty(value)?)),
    }
}

/// 결과 필드를 표 형태로 덧붙인다.
pub fn write_result_table(out: &mut String, tr: &Translator, r: &CalculationResult) {
    use keys::*;
    row(out, tr.t(FIELD_AREA), format!("{:.2}", r.area));
    row(out, tr.t(FIELD_VOLUME), format!("{:.2}", r.volume));
    row(out, tr.t(FIELD_ACPH), r.acph);
    row(out, tr.t(FIELD_ROOM_CFM), r.room_cfm);
    row(out, tr.t(FIELD_FRESH_AIR_CFM), r.fresh_air_cfm);
    row(out, tr.t(FIELD_EXHAUST_CFM), r.exhaust_cfm);
    row(out, tr.t(FIELD_WATER_VAPOR), format!("{:.2}", r.water_vapor_kg_hr));
    row(out, tr.t(FIELD_DEHUMIDIFICATION_CFM), r.dehumidification_cfm);
    row(out, tr.t(FIELD_RESULTANT_CFM), r.resultant_cfm);
    row(out, tr.t(FIELD_TERMINAL_SUPPLY), format!("{:.2}", r.terminal_supply_sqft));
    row(out, tr.t(FIELD_COOLING_LOAD), format!("{:.1}", r.cooling_load_tr));
    row(out, tr.t(FIELD_ROOM_AC_LOAD), format!("{:.1}", r.room_ac_load_tr));
    row(out, tr.t(FIELD_CFM_AC_LOAD), format!("{:.1}", r.cfm_ac_load_tr));
    row(out, tr.t(FIELD_AHU_CFM), r.ahu_cfm);
    row(out, tr.t(FIELD_AHU_SIZE), r.ahu_size);
    row(out, tr.t(FIELD_STATIC_PRESSURE), r.static_pressure);
    row(out, tr.t(FIELD_BLOWER_MODEL), &r.blower_model);
    row(out, tr.t(FIELD_MOTOR_HP), r.motor_hp);
    row(out, tr.t(FIELD_COIL_ROWS), r.cooling_coil_rows);
    row(out, tr.t(FIELD_AHU_COOLING_LOAD), format!("{:.1}", r.ahu_cooling_load_tr));
    row(out, tr.t(FIELD_FILTER_STAGES), r.filter_stages);
    row(out, tr.t(FIELD_CHW_GPM), format!("{:.2}", r.chilled_water_gpm));
    row(out, tr.t(FIELD_CHW_LPS), format!("{:.2}", r.chilled_water_lps));
    row(out, tr.t(FIELD_FLOW_VELOCITY), r.flow_velocity_ms);
    row(out, tr.t(FIELD_PIPE_SIZE), r.pipe_size_mm);
}

fn write_zone_header(out: &mut String, tr: &Translator, zone: &ZoneContext) {
    row(out, tr.t(keys::REPORT_CLASSIFICATION), &zone.classification);
    row(out, tr.t(keys::REPORT_SYSTEM_TYPE), zone.system_type);
    row(
        out,
        tr.t(keys::REPORT_ACPH_RANGE),
        format!("{} - {}", zone.acph_min, zone.acph_max),
    );
}

fn write_zone_summary(out: &mut String, tr: &Translator, s: &ZoneSummary) {
    use keys::*;
    let _ = writeln!(out, "\n  -- {} --", tr.t(REPORT_ZONE_SUMMARY));
    row(out, tr.t(REPORT_ROOM_COUNT), s.room_count);
    row(out, tr.t(REPORT_TOTAL_AREA), format!("{:.2}", s.total_area));
    row(out, tr.t(REPORT_TOTAL_CFM), s.total_resultant_cfm);
    row(out, tr.t(REPORT_TOTAL_TR), format!("{:.1}", s.total_cooling_load_tr));
    row(out, tr.t(REPORT_TOTAL_GPM), format!("{:.2}", s.total_chilled_water_gpm));
    row(out, tr.t(FIELD_AHU_CFM), s.ahu.ahu_cfm);
    row(out, tr.t(FIELD_AHU_SIZE), s.ahu.ahu_size);
    row(out, tr.t(FIELD_BLOWER_MODEL), &s.ahu.blower_model);
    row(out, tr.t(FIELD_MOTOR_HP), s.ahu.motor_hp);
}

/// 실 단건 결과를 출력 문자열로 만든다.
pub fn render_room(
    tr: &Translator,
    room: &RoomInput,
    zone: &ZoneContext,
    result: &CalculationResult,
    format: ReportFormat,
) -> Result<String, ReportError> {
    let bundle = RoomCalculation { room, zone, result };
    if let Some(s) = serialize(&bundle, format)? {
        return Ok(s);
    }
    let mut out = String::new();
    write_zone_header(&mut out, tr, zone);
    let _ = writeln!(out);
    write_result_table(&mut out, tr, result);
    Ok(out)
}

/// 프로젝트 전체 결과를 출력 문자열로 만든다.
pub fn render_project(
    tr: &Translator,
    report: &ProjectReport,
    format: ReportFormat,
) -> Result<String, ReportError> {
    if let Some(s) = serialize(report, format)? {
        return Ok(s);
    }
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", tr.t(keys::REPORT_PROJECT), report.name);
    if !report.location.is_empty() {
        let _ = writeln!(out, "{}: {}", tr.t(keys::REPORT_LOCATION), report.location);
    }
    for zone in &report.zones {
        let _ = writeln!(out, "\n== {}: {} ==", tr.t(keys::REPORT_ZONE), zone.name);
        write_zone_header(&mut out, tr, &zone.context);
        for room in &zone.rooms {
            let _ = writeln!(out, "\n  [{}: {}]", tr.t(keys::REPORT_ROOM), room.name);
            write_result_table(&mut out, tr, &room.result);
        }
        write_zone_summary(&mut out, tr, &zone.summary);
    }
    let _ = writeln!(out, "\n== {} ==", tr.t(keys::REPORT_PROJECT_TOTAL));
    row(&mut out, tr.t(keys::REPORT_TOTAL_CFM), report.total_resultant_cfm);
    row(
        &mut out,
        tr.t(keys::REPORT_TOTAL_TR),
        format!("{:.1}", report.total_cooling_load_tr),
    );
    Ok(out)
}

/// 규격/등급/ACPH 참조 목록을 출력한다.
pub fn render_classifications(
    tr: &Translator,
    list: &[&Classification],
    format: ReportFormat,
) -> Result<String, ReportError> {
    match format {
        ReportFormat::Json => return Ok(serde_json::to_string_pretty(list)?),
        ReportFormat::Toml => {
            #[derive(Serialize)]
            struct Listing<'a> {
                classifications: &'a [&'a Classification],
            }
            return Ok(toml::to_string_pretty(&Listing {
                classifications: list,
            })?);
        }
        ReportFormat::Text => {}
    }
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::STANDARDS_HEADING));
    for c in list {
        let _ = writeln!(
            out,
            "  {:<18} {:<44} {:>4} - {:<4}",
            c.standard, c.classification, c.acph_min, c.acph_max
        );
    }
    Ok(out)
}
