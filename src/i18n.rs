use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const REPORT_PROJECT: &str = "report.project";
    pub const REPORT_LOCATION: &str = "report.location";
    pub const REPORT_ZONE: &str = "report.zone";
    pub const REPORT_ROOM: &str = "report.room";
    pub const REPORT_CLASSIFICATION: &str = "report.classification";
    pub const REPORT_SYSTEM_TYPE: &str = "report.system_type";
    pub const REPORT_ACPH_RANGE: &str = "report.acph_range";
    pub const REPORT_ZONE_SUMMARY: &str = "report.zone_summary";
    pub const REPORT_ROOM_COUNT: &str = "report.room_count";
    pub const REPORT_TOTAL_AREA: &str = "report.total_area";
    pub const REPORT_TOTAL_CFM: &str = "report.total_cfm";
    pub const REPORT_TOTAL_TR: &str = "report.total_tr";
    pub const REPORT_TOTAL_GPM: &str = "report.total_gpm";
    pub const REPORT_PROJECT_TOTAL: &str = "report.project_total";

    pub const FIELD_AREA: &str = "field.area";
    pub const FIELD_VOLUME: &str = "field.volume";
    pub const FIELD_ACPH: &str = "field.acph";
    pub const FIELD_ROOM_CFM: &str = "field.room_cfm";
    pub const FIELD_FRESH_AIR_CFM: &str = "field.fresh_air_cfm";
    pub const FIELD_EXHAUST_CFM: &str = "field.exhaust_cfm";
    pub const FIELD_WATER_VAPOR: &str = "field.water_vapor";
    pub const FIELD_DEHUMIDIFICATION_CFM: &str = "field.dehumidification_cfm";
    pub const FIELD_RESULTANT_CFM: &str = "field.resultant_cfm";
    pub const FIELD_TERMINAL_SUPPLY: &str = "field.terminal_supply";
    pub const FIELD_COOLING_LOAD: &str = "field.cooling_load";
    pub const FIELD_ROOM_AC_LOAD: &str = "field.room_ac_load";
    pub const FIELD_CFM_AC_LOAD: &str = "field.cfm_ac_load";
    pub const FIELD_AHU_CFM: &str = "field.ahu_cfm";
    pub const FIELD_AHU_SIZE: &str = "field.ahu_size";
    pub const FIELD_STATIC_PRESSURE: &str = "field.static_pressure";
    pub const FIELD_BLOWER_MODEL: &str = "field.blower_model";
    pub const FIELD_MOTOR_HP: &str = "field.motor_hp";
    pub const FIELD_COIL_ROWS: &str = "field.coil_rows";
    pub const FIELD_AHU_COOLING_LOAD: &str = "field.ahu_cooling_load";
    pub const FIELD_FILTER_STAGES: &str = "field.filter_stages";
    pub const FIELD_CHW_GPM: &str = "field.chw_gpm";
    pub const FIELD_CHW_LPS: &str = "field.chw_lps";
    pub const FIELD_FLOW_VELOCITY: &str = "field.flow_velocity";
    pub const FIELD_PIPE_SIZE: &str = "field.pipe_size";

    pub const STANDARDS_HEADING: &str = "standards.heading";
    pub const STANDARDS_NOT_FOUND: &str = "standards.not_found";

    pub const INTERACTIVE_HEADING: &str = "interactive.heading";
    pub const PROMPT_LENGTH: &str = "prompt.length";
    pub const PROMPT_WIDTH: &str = "prompt.width";
    pub const PROMPT_HEIGHT: &str = "prompt.height";
    pub const PROMPT_PEOPLE: &str = "prompt.people";
    pub const PROMPT_EQUIPMENT: &str = "prompt.equipment";
    pub const PROMPT_STANDARD: &str = "prompt.standard";
    pub const PROMPT_CLASSIFICATION: &str = "prompt.classification";
    pub const PROMPT_ACPH_MIN: &str = "prompt.acph_min";
    pub const PROMPT_ACPH_MAX: &str = "prompt.acph_max";
    pub const PROMPT_SYSTEM_TYPE: &str = "prompt.system_type";
    pub const PROMPT_CONTINUE: &str = "prompt.continue";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_INVALID_SYSTEM_TYPE: &str = "error.invalid_system_type";
    pub const CONVERT_RESULT: &str = "convert.result";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)).unwrap_or("[missing translation]"),
            Language::En => en(key).unwrap_or("[missing translation]"),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: `[report] project = "..."` 처럼 키 경로를 테이블로 나눈다.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        REPORT_PROJECT => "프로젝트",
        REPORT_LOCATION => "위치",
        REPORT_ZONE => "존",
        REPORT_ROOM => "실",
        REPORT_CLASSIFICATION => "청정도 등급",
        REPORT_SYSTEM_TYPE => "공조 방식",
        REPORT_ACPH_RANGE => "ACPH 범위",
        REPORT_ZONE_SUMMARY => "존 합계",
        REPORT_ROOM_COUNT => "실 개수",
        REPORT_TOTAL_AREA => "총 면적 [m²]",
        REPORT_TOTAL_CFM => "총 풍량 [CFM]",
        REPORT_TOTAL_TR => "총 냉방부하 [TR]",
        REPORT_TOTAL_GPM => "총 냉수량 [GPM]",
        REPORT_PROJECT_TOTAL => "프로젝트 합계",
        FIELD_AREA => "면적 [m²]",
        FIELD_VOLUME => "체적 [m³]",
        FIELD_ACPH => "환기횟수 [ACPH]",
        FIELD_ROOM_CFM => "실 풍량 [CFM]",
        FIELD_FRESH_AIR_CFM => "외기 풍량 [CFM]",
        FIELD_EXHAUST_CFM => "배기 풍량 [CFM]",
        FIELD_WATER_VAPOR => "수증기 제거량 [kg/h]",
        FIELD_DEHUMIDIFICATION_CFM => "제습 풍량 [CFM]",
        FIELD_RESULTANT_CFM => "설계 풍량 [CFM]",
        FIELD_TERMINAL_SUPPLY => "터미널 공급 면적 [sqft]",
        FIELD_COOLING_LOAD => "냉방부하 [TR]",
        FIELD_ROOM_AC_LOAD => "실 AC 부하 [TR]",
        FIELD_CFM_AC_LOAD => "풍량 기준 AC 부하 [TR]",
        FIELD_AHU_CFM => "AHU 풍량 [CFM]",
        FIELD_AHU_SIZE => "AHU 규격",
        FIELD_STATIC_PRESSURE => "정압",
        FIELD_BLOWER_MODEL => "송풍기 모델",
        FIELD_MOTOR_HP => "모터 [HP]",
        FIELD_COIL_ROWS => "냉각코일 열수",
        FIELD_AHU_COOLING_LOAD => "AHU 냉방부하 [TR]",
        FIELD_FILTER_STAGES => "필터 단수",
        FIELD_CHW_GPM => "냉수량 [GPM]",
        FIELD_CHW_LPS => "냉수량 [L/s]",
        FIELD_FLOW_VELOCITY => "배관 유속 [m/s]",
        FIELD_PIPE_SIZE => "배관 내경 [mm]",
        STANDARDS_HEADING => "청정도 규격 / 등급 / ACPH",
        STANDARDS_NOT_FOUND => "해당 규격을 찾을 수 없습니다:",
        INTERACTIVE_HEADING => "\n=== 클린룸 실 공조 계산 ===",
        PROMPT_LENGTH => "길이 [m]: ",
        PROMPT_WIDTH => "폭 [m]: ",
        PROMPT_HEIGHT => "높이 [m]: ",
        PROMPT_PEOPLE => "재실 인원 (없으면 0): ",
        PROMPT_EQUIPMENT => "장비 부하 [kW] (없으면 0): ",
        PROMPT_STANDARD => "규격 (예: ISO 14644-4, 직접 입력은 엔터): ",
        PROMPT_CLASSIFICATION => "청정도 등급 (예: ISO 6): ",
        PROMPT_ACPH_MIN => "ACPH 하한: ",
        PROMPT_ACPH_MAX => "ACPH 상한: ",
        PROMPT_SYSTEM_TYPE => "공조 방식 (Chilled Water / DX / Ventilation, 엔터=기본값): ",
        PROMPT_CONTINUE => "다른 실을 계산할까요? (y/N): ",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_INVALID_SYSTEM_TYPE => "알 수 없는 공조 방식입니다.",
        CONVERT_RESULT => "변환 결과:",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        REPORT_PROJECT => "Project",
        REPORT_LOCATION => "Location",
        REPORT_ZONE => "Zone",
        REPORT_ROOM => "Room",
        REPORT_CLASSIFICATION => "Classification",
        REPORT_SYSTEM_TYPE => "System type",
        REPORT_ACPH_RANGE => "ACPH range",
        REPORT_ZONE_SUMMARY => "Zone summary",
        REPORT_ROOM_COUNT => "Rooms",
        REPORT_TOTAL_AREA => "Total area [m²]",
        REPORT_TOTAL_CFM => "Total airflow [CFM]",
        REPORT_TOTAL_TR => "Total cooling load [TR]",
        REPORT_TOTAL_GPM => "Total chilled water [GPM]",
        REPORT_PROJECT_TOTAL => "Project total",
        FIELD_AREA => "Area [m²]",
        FIELD_VOLUME => "Volume [m³]",
        FIELD_ACPH => "Air changes [ACPH]",
        FIELD_ROOM_CFM => "Room airflow [CFM]",
        FIELD_FRESH_AIR_CFM => "Fresh air [CFM]",
        FIELD_EXHAUST_CFM => "Exhaust [CFM]",
        FIELD_WATER_VAPOR => "Water vapor removal [kg/h]",
        FIELD_DEHUMIDIFICATION_CFM => "Dehumidification [CFM]",
        FIELD_RESULTANT_CFM => "Resultant airflow [CFM]",
        FIELD_TERMINAL_SUPPLY => "Terminal supply area [sqft]",
        FIELD_COOLING_LOAD => "Cooling load [TR]",
        FIELD_ROOM_AC_LOAD => "Room AC load [TR]",
        FIELD_CFM_AC_LOAD => "Airflow AC load [TR]",
        FIELD_AHU_CFM => "AHU airflow [CFM]",
        FIELD_AHU_SIZE => "AHU size",
        FIELD_STATIC_PRESSURE => "Static pressure",
        FIELD_BLOWER_MODEL => "Blower model",
        FIELD_MOTOR_HP => "Motor [HP]",
        FIELD_COIL_ROWS => "Cooling coil rows",
        FIELD_AHU_COOLING_LOAD => "AHU cooling load [TR]",
        FIELD_FILTER_STAGES => "Filter stages",
        FIELD_CHW_GPM => "Chilled water [GPM]",
        FIELD_CHW_LPS => "Chilled water [L/s]",
        FIELD_FLOW_VELOCITY => "Pipe velocity [m/s]",
        FIELD_PIPE_SIZE => "Pipe size [mm]",
        STANDARDS_HEADING => "Standard / Classification / ACPH",
        STANDARDS_NOT_FOUND => "Standard not found:",
        INTERACTIVE_HEADING => "\n=== Cleanroom Room HVAC Calculator ===",
        PROMPT_LENGTH => "Length [m]: ",
        PROMPT_WIDTH => "Width [m]: ",
        PROMPT_HEIGHT => "Height [m]: ",
        PROMPT_PEOPLE => "People (0 if none): ",
        PROMPT_EQUIPMENT => "Equipment load [kW] (0 if none): ",
        PROMPT_STANDARD => "Standard (e.g. ISO 14644-4, enter to type ACPH manually): ",
        PROMPT_CLASSIFICATION => "Classification (e.g. ISO 6): ",
        PROMPT_ACPH_MIN => "ACPH min: ",
        PROMPT_ACPH_MAX => "ACPH max: ",
        PROMPT_SYSTEM_TYPE => "System type (Chilled Water / DX / Ventilation, enter=default): ",
        PROMPT_CONTINUE => "Calculate another room? (y/N): ",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_INVALID_SYSTEM_TYPE => "Unknown system type.",
        CONVERT_RESULT => "Result:",
        _ => return None,
    })
}
