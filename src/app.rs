use std::path::PathBuf;

use crate::config::Config;
use crate::conversion;
use crate::hvac::{self, SystemType};
use crate::i18n::{keys, Translator};
use crate::project::{self, Project, RoomSpec, ZoneSpec};
use crate::report::{self, ReportFormat};
use crate::standards;
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 프로젝트 파일/존 해석 오류
    Project(project::ProjectError),
    /// 출력 직렬화 오류
    Report(report::ReportError),
    /// 참조 테이블에 없는 규격
    UnknownStandard(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Conversion(e) => write!(f, "{e}"),
            AppError::Project(e) => write!(f, "{e}"),
            AppError::Report(e) => write!(f, "{e}"),
            AppError::UnknownStandard(s) => write!(f, "unknown standard: {s}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<project::ProjectError> for AppError {
    fn from(value: project::ProjectError) -> Self {
        AppError::Project(value)
    }
}

impl From<report::ReportError> for AppError {
    fn from(value: report::ReportError) -> Self {
        AppError::Report(value)
    }
}

/// 실 하나를 명령행 인자로 계산할 때의 입력.
#[derive(Debug, Clone, clap::Args)]
pub struct CalcArgs {
    /// 길이 [m]
    #[arg(long)]
    pub length: f64,
    /// 폭 [m]
    #[arg(long)]
    pub width: f64,
    /// 높이 [m]
    #[arg(long)]
    pub height: f64,
    /// 청정도 등급 (예: "ISO 6")
    #[arg(long)]
    pub classification: String,
    /// 규격 (예: "ISO 14644-4"). 지정하면 ACPH 범위를 참조 테이블에서 찾는다.
    #[arg(long)]
    pub standard: Option<String>,
    #[arg(long)]
    pub acph_min: Option<u32>,
    #[arg(long)]
    pub acph_max: Option<u32>,
    /// Chilled Water | DX | Ventilation
    #[arg(long)]
    pub system_type: Option<SystemType>,
    #[arg(long)]
    pub people: Option<u32>,
    /// 장비 부하 [kW]
    #[arg(long)]
    pub equipment_kw: Option<f64>,
    /// 조명 부하 [W/sqft]
    #[arg(long)]
    pub lighting: Option<f64>,
    #[arg(long)]
    pub infiltration: Option<f64>,
    #[arg(long)]
    pub fresh_air_ratio: Option<f64>,
    #[arg(long)]
    pub exhaust_ratio: Option<f64>,
}

impl CalcArgs {
    fn zone_spec(&self) -> ZoneSpec {
        ZoneSpec {
            name: "cli".to_string(),
            standard: self.standard.clone(),
            classification: self.classification.clone(),
            system_type: self.system_type,
            acph_min: self.acph_min,
            acph_max: self.acph_max,
            rooms: Vec::new(),
        }
    }

    fn room_spec(&self) -> RoomSpec {
        RoomSpec {
            name: "cli".to_string(),
            length: self.length,
            width: self.width,
            height: self.height,
            people_count: self.people,
            equipment_load: self.equipment_kw,
            lighting: self.lighting,
            infiltration: self.infiltration,
            fresh_air_ratio: self.fresh_air_ratio,
            exhaust_ratio: self.exhaust_ratio,
            temp_required: None,
            rh_required: None,
        }
    }
}

/// CLI 하위 명령.
#[derive(Debug, Clone, clap::Subcommand)]
pub enum Command {
    /// 실 하나의 공조 용량을 계산한다
    Calc(CalcArgs),
    /// 프로젝트 파일(.toml/.json)의 모든 존/실을 계산한다
    Project {
        path: PathBuf,
    },
    /// 청정도 규격과 등급별 ACPH 범위를 보여준다
    Standards {
        #[arg(long)]
        standard: Option<String>,
    },
    /// 단위를 변환한다 (length, area, volume, airflow, water-flow, cooling, temperature)
    Convert {
        quantity: String,
        value: f64,
        from: String,
        to: String,
    },
    /// 프롬프트로 실을 하나씩 입력해 계산한다
    Interactive,
}

/// 명령 실행에 필요한 설정/번역/출력 형식.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub translator: Translator,
    pub format: ReportFormat,
}

/// 하위 명령을 실행한다.
pub fn run(command: Command, ctx: &AppContext) -> Result<(), AppError> {
    match command {
        Command::Calc(args) => {
            let zone = args.zone_spec().resolve(ctx.config.default_system_type)?;
            let room = args.room_spec().to_input(&ctx.config.room_defaults.base_room());
            let result = hvac::calculate(&room, &zone);
            let out = report::render_room(&ctx.translator, &room, &zone, &result, ctx.format)?;
            println!("{out}");
        }
        Command::Project { path } => {
            tracing::info!(path = %path.display(), "loading project");
            let project = Project::from_path(&path)?;
            let report = project.evaluate_with(&ctx.config)?;
            println!(
                "{}",
                report::render_project(&ctx.translator, &report, ctx.format)?
            );
        }
        Command::Standards { standard } => {
            let list = match standard {
                Some(name) => {
                    let found = standards::find_standard(&name)
                        .ok_or_else(|| AppError::UnknownStandard(name.clone()))?;
                    standards::classifications_for(found)
                }
                None => standards::classifications(),
            };
            println!(
                "{}",
                report::render_classifications(&ctx.translator, &list, ctx.format)?
            );
        }
        Command::Convert {
            quantity,
            value,
            from,
            to,
        } => {
            let kind = conversion::parse_quantity(&quantity)?;
            let result = conversion::convert(kind, value, from.trim(), to.trim())?;
            println!("{} {result} {}", ctx.translator.t(keys::CONVERT_RESULT), to.trim());
        }
        Command::Interactive => {
            ui_cli::run_interactive(ctx)?;
            println!("{}", ctx.translator.t(keys::APP_EXIT));
        }
    }
    Ok(())
}
