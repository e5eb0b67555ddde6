use std::io::{self, Write};

use crate::app::{AppContext, AppError};
use crate::hvac::{self, SystemType, ZoneContext};
use crate::i18n::{keys, Translator};
use crate::report;
use crate::standards;

/// 프롬프트로 실 치수와 존 조건을 입력받아 계산을 반복한다.
pub fn run_interactive(ctx: &AppContext) -> Result<(), AppError> {
    let tr = &ctx.translator;
    loop {
        println!("{}", tr.t(keys::INTERACTIVE_HEADING));
        let mut room = ctx.config.room_defaults.base_room();
        room.length = read_f64(tr, tr.t(keys::PROMPT_LENGTH))?;
        room.width = read_f64(tr, tr.t(keys::PROMPT_WIDTH))?;
        room.height = read_f64(tr, tr.t(keys::PROMPT_HEIGHT))?;
        room.people_count = read_f64(tr, tr.t(keys::PROMPT_PEOPLE))?.max(0.0) as u32;
        room.equipment_load = read_f64(tr, tr.t(keys::PROMPT_EQUIPMENT))?;

        let zone = read_zone(ctx)?;
        let result = hvac::calculate(&room, &zone);
        let out = report::render_room(tr, &room, &zone, &result, ctx.format)?;
        println!("{out}");

        let again = read_line(tr.t(keys::PROMPT_CONTINUE))?;
        if !matches!(again.trim().to_lowercase().as_str(), "y" | "yes") {
            break;
        }
    }
    Ok(())
}

fn read_zone(ctx: &AppContext) -> Result<ZoneContext, AppError> {
    let tr = &ctx.translator;
    let standard = read_line(tr.t(keys::PROMPT_STANDARD))?;
    let classification = read_line(tr.t(keys::PROMPT_CLASSIFICATION))?;
    let system_type = read_system_type(tr, ctx.config.default_system_type)?;

    if !standard.trim().is_empty() {
        if let Some(zone) =
            standards::zone_context(standard.trim(), classification.trim(), system_type)
        {
            return Ok(zone);
        }
        println!("{} {}", tr.t(keys::STANDARDS_NOT_FOUND), standard.trim());
    }
    let acph_min = read_f64(tr, tr.t(keys::PROMPT_ACPH_MIN))?.max(0.0) as u32;
    let acph_max = read_f64(tr, tr.t(keys::PROMPT_ACPH_MAX))?.max(0.0) as u32;
    Ok(ZoneContext::new(
        acph_min,
        acph_max,
        classification.trim(),
        system_type,
    ))
}

fn read_system_type(tr: &Translator, default: SystemType) -> Result<SystemType, AppError> {
    loop {
        let s = read_line(tr.t(keys::PROMPT_SYSTEM_TYPE))?;
        if s.trim().is_empty() {
            return Ok(default);
        }
        match s.parse::<SystemType>() {
            Ok(t) => return Ok(t),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_SYSTEM_TYPE)),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        // 입력 스트림 종료
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
