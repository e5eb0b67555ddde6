use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cleanroom_hvac::app::{self, AppContext, Command};
use cleanroom_hvac::config::{self, CONFIG_FILE};
use cleanroom_hvac::i18n::{self, keys, Translator};
use cleanroom_hvac::report::ReportFormat;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cleanroom_hvac")]
#[command(about = "Cleanroom HVAC sizing calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// 표시 언어 (auto/ko/en)
    #[arg(short = 'L', long, global = true)]
    lang: Option<String>,

    /// 출력 형식. 생략하면 설정 파일 값을 쓴다.
    #[arg(short, long, global = true, value_enum)]
    format: Option<ReportFormat>,

    /// 설정 파일 경로
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// 언어팩(<lang>.toml) 디렉터리
    #[arg(long, global = true)]
    locales: Option<PathBuf>,

    /// 디버그 로그 출력
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let lang = i18n::resolve_language(cli.lang.as_deref(), None);
    let fallback = Translator::new(&lang);
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", fallback.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let ctx = AppContext {
        translator: Translator::new_with_pack(&lang, cli.locales.as_deref()),
        format: cli.format.unwrap_or(cfg.report_format),
        config: cfg,
    };
    app::run(cli.command, &ctx)
}
