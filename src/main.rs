use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use mindful::core::config::{self, CliOverrides, ResolvedConfig};
use mindful::headless;
use mindful::service::HttpSummaryService;
use mindful::tui;
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "mindful", about = "Terminal client for an AI text summarizer")]
struct Args {
    /// Summarize this text once and print the result instead of opening the TUI
    text: Option<String>,

    /// Read the text to summarize from stdin (one-shot mode)
    #[arg(long, conflicts_with = "text")]
    stdin: bool,

    /// Base URL of the summarization backend
    #[arg(short, long)]
    base_url: Option<String>,

    /// Skip the startup probe of the backend
    #[arg(long)]
    no_health_check: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::MindfulConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        base_url: args.base_url,
        no_health_check: args.no_health_check,
        log_level: args.log_level,
    };
    let resolved = config::resolve(&file_config, &cli);
    init_logging(&resolved);

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
        eprintln!("mindful: ignoring config file ({e})");
    }
    log::info!("Mindful starting up against {}", resolved.base_url);

    let one_shot = if args.stdin {
        match headless::read_stdin() {
            Ok(text) => Some(text),
            Err(e) => {
                eprintln!("mindful: failed to read stdin: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        args.text
    };

    if let Some(text) = one_shot {
        let service = HttpSummaryService::new(resolved.base_url.as_str());
        let (view, submitted) = headless::summarize_once(&service, text).await;
        headless::report(&view);
        return headless::exit_code(&view, submitted);
    }

    match tui::run(resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("TUI exited with error: {}", e);
            eprintln!("mindful: {e}");
            ExitCode::FAILURE
        }
    }
}
