use backstack::LogLevel;
use backstack::core::config::{self, BackstackConfig, CliOverrides};
use backstack::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "backstack", about = "Catalogue of sample screens over a navigation back-stack")]
struct Args {
    /// Log verbosity (overrides config and BACKSTACK_LOG_LEVEL)
    #[arg(short, long, value_enum)]
    log_level: Option<LogLevel>,

    /// Hide the back-stack side panel
    #[arg(long)]
    hide_stack: bool,

    /// Reuse the top screen when opening a sample of the same kind
    #[arg(long)]
    single_top: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (BackstackConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            log_level: args.log_level,
            hide_stack: args.hide_stack,
            single_top: args.single_top,
        },
    );

    // Initialize file logger - writes to the resolved log file
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level.into(), log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("{}; falling back to defaults", e);
    }
    log::info!("Backstack starting up with config: {:?}", resolved);

    tui::run(resolved)
}
