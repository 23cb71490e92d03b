use bmical::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "bmical", about = "Terminal BMI calculator (체질량지수 계산기)")]
struct Args {
    /// Log at debug level instead of info
    #[arg(long)]
    debug: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to bmical.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let log_level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Ok(log_file) = File::create("bmical.log") {
        let _ = WriteLogger::init(log_level, log_config, log_file);
    }

    log::info!("bmical starting up");

    tui::run()
}
