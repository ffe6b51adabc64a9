use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use tictac::WinScan;
use tictac::core::board::Mark;
use tictac::core::config::{self, CliOverrides, TictacConfig};

#[derive(Parser)]
#[command(name = "tictac", version, about = "Tic-tac-toe in the terminal")]
struct Args {
    /// Mark that moves first (x or o)
    #[arg(short, long)]
    first: Option<Mark>,

    /// Which lines the winner check inspects after each move
    #[arg(short, long, value_enum)]
    win_scan: Option<WinScan>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config is loaded before the logger exists, so keep the error for later
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (TictacConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        first_player: args.first,
        win_scan: args.win_scan,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger; the terminal UI owns stdout
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("tictac starting up with {:?}", resolved);

    tictac::tui::run(resolved)
}
