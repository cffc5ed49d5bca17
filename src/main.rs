use clap::Parser;
use just_habits::cli::commands::Cli;
use just_habits::cli::handlers;
use just_habits::io::config_io;
use just_habits::logging;

fn main() {
    let cli = Cli::parse();

    let data_dir = match config_io::resolve_data_dir(cli.data_dir.as_deref()) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let level = match cli.log_level.clone() {
        Some(level) => level,
        None => match config_io::read_config(&data_dir) {
            Ok(config) => config.log.level,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },
    };
    // Kept alive until exit so buffered records are flushed
    let logger = match logging::init_logging(&level, &data_dir.join("logs")) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            None
        }
    };

    let result = match cli.command {
        // No subcommand → launch TUI
        None => just_habits::tui::run(&data_dir),
        Some(command) => handlers::dispatch(command, cli.json, &data_dir),
    };
    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        // exit skips destructors
        drop(logger);
        std::process::exit(1);
    }
}
