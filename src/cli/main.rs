//! Command-line interface entry point for `GpaCalc`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use commands::Workspace;
use gpa_calc::config::Config;
use gpa_calc::info;
use gpa_calc::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Systems => {
            let workspace = Workspace::open(&config);
            commands::edit::list_systems(&workspace);
        }
        Command::System { id } => {
            let mut workspace = Workspace::open(&config);
            commands::edit::system(&mut workspace, id.as_deref());
        }
        Command::Semester { subcommand } => {
            let mut workspace = Workspace::open(&config);
            commands::edit::semester(&mut workspace, subcommand);
        }
        Command::Subject { subcommand } => {
            let mut workspace = Workspace::open(&config);
            commands::edit::subject(&mut workspace, subcommand);
        }
        Command::Show => {
            let mut workspace = Workspace::open(&config);
            commands::edit::show(&mut workspace);
        }
        Command::Calculate { chart } => {
            let mut workspace = Workspace::open(&config);
            commands::calculate::run(&mut workspace, chart);
        }
        Command::Report { output, format } => {
            let mut workspace = Workspace::open(&config);
            commands::report::run(&mut workspace, output.as_deref(), &format, &config);
        }
        Command::Clear { yes } => {
            let mut workspace = Workspace::open(&config);
            commands::edit::clear(&mut workspace, yes);
        }
    }
}
