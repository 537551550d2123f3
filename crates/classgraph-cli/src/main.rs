//! Classgraph CLI - inspect and edit UML class graph records

mod cli;

use clap::Parser;
use classgraph::core::logging::init_logging;

fn main() {
    let cli_args = cli::Cli::parse();

    // An explicit --log-level wins; environment variables only replace the default.
    let level = cli::resolve_log_level(cli_args.log_level, |name| std::env::var(name).ok());
    if let Err(e) = init_logging(Some(&level), Some(cli_args.log_format.as_str())) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let mut app = cli::ClassgraphApp::default();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
