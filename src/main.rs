// Token Updater: Application Entry Point
//
// Parses CLI arguments, initializes structured logging on stderr (token
// values are never logged), and runs the update flow on the terminal.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use token_updater::cli::{execute, Cli};

fn main() {
    // RUST_LOG=token_updater=debug for verbose output. The default stays quiet
    // so diagnostics do not interleave with the console output on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("token_updater=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // Success or failure of the update itself is shown on the console only;
    // the exit status reflects whether the tool could run at all.
    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
