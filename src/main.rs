use clap::Parser;

use hdaddr::commands::{self, Commands};
use hdaddr::telemetry;

#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"), about = env!("CARGO_PKG_DESCRIPTION"), version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[arg(long, global = true, env = "HDADDR_LOG_LEVEL", default_value = "warn", help = "Log filter (overridden by RUST_LOG)")]
    log_level: String,
    #[arg(long, global = true, help = "Log as JSON lines")]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = telemetry::init_logging(&cli.log_level, cli.log_json) {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }
    if let Err(e) = commands::execute_command(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
