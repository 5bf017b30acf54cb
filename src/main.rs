use clap::Parser;
use reposcout::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "reposcout", about = "Search GitHub repositories from the terminal")]
struct Args {
    /// GitHub access token (overrides config file and GITHUB_ACCESS_TOKEN)
    #[arg(short, long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to reposcout.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("reposcout.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Ignoring malformed config: {e}");
            config::ReposcoutConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.token.as_deref());

    log::info!(
        "reposcout starting up (authenticated: {})",
        resolved.token.is_some()
    );

    reposcout::tui::run(resolved)
}
