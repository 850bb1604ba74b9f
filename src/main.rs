use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sitewright")]
#[command(about = "Prompt-to-website generation API", long_about = None)]
struct Args {
    /// Path to SQLite database for saved projects (if not provided, uses in-memory database)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, default_value = "sitewright.config.yml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_thread_ids(true)
        .with_target(true)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::NONE)
        .init();

    sitewright::run_server(args.db, args.config).await
}
