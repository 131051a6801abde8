use anyhow::Result;
use clap::Parser;
use lineshard_main::{Cli, init_tracing, load_dot_env, run};

#[tokio::main]
async fn main() -> Result<()> {
    // `.env` values must be in place before clap reads its env fallbacks
    let env_files = load_dot_env(&std::env::current_dir()?);
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    for file in &env_files {
        tracing::debug!(path = %file.display(), "Loaded environment file");
    }

    run(cli).await
}
