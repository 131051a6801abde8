use anyhow::Result;

use crate::{Cli, Info, Report};

pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    tracing::debug!(config = ?config, file = %cli.file.display(), "Partitioning");

    let report = Report::collect(cli.file, config, cli.inspect).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", Info::from(&report));
    }

    Ok(())
}
