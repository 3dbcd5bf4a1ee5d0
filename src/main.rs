use anyhow::Result;
use clap::Parser;

use comptes_cli::{cli::Cli, log_output, settings::init_logger};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(log_output(&cli))?;
    comptes_cli::run(cli).await?;
    Ok(())
}
