use anyhow::Result;
use clap::Parser;
use skycast::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    skycast::run(cli).await
}
