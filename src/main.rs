use clap::Parser;
use crop_advisor::cli::{run, Cli};
use crop_advisor::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
