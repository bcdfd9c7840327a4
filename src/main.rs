use anyhow::Result;
use askbot::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
