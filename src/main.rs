use anyhow::Result;
use clap::Parser;
use team_registry::config::Config;
use team_registry::http;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing `.env` file is fine: deployments pass the variables directly.
    dotenv::dotenv().ok();

    // Initialize the logger. It also collects the `log` records.
    tracing_subscriber::fmt::init();

    // Parse our configuration from the environment.
    // This will exit with a help message if something is wrong.
    let config = Config::parse();

    // We spin up our API.
    http::serve(config).await?;

    Ok(())
}
