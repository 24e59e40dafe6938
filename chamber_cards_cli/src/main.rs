use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use chamber_cards_lib::config::{
    DEFAULT_LOG_DIRECTIVE, DIRECTORY_URL, OUTPUT_FILE, REQUEST_TIMEOUT,
};
use chamber_cards_lib::{run, DirectoryClient, ScrapeConfig};

#[derive(Parser, Debug)]
#[command(name = "chambercards")]
#[command(about = "Export chamber of commerce directory cards to CSV")]
struct Cli {
    /// Directory page to scrape
    #[arg(long, default_value = DIRECTORY_URL)]
    url: String,

    /// CSV file to write (truncated if it exists)
    #[arg(long, default_value = OUTPUT_FILE)]
    output: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT.as_secs())]
    timeout_secs: u64,
}

impl Cli {
    fn into_config(self) -> ScrapeConfig {
        ScrapeConfig {
            url: self.url,
            output: self.output,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(DEFAULT_LOG_DIRECTIVE.parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config();
    let client = DirectoryClient::with_timeout(config.timeout)?;

    let outcome = run(&client, &config).await?;
    println!("{}", outcome);

    Ok(())
}
