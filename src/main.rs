use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, debug};

mod countdown;
mod deal_reporter;
mod fetcher;
mod models;
mod output;
mod sanitize;
mod scrapers;
mod traits;

use deal_reporter::DealReporter;
use fetcher::HttpFetcher;
use models::{DEFAULT_URL, DisplayFlags, RequestOptions, SourceZone};
use traits::ScraperConfig;

#[derive(Parser, Debug)]
#[command(name = "daydeal")]
#[command(about = "Show the current deal of the day")]
#[command(version)]
struct Cli {
    /// Availability
    #[arg(long)]
    availability: bool,

    /// Price
    #[arg(long)]
    price: bool,

    /// Name (title and subtitle)
    #[arg(long)]
    name: bool,

    /// Title
    #[arg(long)]
    title: bool,

    /// Subtitle
    #[arg(long)]
    subtitle: bool,

    /// Show time and date of the next deal
    #[arg(long)]
    next: bool,

    /// Deal url ('default' means https://www.daydeal.ch). So far supported:
    /// 'https://daydeal.ch', 'https://www.daydeal.ch/deal-of-the-week', 'https://blickdeal.ch'
    #[arg(long, env = "DAYDEAL_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Zone of the next deal timestamp on the page: 'local', 'utc' or an offset like '+01:00'
    #[arg(long, env = "DAYDEAL_SOURCE_ZONE", default_value = "local")]
    source_zone: SourceZone,

    /// Verbosity level (logs go to stderr)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> RequestOptions {
        RequestOptions {
            display: DisplayFlags {
                title: self.title,
                name: self.name,
                subtitle: self.subtitle,
                price: self.price,
                availability: self.availability,
                next: self.next,
            },
            url: if self.url.trim().eq_ignore_ascii_case("default") {
                DEFAULT_URL.to_string()
            } else {
                self.url.clone()
            },
            source_zone: self.source_zone,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let options = cli.options();
    debug!(?options, "Parsed request options");

    let reporter = DealReporter::new(HttpFetcher::new()?, ScraperConfig::daydeal())?;
    let report = reporter.report(&options, chrono::Local::now()).await?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .context("Failed to write report")?;
    stdout.flush()?;

    Ok(())
}
