use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use scraper::Html;
use tracing::{info, warn};

use crate::models::{DealSnapshot, RequestOptions};
use crate::output;
use crate::sanitize::sanitize_url;
use crate::scrapers::DealPage;
use crate::traits::{PageFetcher, ScraperConfig};

/// Fetches one deal page and renders the requested report
pub struct DealReporter<F> {
    fetcher: F,
    config: ScraperConfig,
    page: DealPage,
}

impl<F: PageFetcher> DealReporter<F> {
    pub fn new(fetcher: F, config: ScraperConfig) -> Result<Self> {
        let page = DealPage::new(&config.selectors)
            .with_context(|| format!("Invalid selector configuration for {}", config.name))?;

        Ok(Self {
            fetcher,
            config,
            page,
        })
    }

    /// Fetch `url` and extract the current deal.
    pub async fn snapshot(&self, url: &str, options: &RequestOptions) -> Result<DealSnapshot> {
        if !self.config.supports(url) {
            warn!(
                "{} is not a known {} page, fields may come back empty",
                url, self.config.name
            );
        }

        let html = self.fetcher.fetch_html(url).await?;
        if html.trim().is_empty() {
            return Err(anyhow::anyhow!("Deal page {} returned an empty document", url));
        }

        let document = Html::parse_document(&html);
        Ok(self.page.snapshot(&document, options.source_zone))
    }

    /// Produce the full report text for `options`.
    ///
    /// Nothing is rendered unless the page was fetched successfully.
    pub async fn report(&self, options: &RequestOptions, now: DateTime<Local>) -> Result<String> {
        let url = sanitize_url(&options.url);
        info!("Checking today's deal on {}", url);

        let snapshot = self.snapshot(&url, options).await?;
        info!("Current deal: {} - CHF {}", snapshot.title, snapshot.price);

        Ok(output::render(&snapshot, &options.display, &url, now))
    }
}
