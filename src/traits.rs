//! Traits and configuration for site-agnostic deal scraping

use anyhow::Result;
use async_trait::async_trait;

/// Configuration for a deal site
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Display name for the website
    pub name: String,
    /// Deal pages known to share the configured markup
    pub known_urls: Vec<String>,
    /// CSS selectors for extracting data
    pub selectors: DealSelectors,
}

/// CSS selectors for the parts of a deal page
#[derive(Debug, Clone)]
pub struct DealSelectors {
    /// Product title
    pub title: String,
    /// Product subtitle, shown below the title
    pub subtitle: String,
    /// Current deal price
    pub price: String,
    /// Regular price, possibly marked with a trailing `*`
    pub original_price: String,
    /// Remaining stock description
    pub availability: String,
    /// Countdown element carrying the next deal timestamp
    pub next_deal: String,
    /// Attribute of `next_deal` holding the `YYYY-MM-DD HH:MM:SS` value
    pub next_deal_attr: String,
}

impl ScraperConfig {
    /// Selector set shared by the daydeal.ch family of sites
    pub fn daydeal() -> Self {
        Self {
            name: "DayDeal".to_string(),
            known_urls: vec![
                "https://www.daydeal.ch".to_string(),
                "https://www.daydeal.ch/deal-of-the-week".to_string(),
                "https://www.blickdeal.ch".to_string(),
            ],
            selectors: DealSelectors {
                title: ".product-description__title1".to_string(),
                subtitle: ".product-description__title2".to_string(),
                price: ".product-pricing__prices-new-price".to_string(),
                original_price: "strong.product-pricing__prices-old-price".to_string(),
                availability: ".product-progress__availability".to_string(),
                next_deal: "span.js-clock".to_string(),
                next_deal_attr: "data-next-deal".to_string(),
            },
        }
    }

    /// Whether `url` is on a host whose markup this configuration targets.
    pub fn supports(&self, url: &str) -> bool {
        let Some(host) = host_of(url) else {
            return false;
        };
        self.known_urls
            .iter()
            .filter_map(|known| host_of(known))
            .any(|known| known == host)
    }
}

fn host_of(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.trim_start_matches("www.").to_string()))
}

/// Source of raw deal page markup
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Retrieve the page body at `url`
    ///
    /// # Returns
    /// * `Result<String>` - The HTML body, or an error if the page could not be retrieved
    async fn fetch_html(&self, url: &str) -> Result<String>;
}
