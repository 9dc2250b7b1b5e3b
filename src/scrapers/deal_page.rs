//! Field extraction from a parsed deal page

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDateTime};
use scraper::{Html, Selector};
use tracing::debug;

use crate::models::{DealSnapshot, SourceZone};
use crate::traits::DealSelectors;

/// Timestamp format of the `data-next-deal` attribute
const NEXT_DEAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Selectors compiled once per run
pub struct DealPage {
    title: Selector,
    subtitle: Selector,
    price: Selector,
    original_price: Selector,
    availability: Selector,
    next_deal: Selector,
    next_deal_attr: String,
}

fn compile(name: &str, selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} selector '{}': {:?}", name, selector, e))
}

impl DealPage {
    pub fn new(selectors: &DealSelectors) -> Result<Self> {
        Ok(Self {
            title: compile("title", &selectors.title)?,
            subtitle: compile("subtitle", &selectors.subtitle)?,
            price: compile("price", &selectors.price)?,
            original_price: compile("original price", &selectors.original_price)?,
            availability: compile("availability", &selectors.availability)?,
            next_deal: compile("next deal", &selectors.next_deal)?,
            next_deal_attr: selectors.next_deal_attr.clone(),
        })
    }

    pub fn title(&self, document: &Html) -> Option<String> {
        first_text(document, &self.title)
    }

    pub fn subtitle(&self, document: &Html) -> Option<String> {
        first_text(document, &self.subtitle)
    }

    pub fn price(&self, document: &Html) -> Option<String> {
        first_text(document, &self.price)
    }

    /// Regular price with the promotional `*` footnote marker removed
    pub fn original_price(&self, document: &Html) -> Option<String> {
        first_text(document, &self.original_price).map(|raw| clean_price(&raw))
    }

    pub fn availability(&self, document: &Html) -> Option<String> {
        first_text(document, &self.availability)
    }

    pub fn next_deal(&self, document: &Html, zone: SourceZone) -> Option<DateTime<Local>> {
        let raw = first_attr(document, &self.next_deal, &self.next_deal_attr).unwrap_or_default();
        parse_next_deal(&raw, zone)
    }

    /// Run every extractor; fields the page lacks become empty.
    pub fn snapshot(&self, document: &Html, zone: SourceZone) -> DealSnapshot {
        let snapshot = DealSnapshot {
            title: self.title(document).unwrap_or_default(),
            subtitle: self.subtitle(document).unwrap_or_default(),
            price: self.price(document).unwrap_or_default(),
            original_price: self.original_price(document).unwrap_or_default(),
            availability: self.availability(document).unwrap_or_default(),
            next_deal: self.next_deal(document, zone),
        };

        debug!(?snapshot, "Extracted deal snapshot");
        snapshot
    }
}

/// Text content of the first node matching `selector`
pub fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>())
}

/// Value of attribute `attr` on the first node matching `selector`
pub fn first_attr(document: &Html, selector: &Selector, attr: &str) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
}

/// Trim, drop a single trailing `*`, trim again.
pub fn clean_price(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_suffix('*')
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// Parse a zone-less `YYYY-MM-DD HH:MM:SS` value in `zone`.
pub fn parse_next_deal(raw: &str, zone: SourceZone) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if raw.is_empty() {
        debug!("Next deal timestamp missing");
        return None;
    }

    match NaiveDateTime::parse_from_str(raw, NEXT_DEAL_FORMAT) {
        Ok(naive) => zone.resolve(&naive),
        Err(e) => {
            debug!("Unparsable next deal timestamp '{}': {}", raw, e);
            None
        }
    }
}
