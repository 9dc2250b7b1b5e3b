//! Data models for the extracted deal and the per-run request options

use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, TimeZone, Utc};

/// Default page fetched when no `--url` is given
pub const DEFAULT_URL: &str = "https://www.daydeal.ch";

/// The fields extracted from one deal page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealSnapshot {
    pub title: String,
    pub subtitle: String,
    pub price: String,
    pub original_price: String,
    pub availability: String,
    pub next_deal: Option<DateTime<Local>>,
}

/// Which report blocks the user asked for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayFlags {
    pub title: bool,
    pub name: bool,
    pub subtitle: bool,
    pub price: bool,
    pub availability: bool,
    pub next: bool,
}

impl DisplayFlags {
    /// True when no block was requested explicitly.
    pub fn show_all(&self) -> bool {
        !(self.title || self.name || self.subtitle || self.price || self.availability || self.next)
    }
}

/// Time zone the page's zone-less next-deal timestamp is expressed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceZone {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl SourceZone {
    /// Anchor a naive page timestamp in this zone and convert it to local time.
    ///
    /// Returns `None` for local times that do not exist (DST gap). Ambiguous
    /// times resolve to the earliest instant.
    pub fn resolve(&self, naive: &NaiveDateTime) -> Option<DateTime<Local>> {
        match self {
            Self::Local => earliest(Local.from_local_datetime(naive)),
            Self::Utc => Some(Utc.from_utc_datetime(naive).with_timezone(&Local)),
            Self::Fixed(offset) => {
                earliest(offset.from_local_datetime(naive)).map(|dt| dt.with_timezone(&Local))
            }
        }
    }
}

fn earliest<Tz: TimeZone>(result: LocalResult<DateTime<Tz>>) -> Option<DateTime<Tz>> {
    match result {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(first, _) => Some(first),
        LocalResult::None => None,
    }
}

impl std::str::FromStr for SourceZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "utc" | "z" => Ok(Self::Utc),
            _ => parse_offset(value).map(Self::Fixed).ok_or_else(|| {
                format!("expected 'local', 'utc' or an offset like '+01:00', got '{value}'")
            }),
        }
    }
}

fn parse_offset(value: &str) -> Option<FixedOffset> {
    let (sign, rest) = match value.as_bytes().first()? {
        b'+' => (1, &value[1..]),
        b'-' => (-1, &value[1..]),
        _ => return None,
    };
    let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "0"));
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Immutable configuration for one invocation
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub display: DisplayFlags,
    pub url: String,
    pub source_zone: SourceZone,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            display: DisplayFlags::default(),
            url: DEFAULT_URL.to_string(),
            source_zone: SourceZone::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn no_flags_means_show_all() {
        assert!(DisplayFlags::default().show_all());
    }

    #[test]
    fn any_flag_disables_show_all() {
        let flags = DisplayFlags {
            next: true,
            ..DisplayFlags::default()
        };
        assert!(!flags.show_all());
    }

    #[test]
    fn default_options_point_at_daydeal() {
        let options = RequestOptions::default();
        assert_eq!(options.url, "https://www.daydeal.ch");
        assert_eq!(options.source_zone, SourceZone::Local);
        assert!(options.display.show_all());
    }

    #[test]
    fn parses_source_zones() {
        assert_eq!("local".parse::<SourceZone>(), Ok(SourceZone::Local));
        assert_eq!("UTC".parse::<SourceZone>(), Ok(SourceZone::Utc));
        assert_eq!(
            "+01:00".parse::<SourceZone>(),
            Ok(SourceZone::Fixed(FixedOffset::east_opt(3600).unwrap()))
        );
        assert_eq!(
            "-05:30".parse::<SourceZone>(),
            Ok(SourceZone::Fixed(FixedOffset::west_opt(5 * 3600 + 1800).unwrap()))
        );
        assert_eq!(
            "+2".parse::<SourceZone>(),
            Ok(SourceZone::Fixed(FixedOffset::east_opt(7200).unwrap()))
        );
        assert!("Europe/Zurich".parse::<SourceZone>().is_err());
        assert!("+25:00".parse::<SourceZone>().is_err());
    }

    #[test]
    fn utc_and_fixed_zones_resolve_to_the_same_instant() {
        let utc = SourceZone::Utc.resolve(&naive(10, 0, 0)).unwrap();
        let plus_one = SourceZone::Fixed(FixedOffset::east_opt(3600).unwrap())
            .resolve(&naive(11, 0, 0))
            .unwrap();
        assert_eq!(utc, plus_one);
        assert_eq!(utc.with_timezone(&Utc).naive_utc(), naive(10, 0, 0));
    }
}
