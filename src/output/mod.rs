//! Flag-gated rendering of the deal report

use chrono::{DateTime, Local};

use crate::countdown::format_countdown;
use crate::models::{DealSnapshot, DisplayFlags};

/// Display format of the next deal, e.g. `Mon Jan  2 15:04:05`
const NEXT_DEAL_DISPLAY: &str = "%a %b %e %H:%M:%S";

/// Render the blocks selected by `flags`.
///
/// With no flag set every block is rendered, followed by `url`.
pub fn render(
    snapshot: &DealSnapshot,
    flags: &DisplayFlags,
    url: &str,
    now: DateTime<Local>,
) -> String {
    let show_all = flags.show_all();
    let mut out = String::new();

    if flags.title || show_all {
        out.push_str(&format!("{}\n", snapshot.title));
    }
    if flags.name || show_all {
        out.push_str(&format!("\n    {}\n    {}\n\n", snapshot.title, snapshot.subtitle));
    }
    if flags.subtitle || show_all {
        out.push_str(&format!("{}\n", snapshot.subtitle));
    }
    if flags.price || show_all {
        out.push_str(&format!(
            "Für CHF {} anstatt {}\n",
            snapshot.price, snapshot.original_price
        ));
    }
    if flags.availability || show_all {
        out.push_str(&format!("Noch {} verfügbar\n", snapshot.availability));
    }
    if flags.next || show_all {
        out.push_str(&next_deal_line(snapshot.next_deal, now));
    }
    if show_all {
        out.push_str(&format!("{url}\n"));
    }

    out
}

fn next_deal_line(next_deal: Option<DateTime<Local>>, now: DateTime<Local>) -> String {
    match next_deal {
        Some(at) => format!(
            "Nächster Deal am: {} (in {})\n",
            at.format(NEXT_DEAL_DISPLAY),
            format_countdown(at - now)
        ),
        None => "Nächster Deal am: unbekannt (in --:--:--)\n".to_string(),
    }
}
