//! URL normalization for the deal page

use tracing::warn;
use url::Url;

/// Force `https` and normalize `raw`.
///
/// Host and scheme are lower-cased, default ports dropped, dot segments
/// resolved, duplicate slashes collapsed and trailing slashes removed.
/// Input that cannot be parsed is returned trimmed but otherwise untouched.
pub fn sanitize_url(raw: &str) -> String {
    let raw = raw.trim();
    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };

    let mut url = match Url::parse(&candidate) {
        Ok(url) => url,
        Err(e) => {
            warn!("Could not normalize URL '{}': {}", raw, e);
            return raw.to_string();
        }
    };

    if url.set_scheme("https").is_err() {
        warn!("Could not switch '{}' to https", raw);
        return raw.to_string();
    }

    let path = normalize_path(url.path());
    url.set_path(&path);

    let mut normalized = url.to_string();
    if path == "/" && url.query().is_none() && url.fragment().is_none() {
        normalized.pop();
    }
    normalized
}

fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}
