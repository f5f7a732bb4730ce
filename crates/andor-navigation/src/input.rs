//! Address bar input normalization
//!
//! Input without a recognized scheme gets `https://` in front of it.
//! Already-prefixed input is left as typed, so normalizing twice is a no-op.

use url::Url;

use crate::error::NavigationError;
use crate::Result;

const DEFAULT_SCHEME: &str = "https://";

/// Prefixes that are passed through untouched
const KNOWN_PREFIXES: [&str; 5] = ["http://", "https://", "file://", "about:", "data:"];

pub fn normalize_input(raw: &str) -> Result<String> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(NavigationError::InvalidUrl("address is empty".to_string()));
    }

    let url = if has_known_prefix(input) {
        input.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{input}")
    };

    match Url::parse(&url) {
        Ok(_) => Ok(url),
        Err(e) => Err(NavigationError::InvalidUrl(format!("{url} ({e})"))),
    }
}

fn has_known_prefix(input: &str) -> bool {
    KNOWN_PREFIXES.iter().any(|prefix| {
        input
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
