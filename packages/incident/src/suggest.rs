//! Address completions offered while a reporter types a location.
//!
//! There is no address database behind this; the suggestions are phrase
//! templates around what was typed, the way neighbors describe places
//! without street numbers ("Cerca de la iglesia", "Al Este del parque").

use std::time::Duration;

/// Delay before suggestions appear, mirroring a remote lookup.
pub const DEFAULT_SUGGESTION_DELAY: Duration = Duration::from_millis(300);

/// Suggestions for `query`, without delay.
///
/// Returns nothing for an empty query. Templates that no longer contain
/// the query (compared case-insensitively) are dropped.
#[must_use]
pub fn suggest_addresses(query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();

    [
        format!("{query}, Más adelante de "),
        format!("Cerca de {query}"),
        format!("{query}, Casa #"),
        format!("{query}, A la esquina de"),
        format!("{query}, Al Este de"),
    ]
    .into_iter()
    .filter(|candidate| candidate.to_lowercase().contains(&needle))
    .collect()
}

/// Suggestions for `query` after waiting `delay`.
pub async fn suggest_addresses_after(query: &str, delay: Duration) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }
    tokio::time::sleep(delay).await;
    suggest_addresses(query)
}
