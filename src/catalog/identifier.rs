//! Stable identifiers for entities the provider does not key itself.
//!
//! The id is the lower-cased `"<artist>-<name>"` (or just `"<name>"` for
//! artists) with every space, `/` and `\` replaced by `-`. The same input
//! always gives the same id, so clients can dedupe and bookmark results.
//!
//! This is a normalized string, not a hash. Distinct inputs can collide when
//! they differ only in characters the normalization folds together, e.g.
//! `("a b", "c")` and `("a", "b c")` both give `"a-b-c"`. Existing clients
//! depend on the exact scheme, so collisions are accepted rather than fixed.

/// Build an id from an optional primary artist and an entity name.
pub fn synthesize(primary_artist: Option<&str>, name: &str) -> String {
    let raw = match primary_artist {
        Some(artist) => format!("{}-{}", artist.to_lowercase(), name.to_lowercase()),
        None => name.to_lowercase(),
    };

    raw.chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '-',
            other => other,
        })
        .collect()
}
