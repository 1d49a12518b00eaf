//! Relevance ordering for track search.
//!
//! Track search on the provider returns a lot of covers, remixes and
//! "feat." credits ahead of the track the user most likely meant. We split
//! the candidates into two buckets and put the primary bucket first:
//!
//! - **primary**: some query term appears in the title AND some query term
//!   appears in the artist name, and the artist name has no parentheses
//! - **secondary**: everything else
//!
//! Within each bucket the provider's order is kept. There is no scoring;
//! ties are broken by provider order only.

/// Which bucket a candidate falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relevance {
    Primary,
    Secondary,
}

/// Something with a track name and an artist name.
pub trait Candidate {
    fn name(&self) -> &str;
    fn artist(&self) -> &str;
}

impl Candidate for (&str, &str) {
    fn name(&self) -> &str {
        self.0
    }

    fn artist(&self) -> &str {
        self.1
    }
}

impl Candidate for (String, String) {
    fn name(&self) -> &str {
        &self.0
    }

    fn artist(&self) -> &str {
        &self.1
    }
}

/// Lower-cased, whitespace-split query terms
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Bucket a single candidate against pre-split query terms.
pub fn relevance(terms: &[String], name: &str, artist: &str) -> Relevance {
    let name = name.to_lowercase();
    let artist = artist.to_lowercase();

    // Parenthetical credits ("feat." variants) are never the primary artist
    let credited = artist.contains('(') || artist.contains(')');
    let is_primary_artist = !credited && terms.iter().any(|t| artist.contains(t.as_str()));
    let is_title_match = terms.iter().any(|t| name.contains(t.as_str()));

    if is_primary_artist && is_title_match {
        Relevance::Primary
    } else {
        Relevance::Secondary
    }
}

/// Order candidates primary-first, keeping provider order within each bucket.
pub fn classify<T: Candidate>(query: &str, candidates: Vec<T>) -> Vec<T> {
    let terms = query_terms(query);

    let (primary, secondary): (Vec<T>, Vec<T>) = candidates
        .into_iter()
        .partition(|c| relevance(&terms, c.name(), c.artist()) == Relevance::Primary);

    tracing::trace!(
        primary = primary.len(),
        secondary = secondary.len(),
        "Classified track candidates"
    );

    primary.into_iter().chain(secondary).collect()
}
