//! Player roster and suggestion filter.
//!
//! The roster is loaded once at session start and is immutable for the
//! lifetime of the session. The filter backs the autocomplete dropdown:
//! it runs on every keystroke, so it stays a cheap, allocation-light
//! linear scan.

use serde::{Deserialize, Serialize};

/// Maximum number of suggestions returned by [`Roster::suggest`].
pub const SUGGESTION_LIMIT: usize = 10;

/// A guessable player identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Stable identifier assigned by the roster source
    pub id: i64,
    /// Full display name, e.g. "Luka Doncic"
    pub display_name: String,
}

impl Candidate {
    pub fn new(id: i64, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// The session's player directory.
///
/// Entries keep the order the source returned them in; the filter and
/// resolver never re-rank.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Candidate>,
}

impl Roster {
    pub fn new(players: Vec<Candidate>) -> Self {
        Self { players }
    }

    /// Degraded roster used when the player list could not be loaded.
    /// Suggestions come back empty and no guess can be resolved, but the
    /// session itself stays alive.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns up to `limit` players whose display name starts with
    /// `prefix`, case-insensitively, in roster order.
    ///
    /// A blank prefix yields no suggestions: the dropdown only appears
    /// once the user has typed something.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<Candidate> {
        if prefix.trim().is_empty() {
            return Vec::new();
        }
        let needle = prefix.to_lowercase();
        self.players
            .iter()
            .filter(|p| p.display_name.to_lowercase().starts_with(&needle))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Resolves raw input to the canonical roster entry via exact
    /// case-insensitive match on the display name.
    pub fn resolve(&self, raw: &str) -> Option<&Candidate> {
        let wanted = raw.trim().to_lowercase();
        self.players
            .iter()
            .find(|p| p.display_name.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        Roster::new(vec![
            Candidate::new(1, "Jordan Poole"),
            Candidate::new(2, "James Harden"),
            Candidate::new(3, "Jaylen Brown"),
            Candidate::new(4, "Luka Doncic"),
        ])
    }

    #[test]
    fn empty_prefix_returns_no_suggestions() {
        let roster = sample_roster();
        assert!(roster.suggest("", SUGGESTION_LIMIT).is_empty());
        assert!(roster.suggest("   ", SUGGESTION_LIMIT).is_empty());
    }

    #[test]
    fn suggest_matches_prefix_case_insensitively_in_roster_order() {
        let roster = sample_roster();
        let hits = roster.suggest("ja", SUGGESTION_LIMIT);
        let names: Vec<&str> = hits.iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(names, vec!["James Harden", "Jaylen Brown"]);
    }

    #[test]
    fn suggest_jo_excludes_james() {
        let roster = sample_roster();
        let hits = roster.suggest("Jo", SUGGESTION_LIMIT);
        let names: Vec<&str> = hits.iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(names, vec!["Jordan Poole"]);
    }

    #[test]
    fn suggest_truncates_to_limit() {
        let players = (0..30)
            .map(|i| Candidate::new(i, format!("Player {i}")))
            .collect();
        let roster = Roster::new(players);
        let hits = roster.suggest("player", SUGGESTION_LIMIT);
        assert_eq!(hits.len(), SUGGESTION_LIMIT);
        // Relative order preserved
        assert_eq!(hits[0].display_name, "Player 0");
        assert_eq!(hits[9].display_name, "Player 9");
    }

    #[test]
    fn suggest_on_empty_roster_is_empty() {
        let roster = Roster::empty();
        assert!(roster.suggest("lu", SUGGESTION_LIMIT).is_empty());
    }

    #[test]
    fn resolve_is_exact_and_case_insensitive() {
        let roster = sample_roster();
        let hit = roster.resolve("luka doncic").expect("should resolve");
        assert_eq!(hit.id, 4);
        assert!(roster.resolve("luka").is_none());
        assert!(roster.resolve("unknown player").is_none());
    }

    #[test]
    fn resolve_trims_surrounding_whitespace() {
        let roster = sample_roster();
        assert!(roster.resolve("  James Harden ").is_some());
    }
}
