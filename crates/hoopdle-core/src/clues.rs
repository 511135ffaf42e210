//! Daily clues and progressive disclosure.
//!
//! The server sends the full clue set up front; what the player actually
//! sees is a pure function of the attempt count. Below its threshold a
//! slot carries the placeholder token itself, so the real value never
//! reaches the presentation layer early.

use serde::{Deserialize, Serialize};

/// Placeholder shown for clue slots that have not been unlocked yet.
pub const CLUE_PLACEHOLDER: &str = "???";

/// Attempts needed before the team clue is shown.
pub const TEAM_REVEAL_THRESHOLD: usize = 5;
/// Attempts needed before the position clue is shown.
pub const POSITION_REVEAL_THRESHOLD: usize = 10;
/// Attempts needed before the jersey clue is shown.
pub const JERSEY_REVEAL_THRESHOLD: usize = 15;

/// The secret player's disclosable attributes.
///
/// The jersey number travels as a string ("00" is a valid jersey). The
/// ordered jersey comparison happens on the judge's side; the client
/// only ever displays the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueSet {
    pub team: String,
    /// Sent by the clue endpoint but not part of feedback matching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_city: Option<String>,
    pub position: String,
    pub jersey: String,
}

/// The gated view of the clue set presented to the player.
///
/// Recomputed from scratch after every state change; there is no
/// "already revealed" flag to get out of sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleClues {
    pub team: String,
    pub position: String,
    pub jersey: String,
}

impl VisibleClues {
    /// Derives the visible clue board for the given attempt count.
    ///
    /// Slots below their threshold hold [`CLUE_PLACEHOLDER`]. A missing
    /// clue set (load failure) renders placeholders everywhere.
    pub fn reveal(clues: Option<&ClueSet>, attempt_count: usize) -> Self {
        let slot = |threshold: usize, value: Option<&str>| -> String {
            match value {
                Some(v) if attempt_count >= threshold => v.to_string(),
                _ => CLUE_PLACEHOLDER.to_string(),
            }
        };
        Self {
            team: slot(TEAM_REVEAL_THRESHOLD, clues.map(|c| c.team.as_str())),
            position: slot(POSITION_REVEAL_THRESHOLD, clues.map(|c| c.position.as_str())),
            jersey: slot(JERSEY_REVEAL_THRESHOLD, clues.map(|c| c.jersey.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_clues() -> ClueSet {
        ClueSet {
            team: "Mavericks".to_string(),
            team_city: Some("Dallas".to_string()),
            position: "Guard-Forward".to_string(),
            jersey: "77".to_string(),
        }
    }

    #[test]
    fn everything_hidden_before_first_threshold() {
        let clues = sample_clues();
        for count in 0..TEAM_REVEAL_THRESHOLD {
            let view = VisibleClues::reveal(Some(&clues), count);
            assert_eq!(view.team, CLUE_PLACEHOLDER, "count {count}");
            assert_eq!(view.position, CLUE_PLACEHOLDER);
            assert_eq!(view.jersey, CLUE_PLACEHOLDER);
        }
    }

    #[test]
    fn team_revealed_at_five_attempts() {
        let clues = sample_clues();
        let view = VisibleClues::reveal(Some(&clues), 5);
        assert_eq!(view.team, "Mavericks");
        assert_eq!(view.position, CLUE_PLACEHOLDER);
        assert_eq!(view.jersey, CLUE_PLACEHOLDER);
    }

    #[test]
    fn position_revealed_at_ten_attempts() {
        let clues = sample_clues();
        let view = VisibleClues::reveal(Some(&clues), 10);
        assert_eq!(view.team, "Mavericks");
        assert_eq!(view.position, "Guard-Forward");
        assert_eq!(view.jersey, CLUE_PLACEHOLDER);
    }

    #[test]
    fn jersey_revealed_at_fifteen_attempts() {
        let clues = sample_clues();
        let view = VisibleClues::reveal(Some(&clues), 15);
        assert_eq!(view.team, "Mavericks");
        assert_eq!(view.position, "Guard-Forward");
        assert_eq!(view.jersey, "77");
    }

    #[test]
    fn reveal_never_regresses() {
        let clues = sample_clues();
        let mut revealed = 0;
        for count in 0..20 {
            let view = VisibleClues::reveal(Some(&clues), count);
            let now = [&view.team, &view.position, &view.jersey]
                .iter()
                .filter(|v| v.as_str() != CLUE_PLACEHOLDER)
                .count();
            assert!(now >= revealed, "reveal regressed at count {count}");
            revealed = now;
        }
    }

    #[test]
    fn missing_clue_set_renders_placeholders() {
        let view = VisibleClues::reveal(None, 20);
        assert_eq!(view.team, CLUE_PLACEHOLDER);
        assert_eq!(view.position, CLUE_PLACEHOLDER);
        assert_eq!(view.jersey, CLUE_PLACEHOLDER);
    }
}
