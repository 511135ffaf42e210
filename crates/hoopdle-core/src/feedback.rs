//! Feedback interpretation.
//!
//! The judge answers a guess with a loosely shaped JSON payload. The
//! interpreter normalizes it into a [`FeedbackRecord`] and never fails:
//! missing or mistyped fields degrade to misses, because the correctness
//! flag is trusted separately and the attempt must still count.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::clues::ClueSet;

/// Directional hint for the jersey number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JerseyHint {
    /// No hint (match, or the jersey was not comparable)
    #[default]
    None,
    /// The secret jersey is higher than the guessed one
    Higher,
    /// The secret jersey is lower than the guessed one
    Lower,
}

impl JerseyHint {
    /// Maps the judge's wire value. The judge sends `"up"` when the guess
    /// is too low and `"down"` when it is too high; anything else means
    /// no hint.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "up" => Self::Higher,
            "down" => Self::Lower,
            _ => Self::None,
        }
    }
}

/// Normalized per-guess feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub guessed_name: String,
    pub guessed_team: String,
    pub guessed_position: String,
    pub guessed_jersey: String,
    pub team_match: bool,
    pub position_match: bool,
    pub jersey_match: bool,
    pub jersey_hint: JerseyHint,
}

impl FeedbackRecord {
    /// Normalizes a raw judge payload.
    ///
    /// `fallback_name` is used when the payload does not echo the guessed
    /// player name. A payload without a `clue_feedback` block (the judge's
    /// shape for unrecognized guesses, or a malformed response) degrades
    /// to an all-miss record with no hint.
    pub fn from_payload(payload: &Value, fallback_name: &str) -> Self {
        let clue_feedback = &payload["clue_feedback"];
        if !clue_feedback.is_object() {
            warn!(
                guessed_name = fallback_name,
                "judge response carried no clue_feedback block; degrading to all-miss"
            );
        }
        let guessed_clues = &payload["guessed_player_clues"];

        Self {
            guessed_name: payload["guessed_player_name"]
                .as_str()
                .unwrap_or(fallback_name)
                .to_string(),
            guessed_team: string_field(&guessed_clues["team"]),
            guessed_position: string_field(&guessed_clues["position"]),
            guessed_jersey: string_field(&guessed_clues["jersey"]),
            team_match: clue_feedback["team_correct"].as_bool().unwrap_or(false),
            position_match: clue_feedback["position_correct"].as_bool().unwrap_or(false),
            jersey_match: clue_feedback["jersey_correct"].as_bool().unwrap_or(false),
            jersey_hint: clue_feedback["jersey_hint"]
                .as_str()
                .map(JerseyHint::from_wire)
                .unwrap_or_default(),
        }
    }

    /// Builds the all-match record for a winning guess from the clue set
    /// the client already holds.
    ///
    /// Deliberate policy: on a win the judge's echo is not trusted to be
    /// complete, so the record is reconstructed locally to guarantee a
    /// fully green row.
    pub fn winning(clues: &ClueSet, guessed_name: &str) -> Self {
        Self {
            guessed_name: guessed_name.to_string(),
            guessed_team: clues.team.clone(),
            guessed_position: clues.position.clone(),
            guessed_jersey: clues.jersey.clone(),
            team_match: true,
            position_match: true,
            jersey_match: true,
            jersey_hint: JerseyHint::None,
        }
    }

    /// Forces all match flags on, keeping the guessed values.
    ///
    /// Fallback for a win recorded while the clue set itself failed to
    /// load, where [`FeedbackRecord::winning`] has nothing to copy from.
    pub fn into_all_match(mut self) -> Self {
        self.team_match = true;
        self.position_match = true;
        self.jersey_match = true;
        self.jersey_hint = JerseyHint::None;
        self
    }
}

/// Reads a field that should be a string but may arrive as a JSON number
/// (jersey values do, depending on the upstream data source).
fn string_field(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_full_judge_payload() {
        let payload = json!({
            "correct": false,
            "message": "Try again!",
            "guessed_player_name": "Stephen Curry",
            "guessed_player_clues": {
                "team": "Warriors",
                "position": "Guard",
                "jersey": "30"
            },
            "clue_feedback": {
                "team_correct": false,
                "position_correct": true,
                "jersey_correct": false,
                "jersey_hint": "up"
            }
        });

        let record = FeedbackRecord::from_payload(&payload, "stephen curry");
        assert_eq!(record.guessed_name, "Stephen Curry");
        assert_eq!(record.guessed_team, "Warriors");
        assert_eq!(record.guessed_position, "Guard");
        assert_eq!(record.guessed_jersey, "30");
        assert!(!record.team_match);
        assert!(record.position_match);
        assert!(!record.jersey_match);
        assert_eq!(record.jersey_hint, JerseyHint::Higher);
    }

    #[test]
    fn missing_feedback_block_degrades_to_all_miss() {
        // The judge's shape for an unrecognized guess: correct + message only.
        let payload = json!({
            "correct": false,
            "message": "Invalid player name. Please select from the dropdown."
        });

        let record = FeedbackRecord::from_payload(&payload, "Nobody Real");
        assert_eq!(record.guessed_name, "Nobody Real");
        assert!(!record.team_match);
        assert!(!record.position_match);
        assert!(!record.jersey_match);
        assert_eq!(record.jersey_hint, JerseyHint::None);
        assert_eq!(record.guessed_team, "");
    }

    #[test]
    fn numeric_jersey_is_stringified() {
        let payload = json!({
            "guessed_player_clues": { "team": "Lakers", "position": "Forward", "jersey": 23 },
            "clue_feedback": {
                "team_correct": true,
                "position_correct": false,
                "jersey_correct": false,
                "jersey_hint": "down"
            }
        });

        let record = FeedbackRecord::from_payload(&payload, "LeBron James");
        assert_eq!(record.guessed_jersey, "23");
        assert_eq!(record.jersey_hint, JerseyHint::Lower);
    }

    #[test]
    fn hint_wire_values_map_to_directions() {
        assert_eq!(JerseyHint::from_wire("up"), JerseyHint::Higher);
        assert_eq!(JerseyHint::from_wire("down"), JerseyHint::Lower);
        assert_eq!(JerseyHint::from_wire(""), JerseyHint::None);
        assert_eq!(JerseyHint::from_wire("sideways"), JerseyHint::None);
    }

    #[test]
    fn winning_record_copies_clue_set_values() {
        let clues = ClueSet {
            team: "Mavericks".to_string(),
            team_city: Some("Dallas".to_string()),
            position: "Guard-Forward".to_string(),
            jersey: "77".to_string(),
        };
        let record = FeedbackRecord::winning(&clues, "Luka Doncic");
        assert_eq!(record.guessed_team, "Mavericks");
        assert_eq!(record.guessed_position, "Guard-Forward");
        assert_eq!(record.guessed_jersey, "77");
        assert!(record.team_match && record.position_match && record.jersey_match);
        assert_eq!(record.jersey_hint, JerseyHint::None);
    }

    #[test]
    fn into_all_match_forces_flags_and_clears_hint() {
        let payload = json!({
            "guessed_player_clues": { "team": "Mavericks", "position": "Guard", "jersey": "77" },
            "clue_feedback": {
                "team_correct": false,
                "position_correct": false,
                "jersey_correct": false,
                "jersey_hint": "up"
            }
        });
        let record = FeedbackRecord::from_payload(&payload, "Luka Doncic").into_all_match();
        assert!(record.team_match && record.position_match && record.jersey_match);
        assert_eq!(record.jersey_hint, JerseyHint::None);
        // Guessed values survive
        assert_eq!(record.guessed_team, "Mavericks");
    }
}
