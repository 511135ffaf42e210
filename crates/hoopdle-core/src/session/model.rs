//! Attempt history and the session's read-only projection.

use serde::{Deserialize, Serialize};

use crate::clues::VisibleClues;
use crate::feedback::FeedbackRecord;

/// One submitted guess and its outcome. Immutable once appended; the
/// history list's order is attempt order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    /// Canonical display name of the guessed player
    pub guessed_name: String,
    /// Normalized feedback for this guess
    pub feedback: FeedbackRecord,
    /// Whether this guess identified the secret player
    pub is_win: bool,
    /// The judge's human-readable message ("Try again!", "You got it!")
    pub judge_message: String,
}

/// Read-only projection of the session handed to presentation layers,
/// recomputed after every mutation.
///
/// `visible_clues` is already gated: values below their reveal threshold
/// have been replaced by the placeholder before this struct is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub visible_clues: VisibleClues,
    pub attempts: Vec<Attempt>,
    pub attempt_count: usize,
    pub won: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub is_submitting: bool,
}
