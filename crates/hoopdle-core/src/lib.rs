pub mod backend;
pub mod clues;
pub mod error;
pub mod feedback;
pub mod roster;
pub mod session;

// Re-export common error type
pub use error::GameError;

pub use backend::{GameBackend, GuessVerdict};
pub use clues::{ClueSet, VisibleClues, CLUE_PLACEHOLDER};
pub use feedback::{FeedbackRecord, JerseyHint};
pub use roster::{Candidate, Roster, SUGGESTION_LIMIT};
pub use session::{Attempt, GameSnapshot, GuessSession};
