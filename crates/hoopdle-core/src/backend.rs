//! Port trait for the external game service.
//!
//! The engine never talks to a network itself; everything it needs from
//! the outside world goes through [`GameBackend`]. The HTTP adapter lives
//! in `hoopdle-infrastructure`; tests use in-memory mocks.

use async_trait::async_trait;
use serde_json::Value;

use crate::clues::ClueSet;
use crate::error::Result;
use crate::roster::Candidate;

/// The judge's answer to a submitted guess.
///
/// `correct` and `message` are the trusted, typed part of the response.
/// The full body is kept as `payload` for the feedback interpreter, so a
/// malformed feedback block can degrade instead of failing the attempt.
#[derive(Debug, Clone)]
pub struct GuessVerdict {
    pub correct: bool,
    pub message: String,
    pub payload: Value,
}

/// Abstract contract for the game service the client consumes.
#[async_trait]
pub trait GameBackend: Send + Sync {
    /// Fetches the guessable player roster.
    async fn fetch_players(&self) -> Result<Vec<Candidate>>;

    /// Fetches the daily secret's clue set. Sent in full; disclosure
    /// gating is a client-side presentation rule.
    async fn fetch_daily_clues(&self) -> Result<ClueSet>;

    /// Submits a canonical player name to the judge.
    async fn check_guess(&self, guessed_name: &str) -> Result<GuessVerdict>;
}
