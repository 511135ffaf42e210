//! The guess session state machine.
//!
//! Owns the attempt history, the win flag and the in-flight guard, and
//! orchestrates the judge call and feedback interpretation. One
//! `GuessSession` per game; nothing here is shared process-wide.

use tracing::{debug, info, warn};

use crate::backend::GameBackend;
use crate::clues::{ClueSet, VisibleClues};
use crate::error::{GameError, Result};
use crate::feedback::FeedbackRecord;
use crate::roster::{Candidate, Roster, SUGGESTION_LIMIT};
use crate::session::model::{Attempt, GameSnapshot};

/// Client-side engine for one daily game.
///
/// State transitions: idle → submitting → idle, or submitting → won
/// (terminal). A guess is only sent to the judge once it resolves to a
/// roster entry; rejected guesses never touch the attempt count.
pub struct GuessSession {
    roster: Roster,
    clues: Option<ClueSet>,
    attempts: Vec<Attempt>,
    won: bool,
    submitting: bool,
    last_error: Option<String>,
}

impl GuessSession {
    /// Builds a session from already-loaded parts.
    pub fn new(roster: Roster, clues: Option<ClueSet>) -> Self {
        Self {
            roster,
            clues,
            attempts: Vec::new(),
            won: false,
            submitting: false,
            last_error: None,
        }
    }

    /// Initializes a session by loading the roster and the daily clues.
    ///
    /// Neither load is fatal. A failed roster load leaves an empty roster
    /// (no suggestions, no resolvable guesses); a failed clue load leaves
    /// the clue board on placeholders. Both are recorded as the session's
    /// current error message.
    pub async fn start(backend: &dyn GameBackend) -> Self {
        let mut last_error = None;

        let roster = match backend.fetch_players().await {
            Ok(players) => {
                info!(count = players.len(), "loaded player roster");
                Roster::new(players)
            }
            Err(err) => {
                warn!(error = %err, "failed to load player roster; suggestions disabled");
                last_error = Some(format!("Failed to load the player list: {err}"));
                Roster::empty()
            }
        };

        let clues = match backend.fetch_daily_clues().await {
            Ok(clues) => Some(clues),
            Err(err) => {
                warn!(error = %err, "failed to load daily clues");
                last_error = Some("Failed to load clues. Please try again later.".to_string());
                None
            }
        };

        Self {
            roster,
            clues,
            attempts: Vec::new(),
            won: false,
            submitting: false,
            last_error,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Suggestions for the autocomplete dropdown, capped at
    /// [`SUGGESTION_LIMIT`].
    pub fn suggest(&self, prefix: &str) -> Vec<Candidate> {
        self.roster.suggest(prefix, SUGGESTION_LIMIT)
    }

    /// Submits a guess to the judge.
    ///
    /// Preconditions checked locally, in order: the game is not already
    /// won, no submission is in flight, and `raw_input` resolves to a
    /// roster entry. Any precondition failure returns a validation error
    /// without contacting the judge or touching the attempt count.
    ///
    /// A judge/transport failure also leaves the history unchanged — the
    /// failed attempt does not count — and the session stays playable.
    pub async fn submit_guess(
        &mut self,
        raw_input: &str,
        backend: &dyn GameBackend,
    ) -> Result<Attempt> {
        if self.won {
            return self.reject("The game is already solved. Come back tomorrow!");
        }
        if self.submitting {
            return self.reject("A guess is already being checked.");
        }
        let Some(candidate) = self.roster.resolve(raw_input) else {
            return self.reject("Please select a valid player from the dropdown.");
        };
        let guessed_name = candidate.display_name.clone();

        debug!(player = %guessed_name, attempt = self.attempts.len() + 1, "submitting guess");
        self.submitting = true;
        self.last_error = None;
        let outcome = backend.check_guess(&guessed_name).await;
        self.submitting = false;

        let verdict = match outcome {
            Ok(verdict) => verdict,
            Err(err) => {
                warn!(error = %err, "guess submission failed; attempt not counted");
                let message = "An error occurred while checking your guess.".to_string();
                self.last_error = Some(message.clone());
                return Err(GameError::submission(message));
            }
        };

        // Win-state override: on a correct guess the judge's echo is not
        // trusted field by field; the record is rebuilt from the clue set
        // the client already holds so the winning row is fully matched.
        let feedback = if verdict.correct {
            match &self.clues {
                Some(clues) => FeedbackRecord::winning(clues, &guessed_name),
                None => FeedbackRecord::from_payload(&verdict.payload, &guessed_name)
                    .into_all_match(),
            }
        } else {
            FeedbackRecord::from_payload(&verdict.payload, &guessed_name)
        };

        let attempt = Attempt {
            guessed_name,
            feedback,
            is_win: verdict.correct,
            judge_message: verdict.message,
        };
        self.attempts.push(attempt.clone());
        self.won = verdict.correct;
        if self.won {
            info!(attempts = self.attempts.len(), "secret player found");
        }

        Ok(attempt)
    }

    /// Recomputes the read-only projection, including the gated clue view.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            visible_clues: VisibleClues::reveal(self.clues.as_ref(), self.attempts.len()),
            attempts: self.attempts.clone(),
            attempt_count: self.attempts.len(),
            won: self.won,
            error_message: self.last_error.clone(),
            is_submitting: self.submitting,
        }
    }

    fn reject(&mut self, message: &str) -> Result<Attempt> {
        self.last_error = Some(message.to_string());
        Err(GameError::validation(message))
    }
}
