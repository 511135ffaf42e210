//! HTTP adapter for the game API.
//!
//! Implements the core `GameBackend` port against the three endpoints the
//! game service exposes: the player roster, the daily clue set, and the
//! guess judge. Transport and status failures map onto the engine's
//! error taxonomy (`Load` for the fetches, `Submission` for the judge);
//! nothing here panics.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use hoopdle_core::backend::{GameBackend, GuessVerdict};
use hoopdle_core::clues::ClueSet;
use hoopdle_core::error::{GameError, Result};
use hoopdle_core::roster::Candidate;

use crate::config::ClientConfig;

/// HTTP client for the game service.
#[derive(Debug, Clone)]
pub struct HttpGameBackend {
    client: Client,
    base_url: String,
}

impl HttpGameBackend {
    /// Builds a client from connection settings.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| GameError::config(format!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl GameBackend for HttpGameBackend {
    async fn fetch_players(&self) -> Result<Vec<Candidate>> {
        let url = self.endpoint("/api/players");
        debug!(%url, "fetching player roster");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| GameError::load(format!("players request failed: {err}")))?;
        if !response.status().is_success() {
            return Err(GameError::load(format!(
                "players request returned {}",
                response.status()
            )));
        }
        let players: Vec<PlayerDto> = response
            .json()
            .await
            .map_err(|err| GameError::load(format!("failed to parse players list: {err}")))?;

        // The roster source also lists retired players; only active ones
        // are ever the daily secret.
        Ok(players
            .into_iter()
            .filter(|p| p.is_active)
            .map(PlayerDto::into_candidate)
            .collect())
    }

    async fn fetch_daily_clues(&self) -> Result<ClueSet> {
        let url = self.endpoint("/api/daily-player");
        debug!(%url, "fetching daily clues");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| GameError::load(format!("daily clues request failed: {err}")))?;
        if !response.status().is_success() {
            return Err(GameError::load(format!(
                "daily clues request returned {}",
                response.status()
            )));
        }
        let clues: DailyCluesDto = response
            .json()
            .await
            .map_err(|err| GameError::load(format!("failed to parse daily clues: {err}")))?;
        Ok(clues.into_clue_set())
    }

    async fn check_guess(&self, guessed_name: &str) -> Result<GuessVerdict> {
        let url = self.endpoint("/api/check-guess");
        debug!(%url, player = guessed_name, "submitting guess");
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "guess": guessed_name }))
            .send()
            .await
            .map_err(|err| GameError::submission(format!("guess request failed: {err}")))?;
        if !response.status().is_success() {
            return Err(GameError::submission(format!(
                "guess request returned {}",
                response.status()
            )));
        }
        let payload: Value = response
            .json()
            .await
            .map_err(|err| GameError::submission(format!("failed to parse judge response: {err}")))?;

        // The flat body doubles as the raw feedback payload; only the
        // correctness flag and message are pulled out as trusted fields.
        Ok(GuessVerdict {
            correct: payload["correct"].as_bool().unwrap_or(false),
            message: payload["message"].as_str().unwrap_or_default().to_string(),
            payload,
        })
    }
}

// ============================================================================
// Wire DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
struct PlayerDto {
    id: i64,
    full_name: String,
    #[serde(default = "default_active")]
    is_active: bool,
}

fn default_active() -> bool {
    true
}

impl PlayerDto {
    fn into_candidate(self) -> Candidate {
        Candidate {
            id: self.id,
            display_name: self.full_name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DailyCluesDto {
    team_name: String,
    #[serde(default)]
    team_city: Option<String>,
    position: String,
    /// Jersey numbers arrive as strings ("00") but some sources send bare
    /// numbers; accept both.
    jersey: Value,
}

impl DailyCluesDto {
    fn into_clue_set(self) -> ClueSet {
        let jersey = match self.jersey {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        };
        ClueSet {
            team: self.team_name,
            team_city: self.team_city,
            position: self.position,
            jersey,
        }
    }
}
