//! The single home of the current match.
//!
//! Every adapter (board tap, voice, vision) funnels into [`GameStore::apply`],
//! which runs the pure engine and swaps the stored state under the write
//! lock, so hits land one at a time in arrival order.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::AppError;
use crate::model::{DartHit, GameState, MAX_PLAYERS, MIN_PLAYERS};
use crate::score::apply_hit;

#[derive(Clone, Default)]
pub struct GameStore {
    inner: Arc<RwLock<GameState>>,
}

impl GameStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(GameState::setup())),
        }
    }

    /// Starts a fresh match in `Playing` status.
    ///
    /// # Errors
    ///
    /// Rejects an empty roster, more than 8 players, blank names, or a
    /// non-positive starting score. The stored state is untouched on error.
    pub async fn start(
        &self,
        player_names: Vec<String>,
        starting_score: i32,
    ) -> Result<GameState, AppError> {
        let names: Vec<String> = player_names
            .into_iter()
            .map(|n| n.trim().to_string())
            .collect();
        if names.len() < MIN_PLAYERS || names.len() > MAX_PLAYERS {
            return Err(AppError::Invalid(format!(
                "between {MIN_PLAYERS} and {MAX_PLAYERS} players required, got {}",
                names.len()
            )));
        }
        if names.iter().any(String::is_empty) {
            return Err(AppError::Invalid("player names cannot be blank".into()));
        }
        if starting_score <= 0 {
            return Err(AppError::Invalid(format!(
                "starting score must be positive, got {starting_score}"
            )));
        }

        let fresh = GameState::new_game(&names, starting_score);
        let mut state = self.inner.write().await;
        *state = fresh.clone();
        Ok(fresh)
    }

    /// Discards the match and returns to the setup screen.
    pub async fn reset(&self) -> GameState {
        let mut state = self.inner.write().await;
        *state = GameState::setup();
        state.clone()
    }

    /// Applies one dart through the engine and returns the new state.
    /// Hits outside `Playing` status are absorbed unchanged.
    pub async fn apply(&self, hit: &DartHit) -> GameState {
        let mut state = self.inner.write().await;
        let next = apply_hit(&state, hit);
        *state = next.clone();
        next
    }

    pub async fn snapshot(&self) -> GameState {
        self.inner.read().await.clone()
    }

    /// Name of the player whose turn it is, if a match is running.
    pub async fn active_player_name(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .active_player()
            .map(|p| p.name.clone())
    }
}
