use serde::{Deserialize, Serialize};

use crate::model::Player;

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 8;

/// Traditional starting scores offered on the setup screen. The engine
/// itself accepts any positive starting score.
pub const STARTING_SCORES: [i32; 3] = [301, 501, 701];

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Setup,
    Playing,
    Finished,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GameState {
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub current_turn_throws: Vec<i32>,
    pub status: GameStatus,
    /// Index into `players`, set only when `status` is `Finished`.
    pub winner: Option<usize>,
    pub starting_score: i32,
    /// RFC 3339, set when the match starts.
    pub started_at: String,
}

impl GameState {
    /// A fresh match on the setup screen.
    #[must_use]
    pub fn setup() -> Self {
        Self {
            players: Vec::new(),
            current_player_index: 0,
            current_turn_throws: Vec::new(),
            status: GameStatus::Setup,
            winner: None,
            starting_score: 501,
            started_at: String::new(),
        }
    }

    /// A match in `Playing` status with every player at the starting score.
    /// Player-count and name validation happens at the store boundary.
    #[must_use]
    pub fn new_game(player_names: &[String], starting_score: i32) -> Self {
        Self {
            players: player_names
                .iter()
                .map(|name| Player::new(name, starting_score))
                .collect(),
            current_player_index: 0,
            current_turn_throws: Vec::new(),
            status: GameStatus::Playing,
            winner: None,
            starting_score,
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        if self.status == GameStatus::Playing {
            self.players.get(self.current_player_index)
        } else {
            None
        }
    }

    #[must_use]
    pub fn winner_player(&self) -> Option<&Player> {
        self.winner.and_then(|idx| self.players.get(idx))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::setup()
    }
}
