use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Player {
    pub name: String,
    pub score: i32,
    pub history: Vec<i32>,
    pub darts_thrown: i32,
    pub last_turn_scores: Vec<i32>,
    pub avg: f64,
}

impl Player {
    #[must_use]
    pub fn new(name: &str, starting_score: i32) -> Self {
        Self {
            name: name.trim().to_string(),
            score: starting_score,
            history: Vec::new(),
            darts_thrown: 0,
            last_turn_scores: Vec::new(),
            avg: 0.0,
        }
    }
}
