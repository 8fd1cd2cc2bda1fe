use rusty_darts::model::{DartHit, GameState};

/// A match already in `Playing` status.
pub fn playing_state(names: &[&str], starting_score: i32) -> GameState {
    let names: Vec<String> = names.iter().map(|n| (*n).to_string()).collect();
    GameState::new_game(&names, starting_score)
}

pub fn single(value: i32) -> DartHit {
    DartHit::new(value, 1)
}

pub fn hit(value: i32, multiplier: i32) -> DartHit {
    DartHit::new(value, multiplier)
}
