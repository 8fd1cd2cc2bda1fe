//! The scoring state machine for 301/501/701 darts.
//!
//! `apply_hit` is a pure transition over [`GameState`]: no clock, no
//! randomness, no I/O. Every input produces a defined next state, so the
//! engine has no error path.

use crate::model::{DartHit, GameState, GameStatus};

/// Applies one dart to the match and returns the next state.
///
/// Outside `Playing` status this is a no-op returning the state unchanged;
/// callers that race a finished match (a late voice intent, a double-tap on
/// the board) are silently absorbed rather than surfaced as errors.
#[must_use]
pub fn apply_hit(state: &GameState, hit: &DartHit) -> GameState {
    let mut next = state.clone();
    if next.status != GameStatus::Playing || next.players.is_empty() {
        return next;
    }

    let idx = next.current_player_index;
    let player_count = next.players.len();
    let points = hit.points();
    let new_score = next.players[idx].score.saturating_sub(points);

    if new_score == 0 {
        // Checkout: the match ends on this dart, even with 1 or 2 thrown
        // this turn. Darts are credited for the throws actually made.
        let mut final_turn = next.current_turn_throws.clone();
        final_turn.push(points);
        let player = &mut next.players[idx];
        player.score = 0;
        player.darts_thrown += final_turn.len() as i32;
        player.history.extend(final_turn.iter().copied());
        player.last_turn_scores = final_turn;
        player.avg = f64::from(next.starting_score) / f64::from(player.darts_thrown) * 3.0;
        next.current_turn_throws.clear();
        next.status = GameStatus::Finished;
        next.winner = Some(idx);
        return next;
    }

    if new_score < 0 || new_score == 1 {
        // Bust: no single dart scores 1, so 1 remaining is as dead as going
        // negative. The whole turn is forfeited: provisional deductions from
        // earlier darts this turn are rolled back, the full 3 darts are
        // charged, and a single 0 lands in the history.
        let turn_start_score =
            next.players[idx].score + next.current_turn_throws.iter().sum::<i32>();
        let mut final_turn = next.current_turn_throws.clone();
        final_turn.push(0);
        let player = &mut next.players[idx];
        player.score = turn_start_score;
        player.last_turn_scores = final_turn;
        player.darts_thrown += 3;
        player.history.push(0);
        next.current_turn_throws.clear();
        next.current_player_index = (idx + 1) % player_count;
        return next;
    }

    // Valid, non-finishing throw. The deduction is provisional until the
    // turn commits on the 3rd dart (a later bust rolls it back).
    next.current_turn_throws.push(points);
    let committed = next.current_turn_throws.len() == 3;
    let player = &mut next.players[idx];
    player.score = new_score;
    player.last_turn_scores = next.current_turn_throws.clone();
    if committed {
        player.darts_thrown += 3;
        player.history.extend(next.current_turn_throws.iter().copied());
        player.avg = f64::from(next.starting_score - new_score) / f64::from(player.darts_thrown)
            * 3.0;
        next.current_turn_throws.clear();
        next.current_player_index = (idx + 1) % player_count;
    }
    next
}
