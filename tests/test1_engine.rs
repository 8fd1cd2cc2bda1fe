mod common;

use common::{hit, playing_state, single};
use rusty_darts::model::{DartHit, GameStatus};
use rusty_darts::score::apply_hit;

#[test]
fn test1_three_twenty_triples_commit_a_turn() {
    // 501, T20 T20 T20 -> 321, 3 darts, turn passes.
    let mut state = playing_state(&["Alice", "Bob"], 501);
    for _ in 0..3 {
        state = apply_hit(&state, &hit(20, 3));
    }

    assert_eq!(state.players[0].score, 321);
    assert_eq!(state.players[0].darts_thrown, 3);
    assert_eq!(state.players[0].history, vec![60, 60, 60]);
    assert_eq!(state.players[0].last_turn_scores, vec![60, 60, 60]);
    assert_eq!(state.current_player_index, 1);
    assert!(state.current_turn_throws.is_empty());
    assert_eq!(state.status, GameStatus::Playing);
}

#[test]
fn test1_commit_matches_turn_arithmetic() {
    let mut state = playing_state(&["Alice"], 501);
    state = apply_hit(&state, &single(19));
    state = apply_hit(&state, &single(7));
    state = apply_hit(&state, &single(3));

    assert_eq!(state.players[0].score, 501 - 19 - 7 - 3);
    assert_eq!(state.players[0].darts_thrown, 3);
    // avg = points scored per 3 darts - one full turn, so just the sum
    let expected_avg = f64::from(19 + 7 + 3);
    assert!((state.players[0].avg - expected_avg).abs() < 1e-9);
}

#[test]
fn test1_provisional_score_before_commit() {
    let mut state = playing_state(&["Alice", "Bob"], 501);
    state = apply_hit(&state, &single(20));

    // Mid-turn: score already provisional, but nothing committed.
    assert_eq!(state.players[0].score, 481);
    assert_eq!(state.players[0].darts_thrown, 0);
    assert!(state.players[0].history.is_empty());
    assert_eq!(state.current_turn_throws, vec![20]);
    assert_eq!(state.current_player_index, 0);
}

#[test]
fn test1_one_dart_checkout_finishes_the_match() {
    // 40, D20 on the first dart of the turn -> finished, 1 dart credited.
    let mut state = playing_state(&["Alice", "Bob"], 40);
    state = apply_hit(&state, &hit(20, 2));

    assert_eq!(state.status, GameStatus::Finished);
    assert_eq!(state.winner, Some(0));
    assert_eq!(state.players[0].score, 0);
    assert_eq!(state.players[0].darts_thrown, 1);
    assert_eq!(state.players[0].history, vec![40]);
    // avg = starting_score / darts * 3
    assert!((state.players[0].avg - 120.0).abs() < 1e-9);
}

#[test]
fn test1_checkout_on_third_dart_credits_three() {
    let mut state = playing_state(&["Alice"], 100);
    state = apply_hit(&state, &single(20));
    state = apply_hit(&state, &single(40));
    state = apply_hit(&state, &hit(20, 2));

    assert_eq!(state.status, GameStatus::Finished);
    assert_eq!(state.players[0].darts_thrown, 3);
    assert_eq!(state.players[0].history, vec![20, 40, 40]);
    assert_eq!(state.players[0].last_turn_scores, vec![20, 40, 40]);
}

#[test]
fn test1_score_of_one_always_busts() {
    // 3 remaining, a 2-point dart -> 1 left -> bust; score stays 3.
    let mut state = playing_state(&["Alice", "Bob"], 3);
    state = apply_hit(&state, &single(2));

    assert_eq!(state.players[0].score, 3);
    assert_eq!(state.players[0].darts_thrown, 3);
    assert_eq!(state.players[0].history, vec![0]);
    assert_eq!(state.current_player_index, 1);
    assert_eq!(state.status, GameStatus::Playing);

    // Same landing spot via a double: 5 remaining, D2 -> 1 left -> bust.
    let mut state = playing_state(&["Alice", "Bob"], 5);
    state = apply_hit(&state, &hit(2, 2));
    assert_eq!(state.players[0].score, 5);
    assert_eq!(state.current_player_index, 1);
}

#[test]
fn test1_bust_reverts_provisional_deductions() {
    // 170: 60, 60 leave 50 provisionally; a 51 busts and the turn-start
    // score comes back, not the provisional 50.
    let mut state = playing_state(&["Alice", "Bob"], 170);
    state = apply_hit(&state, &hit(20, 3));
    state = apply_hit(&state, &hit(20, 3));
    assert_eq!(state.players[0].score, 50);

    state = apply_hit(&state, &single(51));
    assert_eq!(state.players[0].score, 170);
    assert_eq!(state.players[0].darts_thrown, 3);
    assert_eq!(state.players[0].history, vec![0]);
    assert_eq!(state.current_player_index, 1);
    assert!(state.current_turn_throws.is_empty());
}

#[test]
fn test1_score_never_goes_negative() {
    let mut state = playing_state(&["Alice"], 50);
    for value in [60, 57, 51, 180, 100] {
        let next = apply_hit(&state, &single(value));
        assert!(next.players[0].score >= 0, "negative score after {value}");
        assert_eq!(next.players[0].score, 50, "bust must leave score alone");
        state = next;
    }
}

#[test]
fn test1_huge_hit_saturates_into_a_plain_bust() {
    // value * multiplier near i32::MAX must not wrap; it reads as an
    // impossibly large throw and busts like any other overshoot.
    let state = playing_state(&["Alice", "Bob"], 501);
    let next = apply_hit(&state, &hit(i32::MAX, 3));

    assert_eq!(next.players[0].score, 501);
    assert_eq!(next.players[0].darts_thrown, 3);
    assert_eq!(next.players[0].history, vec![0]);
    assert_eq!(next.current_player_index, 1);
    assert_eq!(next.status, GameStatus::Playing);
}

#[test]
fn test1_rotation_is_cyclic() {
    let mut state = playing_state(&["A", "B", "C"], 501);
    // Full committed turn for each player wraps back to the first.
    for expected_next in [1, 2, 0] {
        for _ in 0..3 {
            state = apply_hit(&state, &single(5));
        }
        assert_eq!(state.current_player_index, expected_next);
    }

    // A bust also advances by exactly one.
    let mut state = playing_state(&["A", "B", "C"], 10);
    state = apply_hit(&state, &single(20));
    assert_eq!(state.current_player_index, 1);
}

#[test]
fn test1_finished_match_is_frozen() {
    let mut state = playing_state(&["Alice", "Bob"], 40);
    state = apply_hit(&state, &hit(20, 2));
    assert_eq!(state.status, GameStatus::Finished);

    let after = apply_hit(&state, &single(20));
    assert_eq!(after, state);
}

#[test]
fn test1_setup_state_ignores_hits() {
    let state = rusty_darts::model::GameState::setup();
    let after = apply_hit(&state, &single(20));
    assert_eq!(after, state);
}

#[test]
fn test1_missing_multiplier_defaults_to_single() {
    let hit: DartHit = serde_json::from_str(r#"{"value": 20}"#).unwrap();
    assert_eq!(hit.points(), 20);

    let state = playing_state(&["Alice"], 501);
    let next = apply_hit(&state, &hit);
    assert_eq!(next.players[0].score, 481);
}

#[test]
fn test1_bust_mid_turn_records_partial_throws_with_zero() {
    let mut state = playing_state(&["Alice", "Bob"], 100);
    state = apply_hit(&state, &single(60));
    state = apply_hit(&state, &single(60));

    // Last-turn display shows what was thrown plus the voided dart.
    assert_eq!(state.players[0].last_turn_scores, vec![60, 0]);
    // History only carries the committed 0 for the forfeited turn.
    assert_eq!(state.players[0].history, vec![0]);
    assert_eq!(state.players[0].score, 100);
}
