pub mod coach;
pub mod dartboard;
pub mod scoreboard;
pub mod setup;

pub use coach::*;
pub use dartboard::*;
pub use scoreboard::*;
pub use setup::*;

use maud::{Markup, html};

use crate::model::{GameState, GameStatus};

/// The whole `#game` fragment, dispatched on match status.
#[must_use]
pub fn render_game_template(state: &GameState) -> Markup {
    match state.status {
        GameStatus::Setup => render_setup(None),
        GameStatus::Playing => render_playing(state),
        GameStatus::Finished => render_finished(state),
    }
}

fn render_playing(state: &GameState) -> Markup {
    html! {
        div class="game-layout" {
            div class="side-panel" {
                (render_scoreboard(state))
                @if let Some(active) = state.active_player() {
                    div class="active-banner" {
                        p class="caption" { "At the oche" }
                        h2 { (active.name) }
                    }
                }
                (render_voice_panel())
                (render_vision_panel())
                (render_coach_panel())
                button class="reset-button"
                    hx-post="reset" hx-target="#game" hx-swap="innerHTML"
                    hx-confirm="Discard this match?" { "New game" }
            }
            div class="board-panel" {
                (render_dartboard())
            }
        }
    }
}

fn render_finished(state: &GameState) -> Markup {
    let winner = state
        .winner_player()
        .map_or("Unknown", |p| p.name.as_str());
    html! {
        div class="winner-banner" {
            h2 { "Winner: " (winner) "!" }
            p { "What a match." }
        }
        (render_scoreboard(state))
        button class="primary"
            hx-post="reset" hx-target="#game" hx-swap="innerHTML" { "New match" }
    }
}

/// Push-to-talk control; `static/darts.js` drives the hold/release and the
/// events poll against `/voice/*`.
fn render_voice_panel() -> Markup {
    html! {
        div class="voice-panel" {
            button id="ptt-button" type="button" { "Hold to talk" }
            p id="ptt-state" class="caption" { "Say e.g. \"Alice sixty\"" }
        }
    }
}

/// Single-frame camera capture; the captured JPEG goes to `/vision` and the
/// read comes back into `#vision-result` for explicit confirmation.
fn render_vision_panel() -> Markup {
    html! {
        div class="vision-panel" {
            button id="camera-button" type="button" { "Read board from camera" }
            div id="vision-result" {}
        }
    }
}

/// Confirmation card for a camera read: nothing is scored until the user
/// accepts it as a single multiplier-1 dart.
#[must_use]
pub fn render_vision_confirm(score: i32, label: &str) -> Markup {
    html! {
        div class="vision-confirm" {
            p { "Camera read: " b { (label) } " (" (score) " points)" }
            button hx-post=(format!("hit?value={score}&multiplier=1&label={label}"))
                hx-target="#game" hx-swap="innerHTML" { "Apply" }
            button hx-get="vision/clear" hx-target="#vision-result" hx-swap="innerHTML" { "Discard" }
        }
    }
}

#[must_use]
pub fn render_vision_notice(notice: &str) -> Markup {
    html! {
        p class="notice" { (notice) }
    }
}
