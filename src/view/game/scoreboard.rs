use maud::{Markup, html};

use crate::model::{GameState, elapsed_since};

#[must_use]
pub fn render_scoreboard(state: &GameState) -> Markup {
    html! {
        h3 { "Scoreboard" }
        table class="styled-table" {
            thead {
                tr {
                    th { "PLAYER" }
                    th { "SCORE" }
                    th { "LAST TURN" }
                    th { "DARTS" }
                    th { "3-DART AVG" }
                }
            }
            tbody {
                @for (idx, player) in state.players.iter().enumerate() {
                    @let is_active = state.active_player().is_some() && idx == state.current_player_index;
                    @let is_winner = state.winner == Some(idx);
                    @let row_class = if is_winner { "winner-row" }
                        else if is_active { "active-row" }
                        else { "" };
                    tr class=(row_class) {
                        td {
                            (player.name)
                            @if is_active { span class="turn-marker" { " \u{25B6}" } }
                            @if is_winner { span class="turn-marker" { " \u{1F3C6}" } }
                        }
                        td class="score-cell" { (player.score) }
                        td {
                            @if player.last_turn_scores.is_empty() { "-" }
                            @else {
                                (player.last_turn_scores.iter()
                                    .map(ToString::to_string)
                                    .collect::<Vec<_>>()
                                    .join(", "))
                            }
                        }
                        td { (player.darts_thrown) }
                        td { (format!("{:.1}", player.avg)) }
                    }
                }
            }
        }
        @if let Some(elapsed) = elapsed_since(&state.started_at) {
            p class="elapsed" { "Running for " (elapsed) }
        }
    }
}
