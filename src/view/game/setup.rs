use maud::{Markup, html};

use crate::model::{MAX_PLAYERS, STARTING_SCORES};

/// The setup screen: up to 8 name inputs (blank rows are ignored) and the
/// traditional starting-score picker.
#[must_use]
pub fn render_setup(notice: Option<&str>) -> Markup {
    html! {
        div class="setup-card" {
            h3 { "Set up the match" }
            @if let Some(notice) = notice {
                p class="notice" { (notice) }
            }
            form hx-post="start" hx-target="#game" hx-swap="innerHTML" {
                fieldset {
                    legend { "Players (1-8)" }
                    @for i in 0..MAX_PLAYERS {
                        @let placeholder = format!("Player {}", i + 1);
                        @let prefill = if i < 2 { placeholder.as_str() } else { "" };
                        input type="text" name="player" maxlength="32"
                            placeholder=(placeholder) value=(prefill);
                    }
                }
                fieldset {
                    legend { "Starting score" }
                    select name="starting_score" {
                        @for s in STARTING_SCORES {
                            @if s == 501 {
                                option value=(s) selected { (s) }
                            } @else {
                                option value=(s) { (s) }
                            }
                        }
                    }
                }
                button type="submit" class="primary" { "Start match" }
            }
        }
    }
}
