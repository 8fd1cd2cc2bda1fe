use maud::{Markup, html};

#[must_use]
pub fn render_coach_advice(advice: &str) -> Markup {
    html! {
        h4 { "AI Coach" }
        p class="advice" { (advice) }
    }
}

/// Placeholder swapped in while a match is running; htmx fills it on load
/// and again on every turn change.
#[must_use]
pub fn render_coach_panel() -> Markup {
    html! {
        div id="coach" hx-get="coach" hx-trigger="load" hx-swap="innerHTML" {
            h4 { "AI Coach" }
            p class="advice" { "Thinking..." }
        }
    }
}
