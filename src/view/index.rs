use maud::{Markup, html};

use crate::HTMX_PATH;

#[must_use]
pub fn render_index_template() -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { "Darts Scoreboard" }
            script src=(HTMX_PATH) {}
            script src="static/darts.js" {}
        }
        body {
            h1 { "Darts Scoreboard" }
            div id="game" hx-get="game" hx-trigger="load, refresh-scores from:body" hx-swap="innerHTML" {
                img alt="Result loading..." class="htmx-indicator" width="150" src="https://htmx.org//img/bars.svg" {}
            }
        }
    }
}
