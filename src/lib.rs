pub mod args;
pub mod error;
pub mod gemini;
pub mod model;
pub mod score;
pub mod store;
pub mod voice;
pub mod controller {
    pub mod coach;
    pub mod game;
    pub mod vision;
    pub mod voice;
}
pub mod view {
    pub mod game;
    pub mod index;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";
