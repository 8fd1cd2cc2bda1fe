pub mod live;
pub mod rest;

pub use rest::*;

/// Resolved Gemini settings shared with the handlers via actix `Data`.
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub api_key: String,
    pub advice_model: String,
    pub vision_model: String,
    pub live_model: String,
}

impl GeminiConfig {
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

pub const REST_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const LIVE_WS_URL: &str = "wss://generativelanguage.googleapis.com/ws/google.ai.generativelanguage.v1beta.GenerativeService.BidiGenerateContent";
