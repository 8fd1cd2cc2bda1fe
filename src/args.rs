use clap::Parser;

use crate::gemini::GeminiConfig;

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Port for the web server
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,

    /// Gemini API key; falls back to the GEMINI_API_KEY environment
    /// variable. Without a key the coach, voice, and camera adapters
    /// degrade to canned responses.
    #[arg(long, value_name = "API_KEY")]
    pub api_key: Option<String>,

    /// Model used for checkout advice
    #[arg(long, value_name = "MODEL", default_value = "gemini-3-flash-preview")]
    pub advice_model: String,

    /// Model used to read board photos
    #[arg(long, value_name = "MODEL", default_value = "gemini-2.5-flash-latest")]
    pub vision_model: String,

    /// Live model behind the push-to-talk session
    #[arg(
        long,
        value_name = "MODEL",
        default_value = "gemini-2.5-flash-native-audio-preview-09-2025"
    )]
    pub live_model: String,

    /// Directory served under /static
    #[arg(long, value_name = "DIR", default_value = "./static", value_parser = check_readable_dir)]
    pub static_dir: String,
}

impl Args {
    /// Resolved Gemini settings, with the environment fallback applied.
    #[must_use]
    pub fn gemini_config(&self) -> GeminiConfig {
        let api_key = self
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .unwrap_or_default();
        GeminiConfig {
            api_key,
            advice_model: self.advice_model.clone(),
            vision_model: self.vision_model.clone(),
            live_model: self.live_model.clone(),
        }
    }
}

fn check_readable_dir(dir: &str) -> Result<String, String> {
    let path = std::path::Path::new(dir);
    if path.is_dir() {
        Ok(dir.to_string())
    } else {
        Err(format!("{dir} is not a readable directory"))
    }
}
