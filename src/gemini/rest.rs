//! One-shot `generateContent` calls: checkout advice and board-photo reads.

use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{GeminiConfig, REST_BASE_URL};
use crate::error::AppError;

/// No single-turn checkout exists above this score, so no advice request is
/// made for it.
pub const NO_CHECKOUT_THRESHOLD: i32 = 170;
pub const NO_CHECKOUT_ADVICE: &str =
    "No checkout from here yet - keep stacking treble 20s to bring it down.";
pub const FALLBACK_ADVICE: &str = "Focus on the treble 20.";

#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Content {
    pub parts: Vec<Part>,
}

impl Content {
    #[must_use]
    pub fn text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: Some(text.to_string()),
                inline_data: None,
            }],
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.text.as_deref())
    }
}

/// What the vision model reports for a single board photo.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardRead {
    pub score: i32,
    pub label: String,
}

async fn generate_content(
    cfg: &GeminiConfig,
    model: &str,
    request: &GenerateContentRequest,
) -> Result<GenerateContentResponse, AppError> {
    let client = Client::new();
    let url = format!(
        "{REST_BASE_URL}/models/{model}:generateContent?key={}",
        cfg.api_key
    );
    let resp = client.post(&url).json(request).send().await?;
    if !resp.status().is_success() {
        return Err(AppError::Network(format!(
            "generateContent returned {}",
            resp.status()
        )));
    }
    Ok(resp.json().await?)
}

/// Short checkout suggestion for the active player's remaining score.
///
/// Scores above [`NO_CHECKOUT_THRESHOLD`] are answered with the canned
/// message without any network call.
///
/// # Errors
///
/// Returns `Err` if the request fails or the response carries no text;
/// callers degrade to [`FALLBACK_ADVICE`].
pub async fn checkout_advice(cfg: &GeminiConfig, remaining: i32) -> Result<String, AppError> {
    if remaining > NO_CHECKOUT_THRESHOLD {
        return Ok(NO_CHECKOUT_ADVICE.to_string());
    }

    let request = GenerateContentRequest {
        contents: vec![Content::text(&format!(
            "A darts player has {remaining} points left. Briefly suggest the \
             combination to finish on (e.g. T20, T20, D25). If there is no \
             checkout from this score, suggest a setup throw. Keep it short."
        ))],
        system_instruction: Some(Content::text(
            "You are a professional darts coach. Give short checkout advice.",
        )),
        generation_config: None,
    };

    let resp = generate_content(cfg, &cfg.advice_model, &request).await?;
    resp.first_text()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Parse("empty advice response".to_string()))
}

/// Asks the vision model to read a single dart off a board photo.
///
/// `Ok(None)` means no confident read (the model answered null, or the
/// answer didn't parse); the UI tells the user to retry.
///
/// # Errors
///
/// Returns `Err` only for transport failures.
pub async fn read_board_image(
    cfg: &GeminiConfig,
    base64_jpeg: &str,
) -> Result<Option<BoardRead>, AppError> {
    let request = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part {
                    text: None,
                    inline_data: Some(InlineData {
                        mime_type: "image/jpeg".to_string(),
                        data: base64_jpeg.to_string(),
                    }),
                },
                Part {
                    text: Some(
                        "Analyze this image of a dartboard. Identify the most recently \
                         thrown dart or the dart that is clearly indicated. Determine \
                         which segment it hit (e.g., Single 20, Triple 20, Double 10, \
                         Outer Bull, Inner Bull, or Miss) and calculate the score. \
                         Return ONLY a JSON object of the form \
                         { \"score\": number, \"label\": string }, for example \
                         { \"score\": 60, \"label\": \"T20\" }. If no dart is clearly \
                         visible or you are unsure, return null."
                            .to_string(),
                    ),
                    inline_data: None,
                },
            ],
        }],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
        }),
    };

    let resp = generate_content(cfg, &cfg.vision_model, &request).await?;
    Ok(resp.first_text().and_then(parse_board_read))
}

/// Parses the model's answer, tolerating markdown code fences around the
/// JSON. Anything that isn't a `{score, label}` object reads as `None`.
#[must_use]
pub fn parse_board_read(text: &str) -> Option<BoardRead> {
    let fence = Regex::new(r"```(?:json)?").ok()?;
    let clean = fence.replace_all(text, "");
    let clean = clean.trim();

    let value: serde_json::Value = serde_json::from_str(clean).ok()?;
    if value.is_null() {
        return None;
    }
    serde_json::from_value(value).ok()
}
