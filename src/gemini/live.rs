//! Wire types for the Live (bidirectional streaming) API.
//!
//! Client frames go up as JSON text over the WebSocket; server frames come
//! back the same way. Only the fields the voice adapter touches are modeled.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::rest::{Content, InlineData, Part};
use super::{GeminiConfig, LIVE_WS_URL};

/// Tool the model calls with a spoken score. One call per utterance at most.
pub const SUBMIT_SCORE_TOOL: &str = "submit_score";

pub const AUDIO_INPUT_MIME: &str = "audio/pcm;rate=16000";

#[must_use]
pub fn ws_url(cfg: &GeminiConfig) -> String {
    format!("{LIVE_WS_URL}?key={}", cfg.api_key)
}

// ---- client -> server ----

#[derive(Serialize, Debug)]
pub struct SetupMessage {
    pub setup: Setup,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Setup {
    pub model: String,
    pub generation_config: LiveGenerationConfig,
    pub system_instruction: Content,
    pub tools: Vec<Tool>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LiveGenerationConfig {
    pub response_modalities: Vec<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub function_declarations: Vec<FunctionDeclaration>,
}

#[derive(Serialize, Debug)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeInputMessage {
    pub realtime_input: RealtimeInput,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeInput {
    pub media_chunks: Vec<InlineData>,
}

impl RealtimeInputMessage {
    /// Wraps one base64 PCM16 chunk from the browser.
    #[must_use]
    pub fn audio_chunk(data: String) -> Self {
        Self {
            realtime_input: RealtimeInput {
                media_chunks: vec![InlineData {
                    mime_type: AUDIO_INPUT_MIME.to_string(),
                    data,
                }],
            },
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponseMessage {
    pub tool_response: ToolResponse,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    pub function_responses: Vec<FunctionResponse>,
}

#[derive(Serialize, Debug)]
pub struct FunctionResponse {
    pub id: String,
    pub name: String,
    pub response: serde_json::Value,
}

impl ToolResponseMessage {
    #[must_use]
    pub fn ok(id: &str, name: &str) -> Self {
        Self {
            tool_response: ToolResponse {
                function_responses: vec![FunctionResponse {
                    id: id.to_string(),
                    name: name.to_string(),
                    response: json!({ "result": "ok" }),
                }],
            },
        }
    }
}

// ---- server -> client ----

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServerMessage {
    #[serde(default)]
    pub setup_complete: Option<serde_json::Value>,
    #[serde(default)]
    pub server_content: Option<ServerContent>,
    #[serde(default)]
    pub tool_call: Option<ToolCall>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServerContent {
    #[serde(default)]
    pub model_turn: Option<Content>,
    #[serde(default)]
    pub interrupted: Option<bool>,
}

impl ServerContent {
    /// Base64 audio chunks for immediate playback.
    #[must_use]
    pub fn audio_chunks(&self) -> Vec<String> {
        self.model_turn
            .as_ref()
            .map(|turn| {
                turn.parts
                    .iter()
                    .filter_map(|p: &Part| p.inline_data.as_ref())
                    .map(|d| d.data.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToolCall {
    #[serde(default)]
    pub function_calls: Vec<FunctionCall>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCall {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub args: serde_json::Value,
}

/// A spoken "submit score" intent pulled out of a tool call.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreIntent {
    pub points: i32,
    pub player_name: String,
}

impl ScoreIntent {
    /// `None` when the call isn't `submit_score` or its args are malformed.
    #[must_use]
    pub fn from_call(call: &FunctionCall) -> Option<Self> {
        if call.name != SUBMIT_SCORE_TOOL {
            return None;
        }
        let points = call.args.get("points")?.as_f64()?;
        if !points.is_finite() || points < 0.0 {
            return None;
        }
        let player_name = call.args.get("player_name")?.as_str()?.to_string();
        Some(Self {
            points: points as i32,
            player_name,
        })
    }
}

/// The session setup frame: audio responses, the `submit_score` tool, and a
/// referee instruction pinned to the player whose turn it is.
#[must_use]
pub fn setup_message(cfg: &GeminiConfig, active_player: &str) -> SetupMessage {
    SetupMessage {
        setup: Setup {
            model: format!("models/{}", cfg.live_model),
            generation_config: LiveGenerationConfig {
                response_modalities: vec!["AUDIO".to_string()],
            },
            system_instruction: Content::text(&format!(
                "You are a strict darts referee. The microphone is only live \
                 while the button is held. Right now it is {active_player}'s \
                 throw. Call {SUBMIT_SCORE_TOOL} ONLY when you hear the name \
                 \"{active_player}\" together with a number, e.g. \
                 \"{active_player} sixty\" -> {SUBMIT_SCORE_TOOL}(60, \
                 \"{active_player}\"). In every other case do nothing."
            )),
            tools: vec![Tool {
                function_declarations: vec![FunctionDeclaration {
                    name: SUBMIT_SCORE_TOOL.to_string(),
                    description: "Records the points a player called out.".to_string(),
                    parameters: json!({
                        "type": "OBJECT",
                        "properties": {
                            "points": {
                                "type": "NUMBER",
                                "description": "The spoken points (0-180)."
                            },
                            "player_name": {
                                "type": "STRING",
                                "description": "The player name as spoken."
                            }
                        },
                        "required": ["points", "player_name"]
                    }),
                }],
            }],
        },
    }
}
