use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::gemini::GeminiConfig;
use crate::store::GameStore;
use crate::voice::{self, VoiceControl};

#[derive(Deserialize)]
pub struct AudioChunk {
    /// Base64 PCM16 from the browser microphone; opaque pass-through.
    pub chunk: String,
}

/// `POST /voice/start` — begin push-to-talk. Already pending/open is a
/// no-op; the response always reports the current phase.
pub async fn start(
    control: Data<VoiceControl>,
    store: Data<GameStore>,
    cfg: Data<GeminiConfig>,
) -> impl Responder {
    if !cfg.has_api_key() {
        return HttpResponse::Ok()
            .json(json!({"phase": "idle", "notice": "Voice scoring needs a Gemini API key."}));
    }
    if store.active_player_name().await.is_none() {
        return HttpResponse::Ok()
            .json(json!({"phase": "idle", "notice": "No match in progress."}));
    }

    voice::start(
        control.get_ref().clone(),
        store.get_ref().clone(),
        cfg.get_ref().clone(),
    )
    .await;
    let events = voice::events(control.get_ref()).await;
    HttpResponse::Ok().json(json!({"phase": events.phase}))
}

/// `POST /voice/audio` — relay one microphone chunk upstream.
pub async fn audio(body: web::Json<AudioChunk>, control: Data<VoiceControl>) -> impl Responder {
    voice::push_audio(control.get_ref(), body.into_inner().chunk).await;
    HttpResponse::Ok().json(json!({"ok": true}))
}

/// `POST /voice/stop` — button released (or page gone). Idempotent.
pub async fn stop(control: Data<VoiceControl>) -> impl Responder {
    voice::stop(control.get_ref()).await;
    HttpResponse::Ok().json(json!({"phase": "idle"}))
}

/// `GET /voice/events` — queued playback audio, truncation flag, phase.
pub async fn events(control: Data<VoiceControl>) -> impl Responder {
    let events = voice::events(control.get_ref()).await;
    HttpResponse::Ok().json(events)
}
