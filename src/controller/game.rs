use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;

use crate::model::{DartHit, hit_label};
use crate::store::GameStore;
use crate::view::game::{render_game_template, render_setup};
use crate::voice::{self, VoiceControl};

/// `GET /game` — the current match as an htmx fragment.
pub async fn game(store: Data<GameStore>) -> impl Responder {
    let state = store.snapshot().await;
    HttpResponse::Ok()
        .content_type("text/html")
        .body(render_game_template(&state).into_string())
}

/// `POST /start` — setup form submission. Repeated `player` fields carry the
/// roster; blank rows are dropped before validation.
pub async fn start_game(
    form: web::Form<Vec<(String, String)>>,
    store: Data<GameStore>,
) -> impl Responder {
    let mut names: Vec<String> = Vec::new();
    let mut starting_score = 501_i32;
    for (key, value) in form.into_inner() {
        match key.as_str() {
            "player" => {
                let trimmed = value.trim().to_string();
                if !trimmed.is_empty() {
                    names.push(trimmed);
                }
            }
            "starting_score" => {
                starting_score = match value.trim().parse() {
                    Ok(s) => s,
                    Err(_) => {
                        return HttpResponse::BadRequest()
                            .json(json!({"error": "starting_score must be an integer"}));
                    }
                };
            }
            _ => {}
        }
    }

    match store.start(names, starting_score).await {
        Ok(state) => HttpResponse::Ok()
            .content_type("text/html")
            .body(render_game_template(&state).into_string()),
        Err(e) => HttpResponse::Ok()
            .content_type("text/html")
            .body(render_setup(Some(&e.to_string())).into_string()),
    }
}

/// `POST /hit` — a board tap (or a confirmed camera read). Trusted input;
/// the engine itself absorbs hits outside `Playing` status.
pub async fn hit(
    query: web::Query<HashMap<String, String>>,
    store: Data<GameStore>,
) -> impl Responder {
    let value: i32 = match query.get("value").map(|s| s.trim().parse()) {
        Some(Ok(v)) if (0..=60).contains(&v) => v,
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({"error": "value parameter is required and must be an integer between 0 and 60"}));
        }
    };
    let multiplier: i32 = match query.get("multiplier") {
        None => 1,
        Some(m) => match m.trim().parse() {
            Ok(m @ 1..=3) => m,
            _ => {
                return HttpResponse::BadRequest()
                    .json(json!({"error": "multiplier must be 1, 2 or 3"}));
            }
        },
    };
    // T20 is the ceiling for one dart.
    if value * multiplier > 60 {
        return HttpResponse::BadRequest()
            .json(json!({"error": "a single dart cannot score more than 60"}));
    }
    let label = query
        .get("label")
        .map_or_else(|| hit_label(value, multiplier), |l| l.trim().to_string());

    let state = store
        .apply(&DartHit {
            value,
            multiplier,
            label,
        })
        .await;
    HttpResponse::Ok()
        .content_type("text/html")
        .body(render_game_template(&state).into_string())
}

/// `POST /reset` — back to setup. Any open voice session dies with the match.
pub async fn reset(store: Data<GameStore>, voice: Data<VoiceControl>) -> impl Responder {
    voice::stop(voice.get_ref()).await;
    let state = store.reset().await;
    HttpResponse::Ok()
        .content_type("text/html")
        .body(render_game_template(&state).into_string())
}
