use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};

use crate::gemini::{FALLBACK_ADVICE, GeminiConfig, checkout_advice};
use crate::store::GameStore;
use crate::view::game::render_coach_advice;

/// `GET /coach` — checkout advice for whoever is at the oche. Purely
/// informational: failures degrade to the canned line and never touch
/// match state.
pub async fn coach(store: Data<GameStore>, cfg: Data<GeminiConfig>) -> impl Responder {
    let state = store.snapshot().await;
    let Some(active) = state.active_player() else {
        return HttpResponse::Ok().content_type("text/html").body(String::new());
    };

    let advice = if cfg.has_api_key() {
        match checkout_advice(cfg.get_ref(), active.score).await {
            Ok(advice) => advice,
            Err(e) => {
                eprintln!("coach advice failed: {e}");
                FALLBACK_ADVICE.to_string()
            }
        }
    } else {
        FALLBACK_ADVICE.to_string()
    };

    HttpResponse::Ok()
        .content_type("text/html")
        .body(render_coach_advice(&advice).into_string())
}
