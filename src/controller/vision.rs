use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::gemini::{GeminiConfig, read_board_image};
use crate::view::game::{render_vision_confirm, render_vision_notice};

#[derive(Deserialize)]
pub struct VisionRequest {
    /// Base64 JPEG of a single still frame.
    pub image: String,
}

/// `POST /vision` — one frame in, a read (pending user confirmation) or a
/// retry notice out. Failures stop here; the match never sees them.
pub async fn analyze(body: web::Json<VisionRequest>, cfg: Data<GeminiConfig>) -> impl Responder {
    if body.image.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "image is required"}));
    }
    if !cfg.has_api_key() {
        return HttpResponse::Ok()
            .content_type("text/html")
            .body(render_vision_notice("Camera reads need a Gemini API key.").into_string());
    }

    match read_board_image(cfg.get_ref(), body.image.trim()).await {
        Ok(Some(read)) => HttpResponse::Ok()
            .content_type("text/html")
            .body(render_vision_confirm(read.score, &read.label).into_string()),
        Ok(None) => HttpResponse::Ok().content_type("text/html").body(
            render_vision_notice("No confident read on that frame - try another angle.")
                .into_string(),
        ),
        Err(e) => {
            eprintln!("vision read failed: {e}");
            HttpResponse::Ok().content_type("text/html").body(
                render_vision_notice("Could not reach the vision service - try again.")
                    .into_string(),
            )
        }
    }
}

/// `GET /vision/clear` — discard a pending read.
pub async fn clear() -> impl Responder {
    HttpResponse::Ok().content_type("text/html").body(String::new())
}
