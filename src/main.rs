use rusty_darts::args;
use rusty_darts::controller::{coach, game, vision, voice as voice_controller};
use rusty_darts::store::GameStore;
use rusty_darts::view::index::render_index_template;
use rusty_darts::voice;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();
    let gemini_config = args.gemini_config();
    if !gemini_config.has_api_key() {
        eprintln!(
            "warning: no Gemini API key (flag --api-key or GEMINI_API_KEY); \
             coach, voice and camera scoring will degrade to canned responses"
        );
    }

    let store = GameStore::new();
    let voice_control = voice::new_control();
    let static_dir = args.static_dir.clone();
    let port = args.port;

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(store.clone()))
            .app_data(Data::new(gemini_config.clone()))
            .app_data(Data::new(voice_control.clone()))
            .route("/", web::get().to(index))
            .route("/game", web::get().to(game::game))
            .route("/start", web::post().to(game::start_game))
            .route("/hit", web::post().to(game::hit))
            .route("/reset", web::post().to(game::reset))
            .route("/coach", web::get().to(coach::coach))
            .route("/vision", web::post().to(vision::analyze))
            .route("/vision/clear", web::get().to(vision::clear))
            .route("/voice/start", web::post().to(voice_controller::start))
            .route("/voice/audio", web::post().to(voice_controller::audio))
            .route("/voice/stop", web::post().to(voice_controller::stop))
            .route("/voice/events", web::get().to(voice_controller::events))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;
    Ok(())
}

async fn index() -> impl Responder {
    let markup = render_index_template();
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
