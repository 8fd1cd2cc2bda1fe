use actix_web::web::Data;
use actix_web::{App, test, web};
use scraper::{Html, Selector};

use rusty_darts::controller::{coach, game, vision, voice as voice_controller};
use rusty_darts::gemini::{FALLBACK_ADVICE, GeminiConfig};
use rusty_darts::model::GameStatus;
use rusty_darts::store::GameStore;
use rusty_darts::voice;

fn keyless_config() -> GeminiConfig {
    GeminiConfig {
        api_key: String::new(),
        advice_model: "advice-model".to_string(),
        vision_model: "vision-model".to_string(),
        live_model: "live-model".to_string(),
    }
}

macro_rules! test_app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new($store.clone()))
                .app_data(Data::new(keyless_config()))
                .app_data(Data::new(voice::new_control()))
                .route("/game", web::get().to(game::game))
                .route("/start", web::post().to(game::start_game))
                .route("/hit", web::post().to(game::hit))
                .route("/reset", web::post().to(game::reset))
                .route("/coach", web::get().to(coach::coach))
                .route("/vision/clear", web::get().to(vision::clear))
                .route("/voice/stop", web::post().to(voice_controller::stop))
                .route("/voice/events", web::get().to(voice_controller::events)),
        )
        .await
    };
}

#[actix_web::test]
async fn test3_game_starts_on_setup_screen() {
    let store = GameStore::new();
    let app = test_app!(store);

    let req = test::TestRequest::get().uri("/game").to_request();
    let body = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();

    let doc = Html::parse_fragment(&body);
    let form = Selector::parse("form").unwrap();
    assert!(doc.select(&form).next().is_some(), "setup form expected");
    assert!(body.contains("Starting score"));
}

#[actix_web::test]
async fn test3_start_then_hit_round_trip() {
    let store = GameStore::new();
    let app = test_app!(store);

    let req = test::TestRequest::post()
        .uri("/start")
        .set_form(vec![
            ("player", "Alice"),
            ("player", "Bob"),
            ("starting_score", "501"),
        ])
        .to_request();
    let body = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
    assert!(body.contains("Alice"));
    assert!(body.contains("Bob"));

    // T20 from the board.
    let req = test::TestRequest::post()
        .uri("/hit?value=20&multiplier=3")
        .to_request();
    let body = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();

    let doc = Html::parse_fragment(&body);
    let cells = Selector::parse("td.score-cell").unwrap();
    let scores: Vec<String> = doc
        .select(&cells)
        .map(|c| c.text().collect::<String>())
        .collect();
    assert_eq!(scores, vec!["441", "501"]);

    let state = store.snapshot().await;
    assert_eq!(state.players[0].score, 441);
    assert_eq!(state.current_turn_throws, vec![60]);
}

#[actix_web::test]
async fn test3_start_rejects_bad_roster_with_notice() {
    let store = GameStore::new();
    let app = test_app!(store);

    // All-blank names collapse to an empty roster; the setup form returns
    // with a notice and the store stays in setup.
    let req = test::TestRequest::post()
        .uri("/start")
        .set_form(vec![("player", "   "), ("starting_score", "501")])
        .to_request();
    let body = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
    assert!(body.contains("players required"));
    assert_eq!(store.snapshot().await.status, GameStatus::Setup);
}

#[actix_web::test]
async fn test3_hit_requires_numeric_value() {
    let store = GameStore::new();
    let app = test_app!(store);

    let req = test::TestRequest::post().uri("/hit?value=abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/hit?value=20&multiplier=7")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test3_hit_rejects_values_no_dart_can_score() {
    let store = GameStore::new();
    store
        .start(vec!["Alice".to_string(), "Bob".to_string()], 501)
        .await
        .unwrap();
    let app = test_app!(store);

    // Far beyond the board, including values that would overflow i32 when
    // multiplied, and combinations above the 60-point single-dart ceiling.
    for uri in [
        "/hit?value=2000000000&multiplier=3",
        "/hit?value=61",
        "/hit?value=-1",
        "/hit?value=25&multiplier=3",
    ] {
        let req = test::TestRequest::post().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::BAD_REQUEST,
            "{uri} should be rejected"
        );
    }

    // The match was untouched.
    let state = store.snapshot().await;
    assert_eq!(state.players[0].score, 501);
    assert!(state.current_turn_throws.is_empty());
}

#[actix_web::test]
async fn test3_hit_without_match_is_silently_ignored() {
    let store = GameStore::new();
    let app = test_app!(store);

    let req = test::TestRequest::post().uri("/hit?value=20").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(store.snapshot().await.status, GameStatus::Setup);
}

#[actix_web::test]
async fn test3_winner_screen_after_checkout() {
    let store = GameStore::new();
    store
        .start(vec!["Alice".to_string(), "Bob".to_string()], 40)
        .await
        .unwrap();
    let app = test_app!(store);

    let req = test::TestRequest::post()
        .uri("/hit?value=20&multiplier=2")
        .to_request();
    let body = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
    assert!(body.contains("Winner: Alice"));
}

#[actix_web::test]
async fn test3_reset_returns_setup_screen() {
    let store = GameStore::new();
    store.start(vec!["Alice".to_string()], 501).await.unwrap();
    let app = test_app!(store);

    let req = test::TestRequest::post().uri("/reset").to_request();
    let body = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
    assert!(body.contains("Set up the match"));
    assert_eq!(store.snapshot().await.status, GameStatus::Setup);
}

#[actix_web::test]
async fn test3_coach_without_key_uses_fallback() {
    let store = GameStore::new();
    store.start(vec!["Alice".to_string()], 501).await.unwrap();
    let app = test_app!(store);

    let req = test::TestRequest::get().uri("/coach").to_request();
    let body = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
    assert!(body.contains(FALLBACK_ADVICE));
}

#[actix_web::test]
async fn test3_coach_is_empty_outside_a_match() {
    let store = GameStore::new();
    let app = test_app!(store);

    let req = test::TestRequest::get().uri("/coach").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn test3_voice_events_idle_by_default() {
    let store = GameStore::new();
    let app = test_app!(store);

    let req = test::TestRequest::get().uri("/voice/events").to_request();
    let events: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(events["phase"], "idle");
    assert_eq!(events["interrupted"], false);
    assert!(events["audio"].as_array().unwrap().is_empty());

    // Stop with nothing running is fine.
    let req = test::TestRequest::post().uri("/voice/stop").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
