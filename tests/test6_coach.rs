use rusty_darts::gemini::{
    GeminiConfig, NO_CHECKOUT_ADVICE, NO_CHECKOUT_THRESHOLD, checkout_advice,
};

fn offline_config() -> GeminiConfig {
    GeminiConfig {
        api_key: String::new(),
        advice_model: "advice-model".to_string(),
        vision_model: "vision-model".to_string(),
        live_model: "live-model".to_string(),
    }
}

#[tokio::test]
async fn test6_above_threshold_is_answered_without_a_network_call() {
    // No key configured: if this tried the network it would error, so a
    // canned answer proves the short-circuit.
    let cfg = offline_config();
    for remaining in [NO_CHECKOUT_THRESHOLD + 1, 301, 501] {
        let advice = checkout_advice(&cfg, remaining).await.unwrap();
        assert_eq!(advice, NO_CHECKOUT_ADVICE);
    }
}

#[tokio::test]
async fn test6_threshold_is_inclusive() {
    // 170 itself is the highest checkout (T20 T20 D-BULL), so it must go to
    // the model; with no key that surfaces as an adapter error, never a
    // scoring change.
    let cfg = offline_config();
    let result = checkout_advice(&cfg, NO_CHECKOUT_THRESHOLD).await;
    assert!(result.is_err());
}
