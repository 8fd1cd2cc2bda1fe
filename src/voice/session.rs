//! The Live WebSocket task behind one push-to-talk hold.

use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tokio_util::sync::CancellationToken;

use crate::error::AppError;
use crate::gemini::live::{
    RealtimeInputMessage, ScoreIntent, ServerMessage, ToolResponseMessage, setup_message, ws_url,
};
use crate::gemini::GeminiConfig;
use crate::model::{DartHit, names_match};
use crate::store::GameStore;
use crate::voice::VoiceControl;

/// Runs one session to completion. Every exit path, including cancellation
/// and connect failure, lands in the generation-checked teardown: the
/// control returns to idle unless a newer session has claimed it since.
pub async fn run(
    control: VoiceControl,
    store: GameStore,
    cfg: GeminiConfig,
    audio_rx: mpsc::Receiver<String>,
    cancel: CancellationToken,
    generation: u64,
) {
    if let Err(e) = run_inner(&control, &store, &cfg, audio_rx, &cancel).await {
        eprintln!("voice session ended: {e}");
    }
    control.lock().await.shutdown_if(generation);
}

async fn run_inner(
    control: &VoiceControl,
    store: &GameStore,
    cfg: &GeminiConfig,
    mut audio_rx: mpsc::Receiver<String>,
    cancel: &CancellationToken,
) -> Result<(), AppError> {
    let active_player = store
        .active_player_name()
        .await
        .ok_or_else(|| AppError::Session("no active player".to_string()))?;

    let (mut ws, _) = connect_async(ws_url(cfg)).await?;

    let setup = serde_json::to_string(&setup_message(cfg, &active_player))?;
    ws.send(Message::Text(setup.into())).await?;

    loop {
        tokio::select! {
            () = cancel.cancelled() => {
                let _ = ws.close(None).await;
                return Ok(());
            }
            chunk = audio_rx.recv() => {
                let Some(chunk) = chunk else {
                    let _ = ws.close(None).await;
                    return Ok(());
                };
                let frame = serde_json::to_string(&RealtimeInputMessage::audio_chunk(chunk))?;
                ws.send(Message::Text(frame.into())).await?;
            }
            frame = ws.next() => {
                let Some(frame) = frame else {
                    return Ok(());
                };
                match frame? {
                    Message::Text(txt) => {
                        handle_server_message(control, store, &txt, &mut ws).await?;
                    }
                    Message::Binary(bytes) => {
                        let txt = String::from_utf8_lossy(&bytes).to_string();
                        handle_server_message(control, store, &txt, &mut ws).await?;
                    }
                    Message::Close(_) => return Ok(()),
                    _ => {}
                }
            }
        }
    }
}

async fn handle_server_message<S>(
    control: &VoiceControl,
    store: &GameStore,
    raw: &str,
    ws: &mut S,
) -> Result<(), AppError>
where
    S: SinkExt<Message> + Unpin,
    AppError: From<S::Error>,
{
    let msg: ServerMessage = match serde_json::from_str(raw) {
        Ok(msg) => msg,
        Err(e) => {
            // A frame we don't model is not a reason to drop the session.
            eprintln!("unrecognized live frame: {e}");
            return Ok(());
        }
    };

    if msg.setup_complete.is_some() {
        control.lock().await.mark_open();
    }

    if let Some(content) = &msg.server_content {
        let chunks = content.audio_chunks();
        if !chunks.is_empty() {
            control.lock().await.queue_playback(chunks);
        }
        if content.interrupted == Some(true) {
            control.lock().await.truncate_playback();
        }
    }

    if let Some(tool_call) = &msg.tool_call {
        for call in &tool_call.function_calls {
            if let Some(intent) = ScoreIntent::from_call(call) {
                apply_intent(store, &intent).await;
            }
            let ack = serde_json::to_string(&ToolResponseMessage::ok(&call.id, &call.name))?;
            ws.send(Message::Text(ack.into())).await?;
        }
    }

    Ok(())
}

/// Applies a spoken score as a single multiplier-1 hit, but only when the
/// spoken name matches the player actually at the oche. Anything else is
/// silently dropped.
async fn apply_intent(store: &GameStore, intent: &ScoreIntent) {
    let Some(active) = store.active_player_name().await else {
        return;
    };
    if names_match(&intent.player_name, &active) {
        store.apply(&DartHit::new(intent.points, 1)).await;
    }
}
