//! Push-to-talk voice scoring.
//!
//! One exclusive session at a time: `idle -> pending -> open -> idle`.
//! Starting while pending or open is a no-op; shutdown is idempotent and
//! safe on a partially-initialized session, so releasing the button,
//! resetting the match, and task failure can all tear down freely.

pub mod session;

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;

use crate::gemini::GeminiConfig;
use crate::store::GameStore;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VoicePhase {
    #[default]
    Idle,
    Pending,
    Open,
}

/// What the browser polls: queued model audio, whether playback should be
/// cut short, and the session phase for the button state.
#[derive(Serialize, Debug, Default)]
pub struct VoiceEvents {
    pub audio: Vec<String>,
    pub interrupted: bool,
    pub phase: VoicePhase,
}

#[derive(Default)]
pub struct VoiceSession {
    phase: VoicePhase,
    audio_tx: Option<mpsc::Sender<String>>,
    cancel: Option<CancellationToken>,
    playback: Vec<String>,
    interrupted: bool,
    generation: u64,
}

impl VoiceSession {
    /// Claims the session and returns its generation, or `None` (leaving
    /// everything untouched) unless the session was idle. The generation
    /// identifies this claim to [`Self::shutdown_if`].
    pub fn begin(
        &mut self,
        audio_tx: mpsc::Sender<String>,
        cancel: CancellationToken,
    ) -> Option<u64> {
        if self.phase != VoicePhase::Idle {
            return None;
        }
        self.generation += 1;
        self.phase = VoicePhase::Pending;
        self.audio_tx = Some(audio_tx);
        self.cancel = Some(cancel);
        self.playback.clear();
        self.interrupted = false;
        Some(self.generation)
    }

    /// The Live server acknowledged setup; audio can flow.
    pub fn mark_open(&mut self) {
        if self.phase == VoicePhase::Pending {
            self.phase = VoicePhase::Open;
        }
    }

    /// Teardown for the session task itself: releases only when the control
    /// is still on the task's own claim. A task that outlives its stop must
    /// not tear down a session started after it.
    pub fn shutdown_if(&mut self, generation: u64) {
        if self.generation == generation {
            self.shutdown();
        }
    }

    /// Releases everything. Safe to call any number of times, in any phase.
    pub fn shutdown(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
        self.audio_tx = None;
        self.phase = VoicePhase::Idle;
        self.playback.clear();
        self.interrupted = false;
    }

    #[must_use]
    pub fn phase(&self) -> VoicePhase {
        self.phase
    }

    #[must_use]
    pub fn audio_sender(&self) -> Option<mpsc::Sender<String>> {
        self.audio_tx.clone()
    }

    pub fn queue_playback(&mut self, chunks: Vec<String>) {
        self.playback.extend(chunks);
    }

    /// The model was interrupted; anything still queued must not play.
    pub fn truncate_playback(&mut self) {
        self.playback.clear();
        self.interrupted = true;
    }

    pub fn drain_events(&mut self) -> VoiceEvents {
        VoiceEvents {
            audio: std::mem::take(&mut self.playback),
            interrupted: std::mem::replace(&mut self.interrupted, false),
            phase: self.phase,
        }
    }
}

pub type VoiceControl = Arc<Mutex<VoiceSession>>;

#[must_use]
pub fn new_control() -> VoiceControl {
    Arc::new(Mutex::new(VoiceSession::default()))
}

/// Opens a Live session if none is active. No-op guard otherwise.
pub async fn start(control: VoiceControl, store: GameStore, cfg: GeminiConfig) {
    let (audio_tx, audio_rx) = mpsc::channel::<String>(64);
    let cancel = CancellationToken::new();
    let generation = {
        let mut session = control.lock().await;
        match session.begin(audio_tx, cancel.clone()) {
            Some(generation) => generation,
            None => return,
        }
    };
    tokio::spawn(session::run(control, store, cfg, audio_rx, cancel, generation));
}

/// Forwards one base64 audio chunk to the open session; dropped silently
/// when no session is up (the button was released mid-flight).
pub async fn push_audio(control: &VoiceControl, chunk: String) {
    let tx = { control.lock().await.audio_sender() };
    if let Some(tx) = tx {
        let _ = tx.send(chunk).await;
    }
}

/// Tears the session down. Idempotent.
pub async fn stop(control: &VoiceControl) {
    control.lock().await.shutdown();
}

pub async fn events(control: &VoiceControl) -> VoiceEvents {
    control.lock().await.drain_events()
}
