//! Audio playback backend over rodio
//!
//! The output stream lives on a dedicated thread (cpal streams are not Send)
//! that takes commands over a channel and reports end-of-audio back to the
//! controller, which feeds it into the advance logic.

use std::io::Cursor;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use anyhow::Result;
use rodio::{Decoder, OutputStreamBuilder, Sink};
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug)]
pub enum PlayerEvent {
    /// The current ayah's audio played to completion.
    Ended,
    Failed(String),
}

enum AudioCommand {
    Play(Vec<u8>),
    /// Restart the most recently played buffer.
    Replay,
    Stop,
}

#[derive(Clone)]
pub struct AudioBackend {
    commands: Sender<AudioCommand>,
}

impl AudioBackend {
    pub fn start(events: UnboundedSender<PlayerEvent>) -> Result<Self> {
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::Builder::new()
            .name("audio".into())
            .spawn(move || audio_thread(rx, events))?;
        Ok(Self { commands: tx })
    }

    pub fn play(&self, bytes: Vec<u8>) {
        let _ = self.commands.send(AudioCommand::Play(bytes));
    }

    pub fn replay(&self) {
        let _ = self.commands.send(AudioCommand::Replay);
    }

    pub fn stop(&self) {
        let _ = self.commands.send(AudioCommand::Stop);
    }
}

fn audio_thread(rx: Receiver<AudioCommand>, events: UnboundedSender<PlayerEvent>) {
    let stream = match OutputStreamBuilder::open_default_stream() {
        Ok(stream) => stream,
        Err(e) => {
            tracing::error!(error = %e, "No audio output device");
            let _ = events.send(PlayerEvent::Failed(format!("Audio unavailable: {e}")));
            // Keep draining commands so senders never block or error.
            while rx.recv().is_ok() {}
            return;
        }
    };
    tracing::info!("Audio output stream opened");

    let mut sink: Option<Sink> = None;
    let mut last_bytes: Option<Vec<u8>> = None;
    let mut playing = false;

    let mut start = |bytes: &[u8], sink: &mut Option<Sink>| -> bool {
        if let Some(old) = sink.take() {
            old.stop();
        }
        match Decoder::new(Cursor::new(bytes.to_vec())) {
            Ok(decoded) => {
                let new_sink = Sink::connect_new(stream.mixer());
                new_sink.append(decoded);
                *sink = Some(new_sink);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Audio decode failed");
                let _ = events.send(PlayerEvent::Failed(format!("Audio decode failed: {e}")));
                false
            }
        }
    };

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(AudioCommand::Play(bytes)) => {
                playing = start(&bytes, &mut sink);
                last_bytes = Some(bytes);
            }
            Ok(AudioCommand::Replay) => {
                if let Some(bytes) = last_bytes.clone() {
                    tracing::debug!("Replaying current ayah");
                    playing = start(&bytes, &mut sink);
                }
            }
            Ok(AudioCommand::Stop) => {
                if let Some(current) = sink.take() {
                    current.stop();
                }
                playing = false;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        // Drain transition means the ayah finished naturally.
        if playing && sink.as_ref().is_none_or(|s| s.empty()) {
            playing = false;
            tracing::debug!("Ayah audio ended");
            if events.send(PlayerEvent::Ended).is_err() {
                break;
            }
        }
    }
    tracing::debug!("Audio thread shutting down");
}
