//! Audio backend event listener

use tokio::sync::mpsc::UnboundedReceiver;

use crate::audio::PlayerEvent;

use super::AppController;

impl AppController {
    pub fn start_player_event_listener(&self, mut events: UnboundedReceiver<PlayerEvent>) {
        let controller = self.clone();
        tracing::info!("Starting audio event listener");

        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                {
                    let model = controller.model.lock().await;
                    if model.should_quit().await {
                        tracing::debug!("Audio event listener shutting down");
                        break;
                    }
                }

                match event {
                    PlayerEvent::Ended => {
                        controller.handle_audio_end().await;
                    }
                    PlayerEvent::Failed(message) => {
                        let model = controller.model.lock().await;
                        model.set_error(message).await;
                    }
                }
            }
        });
    }
}
