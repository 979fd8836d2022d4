//! Display frames as MCP notifications
//!
//! The session renders onto a [`ChannelScreen`]; a forwarding task drains the
//! channel and sends each frame to the client as a `notifications/message`
//! log entry from the `display` logger.

use rust_mcp_sdk::schema::LoggingMessageNotificationParams;
use rust_mcp_sdk::McpServer;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::display::Screen;

/// Logger name display frames are published under
pub const DISPLAY_LOGGER: &str = "display";

/// [`Screen`] that queues every frame for the client
pub struct ChannelScreen {
    frames: UnboundedSender<String>,
}

impl ChannelScreen {
    pub fn new(frames: UnboundedSender<String>) -> Self {
        Self { frames }
    }
}

impl Screen for ChannelScreen {
    fn render(&self, text: &str) {
        if self.frames.send(text.to_string()).is_err() {
            log::debug!("Display channel closed, dropping frame {text:?}");
        }
    }
}

/// Notification payload carrying one display frame
pub fn display_frame(text: &str) -> Result<LoggingMessageNotificationParams, serde_json::Error> {
    serde_json::from_value(json!({
        "level": "info",
        "logger": DISPLAY_LOGGER,
        "data": { "text": text },
    }))
}

/// Send queued frames to the client until every sender is gone
pub async fn forward_frames(runtime: Arc<dyn McpServer>, mut frames: UnboundedReceiver<String>) {
    while let Some(text) = frames.recv().await {
        let params = match display_frame(&text) {
            Ok(params) => params,
            Err(e) => {
                log::warn!("Failed to build display notification: {e}");
                continue;
            }
        };

        if let Err(e) = runtime.send_logging_message(params).await {
            log::warn!("Failed to send display frame {text:?}: {e}");
        }
    }

    log::debug!("Display channel closed");
}
