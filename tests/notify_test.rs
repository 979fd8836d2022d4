mod common;

use calculator_mcp::notify::{display_frame, ChannelScreen, DISPLAY_LOGGER};
use calculator_mcp::session::{Session, DEFAULT_STATUS_DURATION};
use common::call_tool;
use serde_json::json;
use std::sync::Arc;

#[test]
fn test_frames_are_queued_in_render_order() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut session = Session::new(Arc::new(ChannelScreen::new(tx)), DEFAULT_STATUS_DURATION);

    call_tool(&mut session, "press", json!({"key": "AC"})).unwrap();
    call_tool(&mut session, "press", json!({"key": "4"})).unwrap();
    call_tool(&mut session, "press", json!({"key": "2"})).unwrap();
    call_tool(&mut session, "press", json!({"key": "←"})).unwrap();

    let mut frames = Vec::new();
    while let Ok(frame) = rx.try_recv() {
        frames.push(frame);
    }
    assert_eq!(frames, vec!["ON", "4", "42", "4"]);
}

#[test]
fn test_closed_channel_does_not_break_the_session() {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    drop(rx);
    let mut session = Session::new(Arc::new(ChannelScreen::new(tx)), DEFAULT_STATUS_DURATION);

    call_tool(&mut session, "press", json!({"key": "AC"})).unwrap();
    let result = call_tool(&mut session, "press", json!({"key": "3"})).unwrap();
    assert_eq!(common::result_body(&result)["display"], "3");
}

#[test]
fn test_display_frame_payload() {
    let params = display_frame("12.5").unwrap();
    let value = serde_json::to_value(&params).unwrap();

    assert_eq!(value["level"], "info");
    assert_eq!(value["logger"], DISPLAY_LOGGER);
    assert_eq!(value["data"]["text"], "12.5");
}

#[test]
fn test_display_frame_keeps_empty_text() {
    let value = serde_json::to_value(display_frame("").unwrap()).unwrap();
    assert_eq!(value["data"], json!({"text": ""}));
}
