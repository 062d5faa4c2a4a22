mod common;

use common::{Harness, TOAST};
use pretty_assertions::assert_eq;
use std::time::Duration;
use translaterm::app::handler::{COPIED, NOTHING_TO_COPY};
use translaterm::ui::helpers::strip_ansi;
use translaterm::Event;

#[tokio::test(start_paused = true)]
async fn copy_without_output_says_nothing_to_copy() {
    let mut harness = Harness::started().await;

    harness.send(Event::CopyClick).await;

    assert_eq!(harness.state().toast_message, NOTHING_TO_COPY);
    assert!(harness.state().toast_visible);
    assert_eq!(harness.clipboard.contents(), None);

    harness.advance(TOAST).await;
    assert!(!harness.state().toast_visible);
}

#[tokio::test(start_paused = true)]
async fn copy_places_output_on_clipboard() {
    let mut harness = Harness::started().await;
    let request_id = harness.translate("hello").await;
    harness.complete(request_id, "hola").await;

    harness.send(Event::CommandLine(":copy".into())).await;

    assert_eq!(harness.clipboard.contents().as_deref(), Some("hola"));
    assert_eq!(harness.state().toast_message, COPIED);
    assert!(harness.state().toast_visible);

    let frame = strip_ansi(&translaterm::ui::render(harness.state(), 60));
    assert!(frame.contains(COPIED));
}

#[tokio::test(start_paused = true)]
async fn toast_hides_after_its_duration() {
    let mut harness = Harness::started().await;

    harness.send(Event::Notice("Saved".into())).await;
    harness.advance(TOAST - Duration::from_millis(1)).await;
    assert!(harness.state().toast_visible);

    harness.advance(Duration::from_millis(1)).await;
    assert!(!harness.state().toast_visible);
}

#[tokio::test(start_paused = true)]
async fn overlapping_toasts_share_the_first_deadline() {
    let mut harness = Harness::started().await;

    harness.send(Event::Notice("A".into())).await;
    harness.advance(Duration::from_millis(10)).await;
    harness.send(Event::Notice("B".into())).await;
    assert_eq!(harness.state().toast_message, "B");

    // The first timer still fires and hides the second message early.
    harness.advance(TOAST - Duration::from_millis(10)).await;
    assert!(!harness.state().toast_visible);
    assert_eq!(harness.state().toast_message, "B");

    harness.advance(Duration::from_millis(10)).await;
    assert!(!harness.state().toast_visible);
}

#[tokio::test(start_paused = true)]
async fn unknown_command_is_reported_as_toast() {
    let mut harness = Harness::started().await;

    harness.send(Event::CommandLine(":frobnicate".into())).await;

    assert_eq!(harness.state().toast_message, "Unknown command: :frobnicate");
    assert!(harness.state().toast_visible);
}
