// File: crates/gdpchart-core/tests/view.rs
// Purpose: Validate chart state machine transitions (load-once, hover idempotence).

use gdpchart_core::view::{ChartState, Event};
use gdpchart_core::Series;

fn series() -> Series {
    Series::from_json(r#"{"data":[["1947-01-01",243.1],["1947-04-01",246.3],["1947-07-01",250.1]]}"#)
        .unwrap()
}

#[test]
fn loading_to_ready_fires_once() {
    let mut state = ChartState::new();
    assert!(state.is_loading());
    assert!(state.apply(Event::DataLoaded(series())));
    assert!(!state.is_loading());

    // A late second response is ignored rather than applied.
    let mut replacement = series();
    replacement.points.truncate(1);
    assert!(!state.apply(Event::DataLoaded(replacement)));
    match &state {
        ChartState::Ready { series, .. } => assert_eq!(series.len(), 3),
        other => panic!("unexpected state {:?}", other),
    }
}

#[test]
fn fetch_failure_is_a_first_class_state() {
    let mut state = ChartState::new();
    assert!(state.apply(Event::FetchFailed("timeout".into())));
    match &state {
        ChartState::Failed { message } => assert_eq!(message, "timeout"),
        other => panic!("unexpected state {:?}", other),
    }
    // Data arriving after failure stays ignored.
    assert!(!state.apply(Event::DataLoaded(series())));
    assert!(matches!(state, ChartState::Failed { .. }));
}

#[test]
fn hover_tracks_exact_point_and_resets() {
    let mut state = ChartState::new();
    state.apply(Event::DataLoaded(series()));
    assert!(state.hovered().is_none());

    assert!(state.apply(Event::HoverStart(1)));
    assert_eq!(state.hovered().map(|p| p.stamp.as_str()), Some("1947-04-01"));

    // Re-entering the same bar is a no-op.
    assert!(!state.apply(Event::HoverStart(1)));

    assert!(state.apply(Event::HoverStart(2)));
    assert_eq!(state.hovered().map(|p| p.stamp.as_str()), Some("1947-07-01"));

    assert!(state.apply(Event::HoverEnd));
    assert!(state.hovered().is_none());
    // Leaving again changes nothing.
    assert!(!state.apply(Event::HoverEnd));
}

#[test]
fn out_of_range_hover_is_rejected() {
    let mut state = ChartState::new();
    state.apply(Event::DataLoaded(series()));
    assert!(!state.apply(Event::HoverStart(99)));
    assert!(state.hovered().is_none());
}

#[test]
fn pointer_moves_observable_only_while_hovered() {
    let mut state = ChartState::new();
    state.apply(Event::DataLoaded(series()));
    // Position is tracked regardless, but nothing visible changes yet.
    assert!(!state.apply(Event::PointerMove { x: 10.0, y: 20.0 }));

    state.apply(Event::HoverStart(0));
    assert!(state.apply(Event::PointerMove { x: 11.0, y: 21.0 }));
    match &state {
        ChartState::Ready { pointer, .. } => assert_eq!(*pointer, (11.0, 21.0)),
        other => panic!("unexpected state {:?}", other),
    }
}

#[test]
fn pointer_events_before_load_are_ignored() {
    let mut state = ChartState::new();
    assert!(!state.apply(Event::HoverStart(0)));
    assert!(!state.apply(Event::PointerMove { x: 1.0, y: 1.0 }));
    assert!(state.is_loading());
}
