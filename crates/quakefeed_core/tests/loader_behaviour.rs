use quakefeed_core::{update, Effect, EventRecord, LoadPhase, LoaderState, Msg};

fn sample_record(magnitude: f64) -> EventRecord {
    EventRecord {
        magnitude,
        location: "10km N of Ridgecrest, CA".to_string(),
        occurred_at_ms: 1_000,
        detail_url: Some("http://example.com/ev".to_string()),
    }
}

fn start(state: LoaderState) -> (LoaderState, Vec<Effect>) {
    update(
        state,
        Msg::StartRequested {
            url: "https://feed.example/query".to_string(),
        },
    )
}

#[test]
fn start_from_idle_begins_a_load() {
    feed_logging::initialize_for_tests();
    let state = LoaderState::new();

    let (state, effects) = start(state);

    assert_eq!(state.phase(), LoadPhase::Loading);
    assert_eq!(
        effects,
        vec![Effect::StartLoad {
            load_id: 1,
            url: "https://feed.example/query".to_string(),
        }]
    );
}

#[test]
fn second_start_while_loading_is_a_no_op() {
    let state = LoaderState::new();
    let (state, _effects) = start(state);

    let (state, effects) = start(state);

    assert_eq!(state.phase(), LoadPhase::Loading);
    assert!(effects.is_empty(), "no second StartLoad may be emitted");
}

#[test]
fn finished_load_delivers_exactly_once() {
    let state = LoaderState::new();
    let (state, _effects) = start(state);
    let records = vec![sample_record(6.1)];

    let (state, effects) = update(
        state,
        Msg::LoadFinished {
            load_id: 1,
            records: records.clone(),
        },
    );

    assert_eq!(state.phase(), LoadPhase::Delivered);
    assert_eq!(state.records(), records.as_slice());
    assert_eq!(effects, vec![Effect::Deliver { records }]);
}

#[test]
fn failed_load_delivers_empty_records() {
    let state = LoaderState::new();
    let (state, _effects) = start(state);

    let (state, effects) = update(
        state,
        Msg::LoadFinished {
            load_id: 1,
            records: Vec::new(),
        },
    );

    assert_eq!(state.phase(), LoadPhase::Delivered);
    assert_eq!(
        effects,
        vec![Effect::Deliver {
            records: Vec::new()
        }]
    );
}

#[test]
fn reset_before_completion_discards_the_pending_result() {
    let state = LoaderState::new();
    let (state, _effects) = start(state);

    let (state, effects) = update(state, Msg::ResetRequested);
    assert_eq!(state.phase(), LoadPhase::Idle);
    assert_eq!(effects, vec![Effect::Clear]);

    // The voided cycle's result arrives late and must not be delivered.
    let (state, effects) = update(
        state,
        Msg::LoadFinished {
            load_id: 1,
            records: vec![sample_record(5.0)],
        },
    );
    assert_eq!(state.phase(), LoadPhase::Idle);
    assert!(effects.is_empty());
    assert!(state.records().is_empty());
}

#[test]
fn reset_after_delivery_clears_held_records() {
    let state = LoaderState::new();
    let (state, _effects) = start(state);
    let (state, _effects) = update(
        state,
        Msg::LoadFinished {
            load_id: 1,
            records: vec![sample_record(4.2)],
        },
    );
    assert!(!state.records().is_empty());

    let (state, effects) = update(state, Msg::ResetRequested);

    assert_eq!(state.phase(), LoadPhase::Idle);
    assert!(state.records().is_empty());
    assert_eq!(effects, vec![Effect::Clear]);
}

#[test]
fn restart_after_delivery_uses_a_fresh_load_id() {
    let state = LoaderState::new();
    let (state, _effects) = start(state);
    let (state, _effects) = update(
        state,
        Msg::LoadFinished {
            load_id: 1,
            records: Vec::new(),
        },
    );

    let (state, effects) = start(state);

    assert_eq!(state.phase(), LoadPhase::Loading);
    match effects.as_slice() {
        [Effect::StartLoad { load_id, .. }] => assert_eq!(*load_id, 2),
        other => panic!("expected a single StartLoad, got {other:?}"),
    }

    // The old id is stale now even though it was once delivered.
    let (_state, effects) = update(
        state,
        Msg::LoadFinished {
            load_id: 1,
            records: vec![sample_record(3.0)],
        },
    );
    assert!(effects.is_empty());
}
