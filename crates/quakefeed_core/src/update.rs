use crate::{Effect, LoadPhase, LoaderState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: LoaderState, msg: Msg) -> (LoaderState, Vec<Effect>) {
    let effects = match msg {
        Msg::StartRequested { url } => {
            if state.phase() == LoadPhase::Loading {
                // At most one cycle may be in flight per coordinator; a second
                // start while loading is a no-op.
                Vec::new()
            } else {
                let load_id = state.begin_load();
                vec![Effect::StartLoad { load_id, url }]
            }
        }
        Msg::LoadFinished { load_id, records } => {
            if state.is_active(load_id) {
                state.complete(records.clone());
                vec![Effect::Deliver { records }]
            } else {
                // Stale result from a cycle voided by reset; never delivered.
                Vec::new()
            }
        }
        Msg::ResetRequested => {
            state.reset();
            vec![Effect::Clear]
        }
    };

    (state, effects)
}
