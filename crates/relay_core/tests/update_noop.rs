use relay_core::{update, Msg, RelayState};

#[test]
fn update_is_noop() {
    let state = RelayState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
