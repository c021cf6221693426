use pokedex_core::{update, AppState, Msg};

#[test]
fn noop_leaves_state_untouched() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);
    assert_eq!(next, state);
    assert!(effects.is_empty());
}
