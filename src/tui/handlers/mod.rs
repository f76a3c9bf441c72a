//! Event handlers for the TUI: keyboard input.

mod selector;

pub(super) use selector::{SelectorAction, handle_selector_key};
