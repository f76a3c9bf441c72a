//! Key handler for the model selector.

use crossterm::event::{KeyCode, KeyModifiers};

use super::super::app::App;

/// Action to apply after handling a selector key. Returned to the event loop;
/// the loop applies it (the selector never mutates the selection itself).
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SelectorAction {
    Quit,
    /// Re-fetch the catalog (explicit activation, Ctrl+R).
    Refresh,
    /// Report the chosen model ID upward.
    Select(String),
    Keep,
}

/// Handle a key press. In disabled mode only quit and refresh are honored;
/// navigation, filtering, and Enter are ignored so no selection can result.
pub(crate) fn handle_selector_key(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
) -> SelectorAction {
    if key_modifiers.contains(KeyModifiers::CONTROL) {
        return match key_code {
            KeyCode::Char('c') => SelectorAction::Quit,
            KeyCode::Char('r') => SelectorAction::Refresh,
            _ => SelectorAction::Keep,
        };
    }

    if key_code == KeyCode::Esc {
        if !app.disabled && !app.filter.is_empty() {
            app.filter.clear();
            app.clamp_cursor();
            return SelectorAction::Keep;
        }
        return SelectorAction::Quit;
    }

    if app.disabled {
        return SelectorAction::Keep;
    }

    match key_code {
        KeyCode::Up => {
            app.move_up();
            SelectorAction::Keep
        }
        KeyCode::Down => {
            app.move_down();
            SelectorAction::Keep
        }
        KeyCode::Enter => match app.cursored_model() {
            Some(model) => SelectorAction::Select(model.id.clone()),
            None => SelectorAction::Keep,
        },
        KeyCode::Backspace => {
            app.filter.pop();
            app.clamp_cursor();
            SelectorAction::Keep
        }
        KeyCode::Char(c) => {
            app.filter.push(c);
            app.clamp_cursor();
            SelectorAction::Keep
        }
        _ => SelectorAction::Keep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{ModelCatalog, ModelInfo, ProviderModels};

    fn ready_app(selected: &str, disabled: bool) -> App {
        let mut app = App::new(selected.to_string(), disabled);
        app.apply_fetch_result(Ok(ModelCatalog {
            providers: vec![ProviderModels {
                provider: "openai".to_string(),
                models: vec![
                    ModelInfo {
                        id: "m1".to_string(),
                        name: "gpt-4o".to_string(),
                        max_tokens: 128000,
                    },
                    ModelInfo {
                        id: "m2".to_string(),
                        name: "gpt-4o-mini".to_string(),
                        max_tokens: 16000,
                    },
                ],
            }],
            default_model: None,
        }));
        app
    }

    #[test]
    fn enter_selects_cursored_model() {
        let mut app = ready_app("", false);
        app.move_down();
        let action = handle_selector_key(KeyCode::Enter, KeyModifiers::NONE, &mut app);
        assert_eq!(action, SelectorAction::Select("m2".to_string()));
    }

    #[test]
    fn enter_in_pending_phase_keeps() {
        let mut app = App::new(String::new(), false);
        let action = handle_selector_key(KeyCode::Enter, KeyModifiers::NONE, &mut app);
        assert_eq!(action, SelectorAction::Keep);
    }

    #[test]
    fn disabled_rejects_selection_and_navigation() {
        let mut app = ready_app("m1", true);
        assert_eq!(
            handle_selector_key(KeyCode::Enter, KeyModifiers::NONE, &mut app),
            SelectorAction::Keep
        );
        assert_eq!(
            handle_selector_key(KeyCode::Down, KeyModifiers::NONE, &mut app),
            SelectorAction::Keep
        );
        assert_eq!(app.cursor, 0);
        assert_eq!(
            handle_selector_key(KeyCode::Char('x'), KeyModifiers::NONE, &mut app),
            SelectorAction::Keep
        );
        assert!(app.filter.is_empty());
    }

    #[test]
    fn disabled_still_allows_quit_and_refresh() {
        let mut app = ready_app("m1", true);
        assert_eq!(
            handle_selector_key(KeyCode::Esc, KeyModifiers::NONE, &mut app),
            SelectorAction::Quit
        );
        assert_eq!(
            handle_selector_key(KeyCode::Char('r'), KeyModifiers::CONTROL, &mut app),
            SelectorAction::Refresh
        );
    }

    #[test]
    fn esc_clears_filter_before_quitting() {
        let mut app = ready_app("", false);
        handle_selector_key(KeyCode::Char('g'), KeyModifiers::NONE, &mut app);
        assert_eq!(app.filter, "g");
        assert_eq!(
            handle_selector_key(KeyCode::Esc, KeyModifiers::NONE, &mut app),
            SelectorAction::Keep
        );
        assert!(app.filter.is_empty());
        assert_eq!(
            handle_selector_key(KeyCode::Esc, KeyModifiers::NONE, &mut app),
            SelectorAction::Quit
        );
    }

    #[test]
    fn typing_feeds_filter_and_clamps_cursor() {
        let mut app = ready_app("", false);
        app.cursor = 1;
        handle_selector_key(KeyCode::Char('m'), KeyModifiers::NONE, &mut app);
        handle_selector_key(KeyCode::Char('i'), KeyModifiers::NONE, &mut app);
        handle_selector_key(KeyCode::Char('n'), KeyModifiers::NONE, &mut app);
        assert_eq!(app.filter, "min");
        assert_eq!(app.visible_models().len(), 1);
        assert_eq!(app.cursored_model().unwrap().id, "m2");
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = ready_app("", false);
        assert_eq!(
            handle_selector_key(KeyCode::Char('c'), KeyModifiers::CONTROL, &mut app),
            SelectorAction::Quit
        );
    }
}
