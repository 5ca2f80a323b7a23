//! Bottom row synthesis for the standard layout.

use crate::constants::WILDCARD_BUTTON;
use crate::models::{KeyboardAction, KeyboardActions, KeyboardContext};
use crate::services::layout_provider::LayoutCollaborators;

/// Builds the bottom row, left to right:
///
/// 1. keyboard type switch, when the context has one
/// 2. globe key, when the host needs an input mode switch key
/// 3. wildcard accessory button
/// 4. space
/// 5. return key for the focused text field
///
/// Absent actions are omitted, never replaced by placeholders.
pub fn build_bottom_row(
    collaborators: &impl LayoutCollaborators,
    context: &KeyboardContext,
) -> KeyboardActions {
    let mut result = KeyboardActions::new();

    if let Some(action) = collaborators.keyboard_switch_action_for_bottom_row(context) {
        result.push(action);
    }

    if context.needs_input_mode_switch_key {
        result.push(KeyboardAction::NextKeyboard);
    }

    result.push(KeyboardAction::Custom(WILDCARD_BUTTON.to_string()));
    result.push(KeyboardAction::Space);
    result.push(collaborators.keyboard_return_action(context));

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{KeyboardType, ReturnKeyType};
    use crate::services::layout_provider::StandardLayoutProvider;

    fn wildcard() -> KeyboardAction {
        KeyboardAction::Custom(WILDCARD_BUTTON.to_string())
    }

    #[test]
    fn test_alphabetic_bottom_row() {
        let provider = StandardLayoutProvider::from_config(&Config::new());
        let context = KeyboardContext::new(KeyboardType::default());

        assert_eq!(
            build_bottom_row(&provider, &context),
            vec![
                KeyboardAction::KeyboardType(KeyboardType::Numeric),
                wildcard(),
                KeyboardAction::Space,
                KeyboardAction::Primary(ReturnKeyType::Return),
            ]
        );
    }

    #[test]
    fn test_globe_key_only_when_needed() {
        let provider = StandardLayoutProvider::from_config(&Config::new());
        let context = KeyboardContext::new(KeyboardType::Numeric);

        let without = build_bottom_row(&provider, &context);
        assert!(!without.contains(&KeyboardAction::NextKeyboard));

        let with = build_bottom_row(&provider, &context.with_input_mode_switch_key(true));
        assert_eq!(with[1], KeyboardAction::NextKeyboard);
        assert_eq!(with.len(), without.len() + 1);
    }

    #[test]
    fn test_missing_switch_action_is_omitted() {
        let provider = StandardLayoutProvider::from_config(&Config::new());
        let context = KeyboardContext::new(KeyboardType::Emojis)
            .with_input_mode_switch_key(true)
            .with_return_key_type(ReturnKeyType::Send);

        assert_eq!(
            build_bottom_row(&provider, &context),
            vec![
                KeyboardAction::NextKeyboard,
                wildcard(),
                KeyboardAction::Space,
                KeyboardAction::Primary(ReturnKeyType::Send),
            ]
        );
    }
}
