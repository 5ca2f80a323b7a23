//! Width class resolution for composed layout cells.

use crate::constants::{
    LAST_SYMBOLIC_INPUT_WIDTH, PRIMARY_WIDTH_LANDSCAPE, PRIMARY_WIDTH_PORTRAIT, WIDE_KEYS_ROW,
};
use crate::models::{KeyboardAction, KeyboardContext, KeyboardLayoutItemWidth};
use crate::services::layout_provider::LayoutCollaborators;

/// Whether `row` is the wide-keys row of a numeric or symbolic keyboard.
#[must_use]
pub fn is_last_numeric_input_row(row: usize, context: &KeyboardContext) -> bool {
    context.keyboard_type.is_numeric_or_symbolic() && row == WIDE_KEYS_ROW
}

/// Resolves the width class of `action` at (`row`, `column`).
///
/// Rules, first match wins:
///
/// 1. the context's dictation replacement: bottom system button width
/// 2. characters: 14% on the numeric/symbolic wide-keys row, `Input` elsewhere
/// 3. backspace and shift: lower system button width
/// 4. keyboard type switches and the globe key: bottom system button width
/// 5. return: 25% in portrait, 19.5% in landscape
/// 6. custom buttons: `Input`
/// 7. everything else: `Available`
pub fn resolve_width(
    collaborators: &impl LayoutCollaborators,
    action: &KeyboardAction,
    row: usize,
    _column: usize,
    context: &KeyboardContext,
) -> KeyboardLayoutItemWidth {
    if context.dictation_replacement.as_ref() == Some(action) {
        return collaborators.bottom_system_button_width(context);
    }

    match action {
        KeyboardAction::Character(_) => {
            if is_last_numeric_input_row(row, context) {
                KeyboardLayoutItemWidth::Percentage(LAST_SYMBOLIC_INPUT_WIDTH)
            } else {
                KeyboardLayoutItemWidth::Input
            }
        }
        KeyboardAction::Backspace | KeyboardAction::Shift => {
            collaborators.lower_system_button_width(context)
        }
        KeyboardAction::KeyboardType(_) | KeyboardAction::NextKeyboard => {
            collaborators.bottom_system_button_width(context)
        }
        KeyboardAction::Primary(_) => KeyboardLayoutItemWidth::Percentage(if context.is_portrait() {
            PRIMARY_WIDTH_PORTRAIT
        } else {
            PRIMARY_WIDTH_LANDSCAPE
        }),
        KeyboardAction::Custom(_) => KeyboardLayoutItemWidth::Input,
        KeyboardAction::Space | KeyboardAction::Dictation | KeyboardAction::None => {
            KeyboardLayoutItemWidth::Available
        }
    }
}
