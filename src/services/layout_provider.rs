//! Layout provider seams and the standard base strategy.
//!
//! `KeyboardLayoutProvider` is the capability every layout strategy offers:
//! rows for a context, actions for rows, a width for each action.
//! `LayoutCollaborators` holds the context-sensitive building blocks
//! (accessory actions, switch and return keys, system button widths) that a
//! decorating strategy reuses from the one it wraps.

use crate::config::{AccessoryConfig, Config};
use crate::models::{
    InputSetRows, KeyboardAction, KeyboardActionRows, KeyboardActions, KeyboardCase,
    KeyboardContext, KeyboardLayoutItemWidth, KeyboardType, ReturnKeyType,
};
use crate::services::input_rows::{resolve_input_rows, InputSetProvider, StandardInputSetProvider};

/// A layout strategy: composes the action grid for a context.
pub trait KeyboardLayoutProvider {
    /// Raw character rows for the context.
    fn input_rows(&self, context: &KeyboardContext) -> InputSetRows;

    /// Action grid for the given rows.
    fn actions(&self, inputs: &InputSetRows, context: &KeyboardContext) -> KeyboardActionRows;

    /// Width class of the action at (`row`, `column`).
    fn item_width(
        &self,
        action: &KeyboardAction,
        row: usize,
        column: usize,
        context: &KeyboardContext,
    ) -> KeyboardLayoutItemWidth;
}

/// Context-sensitive building blocks shared between layout strategies.
///
/// The `actions` argument of the accessory methods is the elementary action
/// grid the accessories will be placed around.
pub trait LayoutCollaborators {
    /// Actions before the top input row.
    fn top_leading_actions(
        &self,
        actions: &KeyboardActionRows,
        context: &KeyboardContext,
    ) -> KeyboardActions;

    /// Actions after the top input row.
    fn top_trailing_actions(
        &self,
        actions: &KeyboardActionRows,
        context: &KeyboardContext,
    ) -> KeyboardActions;

    /// Actions before the middle input row.
    fn middle_leading_actions(
        &self,
        actions: &KeyboardActionRows,
        context: &KeyboardContext,
    ) -> KeyboardActions;

    /// Actions after the middle input row.
    fn middle_trailing_actions(
        &self,
        actions: &KeyboardActionRows,
        context: &KeyboardContext,
    ) -> KeyboardActions;

    /// Actions before the lower input row.
    fn lower_leading_actions(
        &self,
        actions: &KeyboardActionRows,
        context: &KeyboardContext,
    ) -> KeyboardActions;

    /// Actions after the lower input row.
    fn lower_trailing_actions(
        &self,
        actions: &KeyboardActionRows,
        context: &KeyboardContext,
    ) -> KeyboardActions;

    /// Keyboard type switch shown at the start of the bottom row, if any.
    fn keyboard_switch_action_for_bottom_row(
        &self,
        context: &KeyboardContext,
    ) -> Option<KeyboardAction>;

    /// Return key for the focused text field.
    fn keyboard_return_action(&self, context: &KeyboardContext) -> KeyboardAction;

    /// Width of switch keys in the bottom row.
    fn bottom_system_button_width(&self, context: &KeyboardContext) -> KeyboardLayoutItemWidth;

    /// Width of shift and backspace.
    fn lower_system_button_width(&self, context: &KeyboardContext) -> KeyboardLayoutItemWidth;
}

/// Maps each glyph to a character action, one for one.
pub fn character_actions(inputs: &InputSetRows) -> KeyboardActionRows {
    inputs
        .iter()
        .map(|row| row.iter().map(KeyboardAction::character).collect())
        .collect()
}

/// Generic phone layout used for everything the grid-aware layer passes through.
///
/// Accessories default to the iPhone arrangement (shift or a keyboard switch
/// before the lower row, backspace after it) and can be replaced per locale
/// through `[accessories.<locale>]` in the config.
#[derive(Debug, Clone, Default)]
pub struct StandardLayoutProvider<P = StandardInputSetProvider> {
    input_set_provider: P,
    config: Config,
}

impl StandardLayoutProvider<StandardInputSetProvider> {
    /// Creates the provider with built-in input sets and the widths and
    /// accessories from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(StandardInputSetProvider, config)
    }
}

impl<P: InputSetProvider> StandardLayoutProvider<P> {
    /// Creates the provider with a custom input set source.
    pub fn new(input_set_provider: P, config: &Config) -> Self {
        Self {
            input_set_provider,
            config: config.clone(),
        }
    }

    fn configured(
        &self,
        context: &KeyboardContext,
        slot: impl Fn(&AccessoryConfig) -> Option<&Vec<KeyboardAction>>,
    ) -> Option<KeyboardActions> {
        self.config
            .accessories_for(context.locale)
            .and_then(slot)
            .cloned()
    }
}

impl<P: InputSetProvider> KeyboardLayoutProvider for StandardLayoutProvider<P> {
    fn input_rows(&self, context: &KeyboardContext) -> InputSetRows {
        resolve_input_rows(&self.input_set_provider, context)
    }

    fn actions(&self, inputs: &InputSetRows, _context: &KeyboardContext) -> KeyboardActionRows {
        character_actions(inputs)
    }

    fn item_width(
        &self,
        action: &KeyboardAction,
        _row: usize,
        _column: usize,
        _context: &KeyboardContext,
    ) -> KeyboardLayoutItemWidth {
        match action {
            KeyboardAction::Space => KeyboardLayoutItemWidth::Available,
            _ => KeyboardLayoutItemWidth::Input,
        }
    }
}

impl<P: InputSetProvider> LayoutCollaborators for StandardLayoutProvider<P> {
    fn top_leading_actions(
        &self,
        _actions: &KeyboardActionRows,
        context: &KeyboardContext,
    ) -> KeyboardActions {
        self.configured(context, |a| a.top_leading.as_ref())
            .unwrap_or_default()
    }

    fn top_trailing_actions(
        &self,
        _actions: &KeyboardActionRows,
        context: &KeyboardContext,
    ) -> KeyboardActions {
        self.configured(context, |a| a.top_trailing.as_ref())
            .unwrap_or_default()
    }

    fn middle_leading_actions(
        &self,
        _actions: &KeyboardActionRows,
        context: &KeyboardContext,
    ) -> KeyboardActions {
        self.configured(context, |a| a.middle_leading.as_ref())
            .unwrap_or_default()
    }

    fn middle_trailing_actions(
        &self,
        _actions: &KeyboardActionRows,
        context: &KeyboardContext,
    ) -> KeyboardActions {
        self.configured(context, |a| a.middle_trailing.as_ref())
            .unwrap_or_default()
    }

    fn lower_leading_actions(
        &self,
        _actions: &KeyboardActionRows,
        context: &KeyboardContext,
    ) -> KeyboardActions {
        if let Some(actions) = self.configured(context, |a| a.lower_leading.as_ref()) {
            return actions;
        }
        match &context.keyboard_type {
            KeyboardType::Alphabetic(_) => vec![KeyboardAction::Shift],
            KeyboardType::Numeric => vec![KeyboardAction::KeyboardType(KeyboardType::Symbolic)],
            KeyboardType::Symbolic => vec![KeyboardAction::KeyboardType(KeyboardType::Numeric)],
            KeyboardType::Emojis | KeyboardType::Custom(_) => Vec::new(),
        }
    }

    fn lower_trailing_actions(
        &self,
        _actions: &KeyboardActionRows,
        context: &KeyboardContext,
    ) -> KeyboardActions {
        self.configured(context, |a| a.lower_trailing.as_ref())
            .unwrap_or_else(|| vec![KeyboardAction::Backspace])
    }

    fn keyboard_switch_action_for_bottom_row(
        &self,
        context: &KeyboardContext,
    ) -> Option<KeyboardAction> {
        match &context.keyboard_type {
            KeyboardType::Alphabetic(_) => {
                Some(KeyboardAction::KeyboardType(KeyboardType::Numeric))
            }
            KeyboardType::Numeric | KeyboardType::Symbolic => Some(KeyboardAction::KeyboardType(
                KeyboardType::Alphabetic(KeyboardCase::Auto),
            )),
            KeyboardType::Emojis | KeyboardType::Custom(_) => None,
        }
    }

    fn keyboard_return_action(&self, context: &KeyboardContext) -> KeyboardAction {
        KeyboardAction::Primary(
            context
                .return_key_type
                .clone()
                .unwrap_or(ReturnKeyType::Return),
        )
    }

    fn bottom_system_button_width(&self, context: &KeyboardContext) -> KeyboardLayoutItemWidth {
        self.config.widths.bottom_system_button(context.orientation)
    }

    fn lower_system_button_width(&self, context: &KeyboardContext) -> KeyboardLayoutItemWidth {
        self.config.widths.lower_system_button(context.orientation)
    }
}
