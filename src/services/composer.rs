//! Action row composition.
//!
//! Takes the elementary character grid from the base strategy and adds the
//! chrome around it. Two shapes are understood:
//!
//! - grid mode: exactly 4 rows on a grid keyboard type (the 9-key number pad)
//! - standard mode: exactly 3 rows, plus a synthesized bottom row
//!
//! Any other row count is returned untouched so that keyboard types this
//! module knows nothing about still render.

use crate::models::{
    InputSetRows, KeyboardAction, KeyboardActionRows, KeyboardCase, KeyboardContext, KeyboardType,
};
use crate::services::bottom_row::build_bottom_row;
use crate::services::layout_provider::{KeyboardLayoutProvider, LayoutCollaborators};

/// Row count of a grid keyboard.
const GRID_ROW_COUNT: usize = 4;

/// Row count of a standard input set.
const STANDARD_ROW_COUNT: usize = 3;

/// Which composition algorithm applies to an action grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionMode {
    /// 4-row grid keyboard
    Grid,
    /// 3 input rows plus bottom row
    Standard,
    /// Unrecognized shape, returned as-is
    PassThrough,
}

impl CompositionMode {
    /// Picks the mode for a base grid with `row_count` rows.
    #[must_use]
    pub fn select(row_count: usize, context: &KeyboardContext) -> Self {
        if row_count == GRID_ROW_COUNT && context.is_grid_view_keyboard_type() {
            Self::Grid
        } else if row_count == STANDARD_ROW_COUNT {
            Self::Standard
        } else {
            Self::PassThrough
        }
    }
}

/// Composes the full action grid for `inputs`.
pub fn compose_actions<B>(
    base: &B,
    inputs: &InputSetRows,
    context: &KeyboardContext,
) -> KeyboardActionRows
where
    B: KeyboardLayoutProvider + LayoutCollaborators,
{
    let actions = base.actions(inputs, context);
    let mode = CompositionMode::select(actions.len(), context);
    tracing::debug!(
        keyboard_type = %context.keyboard_type,
        rows = actions.len(),
        ?mode,
        "Composing action rows"
    );

    match mode {
        CompositionMode::Grid => compose_grid(base, actions, context),
        CompositionMode::Standard => compose_standard(base, actions, context),
        CompositionMode::PassThrough => actions,
    }
}

/// Grid mode: backspace after row 0, symbolic switch before row 2, and the
/// bottom switch plus return key around row 3.
///
/// When the base strategy has no bottom switch for the context, an
/// alphabetic lowercase switch is used so the grid always has a way back
/// to letters.
fn compose_grid<B: LayoutCollaborators>(
    base: &B,
    actions: KeyboardActionRows,
    context: &KeyboardContext,
) -> KeyboardActionRows {
    let mut rows = actions.into_iter();
    let (Some(mut top), Some(middle), Some(lower), Some(bottom)) =
        (rows.next(), rows.next(), rows.next(), rows.next())
    else {
        return KeyboardActionRows::new();
    };

    top.push(KeyboardAction::Backspace);

    let mut symbolic_row = vec![KeyboardAction::KeyboardType(KeyboardType::Symbolic)];
    symbolic_row.extend(lower);

    let switch = base
        .keyboard_switch_action_for_bottom_row(context)
        .unwrap_or_else(|| {
            KeyboardAction::KeyboardType(KeyboardType::Alphabetic(KeyboardCase::Lowercased))
        });
    let mut bottom_row = vec![switch];
    bottom_row.extend(bottom);
    bottom_row.push(base.keyboard_return_action(context));

    vec![top, middle, symbolic_row, bottom_row]
}

/// Standard mode: accessories around each input row, then the bottom row.
fn compose_standard<B: LayoutCollaborators>(
    base: &B,
    actions: KeyboardActionRows,
    context: &KeyboardContext,
) -> KeyboardActionRows {
    let top = [
        base.top_leading_actions(&actions, context),
        actions[0].clone(),
        base.top_trailing_actions(&actions, context),
    ]
    .concat();
    let middle = [
        base.middle_leading_actions(&actions, context),
        actions[1].clone(),
        base.middle_trailing_actions(&actions, context),
    ]
    .concat();
    let lower = [
        base.lower_leading_actions(&actions, context),
        actions[2].clone(),
        base.lower_trailing_actions(&actions, context),
    ]
    .concat();

    vec![top, middle, lower, build_bottom_row(base, context)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::constants::WILDCARD_BUTTON;
    use crate::models::input_set::row;
    use crate::models::{KeyboardActions, KeyboardLayoutItemWidth, ReturnKeyType};
    use crate::services::layout_provider::{character_actions, StandardLayoutProvider};

    fn base() -> StandardLayoutProvider {
        StandardLayoutProvider::from_config(&Config::new())
    }

    fn chars(glyphs: &str) -> KeyboardActions {
        glyphs.chars().map(|c| KeyboardAction::character(c)).collect()
    }

    fn grid_inputs() -> InputSetRows {
        vec![row("+123"), row("-456."), row("789*"), row("/0=")]
    }

    #[test]
    fn test_mode_selection() {
        let grid = KeyboardContext::new(KeyboardType::number_grid());
        let numeric = KeyboardContext::new(KeyboardType::Numeric);

        assert_eq!(CompositionMode::select(4, &grid), CompositionMode::Grid);
        assert_eq!(CompositionMode::select(3, &grid), CompositionMode::Standard);
        assert_eq!(CompositionMode::select(5, &grid), CompositionMode::PassThrough);
        assert_eq!(CompositionMode::select(4, &numeric), CompositionMode::PassThrough);
        assert_eq!(CompositionMode::select(3, &numeric), CompositionMode::Standard);
        assert_eq!(CompositionMode::select(0, &numeric), CompositionMode::PassThrough);
    }

    #[test]
    fn test_grid_mode_composition() {
        let context = KeyboardContext::new(KeyboardType::number_grid());
        let rows = compose_actions(&base(), &grid_inputs(), &context);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], [chars("+123"), vec![KeyboardAction::Backspace]].concat());
        assert_eq!(rows[1], chars("-456."));
        assert_eq!(
            rows[2],
            [
                vec![KeyboardAction::KeyboardType(KeyboardType::Symbolic)],
                chars("789*")
            ]
            .concat()
        );
        assert_eq!(
            rows[3],
            [
                vec![KeyboardAction::KeyboardType(KeyboardType::Alphabetic(
                    KeyboardCase::Lowercased
                ))],
                chars("/0="),
                vec![KeyboardAction::Primary(ReturnKeyType::Return)],
            ]
            .concat()
        );
    }

    /// Base strategy that offers a bottom switch even for grid keyboards.
    struct SwitchingBase(StandardLayoutProvider);

    impl KeyboardLayoutProvider for SwitchingBase {
        fn input_rows(&self, context: &KeyboardContext) -> InputSetRows {
            self.0.input_rows(context)
        }

        fn actions(&self, inputs: &InputSetRows, context: &KeyboardContext) -> KeyboardActionRows {
            self.0.actions(inputs, context)
        }

        fn item_width(
            &self,
            action: &KeyboardAction,
            row: usize,
            column: usize,
            context: &KeyboardContext,
        ) -> KeyboardLayoutItemWidth {
            self.0.item_width(action, row, column, context)
        }
    }

    impl LayoutCollaborators for SwitchingBase {
        fn top_leading_actions(
            &self,
            actions: &KeyboardActionRows,
            context: &KeyboardContext,
        ) -> KeyboardActions {
            self.0.top_leading_actions(actions, context)
        }

        fn top_trailing_actions(
            &self,
            actions: &KeyboardActionRows,
            context: &KeyboardContext,
        ) -> KeyboardActions {
            self.0.top_trailing_actions(actions, context)
        }

        fn middle_leading_actions(
            &self,
            actions: &KeyboardActionRows,
            context: &KeyboardContext,
        ) -> KeyboardActions {
            self.0.middle_leading_actions(actions, context)
        }

        fn middle_trailing_actions(
            &self,
            actions: &KeyboardActionRows,
            context: &KeyboardContext,
        ) -> KeyboardActions {
            self.0.middle_trailing_actions(actions, context)
        }

        fn lower_leading_actions(
            &self,
            actions: &KeyboardActionRows,
            context: &KeyboardContext,
        ) -> KeyboardActions {
            self.0.lower_leading_actions(actions, context)
        }

        fn lower_trailing_actions(
            &self,
            actions: &KeyboardActionRows,
            context: &KeyboardContext,
        ) -> KeyboardActions {
            self.0.lower_trailing_actions(actions, context)
        }

        fn keyboard_switch_action_for_bottom_row(
            &self,
            _context: &KeyboardContext,
        ) -> Option<KeyboardAction> {
            Some(KeyboardAction::KeyboardType(KeyboardType::Alphabetic(
                KeyboardCase::Auto,
            )))
        }

        fn keyboard_return_action(&self, _context: &KeyboardContext) -> KeyboardAction {
            KeyboardAction::Primary(ReturnKeyType::Done)
        }

        fn bottom_system_button_width(&self, context: &KeyboardContext) -> KeyboardLayoutItemWidth {
            self.0.bottom_system_button_width(context)
        }

        fn lower_system_button_width(&self, context: &KeyboardContext) -> KeyboardLayoutItemWidth {
            self.0.lower_system_button_width(context)
        }
    }

    #[test]
    fn test_grid_mode_prefers_base_switch_action() {
        let context = KeyboardContext::new(KeyboardType::number_grid());
        let rows = compose_actions(&SwitchingBase(base()), &grid_inputs(), &context);

        let bottom = &rows[3];
        assert_eq!(
            bottom.first(),
            Some(&KeyboardAction::KeyboardType(KeyboardType::Alphabetic(KeyboardCase::Auto)))
        );
        assert_eq!(bottom.last(), Some(&KeyboardAction::Primary(ReturnKeyType::Done)));
    }

    #[test]
    fn test_grid_type_with_other_row_count_is_not_grid_mode() {
        let context = KeyboardContext::new(KeyboardType::number_grid());
        let inputs = vec![row("123"), row("456"), row("789")];
        let rows = compose_actions(&base(), &inputs, &context);

        // Three rows compose as a standard layout
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], chars("123"));
        assert_eq!(rows[2], [chars("789"), vec![KeyboardAction::Backspace]].concat());
        assert!(rows[3].contains(&KeyboardAction::Space));
    }

    #[test]
    fn test_standard_mode_alphabetic() {
        let context = KeyboardContext::new(KeyboardType::default());
        let inputs = vec![row("qwertyuiop"), row("asdfghjkl"), row("zxcvbnm")];
        let rows = compose_actions(&base(), &inputs, &context);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], chars("qwertyuiop"));
        assert_eq!(rows[1], chars("asdfghjkl"));
        assert_eq!(
            rows[2],
            [
                vec![KeyboardAction::Shift],
                chars("zxcvbnm"),
                vec![KeyboardAction::Backspace]
            ]
            .concat()
        );
        assert_eq!(rows[3], build_bottom_row(&base(), &context));
    }

    #[test]
    fn test_standard_mode_places_configured_accessories() {
        let mut config = Config::new();
        config.accessories.insert(
            crate::models::KeyboardLocale::English,
            crate::config::AccessoryConfig {
                top_leading: Some(vec![KeyboardAction::character("`")]),
                middle_trailing: Some(vec![KeyboardAction::character(";")]),
                ..Default::default()
            },
        );
        let base = StandardLayoutProvider::from_config(&config);
        let context = KeyboardContext::new(KeyboardType::default());
        let inputs = vec![row("ab"), row("cd"), row("ef")];
        let rows = compose_actions(&base, &inputs, &context);

        assert_eq!(rows[0], chars("`ab"));
        assert_eq!(rows[1], chars("cd;"));
    }

    #[test]
    fn test_standard_mode_numeric_bottom_row() {
        let context = KeyboardContext::new(KeyboardType::Numeric).with_input_mode_switch_key(true);
        let inputs = vec![row("1234567890"), row("-/:;()$&@\""), row(".,?!'")];
        let rows = compose_actions(&base(), &inputs, &context);

        assert_eq!(
            rows[3],
            vec![
                KeyboardAction::KeyboardType(KeyboardType::Alphabetic(KeyboardCase::Auto)),
                KeyboardAction::NextKeyboard,
                KeyboardAction::Custom(WILDCARD_BUTTON.to_string()),
                KeyboardAction::Space,
                KeyboardAction::Primary(ReturnKeyType::Return),
            ]
        );
        assert_eq!(
            rows[2].first(),
            Some(&KeyboardAction::KeyboardType(KeyboardType::Symbolic))
        );
    }

    #[test]
    fn test_other_row_counts_pass_through() {
        let context = KeyboardContext::new(KeyboardType::Numeric);

        assert!(compose_actions(&base(), &Vec::new(), &context).is_empty());

        let inputs = vec![row("12"), row("34")];
        assert_eq!(compose_actions(&base(), &inputs, &context), character_actions(&inputs));

        let inputs = vec![row("1"), row("2"), row("3"), row("4"), row("5")];
        assert_eq!(compose_actions(&base(), &inputs, &context), character_actions(&inputs));
    }

    #[test]
    fn test_four_rows_on_non_grid_type_pass_through() {
        let context = KeyboardContext::new(KeyboardType::Custom("Stroke".to_string()));
        let inputs = grid_inputs();
        assert_eq!(compose_actions(&base(), &inputs, &context), character_actions(&inputs));
    }
}
