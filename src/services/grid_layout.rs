//! Grid-aware layout strategy.
//!
//! Wraps a base strategy and takes over input rows, action composition and
//! widths. Keyboard types and row shapes it does not special-case fall
//! through to whatever the base strategy produced.

use crate::models::{
    InputSetRows, KeyboardAction, KeyboardActionRows, KeyboardActions, KeyboardContext,
    KeyboardLayoutItemWidth,
};
use crate::services::bottom_row::build_bottom_row;
use crate::services::composer::compose_actions;
use crate::services::layout_provider::{KeyboardLayoutProvider, LayoutCollaborators};
use crate::services::width::resolve_width;

/// Phone layout with support for grid keyboard types.
#[derive(Debug, Clone, Default)]
pub struct GridAwareLayoutProvider<B> {
    base: B,
}

impl<B> GridAwareLayoutProvider<B>
where
    B: KeyboardLayoutProvider + LayoutCollaborators,
{
    /// Wraps `base`.
    pub const fn new(base: B) -> Self {
        Self { base }
    }

    /// The wrapped base strategy.
    pub const fn base(&self) -> &B {
        &self.base
    }

    /// Bottom row of the standard layout for the context.
    pub fn bottom_actions(&self, context: &KeyboardContext) -> KeyboardActions {
        build_bottom_row(&self.base, context)
    }
}

impl<B> KeyboardLayoutProvider for GridAwareLayoutProvider<B>
where
    B: KeyboardLayoutProvider + LayoutCollaborators,
{
    fn input_rows(&self, context: &KeyboardContext) -> InputSetRows {
        self.base.input_rows(context)
    }

    fn actions(&self, inputs: &InputSetRows, context: &KeyboardContext) -> KeyboardActionRows {
        compose_actions(&self.base, inputs, context)
    }

    fn item_width(
        &self,
        action: &KeyboardAction,
        row: usize,
        column: usize,
        context: &KeyboardContext,
    ) -> KeyboardLayoutItemWidth {
        resolve_width(&self.base, action, row, column, context)
    }
}
