//! Layout pipeline service.
//!
//! This module runs the full composition for a context snapshot: resolve
//! input rows, compose the action grid, and assign a width to every cell.
//! Each call is independent; nothing is cached between context changes.

use crate::config::Config;
use crate::models::{InputSetRows, KeyboardContext, KeyboardLayout, KeyboardLayoutItem};
use crate::services::grid_layout::GridAwareLayoutProvider;
use crate::services::layout_provider::{KeyboardLayoutProvider, StandardLayoutProvider};

/// Service that turns context snapshots into composed layouts.
///
/// Generic over the layout strategy so hosts can plug in their own; the
/// default is the grid-aware phone layout over the standard base.
#[derive(Debug, Clone)]
pub struct LayoutService<L = GridAwareLayoutProvider<StandardLayoutProvider>> {
    provider: L,
}

impl LayoutService {
    /// Creates the default service using widths and accessories from `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamster_layout::config::Config;
    /// use hamster_layout::models::{KeyboardContext, KeyboardType};
    /// use hamster_layout::services::LayoutService;
    ///
    /// let service = LayoutService::from_config(&Config::new());
    /// let layout = service.layout(&KeyboardContext::new(KeyboardType::Numeric));
    /// assert_eq!(layout.row_count(), 4);
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(GridAwareLayoutProvider::new(
            StandardLayoutProvider::from_config(config),
        ))
    }
}

impl Default for LayoutService {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl<L: KeyboardLayoutProvider> LayoutService<L> {
    /// Creates a service around a layout strategy.
    pub const fn new(provider: L) -> Self {
        Self { provider }
    }

    /// Raw input rows for the context.
    pub fn input_rows(&self, context: &KeyboardContext) -> InputSetRows {
        self.provider.input_rows(context)
    }

    /// Composes the layout for the context.
    pub fn layout(&self, context: &KeyboardContext) -> KeyboardLayout {
        let inputs = self.provider.input_rows(context);
        let actions = self.provider.actions(&inputs, context);

        let rows: Vec<Vec<KeyboardLayoutItem>> = actions
            .into_iter()
            .enumerate()
            .map(|(row, actions)| {
                actions
                    .into_iter()
                    .enumerate()
                    .map(|(column, action)| {
                        let width = self.provider.item_width(&action, row, column, context);
                        KeyboardLayoutItem {
                            action,
                            width,
                            row,
                            column,
                        }
                    })
                    .collect()
            })
            .collect();

        tracing::debug!(
            keyboard_type = %context.keyboard_type,
            locale = %context.locale,
            orientation = %context.orientation,
            input_rows = inputs.len(),
            rows = rows.len(),
            "Composed keyboard layout"
        );

        KeyboardLayout { rows }
    }
}
