//! Fully composed keyboard layout: actions paired with their widths.

use serde::{Deserialize, Serialize};

use crate::models::{KeyboardAction, KeyboardActionRows, KeyboardLayoutItemWidth};

/// One cell of a composed layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardLayoutItem {
    /// Action triggered by the cell
    pub action: KeyboardAction,
    /// Width class of the cell
    pub width: KeyboardLayoutItemWidth,
    /// Row index (0-based, top row first)
    pub row: usize,
    /// Column index within the row (0-based)
    pub column: usize,
}

/// A composed layout, row-major.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyboardLayout {
    /// Rows of cells, top to bottom
    pub rows: Vec<Vec<KeyboardLayoutItem>>,
}

impl KeyboardLayout {
    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Gets a cell by position.
    #[must_use]
    pub fn item(&self, row: usize, column: usize) -> Option<&KeyboardLayoutItem> {
        self.rows.get(row).and_then(|items| items.get(column))
    }

    /// The action grid without widths.
    #[must_use]
    pub fn actions(&self) -> KeyboardActionRows {
        self.rows
            .iter()
            .map(|items| items.iter().map(|item| item.action.clone()).collect())
            .collect()
    }
}
