//! Raw character rows, before any chrome is added.

use serde::{Deserialize, Serialize};

/// Character glyphs of one input row.
pub type InputSetRow = Vec<String>;

/// Character rows of a keyboard, top to bottom.
pub type InputSetRows = Vec<InputSetRow>;

/// Builds a row with one glyph per `char` of `chars`.
#[must_use]
pub fn row(chars: &str) -> InputSetRow {
    chars.chars().map(String::from).collect()
}

/// Character rows for one keyboard type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputSet {
    /// Rows of glyphs, top to bottom
    pub rows: InputSetRows,
}

impl InputSet {
    /// Creates an input set from rows of glyphs.
    #[must_use]
    pub const fn new(rows: InputSetRows) -> Self {
        Self { rows }
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Fixed input sets for grid keyboards.
#[derive(Debug, Clone, Copy)]
pub struct GridInputSet;

impl GridInputSet {
    /// The 9-key number pad. Digits line up in columns 1 to 3 once the
    /// grid chrome is added.
    #[must_use]
    pub fn number_grid() -> InputSet {
        InputSet::new(vec![row("+123"), row("-456."), row("789*"), row("/0=")])
    }
}
