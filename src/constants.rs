//! Application-wide constants.
//!
//! This module defines the binary name and the well-known names shared
//! between the host and the layout engine.

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "hamster-layout";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "HamsterLayout";

/// Name of the custom keyboard type for the 9-key number grid.
pub const NUMBER_GRID: &str = "NumberGrid";

/// Custom keyboard types laid out as a 4-row grid.
pub const GRID_KEYBOARD_TYPES: &[&str] = &[NUMBER_GRID];

/// Name of the flexible accessory button placed before the space bar.
pub const WILDCARD_BUTTON: &str = "Wildcard";

/// Width of character keys on the last numeric/symbolic input row.
pub const LAST_SYMBOLIC_INPUT_WIDTH: f64 = 0.14;

/// Width of the primary key in portrait.
pub const PRIMARY_WIDTH_PORTRAIT: f64 = 0.25;

/// Width of the primary key in landscape.
pub const PRIMARY_WIDTH_LANDSCAPE: f64 = 0.195;

/// Index of the "wide keys" row on numeric and symbolic keyboards.
pub const WIDE_KEYS_ROW: usize = 2;
