//! Service layer for layout composition.
//!
//! This module contains the composition logic: input row resolution, action
//! composition, bottom row synthesis, width resolution, and the pipeline
//! service that ties them together. Every function here is a pure function
//! of its inputs.

pub mod bottom_row;
pub mod composer;
pub mod grid_layout;
pub mod input_rows;
pub mod layout_provider;
pub mod layouts;
pub mod width;

// Re-export commonly used types and functions
pub use bottom_row::build_bottom_row;
pub use composer::{compose_actions, CompositionMode};
pub use grid_layout::GridAwareLayoutProvider;
pub use input_rows::{resolve_input_rows, InputSetProvider, StandardInputSetProvider};
pub use layout_provider::{KeyboardLayoutProvider, LayoutCollaborators, StandardLayoutProvider};
pub use layouts::LayoutService;
pub use width::{is_last_numeric_input_row, resolve_width};
