//! Data models for keyboard contexts, actions, input sets and layouts.
//!
//! This module contains all the core data structures used throughout the crate.
//! Models are plain values, independent of composition logic and the CLI.

pub mod action;
pub mod context;
pub mod input_set;
pub mod keyboard_layout;
pub mod keyboard_type;
pub mod width;

// Re-export all model types
pub use action::{KeyboardAction, KeyboardActionRows, KeyboardActions, ReturnKeyType};
pub use context::{KeyboardContext, KeyboardLocale, Orientation};
pub use input_set::{GridInputSet, InputSet, InputSetRow, InputSetRows};
pub use keyboard_layout::{KeyboardLayout, KeyboardLayoutItem};
pub use keyboard_type::{KeyboardCase, KeyboardType};
pub use width::KeyboardLayoutItemWidth;
