//! Keyboard Layout Composition Library
//!
//! This library turns a snapshot of keyboard state (keyboard type, locale,
//! orientation, host capabilities) into a grid of keyboard actions with a
//! width class for every cell, including the 4-row 9-key number grid.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
