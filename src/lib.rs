//! namepicker - interactive random name picker TUI
//!
//! Library crate exposing the small components used by the binary.
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod input;
pub mod lang;
pub mod names;

pub mod ui;
