// src/dialogs/mod.rs
//!
//! Dialogs Module
//!
//! Native selection dialogs, kept separate from the filesystem commands so
//! the two are independently testable.

pub mod commands;

pub use commands::*;
