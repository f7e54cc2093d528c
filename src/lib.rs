// src/lib.rs
//! Live text statistics: character, word and sentence counts, reading time,
//! an optional character limit and a letter frequency breakdown.
//!
//! [`CounterStore`] is the single source of truth. Text and
//! option changes go in through [`editor::Editor`]; display panels in
//! [`display`] subscribe to the store's channels and only render.

pub mod cli;
pub mod config;
pub mod core;
pub mod display;
pub mod editor;
pub mod error;
pub mod models;
pub mod theme;
pub mod utils;

pub use cli::{Args, OutputFormat, ThemeChoice, run};
pub use crate::core::store::CounterStore;
pub use error::CounterError;
