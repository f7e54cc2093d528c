// src/core.rs
pub mod channel;
pub mod debounce;
pub mod engine;
pub mod store;
