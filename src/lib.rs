//! VoxLearn - accessible e-learning
//!
//! A small course backend (REST API over an in-memory store) plus the
//! accessibility layer that drives a learning front end by voice, keyboard
//! and read-aloud.
//!
//! ## Input Methods
//!
//! 1. **Voice**: continuous speech recognition matched against a command
//!    table ("go to dashboard", "start reading", "click submit answer").
//!
//! 2. **Keyboard**: Alt+key shortcuts for navigation and reading, announced
//!    through a live region.

pub mod access;
pub mod api;
pub mod config;
pub mod domain;
pub mod store;

pub use config::Config;
