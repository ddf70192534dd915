//! A personal portfolio page for the terminal.
//!
//! The page is driven by small controllers (theme, navigation, typing
//! animation, statistic counters, skills filter, contact form and
//! notifications) owned by a single `State` and advanced from the render
//! loop.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod logger;
pub mod mail;
pub mod state;
pub mod ui;
