//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Page layout, with each section drawn to the rows the page geometry reserves
//! - Light and dark palettes
//! - Widget components (spinner, styling)
//! - Overlays (mobile menu, notification, loading screen, log panel)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub const SPINNER_FRAME_COUNT: usize = widgets::spinner::FRAMES.len();

pub use render::render;
pub use theme::{ColorSpec, Theme};
