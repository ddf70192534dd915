//! Event handling module.
//!
//! Terminal events (keys, mouse, focus changes, resizes and ticks) are read
//! on a separate thread and applied to the page state on the main thread.

pub mod terminal;
