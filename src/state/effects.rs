//! Presentational effects: reveal-on-scroll, parallax, card tilt, the
//! loading overlay and the page title.

use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Fraction of a section that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// The viewport bottom is pulled up by this many units for reveals.
pub const REVEAL_BOTTOM_MARGIN: i64 = 50;
pub const PARALLAX_SPEED: f64 = 0.5;
/// How long the loading overlay stays after the page is ready.
pub const LOADING_DELAY: Duration = Duration::from_millis(1000);

/// Return the fraction of `[top, top + height)` inside the viewport
/// `[offset, offset + viewport - bottom_margin)`.
///
pub fn visible_ratio(top: i64, height: i64, offset: i64, viewport: i64, bottom_margin: i64) -> f64 {
    if height <= 0 {
        return 0.0;
    }
    let view_top = offset;
    let view_bottom = offset + (viewport - bottom_margin).max(0);
    let overlap = (top + height).min(view_bottom) - top.max(view_top);
    overlap.max(0) as f64 / height as f64
}

/// Vertical parallax shift of decorative shapes for a scroll offset.
///
pub fn parallax_offset(scrolled: i64) -> i64 {
    -(scrolled as f64 * PARALLAX_SPEED).round() as i64
}

/// Remembers which elements have been revealed; each one only once.
///
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    /// Report an element's extent for the current scroll position. Returns
    /// true if this call revealed it.
    ///
    pub fn observe(&mut self, id: &str, top: i64, height: i64, offset: i64, viewport: i64) -> bool {
        if self.revealed.contains(id) {
            return false;
        }
        let ratio = visible_ratio(top, height, offset, viewport, REVEAL_BOTTOM_MARGIN);
        if ratio > 0.0 && ratio >= REVEAL_THRESHOLD {
            self.revealed.insert(id.to_string());
            return true;
        }
        false
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}

/// 3D tilt of a project card following the pointer.
///
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub hovered: bool,
}

impl Tilt {
    /// Tilt for a pointer at `(x, y)` relative to a `width` × `height` card.
    ///
    pub fn for_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Tilt {
            rotate_x: (y - center_y) / 10.0,
            rotate_y: (center_x - x) / 10.0,
            hovered: true,
        }
    }

    /// Resting state after the pointer leaves: flat but still lifted.
    ///
    pub fn resting() -> Self {
        Tilt::default()
    }

    /// CSS-like transform description used for display.
    ///
    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-10px)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Pointer tracking over all project cards.
///
#[derive(Debug, Clone, Default)]
pub struct CardTilts {
    tilts: Vec<Tilt>,
}

impl CardTilts {
    pub fn new(cards: usize) -> Self {
        CardTilts {
            tilts: vec![Tilt::resting(); cards],
        }
    }

    /// Pointer moved over card `index`; every other card rests.
    ///
    pub fn pointer_move(&mut self, index: usize, x: f64, y: f64, width: f64, height: f64) {
        for (i, tilt) in self.tilts.iter_mut().enumerate() {
            *tilt = if i == index {
                Tilt::for_pointer(x, y, width, height)
            } else {
                Tilt::resting()
            };
        }
    }

    /// Pointer left every card.
    ///
    pub fn pointer_leave(&mut self) {
        self.tilts.iter_mut().for_each(|t| *t = Tilt::resting());
    }

    pub fn get(&self, index: usize) -> Tilt {
        self.tilts.get(index).copied().unwrap_or_default()
    }
}

/// Startup overlay hidden a fixed delay after the page is ready.
///
#[derive(Debug, Clone, Copy)]
pub struct LoadingOverlay {
    hide_at: Instant,
    visible: bool,
}

impl LoadingOverlay {
    pub fn new(ready_at: Instant) -> Self {
        LoadingOverlay {
            hide_at: ready_at + LOADING_DELAY,
            visible: true,
        }
    }

    pub fn hidden() -> Self {
        LoadingOverlay {
            hide_at: Instant::now(),
            visible: false,
        }
    }

    pub fn advance(&mut self, now: Instant) -> bool {
        if self.visible && now >= self.hide_at {
            self.visible = false;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Title for the page depending on whether it is in the background.
///
pub fn page_title(name: &str, title: &str, hidden: bool) -> String {
    if hidden {
        format!("👋 Come back soon! - {}", name)
    } else {
        format!("{} - {}", name, title)
    }
}
