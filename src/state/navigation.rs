//! Navigation state: mobile menu, scroll position, active section and
//! smooth scrolling to in-page anchors.
//!
//! Positions are layout units measured from the top of the page.

use super::StateError;
use std::time::{Duration, Instant};

/// Distance above a section's top at which it already counts as active.
pub const ACTIVATION_MARGIN: i64 = 100;
/// Gap left between the viewport top and an anchor scrolled into view.
pub const ANCHOR_OFFSET: i64 = 80;
/// Offset past which the navbar switches to its scrolled look.
pub const SCROLLED_THRESHOLD: i64 = 100;
/// Offset past which the back-to-top control is shown.
pub const BACK_TO_TOP_THRESHOLD: i64 = 500;

const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(400);

/// Specifying where keyboard input goes.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Page,
    Form,
}

/// Specifying the mobile menu state.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuState {
    Closed,
    Open,
}

/// Vertical extent of a page section.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SectionBounds {
    pub id: String,
    pub top: i64,
    pub height: i64,
}

/// Return the section considered current at `offset`. A section matches
/// when the offset lies in `[top - ACTIVATION_MARGIN, top + height)`; the
/// last match in document order wins.
///
pub fn active_section(sections: &[SectionBounds], offset: i64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| offset >= s.top - ACTIVATION_MARGIN && offset < s.top + s.height)
        .last()
        .map(|s| s.id.as_str())
}

/// Eased scroll from one offset to another.
///
#[derive(Debug, PartialEq, Clone, Copy)]
struct ScrollAnimation {
    from: i64,
    to: i64,
    started: Instant,
}

impl ScrollAnimation {
    fn offset_at(&self, now: Instant) -> (i64, bool) {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= SMOOTH_SCROLL_DURATION {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f64() / SMOOTH_SCROLL_DURATION.as_secs_f64();
        // ease-in-out cubic
        let eased = if t < 0.5 {
            4.0 * t * t * t
        } else {
            1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
        };
        let offset = self.from as f64 + (self.to - self.from) as f64 * eased;
        (offset.round() as i64, false)
    }
}

#[derive(Debug, Clone)]
pub struct Navigation {
    sections: Vec<SectionBounds>,
    menu: MenuState,
    menu_index: usize,
    offset: i64,
    viewport: i64,
    active: Option<String>,
    animation: Option<ScrollAnimation>,
}

impl Navigation {
    pub fn new(sections: Vec<SectionBounds>) -> Self {
        let mut navigation = Navigation {
            sections,
            menu: MenuState::Closed,
            menu_index: 0,
            offset: 0,
            viewport: 0,
            active: None,
            animation: None,
        };
        navigation.update_active_section();
        navigation
    }

    pub fn sections(&self) -> &[SectionBounds] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&SectionBounds> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Flip the mobile menu. While it is open the page cannot be scrolled.
    ///
    pub fn toggle_menu(&mut self) -> &mut Self {
        self.menu = match self.menu {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self
    }

    pub fn close_menu(&mut self) -> &mut Self {
        self.menu = MenuState::Closed;
        self
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.is_menu_open()
    }

    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    pub fn next_menu_link(&mut self) -> &mut Self {
        if !self.sections.is_empty() {
            self.menu_index = (self.menu_index + 1) % self.sections.len();
        }
        self
    }

    pub fn previous_menu_link(&mut self) -> &mut Self {
        if !self.sections.is_empty() {
            let len = self.sections.len();
            self.menu_index = (self.menu_index + len - 1) % len;
        }
        self
    }

    /// Activate the highlighted menu link.
    ///
    pub fn activate_menu_link(&mut self, now: Instant) -> Result<(), StateError> {
        let id = self
            .sections
            .get(self.menu_index)
            .map(|s| s.id.clone())
            .ok_or_else(|| StateError::SectionNotFound {
                id: format!("#{}", self.menu_index),
            })?;
        self.activate_link(&id, now)
    }

    /// Activate a navigation link: close the menu and scroll to the anchor.
    ///
    pub fn activate_link(&mut self, id: &str, now: Instant) -> Result<(), StateError> {
        self.close_menu();
        self.scroll_to_anchor(id, now)
    }

    /// Smoothly scroll so the anchor's top sits `ANCHOR_OFFSET` below the
    /// viewport top.
    ///
    pub fn scroll_to_anchor(&mut self, id: &str, now: Instant) -> Result<(), StateError> {
        let top = self
            .section(id)
            .map(|s| s.top)
            .ok_or_else(|| StateError::SectionNotFound { id: id.to_string() })?;
        self.smooth_scroll_to(top - ANCHOR_OFFSET, now);
        Ok(())
    }

    /// Smoothly scroll so the section's top is at the viewport top.
    ///
    pub fn scroll_into_view(&mut self, id: &str, now: Instant) -> Result<(), StateError> {
        let top = self
            .section(id)
            .map(|s| s.top)
            .ok_or_else(|| StateError::SectionNotFound { id: id.to_string() })?;
        self.smooth_scroll_to(top, now);
        Ok(())
    }

    pub fn scroll_to_top(&mut self, now: Instant) -> &mut Self {
        self.smooth_scroll_to(0, now);
        self
    }

    pub fn smooth_scroll_to(&mut self, target: i64, now: Instant) -> &mut Self {
        let to = self.clamp(target);
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to,
            started: now,
        });
        self
    }

    /// Scroll by `delta` units unless scrolling is locked. Cancels any
    /// running smooth scroll.
    ///
    pub fn scroll_by(&mut self, delta: i64) -> &mut Self {
        if self.is_scroll_locked() {
            return self;
        }
        self.animation = None;
        let target = self.offset + delta;
        self.set_offset(target)
    }

    /// Handle a scroll event: record the offset and recompute the active
    /// section. Falling outside every section keeps the previous one.
    ///
    pub fn set_offset(&mut self, offset: i64) -> &mut Self {
        self.offset = self.clamp(offset);
        self.update_active_section();
        self
    }

    /// Progress a running smooth scroll. Returns true if the offset moved.
    ///
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };
        let (offset, done) = animation.offset_at(now);
        if done {
            self.animation = None;
        }
        let moved = offset != self.offset;
        self.set_offset(offset);
        moved
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn set_viewport(&mut self, viewport: i64) -> &mut Self {
        self.viewport = viewport.max(0);
        let offset = self.offset;
        self.set_offset(offset)
    }

    pub fn viewport(&self) -> i64 {
        self.viewport
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn max_offset(&self) -> i64 {
        (self.document_height() - self.viewport).max(0)
    }

    pub fn document_height(&self) -> i64 {
        self.sections
            .iter()
            .map(|s| s.top + s.height)
            .max()
            .unwrap_or(0)
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset > SCROLLED_THRESHOLD
    }

    pub fn is_back_to_top_visible(&self) -> bool {
        self.offset > BACK_TO_TOP_THRESHOLD
    }

    fn update_active_section(&mut self) {
        if let Some(id) = active_section(&self.sections, self.offset) {
            self.active = Some(id.to_string());
        }
    }

    fn clamp(&self, offset: i64) -> i64 {
        offset.clamp(0, self.max_offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(rows: &[(&str, i64, i64)]) -> Vec<SectionBounds> {
        rows.iter()
            .map(|(id, top, height)| SectionBounds {
                id: id.to_string(),
                top: *top,
                height: *height,
            })
            .collect()
    }

    fn navigation() -> Navigation {
        let mut navigation = Navigation::new(bounds(&[
            ("home", 0, 600),
            ("about", 600, 400),
            ("contact", 1000, 800),
        ]));
        navigation.set_viewport(400);
        navigation
    }

    #[test]
    fn active_section_prefers_last_match() {
        let sections = bounds(&[("a", 0, 300), ("b", 300, 400)]);
        assert_eq!(active_section(&sections, 650), Some("b"));
        assert_eq!(active_section(&sections, 100), Some("a"));
        // Inside the margin of b as well as inside a
        assert_eq!(active_section(&sections, 250), Some("b"));
        assert_eq!(active_section(&sections, 700), None);
    }

    #[test]
    fn active_section_is_pure() {
        let sections = bounds(&[("a", 0, 300), ("b", 300, 400)]);
        for offset in -200..900 {
            assert_eq!(
                active_section(&sections, offset),
                active_section(&sections, offset)
            );
        }
    }

    #[test]
    fn active_section_is_sticky() {
        let mut navigation = Navigation::new(bounds(&[("a", 300, 200)]));
        navigation.set_viewport(0);
        assert_eq!(navigation.active_section(), None);
        navigation.set_offset(250);
        assert_eq!(navigation.active_section(), Some("a"));
        // Clamped to the document end, outside every section
        navigation.set_offset(5000);
        assert_eq!(navigation.offset(), 500);
        assert_eq!(navigation.active_section(), Some("a"));
        navigation.set_offset(0);
        assert_eq!(navigation.active_section(), Some("a"));
    }

    #[test]
    fn menu_toggle_and_close() {
        let mut navigation = navigation();
        assert_eq!(navigation.menu_state(), MenuState::Closed);
        navigation.toggle_menu();
        assert!(navigation.is_menu_open());
        assert!(navigation.is_scroll_locked());
        navigation.toggle_menu();
        assert_eq!(navigation.menu_state(), MenuState::Closed);
        navigation.toggle_menu().close_menu();
        assert!(!navigation.is_scroll_locked());
    }

    #[test]
    fn scroll_is_locked_while_menu_open() {
        let mut navigation = navigation();
        navigation.toggle_menu();
        navigation.scroll_by(200);
        assert_eq!(navigation.offset(), 0);
        navigation.close_menu().scroll_by(200);
        assert_eq!(navigation.offset(), 200);
    }

    #[test]
    fn scroll_is_clamped_to_document() {
        let mut navigation = navigation();
        navigation.scroll_by(-50);
        assert_eq!(navigation.offset(), 0);
        navigation.scroll_by(10_000);
        assert_eq!(navigation.offset(), 1400);
        assert_eq!(navigation.max_offset(), 1400);
    }

    #[test]
    fn smooth_scroll_to_anchor() {
        let start = Instant::now();
        let mut navigation = navigation();
        navigation.scroll_to_anchor("contact", start).unwrap();
        assert!(navigation.is_animating());

        navigation.advance(start + Duration::from_millis(200));
        let midway = navigation.offset();
        assert!(midway > 0 && midway < 920);

        navigation.advance(start + SMOOTH_SCROLL_DURATION);
        assert_eq!(navigation.offset(), 1000 - ANCHOR_OFFSET);
        assert!(!navigation.is_animating());
        assert_eq!(navigation.active_section(), Some("contact"));
    }

    #[test]
    fn scroll_to_missing_anchor() {
        let mut navigation = navigation();
        let result = navigation.scroll_to_anchor("blog", Instant::now());
        assert!(matches!(result, Err(StateError::SectionNotFound { .. })));
        assert!(!navigation.is_animating());
    }

    #[test]
    fn activating_link_closes_menu() {
        let start = Instant::now();
        let mut navigation = navigation();
        navigation.toggle_menu().next_menu_link();
        navigation.activate_menu_link(start).unwrap();
        assert!(!navigation.is_menu_open());
        navigation.advance(start + Duration::from_secs(1));
        assert_eq!(navigation.offset(), 600 - ANCHOR_OFFSET);
    }

    #[test]
    fn manual_scroll_cancels_animation() {
        let start = Instant::now();
        let mut navigation = navigation();
        navigation.scroll_to_anchor("contact", start).unwrap();
        navigation.scroll_by(20);
        assert!(!navigation.is_animating());
        assert!(!navigation.advance(start + Duration::from_secs(1)));
        assert_eq!(navigation.offset(), 20);
    }

    #[test]
    fn scroll_chrome_thresholds() {
        let mut navigation = navigation();
        navigation.set_offset(100);
        assert!(!navigation.is_scrolled());
        navigation.set_offset(101);
        assert!(navigation.is_scrolled());
        assert!(!navigation.is_back_to_top_visible());
        navigation.set_offset(501);
        assert!(navigation.is_back_to_top_visible());

        let start = Instant::now();
        navigation.scroll_to_top(start);
        navigation.advance(start + SMOOTH_SCROLL_DURATION);
        assert_eq!(navigation.offset(), 0);
    }
}
