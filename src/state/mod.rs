//! Application state management module.
//!
//! This module contains the page controllers and the `State` that owns them:
//! - Theme, navigation and scroll tracking
//! - Typing animation, statistic counters and the skills filter
//! - Contact form validation and submission, notifications
//! - Presentational effects and page geometry
//! - State error handling

mod effects;
mod error;
mod form;
mod navigation;
mod notification;
mod page;
mod schedule;
mod skills;
mod stats;
mod theme;
mod typing;

pub use effects::{
    page_title, parallax_offset, visible_ratio, CardTilts, LoadingOverlay, RevealTracker, Tilt,
    LOADING_DELAY,
};
pub use error::StateError;
pub use form::{
    is_valid_email, validate_field, validate_form, ContactForm, ContactFormDraft, FormField,
    SubmitOutcome, SUCCESS_MESSAGE,
};
pub use navigation::{
    active_section, Focus, MenuState, Navigation, SectionBounds, ACTIVATION_MARGIN, ANCHOR_OFFSET,
    BACK_TO_TOP_THRESHOLD, SCROLLED_THRESHOLD,
};
pub use notification::{Notification, NotificationCenter, NotificationKind, NotificationPhase};
pub use page::{PageLayout, RowSpan, FORM_FIELD_ROWS, HERO_ROWS, PROJECT_CARD_ROWS, ROW_UNITS};
pub use schedule::Schedule;
pub use skills::SkillsFilter;
pub use stats::{Counter, StatsCounter};
pub use theme::{ThemeController, ThemePreference};
pub use typing::{TypingAnimation, TypingMode};

// State struct and methods are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
