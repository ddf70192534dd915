use crate::config::{Config, PreferenceStore};
use crate::content::Content;
use crate::logger::LogBuffer;
use crate::mail::MailLauncher;
use crate::ui::SPINNER_FRAME_COUNT;
use log::*;
use std::time::{Duration, Instant};

use super::effects::{self, CardTilts, LoadingOverlay, RevealTracker, Tilt};
use super::form::{ContactForm, SubmitOutcome};
use super::navigation::{Focus, Navigation};
use super::notification::{Notification, NotificationCenter, NotificationKind};
use super::page::{PageLayout, ROW_UNITS};
use super::stats::{Counter, StatsCounter};
use super::theme::{ThemeController, ThemePreference};
use super::typing::TypingAnimation;
use super::{SkillsFilter, StateError};

/// Houses data representative of application state.
///
/// This is the composition root of the page: every controller is created
/// here once and lives as long as the page does.
pub struct State {
    content: Content,
    layout: PageLayout,
    theme: ThemeController,
    navigation: Navigation,
    typing: Option<TypingAnimation>,
    stats: StatsCounter,
    skills: SkillsFilter,
    form: ContactForm,
    notifications: NotificationCenter,
    reveal: RevealTracker,
    tilts: CardTilts,
    loading: LoadingOverlay,
    launcher: Box<dyn MailLauncher + Send>,
    focus: Focus,
    page_width: u16,
    page_hidden: bool,
    spinner_index: usize,
    debug_mode: bool,
    log_entries: LogBuffer,
}

impl State {
    pub fn new(
        content: Content,
        config: &Config,
        store: Box<dyn PreferenceStore + Send>,
        launcher: Box<dyn MailLauncher + Send>,
        log_entries: LogBuffer,
        now: Instant,
    ) -> Self {
        let layout = PageLayout::new(&content);
        let navigation = Navigation::new(layout.section_bounds());

        let typing = match TypingAnimation::new(
            content.phrases.clone(),
            Duration::from_millis(config.typing.speed_ms),
            Duration::from_millis(config.typing.delete_speed_ms),
            Duration::from_millis(config.typing.pause_ms),
        ) {
            Ok(mut typing) => {
                typing.start(now);
                Some(typing)
            }
            Err(e) => {
                warn!("Typing animation disabled: {}", e);
                None
            }
        };

        let counters = content
            .stats
            .iter()
            .map(|stat| {
                Counter::new(
                    &stat.label,
                    stat.target,
                    Duration::from_millis(config.counter.duration_ms),
                    Duration::from_millis(config.counter.interval_ms),
                )
            })
            .collect();

        let skills = SkillsFilter::new(
            content.skill_categories.clone(),
            content.skill_groups.clone(),
        );
        let tilts = CardTilts::new(content.projects.len());

        State {
            layout,
            navigation,
            typing,
            stats: StatsCounter::new(counters),
            skills,
            form: ContactForm::new(&config.contact_email),
            notifications: NotificationCenter::new(Duration::from_millis(config.notification_ms)),
            reveal: RevealTracker::default(),
            tilts,
            loading: LoadingOverlay::new(now),
            theme: ThemeController::new(store),
            launcher,
            focus: Focus::Page,
            page_width: 0,
            page_hidden: false,
            spinner_index: 0,
            debug_mode: false,
            log_entries,
            content,
        }
    }

    /// Run every timer that has come due. Returns true if anything that is
    /// drawn may have changed.
    ///
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut changed = self.loading.advance(now);
        if let Some(typing) = self.typing.as_mut() {
            changed |= typing.advance(now);
        }
        changed |= self.stats.advance(now);
        changed |= self.notifications.advance(now);
        if self.navigation.advance(now) {
            self.observe(now);
            changed = true;
        }
        changed
    }

    /// Re-evaluate everything that depends on what is visible.
    ///
    fn observe(&mut self, now: Instant) {
        let offset = self.navigation.offset();
        let viewport = self.navigation.viewport();
        if let Some(stats) = self.layout.stats {
            let ratio = effects::visible_ratio(
                stats.top_units(),
                stats.height_units(),
                offset,
                viewport,
                0,
            );
            self.stats.observe(ratio, now);
        }
        for (id, span) in &self.layout.sections {
            if self.reveal.observe(id, span.top_units(), span.height_units(), offset, viewport) {
                debug!("Revealed section '{}'", id);
            }
        }
    }

    /// Stop all running timers.
    ///
    pub fn stop_timers(&mut self) -> &mut Self {
        if let Some(typing) = self.typing.as_mut() {
            typing.stop();
        }
        self.stats.stop();
        self
    }

    pub fn get_content(&self) -> &Content {
        &self.content
    }

    pub fn get_layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn get_navigation(&self) -> &Navigation {
        &self.navigation
    }

    /// Set the size of the page viewport in terminal cells.
    ///
    pub fn set_viewport(&mut self, rows: u16, width: u16, now: Instant) -> &mut Self {
        self.page_width = width;
        self.navigation.set_viewport(rows as i64 * ROW_UNITS);
        self.observe(now);
        self
    }

    /// First document row shown in the viewport.
    ///
    pub fn get_offset_rows(&self) -> usize {
        (self.navigation.offset() / ROW_UNITS).max(0) as usize
    }

    pub fn scroll_rows(&mut self, rows: i64, now: Instant) -> &mut Self {
        if self.loading.is_visible() {
            return self;
        }
        self.navigation.scroll_by(rows * ROW_UNITS);
        self.observe(now);
        self
    }

    pub fn scroll_page(&mut self, down: bool, now: Instant) -> &mut Self {
        let page = (self.navigation.viewport() / ROW_UNITS - 2).max(1);
        self.scroll_rows(if down { page } else { -page }, now)
    }

    pub fn scroll_to_bottom(&mut self, now: Instant) -> &mut Self {
        let max = self.navigation.max_offset();
        self.navigation.smooth_scroll_to(max, now);
        self
    }

    pub fn back_to_top(&mut self, now: Instant) -> &mut Self {
        self.navigation.scroll_to_top(now);
        self
    }

    /// Follow the hero's scroll indicator to the about section.
    ///
    pub fn follow_scroll_indicator(&mut self, now: Instant) -> &mut Self {
        if let Err(e) = self.navigation.scroll_into_view("about", now) {
            debug!("Scroll indicator inactive: {}", e);
        }
        self
    }

    /// Activate the navigation link at `index` (document order).
    ///
    pub fn jump_to_section(&mut self, index: usize, now: Instant) -> &mut Self {
        let id = self.layout.sections.get(index).map(|(id, _)| id.clone());
        let result = match id {
            Some(id) => self.navigation.activate_link(&id, now),
            None => Err(StateError::SectionNotFound {
                id: format!("#{}", index + 1),
            }),
        };
        if let Err(e) = result {
            debug!("{}", e);
        }
        self
    }

    pub fn toggle_menu(&mut self) -> &mut Self {
        self.navigation.toggle_menu();
        self
    }

    pub fn close_menu(&mut self) -> &mut Self {
        self.navigation.close_menu();
        self
    }

    pub fn is_menu_open(&self) -> bool {
        self.navigation.is_menu_open()
    }

    pub fn next_menu_link(&mut self) -> &mut Self {
        self.navigation.next_menu_link();
        self
    }

    pub fn previous_menu_link(&mut self) -> &mut Self {
        self.navigation.previous_menu_link();
        self
    }

    pub fn activate_menu_link(&mut self, now: Instant) -> &mut Self {
        if let Err(e) = self.navigation.activate_menu_link(now) {
            warn!("{}", e);
        }
        self
    }

    pub fn get_theme(&self) -> ThemePreference {
        self.theme.get_theme()
    }

    pub fn get_theme_icon(&self) -> &'static str {
        self.theme.icon()
    }

    pub fn toggle_theme(&mut self) -> &mut Self {
        match self.theme.toggle() {
            Ok(theme) => info!("Switched to {} theme", theme),
            Err(e) => warn!("{}", e),
        }
        self
    }

    pub fn get_typing_text(&self) -> &str {
        self.typing.as_ref().map(|t| t.text()).unwrap_or("")
    }

    pub fn get_counters(&self) -> &[Counter] {
        self.stats.counters()
    }

    pub fn get_skills(&self) -> &SkillsFilter {
        &self.skills
    }

    pub fn next_skill_category(&mut self) -> &mut Self {
        self.skills.select_next();
        self
    }

    pub fn previous_skill_category(&mut self) -> &mut Self {
        self.skills.select_previous();
        self
    }

    pub fn get_form(&self) -> &ContactForm {
        &self.form
    }

    pub fn current_focus(&self) -> Focus {
        self.focus
    }

    /// Move keyboard focus into the contact form and bring it into view.
    ///
    pub fn focus_form(&mut self, now: Instant) -> &mut Self {
        self.focus = Focus::Form;
        if self.form.focused().is_none() {
            self.form.focus_next();
        }
        if let Err(e) = self.navigation.scroll_to_anchor("contact", now) {
            debug!("{}", e);
        }
        self
    }

    pub fn leave_form(&mut self) -> &mut Self {
        self.form.leave();
        self.focus = Focus::Page;
        self
    }

    pub fn form_next_field(&mut self) -> &mut Self {
        self.form.focus_next();
        self
    }

    pub fn form_previous_field(&mut self) -> &mut Self {
        self.form.focus_previous();
        self
    }

    pub fn form_input_char(&mut self, c: char) -> &mut Self {
        self.form.input_char(c);
        self
    }

    pub fn form_delete_char(&mut self) -> &mut Self {
        self.form.delete_char();
        self
    }

    pub fn submit_form(&mut self, now: Instant) -> SubmitOutcome {
        self.form
            .submit(self.launcher.as_mut(), &mut self.notifications, now)
    }

    pub fn get_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn notify(&mut self, kind: NotificationKind, message: &str, now: Instant) -> &mut Self {
        self.notifications.show(kind, message, now);
        self
    }

    pub fn dismiss_notification(&mut self) -> &mut Self {
        self.notifications.dismiss();
        self
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.reveal.is_revealed(id)
    }

    /// Track the pointer at viewport cell `(column, row)` for card tilt.
    ///
    pub fn pointer_move(&mut self, column: u16, row: u16) -> &mut Self {
        let document_row = self.get_offset_rows() + row as usize;
        match self.layout.project_card_at(document_row) {
            Some(index) => {
                let card = self.layout.project_cards[index];
                self.tilts.pointer_move(
                    index,
                    column as f64,
                    (document_row - card.top) as f64,
                    self.page_width as f64,
                    card.rows as f64,
                );
            }
            None => self.tilts.pointer_leave(),
        }
        self
    }

    pub fn get_tilt(&self, index: usize) -> Tilt {
        self.tilts.get(index)
    }

    pub fn get_parallax_rows(&self) -> i64 {
        effects::parallax_offset(self.navigation.offset()) / ROW_UNITS
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_visible()
    }

    pub fn set_page_hidden(&mut self, hidden: bool) -> &mut Self {
        self.page_hidden = hidden;
        self
    }

    pub fn get_page_title(&self) -> String {
        effects::page_title(&self.content.name, &self.content.title, self.page_hidden)
    }

    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        self
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn toggle_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = !self.debug_mode;
        self
    }

    pub fn get_log_entries(&self) -> Vec<String> {
        self.log_entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }
}
