use crate::state::{Focus, NotificationKind, State, SubmitOutcome};
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
        MouseEventKind,
    },
};
use log::*;
use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Rows scrolled by one mouse wheel notch.
///
const WHEEL_ROWS: i64 = 3;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Mouse(MouseEvent),
    FocusGained,
    FocusLost,
    Resize,
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            let polled = match event::poll(tick_rate) {
                Ok(polled) => polled,
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            };
            if polled {
                let event = match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind != KeyEventKind::Release => {
                        Some(Event::Input(key))
                    }
                    Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                    Ok(CrosstermEvent::FocusGained) => Some(Event::FocusGained),
                    Ok(CrosstermEvent::FocusLost) => Some(Event::FocusLost),
                    Ok(CrosstermEvent::Resize(_, _)) => Some(Event::Resize),
                    Ok(_) => None,
                    Err(e) => {
                        warn!("Failed to read terminal event: {}", e);
                        None
                    }
                };
                if let Some(event) = event {
                    if tx_clone.send(event).is_err() {
                        break;
                    }
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        let now = Instant::now();
        match self.rx.recv()? {
            Event::Input(event) => return Ok(handle_key(event, state, now)),
            Event::Mouse(event) => handle_mouse(event, state, now),
            Event::FocusGained => {
                debug!("Processing focus gained terminal event...");
                state.set_page_hidden(false);
            }
            Event::FocusLost => {
                debug!("Processing focus lost terminal event...");
                state.set_page_hidden(true);
            }
            Event::Resize => {
                debug!("Processing resize terminal event...");
            }
            Event::Tick => {
                state.advance_spinner_index();
            }
        }
        state.advance(now);
        Ok(true)
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle a key press. Returns false if exit was requested.
///
pub fn handle_key(event: KeyEvent, state: &mut State, now: Instant) -> bool {
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = event
    {
        debug!("Processing exit terminal event '{:?}'...", event);
        return false;
    }
    if state.is_loading() {
        return true;
    }

    let keep_running = if state.current_focus() == Focus::Form {
        handle_form_key(event, state, now);
        true
    } else if state.is_menu_open() {
        handle_menu_key(event, state, now);
        true
    } else {
        handle_page_key(event, state, now)
    };
    state.advance(now);
    keep_running
}

/// Keys while the contact form has focus.
///
fn handle_form_key(event: KeyEvent, state: &mut State, now: Instant) {
    match event.code {
        KeyCode::Esc => {
            debug!("Processing leave form event '{:?}'...", event);
            state.leave_form();
        }
        KeyCode::Tab | KeyCode::Down => {
            state.form_next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.form_previous_field();
        }
        KeyCode::Enter => {
            debug!("Processing submit form event '{:?}'...", event);
            if state.submit_form(now) == SubmitOutcome::HandedOff {
                state.leave_form();
            }
        }
        KeyCode::Backspace => {
            state.form_delete_char();
        }
        KeyCode::Char(c)
            if event.modifiers == KeyModifiers::NONE || event.modifiers == KeyModifiers::SHIFT =>
        {
            state.form_input_char(c);
        }
        _ => (),
    }
}

/// Keys while the mobile menu is open.
///
fn handle_menu_key(event: KeyEvent, state: &mut State, now: Instant) {
    match event.code {
        KeyCode::Esc | KeyCode::Char('m') => {
            debug!("Processing close menu event '{:?}'...", event);
            state.close_menu();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_menu_link();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_menu_link();
        }
        KeyCode::Enter => {
            debug!("Processing menu link event '{:?}'...", event);
            state.activate_menu_link(now);
        }
        _ => (),
    }
}

/// Keys while reading the page. Returns false if exit was requested.
///
fn handle_page_key(event: KeyEvent, state: &mut State, now: Instant) -> bool {
    match event.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", event);
            return false;
        }
        KeyCode::Char('t') => {
            debug!("Processing toggle theme event '{:?}'...", event);
            state.toggle_theme();
        }
        KeyCode::Char('m') => {
            debug!("Processing toggle menu event '{:?}'...", event);
            state.toggle_menu();
        }
        KeyCode::Esc => {
            state.close_menu();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.scroll_rows(1, now);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.scroll_rows(-1, now);
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            state.scroll_page(true, now);
        }
        KeyCode::PageUp => {
            state.scroll_page(false, now);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            debug!("Processing back to top event '{:?}'...", event);
            state.back_to_top(now);
        }
        KeyCode::Char('G') | KeyCode::End => {
            state.scroll_to_bottom(now);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            debug!("Processing section link event '{:?}'...", event);
            state.jump_to_section(index, now);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            state.previous_skill_category();
        }
        KeyCode::Char('l') | KeyCode::Right => {
            state.next_skill_category();
        }
        KeyCode::Char('c') => {
            debug!("Processing focus form event '{:?}'...", event);
            state.focus_form(now);
        }
        KeyCode::Char('x') => {
            state.dismiss_notification();
        }
        KeyCode::Char('y') => {
            debug!("Processing copy email event '{:?}'...", event);
            copy_contact_email(state, now);
        }
        KeyCode::Char('d') => {
            state.toggle_debug_mode();
        }
        KeyCode::Enter if state.get_navigation().active_section() == Some("home") => {
            state.follow_scroll_indicator(now);
        }
        _ => (),
    }
    true
}

/// Place the contact address on the system clipboard.
///
fn copy_contact_email(state: &mut State, now: Instant) {
    let email = state.get_form().recipient().to_string();
    let result = ClipboardContext::new().and_then(|mut context| context.set_contents(email.clone()));
    match result {
        Ok(()) => {
            info!("Copied '{}' to clipboard", email);
            state.notify(
                NotificationKind::Success,
                &format!("Copied {} to the clipboard.", email),
                now,
            );
        }
        Err(e) => {
            warn!("Failed to copy to clipboard: {}", e);
            state.notify(
                NotificationKind::Error,
                &format!("Could not access the clipboard. The address is {}", email),
                now,
            );
        }
    }
}

/// Handle wheel scrolling and pointer movement.
///
pub fn handle_mouse(event: MouseEvent, state: &mut State, now: Instant) {
    if state.is_loading() {
        return;
    }
    match event.kind {
        MouseEventKind::ScrollDown => {
            state.scroll_rows(WHEEL_ROWS, now);
        }
        MouseEventKind::ScrollUp => {
            state.scroll_rows(-WHEEL_ROWS, now);
        }
        MouseEventKind::Moved => {
            // Navbar occupies the first two rows.
            if event.row >= 2 {
                state.pointer_move(event.column, event.row - 2);
            }
        }
        _ => (),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, MemoryPreferenceStore};
    use crate::content::Content;
    use crate::logger::LogBuffer;
    use crate::mail::{MailError, MailLauncher};
    use crate::state::ThemePreference;
    use crossterm::event::{KeyEventState, KeyModifiers, MouseEventKind};

    struct NoopLauncher;

    impl MailLauncher for NoopLauncher {
        fn launch(&mut self, _uri: &str) -> Result<(), MailError> {
            Ok(())
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ready_state() -> (State, Instant) {
        let start = Instant::now();
        let mut state = State::new(
            Content::default(),
            &Config::new(),
            Box::new(MemoryPreferenceStore::new()),
            Box::new(NoopLauncher),
            LogBuffer::default(),
            start,
        );
        state.set_viewport(16, 80, start);
        let ready = start + Duration::from_secs(2);
        state.advance(ready);
        (state, ready)
    }

    #[test]
    fn test_ctrl_c_exits_even_while_loading() {
        let start = Instant::now();
        let mut state = State::new(
            Content::default(),
            &Config::new(),
            Box::new(MemoryPreferenceStore::new()),
            Box::new(NoopLauncher),
            LogBuffer::default(),
            start,
        );
        assert!(handle_key(key(KeyCode::Char('t')), &mut state, start));
        assert_eq!(state.get_theme(), ThemePreference::Light);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!handle_key(ctrl_c, &mut state, start));
    }

    #[test]
    fn test_q_exits_from_page() {
        let (mut state, now) = ready_state();
        assert!(!handle_key(key(KeyCode::Char('q')), &mut state, now));
    }

    #[test]
    fn test_escape_closes_open_menu() {
        let (mut state, now) = ready_state();
        handle_key(key(KeyCode::Char('m')), &mut state, now);
        assert!(state.is_menu_open());
        handle_key(key(KeyCode::Esc), &mut state, now);
        assert!(!state.is_menu_open());

        // Escape with the menu already closed changes nothing.
        handle_key(key(KeyCode::Esc), &mut state, now);
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_menu_blocks_scrolling() {
        let (mut state, now) = ready_state();
        handle_key(key(KeyCode::Char('m')), &mut state, now);
        handle_mouse(
            MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 0,
                row: 5,
                modifiers: KeyModifiers::NONE,
            },
            &mut state,
            now,
        );
        assert_eq!(state.get_offset_rows(), 0);
    }

    #[test]
    fn test_typing_in_form_does_not_trigger_page_keys() {
        let (mut state, now) = ready_state();
        handle_key(key(KeyCode::Char('c')), &mut state, now);
        assert_eq!(state.current_focus(), Focus::Form);
        for c in "qtm".chars() {
            assert!(handle_key(key(KeyCode::Char(c)), &mut state, now));
        }
        assert_eq!(state.get_form().draft().name, "qtm");
        assert_eq!(state.get_theme(), ThemePreference::Light);
        assert!(!state.is_menu_open());

        handle_key(key(KeyCode::Backspace), &mut state, now);
        assert_eq!(state.get_form().draft().name, "qt");
        handle_key(key(KeyCode::Esc), &mut state, now);
        assert_eq!(state.current_focus(), Focus::Page);
    }

    #[test]
    fn test_sending_the_form_leaves_no_errors() {
        let (mut state, now) = ready_state();
        handle_key(key(KeyCode::Char('c')), &mut state, now);
        let values = [
            "Aya H",
            "a@b.com",
            "Hello there",
            "This is a sufficiently long message.",
        ];
        for (index, value) in values.iter().enumerate() {
            if index > 0 {
                handle_key(key(KeyCode::Tab), &mut state, now);
            }
            for c in value.chars() {
                handle_key(key(KeyCode::Char(c)), &mut state, now);
            }
        }
        handle_key(key(KeyCode::Enter), &mut state, now);

        assert_eq!(
            state.get_notification().map(|n| n.kind()),
            Some(NotificationKind::Success)
        );
        assert_eq!(state.current_focus(), Focus::Page);
        assert_eq!(state.get_form().draft(), &Default::default());
        assert_eq!(state.get_form().error_count(), 0);
        assert_eq!(state.get_form().focused(), None);
    }

    #[test]
    fn test_wheel_scrolls_page() {
        let (mut state, now) = ready_state();
        handle_mouse(
            MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 0,
                row: 5,
                modifiers: KeyModifiers::NONE,
            },
            &mut state,
            now,
        );
        assert_eq!(state.get_offset_rows(), WHEEL_ROWS as usize);
    }

    #[test]
    fn test_number_keys_jump_to_sections() {
        let (mut state, now) = ready_state();
        handle_key(key(KeyCode::Char('3')), &mut state, now);
        state.advance(now + Duration::from_secs(1));
        assert_eq!(state.get_navigation().active_section(), Some("skills"));
    }
}
