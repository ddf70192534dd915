use super::{footer, log, navbar, overlays, page, Frame};
use crate::state::State;
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};
use std::time::Instant;

/// Height of the log panel while debug mode is on.
///
const LOG_PANEL_HEIGHT: u16 = 8;

/// Render the whole page according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let theme = Theme::for_preference(state.get_theme());
    let size = frame.size();
    frame.render_widget(Block::default().style(styling::page_style(&theme)), size);

    if state.is_loading() {
        overlays::loading(frame, size, state, &theme);
        return;
    }

    let log_height = if state.is_debug_mode() {
        LOG_PANEL_HEIGHT
    } else {
        0
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(log_height),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(size);

    state.set_viewport(rows[1].height, rows[1].width, Instant::now());

    navbar(frame, rows[0], state, &theme);
    page(frame, rows[1], state, &theme);
    if state.is_debug_mode() {
        log(frame, rows[2], state, &theme);
    }
    footer(frame, rows[3], state, &theme);

    if state.is_menu_open() {
        overlays::menu(frame, rows[1], state, &theme);
    }
    overlays::notification(frame, rows[1], state, &theme);
}
