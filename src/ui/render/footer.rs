use super::Frame;
use crate::state::{Focus, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the key hints for the current input context.
///
fn controls_text(state: &State) -> &'static str {
    if state.current_focus() == Focus::Form {
        " Type to edit, Tab/↑↓: field, Enter: send, Esc: leave form"
    } else if state.is_menu_open() {
        " j/k: select, Enter: go, Esc/m: close menu"
    } else {
        " j/k: scroll, 1-9: section, h/l: skills, c: contact, y: copy email, t: theme, m: menu, d: log, q: quit"
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(12)].as_ref())
        .split(size);

    let controls = Paragraph::new(Line::from(Span::styled(
        controls_text(state),
        styling::muted_text_style(theme),
    )));
    frame.render_widget(controls, columns[0]);

    if state.get_navigation().is_back_to_top_visible() {
        let back_to_top = Paragraph::new(Line::from(Span::styled(
            " ↑ Top (g) ",
            styling::active_item_style(theme),
        )));
        frame.render_widget(back_to_top, columns[1]);
    }
}
