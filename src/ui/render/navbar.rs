use super::Frame;
use crate::state::State;
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the navigation bar: brand, section links, theme icon and menu
/// toggle. A bottom border appears once the page has been scrolled.
///
pub fn navbar(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let navigation = state.get_navigation();
    let active = navigation.active_section();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", state.get_content().name),
            styling::section_title_style(theme),
        ),
        Span::raw(" "),
    ];
    for (index, section) in state.get_content().sections.iter().enumerate() {
        let style = if active == Some(section.id.as_str()) {
            styling::active_item_style(theme)
        } else {
            styling::secondary_text_style(theme)
        };
        spans.push(Span::styled(
            format!(" {} {} ", index + 1, section.title),
            style,
        ));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        state.get_theme_icon(),
        styling::banner_style(theme),
    ));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        if state.is_menu_open() { "✕" } else { "☰" },
        styling::normal_text_style(theme).add_modifier(Modifier::BOLD),
    ));

    let block = if navigation.is_scrolled() {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(styling::normal_block_border_style(theme))
    } else {
        Block::default()
    };
    let widget = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(widget, size);
}
