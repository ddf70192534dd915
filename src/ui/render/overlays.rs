use super::Frame;
use crate::state::{NotificationKind, NotificationPhase, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
};

const NOTIFICATION_WIDTH: u16 = 44;
const NOTIFICATION_HEIGHT: u16 = 5;
const MENU_WIDTH: u16 = 30;

/// Return a rectangle of at most `width` × `height` centered in `area`.
///
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render the startup screen.
///
pub fn loading(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let area = centered(size, 40, 3);
    let lines = vec![
        Line::from(Span::styled(
            spinner::frame(state.get_spinner_index()),
            styling::banner_style(theme),
        )),
        Line::default(),
        Line::from(Span::styled(
            state.get_content().name.clone(),
            styling::secondary_text_style(theme),
        )),
    ];
    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

/// Render the mobile menu listing every section link.
///
pub fn menu(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let sections = &state.get_content().sections;
    let area = centered(size, MENU_WIDTH, sections.len() as u16 + 2);
    let items: Vec<ListItem> = sections
        .iter()
        .map(|section| {
            ListItem::new(Line::from(Span::styled(
                format!(" {}", section.title),
                styling::normal_text_style(theme),
            )))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(theme))
                .style(styling::page_style(theme)),
        )
        .highlight_style(styling::active_item_style(theme));

    let mut list_state = ListState::default();
    list_state.select(Some(state.get_navigation().menu_index()));
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Render the current notification in the top-right corner. It slides in
/// while entering and fades while leaving.
///
pub fn notification(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let Some(notification) = state.get_notification() else {
        return;
    };
    let width = NOTIFICATION_WIDTH.min(size.width);
    let slide = match notification.phase() {
        NotificationPhase::Entering => width / 2,
        _ => 0,
    };
    let area = Rect::new(
        (size.x + size.width).saturating_sub(width + 1) + slide,
        size.y,
        width.saturating_sub(slide),
        NOTIFICATION_HEIGHT.min(size.height),
    );

    let accent = match notification.kind() {
        NotificationKind::Success => styling::success_style(theme),
        NotificationKind::Error => styling::error_style(theme),
    };
    let (accent, text) = if notification.phase() == NotificationPhase::Leaving {
        (
            accent.add_modifier(Modifier::DIM),
            styling::muted_text_style(theme),
        )
    } else {
        (accent, styling::normal_text_style(theme))
    };
    let widget = Paragraph::new(Line::from(Span::styled(
        notification.message().to_string(),
        text,
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(Span::styled(
                format!(" {} ", notification.kind().title()),
                accent.add_modifier(Modifier::BOLD),
            ))
            .title(
                Title::from(" x: close ")
                    .position(Position::Bottom)
                    .alignment(Alignment::Right),
            )
            .borders(Borders::ALL)
            .border_style(accent)
            .style(styling::page_style(theme)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}
