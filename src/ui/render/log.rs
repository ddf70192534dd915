use super::Frame;
use crate::state::State;
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render log widget showing the most recent entries.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let block = Block::default()
        .title(" Log (d: hide) ")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let visible = size.height.saturating_sub(2) as usize;
    let entries = state.get_log_entries();
    let items: Vec<ListItem> = entries
        .iter()
        .skip(entries.len().saturating_sub(visible))
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                entry.clone(),
                styling::muted_text_style(theme),
            )))
        })
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style(theme))
        .block(block);
    frame.render_widget(list, size);
}
