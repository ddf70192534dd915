use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the base style of the page.
///
pub fn page_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text.to_color())
        .bg(theme.background.to_color())
}

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the style for section titles.
///
pub fn section_title_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the current navigation link or selected item.
///
pub fn active_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

pub fn secondary_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_secondary.to_color())
}

pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for the hero banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.accent.to_color())
        .add_modifier(Modifier::BOLD)
}

pub fn success_style(theme: &Theme) -> Style {
    Style::default().fg(theme.success.to_color())
}

pub fn error_style(theme: &Theme) -> Style {
    Style::default().fg(theme.error.to_color())
}

/// Return the style for text that has not been revealed yet.
///
pub fn hidden_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.background.to_color())
        .bg(theme.background.to_color())
}
