use super::{contact, Frame};
use crate::content::SectionSpec;
use crate::state::{State, HERO_ROWS, PROJECT_CARD_ROWS};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the scrollable document.
///
pub fn page(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let mut lines = Vec::with_capacity(state.get_layout().total_rows);
    for (section, (_, span)) in state
        .get_content()
        .sections
        .iter()
        .zip(state.get_layout().sections.iter())
    {
        let mut section_lines = section_lines(section, state, theme, size.width);
        section_lines.resize(span.rows, Line::default());
        lines.extend(section_lines);
    }

    let offset = state.get_offset_rows().min(u16::MAX as usize) as u16;
    let widget = Paragraph::new(lines).scroll((offset, 0));
    frame.render_widget(widget, size);
}

/// Lines of one section: title, blank, text lines, block, blank.
///
fn section_lines<'a>(
    section: &'a SectionSpec,
    state: &'a State,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'a>> {
    let revealed = state.is_revealed(&section.id);
    let text_style = if revealed {
        styling::normal_text_style(theme)
    } else {
        styling::hidden_style(theme)
    };
    let title_style = if revealed {
        styling::section_title_style(theme)
    } else {
        styling::hidden_style(theme)
    };

    let mut lines = vec![
        Line::from(Span::styled(format!("  {}", section.title), title_style)),
        Line::default(),
    ];
    lines.extend(
        section
            .lines
            .iter()
            .map(|l| Line::from(Span::styled(format!("  {}", l), text_style))),
    );
    let block = match section.id.as_str() {
        "home" => hero(state, theme, width),
        "about" => stats(state, theme),
        "skills" => skills(state, theme),
        "projects" => projects(state, theme),
        "contact" => contact::contact(state, theme),
        _ => vec![],
    };
    lines.extend(block);
    lines
}

fn hero<'a>(state: &'a State, theme: &Theme, width: u16) -> Vec<Line<'a>> {
    let content = state.get_content();
    let shift = state.get_parallax_rows().unsigned_abs() as usize % (width.max(1) as usize);
    let shapes = format!("{}◆      ●      ▲", " ".repeat(shift));

    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("  Hi, I'm ", styling::normal_text_style(theme)),
            Span::styled(content.name.clone(), styling::banner_style(theme)),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("  > ", styling::muted_text_style(theme)),
            Span::styled(
                state.get_typing_text().to_string(),
                styling::section_title_style(theme),
            ),
            Span::styled(
                "▌",
                styling::normal_text_style(theme).add_modifier(Modifier::SLOW_BLINK),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(shapes, styling::muted_text_style(theme))),
        Line::default(),
        Line::from(Span::styled(
            "  ↓ Scroll down (Enter)",
            styling::secondary_text_style(theme),
        )),
    ];
    lines.resize(HERO_ROWS, Line::default());
    lines
}

fn stats<'a>(state: &'a State, theme: &Theme) -> Vec<Line<'a>> {
    let counters = state.get_counters();
    if counters.is_empty() {
        return vec![];
    }
    let values = counters
        .iter()
        .map(|c| {
            Span::styled(
                format!("  {:<20}", format!("{}+", c.displayed())),
                styling::banner_style(theme),
            )
        })
        .collect::<Vec<_>>();
    let labels = counters
        .iter()
        .map(|c| {
            Span::styled(
                format!("  {:<20}", c.label()),
                styling::secondary_text_style(theme),
            )
        })
        .collect::<Vec<_>>();
    vec![
        Line::default(),
        Line::from(values),
        Line::from(labels),
        Line::default(),
    ]
}

fn skills<'a>(state: &'a State, theme: &Theme) -> Vec<Line<'a>> {
    let skills = state.get_skills();
    let mut tabs = vec![Span::raw("  ")];
    for (index, category) in skills.categories().iter().enumerate() {
        let style = if skills.active_index() == Some(index) {
            styling::active_item_style(theme)
        } else {
            styling::secondary_text_style(theme)
        };
        tabs.push(Span::styled(format!(" {} ", category.name), style));
        tabs.push(Span::raw(" "));
    }

    let mut lines = vec![Line::from(tabs), Line::default()];
    if let Some(group) = skills.active_group() {
        lines.extend(group.items.iter().map(|item| {
            Line::from(vec![
                Span::styled("    • ", styling::banner_style(theme)),
                Span::styled(item.clone(), styling::normal_text_style(theme)),
            ])
        }));
    }
    lines
}

fn projects<'a>(state: &'a State, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for (index, project) in state.get_content().projects.iter().enumerate() {
        let tilt = state.get_tilt(index);
        let (indent, title_style) = if tilt.hovered {
            let lean = if tilt.rotate_y >= 0.0 { "   " } else { " " };
            (lean, styling::banner_style(theme))
        } else {
            ("  ", styling::section_title_style(theme))
        };
        let mut card = vec![
            Line::from(vec![
                Span::raw(indent),
                Span::styled(format!("▍{}", project.name), title_style),
            ]),
            Line::from(Span::styled(
                format!("{} {}", indent, project.description),
                styling::normal_text_style(theme),
            )),
            Line::from(Span::styled(
                format!("{} {}", indent, project.tech.join(" · ")),
                Style::default()
                    .fg(theme.secondary.to_color())
                    .add_modifier(Modifier::ITALIC),
            )),
        ];
        card.resize(PROJECT_CARD_ROWS, Line::default());
        lines.extend(card);
    }
    lines
}
