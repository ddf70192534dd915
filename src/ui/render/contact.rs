use crate::state::{Focus, FormField, State, FORM_FIELD_ROWS};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

/// Lines of the contact block: contact methods, a blank row and the form.
///
pub fn contact<'a>(state: &'a State, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines: Vec<Line> = state
        .get_content()
        .contact_methods
        .iter()
        .map(|method| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<10}", method.label),
                    styling::secondary_text_style(theme),
                ),
                Span::styled(method.value.clone(), styling::normal_text_style(theme)),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.extend(form(state, theme));
    lines
}

fn form<'a>(state: &'a State, theme: &Theme) -> Vec<Line<'a>> {
    let form = state.get_form();
    let editing = state.current_focus() == Focus::Form;
    let mut lines = Vec::new();

    for field in FormField::ALL {
        let focused = editing && form.focused() == Some(field);
        let label_style = if focused {
            styling::section_title_style(theme)
        } else {
            styling::secondary_text_style(theme)
        };
        let value_style = match form.error(field) {
            Some(_) => styling::error_style(theme),
            None => styling::normal_text_style(theme),
        };
        let cursor = if focused { "▏" } else { "" };

        let mut field_lines = vec![
            Line::from(Span::styled(
                format!("  {}{}", field.label(), if focused { " ›" } else { "" }),
                label_style,
            )),
            Line::from(vec![
                Span::styled("  [ ", styling::muted_text_style(theme)),
                Span::styled(form.draft().get(field).to_string(), value_style),
                Span::styled(cursor, value_style),
                Span::styled(" ]", styling::muted_text_style(theme)),
            ]),
        ];
        if let Some(message) = form.error(field) {
            field_lines.push(Line::from(Span::styled(
                format!("    {}", message),
                styling::error_style(theme).add_modifier(Modifier::ITALIC),
            )));
        }
        field_lines.resize(FORM_FIELD_ROWS, Line::default());
        lines.extend(field_lines);
    }

    let button = if editing {
        "  [ Send Message (Enter) ]"
    } else {
        "  [ Send Message (c to write) ]"
    };
    lines.push(Line::from(Span::styled(
        button,
        styling::banner_style(theme),
    )));
    lines
}
