//! Page geometry.
//!
//! The page is laid out as terminal rows; one row spans `ROW_UNITS` layout
//! units. Every section starts with a title row and a blank row, followed
//! by its text lines, any section-specific block and one blank row. The
//! renderer produces exactly `section_rows` rows per section.

use super::navigation::SectionBounds;
use crate::content::{Content, SectionSpec};

pub const ROW_UNITS: i64 = 20;

/// Rows before a section's text lines.
pub const HEADER_ROWS: usize = 2;
pub const HERO_ROWS: usize = 9;
pub const STATS_ROWS: usize = 4;
pub const SKILL_BAR_ROWS: usize = 2;
pub const PROJECT_CARD_ROWS: usize = 4;
pub const FORM_FIELD_ROWS: usize = 3;
/// Four fields plus the submit row.
pub const FORM_ROWS: usize = 4 * FORM_FIELD_ROWS + 1;

/// Rows of the block drawn after a section's text lines.
///
pub fn block_rows(section: &SectionSpec, content: &Content) -> usize {
    match section.id.as_str() {
        "home" => HERO_ROWS,
        "about" if !content.stats.is_empty() => STATS_ROWS,
        "skills" => {
            SKILL_BAR_ROWS
                + content
                    .skill_groups
                    .iter()
                    .map(|g| g.items.len())
                    .max()
                    .unwrap_or(0)
        }
        "projects" => content.projects.len() * PROJECT_CARD_ROWS,
        "contact" => content.contact_methods.len() + 1 + FORM_ROWS,
        _ => 0,
    }
}

pub fn section_rows(section: &SectionSpec, content: &Content) -> usize {
    HEADER_ROWS + section.lines.len() + block_rows(section, content) + 1
}

/// Row extent of a page element.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RowSpan {
    pub top: usize,
    pub rows: usize,
}

impl RowSpan {
    pub fn contains(&self, row: usize) -> bool {
        row >= self.top && row < self.top + self.rows
    }

    pub fn top_units(&self) -> i64 {
        self.top as i64 * ROW_UNITS
    }

    pub fn height_units(&self) -> i64 {
        self.rows as i64 * ROW_UNITS
    }
}

/// Positions of the sections and the interactive blocks inside them.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub sections: Vec<(String, RowSpan)>,
    pub stats: Option<RowSpan>,
    pub project_cards: Vec<RowSpan>,
    pub form: Option<RowSpan>,
    pub total_rows: usize,
}

impl PageLayout {
    pub fn new(content: &Content) -> Self {
        let mut layout = PageLayout::default();
        let mut row = 0;
        for section in &content.sections {
            let rows = section_rows(section, content);
            let block_top = row + HEADER_ROWS + section.lines.len();
            match section.id.as_str() {
                "about" if !content.stats.is_empty() => {
                    layout.stats = Some(RowSpan {
                        top: block_top,
                        rows: STATS_ROWS,
                    });
                }
                "projects" => {
                    layout.project_cards = (0..content.projects.len())
                        .map(|i| RowSpan {
                            top: block_top + i * PROJECT_CARD_ROWS,
                            rows: PROJECT_CARD_ROWS,
                        })
                        .collect();
                }
                "contact" => {
                    layout.form = Some(RowSpan {
                        top: block_top + content.contact_methods.len() + 1,
                        rows: FORM_ROWS,
                    });
                }
                _ => {}
            }
            layout
                .sections
                .push((section.id.clone(), RowSpan { top: row, rows }));
            row += rows;
        }
        layout.total_rows = row;
        layout
    }

    /// Section extents in layout units, in document order.
    ///
    pub fn section_bounds(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|(id, span)| SectionBounds {
                id: id.clone(),
                top: span.top_units(),
                height: span.height_units(),
            })
            .collect()
    }

    /// Index of the project card covering document row `row`.
    ///
    pub fn project_card_at(&self, row: usize) -> Option<usize> {
        self.project_cards.iter().position(|card| card.contains(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_contiguous() {
        let content = Content::default();
        let layout = PageLayout::new(&content);
        assert_eq!(layout.sections.len(), content.sections.len());
        let mut expected_top = 0;
        for (_, span) in &layout.sections {
            assert_eq!(span.top, expected_top);
            expected_top += span.rows;
        }
        assert_eq!(layout.total_rows, expected_top);
    }

    #[test]
    fn bounds_use_layout_units() {
        let content = Content::default();
        let layout = PageLayout::new(&content);
        let bounds = layout.section_bounds();
        assert_eq!(bounds[0].id, "home");
        assert_eq!(bounds[0].top, 0);
        assert_eq!(
            bounds[0].height,
            section_rows(&content.sections[0], &content) as i64 * ROW_UNITS
        );
        assert_eq!(bounds[1].top, bounds[0].height);
    }

    #[test]
    fn blocks_sit_inside_their_sections() {
        let content = Content::default();
        let layout = PageLayout::new(&content);
        let span_of = |id: &str| {
            layout
                .sections
                .iter()
                .find(|(s, _)| s == id)
                .map(|(_, span)| *span)
                .unwrap()
        };

        let about = span_of("about");
        let stats = layout.stats.unwrap();
        assert!(about.contains(stats.top) && about.contains(stats.top + stats.rows - 1));

        let projects = span_of("projects");
        assert_eq!(layout.project_cards.len(), content.projects.len());
        for card in &layout.project_cards {
            assert!(projects.contains(card.top));
        }
        let second = layout.project_cards[1];
        assert_eq!(layout.project_card_at(second.top + 1), Some(1));
        assert_eq!(layout.project_card_at(0), None);

        let contact = span_of("contact");
        let form = layout.form.unwrap();
        assert!(contact.contains(form.top) && contact.contains(form.top + form.rows - 1));
    }

    #[test]
    fn stats_block_omitted_without_stats() {
        let content = Content {
            stats: vec![],
            ..Content::default()
        };
        let layout = PageLayout::new(&content);
        assert!(layout.stats.is_none());
    }
}
