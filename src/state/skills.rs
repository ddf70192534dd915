//! Skills filter: one selected category reveals one skill group.

use super::StateError;
use crate::content::{SkillCategorySpec, SkillGroupSpec};

#[derive(Debug, Clone, Default)]
pub struct SkillsFilter {
    categories: Vec<SkillCategorySpec>,
    groups: Vec<SkillGroupSpec>,
    active: Option<usize>,
}

impl SkillsFilter {
    /// Return a new filter with the first category selected.
    ///
    pub fn new(categories: Vec<SkillCategorySpec>, groups: Vec<SkillGroupSpec>) -> Self {
        let active = if categories.is_empty() { None } else { Some(0) };
        SkillsFilter {
            categories,
            groups,
            active,
        }
    }

    /// Make the category at `index` the only active one.
    ///
    pub fn select(&mut self, index: usize) -> Result<(), StateError> {
        if index >= self.categories.len() {
            return Err(StateError::CategoryNotFound(index));
        }
        self.active = Some(index);
        Ok(())
    }

    pub fn select_next(&mut self) -> &mut Self {
        if !self.categories.is_empty() {
            let next = match self.active {
                Some(i) => (i + 1) % self.categories.len(),
                None => 0,
            };
            self.active = Some(next);
        }
        self
    }

    pub fn select_previous(&mut self) -> &mut Self {
        if !self.categories.is_empty() {
            let len = self.categories.len();
            let previous = match self.active {
                Some(i) => (i + len - 1) % len,
                None => len - 1,
            };
            self.active = Some(previous);
        }
        self
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Return the group revealed by the active category, if that category
    /// names a group that exists.
    ///
    pub fn active_group(&self) -> Option<&SkillGroupSpec> {
        let category = self.categories.get(self.active?)?;
        self.groups.iter().find(|g| g.id == category.group)
    }

    pub fn is_group_visible(&self, id: &str) -> bool {
        self.active_group().map(|g| g.id == id).unwrap_or(false)
    }

    pub fn categories(&self) -> &[SkillCategorySpec] {
        &self.categories
    }

    pub fn groups(&self) -> &[SkillGroupSpec] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> SkillsFilter {
        let categories = ["backend", "frontend", "design"]
            .iter()
            .map(|g| SkillCategorySpec {
                name: g.to_uppercase(),
                group: g.to_string(),
            })
            .collect();
        let groups = ["backend", "frontend"]
            .iter()
            .map(|id| SkillGroupSpec {
                id: id.to_string(),
                items: vec![format!("{} skill", id)],
            })
            .collect();
        SkillsFilter::new(categories, groups)
    }

    #[test]
    fn first_category_starts_active() {
        let filter = filter();
        assert_eq!(filter.active_index(), Some(0));
        assert!(filter.is_group_visible("backend"));
        assert!(!filter.is_group_visible("frontend"));
    }

    #[test]
    fn select_is_exclusive() {
        let mut filter = filter();
        filter.select(1).unwrap();
        assert_eq!(filter.active_index(), Some(1));
        let visible: Vec<&str> = filter
            .groups()
            .iter()
            .filter(|g| filter.is_group_visible(&g.id))
            .map(|g| g.id.as_str())
            .collect();
        assert_eq!(visible, vec!["frontend"]);
    }

    #[test]
    fn category_without_group_hides_all() {
        let mut filter = filter();
        filter.select(2).unwrap();
        assert!(filter.active_group().is_none());
        assert!(filter.groups().iter().all(|g| !filter.is_group_visible(&g.id)));
    }

    #[test]
    fn select_out_of_range() {
        let mut filter = filter();
        assert!(matches!(
            filter.select(3),
            Err(StateError::CategoryNotFound(3))
        ));
        assert_eq!(filter.active_index(), Some(0));
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut filter = filter();
        filter.select_previous();
        assert_eq!(filter.active_index(), Some(2));
        filter.select_next();
        assert_eq!(filter.active_index(), Some(0));
    }

    #[test]
    fn empty_filter_has_no_selection() {
        let mut filter = SkillsFilter::new(vec![], vec![]);
        filter.select_next();
        assert_eq!(filter.active_index(), None);
        assert!(filter.active_group().is_none());
    }
}
