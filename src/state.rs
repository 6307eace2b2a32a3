/// In-memory bookmark state: the group list and the current selection

use crate::config::DEFAULT_GROUP_NAME;
use crate::model::{Bookmark, Group};

/// Root state owned by the UI
///
/// `selected` always indexes into `groups` when `groups` is non-empty.
/// Only command handlers mutate it; renderers read through the accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkState {
    groups: Vec<Group>,
    selected: usize,
}

impl BookmarkState {
    /// Adopt a stored group list as-is, selecting the first group
    pub fn from_groups(groups: Vec<Group>) -> Option<Self> {
        if groups.is_empty() {
            None
        } else {
            Some(BookmarkState {
                groups,
                selected: 0,
            })
        }
    }

    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        BookmarkState {
            groups: Vec::new(),
            selected: 0,
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        (self.selected < self.groups.len()).then_some(self.selected)
    }

    pub fn selected_group(&self) -> Option<&Group> {
        self.groups.get(self.selected)
    }

    pub(crate) fn select(&mut self, index: usize) -> bool {
        if index < self.groups.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Append a group and make it the selection
    pub(crate) fn push_group(&mut self, group: Group) -> usize {
        self.groups.push(group);
        self.selected = self.groups.len() - 1;
        self.selected
    }

    pub(crate) fn push_bookmark(&mut self, bookmark: Bookmark) -> bool {
        self.groups
            .get_mut(self.selected)
            .map(|group| group.bookmarks.push(bookmark))
            .is_some()
    }

    pub(crate) fn remove_bookmark(&mut self, index: usize) -> Option<Bookmark> {
        let group = self.groups.get_mut(self.selected)?;
        (index < group.bookmarks.len()).then(|| group.bookmarks.remove(index))
    }
}

impl Default for BookmarkState {
    fn default() -> Self {
        BookmarkState {
            groups: vec![Group::new(DEFAULT_GROUP_NAME)],
            selected: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_group(name: &str, urls: &[&str]) -> Group {
        Group {
            name: name.to_string(),
            bookmarks: urls
                .iter()
                .map(|url| Bookmark::new(*url, format!("{} link", url)))
                .collect(),
        }
    }

    #[test]
    fn test_default_state() {
        let state = BookmarkState::default();

        assert_eq!(state.groups().len(), 1);
        assert_eq!(state.groups()[0].name, "Default Group");
        assert!(state.groups()[0].bookmarks.is_empty());
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_from_empty_groups() {
        assert!(BookmarkState::from_groups(Vec::new()).is_none());
    }

    #[test]
    fn test_from_groups_selects_first() {
        let state = BookmarkState::from_groups(vec![
            create_test_group("Work", &["https://a.example"]),
            create_test_group("Home", &[]),
        ])
        .unwrap();

        assert_eq!(state.selected_index(), Some(0));
        assert_eq!(state.selected_group().unwrap().name, "Work");
    }

    #[test]
    fn test_empty_state_has_no_selection() {
        let state = BookmarkState::empty();

        assert!(state.is_empty());
        assert_eq!(state.selected_index(), None);
        assert!(state.selected_group().is_none());
    }

    #[test]
    fn test_select_out_of_range() {
        let mut state = BookmarkState::default();

        assert!(!state.select(3));
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_push_group_selects_it() {
        let mut state = BookmarkState::default();

        let index = state.push_group(Group::new("Work"));

        assert_eq!(index, 1);
        assert_eq!(state.selected_group().unwrap().name, "Work");
    }

    #[test]
    fn test_push_bookmark_targets_selected_group() {
        let mut state = BookmarkState::default();
        state.push_group(Group::new("Work"));
        state.select(0);

        assert!(state.push_bookmark(Bookmark::new("https://a.example", "A")));

        assert_eq!(state.groups()[0].bookmarks.len(), 1);
        assert!(state.groups()[1].bookmarks.is_empty());
    }

    #[test]
    fn test_remove_bookmark() {
        let mut state = BookmarkState::from_groups(vec![create_test_group(
            "Work",
            &["https://a.example", "https://b.example"],
        )])
        .unwrap();

        let removed = state.remove_bookmark(0).unwrap();

        assert_eq!(removed.url, "https://a.example");
        assert_eq!(state.groups()[0].bookmarks.len(), 1);
        assert!(state.remove_bookmark(5).is_none());
    }
}
