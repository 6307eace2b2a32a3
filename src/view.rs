/// What each UI region shows, computed from state without touching the DOM
///
/// The Yew components in `ui::components` turn these into markup; keeping the
/// decisions here lets them be checked with plain unit tests.

use crate::state::BookmarkState;

pub const EMPTY_STATE_MESSAGE: &str = "No bookmark groups. Add a new group to get started!";
pub const NEW_GROUP_LABEL: &str = "+ New Group";

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub index: usize,
    pub label: String,
    pub active: bool,
}

/// Group tabs for the navigation region
#[derive(Debug, Clone, PartialEq)]
pub struct NavView {
    pub groups: Vec<NavItem>,
}

/// One control in the navigation region, in display order
#[derive(Debug, Clone, PartialEq)]
pub enum NavControl {
    Group(NavItem),
    AddGroup,
}

impl NavView {
    /// Every control in order; the add-group control always comes last
    pub fn controls(&self) -> Vec<NavControl> {
        self.groups
            .iter()
            .cloned()
            .map(NavControl::Group)
            .chain(std::iter::once(NavControl::AddGroup))
            .collect()
    }
}

pub fn navigation(state: &BookmarkState) -> NavView {
    let selected = state.selected_index();
    NavView {
        groups: state
            .groups()
            .iter()
            .enumerate()
            .map(|(index, group)| NavItem {
                index,
                label: group.name.clone(),
                active: selected == Some(index),
            })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkRow {
    pub index: usize,
    pub name: String,
    pub url: String,
}

/// Content region: either the empty-state placeholder or the selected group
#[derive(Debug, Clone, PartialEq)]
pub enum ContentView {
    Empty { message: String },
    Group { heading: String, rows: Vec<BookmarkRow> },
}

pub fn content(state: &BookmarkState) -> ContentView {
    match state.selected_group() {
        None => ContentView::Empty {
            message: EMPTY_STATE_MESSAGE.to_string(),
        },
        Some(group) => ContentView::Group {
            heading: group.name.clone(),
            rows: group
                .bookmarks
                .iter()
                .enumerate()
                .map(|(index, bookmark)| BookmarkRow {
                    index,
                    name: bookmark.name.clone(),
                    url: bookmark.url.clone(),
                })
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Bookmark, Group};

    fn create_test_state() -> BookmarkState {
        BookmarkState::from_groups(vec![
            Group {
                name: "Work".to_string(),
                bookmarks: vec![
                    Bookmark::new("https://github.com", "GitHub"),
                    Bookmark::new("https://docs.rs", "Docs"),
                ],
            },
            Group::new("Home"),
        ])
        .unwrap()
    }

    #[test]
    fn test_navigation_marks_selected_group() {
        let nav = navigation(&create_test_state());

        assert_eq!(nav.groups.len(), 2);
        assert_eq!(nav.groups[0].label, "Work");
        assert!(nav.groups[0].active);
        assert!(!nav.groups[1].active);
    }

    #[test]
    fn test_add_group_control_is_last() {
        let controls = navigation(&create_test_state()).controls();

        assert_eq!(controls.len(), 3);
        assert!(matches!(controls[0], NavControl::Group(ref item) if item.label == "Work"));
        assert!(matches!(controls[1], NavControl::Group(ref item) if item.label == "Home"));
        assert_eq!(controls[2], NavControl::AddGroup);
    }

    #[test]
    fn test_empty_state_keeps_add_group_control() {
        let state = BookmarkState::empty();

        assert_eq!(navigation(&state).controls(), vec![NavControl::AddGroup]);
        assert_eq!(
            content(&state),
            ContentView::Empty {
                message: EMPTY_STATE_MESSAGE.to_string(),
            }
        );
    }

    #[test]
    fn test_content_lists_bookmarks_in_order() {
        let view = content(&create_test_state());

        match view {
            ContentView::Group { heading, rows } => {
                assert_eq!(heading, "Work");
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].name, "GitHub");
                assert_eq!(rows[1].index, 1);
                assert_eq!(rows[1].url, "https://docs.rs");
            }
            other => panic!("expected group view, got {:?}", other),
        }
    }

    #[test]
    fn test_content_for_group_without_bookmarks() {
        let view = content(&BookmarkState::default());

        assert_eq!(
            view,
            ContentView::Group {
                heading: "Default Group".to_string(),
                rows: Vec::new(),
            }
        );
    }
}
