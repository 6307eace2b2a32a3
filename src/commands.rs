/// User-triggered mutations of the bookmark state

use crate::model::{Bookmark, Group};
use crate::state::BookmarkState;
use log::{debug, warn};

pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both URL and name for the bookmark.";
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this bookmark?";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SwitchGroup(usize),
    AddGroup(String),
    AddBookmark { url: String, name: String },
    DeleteBookmark(usize),
}

/// Blocking user prompts, injected so handlers run without a browser
pub trait Prompter {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

/// Follow-up work the caller owes after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Effects {
    pub changed: bool,
    pub persist: bool,
    pub close_add_group: bool,
    pub clear_bookmark_inputs: bool,
}

impl Effects {
    pub const NONE: Effects = Effects {
        changed: false,
        persist: false,
        close_add_group: false,
        clear_bookmark_inputs: false,
    };
}

pub fn dispatch<P: Prompter>(state: &mut BookmarkState, command: Command, prompter: &P) -> Effects {
    debug!("Dispatching {:?}", command);
    match command {
        Command::SwitchGroup(index) => switch_group(state, index),
        Command::AddGroup(name) => add_group(state, &name),
        Command::AddBookmark { url, name } => add_bookmark(state, &url, &name, prompter),
        Command::DeleteBookmark(index) => delete_bookmark(state, index, prompter),
    }
}

// Selection is not persisted, so switching never writes to storage.
fn switch_group(state: &mut BookmarkState, index: usize) -> Effects {
    if !state.select(index) {
        warn!("Ignoring switch to missing group {}", index);
        return Effects::NONE;
    }
    Effects {
        changed: true,
        ..Effects::NONE
    }
}

fn add_group(state: &mut BookmarkState, name: &str) -> Effects {
    let name = name.trim();
    if name.is_empty() {
        return Effects::NONE;
    }

    state.push_group(Group::new(name));
    Effects {
        changed: true,
        persist: true,
        close_add_group: true,
        ..Effects::NONE
    }
}

fn add_bookmark<P: Prompter>(state: &mut BookmarkState, url: &str, name: &str, prompter: &P) -> Effects {
    let (url, name) = (url.trim(), name.trim());
    if url.is_empty() || name.is_empty() {
        prompter.alert(MISSING_FIELDS_MESSAGE);
        return Effects::NONE;
    }

    if !state.push_bookmark(Bookmark::new(url, name)) {
        warn!("No group selected; bookmark {} not added", url);
        return Effects::NONE;
    }
    Effects {
        changed: true,
        persist: true,
        clear_bookmark_inputs: true,
        ..Effects::NONE
    }
}

fn delete_bookmark<P: Prompter>(state: &mut BookmarkState, index: usize, prompter: &P) -> Effects {
    let in_range = state
        .selected_group()
        .is_some_and(|group| index < group.bookmarks.len());
    if !in_range {
        warn!("Ignoring delete of missing bookmark {}", index);
        return Effects::NONE;
    }

    if !prompter.confirm(CONFIRM_DELETE_MESSAGE) {
        return Effects::NONE;
    }

    match state.remove_bookmark(index) {
        Some(_) => Effects {
            changed: true,
            persist: true,
            ..Effects::NONE
        },
        None => Effects::NONE,
    }
}
