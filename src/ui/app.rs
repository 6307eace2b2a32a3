/// Root component: startup load, event wiring, and persistence

use crate::chrome::ChromeStore;
use crate::commands::{Command, dispatch};
use crate::model::Group;
use crate::state::BookmarkState;
use crate::storage::{KeyValueStore, initialize, save_groups};
use crate::ui::components::{AddGroupModal, BookmarkList, GroupNav};
use crate::ui::prompt::BrowserPrompter;
use crate::view::{content, navigation};
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const UNSAVED_WARNING: &str = "Extension storage is not available. Bookmarks will not be saved.";

#[function_component(App)]
pub fn app() -> Html {
    let bookmarks = use_state(|| None::<BookmarkState>);
    let storage_warning = use_state(|| None::<String>);
    let add_group_open = use_state(|| false);
    let new_group_name = use_state(String::new);
    let new_bookmark_url = use_state(String::new);
    let new_bookmark_name = use_state(String::new);

    // Load bookmarks on mount
    {
        let bookmarks = bookmarks.clone();
        let storage_warning = storage_warning.clone();

        use_effect_with((), move |_| {
            if !ChromeStore.is_available() {
                storage_warning.set(Some(UNSAVED_WARNING.to_string()));
            }
            spawn_local(async move {
                let state = initialize(&ChromeStore).await;
                bookmarks.set(Some(state));
            });
            || ()
        });
    }

    let on_command = {
        let bookmarks = bookmarks.clone();
        let add_group_open = add_group_open.clone();
        let new_group_name = new_group_name.clone();
        let new_bookmark_url = new_bookmark_url.clone();
        let new_bookmark_name = new_bookmark_name.clone();

        Callback::from(move |command: Command| {
            let Some(mut next) = (*bookmarks).clone() else {
                return;
            };

            let effects = dispatch(&mut next, command, &BrowserPrompter);
            if !effects.changed {
                return;
            }

            if effects.persist {
                persist(next.groups().to_vec());
            }
            if effects.close_add_group {
                add_group_open.set(false);
                new_group_name.set(String::new());
            }
            if effects.clear_bookmark_inputs {
                new_bookmark_url.set(String::new());
                new_bookmark_name.set(String::new());
            }
            bookmarks.set(Some(next));
        })
    };

    let on_open_add_group = {
        let add_group_open = add_group_open.clone();
        Callback::from(move |_: ()| {
            add_group_open.set(true);
        })
    };

    let on_cancel_add_group = {
        let add_group_open = add_group_open.clone();
        let new_group_name = new_group_name.clone();
        Callback::from(move |_: ()| {
            add_group_open.set(false);
            new_group_name.set(String::new());
        })
    };

    let on_save_group = {
        let new_group_name = new_group_name.clone();
        on_command.reform(move |_: ()| Command::AddGroup((*new_group_name).clone()))
    };

    let on_add_bookmark = {
        let new_bookmark_url = new_bookmark_url.clone();
        let new_bookmark_name = new_bookmark_name.clone();
        on_command.reform(move |_: ()| Command::AddBookmark {
            url: (*new_bookmark_url).clone(),
            name: (*new_bookmark_name).clone(),
        })
    };

    let set_text = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |value: String| handle.set(value))
    };

    html! {
        <div class="container">
            <h1 class="main-title">{"Bookmark Groups"}</h1>

            // Storage warning
            if let Some(warning) = (*storage_warning).clone() {
                <Alert r#type={AlertType::Warning} title={warning} inline={true}>
                </Alert>
            }

            {match &*bookmarks {
                None => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Loading bookmarks..."}</p>
                    </div>
                },
                Some(state) => html! {
                    <>
                        <GroupNav
                            view={navigation(state)}
                            on_select={on_command.reform(Command::SwitchGroup)}
                            on_new_group={on_open_add_group}
                        />
                        <BookmarkList
                            view={content(state)}
                            url={(*new_bookmark_url).clone()}
                            name={(*new_bookmark_name).clone()}
                            on_url_input={set_text(&new_bookmark_url)}
                            on_name_input={set_text(&new_bookmark_name)}
                            on_add={on_add_bookmark}
                            on_delete={on_command.reform(Command::DeleteBookmark)}
                        />
                    </>
                },
            }}

            <AddGroupModal
                open={*add_group_open}
                value={(*new_group_name).clone()}
                on_input={set_text(&new_group_name)}
                on_save={on_save_group}
                on_cancel={on_cancel_add_group}
            />
        </div>
    }
}

// Fire-and-forget: the outcome is logged by `save_groups` and the UI does not wait on it.
fn persist(groups: Vec<Group>) {
    spawn_local(async move {
        let _ = save_groups(&ChromeStore, &groups).await;
    });
}
