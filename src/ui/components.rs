/// Presentational components for the bookmark page

use crate::view::{ContentView, NEW_GROUP_LABEL, NavView};
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn input_value(e: InputEvent) -> Option<String> {
    e.target_dyn_into::<HtmlInputElement>().map(|input| input.value())
}

/// Same as `cb.filter_reform(input_value)`, typed as a unit-returning listener
fn on_input_value(cb: &Callback<String>) -> Callback<InputEvent> {
    let cb = cb.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(value) = input_value(e) {
            cb.emit(value);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct GroupNavProps {
    pub view: NavView,
    pub on_select: Callback<usize>,
    pub on_new_group: Callback<()>,
}

/// One tab per group, then the fixed new-group button
#[function_component(GroupNav)]
pub fn group_nav(props: &GroupNavProps) -> Html {
    html! {
        <nav id="groupNav" class="group-nav">
            {for props.view.groups.iter().map(|item| {
                let index = item.index;
                html! {
                    <button
                        key={index.to_string()}
                        class={classes!("group-tab", item.active.then_some("active"))}
                        data-group-index={index.to_string()}
                        onclick={props.on_select.reform(move |_: MouseEvent| index)}
                    >
                        {&item.label}
                    </button>
                }
            })}
            <button id="newGroupBtn" class="new-group-btn" onclick={props.on_new_group.reform(|_: MouseEvent| ())}>
                {NEW_GROUP_LABEL}
            </button>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct BookmarkListProps {
    pub view: ContentView,
    pub url: String,
    pub name: String,
    pub on_url_input: Callback<String>,
    pub on_name_input: Callback<String>,
    pub on_add: Callback<()>,
    pub on_delete: Callback<usize>,
}

#[function_component(BookmarkList)]
pub fn bookmark_list(props: &BookmarkListProps) -> Html {
    let body = match &props.view {
        ContentView::Empty { message } => html! {
            <p class="empty-state">{message}</p>
        },
        ContentView::Group { heading, rows } => html! {
            <div class="group">
                <h2>{heading}</h2>
                <div class="bookmarks">
                    {for rows.iter().map(|row| {
                        let index = row.index;
                        html! {
                            <div key={index.to_string()} class="bookmark">
                                <a href={row.url.clone()} target="_blank" rel="noopener noreferrer">
                                    {&row.name}
                                </a>
                                <button
                                    class="deleteBookmarkBtn"
                                    data-bookmark-index={index.to_string()}
                                    onclick={props.on_delete.reform(move |_: MouseEvent| index)}
                                >
                                    {"Delete"}
                                </button>
                            </div>
                        }
                    })}
                </div>
                <input
                    type="text"
                    id="newBookmarkUrl"
                    placeholder="Enter bookmark URL"
                    value={props.url.clone()}
                    oninput={on_input_value(&props.on_url_input)}
                />
                <input
                    type="text"
                    id="newBookmarkName"
                    placeholder="Enter bookmark name"
                    value={props.name.clone()}
                    oninput={on_input_value(&props.on_name_input)}
                />
                <button id="addBookmarkBtn" onclick={props.on_add.reform(|_: MouseEvent| ())}>
                    {"Add Bookmark"}
                </button>
            </div>
        },
    };

    html! {
        <div id="bookmarkContainer" class="bookmark-container">
            {body}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AddGroupModalProps {
    pub open: bool,
    pub value: String,
    pub on_input: Callback<String>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(AddGroupModal)]
pub fn add_group_modal(props: &AddGroupModalProps) -> Html {
    let display = if props.open { "display: block;" } else { "display: none;" };

    html! {
        <div id="addGroupModal" class="modal" style={display}>
            <div class="modal-content">
                <h2>{"Add New Group"}</h2>
                <input
                    type="text"
                    id="newGroupName"
                    placeholder="Enter group name"
                    value={props.value.clone()}
                    oninput={on_input_value(&props.on_input)}
                />
                <button id="saveNewGroup" onclick={props.on_save.reform(|_: MouseEvent| ())}>{"Save"}</button>
                <button id="cancelNewGroup" onclick={props.on_cancel.reform(|_: MouseEvent| ())}>{"Cancel"}</button>
            </div>
        </div>
    }
}
