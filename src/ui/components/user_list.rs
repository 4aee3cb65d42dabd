use crate::models::User;
use crate::ui::app_context::use_user_api;
use crate::ui::components::{AlertDialog, ConfirmDialog, SearchBar, UserCard};
use crate::ui::Route;
use crate::users::list::DELETE_PROMPT;
use crate::users::{ListView, UserListState};
use dioxus::prelude::*;
use tracing::debug;

/// List page: every user as a card, filtered by the search bar
#[component]
pub fn UserList() -> Element {
    debug!("Component rendering");
    let api = use_user_api();
    let mut list = use_signal(UserListState::new);

    // Load users once on mount
    let load_api = api.clone();
    use_effect(move || {
        let api = load_api.clone();
        spawn(async move {
            let result = api.get().list_users().await;
            list.write().finish_load(result);
        });
    });

    let state = list.read();
    let view = state.view();
    let summary = state.summary();
    let pending_delete = state.pending_delete().is_some();
    let alert = state.alert().map(str::to_string);
    drop(state);

    let body = match view {
        ListView::Loading => {
            return rsx! {
                p { class: "p-6 text-gray-700", "Loading..." }
            }
        }
        ListView::Failed(message) => {
            return rsx! {
                p { class: "p-6 text-red-700", "{message}" }
            }
        }
        ListView::NoMatches => rsx! {
            div { class: "text-center py-8",
                p { class: "text-gray-500 text-lg", "No users found matching your search." }
            }
        },
        ListView::Empty => rsx! {
            div { class: "text-center text-gray-500 py-8",
                p { class: "mb-4", "No users found. Please add a user." }
            }
        },
        ListView::Cards(users) => rsx! {
            UserGrid {
                users: users,
                on_delete: move |id: String| list.write().request_delete(id),
            }
        },
    };

    rsx! {
        div { class: "min-h-screen bg-gradient flex items-center justify-center p-6",
            div { class: "w-full max-w-6xl bg-white rounded-xl shadow-xl p-8",
                h2 { class: "text-3xl font-bold text-center text-gray-800 mb-8", "User List" }

                div { class: "flex justify-end mb-4",
                    Link {
                        to: Route::AddUser {},
                        class: "bg-purple-500 hover:bg-purple-600 text-white px-4 py-2 rounded-md",
                        "Add User"
                    }
                }

                SearchBar { on_search: move |term: String| list.write().set_search_term(term) }

                if let Some(summary) = summary {
                    div { class: "text-center mb-4 text-gray-600 text-sm", "{summary}" }
                }

                {body}
            }
        }

        if pending_delete {
            ConfirmDialog {
                message: DELETE_PROMPT.to_string(),
                on_cancel: move |_| list.write().cancel_delete(),
                on_confirm: move |_| {
                    let Some(id) = list.write().confirm_delete() else {
                        return;
                    };
                    let api = api.clone();
                    spawn(async move {
                        let result = api.get().delete_user(&id).await;
                        list.write().finish_delete(&id, result);
                    });
                },
            }
        }

        if let Some(message) = alert {
            AlertDialog {
                message,
                on_dismiss: move |_| list.write().dismiss_alert(),
            }
        }
    }
}

/// Grid of user cards
#[component]
fn UserGrid(users: Vec<User>, on_delete: EventHandler<String>) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6",
            for user in users {
                UserCard { key: "{user.id}", user: user.clone(), on_delete: on_delete }
            }
        }
    }
}
