use crate::models::User;
use crate::ui::Route;
use dioxus::prelude::*;

/// One record in the list grid
#[component]
pub fn UserCard(user: User, on_delete: EventHandler<String>) -> Element {
    let edit_id = user.id.clone();
    let delete_id = user.id.clone();

    rsx! {
        div { class: "bg-gray-50 shadow-md rounded-lg p-6 border border-gray-400 hover:shadow-lg",
            h3 { class: "text-lg font-semibold text-gray-900 mb-2 text-center", "{user.name}" }
            p { class: "text-sm text-gray-600 mb-1",
                span { class: "font-medium text-gray-700", "Email:" }
                " {user.email}"
            }
            p { class: "text-sm text-gray-600 mb-4",
                span { class: "font-medium text-gray-700", "Company:" }
                " {user.company_name}"
            }
            div { class: "flex justify-center space-x-3",
                button {
                    class: "bg-blue-500 hover:bg-blue-600 text-white px-3 py-1 rounded-md",
                    onclick: move |_| {
                        navigator().push(Route::UpdateUser { id: edit_id.clone() });
                    },
                    "Update"
                }
                button {
                    class: "bg-red-500 hover:bg-red-600 text-white px-3 py-1 rounded-md",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}
