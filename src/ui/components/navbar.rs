use crate::ui::Route;
use dioxus::prelude::*;

/// Layout component: navigation links above the current page
#[component]
pub fn Navbar() -> Element {
    let current_route = use_route::<Route>();

    rsx! {
        nav { class: "bg-gray-50",
            div { class: "max-w-screen-xl px-4 py-3 mx-auto",
                div { class: "flex items-center space-x-8 text-sm font-medium",
                    NavLink {
                        route: Route::UserList {},
                        label: "Users",
                        is_active: matches!(current_route, Route::UserList {}),
                    }
                    NavLink {
                        route: Route::AddUser {},
                        label: "Add User",
                        is_active: matches!(current_route, Route::AddUser {}),
                    }
                }
            }
        }
        Outlet::<Route> {}
    }
}

#[component]
fn NavLink(route: Route, label: &'static str, is_active: bool) -> Element {
    rsx! {
        Link {
            to: route,
            class: if is_active { "text-gray-900 underline" } else { "text-gray-900 hover:underline" },
            "{label}"
        }
    }
}
