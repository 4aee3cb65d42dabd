use crate::ui::app_context::{get_app_context, AppContextProvider};
use crate::ui::{Route, MAIN_CSS, TAILWIND_CSS};
use dioxus::prelude::*;
use tracing::{debug, error};

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    let Some(context) = get_app_context() else {
        error!("App context missing - call initialize_app_context before launch");
        return rsx! {
            p { class: "p-6 text-red-700", "Application was not initialized." }
        };
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        AppContextProvider { context: context,
            Router::<Route> {}
        }
    }
}
