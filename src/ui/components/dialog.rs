use dioxus::prelude::*;

/// Modal yes/no prompt. Clicking the backdrop counts as "no".
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "OK".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center z-50",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "bg-white rounded-lg p-6 max-w-md w-full mx-4 shadow-xl",
                onclick: move |evt| evt.stop_propagation(),
                p { class: "text-gray-800 mb-6", "{message}" }
                div { class: "flex gap-3 justify-end",
                    button {
                        class: "px-4 py-2 bg-gray-200 hover:bg-gray-300 text-gray-900 rounded-lg",
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                    button {
                        class: "px-4 py-2 bg-red-500 hover:bg-red-600 text-white rounded-lg",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

/// Modal notice that must be dismissed
#[component]
pub fn AlertDialog(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "fixed inset-0 bg-black/50 flex items-center justify-center z-50",
            div { class: "bg-white rounded-lg p-6 max-w-md w-full mx-4 shadow-xl",
                p { class: "text-gray-800 mb-6", "{message}" }
                div { class: "flex justify-end",
                    button {
                        class: "px-4 py-2 bg-purple-500 hover:bg-purple-600 text-white rounded-lg",
                        onclick: move |_| on_dismiss.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delete_prompt() -> Element {
        rsx! {
            ConfirmDialog {
                message: "Are you sure you want to delete this user?".to_string(),
                on_confirm: move |_| {},
                on_cancel: move |_| {},
            }
        }
    }

    #[test]
    fn test_confirm_dialog_defaults_to_ok_and_cancel() {
        let mut dom = VirtualDom::new(delete_prompt);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Are you sure you want to delete this user?"));
        let cancel = html.find("Cancel</button>").unwrap();
        let ok = html.find("OK</button>").unwrap();
        assert!(cancel < ok);
    }
}
