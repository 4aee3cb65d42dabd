use dioxus::prelude::*;

/// Text input that reports every change to its parent
#[component]
pub fn SearchBar(on_search: EventHandler<String>) -> Element {
    let mut value = use_signal(String::new);

    rsx! {
        div { class: "mb-6",
            input {
                r#type: "text",
                class: "w-full p-3 border border-gray-300 rounded-lg text-gray-900",
                placeholder: "Search by name or email...",
                value: "{value}",
                oninput: move |event| {
                    let text = event.value();
                    value.set(text.clone());
                    on_search.call(text);
                },
            }
        }
    }
}
