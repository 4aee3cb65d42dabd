use crate::config::use_config;
use crate::ui::app_context::use_user_api;
use crate::ui::Route;
use crate::users::{Field, FollowUp, FormMode, MessageKind, UserFormState};
use dioxus::prelude::*;
use tracing::debug;

/// Route `/add`
#[component]
pub fn AddUser() -> Element {
    rsx! {
        UserForm { mode: FormMode::Create }
    }
}

/// Route `/update/:id`
#[component]
pub fn UpdateUser(id: String) -> Element {
    rsx! {
        UserForm { mode: FormMode::from_route_id(Some(&id)) }
    }
}

/// Add/update form. The mode is taken from the first render's props.
#[component]
pub fn UserForm(mode: FormMode) -> Element {
    let config = use_config();
    let api = use_user_api();
    let navigator = use_navigator();
    let mut form = use_signal(|| UserFormState::new(mode.clone(), &config));

    // Pre-fill from the backend in edit mode
    let load_api = api.clone();
    use_effect(move || {
        let FormMode::Edit { id } = form.peek().mode().clone() else {
            return;
        };
        debug!("Loading user {} for editing", id);
        let api = load_api.clone();
        spawn(async move {
            let result = api.get().get_user(&id).await;
            form.write().finish_load(result);
        });
    });

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        let Some(submission) = form.read().submission() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            let result = submission.send(api.get()).await;
            let follow_up = form.write().finish_submit(result);
            match follow_up {
                FollowUp::NavigateToList { after } => {
                    tokio::time::sleep(after).await;
                    navigator.push(Route::UserList {});
                }
                FollowUp::ClearMessage { seq, after } => {
                    tokio::time::sleep(after).await;
                    form.write().clear_message(seq);
                }
            }
        });
    };

    let state = form.read();
    let fields = state.fields().clone();
    let message = state
        .message()
        .map(|m| (m.text.clone(), message_class(m.kind)));
    let title = state.mode().title();
    let submit_label = state.mode().submit_label();
    drop(state);

    rsx! {
        div { class: "flex justify-center items-center min-h-screen bg-gradient",
            form {
                class: "max-w-sm w-full bg-white p-6 rounded-lg border border-blue-700 shadow-xl",
                onsubmit: on_submit,
                h2 { class: "mb-5 flex justify-center items-center font-bold text-black", "{title}" }

                if let Some((text, class)) = message {
                    div { class: class, "{text}" }
                }

                TextField {
                    id: "name",
                    label: "Name",
                    input_type: "text",
                    value: fields.name,
                    oninput: move |value: String| form.write().set_field(Field::Name, value),
                }
                TextField {
                    id: "email",
                    label: "Email",
                    input_type: "email",
                    value: fields.email,
                    oninput: move |value: String| form.write().set_field(Field::Email, value),
                }
                TextField {
                    id: "company_name",
                    label: "Company name",
                    input_type: "text",
                    value: fields.company_name,
                    oninput: move |value: String| form.write().set_field(Field::CompanyName, value),
                }

                button {
                    r#type: "submit",
                    class: "text-white bg-purple-500 hover:bg-purple-600 font-medium rounded-lg text-sm w-full px-5 py-2.5 text-center",
                    "{submit_label}"
                }
            }
        }
    }
}

fn message_class(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Success => "mb-4 p-3 rounded-lg text-center bg-green-100 text-green-800",
        MessageKind::Failure => "mb-4 p-3 rounded-lg text-center bg-red-100 text-red-800",
    }
}

/// Required, labelled text input
#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "mb-5",
            label { r#for: id, class: "block mb-2 text-sm font-medium text-gray-900", "{label}" }
            input {
                r#type: input_type,
                id: id,
                class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5",
                placeholder: label,
                required: true,
                value: "{value}",
                oninput: move |event| oninput.call(event.value()),
            }
        }
    }
}
