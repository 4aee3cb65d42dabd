use crate::api::{ApiError, UserApi};
use crate::config::Config;
use crate::models::{User, UserDraft};
use std::time::Duration;
use tracing::{debug, error};

pub const ADDED: &str = "User added successfully!";
pub const UPDATED: &str = "User updated successfully!";
pub const ADD_FAILED: &str = "Failed to add user. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update user. Please try again.";
pub const LOAD_FAILED: &str = "Failed to load user. Please try again.";

/// Create or edit, fixed for the lifetime of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

impl FormMode {
    /// A missing or empty route id means create mode
    pub fn from_route_id(id: Option<&str>) -> Self {
        match id {
            Some(id) if !id.is_empty() => FormMode::Edit { id: id.to_string() },
            _ => FormMode::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "UPDATE USER"
        } else {
            "ADD USER"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() {
            "Update User"
        } else {
            "Add User"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    CompanyName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
    seq: u64,
}

/// What the view must schedule after a submit completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    NavigateToList { after: Duration },
    /// Clear the message tagged `seq` once `after` has elapsed
    ClearMessage { seq: u64, after: Duration },
}

/// A validated submission, detached from the form so it can be sent while
/// the form keeps accepting input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    mode: FormMode,
    draft: UserDraft,
}

impl Submission {
    /// Issue the create or update call
    pub async fn send(&self, api: &dyn UserApi) -> Result<(), ApiError> {
        match &self.mode {
            FormMode::Create => {
                if let Some(created) = api.create_user(&self.draft).await? {
                    debug!("Backend assigned id {}", created.id);
                }
                Ok(())
            }
            FormMode::Edit { id } => api.update_user(id, &self.draft).await,
        }
    }
}

/// State of the add/update form
#[derive(Debug, Clone, PartialEq)]
pub struct UserFormState {
    mode: FormMode,
    fields: UserDraft,
    message: Option<FormMessage>,
    next_seq: u64,
    navigate_delay: Duration,
    message_timeout: Duration,
}

impl UserFormState {
    pub fn new(mode: FormMode, config: &Config) -> Self {
        Self {
            mode,
            fields: UserDraft::default(),
            message: None,
            next_seq: 0,
            navigate_delay: config.navigate_delay,
            message_timeout: config.message_timeout,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn fields(&self) -> &UserDraft {
        &self.fields
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::CompanyName => self.fields.company_name = value,
        }
    }

    /// Pre-fill from the record fetched in edit mode
    pub fn finish_load(&mut self, result: Result<User, ApiError>) {
        match result {
            Ok(user) => self.fields = user.draft(),
            Err(e) => {
                error!("Error loading user: {}", e);
                self.show(MessageKind::Failure, LOAD_FAILED);
            }
        }
    }

    /// `None` while any required field is still empty
    pub fn submission(&self) -> Option<Submission> {
        if !self.fields.is_complete() {
            debug!("Submit ignored, required fields missing");
            return None;
        }
        Some(Submission {
            mode: self.mode.clone(),
            draft: self.fields.clone(),
        })
    }

    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> FollowUp {
        let editing = self.mode.is_edit();
        match result {
            Ok(()) if editing => {
                self.show(MessageKind::Success, UPDATED);
                FollowUp::NavigateToList {
                    after: self.navigate_delay,
                }
            }
            Ok(()) => {
                self.fields = UserDraft::default();
                let seq = self.show(MessageKind::Success, ADDED);
                FollowUp::ClearMessage {
                    seq,
                    after: self.message_timeout,
                }
            }
            Err(e) => {
                let action = if editing { "updating" } else { "adding" };
                error!("Error {} user: {}", action, e);
                let text = if editing { UPDATE_FAILED } else { ADD_FAILED };
                let seq = self.show(MessageKind::Failure, text);
                FollowUp::ClearMessage {
                    seq,
                    after: self.message_timeout,
                }
            }
        }
    }

    /// Clear the message if it is still the one tagged `seq`
    pub fn clear_message(&mut self, seq: u64) {
        if self.message.as_ref().is_some_and(|m| m.seq == seq) {
            self.message = None;
        }
    }

    fn show(&mut self, kind: MessageKind, text: &str) -> u64 {
        self.next_seq += 1;
        self.message = Some(FormMessage {
            kind,
            text: text.to_string(),
            seq: self.next_seq,
        });
        self.next_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_users, ApiCall, MockUserApi, Operation};

    fn fill(form: &mut UserFormState, name: &str, email: &str, company: &str) {
        form.set_field(Field::Name, name.to_string());
        form.set_field(Field::Email, email.to_string());
        form.set_field(Field::CompanyName, company.to_string());
    }

    async fn submit(form: &mut UserFormState, api: &MockUserApi) -> FollowUp {
        let submission = form.submission().expect("form should be complete");
        let result = submission.send(api).await;
        form.finish_submit(result)
    }

    #[test]
    fn test_mode_from_route_id() {
        assert_eq!(FormMode::from_route_id(None), FormMode::Create);
        assert_eq!(FormMode::from_route_id(Some("")), FormMode::Create);
        assert_eq!(
            FormMode::from_route_id(Some("f922")),
            FormMode::Edit {
                id: "f922".to_string()
            }
        );
        assert_eq!(FormMode::Create.title(), "ADD USER");
        assert_eq!(FormMode::from_route_id(Some("f922")).submit_label(), "Update User");
    }

    #[test]
    fn test_incomplete_form_cannot_submit() {
        let mut form = UserFormState::new(FormMode::Create, &Config::default());
        assert!(form.submission().is_none());

        form.set_field(Field::Name, "New User".to_string());
        form.set_field(Field::Email, "not-an-email".to_string());
        assert!(form.submission().is_none());

        form.set_field(Field::CompanyName, "New Co".to_string());
        assert!(form.submission().is_some());
    }

    #[tokio::test]
    async fn test_create_posts_fields_and_clears_form() {
        let api = MockUserApi::new();
        let mut form = UserFormState::new(FormMode::Create, &Config::default());
        fill(&mut form, "New User", "new@example.com", "New Co");

        let follow_up = submit(&mut form, &api).await;

        assert_eq!(
            api.calls(),
            vec![ApiCall::Create(UserDraft {
                name: "New User".to_string(),
                email: "new@example.com".to_string(),
                company_name: "New Co".to_string(),
            })]
        );
        assert_eq!(form.fields(), &UserDraft::default());
        let message = form.message().unwrap();
        assert_eq!(message.kind, MessageKind::Success);
        assert_eq!(message.text, ADDED);
        assert!(matches!(
            follow_up,
            FollowUp::ClearMessage { after, .. } if after == Duration::from_millis(3000)
        ));
    }

    #[tokio::test]
    async fn test_failed_create_keeps_fields() {
        let api = MockUserApi::new();
        api.fail(Operation::Create);
        let mut form = UserFormState::new(FormMode::Create, &Config::default());
        fill(&mut form, "New User", "new@example.com", "New Co");

        let follow_up = submit(&mut form, &api).await;

        assert_eq!(form.fields().name, "New User");
        assert_eq!(form.message().unwrap().kind, MessageKind::Failure);
        assert_eq!(form.message().unwrap().text, ADD_FAILED);
        assert!(matches!(follow_up, FollowUp::ClearMessage { .. }));
    }

    #[tokio::test]
    async fn test_edit_prefills_and_puts_changes() {
        let api = MockUserApi::with_users(sample_users());
        let mode = FormMode::from_route_id(Some("f922"));
        let mut form = UserFormState::new(mode, &Config::default());

        form.finish_load(api.get_user("f922").await);
        assert_eq!(form.fields().name, "swaraj");
        assert_eq!(form.fields().company_name, "cv");

        form.set_field(Field::Name, "Swaraj Updated".to_string());
        form.set_field(Field::Email, "swaraj.updated@example.com".to_string());
        let follow_up = submit(&mut form, &api).await;

        let expected = UserDraft {
            name: "Swaraj Updated".to_string(),
            email: "swaraj.updated@example.com".to_string(),
            company_name: "cv".to_string(),
        };
        assert_eq!(
            api.calls(),
            vec![
                ApiCall::Get("f922".to_string()),
                ApiCall::Update("f922".to_string(), expected),
            ]
        );
        assert_eq!(form.message().unwrap().text, UPDATED);
        assert_eq!(
            follow_up,
            FollowUp::NavigateToList {
                after: Duration::from_millis(1500)
            }
        );
    }

    #[tokio::test]
    async fn test_failed_update_does_not_navigate() {
        let api = MockUserApi::with_users(sample_users());
        api.fail(Operation::Update);
        let mut form = UserFormState::new(FormMode::from_route_id(Some("f923")), &Config::default());
        form.finish_load(api.get_user("f923").await);

        let follow_up = submit(&mut form, &api).await;

        assert_eq!(form.message().unwrap().text, UPDATE_FAILED);
        assert!(matches!(follow_up, FollowUp::ClearMessage { .. }));
        assert_eq!(form.fields().name, "sourabh");
    }

    #[tokio::test]
    async fn test_failed_load_leaves_fields_empty() {
        let api = MockUserApi::new();
        let mut form = UserFormState::new(FormMode::from_route_id(Some("gone")), &Config::default());

        form.finish_load(api.get_user("gone").await);

        assert_eq!(form.fields(), &UserDraft::default());
        assert_eq!(form.message().unwrap().text, LOAD_FAILED);
    }

    #[tokio::test]
    async fn test_stale_clear_keeps_newer_message() {
        let api = MockUserApi::new();
        api.fail(Operation::Create);
        let mut form = UserFormState::new(FormMode::Create, &Config::default());
        fill(&mut form, "a", "b", "c");

        let first = submit(&mut form, &api).await;
        let second = submit(&mut form, &api).await;

        let (FollowUp::ClearMessage { seq: old, .. }, FollowUp::ClearMessage { seq: new, .. }) =
            (first, second)
        else {
            panic!("expected message clears");
        };

        form.clear_message(old);
        assert!(form.message().is_some());
        form.clear_message(new);
        assert!(form.message().is_none());
    }
}
