use crate::api::ApiError;
use crate::models::User;
use crate::users::filter::{filter_users, is_search_active, match_summary};
use tracing::{debug, error};

pub const LOAD_ERROR: &str = "Error fetching data";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this user?";
pub const DELETE_FAILED: &str = "Failed to delete user. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed(String),
}

/// What the list page should render, in priority order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Failed(String),
    /// A search is active and nothing matches it
    NoMatches,
    /// There are no records at all
    Empty,
    Cards(Vec<User>),
}

/// State of the list page.
///
/// The record list is replaced wholesale by the initial fetch and otherwise
/// only shrinks when a delete succeeds. Edits made elsewhere are not reflected
/// until the page is mounted again.
#[derive(Debug, Clone, PartialEq)]
pub struct UserListState {
    users: Vec<User>,
    phase: LoadPhase,
    search_term: String,
    pending_delete: Option<String>,
    alert: Option<String>,
}

impl Default for UserListState {
    fn default() -> Self {
        Self::new()
    }
}

impl UserListState {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            phase: LoadPhase::Loading,
            search_term: String::new(),
            pending_delete: None,
            alert: None,
        }
    }

    pub fn finish_load(&mut self, result: Result<Vec<User>, ApiError>) {
        match result {
            Ok(users) => {
                debug!("Loaded {} user(s)", users.len());
                self.users = users;
                self.phase = LoadPhase::Ready;
            }
            Err(e) => {
                error!("Error fetching users: {}", e);
                self.phase = LoadPhase::Failed(LOAD_ERROR.to_string());
            }
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    pub fn filtered(&self) -> Vec<&User> {
        filter_users(&self.users, &self.search_term)
    }

    /// `Found N users matching "term"` whenever anything has been typed,
    /// whitespace included
    pub fn summary(&self) -> Option<String> {
        if self.search_term.is_empty() {
            return None;
        }
        Some(match_summary(self.filtered().len(), &self.search_term))
    }

    pub fn view(&self) -> ListView {
        match &self.phase {
            LoadPhase::Loading => return ListView::Loading,
            LoadPhase::Failed(message) => return ListView::Failed(message.clone()),
            LoadPhase::Ready => {}
        }

        let filtered = self.filtered();
        if filtered.is_empty() {
            if is_search_active(&self.search_term) {
                ListView::NoMatches
            } else {
                ListView::Empty
            }
        } else {
            ListView::Cards(filtered.into_iter().cloned().collect())
        }
    }

    /// Open the confirmation prompt for deleting `id`
    pub fn request_delete(&mut self, id: String) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Close the prompt and hand back the id that should now be deleted
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    /// Apply the outcome of a delete call. Returns whether the record was removed.
    pub fn finish_delete(&mut self, id: &str, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.users.retain(|user| user.id != id);
                true
            }
            Err(e) => {
                error!("Error deleting user {}: {}", id, e);
                self.alert = Some(DELETE_FAILED.to_string());
                false
            }
        }
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
