//! Page state for the users screens, independent of the UI toolkit.

pub mod filter;
pub mod form;
pub mod list;

pub use filter::{filter_users, is_search_active, match_summary};
pub use form::{Field, FollowUp, FormMessage, FormMode, MessageKind, Submission, UserFormState};
pub use list::{ListView, LoadPhase, UserListState};
