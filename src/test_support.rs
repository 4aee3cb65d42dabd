// Test support utilities for both unit and integration tests

use crate::api::{ApiError, UserApi};
use crate::models::{CreatedUser, User, UserDraft};
use std::collections::HashSet;
use std::sync::Mutex;

/// Backend operations, used to script failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// A call received by the mock, with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Get(String),
    Create(UserDraft),
    Update(String, UserDraft),
    Delete(String),
}

/// Mock users backend for testing
///
/// Keeps records in memory and remembers every call so tests can assert on
/// exactly which requests a flow issued.
#[derive(Default)]
pub struct MockUserApi {
    users: Mutex<Vec<User>>,
    calls: Mutex<Vec<ApiCall>>,
    failing: Mutex<HashSet<Operation>>,
    next_id: Mutex<u32>,
}

impl MockUserApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let mock = Self::default();
        *mock.users.lock().unwrap() = users;
        mock
    }

    /// Make every subsequent call of this kind fail with a 500
    pub fn fail(&self, operation: Operation) {
        self.failing.lock().unwrap().insert(operation);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    fn record(&self, call: ApiCall, operation: Operation) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(&operation) {
            return Err(ApiError::Server {
                status: 500,
                message: format!("{:?} failed", operation),
            });
        }
        Ok(())
    }

    fn not_found(id: &str) -> ApiError {
        ApiError::Server {
            status: 404,
            message: format!("User {} not found", id),
        }
    }
}

#[async_trait::async_trait]
impl UserApi for MockUserApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.record(ApiCall::List, Operation::List)?;
        Ok(self.users())
    }

    async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        self.record(ApiCall::Get(id.to_string()), Operation::Get)?;
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<Option<CreatedUser>, ApiError> {
        self.record(ApiCall::Create(draft.clone()), Operation::Create)?;

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = format!("mock-{}", *next_id);

        self.users.lock().unwrap().push(User {
            id: id.clone(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            company_name: draft.company_name.clone(),
        });

        Ok(Some(CreatedUser { id }))
    }

    async fn update_user(&self, id: &str, draft: &UserDraft) -> Result<(), ApiError> {
        self.record(
            ApiCall::Update(id.to_string(), draft.clone()),
            Operation::Update,
        )?;

        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        user.name = draft.name.clone();
        user.email = draft.email.clone();
        user.company_name = draft.company_name.clone();
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.record(ApiCall::Delete(id.to_string()), Operation::Delete)?;

        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

/// The two records used throughout the UI tests
pub fn sample_users() -> Vec<User> {
    vec![
        User {
            id: "f922".to_string(),
            name: "swaraj".to_string(),
            email: "Swaraj@gmail.com".to_string(),
            company_name: "cv".to_string(),
        },
        User {
            id: "f923".to_string(),
            name: "sourabh".to_string(),
            email: "alex@gmail.com".to_string(),
            company_name: "xyz".to_string(),
        },
    ]
}
