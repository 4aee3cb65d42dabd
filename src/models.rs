use serde::{Deserialize, Serialize};

/// A user record as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Server-assigned, opaque identifier
    pub id: String,
    pub name: String,
    pub email: String,
    pub company_name: String,
}

impl User {
    /// The editable part of this record
    pub fn draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            company_name: self.company_name.clone(),
        }
    }
}

/// Body of create and update requests, and the field state of the form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub company_name: String,
}

impl UserDraft {
    /// Every field is required before a draft can be submitted
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.company_name.is_empty()
    }
}

/// Response of the create call. The backend echoes the record but only `id`
/// is guaranteed.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreatedUser {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_from_backend_json() {
        let json = r#"{"id":"f922","name":"swaraj","email":"Swaraj@gmail.com","company_name":"cv"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, "f922");
        assert_eq!(user.company_name, "cv");
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let draft = UserDraft {
            name: "New User".to_string(),
            email: "new@example.com".to_string(),
            company_name: "New Co".to_string(),
        };
        let value = serde_json::to_value(&draft).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "New User",
                "email": "new@example.com",
                "company_name": "New Co",
            })
        );
    }

    #[test]
    fn test_draft_requires_every_field() {
        let mut draft = UserDraft {
            name: "a".to_string(),
            email: "b".to_string(),
            company_name: String::new(),
        };
        assert!(!draft.is_complete());

        draft.company_name = "c".to_string();
        assert!(draft.is_complete());
    }

    #[test]
    fn test_created_user_ignores_extra_fields() {
        let json = r#"{"id":"f924","name":"New User","email":"new@example.com","company_name":"New Co"}"#;
        let created: CreatedUser = serde_json::from_str(json).unwrap();
        assert_eq!(created.id, "f924");
    }
}
