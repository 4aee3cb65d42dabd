use crate::api::error::ApiError;
use crate::models::{CreatedUser, User, UserDraft};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Trait for the users backend (allows mocking for tests)
#[async_trait::async_trait]
pub trait UserApi: Send + Sync {
    /// GET /users
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    /// GET /users/:id
    async fn get_user(&self, id: &str) -> Result<User, ApiError>;
    /// POST /users. Any 2xx counts as created; the assigned id is only
    /// returned when the body carries one.
    async fn create_user(&self, draft: &UserDraft) -> Result<Option<CreatedUser>, ApiError>;
    /// PUT /users/:id
    async fn update_user(&self, id: &str, draft: &UserDraft) -> Result<(), ApiError>;
    /// DELETE /users/:id
    async fn delete_user(&self, id: &str) -> Result<(), ApiError>;
}

/// Validate a backend origin and strip trailing slashes.
pub fn normalize_base_url(url: &str) -> Result<String, ApiError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ApiError::InvalidUrl("URL cannot be empty".into()));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ApiError::InvalidUrl(format!(
            "{} must start with http:// or https://",
            url
        )));
    }
    Ok(url.trim_end_matches('/').to_string())
}

/// REST client for the users backend
#[derive(Clone)]
pub struct HttpUserApi {
    client: Client,
    base_url: String,
}

impl HttpUserApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("user-admin/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: &str) -> String {
        format!("{}/users/{}", self.base_url, id)
    }
}

/// Turn a non-2xx response into `ApiError::Server`, keeping the body text.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    warn!("✗ Users API error: {} {}", status, message);
    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_success(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[async_trait::async_trait]
impl UserApi for HttpUserApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.users_url();
        debug!("📡 Users API: GET {}", url);

        let response = self.client.get(&url).send().await?;
        let users: Vec<User> = decode(response).await?;

        info!("✓ Fetched {} user(s)", users.len());
        Ok(users)
    }

    async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        let url = self.user_url(id);
        debug!("📡 Users API: GET {}", url);

        let response = self.client.get(&url).send().await?;
        decode(response).await
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<Option<CreatedUser>, ApiError> {
        let url = self.users_url();
        debug!("📡 Users API: POST {} name='{}'", url, draft.name);

        let response = self.client.post(&url).json(draft).send().await?;
        let body = ensure_success(response).await?.text().await?;

        match serde_json::from_str::<CreatedUser>(&body) {
            Ok(created) => {
                info!("✓ Created user {}", created.id);
                Ok(Some(created))
            }
            Err(e) => {
                warn!("Created user, but response carried no id: {}", e);
                Ok(None)
            }
        }
    }

    async fn update_user(&self, id: &str, draft: &UserDraft) -> Result<(), ApiError> {
        let url = self.user_url(id);
        debug!("📡 Users API: PUT {}", url);

        let response = self.client.put(&url).json(draft).send().await?;
        ensure_success(response).await?;

        info!("✓ Updated user {}", id);
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let url = self.user_url(id);
        debug!("📡 Users API: DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        ensure_success(response).await?;

        info!("✓ Deleted user {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("http://localhost:5000//").unwrap(),
            "http://localhost:5000"
        );
    }

    #[test]
    fn test_normalize_rejects_empty_and_schemeless() {
        assert!(matches!(
            normalize_base_url("  "),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            normalize_base_url("localhost:5000"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_user_urls() {
        let api = HttpUserApi::new("http://localhost:5000/", Duration::from_secs(5)).unwrap();
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.users_url(), "http://localhost:5000/users");
        assert_eq!(api.user_url("f922"), "http://localhost:5000/users/f922");
    }
}
