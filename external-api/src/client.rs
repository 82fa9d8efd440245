//! Pass-through client for the external user/post API.
//!
//! # Design
//! Each operation maps to exactly one upstream endpoint and checks the one
//! status code that endpoint returns on success. Bodies are decoded as
//! `serde_json::Value` so whatever the upstream sends is forwarded verbatim;
//! this client never inspects payload fields.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ExternalApiError;

/// Synchronous client for the external user/post API.
///
/// Holds a reusable `ureq` agent and the upstream base URL. Every method
/// performs one blocking HTTP round-trip; async callers should run them on a
/// blocking pool.
#[derive(Debug, Clone)]
pub struct ExternalApiClient {
    agent: ureq::Agent,
    base_url: String,
}

impl ExternalApiClient {
    /// Build a client for the given base URL. A trailing slash is stripped
    /// so path joining stays predictable.
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /users/{id}` — fetch a single user.
    pub fn user_by_id(&self, id: u64) -> Result<Value, ExternalApiError> {
        self.get(&format!("{}/users/{id}", self.base_url), 200)
    }

    /// `GET /users` — fetch every user.
    pub fn all_users(&self) -> Result<Vec<Value>, ExternalApiError> {
        self.get(&format!("{}/users", self.base_url), 200)
    }

    /// `GET /posts?userId={user_id}` — fetch the posts of one user.
    pub fn posts_by_user(&self, user_id: u64) -> Result<Vec<Value>, ExternalApiError> {
        self.get(&format!("{}/posts?userId={user_id}", self.base_url), 200)
    }

    /// `POST /users` — create a resource upstream and return it with the
    /// id the upstream assigned.
    pub fn create_user(&self, user: &Value) -> Result<Value, ExternalApiError> {
        let body =
            serde_json::to_string(user).map_err(|e| ExternalApiError::Encode(e.to_string()))?;
        let response = self
            .agent
            .post(&format!("{}/users", self.base_url))
            .content_type("application/json")
            .send(body.as_bytes())
            .map_err(|e| ExternalApiError::Transport(e.to_string()))?;
        parse(response, 201)
    }

    fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        expected: u16,
    ) -> Result<T, ExternalApiError> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| ExternalApiError::Transport(e.to_string()))?;
        parse(response, expected)
    }
}

/// Read the body, then map the status: 404 becomes `NotFound`, any other
/// unexpected status becomes `Http` carrying the raw body.
fn parse<T: DeserializeOwned>(
    mut response: ureq::http::Response<ureq::Body>,
    expected: u16,
) -> Result<T, ExternalApiError> {
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ExternalApiError::Transport(e.to_string()))?;

    if status == 404 {
        return Err(ExternalApiError::NotFound);
    }
    if status != expected {
        return Err(ExternalApiError::Http { status, body });
    }
    serde_json::from_str(&body).map_err(|e| ExternalApiError::Decode(e.to_string()))
}
