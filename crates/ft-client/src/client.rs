use crate::{ClientError, Result as ClientResult};

use ft_auth::SessionStore;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::warn;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the FixTrack backend REST API.
///
/// Every request attaches the session's bearer credential when one is
/// present. A 401 from any endpoint clears the session store and surfaces
/// as [`ClientError::SessionExpired`]; callers react with a login redirect,
/// never by feeding the failure into the access-control path.
pub struct ApiClient {
    pub base_url: String,
    session: SessionStore,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://localhost:8000")
    /// * `session` - Shared session slots for bearer injection
    pub fn new(base_url: &str, session: SessionStore) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            client: ReqwestClient::new(),
        }
    }

    /// Create a client with a per-request timeout
    pub fn with_timeout(
        base_url: &str,
        session: SessionStore,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::from_reqwest)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            client,
        })
    }

    /// Build a request with the bearer credential, when one is stored
    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(credential) = self.session.credential() {
            req = req.bearer_auth(credential);
        }

        req
    }

    /// Execute a request and deserialize the successful response body.
    #[track_caller]
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        let location = ErrorLocation::from(Location::caller());

        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Token expired or rejected: drop the stored session so the
            // next guard evaluation redirects to login.
            warn!("Backend rejected the credential (401), clearing session");
            self.session.clear();
            return Err(ClientError::SessionExpired { location });
        }

        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: extract_detail(&body),
                location,
            });
        }

        serde_json::from_str(&body).map_err(ClientError::from)
    }
}

/// Pull the backend's `detail` message out of an error body, falling back
/// to the raw body text.
fn extract_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
