//! HTTP API Client
//!
//! Talks to the activities backend with `fetch`. Paths, percent-encoding and
//! response interpretation come from the engine so this file only moves
//! bytes.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use web_sys::RequestCredentials;

use campus_signup::api::{parse_activities, parse_current_user};
use campus_signup::{
    ActivityApi, ActivityCollection, ApiError, ApiResult, Credentials, Endpoint, Method,
    MutationOutcome,
};

/// Local storage key for an API base override
const API_BASE_KEY: &str = "campus_api_url";

/// Get the API base URL from local storage, or the page's own origin
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_default();
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// `fetch`-backed backend client
pub struct GlooApi {
    base_url: String,
}

impl GlooApi {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    async fn send(
        &self,
        endpoint: Endpoint<'_>,
        credentials: Option<&Credentials>,
    ) -> ApiResult<(u16, String)> {
        let url = endpoint.url(&self.base_url);

        let builder: RequestBuilder = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        };
        // Session cookie must ride along even when the API is on another origin
        let builder = builder.credentials(RequestCredentials::Include);

        let request = match credentials {
            Some(credentials) => builder.json(credentials),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(format!("Request build error: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl ActivityApi for GlooApi {
    async fn list_activities(&self) -> ApiResult<ActivityCollection> {
        let (status, body) = self.send(Endpoint::Activities, None).await?;
        parse_activities(status, &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<MutationOutcome> {
        let (status, body) = self.send(Endpoint::Signup { activity, email }, None).await?;
        MutationOutcome::from_response(status, &body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<MutationOutcome> {
        let (status, body) = self
            .send(Endpoint::Unregister { activity, email }, None)
            .await?;
        MutationOutcome::from_response(status, &body)
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<MutationOutcome> {
        let (status, body) = self.send(Endpoint::Login, Some(credentials)).await?;
        MutationOutcome::from_response(status, &body)
    }

    async fn logout(&self) -> ApiResult<()> {
        self.send(Endpoint::Logout, None).await.map(|_| ())
    }

    async fn current_user(&self) -> ApiResult<Option<String>> {
        let (status, body) = self.send(Endpoint::CurrentUser, None).await?;
        parse_current_user(status, &body)
    }
}
