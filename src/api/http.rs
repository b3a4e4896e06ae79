//! Native HTTP Transport
//!
//! reqwest-backed [`ActivityApi`] with a cookie store, so a login carries
//! over to later mutations the same way the browser's session cookie does.

use async_trait::async_trait;
use reqwest::Client;

use super::{
    parse_activities, parse_current_user, ActivityApi, ApiError, ApiResult, Credentials,
    Endpoint, Method, MutationOutcome,
};
use crate::model::ActivityCollection;

/// Backend client for non-browser hosts
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request and return `(status, body)`
    async fn send(
        &self,
        endpoint: Endpoint<'_>,
        credentials: Option<&Credentials>,
    ) -> ApiResult<(u16, String)> {
        let url = endpoint.url(&self.base_url);
        tracing::debug!(method = ?endpoint.method(), %url, "Sending request");

        let request = match endpoint.method() {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Delete => self.client.delete(&url),
        };
        let request = match credentials {
            Some(credentials) => request.json(credentials),
            None => request,
        };

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        tracing::debug!(%url, status, "Received response");
        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl ActivityApi for HttpApi {
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

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Transport("request timed out".to_string())
    } else if e.is_connect() {
        ApiError::Transport(format!("server unreachable: {}", e))
    } else {
        ApiError::Transport(e.to_string())
    }
}
