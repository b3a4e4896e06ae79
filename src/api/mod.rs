//! Backend HTTP Contract
//!
//! The endpoints the client consumes, how their responses are interpreted,
//! and the [`ActivityApi`] seam every transport implements. Interpretation
//! lives here so the browser and native transports cannot drift apart.

#[cfg(not(target_arch = "wasm32"))]
pub mod http;

#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpApi;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::model::ActivityCollection;

/// Transport-level and decoding failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed
    #[error("Network error: {0}")]
    Transport(String),

    /// A read endpoint answered with a non-2xx status
    #[error("Unexpected status {0}")]
    Status(u16),

    /// A 2xx body could not be decoded
    #[error("Parse error: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// One backend operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Activities,
    Signup { activity: &'a str, email: &'a str },
    Unregister { activity: &'a str, email: &'a str },
    Login,
    Logout,
    CurrentUser,
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Activities | Endpoint::Logout | Endpoint::CurrentUser => Method::Get,
            Endpoint::Signup { .. } | Endpoint::Login => Method::Post,
            Endpoint::Unregister { .. } => Method::Delete,
        }
    }

    /// Path and query with every parameter percent-encoded
    pub fn path(&self) -> String {
        match self {
            Endpoint::Activities => "/activities".to_string(),
            Endpoint::Signup { activity, email } => format!(
                "/activities/{}/signup?email={}",
                urlencoding::encode(activity),
                urlencoding::encode(email)
            ),
            Endpoint::Unregister { activity, email } => format!(
                "/activities/{}/unregister?email={}",
                urlencoding::encode(activity),
                urlencoding::encode(email)
            ),
            Endpoint::Login => "/login".to_string(),
            Endpoint::Logout => "/logout".to_string(),
            Endpoint::CurrentUser => "/user".to_string(),
        }
    }

    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

/// Body of `POST /login`
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

/// Server verdict on a mutating request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// 2xx; `message` from the JSON body when present
    Accepted { message: Option<String> },
    /// Non-2xx; `detail` from the JSON body when it is a string
    Rejected { status: u16, detail: Option<String> },
}

impl MutationOutcome {
    /// Interpret a completed response.
    ///
    /// A 2xx whose body is not JSON is a decode error, handled like a failed
    /// request. A non-2xx body that is not JSON just has no detail.
    pub fn from_response(status: u16, body: &str) -> ApiResult<Self> {
        let parsed = serde_json::from_str::<serde_json::Value>(body);

        if is_success(status) {
            let value = parsed.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(MutationOutcome::Accepted {
                message: string_field(&value, "message"),
            })
        } else {
            Ok(MutationOutcome::Rejected {
                status,
                detail: parsed.ok().and_then(|v| string_field(&v, "detail")),
            })
        }
    }
}

/// Interpret a `GET /activities` response
pub fn parse_activities(status: u16, body: &str) -> ApiResult<ActivityCollection> {
    if !is_success(status) {
        return Err(ApiError::Status(status));
    }
    ActivityCollection::from_json(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Interpret a `GET /user` response: `{user}` or `{}`
pub fn parse_current_user(status: u16, body: &str) -> ApiResult<Option<String>> {
    if !is_success(status) {
        return Err(ApiError::Status(status));
    }
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(string_field(&value, "user").filter(|user| !user.is_empty()))
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn string_field(value: &serde_json::Value, field: &str) -> Option<String> {
    value.get(field).and_then(|v| v.as_str()).map(str::to_string)
}

/// The backend as seen by the dispatcher.
///
/// Futures are not `Send`: the browser transport runs on the page's single
/// thread.
#[async_trait(?Send)]
pub trait ActivityApi {
    async fn list_activities(&self) -> ApiResult<ActivityCollection>;

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<MutationOutcome>;

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<MutationOutcome>;

    async fn login(&self, credentials: &Credentials) -> ApiResult<MutationOutcome>;

    /// Response content is ignored; only transport failures surface
    async fn logout(&self) -> ApiResult<()>;

    /// `None` when no one is logged in
    async fn current_user(&self) -> ApiResult<Option<String>>;
}
