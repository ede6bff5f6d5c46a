//! Calls to the GrowthYari backend.
//!
//! Every endpoint answers with `{"success": bool, "data": T?, "error": string?}`.
//! Functions here are plain async fns over an [`ApiContext`] so commands and tests can
//! point them at any server.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use growthyari_states::CommandSnapshot;

use crate::http::{Client, FilePart, HttpError, RequestBuilder, Response};
use crate::user::{Activity, DashboardStats, ProfileUpdate, UserRecord};
use crate::{BusinessConfig, Session};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] HttpError),
    #[error("request failed with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },
    #[error("request rejected: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// The message the server gave, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            }
            | Self::Rejected(Some(message))
                if !message.trim().is_empty() =>
            {
                message.clone()
            }
            _ => fallback.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    data: Option<T>,
    #[serde(default)]
    error: Option<String>,
}

/// Where and as whom requests are made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiContext {
    /// Already includes the `/api` suffix.
    pub base_url: String,
    pub token: Option<String>,
}

impl ApiContext {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    pub fn from_snapshot(snap: &CommandSnapshot) -> Self {
        let base_url = snap
            .try_state::<BusinessConfig>()
            .map(BusinessConfig::api_url)
            .unwrap_or_else(|| BusinessConfig::default().api_url());
        let token = snap
            .try_state::<Session>()
            .and_then(|session| session.token.clone());
        Self { base_url, token }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer(self.token.as_deref())
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let envelope = response.json::<Envelope<T>>();
    if !response.is_success() {
        let message = envelope.ok().and_then(|e| e.error);
        return Err(ApiError::Status {
            status: response.status,
            message,
        });
    }
    let envelope = envelope.map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.success {
        return Err(ApiError::Rejected(envelope.error));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("missing data".to_string()))
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
    decode(request.send().await?)
}

fn with_json<B: Serialize>(request: RequestBuilder, body: &B) -> ApiResult<RequestBuilder> {
    request
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))
}

#[derive(Debug, Deserialize)]
struct UserData {
    user: UserRecord,
}

#[derive(Debug, Deserialize)]
struct UsersData {
    #[serde(default)]
    users: Vec<UserRecord>,
}

#[derive(Debug, Deserialize)]
struct StatsData {
    #[serde(default)]
    stats: DashboardStats,
}

#[derive(Debug, Deserialize)]
struct ActivityData {
    #[serde(default)]
    activities: Vec<Activity>,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    url: String,
}

/// Registration payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub profession: Vec<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignupResponse {
    pub user: UserRecord,
    #[serde(default)]
    pub token: Option<String>,
}

pub async fn current_user(api: &ApiContext) -> ApiResult<UserRecord> {
    let data: UserData = send(api.authorized(Client::get(api.url("/auth/me")))).await?;
    Ok(data.user)
}

pub async fn dashboard_stats(api: &ApiContext) -> ApiResult<DashboardStats> {
    let data: StatsData = send(api.authorized(Client::get(api.url("/dashboard/stats")))).await?;
    Ok(data.stats)
}

pub async fn recent_activity(api: &ApiContext) -> ApiResult<Vec<Activity>> {
    let data: ActivityData =
        send(api.authorized(Client::get(api.url("/dashboard/activity")))).await?;
    Ok(data.activities)
}

pub async fn update_profile(api: &ApiContext, update: &ProfileUpdate) -> ApiResult<UserRecord> {
    let request = with_json(api.authorized(Client::put(api.url("/users/profile"))), update)?;
    let data: UserData = send(request).await?;
    Ok(data.user)
}

/// Uploads one file and returns its public URL.
pub async fn upload_file(api: &ApiContext, file: FilePart) -> ApiResult<String> {
    let request = api
        .authorized(Client::post(api.url("/upload")))
        .multipart(file);
    let data: UploadData = send(request).await?;
    Ok(data.url)
}

pub async fn signup(api: &ApiContext, request: &SignupRequest) -> ApiResult<SignupResponse> {
    let request = with_json(Client::post(api.url("/auth/register")), request)?;
    send(request).await
}

pub async fn list_users(api: &ApiContext) -> ApiResult<Vec<UserRecord>> {
    let data: UsersData = send(api.authorized(Client::get(api.url("/admin/users")))).await?;
    Ok(data.users)
}

pub async fn verify_user(api: &ApiContext, id: &str) -> ApiResult<UserRecord> {
    moderate(api, id, "verify").await
}

pub async fn suspend_user(api: &ApiContext, id: &str) -> ApiResult<UserRecord> {
    moderate(api, id, "suspend").await
}

async fn moderate(api: &ApiContext, id: &str, verb: &str) -> ApiResult<UserRecord> {
    let url = api.url(&format!("/admin/users/{}/{verb}", urlencoding::encode(id)));
    let data: UserData = send(api.authorized(Client::post(url))).await?;
    Ok(data.user)
}
