//! Gateway to the remote auth function.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use docsystem_core::config::AuthConfig;
use docsystem_core::error::{AppError, ErrorKind};
use docsystem_core::result::AppResult;
use docsystem_entity::auth::{
    AuthMessage, AuthSession, Credentials, LogoutRequest, RefreshRequest, RegisterRequest,
    ResetPasswordRequest, VerifyEmailRequest,
};

use super::{AuthAction, AuthGateway};

/// Error body returned by the auth function on a non-2xx status.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    error: Option<String>,
}

/// Posts JSON to `<base_url>?action=<operation>`.
#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    client: Client,
    base_url: Url,
}

impl HttpAuthGateway {
    /// Build a gateway from configuration.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AppError::configuration(format!("Invalid auth base URL '{}': {e}", config.base_url))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self { client, base_url })
    }

    /// URL of one operation.
    pub fn endpoint(&self, action: AuthAction) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("action", action.as_str());
        url
    }

    async fn call<B, R>(&self, action: AuthAction, body: &B) -> AppResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        debug!(%action, "Calling auth service");

        let response = self
            .client
            .post(self.endpoint(action))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    "Сервис авторизации недоступен",
                    e,
                )
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Не удалось прочитать ответ сервиса авторизации",
                e,
            )
        })?;

        if status.is_success() {
            return serde_json::from_slice(&bytes).map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Malformed auth service response to '{action}'"),
                    e,
                )
            });
        }

        let message = serde_json::from_slice::<ErrorPayload>(&bytes)
            .ok()
            .and_then(|p| p.error)
            .unwrap_or_else(|| format!("Ошибка сервиса авторизации ({})", status.as_u16()));

        warn!(%action, status = status.as_u16(), error = %message, "Auth service refused request");

        Err(AppError::new(error_kind(status), message))
    }
}

fn error_kind(status: StatusCode) -> ErrorKind {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ErrorKind::Validation,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ErrorKind::Authentication,
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::CONFLICT => ErrorKind::Conflict,
        _ => ErrorKind::ExternalService,
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    fn gateway_type(&self) -> &str {
        "http"
    }

    async fn login(&self, credentials: &Credentials) -> AppResult<AuthSession> {
        self.call(AuthAction::Login, credentials).await
    }

    async fn register(&self, request: &RegisterRequest) -> AppResult<AuthMessage> {
        self.call(AuthAction::Register, request).await
    }

    async fn verify_email(&self, request: &VerifyEmailRequest) -> AppResult<AuthMessage> {
        self.call(AuthAction::VerifyEmail, request).await
    }

    async fn refresh(&self, request: &RefreshRequest) -> AppResult<AuthSession> {
        self.call(AuthAction::Refresh, request).await
    }

    async fn logout(&self, request: &LogoutRequest) -> AppResult<AuthMessage> {
        self.call(AuthAction::Logout, request).await
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> AppResult<AuthMessage> {
        self.call(AuthAction::ResetPassword, request).await
    }
}
