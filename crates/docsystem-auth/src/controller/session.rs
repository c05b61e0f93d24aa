//! Session controller over an [`AuthGateway`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use tracing::{info, warn};

use docsystem_core::config::AuthConfig;
use docsystem_core::error::AppError;
use docsystem_core::result::AppResult;
use docsystem_entity::auth::{
    AuthMessage, AuthSession, AuthUser, Credentials, LogoutRequest, RefreshRequest,
    RegisterRequest, ResetPasswordRequest, VerifyEmailRequest,
};

use super::guard::LoadingGuard;
use super::state::AuthState;
use crate::gateway::AuthGateway;
use crate::validate::RequestValidator;

/// Holds the signed-in user and tokens, and allows one request at a time.
///
/// The state lock is only taken after the gateway has answered, never
/// across a network call.
#[derive(Debug, Clone)]
pub struct AuthController {
    gateway: Arc<dyn AuthGateway>,
    validator: RequestValidator,
    state: Arc<RwLock<AuthState>>,
    loading: Arc<AtomicBool>,
}

impl AuthController {
    /// Create a controller with an empty session.
    pub fn new(gateway: Arc<dyn AuthGateway>, config: &AuthConfig) -> Self {
        Self {
            gateway,
            validator: RequestValidator::new(config),
            state: Arc::new(RwLock::new(AuthState::default())),
            loading: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Current state.
    pub async fn snapshot(&self) -> AuthState {
        let mut state = self.state.read().await.clone();
        state.is_loading = self.is_loading();
        state
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Validate the credentials, sign in and store the session.
    pub async fn login(&self, credentials: Credentials) -> AppResult<AuthUser> {
        let _guard = LoadingGuard::acquire(&self.loading)?;

        let result = match self.validator.credentials(&credentials) {
            Ok(()) => self.gateway.login(&credentials).await,
            Err(e) => Err(e),
        };

        let session = self.record(result).await?;
        info!(user_id = session.user.id, "Signed in");
        Ok(self.apply_session(session).await)
    }

    /// Validate and submit a registration; no session is stored.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthMessage> {
        let _guard = LoadingGuard::acquire(&self.loading)?;
        let result = match self.validator.register(&request) {
            Ok(()) => self.gateway.register(&request).await,
            Err(e) => Err(e),
        };
        self.record(result).await
    }

    /// Confirm an e-mail address with the code sent at registration.
    pub async fn verify_email(&self, request: VerifyEmailRequest) -> AppResult<AuthMessage> {
        let _guard = LoadingGuard::acquire(&self.loading)?;
        let result = match self.validator.verify_email(&request) {
            Ok(()) => self.gateway.verify_email(&request).await,
            Err(e) => Err(e),
        };
        self.record(result).await
    }

    /// Request a reset code, or set a new password when code and password are given.
    pub async fn reset_password(&self, request: ResetPasswordRequest) -> AppResult<AuthMessage> {
        let _guard = LoadingGuard::acquire(&self.loading)?;
        let result = match self.validator.reset_password(&request) {
            Ok(()) => self.gateway.reset_password(&request).await,
            Err(e) => Err(e),
        };
        self.record(result).await
    }

    /// Exchange the stored refresh token for a new session.
    pub async fn refresh(&self) -> AppResult<AuthUser> {
        let _guard = LoadingGuard::acquire(&self.loading)?;

        let token = self.state.read().await.refresh_token.clone();
        let result = match token {
            Some(refresh_token) => {
                let request = RefreshRequest { refresh_token };
                self.gateway.refresh(&request).await
            }
            None => Err(AppError::authentication("Нет активной сессии")),
        };

        match self.record(result).await {
            Ok(session) => Ok(self.apply_session(session).await),
            Err(e) => {
                self.clear_session().await;
                Err(e)
            }
        }
    }

    /// Sign out. Local state is cleared even if the backend call fails.
    pub async fn logout(&self) -> AppResult<AuthMessage> {
        let _guard = LoadingGuard::acquire(&self.loading)?;

        let request = LogoutRequest {
            refresh_token: self.state.read().await.refresh_token.clone(),
        };
        let result = self.gateway.logout(&request).await;

        let mut state = self.state.write().await;
        *state = AuthState::default();
        drop(state);

        match result {
            Ok(message) => Ok(message),
            Err(e) => {
                warn!(error = %e, "Backend logout failed; local session cleared");
                Ok(AuthMessage::new("Вы вышли из системы"))
            }
        }
    }

    /// Store the outcome's error message, or clear it on success.
    async fn record<T>(&self, result: AppResult<T>) -> AppResult<T> {
        let mut state = self.state.write().await;
        match &result {
            Ok(_) => state.last_error = None,
            Err(e) => state.last_error = Some(e.message.clone()),
        }
        result
    }

    async fn apply_session(&self, session: AuthSession) -> AuthUser {
        let mut state = self.state.write().await;
        state.user = Some(session.user.clone());
        state.access_token = Some(session.access_token);
        state.refresh_token = session.refresh_token;
        session.user
    }

    async fn clear_session(&self) {
        let mut state = self.state.write().await;
        state.user = None;
        state.access_token = None;
        state.refresh_token = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::InMemoryAuthGateway;
    use async_trait::async_trait;
    use docsystem_core::error::ErrorKind;
    use tokio::sync::Notify;

    const EMAIL: &str = "novikov@docsystem.ru";
    const PASSWORD: &str = "AdminPanel-2026";

    fn credentials(password: &str) -> Credentials {
        Credentials {
            email: EMAIL.to_string(),
            password: password.to_string(),
        }
    }

    async fn controller_with_verified_account() -> (AuthController, Arc<InMemoryAuthGateway>) {
        let gateway = Arc::new(InMemoryAuthGateway::new());
        let controller = AuthController::new(gateway.clone(), &AuthConfig::default());
        controller
            .register(RegisterRequest {
                email: EMAIL.to_string(),
                password: PASSWORD.to_string(),
                name: Some("Новиков Н.Н.".to_string()),
            })
            .await
            .unwrap();
        let code = gateway.verification_code(EMAIL).await.unwrap();
        controller
            .verify_email(VerifyEmailRequest {
                email: EMAIL.to_string(),
                code,
            })
            .await
            .unwrap();
        (controller, gateway)
    }

    #[tokio::test]
    async fn test_login_success_sets_user_and_clears_loading() {
        let (controller, _) = controller_with_verified_account().await;
        let user = controller.login(credentials(PASSWORD)).await.unwrap();
        assert_eq!(user.email, EMAIL);

        let state = controller.snapshot().await;
        assert!(state.is_authenticated());
        assert!(!state.is_loading);
        assert!(state.last_error.is_none());
    }

    #[tokio::test]
    async fn test_login_failure_records_message_and_clears_loading() {
        let (controller, _) = controller_with_verified_account().await;
        let err = controller
            .login(credentials("wrong-password"))
            .await
            .unwrap_err();

        let state = controller.snapshot().await;
        assert!(!state.is_authenticated());
        assert!(!state.is_loading);
        assert_eq!(state.last_error.as_deref(), Some(err.message.as_str()));
    }

    #[tokio::test]
    async fn test_validation_runs_before_gateway() {
        let gateway = Arc::new(InMemoryAuthGateway::new());
        let controller = AuthController::new(gateway.clone(), &AuthConfig::default());
        let err = controller
            .register(RegisterRequest {
                email: "bad-email".to_string(),
                password: "12345678".to_string(),
                name: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(gateway.verification_code("bad-email").await.is_none());
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_refresh_and_logout() {
        let (controller, gateway) = controller_with_verified_account().await;
        controller.login(credentials(PASSWORD)).await.unwrap();
        let before = controller.snapshot().await;

        controller.refresh().await.unwrap();
        let after = controller.snapshot().await;
        assert!(after.access_token().is_some());
        assert_ne!(before.access_token(), after.access_token());

        controller.logout().await.unwrap();
        assert!(!controller.snapshot().await.is_authenticated());
        assert_eq!(gateway.active_sessions().await, 0);
    }

    #[tokio::test]
    async fn test_refresh_without_session_fails() {
        let gateway = Arc::new(InMemoryAuthGateway::new());
        let controller = AuthController::new(gateway, &AuthConfig::default());
        let err = controller.refresh().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    /// Login blocks until released; logout always fails.
    #[derive(Debug, Default)]
    struct StallingGateway {
        release: Notify,
    }

    #[async_trait]
    impl AuthGateway for StallingGateway {
        fn gateway_type(&self) -> &str {
            "stalling"
        }

        async fn login(&self, credentials: &Credentials) -> AppResult<AuthSession> {
            self.release.notified().await;
            Ok(AuthSession {
                user: AuthUser {
                    id: 1,
                    email: credentials.email.clone(),
                    name: None,
                    email_verified: true,
                },
                access_token: "a".to_string(),
                refresh_token: Some("r".to_string()),
            })
        }

        async fn register(&self, _: &RegisterRequest) -> AppResult<AuthMessage> {
            Err(AppError::external_service("unavailable"))
        }

        async fn verify_email(&self, _: &VerifyEmailRequest) -> AppResult<AuthMessage> {
            Err(AppError::external_service("unavailable"))
        }

        async fn refresh(&self, _: &RefreshRequest) -> AppResult<AuthSession> {
            Err(AppError::external_service("unavailable"))
        }

        async fn logout(&self, _: &LogoutRequest) -> AppResult<AuthMessage> {
            Err(AppError::external_service("unavailable"))
        }

        async fn reset_password(&self, _: &ResetPasswordRequest) -> AppResult<AuthMessage> {
            Err(AppError::external_service("unavailable"))
        }
    }

    #[tokio::test]
    async fn test_duplicate_submission_is_rejected_while_in_flight() {
        let gateway = Arc::new(StallingGateway::default());
        let controller = AuthController::new(gateway.clone(), &AuthConfig::default());

        let first = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.login(credentials(PASSWORD)).await })
        };

        while !controller.is_loading() {
            tokio::task::yield_now().await;
        }

        let second = controller.login(credentials(PASSWORD)).await.unwrap_err();
        assert_eq!(second.kind, ErrorKind::Conflict);

        gateway.release.notify_one();
        first.await.unwrap().unwrap();

        assert!(!controller.is_loading());
        assert!(controller.snapshot().await.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_state_when_backend_fails() {
        let gateway = Arc::new(StallingGateway::default());
        let controller = AuthController::new(gateway.clone(), &AuthConfig::default());

        gateway.release.notify_one();
        controller.login(credentials(PASSWORD)).await.unwrap();
        assert!(controller.snapshot().await.is_authenticated());

        controller.logout().await.unwrap();
        let state = controller.snapshot().await;
        assert!(!state.is_authenticated());
        assert!(!state.is_loading);
    }
}
