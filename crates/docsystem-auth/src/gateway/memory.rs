//! In-process auth backend for tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use docsystem_core::error::AppError;
use docsystem_core::result::AppResult;
use docsystem_entity::auth::{
    AuthMessage, AuthSession, AuthUser, Credentials, LogoutRequest, RefreshRequest,
    RegisterRequest, ResetPasswordRequest, VerifyEmailRequest,
};

use super::AuthGateway;
use crate::password::PasswordHasher;

const INVALID_CREDENTIALS: &str = "Неверный email или пароль";

#[derive(Debug)]
struct Account {
    user: AuthUser,
    password_hash: String,
    verification_code: Option<String>,
    reset_code: Option<String>,
}

#[derive(Debug, Default)]
struct Store {
    /// Keyed by lowercase e-mail.
    accounts: HashMap<String, Account>,
    /// Refresh token -> account key.
    refresh_tokens: HashMap<String, String>,
    next_id: i64,
}

/// Accounts with Argon2 hashes, UUID tokens and six-digit codes.
///
/// Codes are not mailed anywhere; they are logged and can be read back
/// with [`verification_code`](Self::verification_code) and
/// [`reset_code`](Self::reset_code).
#[derive(Debug, Default)]
pub struct InMemoryAuthGateway {
    store: RwLock<Store>,
    hasher: PasswordHasher,
}

impl InMemoryAuthGateway {
    /// Create an empty backend with no accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending e-mail verification code of an account.
    pub async fn verification_code(&self, email: &str) -> Option<String> {
        let store = self.store.read().await;
        store
            .accounts
            .get(&key(email))
            .and_then(|a| a.verification_code.clone())
    }

    /// Pending password reset code of an account.
    pub async fn reset_code(&self, email: &str) -> Option<String> {
        let store = self.store.read().await;
        store
            .accounts
            .get(&key(email))
            .and_then(|a| a.reset_code.clone())
    }

    /// Number of live refresh tokens.
    pub async fn active_sessions(&self) -> usize {
        self.store.read().await.refresh_tokens.len()
    }
}

fn key(email: &str) -> String {
    email.trim().to_lowercase()
}

fn six_digit_code() -> String {
    format!("{:06}", Uuid::new_v4().as_u128() % 1_000_000)
}

fn issue_session(store: &mut Store, account_key: &str, user: AuthUser) -> AuthSession {
    let refresh_token = Uuid::new_v4().to_string();
    store
        .refresh_tokens
        .insert(refresh_token.clone(), account_key.to_string());

    AuthSession {
        user,
        access_token: Uuid::new_v4().to_string(),
        refresh_token: Some(refresh_token),
    }
}

#[async_trait]
impl AuthGateway for InMemoryAuthGateway {
    fn gateway_type(&self) -> &str {
        "memory"
    }

    async fn login(&self, credentials: &Credentials) -> AppResult<AuthSession> {
        let account_key = key(&credentials.email);

        let (password_hash, user) = {
            let store = self.store.read().await;
            let account = store
                .accounts
                .get(&account_key)
                .ok_or_else(|| AppError::authentication(INVALID_CREDENTIALS))?;
            (account.password_hash.clone(), account.user.clone())
        };

        if !self
            .hasher
            .verify_password(&credentials.password, &password_hash)?
        {
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }
        if !user.email_verified {
            return Err(AppError::authentication("Подтвердите email перед входом"));
        }

        let mut store = self.store.write().await;
        // The password may have been reset while the hash was being checked.
        let unchanged = store
            .accounts
            .get(&account_key)
            .is_some_and(|a| a.password_hash == password_hash);
        if !unchanged {
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        Ok(issue_session(&mut store, &account_key, user))
    }

    async fn register(&self, request: &RegisterRequest) -> AppResult<AuthMessage> {
        let account_key = key(&request.email);
        let password_hash = self.hasher.hash_password(&request.password)?;
        let code = six_digit_code();

        let mut store = self.store.write().await;
        if store.accounts.contains_key(&account_key) {
            return Err(AppError::conflict(
                "Пользователь с таким email уже существует",
            ));
        }

        store.next_id += 1;
        let user = AuthUser {
            id: store.next_id,
            email: request.email.trim().to_string(),
            name: request.name.clone(),
            email_verified: false,
        };
        store.accounts.insert(
            account_key,
            Account {
                user,
                password_hash,
                verification_code: Some(code.clone()),
                reset_code: None,
            },
        );

        info!(email = %request.email, %code, "Verification code issued");
        Ok(AuthMessage::new(format!(
            "Код подтверждения отправлен на {}",
            request.email
        )))
    }

    async fn verify_email(&self, request: &VerifyEmailRequest) -> AppResult<AuthMessage> {
        let mut store = self.store.write().await;
        let account = store
            .accounts
            .get_mut(&key(&request.email))
            .ok_or_else(|| AppError::not_found("Пользователь не найден"))?;

        if account.user.email_verified {
            return Ok(AuthMessage::new("Email уже подтверждён"));
        }
        if account.verification_code.as_deref() != Some(request.code.as_str()) {
            return Err(AppError::validation("Неверный код подтверждения"));
        }

        account.user.email_verified = true;
        account.verification_code = None;
        Ok(AuthMessage::new(
            "Email подтверждён. Теперь вы можете войти",
        ))
    }

    async fn refresh(&self, request: &RefreshRequest) -> AppResult<AuthSession> {
        let mut store = self.store.write().await;
        let account_key = store
            .refresh_tokens
            .remove(&request.refresh_token)
            .ok_or_else(|| AppError::authentication("Сессия истекла, войдите снова"))?;

        let user = store
            .accounts
            .get(&account_key)
            .map(|a| a.user.clone())
            .ok_or_else(|| AppError::authentication("Сессия истекла, войдите снова"))?;

        Ok(issue_session(&mut store, &account_key, user))
    }

    async fn logout(&self, request: &LogoutRequest) -> AppResult<AuthMessage> {
        if let Some(token) = &request.refresh_token {
            self.store.write().await.refresh_tokens.remove(token);
        }
        Ok(AuthMessage::new("Вы вышли из системы"))
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> AppResult<AuthMessage> {
        let account_key = key(&request.email);

        let (Some(code), Some(new_password)) = (&request.code, &request.new_password) else {
            let mut store = self.store.write().await;
            if let Some(account) = store.accounts.get_mut(&account_key) {
                let code = six_digit_code();
                info!(email = %request.email, %code, "Password reset code issued");
                account.reset_code = Some(code);
            }
            return Ok(AuthMessage::new(
                "Если аккаунт существует, код для сброса пароля отправлен на email",
            ));
        };

        let password_hash = self.hasher.hash_password(new_password)?;

        let mut store = self.store.write().await;
        let account = store
            .accounts
            .get_mut(&account_key)
            .filter(|a| a.reset_code.as_deref() == Some(code.as_str()))
            .ok_or_else(|| AppError::validation("Неверный код сброса пароля"))?;

        account.password_hash = password_hash;
        account.reset_code = None;
        store
            .refresh_tokens
            .retain(|_, owner| *owner != account_key);

        Ok(AuthMessage::new("Пароль изменён"))
    }
}
