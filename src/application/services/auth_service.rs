//! Authentication service: password login and bearer token verification.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::PasswordHasher;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// User ID as a decimal string.
    pub sub: String,
    pub email: String,
    pub roles: Vec<String>,
    pub iat: u64,
    pub exp: u64,
}

impl Claims {
    /// Parses the subject back into a user ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the subject is not numeric.
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.sub.parse().map_err(|_| invalid_token())
    }
}

/// A freshly signed access token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: u64,
}

/// Service issuing and verifying HS256 JWT access tokens.
///
/// Tokens are signed with `jwt_secret` and expire `token_ttl_seconds` after
/// issue. Verification checks the signature, algorithm and `exp`.
pub struct AuthService<U: UserRepository + ?Sized> {
    user_repository: Arc<U>,
    hasher: PasswordHasher,
    jwt_secret: String,
    token_ttl_seconds: u64,
}

impl<U: UserRepository + ?Sized> AuthService<U> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `user_repository` - used to look users up at login
    /// - `hasher` - must use the same scheme that produced stored hashes
    /// - `jwt_secret` - HMAC key for signing and verification
    /// - `token_ttl_seconds` - access token lifetime
    pub fn new(
        user_repository: Arc<U>,
        hasher: PasswordHasher,
        jwt_secret: String,
        token_ttl_seconds: u64,
    ) -> Self {
        Self {
            user_repository,
            hasher,
            jwt_secret,
            token_ttl_seconds,
        }
    }

    /// Exchanges email and password for an access token.
    ///
    /// Unknown email and wrong password produce the same error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the credentials do not match.
    /// Returns [`AppError::Internal`] on database or signing errors.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, AppError> {
        let Some(user) = self.user_repository.find_by_email(email).await? else {
            return Err(invalid_credentials());
        };

        if !self.hasher.verify(password, &user.password_hash).await? {
            tracing::info!(user_id = user.id, "Login rejected: wrong password");
            return Err(invalid_credentials());
        }

        self.issue_token(&user)
    }

    /// Signs an access token for `user`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the expiry overflows or signing fails.
    pub fn issue_token(&self, user: &User) -> Result<IssuedToken, AppError> {
        let iat = Utc::now().timestamp().max(0) as u64;
        let exp = iat.checked_add(self.token_ttl_seconds).ok_or_else(|| {
            tracing::error!(ttl = self.token_ttl_seconds, "Token expiry overflows");
            AppError::internal("Failed to issue token", json!({}))
        })?;
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            roles: user.roles.iter().map(|r| r.name.clone()).collect(),
            iat,
            exp,
        };

        let access_token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to sign access token");
            AppError::internal("Failed to issue token", json!({}))
        })?;

        Ok(IssuedToken {
            access_token,
            expires_in: self.token_ttl_seconds,
        })
    }

    /// Verifies a raw bearer token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for a bad signature, wrong
    /// algorithm, malformed token or expired token.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "Bearer token rejected");
            invalid_token()
        })
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid email or password" }))
}

fn invalid_token() -> AppError {
    AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid or expired token" }))
}
