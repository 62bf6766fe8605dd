//! JWT issuing and validation.
//!
//! Access and refresh tokens are HS256 JWTs signed with the same secret and
//! told apart by the `typ` claim. Keys are derived once at startup and shared
//! read-only through `AppState`.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::{
    model::{auth::TokenPairDto, user::Role},
    server::{
        error::{auth::AuthError, internal::InternalError, AppError},
        model::user::User,
    },
};

pub const TOKEN_TYPE_BEARER: &str = "Bearer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

/// JWT claims carried by both token kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a string per JWT convention.
    pub sub: String,
    /// Role at the time of issuing. Authorization re-reads the stored role.
    pub role: Role,
    pub typ: TokenKind,
    pub iat: u64,
    pub exp: u64,
}

impl Claims {
    /// Parses the user id out of `sub`.
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidToken(format!("invalid subject '{}'", self.sub)))
    }
}

/// Freshly issued access and refresh tokens.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

impl TokenPair {
    pub fn into_dto(self) -> TokenPairDto {
        TokenPairDto {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.expires_in,
        }
    }
}

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    /// Creates the token service from the shared secret and token lifetimes.
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            access_ttl,
            refresh_ttl,
        }
    }

    /// Issues an access token and a refresh token for the user.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Both tokens signed with the current time as `iat`
    /// - `Err(AppError::InternalErr(TokenEncoding))` - Signing failed
    pub fn issue_pair(&self, user: &User) -> Result<TokenPair, AppError> {
        let now = Utc::now();

        Ok(TokenPair {
            access_token: self.issue(user.id, user.role, TokenKind::Access, now)?,
            refresh_token: self.issue(user.id, user.role, TokenKind::Refresh, now)?,
            expires_in: self.access_ttl.num_seconds(),
        })
    }

    fn issue(
        &self,
        user_id: i32,
        role: Role,
        kind: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let ttl = match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        };

        let claims = Claims {
            sub: user_id.to_string(),
            role,
            typ: kind,
            iat: unix_seconds(now),
            exp: unix_seconds(now + ttl),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| InternalError::TokenEncoding(e).into())
    }

    /// Verifies signature and expiry and checks the token kind.
    ///
    /// # Arguments
    /// - `token` - Encoded JWT
    /// - `expected` - Kind of token the caller requires
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid and of the expected kind
    /// - `Err(AuthError::TokenExpired)` - `exp` has passed
    /// - `Err(AuthError::WrongTokenType)` - Valid token of the other kind
    /// - `Err(AuthError::InvalidToken)` - Bad signature or malformed token
    pub fn validate(&self, token: &str, expected: TokenKind) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            },
        )?;

        if data.claims.typ != expected {
            return Err(AuthError::WrongTokenType {
                expected: expected.as_str(),
            });
        }

        Ok(data.claims)
    }
}

fn unix_seconds(at: DateTime<Utc>) -> u64 {
    at.timestamp().max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-that-is-at-least-32-bytes";

    fn service() -> TokenService {
        TokenService::new(SECRET, Duration::minutes(15), Duration::days(14))
    }

    fn user(role: Role) -> User {
        let now = Utc::now();
        User {
            id: 7,
            email: "u@example.com".to_string(),
            name: "U".to_string(),
            role,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn issued_access_token_validates() {
        let tokens = service();
        let pair = tokens.issue_pair(&user(Role::Owner)).unwrap();

        let claims = tokens.validate(&pair.access_token, TokenKind::Access).unwrap();

        assert_eq!(claims.user_id().unwrap(), 7);
        assert_eq!(claims.role, Role::Owner);
        assert_eq!(pair.expires_in, 15 * 60);
    }

    #[test]
    fn token_kinds_are_not_interchangeable() {
        let tokens = service();
        let pair = tokens.issue_pair(&user(Role::User)).unwrap();

        assert!(matches!(
            tokens.validate(&pair.refresh_token, TokenKind::Access),
            Err(AuthError::WrongTokenType { .. })
        ));
        assert!(matches!(
            tokens.validate(&pair.access_token, TokenKind::Refresh),
            Err(AuthError::WrongTokenType { .. })
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let tokens = service();
        let issued_at = Utc::now() - Duration::hours(1);
        let token = tokens
            .issue(7, Role::User, TokenKind::Access, issued_at)
            .unwrap();

        assert!(matches!(
            tokens.validate(&token, TokenKind::Access),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = TokenService::new(
            "another-secret-that-is-at-least-32-bytes",
            Duration::minutes(15),
            Duration::days(14),
        );
        let pair = other.issue_pair(&user(Role::User)).unwrap();

        assert!(matches!(
            service().validate(&pair.access_token, TokenKind::Access),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            service().validate("not.a.jwt", TokenKind::Access),
            Err(AuthError::InvalidToken(_))
        ));
    }
}
