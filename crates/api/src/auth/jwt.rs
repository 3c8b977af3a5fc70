//! Session tokens.
//!
//! Access tokens are HS256 JWTs carrying [`Claims`]. Refresh tokens are
//! random UUIDs handed to the client once; the server keeps only their
//! SHA-256 digest in `user_sessions`.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::Error as JwtError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;
use vedic_core::types::DbId;

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 60;
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

/// Access-token payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: DbId,
    /// Profile role at issue time.
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

impl Claims {
    fn issue(user_id: DbId, role: &str, lifetime_secs: i64) -> Self {
        let iat = Utc::now().timestamp();
        Self {
            sub: user_id,
            role: role.to_owned(),
            exp: iat + lifetime_secs,
            iat,
            jti: Uuid::new_v4().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC secret for signing and verifying access tokens.
    pub secret: String,
    pub access_token_expiry_mins: i64,
    pub refresh_token_expiry_days: i64,
}

impl JwtConfig {
    /// Reads `JWT_SECRET` (required), `JWT_ACCESS_EXPIRY_MINS` (default 60)
    /// and `JWT_REFRESH_EXPIRY_DAYS` (default 7).
    ///
    /// # Panics
    ///
    /// Panics if the secret is missing or empty, or a lifetime is not an integer.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        assert!(!secret.is_empty(), "JWT_SECRET must be set in the environment");

        Self {
            secret,
            access_token_expiry_mins: env_i64("JWT_ACCESS_EXPIRY_MINS", DEFAULT_ACCESS_EXPIRY_MINS),
            refresh_token_expiry_days: env_i64(
                "JWT_REFRESH_EXPIRY_DAYS",
                DEFAULT_REFRESH_EXPIRY_DAYS,
            ),
        }
    }

    /// Access token lifetime in seconds, as reported to clients.
    pub fn access_expires_in_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }

    /// Expiry instant for a refresh token issued now.
    pub fn refresh_expires_at(&self) -> DateTime<Utc> {
        Utc::now() + Duration::days(self.refresh_token_expiry_days)
    }

    /// Sign an access token for `user_id` acting as `role`.
    pub fn issue_access_token(&self, user_id: DbId, role: &str) -> Result<String, JwtError> {
        let claims = Claims::issue(user_id, role, self.access_expires_in_secs());
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Verify signature and expiry, returning the payload.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}

fn env_i64(name: &str, default: i64) -> i64 {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be an integer, got {raw:?}")),
        Err(_) => default,
    }
}

/// A newly minted refresh token: `token` goes to the client, `hash` to the
/// session row.
#[derive(Debug)]
pub struct RefreshToken {
    pub token: String,
    pub hash: String,
}

impl RefreshToken {
    pub fn generate() -> Self {
        let token = Uuid::new_v4().to_string();
        let hash = hash_refresh_token(&token);
        Self { token, hash }
    }
}

/// Digest under which a refresh token is stored and looked up.
pub fn hash_refresh_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "unit-test-secret-for-vedic-tokens".to_string(),
            access_token_expiry_mins: 60,
            refresh_token_expiry_days: 7,
        }
    }

    #[test]
    fn issued_token_round_trips_claims() {
        let config = config();
        let token = config.issue_access_token(42, "instructor").unwrap();

        let claims = config.decode_access_token(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, "instructor");
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(Uuid::parse_str(&claims.jti).is_ok());
    }

    #[test]
    fn expired_token_rejected() {
        let config = config();
        // Past the default 60-second leeway.
        let claims = Claims::issue(1, "student", -300);
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(config.decode_access_token(&token).is_err());
    }

    #[test]
    fn token_from_another_secret_rejected() {
        let other = JwtConfig {
            secret: "some-other-secret".to_string(),
            ..config()
        };
        let token = other.issue_access_token(1, "student").unwrap();

        assert!(config().decode_access_token(&token).is_err());
    }

    #[test]
    fn refresh_token_stored_as_digest() {
        let refresh = RefreshToken::generate();

        assert_eq!(refresh.hash, hash_refresh_token(&refresh.token));
        assert_eq!(refresh.hash.len(), 64);
        assert_ne!(refresh.token, refresh.hash);
        assert_ne!(RefreshToken::generate().token, refresh.token);
    }

    #[test]
    fn refresh_expiry_follows_config() {
        let expires_at = config().refresh_expires_at();
        assert!(expires_at > Utc::now() + Duration::days(6));
        assert!(expires_at <= Utc::now() + Duration::days(7));
    }
}
