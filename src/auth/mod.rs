use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod cookie;
pub mod password;

/// Access tokens bound a single request-session window; the refresh cookie
/// keeps the user signed in long-term.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 60;
pub const REFRESH_TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token signing secret is not configured")]
    MissingSecret,
    #[error("failed to sign token: {0}")]
    Signing(String),
    #[error("invalid token")]
    Invalid,
}

/// Issues and verifies signed, self-contained tokens. Both tiers share the
/// same claim shape and signing secret; only the TTL differs. Built once at
/// startup from config and injected into the app state.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let mut validation = Validation::default();
        // A 60-second access token with the default 60-second leeway would
        // effectively live twice its TTL
        validation.leeway = 0;

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    pub fn issue(&self, user_id: Uuid, ttl_secs: i64) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            exp: (now + Duration::seconds(ttl_secs)).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    pub fn issue_access(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue(user_id, ACCESS_TOKEN_TTL_SECS)
    }

    pub fn issue_refresh(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue(user_id, REFRESH_TOKEN_TTL_SECS)
    }

    /// Checks signature and expiry only. A bad signature, a malformed token
    /// and an expired one are indistinguishable to the caller.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret").unwrap()
    }

    #[test]
    fn empty_secret_is_rejected() {
        assert!(matches!(TokenService::new(""), Err(TokenError::MissingSecret)));
    }

    #[test]
    fn issued_token_verifies_and_round_trips_user_id() {
        let tokens = service();
        let user_id = Uuid::new_v4();

        let token = tokens.issue_access(user_id).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.user_id, user_id);
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_TTL_SECS);
    }

    #[test]
    fn expired_token_fails_verification() {
        let tokens = service();
        let token = tokens.issue(Uuid::new_v4(), -10).unwrap();

        assert!(matches!(tokens.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn tampered_token_fails_verification() {
        let tokens = service();
        let mut token = tokens.issue_access(Uuid::new_v4()).unwrap();
        token.push('x');

        assert!(matches!(tokens.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn token_signed_with_other_secret_fails_verification() {
        let token = TokenService::new("other-secret")
            .unwrap()
            .issue_access(Uuid::new_v4())
            .unwrap();

        assert!(matches!(service().verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn garbage_token_fails_verification() {
        assert!(matches!(service().verify("not-a-jwt"), Err(TokenError::Invalid)));
    }
}
