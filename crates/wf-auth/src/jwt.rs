//! JWT Authentication

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wf_core::config::AuthConfig;
use wf_core::WfError;

/// JWT claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (login name)
    pub sub: String,
    pub username: String,
    pub iss: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Not before (Unix timestamp)
    pub nbf: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// JWT ID
    pub jti: String,
}

/// JWT errors
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Token is expired")]
    Expired,
    #[error("Invalid token: {0}")]
    Invalid(String),
    #[error("Missing token")]
    Missing,
    #[error("Token encoding failed: {0}")]
    EncodingFailed(String),
}

impl From<JwtError> for WfError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::EncodingFailed(message) => WfError::Internal(message),
            other => WfError::unauthorized(other.to_string()),
        }
    }
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: i64,
}

/// JWT service for creating and validating tokens
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl_seconds: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret
    pub fn new(secret: &[u8], issuer: impl Into<String>, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            issuer: issuer.into(),
            ttl_seconds,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config.jwt_secret.as_bytes(),
            config.issuer.clone(),
            config.token_ttl_seconds,
        )
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Sign a token for `username`, valid from now for the configured lifetime
    pub fn create_token(&self, username: &str) -> Result<IssuedToken, JwtError> {
        self.create_token_at(username, Utc::now().timestamp())
    }

    fn create_token_at(&self, username: &str, now: i64) -> Result<IssuedToken, JwtError> {
        let claims = Claims {
            sub: username.to_string(),
            username: username.to_string(),
            iss: self.issuer.clone(),
            iat: now,
            nbf: now,
            exp: now + self.ttl_seconds,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_at: claims.exp,
        })
    }

    /// Validate and decode a JWT token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "sub"]);
        validation.validate_nbf = true;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::Invalid(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }
}

/// Extract bearer token from Authorization header
pub fn extract_bearer_token(authorization: &str) -> Option<&str> {
    let (scheme, token) = authorization.split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

    fn service() -> JwtService {
        JwtService::new(SECRET, "api", 86_400)
    }

    #[test]
    fn test_create_and_validate_token() {
        let service = service();
        let issued = service.create_token("jan").unwrap();

        let claims = service.validate_token(&issued.token).unwrap();
        assert_eq!(claims.sub, "jan");
        assert_eq!(claims.username, "jan");
        assert_eq!(claims.iss, "api");
        assert_eq!(claims.exp - claims.iat, 86_400);
        assert_eq!(claims.nbf, claims.iat);
        assert_eq!(claims.exp, issued.expires_at);
    }

    #[test]
    fn test_tokens_are_unique() {
        let service = service();
        let first = service.create_token("jan").unwrap();
        let second = service.create_token("jan").unwrap();
        assert_ne!(first.token, second.token);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let issued = service().create_token("jan").unwrap();
        let other = JwtService::new(b"another-secret-key-at-least-32-bytes", "api", 86_400);

        assert!(matches!(
            other.validate_token(&issued.token),
            Err(JwtError::Invalid(_))
        ));
    }

    #[test]
    fn test_wrong_issuer_is_invalid() {
        let issued = JwtService::new(SECRET, "someone-else", 86_400)
            .create_token("jan")
            .unwrap();

        assert!(matches!(
            service().validate_token(&issued.token),
            Err(JwtError::Invalid(_))
        ));
    }

    #[test]
    fn test_expired_token() {
        let service = service();
        let issued = service
            .create_token_at("jan", Utc::now().timestamp() - 2 * 86_400)
            .unwrap();

        assert!(matches!(
            service.validate_token(&issued.token),
            Err(JwtError::Expired)
        ));
    }

    #[test]
    fn test_not_yet_valid_token() {
        let service = service();
        let issued = service
            .create_token_at("jan", Utc::now().timestamp() + 3_600)
            .unwrap();

        assert!(service.validate_token(&issued.token).is_err());
    }

    #[test]
    fn test_garbage_token() {
        assert!(matches!(
            service().validate_token("not.a.token"),
            Err(JwtError::Invalid(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc123"), Some("abc123"));
        assert_eq!(extract_bearer_token("bearer abc123"), Some("abc123"));
        assert_eq!(extract_bearer_token("Basic abc123"), None);
        assert_eq!(extract_bearer_token("Bearer "), None);
        assert_eq!(extract_bearer_token("Bearer"), None);
    }

    #[test]
    fn test_errors_map_to_unauthorized() {
        let err: WfError = JwtError::Expired.into();
        assert!(err.is_unauthorized());

        let err: WfError = JwtError::EncodingFailed("boom".into()).into();
        assert!(!err.is_unauthorized());
    }
}
