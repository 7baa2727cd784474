use wf_auth::{verify_dummy_password, verify_password, PasswordError};
use wf_core::{ResultExt, WfError, WfResult};
use wf_models::{LoginRequest, LoginResponse};

use crate::WorkforceService;

const INVALID_CREDENTIALS: &str = "invalid username or password";

impl WorkforceService {
    /// Exchange a username and password for a signed bearer token
    pub async fn login(&self, request: &LoginRequest) -> WfResult<LoginResponse> {
        let stored = self
            .credentials
            .password_hash(&request.username)
            .await
            .map_err(WfError::from);

        authenticate(stored, &request.password).context("failed to log in")?;

        let issued = self
            .jwt
            .create_token(&request.username)
            .context("failed to log in")?;

        tracing::info!(username = %request.username, "User logged in");
        Ok(LoginResponse {
            token: issued.token,
            expires_at_unix: issued.expires_at,
        })
    }
}

/// Decide a login attempt from the stored-hash lookup and the offered password
///
/// Unknown users, wrong passwords and unreadable stored hashes are all the
/// same `Unauthorized`; any other lookup failure is passed through. An
/// unknown user still costs one Argon2 verification.
pub fn authenticate(stored: WfResult<String>, password: &str) -> WfResult<()> {
    let hash = match stored {
        Ok(hash) => hash,
        Err(err) if err.is_not_found() => {
            verify_dummy_password(password);
            tracing::warn!("Login rejected: unknown user");
            return Err(WfError::unauthorized(INVALID_CREDENTIALS));
        }
        Err(err) => return Err(err),
    };

    match verify_password(password, &hash) {
        Ok(true) => Ok(()),
        Ok(false) => {
            tracing::warn!("Login rejected: wrong password");
            Err(WfError::unauthorized(INVALID_CREDENTIALS))
        }
        Err(PasswordError::InvalidHash(reason)) => {
            tracing::warn!(%reason, "Login rejected: stored hash unreadable");
            Err(WfError::unauthorized(INVALID_CREDENTIALS))
        }
        Err(err) => Err(WfError::Internal(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use wf_auth::hash_password;
    use wf_core::ErrorKind;

    #[test]
    fn test_correct_password() {
        let hash = hash_password("s3cret").unwrap();
        assert!(authenticate(Ok(hash), "s3cret").is_ok());
    }

    #[test]
    fn test_wrong_password_is_unauthorized() {
        let hash = hash_password("s3cret").unwrap();
        assert!(authenticate(Ok(hash), "guess")
            .unwrap_err()
            .is_unauthorized());
    }

    #[test]
    fn test_unknown_user_is_unauthorized() {
        let stored = Err(WfError::not_found("credentials", "ghost"));
        assert!(authenticate(stored, "anything")
            .unwrap_err()
            .is_unauthorized());
    }

    #[test]
    fn test_unknown_user_costs_a_verification() {
        let hash = hash_password("s3cret").unwrap();

        let started = Instant::now();
        let _ = authenticate(Ok(hash), "guess");
        let wrong_password = started.elapsed();

        let started = Instant::now();
        let _ = authenticate(Err(WfError::not_found("credentials", "ghost")), "guess");
        let unknown_user = started.elapsed();

        assert!(unknown_user * 4 >= wrong_password);
    }

    #[test]
    fn test_unreadable_hash_is_unauthorized() {
        let err = authenticate(Ok("plain-text".to_string()), "plain-text").unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_storage_failure_passes_through() {
        let stored = Err(WfError::Internal("pool closed".to_string()));
        let err = authenticate(stored, "anything").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
