//! Login credentials stored on the employee record

use sqlx::PgPool;

use crate::repository::{DbContext, RepositoryError, RepositoryResult};

#[derive(Clone)]
pub struct CredentialRepository {
    pool: PgPool,
}

impl CredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Stored password hash for a login
    ///
    /// Unknown logins and employees without a password are both `NotFound`.
    pub async fn password_hash(&self, login: &str) -> RepositoryResult<String> {
        sqlx::query_scalar::<_, Option<String>>("SELECT password FROM employee WHERE login = $1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .context("failed to get user password")?
            .flatten()
            .ok_or_else(|| RepositoryError::not_found("credentials", login))
    }
}
