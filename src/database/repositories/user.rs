use sqlx::PgPool;

use crate::database::models::User;
use crate::database::repository::{Repository, RepositoryError};
use crate::database::soft_delete::without_deleted;

/// User data access: the generic repository plus account lookups.
pub struct UserRepository {
    pub base: Repository<User>,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            base: Repository::new(pool),
        }
    }

    /// Active-only lookup by email, case-insensitive. A soft-deleted user
    /// holding the same address is never returned.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let sql = format!(
            "SELECT * FROM \"users\" WHERE {}",
            without_deleted("deleted_at", &["lower(\"email\") = lower($1)"])
        );
        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(self.base.pool())
            .await?)
    }
}
