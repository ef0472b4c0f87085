use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::Team;
use crate::database::repository::{Repository, RepositoryError};
use crate::database::soft_delete::without_deleted;

pub struct TeamRepository {
    pub base: Repository<Team>,
}

impl TeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            base: Repository::new(pool),
        }
    }

    /// Active teams of a league, ordered by name.
    pub async fn find_by_league(&self, league_id: Uuid) -> Result<Vec<Team>, RepositoryError> {
        let sql = format!(
            "SELECT * FROM \"teams\" WHERE {} ORDER BY \"name\", \"id\"",
            without_deleted("deleted_at", &["\"league_id\" = $1"])
        );
        Ok(sqlx::query_as::<_, Team>(&sql)
            .bind(league_id)
            .fetch_all(self.base.pool())
            .await?)
    }
}
