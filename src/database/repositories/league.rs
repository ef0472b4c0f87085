use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::League;
use crate::database::repository::{Repository, RepositoryError};
use crate::database::soft_delete::without_deleted;

pub struct LeagueRepository {
    pub base: Repository<League>,
}

impl LeagueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            base: Repository::new(pool),
        }
    }

    /// Active leagues of a division, newest season first.
    pub async fn find_by_division(&self, division_id: Uuid) -> Result<Vec<League>, RepositoryError> {
        let sql = format!(
            "SELECT * FROM \"leagues\" WHERE {} ORDER BY \"start_date\" DESC, \"id\"",
            without_deleted("deleted_at", &["\"division_id\" = $1"])
        );
        Ok(sqlx::query_as::<_, League>(&sql)
            .bind(division_id)
            .fetch_all(self.base.pool())
            .await?)
    }
}
