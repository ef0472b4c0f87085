use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::Game;
use crate::database::repository::{Repository, RepositoryError};
use crate::database::soft_delete::without_deleted;

pub struct GameRepository {
    pub base: Repository<Game>,
}

impl GameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            base: Repository::new(pool),
        }
    }

    /// Active games of a league in schedule order. Unscheduled games
    /// (no start time) sort last.
    pub async fn find_by_league(&self, league_id: Uuid) -> Result<Vec<Game>, RepositoryError> {
        let sql = format!(
            "SELECT * FROM \"games\" WHERE {} ORDER BY \"start_time\" NULLS LAST, \"id\"",
            without_deleted("deleted_at", &["\"league_id\" = $1"])
        );
        Ok(sqlx::query_as::<_, Game>(&sql)
            .bind(league_id)
            .fetch_all(self.base.pool())
            .await?)
    }
}
