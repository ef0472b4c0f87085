use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::Player;
use crate::database::repository::{Repository, RepositoryError};
use crate::database::soft_delete::without_deleted;

pub struct PlayerRepository {
    pub base: Repository<Player>,
}

impl PlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            base: Repository::new(pool),
        }
    }

    /// Active roster of a team, ordered by jersey number.
    pub async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<Player>, RepositoryError> {
        let sql = format!(
            "SELECT * FROM \"players\" WHERE {} ORDER BY \"jersey_number\", \"id\"",
            without_deleted("deleted_at", &["\"team_id\" = $1"])
        );
        Ok(sqlx::query_as::<_, Player>(&sql)
            .bind(team_id)
            .fetch_all(self.base.pool())
            .await?)
    }
}
