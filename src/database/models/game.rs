use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::database::entity::{ColumnDef, ColumnType, Entity};

/// Game between two teams in a league.
/// `status` is one of TENTATIVE, UPCOMING, COMPLETE (validated at the
/// application level; the column is plain varchar).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Game {
    pub id: Uuid,
    pub league_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub start_time: Option<DateTime<Utc>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub deleted_by: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGame {
    pub league_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub start_time: Option<DateTime<Utc>>,
    pub status: String,
}

impl Entity for Game {
    type Insert = NewGame;

    const TABLE: &'static str = "games";
    const DATA_COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::new("league_id", ColumnType::Uuid),
        ColumnDef::new("home_team_id", ColumnType::Uuid),
        ColumnDef::new("away_team_id", ColumnType::Uuid),
        ColumnDef::new("home_score", ColumnType::Int),
        ColumnDef::new("away_score", ColumnType::Int),
        ColumnDef::new("start_time", ColumnType::Timestamp),
        ColumnDef::new("status", ColumnType::Text),
        ColumnDef::new("created_by", ColumnType::Uuid),
        ColumnDef::new("updated_by", ColumnType::Uuid),
        ColumnDef::new("deleted_by", ColumnType::Uuid),
    ];
}
