use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::database::entity::{ColumnDef, ColumnType, Entity};

/// Player on a team roster. Jersey numbers are unique per team among active
/// rows, so a number frees up when its player is soft-deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Player {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub jersey_number: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub deleted_by: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlayer {
    pub team_id: Uuid,
    pub name: String,
    pub jersey_number: i32,
}

impl Entity for Player {
    type Insert = NewPlayer;

    const TABLE: &'static str = "players";
    const DATA_COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::new("team_id", ColumnType::Uuid),
        ColumnDef::new("name", ColumnType::Text),
        ColumnDef::new("jersey_number", ColumnType::Int),
        ColumnDef::new("created_by", ColumnType::Uuid),
        ColumnDef::new("updated_by", ColumnType::Uuid),
        ColumnDef::new("deleted_by", ColumnType::Uuid),
    ];
}
