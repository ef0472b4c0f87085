use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::database::entity::{ColumnDef, ColumnType, Entity};

/// Player's ranked preference for a position. Pure association rows with no
/// tombstone column: removal is physical, and the repository's "active"
/// queries degenerate to plain queries.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PlayerPreference {
    pub id: Uuid,
    pub player_id: Uuid,
    pub position_id: Uuid,
    pub rank: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlayerPreference {
    pub player_id: Uuid,
    pub position_id: Uuid,
    pub rank: Option<i32>,
}

impl Entity for PlayerPreference {
    type Insert = NewPlayerPreference;

    const TABLE: &'static str = "player_preferences";
    const DELETED_AT_COLUMN: Option<&'static str> = None;
    const DATA_COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::new("player_id", ColumnType::Uuid),
        ColumnDef::new("position_id", ColumnType::Uuid),
        ColumnDef::new("rank", ColumnType::Int),
    ];
}
