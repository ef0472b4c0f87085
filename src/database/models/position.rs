use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::database::entity::{ColumnDef, ColumnType, Entity};

/// Named player position. `position_type` is one of ATTACK, MIDFIELD,
/// DEFENSE, GK (validated at the application level).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Position {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub position_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub deleted_by: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPosition {
    pub name: String,
    pub description: Option<String>,
    pub position_type: String,
}

impl Entity for Position {
    type Insert = NewPosition;

    const TABLE: &'static str = "positions";
    const DATA_COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::new("name", ColumnType::Text),
        ColumnDef::new("description", ColumnType::Text),
        ColumnDef::new("position_type", ColumnType::Text),
        ColumnDef::new("created_by", ColumnType::Uuid),
        ColumnDef::new("updated_by", ColumnType::Uuid),
        ColumnDef::new("deleted_by", ColumnType::Uuid),
    ];
}
