use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::database::entity::{ColumnDef, ColumnType, Entity};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Formation {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub no_goalkeepers: bool,
    pub players_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub deleted_by: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFormation {
    pub name: String,
    pub description: Option<String>,
    pub no_goalkeepers: bool,
    pub players_count: i32,
}

impl Entity for Formation {
    type Insert = NewFormation;

    const TABLE: &'static str = "formations";
    const DATA_COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::new("name", ColumnType::Text),
        ColumnDef::new("description", ColumnType::Text),
        ColumnDef::new("no_goalkeepers", ColumnType::Bool),
        ColumnDef::new("players_count", ColumnType::Int),
        ColumnDef::new("created_by", ColumnType::Uuid),
        ColumnDef::new("updated_by", ColumnType::Uuid),
        ColumnDef::new("deleted_by", ColumnType::Uuid),
    ];
}
