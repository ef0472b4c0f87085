use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::database::entity::{ColumnDef, ColumnType, Entity};

/// Sport division with its roster rules and game constraints.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Division {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub players_count: i32,
    pub max_players_on_roster: i32,
    pub no_goalkeepers: bool,
    pub game_duration: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub deleted_by: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDivision {
    pub name: String,
    pub description: Option<String>,
    pub players_count: i32,
    pub max_players_on_roster: i32,
    pub no_goalkeepers: bool,
    pub game_duration: i32,
}

impl Entity for Division {
    type Insert = NewDivision;

    const TABLE: &'static str = "divisions";
    const DATA_COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::new("name", ColumnType::Text),
        ColumnDef::new("description", ColumnType::Text),
        ColumnDef::new("players_count", ColumnType::Int),
        ColumnDef::new("max_players_on_roster", ColumnType::Int),
        ColumnDef::new("no_goalkeepers", ColumnType::Bool),
        ColumnDef::new("game_duration", ColumnType::Int),
        ColumnDef::new("created_by", ColumnType::Uuid),
        ColumnDef::new("updated_by", ColumnType::Uuid),
        ColumnDef::new("deleted_by", ColumnType::Uuid),
    ];
}
