use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::database::entity::{ColumnDef, ColumnType, Entity};

/// League within a division, bounded by a date range. Name uniqueness is
/// scoped to the division and to active rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct League {
    pub id: Uuid,
    pub division_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub games_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub deleted_by: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLeague {
    pub division_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub games_count: i32,
}

impl Entity for League {
    type Insert = NewLeague;

    const TABLE: &'static str = "leagues";
    const DATA_COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::new("division_id", ColumnType::Uuid),
        ColumnDef::new("name", ColumnType::Text),
        ColumnDef::new("description", ColumnType::Text),
        ColumnDef::new("start_date", ColumnType::Date),
        ColumnDef::new("end_date", ColumnType::Date),
        ColumnDef::new("games_count", ColumnType::Int),
        ColumnDef::new("created_by", ColumnType::Uuid),
        ColumnDef::new("updated_by", ColumnType::Uuid),
        ColumnDef::new("deleted_by", ColumnType::Uuid),
    ];
}
