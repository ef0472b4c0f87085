//! The [`Entity`] trait: the static table/column description each model
//! provides so the generic repository can build and bind its statements.

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

/// Postgres-side type of a data column. Drives parameter binding so a JSON
/// string destined for a uuid or timestamp column is sent typed, not as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Uuid,
    Text,
    Int,
    Bool,
    Timestamp,
    Date,
}

impl ColumnType {
    fn expected(self) -> &'static str {
        match self {
            ColumnType::Uuid => "a UUID string",
            ColumnType::Text => "a string",
            ColumnType::Int => "a 32-bit integer",
            ColumnType::Bool => "a boolean",
            ColumnType::Timestamp => "an RFC 3339 timestamp",
            ColumnType::Date => "a YYYY-MM-DD date",
        }
    }
}

/// A writable data column: name plus wire type. System columns (`id`,
/// `created_at`, `updated_at`, `deleted_at`) are deliberately absent so
/// payloads can never set them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
}

#[derive(Debug, Error)]
pub enum ValueError {
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("invalid value for column {column}: expected {expected}, got {value}")]
    InvalidValue {
        column: String,
        expected: &'static str,
        value: String,
    },
}

/// A JSON value converted to a typed SQL parameter, ready to bind.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Uuid(Uuid),
    Text(String),
    Int(i32),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    Date(NaiveDate),
    /// A NULL that still carries its column type, so the bind stays typed.
    Null(ColumnType),
}

impl ColumnDef {
    pub const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self { name, ty }
    }

    fn invalid(&self, value: &Value) -> ValueError {
        ValueError::InvalidValue {
            column: self.name.to_string(),
            expected: self.ty.expected(),
            value: value.to_string(),
        }
    }

    /// Convert one JSON payload value into a typed parameter for this column.
    pub fn to_sql_value(&self, value: &Value) -> Result<SqlValue, ValueError> {
        if value.is_null() {
            return Ok(SqlValue::Null(self.ty));
        }
        match self.ty {
            ColumnType::Uuid => value
                .as_str()
                .and_then(|s| s.parse::<Uuid>().ok())
                .map(SqlValue::Uuid)
                .ok_or_else(|| self.invalid(value)),
            ColumnType::Text => value
                .as_str()
                .map(|s| SqlValue::Text(s.to_string()))
                .ok_or_else(|| self.invalid(value)),
            ColumnType::Int => value
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .map(SqlValue::Int)
                .ok_or_else(|| self.invalid(value)),
            ColumnType::Bool => value
                .as_bool()
                .map(SqlValue::Bool)
                .ok_or_else(|| self.invalid(value)),
            ColumnType::Timestamp => value
                .as_str()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|t| SqlValue::Timestamp(t.with_timezone(&Utc)))
                .ok_or_else(|| self.invalid(value)),
            ColumnType::Date => value
                .as_str()
                .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
                .map(SqlValue::Date)
                .ok_or_else(|| self.invalid(value)),
        }
    }
}

/// Static description of one table, implemented by each model. The generic
/// repository is parameterized over this; a `None` tombstone column marks an
/// entity whose rows are only ever removed physically.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin {
    /// Insertable shape accepted by `create`.
    type Insert: Serialize + DeserializeOwned + Send + Sync;

    const TABLE: &'static str;
    const ID_COLUMN: &'static str = "id";
    const DELETED_AT_COLUMN: Option<&'static str> = Some("deleted_at");
    const ORDER_BY: &'static str = "created_at";
    const DATA_COLUMNS: &'static [ColumnDef];

    fn data_column(name: &str) -> Option<&'static ColumnDef> {
        Self::DATA_COLUMNS.iter().find(|c| c.name == name)
    }
}
