pub mod entity;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod repository;
pub mod soft_delete;

pub use entity::{ColumnDef, ColumnType, Entity, SqlValue, ValueError};
pub use pool::{Database, DatabaseError};
pub use repository::{Repository, RepositoryError};
