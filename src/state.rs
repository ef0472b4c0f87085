use crate::database::Database;

/// Shared application state: the explicitly constructed database handle,
/// built in main and passed to every handler through axum.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}
