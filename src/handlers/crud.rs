//! Generic CRUD handlers: thin adapters from HTTP to the repository
//! boundary, instantiated once per entity by the router.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::entity::Entity;
use crate::database::repositories::{
    GameRepository, LeagueRepository, PlayerRepository, TeamRepository,
};
use crate::database::repository::Repository;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DeletedQuery {
    /// `only` for tombstoned rows, `include` for everything; active rows
    /// otherwise.
    pub deleted: Option<String>,
}

fn repo<E: Entity>(state: &AppState) -> Repository<E> {
    Repository::new(state.db.pool().clone())
}

fn not_found<E: Entity>(id: Uuid) -> ApiError {
    ApiError::not_found(format!("record {} not found in {}", id, E::TABLE))
}

/// GET /api/{entities}
pub async fn list<E: Entity>(
    State(state): State<AppState>,
    Query(query): Query<DeletedQuery>,
) -> Result<Json<Value>, ApiError> {
    let repo = repo::<E>(&state);
    let rows = match query.deleted.as_deref() {
        None => repo.find_all_active().await?,
        Some("only") => repo.find_only_deleted().await?,
        Some("include") => repo.find_all_with_deleted().await?,
        Some(other) => {
            return Err(ApiError::bad_request(format!(
                "invalid deleted filter: {} (expected 'only' or 'include')",
                other
            )))
        }
    };
    Ok(Json(json!({ "success": true, "data": rows })))
}

/// GET /api/{entities}/:id
pub async fn get_one<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DeletedQuery>,
) -> Result<Json<Value>, ApiError> {
    let repo = repo::<E>(&state);
    let row = match query.deleted.as_deref() {
        Some("include") => repo.find_by_id_with_deleted(id).await?,
        _ => repo.find_by_id_active(id).await?,
    };
    match row {
        Some(row) => Ok(Json(json!({ "success": true, "data": row }))),
        None => Err(not_found::<E>(id)),
    }
}

/// POST /api/{entities}
pub async fn create<E: Entity>(
    State(state): State<AppState>,
    Json(payload): Json<E::Insert>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let row = repo::<E>(&state).create(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": row })),
    ))
}

/// PATCH /api/{entities}/:id - partial update of an active row
pub async fn update<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let changes = payload
        .as_object()
        .ok_or_else(|| ApiError::bad_request("update payload must be a JSON object"))?;
    match repo::<E>(&state).update(id, changes).await? {
        Some(row) => Ok(Json(json!({ "success": true, "data": row }))),
        None => Err(not_found::<E>(id)),
    }
}

/// DELETE /api/{entities}/:id - soft delete when the entity supports it,
/// physical removal otherwise
pub async fn remove<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let repo = repo::<E>(&state);
    let removed = if E::DELETED_AT_COLUMN.is_some() {
        repo.soft_delete(id).await?
    } else {
        repo.force_delete(id).await?
    };
    if removed {
        Ok(Json(json!({ "success": true, "data": { "id": id, "deleted": true } })))
    } else {
        Err(not_found::<E>(id))
    }
}

/// POST /api/{entities}/:id/restore
pub async fn restore<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    if repo::<E>(&state).restore(id).await? {
        Ok(Json(json!({ "success": true, "data": { "id": id, "restored": true } })))
    } else {
        Err(ApiError::not_found(format!(
            "no soft-deleted record {} in {}",
            id,
            E::TABLE
        )))
    }
}

/// DELETE /api/{entities}/:id/force - permanent removal, gated on the row
/// already being tombstoned for soft-deletable entities
pub async fn force_remove<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    if repo::<E>(&state).force_delete(id).await? {
        Ok(Json(json!({ "success": true, "data": { "id": id, "deleted": true } })))
    } else {
        Err(ApiError::not_found(format!(
            "no soft-deleted record {} in {}",
            id,
            E::TABLE
        )))
    }
}

// Related-collection lookups backed by the concrete repositories.

/// GET /api/divisions/:id/leagues
pub async fn leagues_by_division(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let rows = LeagueRepository::new(state.db.pool().clone())
        .find_by_division(id)
        .await?;
    Ok(Json(json!({ "success": true, "data": rows })))
}

/// GET /api/leagues/:id/teams
pub async fn teams_by_league(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let rows = TeamRepository::new(state.db.pool().clone())
        .find_by_league(id)
        .await?;
    Ok(Json(json!({ "success": true, "data": rows })))
}

/// GET /api/leagues/:id/games
pub async fn games_by_league(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let rows = GameRepository::new(state.db.pool().clone())
        .find_by_league(id)
        .await?;
    Ok(Json(json!({ "success": true, "data": rows })))
}

/// GET /api/teams/:id/players
pub async fn players_by_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let rows = PlayerRepository::new(state.db.pool().clone())
        .find_by_team(id)
        .await?;
    Ok(Json(json!({ "success": true, "data": rows })))
}
