//! HTTP surface: route registration and the handlers behind it.

pub mod auth;
pub mod crud;
pub mod health;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::database::entity::Entity;
use crate::database::models::{
    Division, Formation, Game, League, Player, PlayerPreference, Position, Team, User,
};
use crate::state::AppState;

/// Standard route set for one entity: collection, item, restore, force.
fn entity_routes<E>(path: &str) -> Router<AppState>
where
    E: Entity + Sync + 'static,
    E::Insert: 'static,
{
    Router::new()
        .route(path, get(crud::list::<E>).post(crud::create::<E>))
        .route(
            &format!("{}/:id", path),
            get(crud::get_one::<E>)
                .patch(crud::update::<E>)
                .delete(crud::remove::<E>),
        )
        .route(&format!("{}/:id/restore", path), post(crud::restore::<E>))
        .route(
            &format!("{}/:id/force", path),
            delete(crud::force_remove::<E>),
        )
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/api/auth/whoami", get(auth::whoami))
        .merge(entity_routes::<User>("/api/users"))
        .merge(entity_routes::<Division>("/api/divisions"))
        .merge(entity_routes::<League>("/api/leagues"))
        .merge(entity_routes::<Team>("/api/teams"))
        .merge(entity_routes::<Player>("/api/players"))
        .merge(entity_routes::<Game>("/api/games"))
        .merge(entity_routes::<Formation>("/api/formations"))
        .merge(entity_routes::<Position>("/api/positions"))
        .merge(entity_routes::<PlayerPreference>("/api/player-preferences"))
        .route("/api/divisions/:id/leagues", get(crud::leagues_by_division))
        .route("/api/leagues/:id/teams", get(crud::teams_by_league))
        .route("/api/leagues/:id/games", get(crud::games_by_league))
        .route("/api/teams/:id/players", get(crud::players_by_team))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
