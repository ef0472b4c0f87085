//! Entity-specific repositories composing the generic [`Repository`].
//! Custom lookups reuse the shared soft-delete predicates rather than
//! hand-rolling filters.
//!
//! [`Repository`]: crate::database::repository::Repository

pub mod game;
pub mod league;
pub mod player;
pub mod team;
pub mod user;

pub use game::GameRepository;
pub use league::LeagueRepository;
pub use player::PlayerRepository;
pub use team::TeamRepository;
pub use user::UserRepository;
