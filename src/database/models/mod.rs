pub mod division;
pub mod formation;
pub mod game;
pub mod league;
pub mod player;
pub mod player_preference;
pub mod position;
pub mod team;
pub mod user;

pub use division::{Division, NewDivision};
pub use formation::{Formation, NewFormation};
pub use game::{Game, NewGame};
pub use league::{League, NewLeague};
pub use player::{NewPlayer, Player};
pub use player_preference::{NewPlayerPreference, PlayerPreference};
pub use position::{NewPosition, Position};
pub use team::{NewTeam, Team};
pub use user::{NewUser, User};
