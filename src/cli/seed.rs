//! Development seed data, loaded through the same repositories the API
//! uses so inserts go through the normal column validation path.

use chrono::{Days, Duration, Utc};

use crate::auth;
use crate::database::models::{
    Division, Formation, Game, League, NewDivision, NewFormation, NewGame, NewLeague, NewPlayer,
    NewPlayerPreference, NewPosition, NewTeam, NewUser, Player, PlayerPreference, Position, Team,
};
use crate::database::repositories::UserRepository;
use crate::database::repository::Repository;
use crate::database::Database;

const SEED_POSITIONS: &[(&str, &str)] = &[
    ("Goalkeeper", "GK"),
    ("Left Center Back", "DEFENSE"),
    ("Right Center Back", "DEFENSE"),
    ("Left Midfielder", "MIDFIELD"),
    ("Center Midfielder", "MIDFIELD"),
    ("Right Midfielder", "MIDFIELD"),
    ("Striker", "ATTACK"),
];

/// Load a small, self-consistent data set. Skips entirely when any user
/// already exists so repeated runs cannot duplicate rows.
pub async fn run(db: &Database) -> anyhow::Result<()> {
    let users = UserRepository::new(db.pool().clone());

    if !users.base.find_all_with_deleted().await?.is_empty() {
        println!("seed skipped: users table is not empty");
        return Ok(());
    }

    let admin = users
        .base
        .create(&NewUser {
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            password_hash: auth::hash_password("admin-password")
                .map_err(|e| anyhow::anyhow!("hashing seed password: {}", e))?,
        })
        .await?;
    println!("seeded user {}", admin.email);

    let positions: Repository<Position> = Repository::new(db.pool().clone());
    for (name, position_type) in SEED_POSITIONS {
        positions
            .create(&NewPosition {
                name: name.to_string(),
                description: None,
                position_type: position_type.to_string(),
            })
            .await?;
    }
    println!("seeded {} positions", SEED_POSITIONS.len());

    let divisions: Repository<Division> = Repository::new(db.pool().clone());
    let u10 = divisions
        .create(&NewDivision {
            name: "U10".to_string(),
            description: Some("Under 10, 7v7".to_string()),
            players_count: 7,
            max_players_on_roster: 10,
            no_goalkeepers: false,
            game_duration: 50,
        })
        .await?;

    let formations: Repository<Formation> = Repository::new(db.pool().clone());
    formations
        .create(&NewFormation {
            name: "2-3-1".to_string(),
            description: Some("Two backs, three midfielders, one striker".to_string()),
            no_goalkeepers: false,
            players_count: 7,
        })
        .await?;

    let leagues: Repository<League> = Repository::new(db.pool().clone());
    let today = Utc::now().date_naive();
    let league = leagues
        .create(&NewLeague {
            division_id: u10.id,
            name: "Fall League".to_string(),
            description: None,
            start_date: today,
            end_date: today + Days::new(90),
            games_count: 10,
        })
        .await?;

    let teams: Repository<Team> = Repository::new(db.pool().clone());
    let dragons = teams
        .create(&NewTeam {
            league_id: league.id,
            name: "Red Dragons".to_string(),
            color: Some("red".to_string()),
        })
        .await?;
    let sharks = teams
        .create(&NewTeam {
            league_id: league.id,
            name: "Blue Sharks".to_string(),
            color: Some("blue".to_string()),
        })
        .await?;

    let players: Repository<Player> = Repository::new(db.pool().clone());
    let mut dragon_players = Vec::new();
    for (i, name) in ["Ada", "Ben", "Cleo", "Dev", "Elle", "Finn", "Gus"]
        .iter()
        .enumerate()
    {
        dragon_players.push(
            players
                .create(&NewPlayer {
                    team_id: dragons.id,
                    name: name.to_string(),
                    jersey_number: (i + 1) as i32,
                })
                .await?,
        );
    }
    for (i, name) in ["Hana", "Ivy", "Jax", "Kai", "Lou", "Mia", "Nico"]
        .iter()
        .enumerate()
    {
        players
            .create(&NewPlayer {
                team_id: sharks.id,
                name: name.to_string(),
                jersey_number: (i + 1) as i32,
            })
            .await?;
    }

    let games: Repository<Game> = Repository::new(db.pool().clone());
    games
        .create(&NewGame {
            league_id: league.id,
            home_team_id: dragons.id,
            away_team_id: sharks.id,
            home_score: None,
            away_score: None,
            start_time: Some(Utc::now() + Duration::days(7)),
            status: "UPCOMING".to_string(),
        })
        .await?;

    // A couple of position preferences for the first dragon.
    let all_positions = positions.find_all_active().await?;
    let preferences: Repository<PlayerPreference> = Repository::new(db.pool().clone());
    if let (Some(player), Some(gk), Some(striker)) = (
        dragon_players.first(),
        all_positions.iter().find(|p| p.name == "Goalkeeper"),
        all_positions.iter().find(|p| p.name == "Striker"),
    ) {
        preferences
            .create(&NewPlayerPreference {
                player_id: player.id,
                position_id: striker.id,
                rank: Some(1),
            })
            .await?;
        preferences
            .create(&NewPlayerPreference {
                player_id: player.id,
                position_id: gk.id,
                rank: Some(2),
            })
            .await?;
    }

    println!("seed complete");
    Ok(())
}
