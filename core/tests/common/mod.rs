#![allow(dead_code)]

use quarry_core::{
    application::{QuarryService, create_service_with_connection},
    domain::{
        member::{entities::Member, ports::MemberService, value_objects::CreateMemberInput},
        team::{entities::Team, ports::TeamService, value_objects::CreateTeamInput},
    },
};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

const SCHEMA: [&str; 4] = [
    "CREATE TABLE teams (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )",
    "CREATE TABLE members (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT,
        age INTEGER NOT NULL,
        team_id INTEGER REFERENCES teams (id) ON DELETE SET NULL
    )",
    "CREATE TABLE products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        price INTEGER NOT NULL,
        category TEXT NOT NULL
    )",
    "CREATE TABLE orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        order_date TEXT NOT NULL,
        quantity INTEGER NOT NULL,
        total_price INTEGER NOT NULL,
        status TEXT NOT NULL,
        product_id INTEGER NOT NULL REFERENCES products (id) ON DELETE CASCADE
    )",
];

/// In-memory SQLite database with the application schema. A single
/// connection keeps every query on the same in-memory database.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to connect to in-memory database");

    for statement in SCHEMA {
        db.execute_unprepared(statement)
            .await
            .expect("Failed to create table");
    }

    db
}

pub async fn setup_service() -> QuarryService {
    create_service_with_connection(setup_test_db().await)
}

pub struct MemberFixture {
    pub team_a: Team,
    pub team_b: Team,
    pub members: Vec<Member>,
}

/// teamA: member1 (10), member2 (20). teamB: member3 (30), member4 (40).
pub async fn seed_members(service: &QuarryService) -> MemberFixture {
    let team_a = create_team(service, "teamA").await;
    let team_b = create_team(service, "teamB").await;

    let mut members = Vec::new();
    for (i, team) in [&team_a, &team_a, &team_b, &team_b].into_iter().enumerate() {
        let n = i as i32 + 1;
        members.push(create_member(service, Some(&format!("member{n}")), n * 10, Some(team.id)).await);
    }

    MemberFixture {
        team_a,
        team_b,
        members,
    }
}

pub async fn create_team(service: &QuarryService, name: &str) -> Team {
    service
        .create_team(CreateTeamInput {
            name: name.to_string(),
        })
        .await
        .expect("Failed to create team")
}

pub async fn create_member(
    service: &QuarryService,
    username: Option<&str>,
    age: i32,
    team_id: Option<i64>,
) -> Member {
    service
        .create_member(CreateMemberInput {
            username: username.map(str::to_string),
            age,
            team_id,
        })
        .await
        .expect("Failed to create member")
}
