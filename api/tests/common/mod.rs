#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use quarry_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use quarry_core::{
    application::{QuarryService, create_service_with_connection},
    domain::{
        member::{ports::MemberService, value_objects::CreateMemberInput},
        team::{entities::Team, ports::TeamService, value_objects::CreateTeamInput},
    },
};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use test_context::AsyncTestContext;

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

async fn setup_test_db() -> DatabaseConnection {
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

/// HTTP server over the full router, backed by a fresh in-memory database.
pub struct ApiContext {
    pub server: TestServer,
    pub service: QuarryService,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let args = Arc::new(Args::parse_from(["quarry", "--metrics-enabled", "false"]));
        let service = create_service_with_connection(setup_test_db().await);

        let app = router(AppState::new(args, service.clone())).expect("Failed to build router");
        let server = TestServer::new(app).expect("Failed to start test server");

        ApiContext { server, service }
    }
}

impl ApiContext {
    /// teamA: member1 (10), member2 (20). teamB: member3 (30), member4 (40).
    pub async fn seed_members(&self) -> (Team, Team) {
        let team_a = self.create_team("teamA").await;
        let team_b = self.create_team("teamB").await;

        for (i, team) in [&team_a, &team_a, &team_b, &team_b].into_iter().enumerate() {
            let n = i as i32 + 1;
            self.service
                .create_member(CreateMemberInput {
                    username: Some(format!("member{n}")),
                    age: n * 10,
                    team_id: Some(team.id),
                })
                .await
                .expect("Failed to create member");
        }

        (team_a, team_b)
    }

    pub async fn create_team(&self, name: &str) -> Team {
        self.service
            .create_team(CreateTeamInput {
                name: name.to_string(),
            })
            .await
            .expect("Failed to create team")
    }
}
