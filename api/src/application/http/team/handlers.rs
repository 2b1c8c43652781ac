pub mod create_team;
pub mod get_team_age_stats;
pub mod get_team_members;
pub mod get_teams;
