use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    team::{entities::Team, ports::TeamRepository},
};
use crate::entity::teams;

#[derive(Debug, Clone)]
pub struct PostgresTeamRepository {
    pub db: DatabaseConnection,
}

impl PostgresTeamRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl TeamRepository for PostgresTeamRepository {
    async fn create(&self, name: String) -> Result<Team, CoreError> {
        let created = teams::ActiveModel {
            name: Set(name),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create team: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Team::from(created))
    }

    async fn find_by_id(&self, team_id: i64) -> Result<Option<Team>, CoreError> {
        let team = teams::Entity::find_by_id(team_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get team by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Team::from);

        Ok(team)
    }

    async fn find_all(&self) -> Result<Vec<Team>, CoreError> {
        let teams = teams::Entity::find()
            .order_by_asc(teams::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch teams: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Team::from)
            .collect::<Vec<Team>>();

        Ok(teams)
    }

    async fn delete_all(&self) -> Result<u64, CoreError> {
        let result = teams::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete all teams: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
