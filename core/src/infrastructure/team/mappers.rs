use crate::domain::team::entities::Team;
use crate::entity::teams::Model as TeamModel;

impl From<&TeamModel> for Team {
    fn from(model: &TeamModel) -> Self {
        Team {
            id: model.id,
            name: model.name.clone(),
        }
    }
}

impl From<TeamModel> for Team {
    fn from(model: TeamModel) -> Self {
        Team {
            id: model.id,
            name: model.name,
        }
    }
}
