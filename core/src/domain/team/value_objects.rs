pub struct CreateTeamInput {
    pub name: String,
}
