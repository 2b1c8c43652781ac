pub mod entities;
pub mod pagination;
pub mod services;

#[derive(Clone, Debug)]
pub struct QuarryConfig {
    pub database: DatabaseConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

/// Returns `true` when the value contains at least one non-whitespace character.
pub fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}
