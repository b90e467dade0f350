use std::env;

#[derive(Clone)]
pub struct Config {
    /// When absent the service runs degraded: reads serve the hardcoded
    /// event defaults and writes return 503.
    pub database_url: Option<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").ok(),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
        }
    }
}
