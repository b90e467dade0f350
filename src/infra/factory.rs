use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::{info, warn};
use tracing::log::LevelFilter;
use tera::Tera;

use crate::config::Config;
use crate::state::AppState;
use crate::infra::repositories::{
    fallback::{FallbackEventSettingsRepo, FallbackRsvpRepo, FallbackVideoRepo},
    postgres_rsvp_repo::PostgresRsvpRepo,
    postgres_settings_repo::PostgresEventSettingsRepo,
    postgres_video_repo::PostgresVideoRepo,
    sqlite_rsvp_repo::SqliteRsvpRepo,
    sqlite_settings_repo::SqliteEventSettingsRepo,
    sqlite_video_repo::SqliteVideoRepo,
};

pub fn load_templates() -> Arc<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_template("invite.html", include_str!("../templates/invite.html"))
        .expect("Failed to load invitation template");
    Arc::new(tera)
}

pub async fn bootstrap_state(config: &Config) -> AppState {
    let templates = load_templates();

    let Some(database_url) = config.database_url.clone() else {
        warn!("DATABASE_URL not set. Running degraded: reads serve fallback data, writes return 503.");
        return AppState {
            config: config.clone(),
            settings_repo: Arc::new(FallbackEventSettingsRepo),
            rsvp_repo: Arc::new(FallbackRsvpRepo),
            video_repo: Arc::new(FallbackVideoRepo),
            templates,
        };
    };

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            settings_repo: Arc::new(PostgresEventSettingsRepo::new(pool.clone())),
            rsvp_repo: Arc::new(PostgresRsvpRepo::new(pool.clone())),
            video_repo: Arc::new(PostgresVideoRepo::new(pool)),
            templates,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(&database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            settings_repo: Arc::new(SqliteEventSettingsRepo::new(pool.clone())),
            rsvp_repo: Arc::new(SqliteRsvpRepo::new(pool.clone())),
            video_repo: Arc::new(SqliteVideoRepo::new(pool)),
            templates,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
