use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, PoolError};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use thiserror::Error;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../migrations");

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

/// SQLite path used for a database that lives only as long as its connection.
pub const IN_MEMORY: &str = ":memory:";

/// SQLite rejects statements that bind more variables than this.
pub const SQLITE_MAX_VARIABLES: usize = 32766;

/// Items bound per statement when a list has to be split. Leaves room for
/// join-row batch inserts, which bind two variables per row.
pub const BIND_CHUNK: usize = SQLITE_MAX_VARIABLES / 4;

#[derive(Error, Debug)]
pub enum DbSetupError {
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),

    #[error("failed to run database migrations: {0}")]
    Migrations(Box<dyn std::error::Error + Send + Sync>),
}

/// Applied to every connection the pool opens. SQLite leaves foreign keys
/// off per connection, and the join tables rely on them for cascades.
#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(r2d2::Error::QueryError)
    }
}

pub fn create_pool(database_url: &str, max_size: u32) -> Result<DbPool, DbSetupError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let mut builder = r2d2::Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(SqlitePragmas));

    // Every in-memory connection is its own empty database: pin to a single
    // connection that is never recycled.
    if database_url == IN_MEMORY {
        builder = builder.max_size(1).idle_timeout(None).max_lifetime(None);
    }

    let pool = builder.build(manager)?;

    // Run pending migrations on startup
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(DbSetupError::Migrations)?;
    tracing::debug!(count = applied.len(), "database migrations applied");

    Ok(pool)
}
