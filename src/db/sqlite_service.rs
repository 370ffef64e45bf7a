use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

#[derive(Clone)]
pub struct SqliteService {
    pub(crate) database_connection: DatabaseConnection,
}

impl SqliteService {
    pub async fn new(uri: &str, max_connections: u32) -> Result<Self, DbErr> {
        info!(uri, max_connections, "Connecting to SQLite...");
        let mut options = ConnectOptions::new(uri);
        options
            .max_connections(max_connections)
            .sqlx_logging(false);
        let database_connection = Database::connect(options).await?;

        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Connected to SQLite.");

        Ok(Self { database_connection })
    }
}
