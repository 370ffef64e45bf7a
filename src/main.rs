use std::net::SocketAddr;
use std::sync::Arc;
use tonic::transport::Server;
use tracing::info;
use user_service::config::config;
use user_service::db::sqlite_service::SqliteService;
use user_service::grpc::users;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = config();
    let address: SocketAddr = config.grpc.address().parse()?;

    let sqlite_service = Arc::new(
        SqliteService::new(&config.db.url, config.db.max_connections).await?,
    );

    info!(%address, "Starting gRPC server..");
    Server::builder()
        .add_service(users::server(sqlite_service))
        .serve_with_shutdown(address, async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
            }
        })
        .await?;

    info!("Server stopped");
    Ok(())
}
