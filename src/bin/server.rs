use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::server::app::run_server;
use trivia_api::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let path = dotenv::var("DB_PATH").expect("DB_PATH must be set");

    tracing::info!("Running db migrations...");
    run_migrations().await?;

    let pool = establish_connection(&path).await?;
    run_server(pool).await?;
    Ok(())
}
