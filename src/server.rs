//! HTTP server initialization and runtime setup.
//!
//! Handles the MongoDB client construction, state assembly, and Axum server
//! lifecycle.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::{DATABASE_NAME, MongoLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use bson::doc;
use mongodb::Client;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client (with a connectivity ping)
/// - Link repository and service
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or ping fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = connect(&config.mongo_details).await?;
    tracing::info!("Connected to MongoDB database '{DATABASE_NAME}'");

    let link_repository = Arc::new(MongoLinkRepository::new(&client));
    let link_service = Arc::new(LinkService::new(link_repository));

    let state = AppState::new(link_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Connects to MongoDB and verifies the connection with a ping.
///
/// `serverSelectionTimeoutMS` keeps startup from hanging when the store is
/// unreachable.
async fn connect(uri: &str) -> Result<Client> {
    let timeout_uri = if uri.contains('?') {
        format!("{uri}&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000")
    } else {
        format!("{uri}?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000")
    };

    let client = Client::with_uri_str(&timeout_uri).await?;

    client
        .database(DATABASE_NAME)
        .run_command(doc! { "ping": 1 })
        .await?;

    Ok(client)
}
