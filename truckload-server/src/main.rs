mod handlers;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use log::info;
use std::env;
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting truckload-server");

    let port = match env::var("PORT") {
        Ok(port) => port.parse::<u16>().context("PORT must be a port number")?,
        Err(_) => 8080,
    };

    let app = Router::new().route("/", get(handlers::form).post(handlers::upload));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("could not bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
