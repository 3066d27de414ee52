// SPDX-License-Identifier: MIT

mod api;
mod config;
mod currencies;
mod db;
mod error;
mod exchange_rates;
mod models;

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Currency exchange rate HTTP service")]
struct Cli {
    /// Address to serve the HTTP API on
    #[arg(long, default_value = "0.0.0.0:8000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = config::load_config()?;

    let pool = db::create_db_pool(&config.database_url).await?;

    let state = api::AppState {
        pool,
        http: reqwest::Client::new(),
        api_key: config.api_key,
        rates_api_url: config.rates_api_url,
    };
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(cli.listen).await?;
    tracing::info!(addr = %cli.listen, "serving currency exchange API");
    axum::serve(listener, app).await?;

    Ok(())
}
