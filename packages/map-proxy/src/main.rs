use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use map_core::ApiKey;

use crate::upstream::StaticMapClient;

mod handler;
mod upstream;

/// 全ハンドラで共有する状態
///
/// クレデンシャルは起動時に一度だけ解決し、以降は不変。
/// 未設定でも起動は継続し、リクエスト毎に 500 を返す（元実装と同じ挙動）。
#[derive(Clone)]
pub struct AppState {
    pub upstream: StaticMapClient,
    pub api_key: Option<ApiKey>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handler::map_image))
        .route("/health", get(handler::health))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let api_key = match ApiKey::from_env() {
        Ok(key) => Some(key),
        Err(e) => {
            tracing::warn!(error = %e, "starting without a Maps API key");
            None
        }
    };

    let state = AppState {
        upstream: StaticMapClient::new(),
        api_key,
    };

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = format!("0.0.0.0:{port}");

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "map proxy listening");

    axum::serve(listener, router(state)).await
}
