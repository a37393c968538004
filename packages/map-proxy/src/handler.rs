use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::upstream::FetchedImage;
use crate::AppState;
use map_core::{static_map_query, ConfigError, MapError, MapImageParams, UpstreamError};

/// 生のクエリパラメータ
///
/// 数値を期待するフィールドも文字列で受ける。不正値でデシリアライズを
/// 失敗させず、パース失敗時のデフォルト適用を map-core 側に委ねるため。
#[derive(Debug, Deserialize)]
pub struct MapImageQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub w: Option<String>,
    pub h: Option<String>,
    pub zoom: Option<String>,
    pub marker: Option<String>,
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// マップ画像を取得して中継する
///
/// 上流のバイト列と Content-Type を無加工で返す透過リレー。
pub async fn map_image(
    State(state): State<AppState>,
    Query(query): Query<MapImageQuery>,
) -> Result<Response, AppError> {
    let params = MapImageParams::from_query(
        query.lat,
        query.lng,
        query.w,
        query.h,
        query.zoom,
        query.marker,
    )?;

    let key = state.api_key.as_ref().ok_or(ConfigError::MissingApiKey)?;

    tracing::info!(
        lat = %params.lat,
        lng = %params.lng,
        w = %params.width,
        h = %params.height,
        zoom = %params.zoom,
        marker = %params.marker,
        "fetching static map"
    );

    // 組み立てた URL は API キーを含むためログに出さない
    let FetchedImage { content_type, body } = state
        .upstream
        .fetch(&static_map_query(&params, key))
        .await?;

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, content_type)], body).into_response())
}

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    ConfigMissing,
    UpstreamUnavailable(String),
}

impl From<MapError> for AppError {
    fn from(err: MapError) -> Self {
        match err {
            MapError::Validation(msg) => {
                tracing::warn!(error = %msg, "validation error");
                AppError::BadRequest(msg)
            }
            MapError::Config(config_err) => config_err.into(),
            MapError::Upstream(upstream_err) => upstream_err.into(),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::MissingApiKey => {
                tracing::error!("no Maps API key in either environment slot");
                AppError::ConfigMissing
            }
        }
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        AppError::UpstreamUnavailable(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::ConfigMissing => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Maps API key not configured".to_string(),
            ),
            AppError::UpstreamUnavailable(detail) => {
                // 失敗の詳細は診断ログのみ。呼び出し元には固定メッセージを返す
                tracing::error!(error = %detail, "upstream fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error fetching map".to_string(),
                )
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
