use thiserror::Error;

/// マッププロキシの統合エラー型
#[derive(Debug, Error)]
pub enum MapError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),
}

/// 設定エラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Maps API key not configured")]
    MissingApiKey,
}

/// 上流（Static Maps API）アクセスエラー
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("failed to read upstream body: {0}")]
    Body(String),
}
