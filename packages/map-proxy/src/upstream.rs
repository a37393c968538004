use bytes::Bytes;
use reqwest::Client;

use map_core::{UpstreamError, FALLBACK_CONTENT_TYPE, STATIC_MAP_ENDPOINT};

/// 上流から取得した画像レスポンス
///
/// 1リクエストの間だけ存在し、クライアントへ書き出したら破棄される。
#[derive(Debug)]
pub struct FetchedImage {
    pub content_type: String,
    pub body: Bytes,
}

/// Static Maps API クライアント
#[derive(Clone)]
pub struct StaticMapClient {
    client: Client,
    base_url: String,
}

impl StaticMapClient {
    /// Google Static Maps API を向いたクライアントを作成する
    pub fn new() -> Self {
        Self::with_base_url(STATIC_MAP_ENDPOINT)
    }

    /// エンドポイントを差し替えたクライアントを作成する（テスト用スタブ向け）
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// クエリ文字列を付けて画像を1回だけ取得する
    ///
    /// リトライなし。上流のステータスコードは検査せず、
    /// 返ってきたバイト列と Content-Type をそのまま呼び出し元へ渡す。
    /// `query` は API キーを含むため URL をログに出さないこと。
    pub async fn fetch(&self, query: &str) -> Result<FetchedImage, UpstreamError> {
        let url = format!("{}?{}", self.base_url, query);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();

        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Body(e.to_string()))?;

        Ok(FetchedImage { content_type, body })
    }
}

impl Default for StaticMapClient {
    fn default() -> Self {
        Self::new()
    }
}
