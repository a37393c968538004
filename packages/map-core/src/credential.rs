use crate::errors::ConfigError;

/// 環境変数の探索順。先頭が本番用、後続はデプロイ先違いのフォールバック。
pub const API_KEY_ENV_VARS: [&str; 2] = ["GOOGLE_MAPS_API_KEY", "VITE_GOOGLE_MAPS_API_KEY"];

/// Static Maps API のクレデンシャル
///
/// プロセス起動時に一度だけ解決し、以降は不変。
/// ログへの流出を防ぐため Debug 出力はマスクされる。
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 環境変数から API キーを解決する
    ///
    /// `GOOGLE_MAPS_API_KEY` → `VITE_GOOGLE_MAPS_API_KEY` の順で探索し、
    /// 最初の非空値を採用する。どちらも無ければエラー。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// 探索順に従って最初の非空値を採用する
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.is_empty())
            .map(Self)
            .ok_or(ConfigError::MissingApiKey)
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
