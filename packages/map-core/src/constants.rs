/// 画像サイズのデフォルト値（幅）
pub const DEFAULT_WIDTH: u32 = 600;

/// 画像サイズのデフォルト値（高さ）
pub const DEFAULT_HEIGHT: u32 = 300;

/// 画像サイズの最小値（幅・高さ共通）
pub const MIN_DIMENSION: u32 = 100;

/// 画像サイズの最大値（幅・高さ共通）
pub const MAX_DIMENSION: u32 = 2048;

/// デフォルトのズームレベル（上流にそのまま渡す）
pub const DEFAULT_ZOOM: &str = "15";

/// 高解像度描画用の固定スケール倍率
pub const UPSTREAM_SCALE: u32 = 2;

/// Google Static Maps API のエンドポイント
pub const STATIC_MAP_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/staticmap";

/// 上流が Content-Type を返さない場合のフォールバック
pub const FALLBACK_CONTENT_TYPE: &str = "image/png";
