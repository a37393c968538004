pub mod constants;
pub mod credential;
pub mod errors;
pub mod params;
pub mod url;

// 公開API
pub use constants::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_ZOOM, FALLBACK_CONTENT_TYPE, MAX_DIMENSION,
    MIN_DIMENSION, STATIC_MAP_ENDPOINT, UPSTREAM_SCALE,
};
pub use credential::{ApiKey, API_KEY_ENV_VARS};
pub use errors::{ConfigError, MapError, UpstreamError};
pub use params::MapImageParams;
pub use url::static_map_query;
