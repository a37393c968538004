pub mod types;

pub use types::{ConfigError, MapError, UpstreamError};
