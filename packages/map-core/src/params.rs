use crate::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_ZOOM, MAX_DIMENSION, MIN_DIMENSION};
use crate::errors::MapError;

/// 検証済みのマップ画像リクエストパラメータ
#[derive(Debug, Clone, PartialEq)]
pub struct MapImageParams {
    pub lat: String,
    pub lng: String,
    pub width: u32,
    pub height: u32,
    pub zoom: String,
    pub marker: bool,
}

impl MapImageParams {
    /// 生のクエリ文字列からパラメータを構築する
    ///
    /// - `lat` / `lng` は必須（空文字も欠落扱い）
    /// - `w` / `h` はパース失敗時にデフォルト値、その後 [100, 2048] にクランプ
    /// - `zoom` は検証せずそのまま上流へ渡す（デフォルト "15"）
    /// - `marker` は省略時 "true"。リテラル "true" のみマーカーを有効にする
    pub fn from_query(
        lat: Option<String>,
        lng: Option<String>,
        w: Option<String>,
        h: Option<String>,
        zoom: Option<String>,
        marker: Option<String>,
    ) -> Result<Self, MapError> {
        let lat = require_coordinate(lat)?;
        let lng = require_coordinate(lng)?;

        Ok(Self {
            lat,
            lng,
            width: parse_dimension(w.as_deref(), DEFAULT_WIDTH),
            height: parse_dimension(h.as_deref(), DEFAULT_HEIGHT),
            zoom: zoom.unwrap_or_else(|| DEFAULT_ZOOM.to_string()),
            marker: marker.as_deref().unwrap_or("true") == "true",
        })
    }
}

fn require_coordinate(value: Option<String>) -> Result<String, MapError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| MapError::Validation("Missing lat or lng".to_string()))
}

/// 寸法文字列をパースして [MIN_DIMENSION, MAX_DIMENSION] にクランプする
///
/// パース失敗時はデフォルト値を採用する（デフォルト値は範囲内）。
/// 負数やオーバーフローを考慮して i64 でパースする。
fn parse_dimension(raw: Option<&str>, default: u32) -> u32 {
    let value = raw
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(i64::from(default));

    value.clamp(i64::from(MIN_DIMENSION), i64::from(MAX_DIMENSION)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(
        lat: Option<&str>,
        lng: Option<&str>,
        w: Option<&str>,
        h: Option<&str>,
        zoom: Option<&str>,
        marker: Option<&str>,
    ) -> Result<MapImageParams, MapError> {
        MapImageParams::from_query(
            lat.map(String::from),
            lng.map(String::from),
            w.map(String::from),
            h.map(String::from),
            zoom.map(String::from),
            marker.map(String::from),
        )
    }

    #[test]
    fn test_defaults() {
        let params = query(Some("35.68"), Some("139.76"), None, None, None, None).unwrap();
        assert_eq!(params.width, 600);
        assert_eq!(params.height, 300);
        assert_eq!(params.zoom, "15");
        assert!(params.marker);
    }

    #[test]
    fn test_missing_lat() {
        let result = query(None, Some("139.76"), None, None, None, None);
        assert!(matches!(result, Err(MapError::Validation(_))));
    }

    #[test]
    fn test_missing_lng() {
        let result = query(Some("35.68"), None, None, None, None, None);
        assert!(matches!(result, Err(MapError::Validation(_))));
    }

    #[test]
    fn test_empty_coordinate_is_missing() {
        let result = query(Some(""), Some("139.76"), None, None, None, None);
        assert!(matches!(result, Err(MapError::Validation(_))));
    }

    #[test]
    fn test_dimension_clamping() {
        let params = query(
            Some("35.68"),
            Some("139.76"),
            Some("50"),
            Some("5000"),
            None,
            None,
        )
        .unwrap();
        assert_eq!(params.width, 100);
        assert_eq!(params.height, 2048);
    }

    #[test]
    fn test_dimension_in_range_unchanged() {
        let params = query(
            Some("35.68"),
            Some("139.76"),
            Some("600"),
            Some("300"),
            None,
            None,
        )
        .unwrap();
        assert_eq!(params.width, 600);
        assert_eq!(params.height, 300);
    }

    #[test]
    fn test_dimension_parse_failure_uses_default() {
        let params = query(
            Some("35.68"),
            Some("139.76"),
            Some("abc"),
            Some("12.5"),
            None,
            None,
        )
        .unwrap();
        assert_eq!(params.width, 600);
        assert_eq!(params.height, 300);
    }

    #[test]
    fn test_negative_dimension_clamps_to_min() {
        let params = query(Some("35.68"), Some("139.76"), Some("-5"), None, None, None).unwrap();
        assert_eq!(params.width, 100);
    }

    #[test]
    fn test_marker_only_literal_true() {
        let on = query(Some("1"), Some("2"), None, None, None, Some("true")).unwrap();
        assert!(on.marker);

        // "true" 以外はすべて無効
        for value in ["false", "TRUE", "1", "yes", ""] {
            let off = query(Some("1"), Some("2"), None, None, None, Some(value)).unwrap();
            assert!(!off.marker, "marker={value:?} should disable the overlay");
        }
    }

    #[test]
    fn test_zoom_passed_through() {
        let params = query(Some("1"), Some("2"), None, None, Some("7"), None).unwrap();
        assert_eq!(params.zoom, "7");
    }
}
