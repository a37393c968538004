use crate::constants::UPSTREAM_SCALE;
use crate::credential::ApiKey;
use crate::params::MapImageParams;

/// Static Maps API へのクエリ文字列を組み立てる
///
/// 同一パラメータからは常に同一の文字列が得られる。
/// API キーを含むため、組み立てた文字列をログに出してはならない。
pub fn static_map_query(params: &MapImageParams, key: &ApiKey) -> String {
    let marker_param = if params.marker {
        // %7C はパイプ区切り（color:red|lat,lng）
        format!("&markers=color:red%7C{},{}", params.lat, params.lng)
    } else {
        String::new()
    };

    format!(
        "center={lat},{lng}&zoom={zoom}&size={w}x{h}{marker}&key={key}&scale={scale}",
        lat = params.lat,
        lng = params.lng,
        zoom = params.zoom,
        w = params.width,
        h = params.height,
        marker = marker_param,
        key = key.as_str(),
        scale = UPSTREAM_SCALE,
    )
}
