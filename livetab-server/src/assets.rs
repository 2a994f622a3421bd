//! Bundled front-end assets served under `/assets`.

use std::path::Path;

use axum::{
    extract,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use include_dir::{include_dir, Dir};

static ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

pub fn get(path: &str) -> Option<&'static [u8]> {
    ASSETS.get_file(path).map(|file| file.contents())
}

pub async fn serve_asset(extract::Path(path): extract::Path<String>) -> Response {
    match get(&path) {
        Some(contents) => ([(header::CONTENT_TYPE, content_type_for_path(&path))], contents).into_response(),
        None => (StatusCode::NOT_FOUND, "asset not found").into_response(),
    }
}

fn content_type_for_path(path: &str) -> &'static str {
    match Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
        .as_str()
    {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "ico" => "image/x-icon",
        "woff2" => "font/woff2",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_files() {
        assert!(get("livetab.js").is_some());
        assert!(get("style.css").is_some());
        assert!(get("missing.js").is_none());
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for_path("livetab.js"), "application/javascript; charset=utf-8");
        assert_eq!(content_type_for_path("style.CSS"), "text/css; charset=utf-8");
        assert_eq!(content_type_for_path("blob"), "application/octet-stream");
    }
}
