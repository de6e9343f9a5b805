//! Static asset serving
//!
//! Traversal-protected reads from the configured static directory, with
//! MIME detection and ETag-based conditional responses.

use std::path::Path;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::config::AppState;
use crate::handler::pages;
use crate::http::{self, cache, mime};
use crate::logger;

const ASSET_MAX_AGE: u32 = 3600;
const FAVICON_MAX_AGE: u32 = 86400;

/// Serve a file under the `/static/` mount
pub async fn serve_asset(
    state: &AppState,
    path: &str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let static_dir = &state.config.resources.static_dir;
    match load_from_directory(static_dir, path).await {
        Some((content, content_type)) => {
            build_asset_response(&content, content_type, if_none_match, ASSET_MAX_AGE, is_head)
        }
        None => pages::not_found(state, is_head),
    }
}

/// Serve the favicon for both `/favicon.svg` and `/favicon.ico` requests
pub async fn serve_favicon(
    state: &AppState,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let path = Path::new(&state.config.resources.static_dir).join("favicon.svg");
    match fs::read(&path).await {
        Ok(data) => build_asset_response(
            &data,
            "image/svg+xml",
            if_none_match,
            FAVICON_MAX_AGE,
            is_head,
        ),
        Err(e) => {
            logger::log_warning(&format!("Favicon not readable at {}: {e}", path.display()));
            pages::not_found(state, is_head)
        }
    }
}

/// Load a file beneath `static_dir` from a `/static/...` request path
async fn load_from_directory(static_dir: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let clean_path = path.trim_start_matches('/').replace("..", "");
    let relative_path = clean_path.strip_prefix("static/").unwrap_or(&clean_path);
    let file_path = Path::new(static_dir).join(relative_path);

    // Canonicalize both sides so symlinks cannot escape the mount
    let static_dir_canonical = match Path::new(static_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{static_dir}': {e}"
            ));
            return None;
        }
    };
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        // Missing files are ordinary 404s
        return None;
    };
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {path} -> {}",
            file_path_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path_canonical.display()
            ));
            return None;
        }
    };
    let content_type = mime::get_content_type(
        file_path_canonical
            .extension()
            .and_then(|ext| ext.to_str()),
    );
    Some((content, content_type))
}

fn build_asset_response(
    data: &[u8],
    content_type: &'static str,
    if_none_match: Option<&str>,
    max_age: u32,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);
    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }
    http::build_cached_response(
        Bytes::from(data.to_owned()),
        content_type,
        &etag,
        max_age,
        is_head,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_loads_repo_stylesheet() {
        let (content, content_type) = load_from_directory("static", "/static/css/site.css")
            .await
            .expect("stylesheet ships with the repo");
        assert!(!content.is_empty());
        assert_eq!(content_type, "text/css");
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        assert!(load_from_directory("static", "/static/nope.css")
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_traversal_is_blocked() {
        assert!(load_from_directory("static", "/static/../Cargo.toml")
            .await
            .is_none());
        assert!(load_from_directory("static", "/static/%2e%2e/Cargo.toml")
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_conditional_request_hits_304() {
        let (content, content_type) = load_from_directory("static", "/static/css/site.css")
            .await
            .unwrap();
        let etag = cache::generate_etag(&content);
        let resp = build_asset_response(&content, content_type, Some(&etag), ASSET_MAX_AGE, false);
        assert_eq!(resp.status(), 304);
    }
}
