//! Request handling module
//!
//! Entry point for HTTP request processing: method gate, body size check,
//! body collection for POSTs, route lookup and dispatch to the endpoint
//! handlers.

pub mod api;
pub mod forms;
pub mod pages;
pub mod partials;
pub mod static_files;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::http;
use crate::logger;
use crate::routing::{RouteMatch, RouteTarget};

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let path = uri.path();
    let is_head = method == Method::HEAD;

    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(&method, &uri, req.version());
    }

    // 1. Method gate: GET/HEAD/POST are routed, OPTIONS answered here
    if let Some(resp) = check_http_method(&method, state.config.http.enable_cors) {
        return Ok(resp);
    }

    // 2. Declared body size against the configured cap
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let if_none_match = req
        .headers()
        .get("if-none-match")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    // 3. Collect the body for intake endpoints
    let body = if method == Method::POST {
        match req.into_body().collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(e) => {
                logger::log_error(&format!("Failed to read request body: {e}"));
                return Ok(http::build_500_response());
            }
        }
    } else {
        Bytes::new()
    };

    // 4. Route lookup and dispatch
    let response = dispatch(
        &method,
        path,
        &body,
        is_head,
        if_none_match.as_deref(),
        &state,
    )
    .await;

    if access_log {
        let size = response
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);
        logger::log_access(&method, path, response.status(), size);
    }

    Ok(response)
}

/// Route the request through the table and invoke the matching handler
pub async fn dispatch(
    method: &Method,
    path: &str,
    body: &Bytes,
    is_head: bool,
    if_none_match: Option<&str>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    match state.routes.lookup(method, path) {
        RouteMatch::Found(target) => match target {
            RouteTarget::Home => pages::home(state, is_head),
            RouteTarget::Services => pages::services(state, is_head),
            RouteTarget::ServiceArea => pages::service_area(state, is_head),
            RouteTarget::QuoteForm => pages::quote_form(state, is_head),
            RouteTarget::QuoteSubmit => forms::submit_quote(state, body),
            RouteTarget::ServiceAreaMap => partials::service_area_map(state),
            RouteTarget::DispatchStatus => partials::dispatch_status(state),
            RouteTarget::Feedback => api::submit_feedback(body),
            RouteTarget::Health => api::health(state),
            RouteTarget::Favicon => static_files::serve_favicon(state, if_none_match, is_head).await,
            RouteTarget::Assets => {
                static_files::serve_asset(state, path, if_none_match, is_head).await
            }
        },
        RouteMatch::MethodNotAllowed => {
            logger::log_warning(&format!("Method not allowed: {method} {path}"));
            http::build_405_response()
        }
        RouteMatch::NotFound => pages::not_found(state, is_head),
    }
}

/// Gate HTTP methods: None continues processing, Some is an early response
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD | Method::POST => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::config::Config;

    pub fn state() -> Arc<AppState> {
        let cfg = Config::load().expect("test config");
        Arc::new(AppState::new(cfg).expect("templates present in repo"))
    }

    pub async fn get(state: &Arc<AppState>, path: &str) -> Response<Full<Bytes>> {
        dispatch(&Method::GET, path, &Bytes::new(), false, None, state).await
    }

    pub async fn post(state: &Arc<AppState>, path: &str, body: &[u8]) -> Response<Full<Bytes>> {
        dispatch(
            &Method::POST,
            path,
            &Bytes::copy_from_slice(body),
            false,
            None,
            state,
        )
        .await
    }

    pub async fn body_text(response: Response<Full<Bytes>>) -> String {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("infallible body")
            .to_bytes();
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }
}
