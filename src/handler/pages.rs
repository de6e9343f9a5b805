//! Full-page handlers
//!
//! Each page binds its view model into a preloaded template. The not-found
//! page goes through the same path so unmatched routes get the themed
//! document instead of a framework default.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::config::AppState;
use crate::http;
use crate::logger;
use crate::view::{HomePage, SimplePage};

/// Homepage: identity plus service-area list
pub fn home(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let model = HomePage {
        site: &state.config.site,
    };
    render(state, "index.html", &model.vars(), StatusCode::OK, is_head)
}

/// Services page, circuit-breaker panel layout
pub fn services(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let model = SimplePage {
        site: &state.config.site,
    };
    render(state, "services.html", &model.vars(), StatusCode::OK, is_head)
}

/// Service-area page; the map itself arrives via the lazy fragment
pub fn service_area(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let model = SimplePage {
        site: &state.config.site,
    };
    render(
        state,
        "service-area.html",
        &model.vars(),
        StatusCode::OK,
        is_head,
    )
}

/// Quote request form
pub fn quote_form(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let model = SimplePage {
        site: &state.config.site,
    };
    render(state, "quote.html", &model.vars(), StatusCode::OK, is_head)
}

/// Themed not-found document
pub fn not_found(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let model = SimplePage {
        site: &state.config.site,
    };
    render(
        state,
        "404.html",
        &model.vars(),
        StatusCode::NOT_FOUND,
        is_head,
    )
}

/// Render a template with the given variables, or 500 when it is missing
pub fn render(
    state: &AppState,
    template: &str,
    vars: &[(&str, String)],
    status: StatusCode,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match state.templates.render(template, vars) {
        Some(html) => http::build_html_response(html, status, is_head),
        None => {
            logger::log_error(&format!("Template not found: {template}"));
            http::build_500_response()
        }
    }
}
