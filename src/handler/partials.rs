//! Fragment handlers for progressive enhancement
//!
//! Small HTML pieces the client splices into an already-rendered page:
//! the lazy service-area map and the polled dispatch status.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::config::AppState;
use crate::handler::pages::render;
use crate::types::DispatchStatusSnapshot;
use crate::view::{DispatchStatusFragment, ServiceAreaMapFragment};

// Dispatch board placeholders until the real dispatch feed exists.
// TODO: replace with live values once the dispatch system exposes them.
const TECHNICIANS_AVAILABLE: u32 = 2;
const AVG_RESPONSE_TIME_HOURS: f64 = 2.0;
const CURRENT_CALLS: u32 = 3;

/// Build a fresh snapshot per request. The client polls every 30 s, so the
/// values are regenerated each time even though they cannot change yet.
pub fn current_snapshot() -> DispatchStatusSnapshot {
    DispatchStatusSnapshot {
        technicians_available: TECHNICIANS_AVAILABLE,
        avg_response_time_hours: AVG_RESPONSE_TIME_HOURS,
        current_calls: CURRENT_CALLS,
    }
}

/// `GET /partials/service-area-map`: lazy-loaded area list
pub fn service_area_map(state: &AppState) -> Response<Full<Bytes>> {
    let model = ServiceAreaMapFragment {
        areas: &state.config.site.service_areas,
    };
    render(
        state,
        "partials/service-area-map.html",
        &model.vars(),
        StatusCode::OK,
        false,
    )
}

/// `GET /api/dispatch-status`: polled status fragment
pub fn dispatch_status(state: &AppState) -> Response<Full<Bytes>> {
    let model = DispatchStatusFragment {
        status: current_snapshot(),
    };
    render(
        state,
        "partials/dispatch-status.html",
        &model.vars(),
        StatusCode::OK,
        false,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_fixed() {
        let a = current_snapshot();
        let b = current_snapshot();
        assert_eq!(a, b);
        assert_eq!(a.technicians_available, 2);
        assert!((a.avg_response_time_hours - 2.0).abs() < f64::EPSILON);
        assert_eq!(a.current_calls, 3);
    }
}
