//! JSON endpoints: feedback intake and the health probe

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::config::AppState;
use crate::http::json_response;
use crate::logger;
use crate::types::FeedbackAck;
use crate::validate::{self, FieldError};

/// `POST /api/feedback`: structural validation, then an acknowledgement.
pub fn submit_feedback(body: &Bytes) -> Response<Full<Bytes>> {
    match validate::parse_feedback(body) {
        Ok(feedback) => {
            // TODO: store the submission and notify the owner once
            // persistence exists; until then the log line is the record.
            logger::log_feedback(feedback.reaction.symbol(), feedback.comment.as_deref());
            let ack = FeedbackAck {
                success: true,
                message: "Thank you for your feedback!".to_string(),
                reaction: feedback.reaction.symbol().to_string(),
            };
            json_response(StatusCode::OK, &ack)
        }
        Err(err) => validation_error(&err),
    }
}

/// `GET /health`: liveness plus the performance targets the site is held to
pub fn health(state: &AppState) -> Response<Full<Bytes>> {
    let targets = &state.config.targets;
    let body = serde_json::json!({
        "status": "healthy",
        "service": state.config.site.name,
        "performance_targets": {
            "lighthouse": format!("≥{}", targets.lighthouse_score),
            "js_size": format!("<{}KB", targets.max_js_kb),
            "cls": format!("{:.1}", targets.cls),
            "lcp": format!("<{:.1}s", f64::from(targets.lcp_ms) / 1000.0),
        }
    });
    json_response(StatusCode::OK, &body)
}

/// 422 with the offending field, mirroring the structural-validation shape
fn validation_error(err: &FieldError) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "success": false,
        "error": {
            "field": err.field,
            "message": err.message,
        }
    });
    json_response(StatusCode::UNPROCESSABLE_ENTITY, &body)
}
