//! Quote form intake
//!
//! `POST /quote` must work as a plain form submission and as an
//! htmx-driven swap, so both outcomes are HTML fragments, never JSON.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::config::AppState;
use crate::handler::pages::render;
use crate::logger;
use crate::validate;
use crate::view::{QuoteErrorFragment, QuoteSuccessFragment};

/// Validate the submitted fields and answer with a confirmation or a
/// field-level error fragment.
pub fn submit_quote(state: &AppState, body: &Bytes) -> Response<Full<Bytes>> {
    match validate::parse_quote_form(body) {
        Ok(quote) => {
            // TODO: persist the request and send the SMTP notification once
            // the database/smtp settings stop being placeholders.
            logger::log_quote_request(&quote);
            let model = QuoteSuccessFragment { name: quote.name };
            render(
                state,
                "partials/quote-success.html",
                &model.vars(),
                StatusCode::OK,
                false,
            )
        }
        Err(err) => {
            let model = QuoteErrorFragment {
                field: err.field.to_string(),
                message: err.message,
            };
            render(
                state,
                "partials/quote-error.html",
                &model.vars(),
                StatusCode::UNPROCESSABLE_ENTITY,
                false,
            )
        }
    }
}
