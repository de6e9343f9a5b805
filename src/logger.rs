// Logging functions for server lifecycle, access log and errors
// Plain stdout/stderr; the access log line carries a local timestamp.

use std::net::SocketAddr;

use chrono::Local;
use hyper::{Method, StatusCode, Uri, Version};

use crate::config::Config;
use crate::types::QuoteRequest;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("{} site server started", config.site.name);
    println!("Listening on: http://{addr}");
    println!("Server: {}", config.http.server_name);
    println!("Log level: {}", config.logging.level);
    println!("Template directory: {}", config.resources.template_dir);
    println!("Static directory: {}", config.resources.static_dir);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] {method} {uri} {version:?}");
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        println!("[Headers] Count: {count}");
    }
}

/// One access log line per completed request
pub fn log_access(method: &Method, path: &str, status: StatusCode, size: usize) {
    println!(
        "[{}] \"{method} {path}\" {} {size}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        status.as_u16()
    );
}

/// Feedback submissions only exist in the log until storage lands
pub fn log_feedback(reaction: &str, comment: Option<&str>) {
    match comment {
        Some(text) => println!("[Feedback] {reaction} ({text})"),
        None => println!("[Feedback] {reaction}"),
    }
}

/// Quote requests only exist in the log until storage lands
pub fn log_quote_request(quote: &QuoteRequest) {
    let note = quote
        .message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default();
    println!(
        "[Quote] {} <{}> ({}) wants {}{note}",
        quote.name, quote.email, quote.phone, quote.service_type
    );
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
