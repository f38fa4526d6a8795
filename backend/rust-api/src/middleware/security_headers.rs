// Security headers for every response.
// Pages are self-contained: inline styles only, no scripts, no third-party origins.

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use axum::http::{HeaderName, HeaderValue};

const HEADERS: [(&str, &str); 5] = [
    // Prevent MIME type sniffing
    ("x-content-type-options", "nosniff"),
    // Prevent clickjacking
    ("x-frame-options", "DENY"),
    (
        "content-security-policy",
        "default-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; form-action 'self'",
    ),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    ("permissions-policy", "geolocation=(), microphone=(), camera=()"),
];

pub async fn security_headers_middleware(
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    for (name, value) in HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
    // HSTS is left to the TLS-terminating proxy.
    response
}
