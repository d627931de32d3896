//! Security headers middleware.
//!
//! Every response carries a Content-Security-Policy locked to 'self'
//! (the page only references its own static assets), plus
//! X-Content-Type-Options and X-Frame-Options.

use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use tower_http::set_header::SetResponseHeaderLayer;

/// Content-Security-Policy header value.
const CSP: &str = "default-src 'self'; \
                   script-src 'self'; \
                   style-src 'self' 'unsafe-inline'; \
                   font-src 'self' data:; \
                   img-src 'self' data:; \
                   frame-ancestors 'none'";

/// Header layer type used for all security headers.
pub(crate) type HeaderLayer = SetResponseHeaderLayer<HeaderValue>;

/// Build the security header layers applied to every response.
pub(crate) fn header_layers() -> (HeaderLayer, HeaderLayer, HeaderLayer) {
    (
        set_header("content-security-policy", CSP),
        set_header("x-content-type-options", "nosniff"),
        set_header("x-frame-options", "DENY"),
    )
}

fn set_header(name: &'static str, value: &'static str) -> HeaderLayer {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static(name),
        HeaderValue::from_static(value),
    )
}
