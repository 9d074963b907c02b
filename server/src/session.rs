//! The admin flag as it crosses HTTP.
//!
//! The flag itself lives on the client (local persistent storage);
//! requests replay it in a header. The server trusts it exactly as much
//! as the client-side gate does: it is a UI gate, not a credential.
use axum::http::HeaderMap;

/// Header carrying the Admin Session Flag.
pub const SESSION_HEADER: &str = "x-admin-authenticated";

/// The flag counts as present only when the header value is exactly
/// `"true"`.
pub fn authenticated(headers: &HeaderMap) -> bool {
    headers.get(SESSION_HEADER).and_then(|v| v.to_str().ok()) == Some("true")
}
