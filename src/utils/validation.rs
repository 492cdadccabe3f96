use crate::domain::model::Session;
use crate::utils::error::{MiddlewareError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks that both session cookies are present. Services call this before
/// dispatching to the legacy system, so unauthenticated callers never cause
/// an outbound request.
pub fn ensure_session(session: &Session) -> Result<()> {
    if is_blank(&session.session_id) || is_blank(&session.username) {
        return Err(MiddlewareError::InvalidState {
            message: "session cookies are absent".to_string(),
        });
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MiddlewareError::ConfigError {
            message: format!("{}: URL cannot be empty", field_name),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MiddlewareError::ConfigError {
                message: format!("{}: unsupported URL scheme: {}", field_name, scheme),
            }),
        },
        Err(e) => Err(MiddlewareError::ConfigError {
            message: format!("{}: invalid URL format: {}", field_name, e),
        }),
    }
}
