//! Access-token inspection.
//!
//! The client never verifies the token signature — that is the backend's job.
//! It only needs the payload segment to read the subject and the expiry
//! timestamp, so a stored token can be checked for staleness before a request
//! is ever made. A token that fails to decode is treated exactly like an
//! expired one.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

/// Claims the client cares about. Everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject — the user id, when the backend puts one there.
    #[serde(default)]
    pub sub: Option<String>,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    /// Whether the token was expired at `now` (seconds since the Unix epoch).
    /// `exp` is exclusive: a token expires the instant `now` reaches it.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }
}

/// Decode the payload segment of a JWT without verifying it.
pub fn decode(token: &str) -> Result<Claims, TokenError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed);
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| TokenError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::Malformed)
}

/// Current time in seconds since the Unix epoch.
pub fn unix_now() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    #[error("stored credential could not be decoded")]
    Malformed,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn test_decode_valid_token() {
        let token = make_token(r#"{"sub":"user-1","exp":4102444800}"#);
        let claims = decode(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("user-1"));
        assert_eq!(claims.exp, 4102444800);
    }

    #[test]
    fn test_decode_token_without_sub() {
        let token = make_token(r#"{"exp":100}"#);
        let claims = decode(&token).unwrap();
        assert!(claims.sub.is_none());
    }

    #[test]
    fn test_decode_rejects_wrong_segment_count() {
        assert_eq!(decode("only-one-segment"), Err(TokenError::Malformed));
        assert_eq!(decode("a.b"), Err(TokenError::Malformed));
        assert_eq!(decode("a.b.c.d"), Err(TokenError::Malformed));
    }

    #[test]
    fn test_decode_rejects_non_base64_payload() {
        assert_eq!(decode("a.!!!.c"), Err(TokenError::Malformed));
    }

    #[test]
    fn test_decode_rejects_non_json_payload() {
        let body = URL_SAFE_NO_PAD.encode(b"not json");
        assert_eq!(decode(&format!("a.{body}.c")), Err(TokenError::Malformed));
    }

    #[test]
    fn test_expiry_comparison() {
        let claims = Claims {
            sub: None,
            exp: 1000,
        };
        assert!(claims.is_expired_at(1001));
        assert!(claims.is_expired_at(1000), "expiry instant is exclusive");
        assert!(!claims.is_expired_at(999));
    }
}
