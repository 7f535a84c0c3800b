//! Display-only token payload decoding.
//!
//! The client holds no key, so it cannot verify a token it receives;
//! it only needs the identity fields for rendering. Decoding here
//! parses the payload segment and nothing else. The result MUST NOT
//! be used for an authorization decision - that is the validator's job.

use crate::Claims;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Parse the payload segment of a token without verifying anything.
///
/// Returns `None` for any malformed input: wrong segment count, invalid
/// base64url, or a payload that is not a claims object. Never panics.
pub fn decode_unverified(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (_header, payload, _signature) =
        (segments.next()?, segments.next()?, segments.next()?);
    if segments.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}
