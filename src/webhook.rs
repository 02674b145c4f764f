//! Webhook signature verification.
//!
//! Glassix signs outbound webhooks with two headers:
//!
//! - `X-Glassix-Auth-Date`: the signed payload (a timestamp string)
//! - `X-Glassix-Auth`: `sha1=` followed by the hex HMAC-SHA1 of the date,
//!   keyed with the workspace API secret
//!
//! Verification fails closed: a missing header, an empty value or any
//! hashing failure yields `false`.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use glassix::webhook::WebhookVerifier;
//!
//! let verifier = WebhookVerifier::new("s3cr3t");
//! let date = "2024-01-01T00:00:00Z";
//!
//! let mut headers = HashMap::new();
//! headers.insert("X-Glassix-Auth-Date".to_string(), date.to_string());
//! headers.insert("X-Glassix-Auth".to_string(), verifier.sign(date).unwrap());
//!
//! assert!(verifier.is_valid(&headers));
//! ```

use std::collections::HashMap;

use hmac::{Hmac, Mac};
use reqwest::header::HeaderMap;
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Header carrying the signature.
pub const AUTH_HEADER: &str = "X-Glassix-Auth";

/// Header carrying the signed date string.
pub const AUTH_DATE_HEADER: &str = "X-Glassix-Auth-Date";

/// Signature prefix.
const SIGNATURE_PREFIX: &str = "sha1=";

/// Read access to request headers by case-insensitive name.
pub trait HeaderSource {
    /// Returns the value of the named header, if present.
    fn header(&self, name: &str) -> Option<&str>;
}

impl HeaderSource for HashMap<String, String> {
    /// Prefers an exact name match; otherwise falls back to the
    /// lexicographically smallest key equal ignoring case, so the result
    /// does not depend on hash order.
    fn header(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.get(name) {
            return Some(value.as_str());
        }
        self.iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, value)| value.as_str())
    }
}

impl HeaderSource for HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Verifies `X-Glassix-Auth` signatures.
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: Vec<u8>,
}

impl WebhookVerifier {
    /// Creates a verifier keyed with the workspace API secret.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Returns true only if both headers are present and the signature
    /// matches the date.
    pub fn is_valid<H: HeaderSource + ?Sized>(&self, headers: &H) -> bool {
        let signature = match non_empty(headers.header(AUTH_HEADER)) {
            Some(value) => value,
            None => return false,
        };
        let date = match non_empty(headers.header(AUTH_DATE_HEADER)) {
            Some(value) => value,
            None => return false,
        };

        match self.sign(date) {
            Some(expected) => constant_time_eq_ignore_case(&expected, signature),
            None => false,
        }
    }

    /// Computes `sha1=<lowercase hex>` for the given date string.
    ///
    /// Returns `None` if the MAC cannot be initialized.
    pub fn sign(&self, date: &str) -> Option<String> {
        let mut mac = HmacSha1::new_from_slice(&self.secret).ok()?;
        mac.update(date.as_bytes());
        let digest = mac.finalize().into_bytes();
        Some(format!("{}{}", SIGNATURE_PREFIX, hex::encode(digest)))
    }
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// ASCII case-insensitive comparison whose running time does not depend on
/// where the inputs differ.
fn constant_time_eq_ignore_case(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x.to_ascii_lowercase() ^ y.to_ascii_lowercase();
    }
    result == 0
}
