use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::security::constant_time_compare;

/// Bearer credential handed to a protected page for one render cycle.
///
/// Owned by the session gate: issued when the provider vouches for a
/// subject and a fresh token lands, discarded on sign-out or any
/// validation failure. The gate re-checks validity before every handoff,
/// so a page never sees an expired credential.
#[derive(Debug, Clone)]
pub struct SessionCredential {
    token: String,
    subject_id: String,
    expires_at: Option<DateTime<Utc>>,
}

impl SessionCredential {
    /// Build a credential from a freshly issued token.
    ///
    /// The expiry instant is derived from the token's `exp` claim when
    /// the token is JWT-shaped. The signature is never verified here;
    /// verification is the backend's job, the client only needs the
    /// instant after which the token is certainly useless.
    pub fn issue(token: impl Into<String>, subject_id: impl Into<String>) -> Self {
        let token = token.into();
        let expires_at = decode_expiry(&token);
        Self {
            token,
            subject_id: subject_id.into(),
            expires_at,
        }
    }

    /// The opaque bearer token, sent as `Authorization: Bearer <token>`.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Identifier of the subject the token was issued for.
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    /// Expiry instant, when one could be derived from the token.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Whether the credential is still usable at `now`.
    ///
    /// A credential with no derivable expiry stays valid until the
    /// provider reports a session change; the provider vouched for it at
    /// issuance.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now < expires_at,
            None => true,
        }
    }

    /// Whether the credential is still usable right now.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}

impl PartialEq for SessionCredential {
    fn eq(&self, other: &Self) -> bool {
        // Token comparison in constant time.
        constant_time_compare(&self.token, &other.token) && self.subject_id == other.subject_id
    }
}

impl Eq for SessionCredential {}

/// Claims of interest in a token payload.
#[derive(Debug, Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// Read the `exp` claim out of a JWT-shaped token.
///
/// Anything that isn't three base64url segments around a JSON payload
/// with a numeric `exp` yields `None`; the token is then treated as
/// opaque and provider-vouched.
fn decode_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    segments.next()?;
    if segments.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    DateTime::from_timestamp(claims.exp?, 0)
}

/// Unsigned JWT-shaped token with the given claims payload (tests only).
#[cfg(test)]
pub(crate) fn fake_jwt(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{}.{}.sig", header, payload)
}
