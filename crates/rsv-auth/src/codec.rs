use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rsv_core::AdminIdentity;

/// Identity claims decoded from a credential's payload segment.
///
/// Produced by [`decode`], consumed by the session resolver and CLI display.
/// The signature segment is never checked — decoding exists for display and
/// expiry purposes only, and the remote service remains the sole authority
/// on whether a credential is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedIdentity {
    /// Subject ID (`sub` claim).
    #[serde(default)]
    pub sub: Option<String>,
    /// Account email (`email` claim).
    #[serde(default)]
    pub email: Option<String>,
    /// Account role (`user_type` claim; the user service also emits `tipo`).
    #[serde(default, alias = "tipo")]
    pub user_type: Option<String>,
    /// Expiry as epoch seconds (`exp` claim).
    #[serde(default)]
    pub exp: Option<i64>,
}

impl DecodedIdentity {
    /// Whether the credential behind these claims has expired.
    ///
    /// A payload without an `exp` claim never expires client-side.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.exp.is_some_and(is_expired)
    }

    /// Expiry instant, when the payload carried one.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// Convert to a lightweight [`AdminIdentity`] for cross-crate passing.
    #[must_use]
    pub fn to_identity(&self) -> AdminIdentity {
        AdminIdentity {
            subject_id: self.sub.clone(),
            email: self.email.clone(),
            user_type: self.user_type.clone(),
        }
    }
}

/// Decode a credential's payload segment without verifying its signature.
///
/// The token must be three `.`-separated segments; only the middle one is
/// read. Returns `None` for anything malformed — empty input, wrong segment
/// count, bad base64url, or a payload that is not valid JSON. Never panics,
/// no side effects.
#[must_use]
pub fn decode(token: &str) -> Option<DecodedIdentity> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };

    // Tokens are normally unpadded base64url, but tolerate padding.
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Whether an expiry timestamp (epoch seconds) has passed.
///
/// The boundary instant counts as expired.
#[must_use]
pub fn is_expired(exp_epoch_secs: i64) -> bool {
    Utc::now().timestamp_millis() >= exp_epoch_secs.saturating_mul(1000)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn encode_segment(raw: &str) -> String {
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw)
    }

    fn make_jwt(payload: &str) -> String {
        let header = encode_segment(r#"{"alg":"HS256","typ":"JWT"}"#);
        let signature = encode_segment("fake_sig");
        format!("{header}.{}.{signature}", encode_segment(payload))
    }

    #[test]
    fn decode_round_trips_payload_fields() {
        let exp = Utc::now().timestamp() + 3600;
        let jwt = make_jwt(&format!(
            r#"{{"sub":"42","email":"alice@example.com","user_type":"admin","exp":{exp}}}"#
        ));

        let identity = decode(&jwt).expect("should decode");
        assert_eq!(identity.sub.as_deref(), Some("42"));
        assert_eq!(identity.email.as_deref(), Some("alice@example.com"));
        assert_eq!(identity.user_type.as_deref(), Some("admin"));
        assert_eq!(identity.exp, Some(exp));
    }

    #[test]
    fn decode_accepts_tipo_alias() {
        let jwt = make_jwt(r#"{"sub":"7","tipo":"admin"}"#);
        let identity = decode(&jwt).expect("should decode");
        assert_eq!(identity.user_type.as_deref(), Some("admin"));
    }

    #[test]
    fn decode_rejects_non_three_segment_input() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("not-a-jwt"), None);
        assert_eq!(decode("one.two"), None);
        assert_eq!(decode("a.b.c.d"), None);
    }

    #[test]
    fn decode_rejects_bad_base64() {
        assert_eq!(decode("header.!!!invalid!!!.signature"), None);
    }

    #[test]
    fn decode_rejects_non_json_payload() {
        let header = encode_segment(r#"{"alg":"HS256"}"#);
        let payload = encode_segment("plain text, not json");
        assert_eq!(decode(&format!("{header}.{payload}.sig")), None);
    }

    #[test]
    fn decode_tolerates_padded_payload() {
        let header = encode_segment(r#"{"alg":"HS256"}"#);
        let padded =
            base64::engine::general_purpose::URL_SAFE.encode(r#"{"sub":"1"}"#);
        let identity = decode(&format!("{header}.{padded}.sig")).expect("should decode");
        assert_eq!(identity.sub.as_deref(), Some("1"));
    }

    #[test]
    fn is_expired_for_past_and_future() {
        let now = Utc::now().timestamp();
        assert!(is_expired(now - 10));
        assert!(!is_expired(now + 120));
    }

    #[test]
    fn missing_exp_never_expires() {
        let identity = decode(&make_jwt(r#"{"sub":"1"}"#)).expect("should decode");
        assert_eq!(identity.exp, None);
        assert!(!identity.is_expired());
    }

    #[test]
    fn expires_at_matches_claim() {
        let exp = Utc::now().timestamp() + 3600;
        let identity = decode(&make_jwt(&format!(r#"{{"exp":{exp}}}"#))).expect("should decode");
        assert_eq!(identity.expires_at().map(|dt| dt.timestamp()), Some(exp));
    }

    #[test]
    fn to_identity_maps_fields() {
        let identity = decode(&make_jwt(
            r#"{"sub":"42","email":"alice@example.com","user_type":"admin"}"#,
        ))
        .expect("should decode");
        let admin = identity.to_identity();
        assert_eq!(admin.subject_id.as_deref(), Some("42"));
        assert_eq!(admin.email.as_deref(), Some("alice@example.com"));
        assert_eq!(admin.user_type.as_deref(), Some("admin"));
    }
}
