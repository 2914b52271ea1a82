//! Newsletter signup: email validation and the locally persisted
//! subscriber list.
//!
//! The list lives in the browser's localStorage under the
//! `newsletterSubscribers` key as a JSON array of `{email, date}` records,
//! append-only. This module owns the codec and the validation; the storage
//! handle itself belongs to the site layer.

use chrono::{DateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::EmailError;

/// Same shape the signup form enforces: no whitespace or extra `@` on
/// either side, at least one dot in the domain.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(EMAIL_PATTERN).ok());

/// Whether `email` looks like a deliverable address. Expects trimmed input.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE
        .as_ref()
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

/// Trim the raw form input and validate it.
pub fn normalize(raw: &str) -> Result<&str, EmailError> {
    let email = raw.trim();
    if is_valid_email(email) {
        Ok(email)
    } else {
        Err(EmailError::Invalid)
    }
}

/// One stored signup record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    pub email: String,
    /// Signup time, ISO-8601 with millisecond precision ("...T10:30:00.000Z").
    pub date: String,
}

impl Subscriber {
    pub fn new(email: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            date: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Decode a stored list. Missing or corrupt data starts a fresh list
/// rather than wedging the form.
pub fn parse_subscribers(raw: Option<&str>) -> Vec<Subscriber> {
    raw.and_then(|json| serde_json::from_str(json).ok())
        .unwrap_or_default()
}

/// Append one signup to the stored list and re-encode it.
pub fn append(raw: Option<&str>, email: &str, at: DateTime<Utc>) -> String {
    let mut subscribers = parse_subscribers(raw);
    subscribers.push(Subscriber::new(email, at));
    serde_json::to_string(&subscribers).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("user.name+tag@example.com"));
        assert!(is_valid_email("a@b.c.d"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at.example.com"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@@b.c"));
    }

    #[test]
    fn test_normalize_trims_and_validates() {
        assert_eq!(normalize("  a@b.co  "), Ok("a@b.co"));
        assert_eq!(normalize("   "), Err(EmailError::Invalid));
        assert_eq!(
            normalize("bad").unwrap_err().to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_subscriber_record_shape() {
        let record = serde_json::to_value(Subscriber::new("a@b.co", at())).unwrap();
        assert_eq!(
            record,
            serde_json::json!({"email": "a@b.co", "date": "2026-01-15T10:30:00.000Z"})
        );
    }

    #[test]
    fn test_append_is_append_only() {
        let first = append(None, "a@b.co", at());
        let second = append(Some(&first), "c@d.ef", at());

        let list = parse_subscribers(Some(&second));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].email, "a@b.co");
        assert_eq!(list[1].email, "c@d.ef");
    }

    #[test]
    fn test_corrupt_store_starts_fresh() {
        assert!(parse_subscribers(Some("not json")).is_empty());

        let encoded = append(Some("{broken"), "a@b.co", at());
        assert_eq!(parse_subscribers(Some(&encoded)).len(), 1);
    }
}
