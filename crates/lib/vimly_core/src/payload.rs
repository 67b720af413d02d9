//! Inspection of captured lead payloads.
//!
//! Checks a JSON string against the outbound wire contract: the fixed type
//! tag, the expected brand, three non-empty trimmed fields, and a parseable
//! timestamp.

use thiserror::Error;

use crate::lead::{LEAD_TYPE, LeadField, LeadRecord};

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Unexpected message type: {0}")]
    WrongType(String),

    #[error("Unexpected brand: expected {expected}, got {actual}")]
    WrongBrand { expected: String, actual: String },

    #[error("Field {0} is empty")]
    EmptyField(LeadField),

    #[error("Field {0} is not trimmed")]
    UntrimmedField(LeadField),
}

/// Decode `raw` and verify it is a lead this page could have produced for
/// `brand`.
pub fn inspect(raw: &str, brand: &str) -> Result<LeadRecord, PayloadError> {
    let record: LeadRecord = serde_json::from_str(raw)?;

    if record.kind != LEAD_TYPE {
        return Err(PayloadError::WrongType(record.kind));
    }
    if record.brand != brand {
        return Err(PayloadError::WrongBrand {
            expected: brand.to_string(),
            actual: record.brand,
        });
    }

    for (field, value) in [
        (LeadField::Company, &record.company),
        (LeadField::Task, &record.task),
        (LeadField::Contact, &record.contact),
    ] {
        if value.trim().is_empty() {
            return Err(PayloadError::EmptyField(field));
        }
        if value.trim() != value {
            return Err(PayloadError::UntrimmedField(field));
        }
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(overrides: serde_json::Value) -> String {
        let mut base = json!({
            "type": "webapp_lead",
            "company": "Acme",
            "task": "Build app",
            "contact": "+1234",
            "ts": "2026-10-19T08:30:00.000Z",
            "brand": "Vimly"
        });
        if let (Some(base), Some(overrides)) = (base.as_object_mut(), overrides.as_object()) {
            for (k, v) in overrides {
                base.insert(k.clone(), v.clone());
            }
        }
        base.to_string()
    }

    #[test]
    fn accepts_well_formed_lead() {
        let record = inspect(&payload(json!({})), "Vimly").unwrap();
        assert_eq!(record.company, "Acme");
    }

    #[test]
    fn rejects_foreign_type() {
        let err = inspect(&payload(json!({"type": "order"})), "Vimly").unwrap_err();
        assert!(matches!(err, PayloadError::WrongType(t) if t == "order"));
    }

    #[test]
    fn rejects_other_brand() {
        let err = inspect(&payload(json!({"brand": "Other"})), "Vimly").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected brand: expected Vimly, got Other");
    }

    #[test]
    fn rejects_blank_and_untrimmed_fields() {
        let err = inspect(&payload(json!({"task": "  "})), "Vimly").unwrap_err();
        assert!(matches!(err, PayloadError::EmptyField(LeadField::Task)));

        let err = inspect(&payload(json!({"contact": " +1234"})), "Vimly").unwrap_err();
        assert!(matches!(err, PayloadError::UntrimmedField(LeadField::Contact)));
    }

    #[test]
    fn rejects_bad_timestamp() {
        let err = inspect(&payload(json!({"ts": "yesterday"})), "Vimly").unwrap_err();
        assert!(matches!(err, PayloadError::Malformed(_)));
    }
}
