//! Lead domain model.
//!
//! A [`LeadRecord`] is the JSON envelope handed to the host bridge. It can
//! only be built from a [`LeadForm`], which in turn only exists once all
//! three required fields are non-empty after trimming.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message kind tag understood by the receiving bot.
pub const LEAD_TYPE: &str = "webapp_lead";

/// Brand stamped on every lead unless configured otherwise.
pub const DEFAULT_BRAND: &str = "Vimly";

/// Required form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    Company,
    Task,
    Contact,
}

impl LeadField {
    pub const ALL: [LeadField; 3] = [LeadField::Company, LeadField::Task, LeadField::Contact];

    /// DOM element id (and JSON key) of the field.
    pub fn id(&self) -> &'static str {
        match self {
            LeadField::Company => "company",
            LeadField::Task => "task",
            LeadField::Contact => "contact",
        }
    }
}

impl std::fmt::Display for LeadField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// One or more required fields were empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Required fields are empty: {}", join_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<LeadField>,
}

fn join_fields(fields: &[LeadField]) -> String {
    fields
        .iter()
        .map(LeadField::id)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Trimmed, validated form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadForm {
    company: String,
    task: String,
    contact: String,
}

impl LeadForm {
    /// Trim all three values and reject the form if any of them ends up empty.
    ///
    /// Every empty field is reported, not just the first one.
    pub fn parse(company: &str, task: &str, contact: &str) -> Result<Self, ValidationError> {
        let company = company.trim();
        let task = task.trim();
        let contact = contact.trim();

        let missing: Vec<LeadField> = [
            (LeadField::Company, company),
            (LeadField::Task, task),
            (LeadField::Contact, contact),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        Ok(Self {
            company: company.to_string(),
            task: task.to_string(),
            contact: contact.to_string(),
        })
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Stamp the form into a wire record.
    pub fn into_record(self, brand: &str, ts: DateTime<Utc>) -> LeadRecord {
        LeadRecord {
            kind: LEAD_TYPE.to_string(),
            company: self.company,
            task: self.task,
            contact: self.contact,
            ts,
            brand: brand.to_string(),
        }
    }
}

/// Outbound lead envelope.
///
/// Field order matches the wire contract:
/// `type, company, task, contact, ts, brand`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub company: String,
    pub task: String,
    pub contact: String,
    #[serde(with = "iso_millis")]
    pub ts: DateTime<Utc>,
    pub brand: String,
}

impl LeadRecord {
    /// Serialize to the compact JSON string passed to `sendData`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// `Date.prototype.toISOString()` shape: UTC, millisecond precision, `Z` suffix.
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn format(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
