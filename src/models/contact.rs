//! Contact record model for the SDK

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gender as captured by the contact form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// A stored contact record
///
/// `country`, `state` and `city` are the values resolved by the selection
/// chain at submission time: `country` owns `calling_code`, `state` belongs
/// to `country`, `city` belongs to `state`. The store does not re-verify
/// this; the selection state machine enforces it before a draft reaches
/// the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub calling_code: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub address_lines: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field values for a record that has not been stored yet
///
/// The store assigns the id and timestamps on create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub calling_code: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub address_lines: Vec<String>,
}

/// Partial update for an existing record
///
/// Every `Some` field fully replaces the stored field; `None` fields are
/// left untouched. The id and timestamps are never patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calling_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_lines: Option<Vec<String>>,
}

impl ContactPatch {
    /// Patch that replaces a single field, for the common one-field edit
    pub fn city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        let parsed: Gender = serde_json::from_str("\"other\"").unwrap();
        assert_eq!(parsed, Gender::Other);
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = ContactRecord {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            phone: "555-0100".to_string(),
            calling_code: "+1".to_string(),
            country: "United States".to_string(),
            state: "California".to_string(),
            city: "Los Angeles".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            gender: Gender::Female,
            address_lines: vec!["1 Main St".to_string()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: ContactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn test_patch_skips_absent_fields() {
        let patch = ContactPatch::city("San Diego");
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, "{\"city\":\"San Diego\"}");
    }
}
