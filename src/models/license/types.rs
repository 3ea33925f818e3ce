use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::Record;

/// An issued license as stored in `licenses.json`. Status is one of
/// `active`, `revoked`, `expired`; an issued license is never hard-deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    pub id: String,
    pub license_number: String,
    #[serde(default)]
    pub tg_number: String,
    pub license_type: String,
    #[serde(default)]
    pub category: String,
    pub status: String,
    pub issued_date: String,
    #[serde(default)]
    pub notes: String,
    pub date_created: String,
    pub created_by: String,
    pub last_modified: String,
    pub last_modified_by: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for License {
    const COLLECTION: &'static str = "licenses.json";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Input for issuing a new license.
#[derive(Debug, Clone, Deserialize)]
pub struct NewLicense {
    pub license_number: String,
    #[serde(default)]
    pub tg_number: String,
    pub license_type: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub issued_date: String,
    #[serde(default)]
    pub notes: String,
}
