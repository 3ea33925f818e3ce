use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::Record;

/// An indictment (Klageschrift) as stored in `indictments.json`.
///
/// Lifecycle: `pending` → `scheduled` → `verdict_entered` (terminal). The
/// scheduling and verdict fields are only populated once the corresponding
/// transition has happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Indictment {
    pub id: String,
    pub case_id: String,
    pub content: String,
    #[serde(default)]
    pub charges: Vec<String>,
    pub status: String,
    pub prosecutor_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_by_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judgment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict_by_name: Option<String>,
    pub date_created: String,
    pub created_by: String,
    pub last_modified: String,
    pub last_modified_by: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Indictment {
    const COLLECTION: &'static str = "indictments.json";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Input for filing a new indictment against an existing case.
#[derive(Debug, Clone, Deserialize)]
pub struct NewIndictment {
    pub case_id: String,
    pub content: String,
    #[serde(default)]
    pub charges: Vec<String>,
}
