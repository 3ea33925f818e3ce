use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::Record;

/// A case file (Fallakte) as stored in `cases.json`.
///
/// Fields other pages write that this core does not know about land in
/// `extra` and survive read-modify-write untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub defendant: String,
    pub charge: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict_date: Option<String>,
    pub date_created: String,
    pub created_by: String,
    pub last_modified: String,
    pub last_modified_by: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for Case {
    const COLLECTION: &'static str = "cases.json";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Input for opening a new case.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCase {
    pub defendant: String,
    pub charge: String,
}
