use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::Record;

/// Kind of payload a staff document carries. Fixed at creation time; an
/// update can never change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Text,
    Url,
    File,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Text => "text",
            DocumentType::Url => "url",
            DocumentType::File => "file",
        }
    }
}

/// A document attached to a staff member, stored in `staff_documents.json`.
/// Exactly one payload group is populated, matching `document_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffDocument {
    pub id: String,
    pub staff_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub document_type: DocumentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    pub date_created: String,
    pub created_by: String,
    pub last_modified: String,
    pub last_modified_by: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for StaffDocument {
    const COLLECTION: &'static str = "staff_documents.json";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Input for attaching a new document to a staff member.
#[derive(Debug, Clone, Deserialize)]
pub struct NewStaffDocument {
    pub staff_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub document_type: DocumentType,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
}

/// Fields an update may touch. Payload fields for a type other than the
/// stored one are rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffDocumentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
}
