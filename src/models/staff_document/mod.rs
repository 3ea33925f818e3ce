pub mod queries;
pub mod types;

pub use types::{DocumentType, NewStaffDocument, StaffDocument, StaffDocumentPatch};
