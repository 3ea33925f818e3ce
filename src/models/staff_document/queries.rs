use serde_json::Map;

use super::types::{DocumentType, NewStaffDocument, StaffDocument, StaffDocumentPatch};
use crate::auth::{Identity, RoleType, authorize, validate};
use crate::errors::AppError;
use crate::store::{JsonStore, generate_id, timestamp_now};

/// Validate the payload group for the given type and return it normalized.
/// Payload fields belonging to another type must be absent.
fn checked_payload(
    document_type: DocumentType,
    content: Option<String>,
    url: Option<String>,
    file_path: Option<String>,
    file_type: Option<String>,
) -> Result<(Option<String>, Option<String>, Option<String>, Option<String>), AppError> {
    match document_type {
        DocumentType::Text => {
            if url.is_some() || file_path.is_some() || file_type.is_some() {
                return Err(AppError::Validation(
                    "A text document only carries content".to_string(),
                ));
            }
            let content = content.unwrap_or_default();
            if let Some(msg) = validate::validate_required(&content, "Content", 50_000) {
                return Err(AppError::Validation(msg));
            }
            Ok((Some(content.trim().to_string()), None, None, None))
        }
        DocumentType::Url => {
            if content.is_some() || file_path.is_some() || file_type.is_some() {
                return Err(AppError::Validation(
                    "A URL document only carries a URL".to_string(),
                ));
            }
            let url = url.unwrap_or_default();
            if let Some(msg) = validate::validate_url(&url, "URL") {
                return Err(AppError::Validation(msg));
            }
            Ok((None, Some(url.trim().to_string()), None, None))
        }
        DocumentType::File => {
            if content.is_some() || url.is_some() {
                return Err(AppError::Validation(
                    "A file document only carries a file path and type".to_string(),
                ));
            }
            let file_path = file_path.unwrap_or_default();
            let file_type = file_type.unwrap_or_default();
            if let Some(msg) = validate::validate_required(&file_path, "File path", 500) {
                return Err(AppError::Validation(msg));
            }
            if let Some(msg) = validate::validate_required(&file_type, "File type", 100) {
                return Err(AppError::Validation(msg));
            }
            Ok((
                None,
                None,
                Some(file_path.trim().to_string()),
                Some(file_type.trim().to_string()),
            ))
        }
    }
}

/// Attach a document to a staff member. Leadership and administrators only.
pub fn add_document(
    store: &JsonStore,
    identity: &Identity,
    form: NewStaffDocument,
) -> Result<StaffDocument, AppError> {
    authorize(identity, &[RoleType::Leadership, RoleType::Admin])?;
    if let Some(msg) = validate::validate_required(&form.staff_id, "Staff id", 100) {
        return Err(AppError::Validation(msg));
    }
    if let Some(msg) = validate::validate_required(&form.title, "Title", 200) {
        return Err(AppError::Validation(msg));
    }
    if let Some(msg) = validate::validate_optional(&form.description, "Description", 2000) {
        return Err(AppError::Validation(msg));
    }
    let (content, url, file_path, file_type) = checked_payload(
        form.document_type,
        form.content,
        form.url,
        form.file_path,
        form.file_type,
    )?;

    let now = timestamp_now();
    let document = StaffDocument {
        id: generate_id(),
        staff_id: form.staff_id.trim().to_string(),
        title: form.title.trim().to_string(),
        description: form.description.trim().to_string(),
        document_type: form.document_type,
        content,
        url,
        file_path,
        file_type,
        date_created: now.clone(),
        created_by: identity.username.clone(),
        last_modified: now,
        last_modified_by: identity.username.clone(),
        extra: Map::new(),
    };
    store.append_record(document.clone())?;
    log::info!(
        "Staff document {} ({}) added for staff {} by {}",
        document.id,
        document.document_type.as_str(),
        document.staff_id,
        identity.username
    );
    Ok(document)
}

/// Update title, description, or the payload of the existing type. The
/// document type itself is immutable: a `content` patch on a URL document
/// (or vice versa) is a validation error.
pub fn update_document(
    store: &JsonStore,
    identity: &Identity,
    document_id: &str,
    patch: StaffDocumentPatch,
) -> Result<StaffDocument, AppError> {
    authorize(identity, &[RoleType::Leadership, RoleType::Admin])?;
    let existing = store
        .find_by_id::<StaffDocument>(document_id)?
        .ok_or(AppError::NotFound)?;

    if patch.content.is_some() && existing.document_type != DocumentType::Text {
        return Err(AppError::Validation(
            "Document type cannot be changed".to_string(),
        ));
    }
    if patch.url.is_some() && existing.document_type != DocumentType::Url {
        return Err(AppError::Validation(
            "Document type cannot be changed".to_string(),
        ));
    }
    if let Some(title) = &patch.title {
        if let Some(msg) = validate::validate_required(title, "Title", 200) {
            return Err(AppError::Validation(msg));
        }
    }
    if let Some(description) = &patch.description {
        if let Some(msg) = validate::validate_optional(description, "Description", 2000) {
            return Err(AppError::Validation(msg));
        }
    }
    if let Some(content) = &patch.content {
        if let Some(msg) = validate::validate_required(content, "Content", 50_000) {
            return Err(AppError::Validation(msg));
        }
    }
    if let Some(url) = &patch.url {
        if let Some(msg) = validate::validate_url(url, "URL") {
            return Err(AppError::Validation(msg));
        }
    }

    let now = timestamp_now();
    let updated = store.update_record::<StaffDocument, _>(document_id, |d| {
        if let Some(title) = &patch.title {
            d.title = title.trim().to_string();
        }
        if let Some(description) = &patch.description {
            d.description = description.trim().to_string();
        }
        if let Some(content) = &patch.content {
            d.content = Some(content.trim().to_string());
        }
        if let Some(url) = &patch.url {
            d.url = Some(url.trim().to_string());
        }
        d.last_modified = now.clone();
        d.last_modified_by = identity.username.clone();
    })?;
    log::info!("Staff document {} updated by {}", document_id, identity.username);
    Ok(updated)
}

/// Look up a staff document by id.
pub fn find(store: &JsonStore, id: &str) -> Result<Option<StaffDocument>, AppError> {
    store.find_by_id::<StaffDocument>(id)
}

/// All documents belonging to one staff member, in file order.
pub fn list_for_staff(store: &JsonStore, staff_id: &str) -> Result<Vec<StaffDocument>, AppError> {
    Ok(store
        .load::<StaffDocument>()?
        .into_iter()
        .filter(|d| d.staff_id == staff_id)
        .collect())
}
