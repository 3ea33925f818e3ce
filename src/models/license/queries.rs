use serde_json::Map;

use super::types::{License, NewLicense};
use crate::auth::{Identity, RoleType, authorize, validate};
use crate::errors::AppError;
use crate::store::{JsonStore, generate_id, timestamp_now};
use crate::workflow::{self, Scope, license_status};

/// Issue a new license. Leadership and administrators only. The license
/// starts `active`; an empty issue date defaults to today.
pub fn create_license(
    store: &JsonStore,
    identity: &Identity,
    form: NewLicense,
) -> Result<License, AppError> {
    authorize(identity, &[RoleType::Leadership, RoleType::Admin])?;
    if let Some(msg) = validate::validate_required(&form.license_number, "License number", 100) {
        return Err(AppError::Validation(msg));
    }
    if let Some(msg) = validate::validate_required(&form.license_type, "License type", 100) {
        return Err(AppError::Validation(msg));
    }
    if let Some(msg) = validate::validate_optional(&form.notes, "Notes", 2000) {
        return Err(AppError::Validation(msg));
    }
    let issued_date = if form.issued_date.trim().is_empty() {
        chrono::Local::now().format("%Y-%m-%d").to_string()
    } else {
        if let Some(msg) = validate::validate_date(&form.issued_date, "Issued date") {
            return Err(AppError::Validation(msg));
        }
        form.issued_date.trim().to_string()
    };

    let now = timestamp_now();
    let license = License {
        id: generate_id(),
        license_number: form.license_number.trim().to_string(),
        tg_number: form.tg_number.trim().to_string(),
        license_type: form.license_type.trim().to_string(),
        category: form.category.trim().to_string(),
        status: workflow::initial_status(Scope::License).to_string(),
        issued_date,
        notes: form.notes.trim().to_string(),
        date_created: now.clone(),
        created_by: identity.username.clone(),
        last_modified: now,
        last_modified_by: identity.username.clone(),
        extra: Map::new(),
    };
    store.append_record(license.clone())?;
    log::info!(
        "License {} ({}) issued by {}",
        license.license_number,
        license.id,
        identity.username
    );
    Ok(license)
}

/// Move a license out of `active` (to `revoked` or `expired`). Leadership
/// and administrators only; any other target status is a validation error,
/// and a license that already left `active` yields `InvalidState`.
pub fn update_status(
    store: &JsonStore,
    identity: &Identity,
    license_id: &str,
    new_status: &str,
) -> Result<License, AppError> {
    authorize(identity, &[RoleType::Leadership, RoleType::Admin])?;
    let target = match new_status {
        s if s == license_status::REVOKED => license_status::REVOKED,
        s if s == license_status::EXPIRED => license_status::EXPIRED,
        other => {
            return Err(AppError::Validation(format!(
                "Unknown license status '{other}'"
            )));
        }
    };
    let license = store
        .find_by_id::<License>(license_id)?
        .ok_or(AppError::NotFound)?;
    workflow::validate_transition(Scope::License, &license.status, target)?;

    let now = timestamp_now();
    let updated = store.update_record::<License, _>(license_id, |l| {
        l.status = target.to_string();
        l.last_modified = now.clone();
        l.last_modified_by = identity.username.clone();
    })?;
    log::info!(
        "License {} set to {} by {}",
        license_id,
        target,
        identity.username
    );
    Ok(updated)
}

/// Replace the free-text notes on a license.
pub fn update_notes(
    store: &JsonStore,
    identity: &Identity,
    license_id: &str,
    notes: &str,
) -> Result<License, AppError> {
    authorize(identity, &[RoleType::Leadership, RoleType::Admin])?;
    if let Some(msg) = validate::validate_optional(notes, "Notes", 2000) {
        return Err(AppError::Validation(msg));
    }
    let now = timestamp_now();
    let updated = store.update_record::<License, _>(license_id, |l| {
        l.notes = notes.trim().to_string();
        l.last_modified = now.clone();
        l.last_modified_by = identity.username.clone();
    })?;
    Ok(updated)
}

/// Look up a license by id.
pub fn find(store: &JsonStore, id: &str) -> Result<Option<License>, AppError> {
    store.find_by_id::<License>(id)
}

/// All licenses in file order.
pub fn list(store: &JsonStore) -> Result<Vec<License>, AppError> {
    store.load::<License>()
}
