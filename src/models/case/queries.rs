use serde_json::Map;

use super::types::{Case, NewCase};
use crate::auth::{Identity, RoleType, authorize, validate};
use crate::errors::AppError;
use crate::store::{JsonStore, generate_id, timestamp_now};
use crate::workflow::{self, Scope};

/// Open a new case. Requires prosecutor or leadership capability; the case
/// starts in the initial `open` status.
pub fn create_case(store: &JsonStore, identity: &Identity, form: NewCase) -> Result<Case, AppError> {
    authorize(identity, &[RoleType::Prosecutor, RoleType::Leadership])?;
    if let Some(msg) = validate::validate_required(&form.defendant, "Defendant", 200) {
        return Err(AppError::Validation(msg));
    }
    if let Some(msg) = validate::validate_required(&form.charge, "Charge", 2000) {
        return Err(AppError::Validation(msg));
    }

    let now = timestamp_now();
    let case = Case {
        id: generate_id(),
        defendant: form.defendant.trim().to_string(),
        charge: form.charge.trim().to_string(),
        status: workflow::initial_status(Scope::Case).to_string(),
        judge_id: None,
        judge_name: None,
        trial_date: None,
        verdict: None,
        verdict_date: None,
        date_created: now.clone(),
        created_by: identity.username.clone(),
        last_modified: now,
        last_modified_by: identity.username.clone(),
        extra: Map::new(),
    };
    store.append_record(case.clone())?;
    log::info!("Case {} opened by {}", case.id, identity.username);
    Ok(case)
}

/// Look up a case by id.
pub fn find(store: &JsonStore, id: &str) -> Result<Option<Case>, AppError> {
    store.find_by_id::<Case>(id)
}

/// All cases in file order.
pub fn list(store: &JsonStore) -> Result<Vec<Case>, AppError> {
    store.load::<Case>()
}
