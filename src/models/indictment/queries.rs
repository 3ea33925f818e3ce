//! Indictment lifecycle operations.
//!
//! Every operation guards in a fixed order (identity presence, role
//! capability, referenced-entity existence, state precondition, field
//! validation) and only then writes, so a failing guard never leaves a
//! partial write behind. The indictment write and the follow-up case write
//! are two separate saves with no rollback in between; a storage failure on
//! the second leaves them inconsistent (known gap of the flat-file layout).

use serde_json::Map;

use super::types::{Indictment, NewIndictment};
use crate::auth::{Identity, RoleType, authorize, validate};
use crate::errors::AppError;
use crate::models::case::Case;
use crate::store::{JsonStore, generate_id, timestamp_now};
use crate::workflow::{self, Scope, case_status, indictment_status};

/// File an indictment against an existing case. Prosecutors and leadership
/// only. The new indictment starts `pending`; an `open` case follows it to
/// `pending`.
pub fn create(
    store: &JsonStore,
    identity: &Identity,
    form: NewIndictment,
) -> Result<Indictment, AppError> {
    authorize(identity, &[RoleType::Prosecutor, RoleType::Leadership])?;
    let case = store
        .find_by_id::<Case>(&form.case_id)?
        .ok_or(AppError::NotFound)?;
    if let Some(msg) = validate::validate_required(&form.content, "Indictment content", 20_000) {
        return Err(AppError::Validation(msg));
    }

    let now = timestamp_now();
    let indictment = Indictment {
        id: generate_id(),
        case_id: case.id.clone(),
        content: form.content.trim().to_string(),
        charges: form.charges,
        status: workflow::initial_status(Scope::Indictment).to_string(),
        prosecutor_name: identity.username.clone(),
        trial_date: None,
        trial_notes: None,
        scheduled_by: None,
        scheduled_by_name: None,
        judge_id: None,
        judge_name: None,
        judgment: None,
        verdict_date: None,
        verdict_by: None,
        verdict_by_name: None,
        date_created: now.clone(),
        created_by: identity.username.clone(),
        last_modified: now.clone(),
        last_modified_by: identity.username.clone(),
        extra: Map::new(),
    };
    store.append_record(indictment.clone())?;

    // A case that already left `open` (e.g. a second indictment) stays where
    // it is; the status ladder is monotonic.
    if case.status == case_status::OPEN {
        store.update_record::<Case, _>(&case.id, |c| {
            c.status = case_status::PENDING.to_string();
            c.last_modified = now.clone();
            c.last_modified_by = identity.username.clone();
        })?;
    }

    log::info!(
        "Indictment {} filed against case {} by {}",
        indictment.id,
        case.id,
        identity.username
    );
    Ok(indictment)
}

/// Schedule the trial for a pending indictment. Judges and leadership only.
/// Sets the trial date and judge fields and moves indictment and case to
/// `scheduled`.
pub fn schedule(
    store: &JsonStore,
    identity: &Identity,
    indictment_id: &str,
    trial_date: &str,
    trial_notes: &str,
) -> Result<Indictment, AppError> {
    authorize(identity, &[RoleType::Judge, RoleType::Leadership])?;
    let indictment = store
        .find_by_id::<Indictment>(indictment_id)?
        .ok_or(AppError::NotFound)?;
    let case = store
        .find_by_id::<Case>(&indictment.case_id)?
        .ok_or(AppError::NotFound)?;
    workflow::validate_transition(Scope::Indictment, &indictment.status, indictment_status::SCHEDULED)?;
    // The case follows the indictment; check its transition up front so a
    // blocked case leaves the indictment untouched too.
    let case_follows = case.status != case_status::SCHEDULED;
    if case_follows {
        workflow::validate_transition(Scope::Case, &case.status, case_status::SCHEDULED)?;
    }
    if let Some(msg) = validate::validate_date(trial_date, "Trial date") {
        return Err(AppError::Validation(msg));
    }
    if let Some(msg) = validate::validate_optional(trial_notes, "Trial notes", 2000) {
        return Err(AppError::Validation(msg));
    }

    let now = timestamp_now();
    let updated = store.update_record::<Indictment, _>(indictment_id, |i| {
        i.status = indictment_status::SCHEDULED.to_string();
        i.trial_date = Some(trial_date.trim().to_string());
        i.trial_notes = Some(trial_notes.trim().to_string());
        i.scheduled_by = Some(identity.user_id.clone());
        i.scheduled_by_name = Some(identity.username.clone());
        i.judge_id = Some(identity.user_id.clone());
        i.judge_name = Some(identity.username.clone());
        i.last_modified = now.clone();
        i.last_modified_by = identity.username.clone();
    })?;

    if case_follows {
        store.update_record::<Case, _>(&case.id, |c| {
            c.status = case_status::SCHEDULED.to_string();
            c.trial_date = Some(trial_date.trim().to_string());
            c.judge_id = Some(identity.user_id.clone());
            c.judge_name = Some(identity.username.clone());
            c.last_modified = now.clone();
            c.last_modified_by = identity.username.clone();
        })?;
    }

    log::info!(
        "Indictment {} scheduled for {} by {}",
        indictment_id,
        trial_date,
        identity.username
    );
    Ok(updated)
}

/// Enter the verdict for a scheduled indictment. Judges and administrators
/// only. Moves the indictment to the terminal `verdict_entered` status and
/// closes the case.
pub fn enter_verdict(
    store: &JsonStore,
    identity: &Identity,
    indictment_id: &str,
    judgment: &str,
    verdict_date: &str,
) -> Result<Indictment, AppError> {
    authorize(identity, &[RoleType::Judge, RoleType::Admin])?;
    let indictment = store
        .find_by_id::<Indictment>(indictment_id)?
        .ok_or(AppError::NotFound)?;
    let case = store
        .find_by_id::<Case>(&indictment.case_id)?
        .ok_or(AppError::NotFound)?;
    workflow::validate_transition(
        Scope::Indictment,
        &indictment.status,
        indictment_status::VERDICT_ENTERED,
    )?;
    let case_follows = case.status != case_status::CLOSED;
    if case_follows {
        workflow::validate_transition(Scope::Case, &case.status, case_status::CLOSED)?;
    }
    if let Some(msg) = validate::validate_required(judgment, "Judgment", 20_000) {
        return Err(AppError::Validation(msg));
    }
    if let Some(msg) = validate::validate_date(verdict_date, "Verdict date") {
        return Err(AppError::Validation(msg));
    }

    let now = timestamp_now();
    let updated = store.update_record::<Indictment, _>(indictment_id, |i| {
        i.status = indictment_status::VERDICT_ENTERED.to_string();
        i.judgment = Some(judgment.trim().to_string());
        i.verdict_date = Some(verdict_date.trim().to_string());
        i.verdict_by = Some(identity.user_id.clone());
        i.verdict_by_name = Some(identity.username.clone());
        i.last_modified = now.clone();
        i.last_modified_by = identity.username.clone();
    })?;

    if case_follows {
        store.update_record::<Case, _>(&case.id, |c| {
            c.status = case_status::CLOSED.to_string();
            c.verdict = Some(judgment.trim().to_string());
            c.verdict_date = Some(verdict_date.trim().to_string());
            c.judge_id = Some(identity.user_id.clone());
            c.judge_name = Some(identity.username.clone());
            c.last_modified = now.clone();
            c.last_modified_by = identity.username.clone();
        })?;
    }

    log::info!("Verdict entered on indictment {} by {}", indictment_id, identity.username);
    Ok(updated)
}

/// Look up an indictment by id.
pub fn find(store: &JsonStore, id: &str) -> Result<Option<Indictment>, AppError> {
    store.find_by_id::<Indictment>(id)
}

/// All indictments in file order.
pub fn list(store: &JsonStore) -> Result<Vec<Indictment>, AppError> {
    store.load::<Indictment>()
}

/// All indictments currently in the given status, in file order.
pub fn list_by_status(store: &JsonStore, status: &str) -> Result<Vec<Indictment>, AppError> {
    Ok(store
        .load::<Indictment>()?
        .into_iter()
        .filter(|i| i.status == status)
        .collect())
}
