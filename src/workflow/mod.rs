//! Workflow state machine for cases and indictments.
//!
//! The legal transitions per entity scope live in one static table; every
//! status change goes through [`validate_transition`] so no call site can
//! drive an illegal back-transition. Statuses are stored as the literal
//! strings the JSON documents carry.

use crate::errors::AppError;

pub mod case_status {
    pub const OPEN: &str = "open";
    pub const PENDING: &str = "pending";
    pub const SCHEDULED: &str = "scheduled";
    pub const CLOSED: &str = "closed";
}

pub mod indictment_status {
    pub const PENDING: &str = "pending";
    pub const SCHEDULED: &str = "scheduled";
    pub const VERDICT_ENTERED: &str = "verdict_entered";
}

pub mod license_status {
    pub const ACTIVE: &str = "active";
    pub const REVOKED: &str = "revoked";
    pub const EXPIRED: &str = "expired";
}

/// Entity scope a transition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Case,
    Indictment,
    License,
}

/// One legal `from → to` edge for a scope.
struct Transition {
    scope: Scope,
    from: &'static str,
    to: &'static str,
}

const TRANSITIONS: &[Transition] = &[
    // Cases move monotonically towards closed.
    Transition { scope: Scope::Case, from: case_status::OPEN, to: case_status::PENDING },
    Transition { scope: Scope::Case, from: case_status::PENDING, to: case_status::SCHEDULED },
    Transition { scope: Scope::Case, from: case_status::SCHEDULED, to: case_status::CLOSED },
    // Indictment lifecycle; verdict_entered is terminal.
    Transition {
        scope: Scope::Indictment,
        from: indictment_status::PENDING,
        to: indictment_status::SCHEDULED,
    },
    Transition {
        scope: Scope::Indictment,
        from: indictment_status::SCHEDULED,
        to: indictment_status::VERDICT_ENTERED,
    },
    // Licenses leave `active` and never come back.
    Transition { scope: Scope::License, from: license_status::ACTIVE, to: license_status::REVOKED },
    Transition { scope: Scope::License, from: license_status::ACTIVE, to: license_status::EXPIRED },
];

/// The status fresh records of a scope start in.
pub fn initial_status(scope: Scope) -> &'static str {
    match scope {
        Scope::Case => case_status::OPEN,
        Scope::Indictment => indictment_status::PENDING,
        Scope::License => license_status::ACTIVE,
    }
}

/// True when no transition leaves the given status.
pub fn is_terminal(scope: Scope, status: &str) -> bool {
    !TRANSITIONS.iter().any(|t| t.scope == scope && t.from == status)
}

/// Validate that `from → to` is a legal transition for the scope.
///
/// Returns `InvalidState` carrying the current status and the status the
/// transition would have required, so the caller can render a precise
/// "invalid state" view.
pub fn validate_transition(scope: Scope, from: &str, to: &'static str) -> Result<(), AppError> {
    let legal = TRANSITIONS
        .iter()
        .any(|t| t.scope == scope && t.from == from && t.to == to);
    if legal {
        return Ok(());
    }
    // The required `from` status for the requested target, if the target is
    // reachable at all in this scope.
    let required = TRANSITIONS
        .iter()
        .find(|t| t.scope == scope && t.to == to)
        .map(|t| t.from)
        .unwrap_or(to);
    log::debug!("Illegal transition {from} -> {to} ({scope:?})");
    Err(AppError::InvalidState { current: from.to_string(), required })
}
