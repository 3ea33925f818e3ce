//! Role capability table.
//!
//! Literal role strings (German and English) map to capability categories in
//! one static table; every call site goes through [`has_role_type`] or
//! [`authorize`] instead of comparing role strings ad hoc. A single role can
//! satisfy more than one type ("Chief Justice" is both `Judge` and
//! `Leadership`).

use crate::auth::Identity;
use crate::errors::AppError;

/// Closed set of capability categories a role string can satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleType {
    Judge,
    Prosecutor,
    Leadership,
    Marshal,
    Admin,
}

impl RoleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Judge => "judge",
            RoleType::Prosecutor => "prosecutor",
            RoleType::Leadership => "leadership",
            RoleType::Marshal => "marshal",
            RoleType::Admin => "admin",
        }
    }
}

const JUDGE_ROLES: &[&str] = &[
    "richter",
    "judge",
    "magistrate",
    "junior_magistrate",
    "magistratsrichter",
    "district_court_judge",
    "chief_justice",
    "oberster_richter",
    "senior_associate_justice",
];

const PROSECUTOR_ROLES: &[&str] = &[
    "staatsanwalt",
    "prosecutor",
    "junior_prosecutor",
    "senior_prosecutor",
    "district_attorney",
    "bezirksstaatsanwalt",
    "attorney_general",
    "generalstaatsanwalt",
];

const LEADERSHIP_ROLES: &[&str] = &[
    "chief_justice",
    "oberster_richter",
    "senior_associate_justice",
    "stellvertretender_oberster_richter",
    "attorney_general",
    "generalstaatsanwalt",
    "district_attorney",
];

const MARSHAL_ROLES: &[&str] = &[
    "marshal",
    "us_marshal",
    "deputy_marshal",
    "marshal_director",
    "director",
    "commander",
    "senior_deputy",
];

const ADMIN_ROLES: &[&str] = &["administrator", "system_administrator", "admin"];

/// Normalize a literal role string for table lookup: lowercase, spaces
/// replaced by underscores.
fn normalize(role: &str) -> String {
    role.trim().to_lowercase().replace(' ', "_")
}

/// Check whether a literal role string satisfies a capability category.
pub fn has_role_type(role: &str, role_type: RoleType) -> bool {
    let normalized = normalize(role);
    let table = match role_type {
        RoleType::Judge => JUDGE_ROLES,
        RoleType::Prosecutor => PROSECUTOR_ROLES,
        RoleType::Leadership => LEADERSHIP_ROLES,
        RoleType::Marshal => MARSHAL_ROLES,
        RoleType::Admin => ADMIN_ROLES,
    };
    table.contains(&normalized.as_str())
}

/// Authorize a gated operation: the identity must be present and its role
/// must satisfy at least one of `required`.
///
/// Guards fail fast: callers invoke this before touching the store, so a
/// denial can never leave a partial write behind.
pub fn authorize(identity: &Identity, required: &[RoleType]) -> Result<(), AppError> {
    if !identity.is_present() {
        log::debug!("Authorization failed: no identity");
        return Err(AppError::Unauthenticated);
    }
    if required.iter().any(|t| has_role_type(&identity.role, *t)) {
        return Ok(());
    }
    let caps = required
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join("|");
    log::debug!("Role '{}' denied: requires {}", identity.role, caps);
    Err(AppError::PermissionDenied(caps))
}
