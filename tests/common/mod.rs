//! Shared test infrastructure.
//!
//! Every integration test gets a fresh tempdir-backed store; the TempDir
//! must be kept alive for the store's files to remain valid.

#![allow(dead_code)]

use tempfile::TempDir;

use fallakte::auth::Identity;
use fallakte::models::case::{self, Case, NewCase};
use fallakte::models::indictment::{self, Indictment, NewIndictment};
use fallakte::store::JsonStore;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const JUDGE_ROLE: &str = "Richter";
pub const PROSECUTOR_ROLE: &str = "Staatsanwalt";
pub const ADMIN_ROLE: &str = "Administrator";
pub const LEADERSHIP_ROLE: &str = "Attorney General";
pub const CLERK_ROLE: &str = "Gerichtsschreiber";

// ============================================================================
// STORE SETUP
// ============================================================================

/// Fresh store in a temp directory. No collections exist yet; they appear on
/// first save.
pub fn setup_test_store() -> (TempDir, JsonStore) {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonStore::new(dir.path());
    (dir, store)
}

// ============================================================================
// IDENTITIES
// ============================================================================

pub fn judge() -> Identity {
    Identity::new("u-judge", "Hartmann", JUDGE_ROLE)
}

pub fn prosecutor() -> Identity {
    Identity::new("u-prosecutor", "Vogel", PROSECUTOR_ROLE)
}

pub fn admin() -> Identity {
    Identity::new("u-admin", "OConnor", ADMIN_ROLE)
}

pub fn leadership() -> Identity {
    Identity::new("u-ag", "Brandt", LEADERSHIP_ROLE)
}

/// A logged-in user whose role satisfies no capability category.
pub fn clerk() -> Identity {
    Identity::new("u-clerk", "Meyer", CLERK_ROLE)
}

// ============================================================================
// SEED HELPERS
// ============================================================================

pub fn seed_case(store: &JsonStore) -> Case {
    case::queries::create_case(
        store,
        &prosecutor(),
        NewCase {
            defendant: "Max Mustermann".to_string(),
            charge: "Fahrlässige Körperverletzung".to_string(),
        },
    )
    .expect("Failed to seed case")
}

pub fn seed_indictment(store: &JsonStore, case_id: &str) -> Indictment {
    indictment::queries::create(
        store,
        &prosecutor(),
        NewIndictment {
            case_id: case_id.to_string(),
            content: "Dem Angeklagten wird zur Last gelegt ...".to_string(),
            charges: vec!["§ 229 StGB".to_string()],
        },
    )
    .expect("Failed to seed indictment")
}

/// Case plus indictment already moved to `scheduled` by a judge.
pub fn seed_scheduled_indictment(store: &JsonStore) -> Indictment {
    let case = seed_case(store);
    let filed = seed_indictment(store, &case.id);
    indictment::queries::schedule(store, &judge(), &filed.id, "2025-01-10 14:00:00", "Saal 2")
        .expect("Failed to schedule indictment")
}
