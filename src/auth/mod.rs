pub mod identity;
pub mod roles;
pub mod validate;

pub use identity::Identity;
pub use roles::{RoleType, authorize, has_role_type};
