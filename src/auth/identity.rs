/// The authenticated caller for one request: user id, display name, and the
/// literal role string from the role vocabulary.
///
/// Authentication itself happens in the external collaborator; the core only
/// requires that an identity is present and non-empty before any gated
/// operation. There is no ambient current-user; every operation takes the
/// identity as an explicit parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub username: String,
    pub role: String,
}

impl Identity {
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Identity {
            user_id: user_id.into(),
            username: username.into(),
            role: role.into(),
        }
    }

    /// An identity with an empty user id or role counts as absent.
    pub fn is_present(&self) -> bool {
        !self.user_id.trim().is_empty() && !self.role.trim().is_empty()
    }
}
