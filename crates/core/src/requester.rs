//! Explicit identity of whoever issued the current request.
//!
//! Handlers build a [`Requester`] from the `Authorization` header and pass it
//! into every core call that depends on identity.

use crate::types::DbId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requester {
    #[default]
    Anonymous,
    User(DbId),
}

impl Requester {
    /// The authenticated user id, if any.
    pub fn user_id(&self) -> Option<DbId> {
        match self {
            Requester::Anonymous => None,
            Requester::User(id) => Some(*id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Requester::User(_))
    }
}

impl From<Option<DbId>> for Requester {
    fn from(user_id: Option<DbId>) -> Self {
        user_id.map_or(Requester::Anonymous, Requester::User)
    }
}
