//! Access guard for endpoints that expose raw catalog rows.
//!
//! The guard is a pure check over an explicit [`Session`] value built per
//! request by the HTTP layer. It performs no I/O.

use crate::roles::ROLE_ADMIN;
use crate::types::DbId;

/// Denial reason returned to callers that are not authenticated admins.
pub const UNAUTHORIZED_ACCESS: &str = "Unauthorized access";

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: DbId,
    pub role: String,
}

/// Immutable caller context for a single request.
///
/// An anonymous session carries no identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    pub fn authenticated(user_id: DbId, role: impl Into<String>) -> Self {
        Self {
            identity: Some(Identity {
                user_id,
                role: role.into(),
            }),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }
}

/// Outcome of [`authorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny(&'static str),
}

impl Access {
    pub fn is_allowed(self) -> bool {
        matches!(self, Access::Allow)
    }
}

/// Allow iff the session holds a valid identity whose role is `admin`.
pub fn authorize(session: &Session) -> Access {
    match session.identity() {
        Some(identity) if identity.user_id > 0 && identity.role == ROLE_ADMIN => Access::Allow,
        _ => Access::Deny(UNAUTHORIZED_ACCESS),
    }
}
