use serde::{Deserialize, Serialize};

/// Locally held authentication state.
///
/// The remote store is the source of truth for everything durable; this
/// struct only mirrors the two scalar identifiers the console persists so a
/// page reload keeps its tenant scope. The credential itself is never
/// persisted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Whether a credential exchange succeeded this session.
    pub authenticated: bool,
    /// Tenant identifier resolved from the application user row.
    pub tenant_id: Option<i64>,
    /// Identifier of the application user row, not the auth principal.
    pub user_id: Option<i64>,
}

impl Session {
    /// A signed-in session scoped to the given tenant and user.
    #[must_use]
    pub const fn signed_in(tenant_id: i64, user_id: i64) -> Self {
        Self {
            authenticated: true,
            tenant_id: Some(tenant_id),
            user_id: Some(user_id),
        }
    }

    /// The signed-out state; also the state after any failed exchange.
    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            authenticated: false,
            tenant_id: None,
            user_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_signed_out() {
        let session = Session::default();
        assert!(!session.authenticated);
        assert_eq!(session.tenant_id, None);
        assert_eq!(session.user_id, None);
        assert_eq!(session, Session::signed_out());
    }

    #[test]
    fn signed_in_session_carries_both_identifiers() {
        let session = Session::signed_in(7, 42);
        assert!(session.authenticated);
        assert_eq!(session.tenant_id, Some(7));
        assert_eq!(session.user_id, Some(42));
    }
}
