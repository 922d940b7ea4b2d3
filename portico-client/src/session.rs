//! Session and tenant state.
//!
//! Wraps the provider's password flow and resolves the application-level
//! identity: a successful credential exchange is followed by a lookup of
//! the `usuarios` row matching the email, which yields the tenant and
//! user identifiers every tenant-scoped service depends on. The two
//! scalars are persisted through the storage seam so a page reload keeps
//! its tenant scope; the access token itself never leaves memory.

use std::sync::{Arc, Mutex};

use shared::models::{Error, Result, Session, User};

use crate::storage::KeyValueStore;
use crate::supabase::SupabaseClient;
use crate::supabase::rest::{Direction, TableRequest};

const TENANT_KEY: &str = "portico.tenant";
const USER_KEY: &str = "portico.user";

/// Message shown when sign-in fails for any reason the provider did not
/// describe itself.
const LOGIN_FALLBACK: &str = "An error occurred during login";

/// Holder of the current session; one per running console.
#[derive(Clone)]
pub struct SessionStore {
    client: SupabaseClient,
    storage: Arc<dyn KeyValueStore>,
    session: Arc<Mutex<Session>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Build a store, restoring any persisted identifiers.
    ///
    /// Restoration only brings back the tenant/user scalars: the access
    /// token is gone after a reload, so remote calls run anonymously
    /// until the next sign-in and may be rejected by the store's row
    /// policies.
    #[must_use]
    pub fn new(client: SupabaseClient, storage: Arc<dyn KeyValueStore>) -> Self {
        let restored = read_persisted(storage.as_ref());
        Self {
            client,
            storage,
            session: Arc::new(Mutex::new(restored)),
        }
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn session(&self) -> Session {
        self.session
            .lock()
            .map(|session| *session)
            .unwrap_or_default()
    }

    /// Whether a sign-in (or a restored pair of identifiers) is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session().authenticated
    }

    /// Synchronous read of the resolved tenant identifier.
    #[must_use]
    pub fn tenant_id(&self) -> Option<i64> {
        self.session().tenant_id
    }

    /// Synchronous read of the application user identifier.
    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.session().user_id
    }

    /// The tenant identifier, or [`Error::NoTenant`] for callers that
    /// cannot proceed without one.
    ///
    /// # Errors
    /// [`Error::NoTenant`] when no tenant has been resolved.
    pub fn require_tenant(&self) -> Result<i64> {
        self.tenant_id().ok_or(Error::NoTenant)
    }

    /// Exchange credentials and resolve the application identity.
    ///
    /// On any failure — rejected credentials or a missing `usuarios` row —
    /// local state is cleared, `authenticated` stays `false` and the
    /// returned message is ready to show to the user.
    ///
    /// # Errors
    /// [`Error::Auth`] with the provider's message, or the generic login
    /// message when the failure had no usable description.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let auth = match self.client.sign_in_with_password(email, password).await {
            Ok(auth) => auth,
            Err(err) => {
                tracing::warn!(error = %err, "credential exchange failed");
                self.clear_local();
                return Err(login_error(err));
            }
        };
        self.client.set_access_token(Some(auth.access_token));

        let lookup = TableRequest::select("usuarios")
            .eq("email", email)
            .order("id", Direction::Ascending);
        let row = match self.client.rows::<User>(lookup).await {
            Ok((rows, _)) => rows.into_iter().next(),
            Err(err) => {
                tracing::warn!(error = %err, "application user lookup failed");
                self.clear_local();
                return Err(login_error(err));
            }
        };

        let Some(user) = row else {
            tracing::warn!(email, "no application user row for authenticated email");
            self.clear_local();
            return Err(Error::auth(LOGIN_FALLBACK));
        };

        write_persisted(self.storage.as_ref(), user.tenant_id, user.id);
        let session = Session::signed_in(user.tenant_id, user.id);
        if let Ok(mut guard) = self.session.lock() {
            *guard = session;
        }
        tracing::info!(tenant_id = user.tenant_id, user_id = user.id, "signed in");
        Ok(session)
    }

    /// Revoke the remote session (best effort) and clear local state.
    pub async fn sign_out(&self) {
        if let Err(err) = self.client.sign_out().await {
            tracing::debug!(error = %err, "remote sign-out failed; clearing locally");
        }
        self.clear_local();
        tracing::info!("signed out");
    }

    /// The authenticated principal's email, looked up from the provider
    /// rather than local state.
    ///
    /// # Errors
    /// [`Error::Auth`] when no valid remote session exists or the
    /// principal carries no email.
    pub async fn current_email(&self) -> Result<String> {
        let user = self.client.current_user().await?;
        user.email
            .ok_or_else(|| Error::auth("authenticated principal has no email"))
    }

    fn clear_local(&self) {
        self.client.set_access_token(None);
        clear_persisted(self.storage.as_ref());
        if let Ok(mut guard) = self.session.lock() {
            *guard = Session::signed_out();
        }
    }
}

/// Normalize a sign-in failure to a presentable auth error.
fn login_error(err: Error) -> Error {
    match err {
        Error::Auth(message) if !message.is_empty() => Error::Auth(message),
        _ => Error::auth(LOGIN_FALLBACK),
    }
}

fn read_persisted(storage: &dyn KeyValueStore) -> Session {
    let tenant_id = storage.get(TENANT_KEY).and_then(|raw| raw.parse().ok());
    let user_id = storage.get(USER_KEY).and_then(|raw| raw.parse().ok());
    match (tenant_id, user_id) {
        (Some(tenant_id), Some(user_id)) => Session::signed_in(tenant_id, user_id),
        _ => Session::signed_out(),
    }
}

fn write_persisted(storage: &dyn KeyValueStore, tenant_id: i64, user_id: i64) {
    storage.set(TENANT_KEY, &tenant_id.to_string());
    storage.set(USER_KEY, &user_id.to_string());
}

fn clear_persisted(storage: &dyn KeyValueStore) {
    storage.remove(TENANT_KEY);
    storage.remove(USER_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use shared::config::ConsoleConfig;

    fn store_with(storage: Arc<dyn KeyValueStore>) -> SessionStore {
        let client = SupabaseClient::new(ConsoleConfig::with_project(
            "https://acme.supabase.co",
            "anon-key",
        ));
        SessionStore::new(client, storage)
    }

    #[test]
    fn fresh_store_is_signed_out() {
        let store = store_with(Arc::new(MemoryStore::new()));
        assert!(!store.is_authenticated());
        assert_eq!(store.tenant_id(), None);
        assert_eq!(store.require_tenant(), Err(Error::NoTenant));
    }

    #[test]
    fn persisted_identifiers_survive_a_reload() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        write_persisted(storage.as_ref(), 7, 42);

        let store = store_with(Arc::clone(&storage));
        assert!(store.is_authenticated());
        assert_eq!(store.tenant_id(), Some(7));
        assert_eq!(store.user_id(), Some(42));
        assert_eq!(store.require_tenant(), Ok(7));
    }

    #[test]
    fn a_lone_identifier_does_not_authenticate() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        storage.set(TENANT_KEY, "7");

        let store = store_with(Arc::clone(&storage));
        assert!(!store.is_authenticated());
        assert_eq!(store.tenant_id(), None);
    }

    #[test]
    fn unparseable_identifiers_are_ignored() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        storage.set(TENANT_KEY, "seven");
        storage.set(USER_KEY, "42");

        let store = store_with(Arc::clone(&storage));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn clear_local_wipes_state_and_storage() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        write_persisted(storage.as_ref(), 7, 42);

        let store = store_with(Arc::clone(&storage));
        store.clear_local();

        assert!(!store.is_authenticated());
        assert_eq!(storage.get(TENANT_KEY), None);
        assert_eq!(storage.get(USER_KEY), None);
    }

    #[test]
    fn login_error_falls_back_to_the_generic_message() {
        assert_eq!(
            login_error(Error::Http("connection refused".to_string())),
            Error::auth(LOGIN_FALLBACK)
        );
        assert_eq!(
            login_error(Error::auth("Invalid login credentials")),
            Error::auth("Invalid login credentials")
        );
    }
}
