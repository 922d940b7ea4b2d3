//! Application context.
//!
//! The one explicitly constructed object holding the shared client, the
//! session store and the entity services. Built once at process start,
//! never torn down, and handed to components instead of reaching for
//! globals; state inside it changes only through its members' methods.

use std::sync::Arc;

use shared::config::ConsoleConfig;

use crate::services::{MenuService, RoleService, UserService};
use crate::session::SessionStore;
use crate::storage::KeyValueStore;
use crate::supabase::SupabaseClient;

/// Everything a page needs to talk to the backend.
#[derive(Clone, Debug)]
pub struct Console {
    client: SupabaseClient,
    session: SessionStore,
    roles: RoleService,
    users: UserService,
    menus: MenuService,
}

impl Console {
    /// Wire up the full context for the given project coordinates and
    /// persistence seam. Restores any persisted session identifiers.
    #[must_use]
    pub fn new(config: ConsoleConfig, storage: Arc<dyn KeyValueStore>) -> Self {
        let client = SupabaseClient::new(config);
        let session = SessionStore::new(client.clone(), storage);
        Self {
            roles: RoleService::new(client.clone(), session.clone()),
            users: UserService::new(client.clone(), session.clone()),
            menus: MenuService::new(client.clone()),
            client,
            session,
        }
    }

    /// The shared low-level client.
    #[must_use]
    pub const fn client(&self) -> &SupabaseClient {
        &self.client
    }

    /// Session and tenant state.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Roles service.
    #[must_use]
    pub const fn roles(&self) -> &RoleService {
        &self.roles
    }

    /// Users service.
    #[must_use]
    pub const fn users(&self) -> &UserService {
        &self.users
    }

    /// Menus service.
    #[must_use]
    pub const fn menus(&self) -> &MenuService {
        &self.menus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn console_restores_persisted_identifiers() {
        let storage = Arc::new(MemoryStore::new());
        storage.set("portico.tenant", "5");
        storage.set("portico.user", "11");

        let console = Console::new(
            ConsoleConfig::with_project("https://acme.supabase.co", "anon-key"),
            storage,
        );
        assert!(console.session().is_authenticated());
        assert_eq!(console.session().tenant_id(), Some(5));
    }

    #[test]
    fn services_share_one_session() {
        let console = Console::new(
            ConsoleConfig::with_project("https://acme.supabase.co", "anon-key"),
            Arc::new(MemoryStore::new()),
        );
        // Same underlying session: no tenant anywhere until sign-in.
        assert_eq!(console.session().tenant_id(), None);
        let listed = futures::executor::block_on(console.roles().list(0, 10));
        assert!(listed.is_err());
    }
}
