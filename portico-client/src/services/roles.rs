use serde_json::json;
use shared::models::{NewRole, Page, Result, Role, RoleUpdate};

use crate::feed::Feed;
use crate::session::SessionStore;
use crate::supabase::SupabaseClient;
use crate::supabase::rest::{Direction, TableRequest};

const TABLE: &str = "roles";

/// Paginated CRUD over the tenant's `roles` rows.
#[derive(Clone, Debug)]
pub struct RoleService {
    client: SupabaseClient,
    session: SessionStore,
    feed: Feed<Page<Role>>,
}

impl RoleService {
    /// Build the service over a shared client and session.
    #[must_use]
    pub fn new(client: SupabaseClient, session: SessionStore) -> Self {
        Self {
            client,
            session,
            feed: Feed::new(),
        }
    }

    /// The replay-latest feed of the last listed page.
    #[must_use]
    pub const fn feed(&self) -> &Feed<Page<Role>> {
        &self.feed
    }

    /// Fetch one zero-based page of roles, ordered by id, and publish it.
    ///
    /// The data window and the exact count travel in the same response;
    /// there is still no transactional tie between the count and any
    /// neighbouring mutation, and none is attempted.
    ///
    /// # Errors
    /// [`shared::models::Error::NoTenant`] without a resolved tenant,
    /// otherwise the remote/transport taxonomy.
    pub async fn list(&self, page_index: u32, page_size: u32) -> Result<Page<Role>> {
        let tenant_id = self.session.require_tenant()?;
        let (first, last) = Page::<Role>::offsets(page_index, page_size);

        let request = TableRequest::select(TABLE)
            .eq("id_contrato", tenant_id)
            .order("id", Direction::Ascending)
            .range(first, last)
            .count_exact();
        let (items, total) = self.client.rows::<Role>(request).await?;

        let page = Page {
            total: total.unwrap_or(items.len() as u64),
            items,
            page_index,
            page_size,
        };
        self.feed.publish(page.clone());
        Ok(page)
    }

    /// Insert a role, stamped with the session tenant; returns the stored
    /// row including its assigned identifier.
    ///
    /// # Errors
    /// [`shared::models::Error::NoTenant`] without a resolved tenant,
    /// otherwise the remote/transport taxonomy.
    pub async fn create(&self, fields: NewRole) -> Result<Role> {
        let tenant_id = self.session.require_tenant()?;
        let request = TableRequest::insert(
            TABLE,
            json!({
                "name": fields.name,
                "description": fields.description,
                "id_contrato": tenant_id,
            }),
        );
        self.client.row(request).await
    }

    /// Patch the role matched by `id` within the session tenant.
    ///
    /// # Errors
    /// [`shared::models::Error::NoTenant`] without a resolved tenant; a
    /// zero-row match surfaces as a remote error.
    pub async fn update(&self, id: i64, patch: RoleUpdate) -> Result<Role> {
        let tenant_id = self.session.require_tenant()?;
        let request = TableRequest::update(TABLE, serde_json::to_value(patch).unwrap_or_default())
            .eq("id", id)
            .eq("id_contrato", tenant_id);
        self.client.row(request).await
    }

    /// Remove the role matched by `id` within the session tenant.
    ///
    /// # Errors
    /// [`shared::models::Error::NoTenant`] without a resolved tenant,
    /// otherwise the remote/transport taxonomy.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let tenant_id = self.session.require_tenant()?;
        let request = TableRequest::delete(TABLE)
            .eq("id", id)
            .eq("id_contrato", tenant_id);
        self.client.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use shared::config::ConsoleConfig;
    use shared::models::Error;
    use std::sync::Arc;

    fn service(authenticated: bool) -> RoleService {
        let client = SupabaseClient::new(ConsoleConfig::with_project(
            "https://acme.supabase.co",
            "anon-key",
        ));
        let storage = Arc::new(MemoryStore::new());
        if authenticated {
            storage.set("portico.tenant", "7");
            storage.set("portico.user", "42");
        }
        let session = SessionStore::new(client.clone(), storage);
        RoleService::new(client, session)
    }

    #[test]
    fn list_without_a_tenant_fails_fast() {
        let service = service(false);
        let result = futures::executor::block_on(service.list(0, 10));
        assert_eq!(result.unwrap_err(), Error::NoTenant);
    }

    #[test]
    fn mutations_without_a_tenant_fail_fast() {
        let service = service(false);
        let created = futures::executor::block_on(service.create(NewRole {
            name: "Admin".to_string(),
            description: "Full access".to_string(),
        }));
        assert_eq!(created.unwrap_err(), Error::NoTenant);

        let deleted = futures::executor::block_on(service.delete(3));
        assert_eq!(deleted.unwrap_err(), Error::NoTenant);
    }

    #[test]
    fn feed_starts_empty_and_is_shared() {
        let service = service(true);
        assert_eq!(service.feed().latest(), None);

        let page = Page {
            items: vec![],
            total: 0,
            page_index: 0,
            page_size: 10,
        };
        service.feed().publish(page.clone());
        assert_eq!(service.clone().feed().latest(), Some(page));
    }
}
