use serde_json::json;
use shared::models::{NewUser, Page, Result, User, UserUpdate};

use crate::feed::Feed;
use crate::session::SessionStore;
use crate::supabase::SupabaseClient;
use crate::supabase::rest::{Direction, TableRequest};

const TABLE: &str = "usuarios";

/// Paginated CRUD over the tenant's `usuarios` rows.
///
/// Users are the one entity with a footprint in both halves of the
/// backend: an auth credential and an application row. Creation touches
/// both; update and delete only touch the row (credential maintenance
/// needs privileged backend access the console does not hold).
#[derive(Clone, Debug)]
pub struct UserService {
    client: SupabaseClient,
    session: SessionStore,
    feed: Feed<Page<User>>,
}

impl UserService {
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
    pub const fn feed(&self) -> &Feed<Page<User>> {
        &self.feed
    }

    /// Fetch one zero-based page of users, ordered by id, and publish it.
    ///
    /// The data window and the total are two independent round trips; a
    /// concurrent insert or delete between them can leave `items` and
    /// `total` momentarily inconsistent, which is accepted as-is.
    ///
    /// # Errors
    /// [`shared::models::Error::NoTenant`] without a resolved tenant,
    /// otherwise the remote/transport taxonomy.
    pub async fn list(&self, page_index: u32, page_size: u32) -> Result<Page<User>> {
        let tenant_id = self.session.require_tenant()?;
        let (first, last) = Page::<User>::offsets(page_index, page_size);

        let window = TableRequest::select(TABLE)
            .eq("id_contrato", tenant_id)
            .order("id", Direction::Ascending)
            .range(first, last)
            .count_exact();
        let (items, window_total) = self.client.rows::<User>(window).await?;

        // Count-only round trip; the window is irrelevant, the total
        // rides in on the Content-Range header.
        let count = TableRequest::select(TABLE)
            .eq("id_contrato", tenant_id)
            .range(0, 0)
            .count_exact();
        let (_, full_total) = self.client.rows::<User>(count).await?;

        let page = Page {
            total: full_total
                .or(window_total)
                .unwrap_or(items.len() as u64),
            items,
            page_index,
            page_size,
        };
        self.feed.publish(page.clone());
        Ok(page)
    }

    /// Register the credential with the auth provider, then insert the
    /// application row stamped with the session tenant.
    ///
    /// The two steps are not atomic: if the insert fails the credential
    /// stays registered, and cleaning it up needs privileged access.
    ///
    /// # Errors
    /// [`shared::models::Error::NoTenant`] without a resolved tenant,
    /// [`shared::models::Error::Auth`] when the provider rejects the
    /// credential, otherwise the remote/transport taxonomy.
    pub async fn create(&self, fields: NewUser, password: &str) -> Result<User> {
        let tenant_id = self.session.require_tenant()?;

        self.client.sign_up(&fields.email, password).await?;

        let request = TableRequest::insert(
            TABLE,
            json!({
                "nombre": fields.name,
                "email": fields.email,
                "id_contrato": tenant_id,
            }),
        );
        match self.client.row(request).await {
            Ok(user) => Ok(user),
            Err(err) => {
                tracing::error!(error = %err, "user row insert failed after sign-up");
                Err(err)
            }
        }
    }

    /// Patch the user matched by `id` within the session tenant.
    ///
    /// A new password, when supplied, is not applied: credential updates
    /// require privileged backend access, so it is logged and dropped.
    ///
    /// # Errors
    /// [`shared::models::Error::NoTenant`] without a resolved tenant; a
    /// zero-row match surfaces as a remote error.
    pub async fn update(&self, id: i64, patch: UserUpdate, password: Option<&str>) -> Result<User> {
        let tenant_id = self.session.require_tenant()?;

        if password.is_some() {
            tracing::warn!(user_id = id, "password update requires admin privileges; ignored");
        }

        let request = TableRequest::update(TABLE, serde_json::to_value(patch).unwrap_or_default())
            .eq("id", id)
            .eq("id_contrato", tenant_id);
        self.client.row(request).await
    }

    /// Remove the user row matched by `id` within the session tenant.
    ///
    /// The auth credential is left behind; removing it requires
    /// privileged backend access.
    ///
    /// # Errors
    /// [`shared::models::Error::NoTenant`] without a resolved tenant,
    /// otherwise the remote/transport taxonomy.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let tenant_id = self.session.require_tenant()?;
        let request = TableRequest::delete(TABLE)
            .eq("id", id)
            .eq("id_contrato", tenant_id);
        self.client.execute(request).await?;

        tracing::warn!(user_id = id, "auth credential not removed; requires admin privileges");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use shared::config::ConsoleConfig;
    use shared::models::Error;
    use std::sync::Arc;

    fn unauthenticated_service() -> UserService {
        let client = SupabaseClient::new(ConsoleConfig::with_project(
            "https://acme.supabase.co",
            "anon-key",
        ));
        let session = SessionStore::new(client.clone(), Arc::new(MemoryStore::new()));
        UserService::new(client, session)
    }

    #[test]
    fn every_operation_requires_a_tenant() {
        let service = unauthenticated_service();

        let listed = futures::executor::block_on(service.list(0, 10));
        assert_eq!(listed.unwrap_err(), Error::NoTenant);

        let created = futures::executor::block_on(service.create(
            NewUser {
                name: "Ana".to_string(),
                email: "ana@acme.test".to_string(),
            },
            "hunter2-hunter2",
        ));
        assert_eq!(created.unwrap_err(), Error::NoTenant);

        let updated =
            futures::executor::block_on(service.update(3, UserUpdate::default(), None));
        assert_eq!(updated.unwrap_err(), Error::NoTenant);

        let deleted = futures::executor::block_on(service.delete(3));
        assert_eq!(deleted.unwrap_err(), Error::NoTenant);
    }
}
