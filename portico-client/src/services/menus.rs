use serde_json::json;
use shared::models::{MenuItem, MenuItemUpdate, NewMenuItem, Page, Result};

use crate::feed::Feed;
use crate::supabase::SupabaseClient;
use crate::supabase::rest::{Direction, TableRequest};

const TABLE: &str = "menus";

/// Paginated CRUD over the global `menus` table.
///
/// Menus are not tenant-scoped. They form a two-level tree via
/// `parent_id`, and the store has no cascade rule: deleting a parent
/// leaves its children dangling, which readers of the tree tolerate.
#[derive(Clone, Debug)]
pub struct MenuService {
    client: SupabaseClient,
    feed: Feed<Page<MenuItem>>,
}

impl MenuService {
    /// Build the service over a shared client.
    #[must_use]
    pub fn new(client: SupabaseClient) -> Self {
        Self {
            client,
            feed: Feed::new(),
        }
    }

    /// The replay-latest feed of the last listed page.
    #[must_use]
    pub const fn feed(&self) -> &Feed<Page<MenuItem>> {
        &self.feed
    }

    /// Fetch one zero-based page of menu entries, in sidebar order, and
    /// publish it.
    ///
    /// Window and total are two independent round trips (accepted race,
    /// as with users).
    ///
    /// # Errors
    /// The remote/transport taxonomy.
    pub async fn list(&self, page_index: u32, page_size: u32) -> Result<Page<MenuItem>> {
        let (first, last) = Page::<MenuItem>::offsets(page_index, page_size);

        let window = TableRequest::select(TABLE)
            .order("order", Direction::Ascending)
            .range(first, last)
            .count_exact();
        let (items, window_total) = self.client.rows::<MenuItem>(window).await?;

        // Count-only round trip, as with users.
        let count = TableRequest::select(TABLE).range(0, 0).count_exact();
        let (_, full_total) = self.client.rows::<MenuItem>(count).await?;

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

    /// Top-level entries only (`parent_id IS NULL`), in sidebar order.
    /// Fills the parent selector in the editor dialog and seeds the
    /// sidebar tree.
    ///
    /// # Errors
    /// The remote/transport taxonomy.
    pub async fn parent_items(&self) -> Result<Vec<MenuItem>> {
        let request = TableRequest::select(TABLE)
            .is_null("parent_id")
            .order("order", Direction::Ascending);
        let (items, _) = self.client.rows::<MenuItem>(request).await?;
        Ok(items)
    }

    /// Insert a menu entry; returns the stored row with its identifier.
    ///
    /// # Errors
    /// The remote/transport taxonomy.
    pub async fn create(&self, fields: NewMenuItem) -> Result<MenuItem> {
        let request = TableRequest::insert(
            TABLE,
            json!({
                "title": fields.title,
                "path": fields.path,
                "icon": fields.icon,
                "parent_id": fields.parent_id,
                "order": fields.order,
            }),
        );
        self.client.row(request).await
    }

    /// Patch the menu entry matched by `id`.
    ///
    /// # Errors
    /// A zero-row match surfaces as a remote error.
    pub async fn update(&self, id: i64, patch: MenuItemUpdate) -> Result<MenuItem> {
        let request =
            TableRequest::update(TABLE, serde_json::to_value(patch).unwrap_or_default())
                .eq("id", id);
        self.client.row(request).await
    }

    /// Remove the menu entry matched by `id`. Children of a removed
    /// parent are left in place with a dangling `parent_id`.
    ///
    /// # Errors
    /// The remote/transport taxonomy.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let request = TableRequest::delete(TABLE).eq("id", id);
        self.client.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::config::ConsoleConfig;

    #[test]
    fn feed_replays_the_last_published_page() {
        let client = SupabaseClient::new(ConsoleConfig::with_project(
            "https://acme.supabase.co",
            "anon-key",
        ));
        let service = MenuService::new(client);

        let page = Page {
            items: vec![MenuItem {
                id: 1,
                title: "Dashboard".to_string(),
                path: "/app".to_string(),
                icon: "home".to_string(),
                parent_id: None,
                order: 0,
            }],
            total: 1,
            page_index: 0,
            page_size: 10,
        };
        service.feed().publish(page.clone());

        let mut receiver = service.feed().subscribe();
        assert_eq!(receiver.try_next().unwrap(), Some(page));
    }
}
