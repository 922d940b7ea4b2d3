use serde::{Deserialize, Serialize};

/// A navigation entry from the remote `menus` table.
///
/// Menus form a two-level tree through `parent_id`. The store has no
/// cascade rule: deleting a parent leaves its children with a dangling
/// `parent_id`, which readers must tolerate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    /// Store-assigned identifier.
    pub id: i64,
    /// Label shown in the sidebar.
    pub title: String,
    /// Route path the entry navigates to, e.g. `/app/roles`.
    pub path: String,
    /// Icon name rendered next to the label.
    pub icon: String,
    /// Parent entry, or `None` for a top-level entry.
    pub parent_id: Option<i64>,
    /// Sort key within a level; ascending.
    pub order: i32,
}

/// Fields for a menu entry about to be inserted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewMenuItem {
    /// Label shown in the sidebar.
    pub title: String,
    /// Route path the entry navigates to.
    pub path: String,
    /// Icon name.
    pub icon: String,
    /// Parent entry, or `None` for a top-level entry.
    pub parent_id: Option<i64>,
    /// Sort key within a level.
    pub order: i32,
}

/// Partial patch for an existing menu entry; absent fields are untouched.
///
/// `parent_id` is double-wrapped so a patch can distinguish "leave the
/// parent alone" (`None`) from "detach from the parent" (`Some(None)`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItemUpdate {
    /// New label, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New route path, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// New icon name, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// New parent, if changing; `Some(None)` detaches the entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<i64>>,
    /// New sort key, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_item_round_trips_with_a_null_parent() {
        let item = MenuItem {
            id: 1,
            title: "Dashboard".to_string(),
            path: "/app".to_string(),
            icon: "home".to_string(),
            parent_id: None,
            order: 0,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json["parent_id"].is_null());

        let back: MenuItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn update_distinguishes_detach_from_untouched() {
        let untouched = MenuItemUpdate::default();
        assert_eq!(serde_json::to_string(&untouched).unwrap(), "{}");

        let detached = MenuItemUpdate {
            parent_id: Some(None),
            ..MenuItemUpdate::default()
        };
        assert_eq!(
            serde_json::to_string(&detached).unwrap(),
            r#"{"parent_id":null}"#
        );

        let reattached = MenuItemUpdate {
            parent_id: Some(Some(4)),
            ..MenuItemUpdate::default()
        };
        assert_eq!(
            serde_json::to_string(&reattached).unwrap(),
            r#"{"parent_id":4}"#
        );
    }
}
