use serde::{Deserialize, Serialize};

/// A role row from the remote `roles` table.
///
/// Identifiers are assigned by the store on insert and never reused. Rows
/// are partitioned per tenant through the `id_contrato` column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name, e.g. "Admin".
    pub name: String,
    /// Free-form description of what the role grants.
    pub description: String,
    /// Owning tenant.
    #[serde(rename = "id_contrato")]
    pub tenant_id: i64,
}

/// Editable fields for a role about to be inserted.
///
/// The service stamps the tenant identifier; callers never supply it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewRole {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
}

/// Partial patch for an existing role; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleUpdate {
    /// New display name, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_maps_the_tenant_column_name() {
        let role = Role {
            id: 3,
            name: "Admin".to_string(),
            description: "Full access".to_string(),
            tenant_id: 7,
        };
        let json = serde_json::to_value(&role).unwrap();
        assert_eq!(json["id_contrato"], 7);
        assert!(json.get("tenant_id").is_none());

        let back: Role = serde_json::from_value(json).unwrap();
        assert_eq!(back, role);
    }

    #[test]
    fn role_update_skips_absent_fields() {
        let patch = RoleUpdate {
            name: Some("Operator".to_string()),
            description: None,
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert!(json.contains("Operator"));
        assert!(!json.contains("description"));
    }

    #[test]
    fn empty_role_update_serializes_to_an_empty_object() {
        let json = serde_json::to_string(&RoleUpdate::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
