use serde::{Deserialize, Serialize};

/// An application user row from the remote `usuarios` table.
///
/// Distinct from the authentication principal: the auth provider keys its
/// accounts by UUID, while this row carries the store-assigned integer id
/// and the tenant scope. The two are linked by email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Email address, also the sign-in identifier.
    pub email: String,
    /// Owning tenant.
    #[serde(rename = "id_contrato")]
    pub tenant_id: i64,
}

/// Editable fields for a user about to be created.
///
/// The credential travels separately to the auth provider and the service
/// stamps the tenant identifier on the inserted row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    /// Display name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Email address.
    pub email: String,
}

/// Partial patch for an existing user; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserUpdate {
    /// New display name, if changing.
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email address, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_maps_the_spanish_column_names() {
        let user = User {
            id: 12,
            name: "Ana Torres".to_string(),
            email: "ana@acme.test".to_string(),
            tenant_id: 5,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["nombre"], "Ana Torres");
        assert_eq!(json["id_contrato"], 5);
        assert!(json.get("name").is_none());
        assert!(json.get("tenant_id").is_none());

        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn user_row_from_the_store_parses() {
        let json = r#"{"id":3,"nombre":"Luis","email":"luis@acme.test","id_contrato":9}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.name, "Luis");
        assert_eq!(user.tenant_id, 9);
    }

    #[test]
    fn user_update_renames_and_skips() {
        let patch = UserUpdate {
            name: Some("Luisa".to_string()),
            email: None,
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"nombre":"Luisa"}"#);
    }
}
