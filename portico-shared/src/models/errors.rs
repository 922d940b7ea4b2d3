use serde::Deserialize;
use thiserror::Error;

/// Convenience alias used across the client and the pages.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything a remote operation can fail with.
///
/// All variants carry a human-readable message: the caller's job is to show
/// it in a transient notification and move on. Nothing here is fatal and
/// nothing is retried automatically.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Credential exchange failed or the application user row was missing.
    #[error("{0}")]
    Auth(String),

    /// A tenant-scoped operation ran with no resolved tenant identifier.
    #[error("no tenant resolved for the current session")]
    NoTenant,

    /// The table store rejected an operation (constraint violation,
    /// connectivity failure, zero rows matched, ...).
    #[error("{message}")]
    Remote {
        /// Message taken from the store's error payload when parseable.
        message: String,
        /// Store-specific error code, e.g. a SQLSTATE, when provided.
        code: Option<String>,
    },

    /// The request never produced a response (DNS, TLS, aborted fetch).
    #[error("{0}")]
    Http(String),
}

impl Error {
    /// Build an [`Error::Auth`] from any displayable source.
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Build an [`Error::Remote`] without a store code.
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
            code: None,
        }
    }

    /// Whether this error came from the authentication provider.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

/// Error payload shape returned by the table store.
///
/// PostgREST reports failures as a JSON object; only `message` is always
/// present, the rest depends on the failure class.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RemoteErrorBody {
    /// Human-readable description of the failure.
    pub message: String,
    /// SQLSTATE-like code, when the failure originated in the database.
    #[serde(default)]
    pub code: Option<String>,
    /// Additional context, e.g. the violated constraint.
    #[serde(default)]
    pub details: Option<String>,
    /// Remediation hint, rarely populated.
    #[serde(default)]
    pub hint: Option<String>,
}

impl From<RemoteErrorBody> for Error {
    fn from(body: RemoteErrorBody) -> Self {
        let message = match body.details {
            Some(details) if !details.is_empty() => format!("{}: {details}", body.message),
            _ => body.message,
        };
        Self::Remote {
            message,
            code: body.code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_displays_the_message_verbatim() {
        let error = Error::auth("Invalid login credentials");
        assert_eq!(error.to_string(), "Invalid login credentials");
        assert!(error.is_auth());
    }

    #[test]
    fn no_tenant_has_a_fixed_message() {
        assert_eq!(
            Error::NoTenant.to_string(),
            "no tenant resolved for the current session"
        );
    }

    #[test]
    fn remote_body_deserializes_with_optional_fields() {
        let json = r#"{"message":"duplicate key value violates unique constraint","code":"23505"}"#;
        let body: RemoteErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.code.as_deref(), Some("23505"));
        assert_eq!(body.details, None);

        let error = Error::from(body);
        assert_eq!(
            error,
            Error::Remote {
                message: "duplicate key value violates unique constraint".to_string(),
                code: Some("23505".to_string()),
            }
        );
    }

    #[test]
    fn remote_body_folds_details_into_the_message() {
        let body = RemoteErrorBody {
            message: "insert failed".to_string(),
            code: None,
            details: Some("Key (email) already exists".to_string()),
            hint: None,
        };
        let error = Error::from(body);
        assert_eq!(
            error.to_string(),
            "insert failed: Key (email) already exists"
        );
    }
}
