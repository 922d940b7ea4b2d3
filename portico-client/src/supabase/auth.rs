//! Authentication endpoints of the hosted project.
//!
//! Thin pass-throughs over the provider's password flow: exchange, global
//! sign-out, sign-up, and the authoritative current-user lookup.

use serde::Deserialize;
use shared::models::{Error, Result};
use uuid::Uuid;

use super::SupabaseClient;

/// The authentication principal, keyed by the provider's UUID.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    /// Provider-assigned account id; unrelated to the `usuarios` row id.
    pub id: Uuid,
    /// Account email; absent on anonymous principals.
    #[serde(default)]
    pub email: Option<String>,
}

/// A successful credential exchange.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    /// Bearer token for subsequent table calls. Held in memory only.
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: String,
    /// Seconds until the access token expires.
    pub expires_in: u64,
    /// Opaque refresh credential; unused by the console but preserved.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// The signed-in principal.
    pub user: AuthUser,
}

/// Error payload the auth provider returns, across its two vintages.
///
/// Older deployments answer `{error, error_description}`, newer ones
/// `{error_code, msg}` or `{code, message}`. Whichever field is present
/// first wins.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AuthErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl AuthErrorBody {
    /// The most specific human-readable message in the payload.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
    }
}

impl SupabaseClient {
    /// Exchange an email/password pair for a session.
    ///
    /// # Errors
    /// [`Error::Auth`] with the provider's message on rejected credentials,
    /// [`Error::Http`] when no response was produced.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession> {
        let url = format!("{}/token?grant_type=password", self.config().auth_url());
        let response = self
            .http_post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|err| Error::Http(err.to_string()))?;

        if !response.status().is_success() {
            return Err(auth_error(response).await);
        }

        response
            .json::<AuthSession>()
            .await
            .map_err(|err| Error::Http(err.to_string()))
    }

    /// Revoke the current session on the provider side.
    ///
    /// # Errors
    /// [`Error::Auth`] when the provider rejects the token for a reason
    /// other than it already being invalid, [`Error::Http`] on transport
    /// failure. Callers treat every error here as best-effort.
    pub async fn sign_out(&self) -> Result<()> {
        let url = format!("{}/logout", self.config().auth_url());
        let response = self
            .http_post(&url)
            .send()
            .await
            .map_err(|err| Error::Http(err.to_string()))?;

        // An already-expired token is as signed-out as it gets.
        if response.status().is_success() || response.status().as_u16() == 401 {
            return Ok(());
        }
        Err(auth_error(response).await)
    }

    /// Register a new credential with the provider.
    ///
    /// # Errors
    /// [`Error::Auth`] with the provider's message (e.g. an already
    /// registered email), [`Error::Http`] on transport failure.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<()> {
        let url = format!("{}/signup", self.config().auth_url());
        let response = self
            .http_post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|err| Error::Http(err.to_string()))?;

        if !response.status().is_success() {
            return Err(auth_error(response).await);
        }
        Ok(())
    }

    /// Look up the authenticated principal from the provider, never from
    /// local state. May disagree with persisted identifiers when the
    /// remote session has expired.
    ///
    /// # Errors
    /// [`Error::Auth`] when no valid session exists, [`Error::Http`] on
    /// transport failure.
    pub async fn current_user(&self) -> Result<AuthUser> {
        let url = format!("{}/user", self.config().auth_url());
        let response = self
            .http_get(&url)
            .send()
            .await
            .map_err(|err| Error::Http(err.to_string()))?;

        if !response.status().is_success() {
            return Err(auth_error(response).await);
        }

        response
            .json::<AuthUser>()
            .await
            .map_err(|err| Error::Http(err.to_string()))
    }
}

/// Fold a non-success auth response into the error taxonomy.
async fn auth_error(response: reqwest::Response) -> Error {
    let status = response.status();
    let message = response
        .json::<AuthErrorBody>()
        .await
        .ok()
        .and_then(AuthErrorBody::into_message)
        .unwrap_or_else(|| format!("authentication failed with status {status}"));
    Error::Auth(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_session_parses_a_password_grant_response() {
        let json = r#"{
            "access_token": "jwt-token",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh-me",
            "user": {
                "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
                "email": "ana@acme.test",
                "role": "authenticated"
            }
        }"#;
        let session: AuthSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.access_token, "jwt-token");
        assert_eq!(session.token_type, "bearer");
        assert_eq!(session.expires_in, 3600);
        assert_eq!(session.refresh_token.as_deref(), Some("refresh-me"));
        assert_eq!(session.user.email.as_deref(), Some("ana@acme.test"));
    }

    #[test]
    fn legacy_error_shape_yields_the_description() {
        let body: AuthErrorBody = serde_json::from_str(
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        )
        .unwrap();
        assert_eq!(
            body.into_message().as_deref(),
            Some("Invalid login credentials")
        );
    }

    #[test]
    fn current_error_shape_yields_the_msg() {
        let body: AuthErrorBody =
            serde_json::from_str(r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#)
                .unwrap();
        assert_eq!(
            body.into_message().as_deref(),
            Some("Invalid login credentials")
        );
    }

    #[test]
    fn empty_error_body_has_no_message() {
        let body = AuthErrorBody::default();
        assert_eq!(body.into_message(), None);
    }
}
