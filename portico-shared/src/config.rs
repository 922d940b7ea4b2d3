//! Console configuration
//!
//! The console talks directly to a hosted Supabase-compatible project.
//! Both coordinates are baked in at compile time and can be overridden
//! through environment variables at build time.

/// Coordinates of the hosted backend project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Base URL of the hosted project, without a trailing slash.
    pub project_url: String,
    /// Long-lived opaque API key sent with every request.
    pub anon_key: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            project_url: option_env!("PORTICO_SUPABASE_URL")
                .unwrap_or("https://project.supabase.co")
                .trim_end_matches('/')
                .to_string(),
            anon_key: option_env!("PORTICO_SUPABASE_ANON_KEY")
                .unwrap_or("public-anon-key")
                .to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Create a configuration instance from the compiled-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration pointing at an explicit project.
    #[must_use]
    pub fn with_project(project_url: &str, anon_key: &str) -> Self {
        Self {
            project_url: project_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    /// Base URL of the authentication endpoint group.
    #[must_use]
    pub fn auth_url(&self) -> String {
        format!("{}/auth/v1", self.project_url)
    }

    /// Base URL of the table REST endpoint group.
    #[must_use]
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.project_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_trailing_slash() {
        let config = ConsoleConfig::new();
        assert!(!config.project_url.ends_with('/'));
        assert!(!config.project_url.is_empty());
        assert!(!config.anon_key.is_empty());
    }

    #[test]
    fn with_project_trims_trailing_slash() {
        let config = ConsoleConfig::with_project("https://acme.supabase.co/", "key-123");
        assert_eq!(config.project_url, "https://acme.supabase.co");
        assert_eq!(config.anon_key, "key-123");
    }

    #[test]
    fn endpoint_groups_extend_the_project_url() {
        let config = ConsoleConfig::with_project("https://acme.supabase.co", "key-123");
        assert_eq!(config.auth_url(), "https://acme.supabase.co/auth/v1");
        assert_eq!(config.rest_url(), "https://acme.supabase.co/rest/v1");
    }
}
