//! Credentials and environment configuration for the Glassix API.
//!
//! `Credentials` are validated once at construction and are immutable
//! afterwards. They can be built directly or loaded from environment
//! variables.

use std::env;
use std::fmt;

use url::Url;
use uuid::Uuid;

use crate::error::GlassixError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// API version segment appended to every base URL.
const API_PATH: &str = "/api/v1.2";

/// Which Glassix deployment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// `*.glassix.com`
    #[default]
    Production,
    /// `*.glassix-dev.com`
    Testing,
}

impl Environment {
    /// Returns the API domain for this environment.
    pub fn domain(self) -> &'static str {
        match self {
            Environment::Production => "glassix.com",
            Environment::Testing => "glassix-dev.com",
        }
    }
}

/// Credentials for authenticating with the Glassix API.
///
/// The API secret is stored but never logged; the `Debug` output redacts it.
#[derive(Clone)]
pub struct Credentials {
    workspace: String,
    user_name: String,
    api_key: Uuid,
    api_secret: String,
    timeout_secs: u64,
    environment: Environment,
}

impl Credentials {
    /// Creates validated credentials.
    ///
    /// # Errors
    ///
    /// Returns `GlassixError::Config` if any string is empty, the API key
    /// is the nil UUID, the timeout is zero, or the workspace name does
    /// not form a valid host name.
    pub fn new(
        workspace: impl Into<String>,
        user_name: impl Into<String>,
        api_key: Uuid,
        api_secret: impl Into<String>,
        timeout_secs: u64,
        environment: Environment,
    ) -> Result<Self, GlassixError> {
        let workspace = workspace.into().trim().to_string();
        let user_name = user_name.into().trim().to_string();
        let api_secret = api_secret.into();

        if workspace.is_empty() {
            return Err(GlassixError::invalid_config("workspace name cannot be empty"));
        }
        if user_name.is_empty() {
            return Err(GlassixError::invalid_config("user name cannot be empty"));
        }
        if api_key.is_nil() {
            return Err(GlassixError::invalid_config("API key cannot be empty"));
        }
        if api_secret.is_empty() {
            return Err(GlassixError::invalid_config("API secret cannot be empty"));
        }
        if timeout_secs == 0 {
            return Err(GlassixError::invalid_config(
                "timeout must be greater than 0",
            ));
        }

        let credentials = Self {
            workspace,
            user_name,
            api_key,
            api_secret,
            timeout_secs,
            environment,
        };
        credentials.validate_base_url()?;

        Ok(credentials)
    }

    /// Loads credentials from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `GLASSIX_WORKSPACE`: workspace name (first label of the API host)
    /// - `GLASSIX_USER_NAME`: user name (email) of the API user
    /// - `GLASSIX_API_KEY`: API key (UUID)
    /// - `GLASSIX_API_SECRET`: API secret
    ///
    /// # Optional Environment Variables
    ///
    /// - `GLASSIX_TIMEOUT_SECS`: request timeout, default 60
    /// - `GLASSIX_TESTING`: `true` to use the testing environment
    ///
    /// # Errors
    ///
    /// Returns `GlassixError::Config` if any required variable is missing
    /// or if values fail validation.
    pub fn from_env() -> Result<Self, GlassixError> {
        let workspace = Self::get_required_env("GLASSIX_WORKSPACE")?;
        let user_name = Self::get_required_env("GLASSIX_USER_NAME")?;
        let api_key = Self::get_required_env("GLASSIX_API_KEY")?;
        let api_secret = Self::get_required_env("GLASSIX_API_SECRET")?;

        let api_key = Uuid::parse_str(api_key.trim()).map_err(|_| {
            GlassixError::invalid_config("GLASSIX_API_KEY must be a UUID")
        })?;
        Self::validate_api_secret(&api_secret)?;

        let timeout_secs = match env::var("GLASSIX_TIMEOUT_SECS") {
            Ok(value) => value.trim().parse::<u64>().map_err(|_| {
                GlassixError::invalid_config("GLASSIX_TIMEOUT_SECS must be a positive integer")
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let environment = match env::var("GLASSIX_TESTING") {
            Ok(value) if Self::parse_flag(&value) => Environment::Testing,
            _ => Environment::Production,
        };

        Self::new(
            workspace,
            user_name,
            api_key,
            api_secret,
            timeout_secs,
            environment,
        )
    }

    /// Workspace name.
    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    /// User name used to request tokens.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// API key.
    pub fn api_key(&self) -> Uuid {
        self.api_key
    }

    /// API secret. Used for token requests and webhook signatures only;
    /// never log this value.
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// Request timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Target environment.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the API base URL, e.g. `https://acme.glassix.com/api/v1.2`.
    pub fn base_url(&self) -> String {
        format!(
            "https://{}.{}{}",
            self.workspace,
            self.environment.domain(),
            API_PATH
        )
    }

    /// Identity under which this user's bearer token is cached.
    pub fn token_key(&self) -> String {
        format!("{}:{}:{}", self.workspace, self.api_key, self.user_name)
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, GlassixError> {
        env::var(name)
            .map_err(|_| GlassixError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(GlassixError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    /// Ensures the workspace yields a parseable URL whose host is exactly
    /// `{workspace}.{domain}`.
    fn validate_base_url(&self) -> Result<(), GlassixError> {
        let url = Url::parse(&self.base_url())
            .map_err(|e| GlassixError::invalid_config(format!("invalid workspace name: {}", e)))?;
        let expected = format!(
            "{}.{}",
            self.workspace.to_lowercase(),
            self.environment.domain()
        );
        if url.host_str() != Some(expected.as_str()) {
            return Err(GlassixError::invalid_config(format!(
                "invalid workspace name: {:?}",
                self.workspace
            )));
        }
        Ok(())
    }

    /// Validates the API secret is not a placeholder value.
    fn validate_api_secret(secret: &str) -> Result<(), GlassixError> {
        let secret_lower = secret.to_lowercase();
        let placeholder_patterns = [
            "your_api_secret",
            "your_secret",
            "placeholder",
            "xxx",
            "changeme",
        ];

        for pattern in placeholder_patterns {
            if secret_lower.contains(pattern) {
                return Err(GlassixError::invalid_config(
                    "GLASSIX_API_SECRET appears to be a placeholder value",
                ));
            }
        }

        Ok(())
    }

    fn parse_flag(value: &str) -> bool {
        matches!(
            value.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("workspace", &self.workspace)
            .field("user_name", &self.user_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("environment", &self.environment)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> Uuid {
        Uuid::parse_str("6f1c1a5e-8c1b-4f4e-9a57-3f1d2e4b5c6d").unwrap()
    }

    fn credentials(environment: Environment) -> Credentials {
        Credentials::new("acme", "bot@acme.com", key(), "s3cr3t", 30, environment).unwrap()
    }

    #[test]
    fn test_base_url_production() {
        let creds = credentials(Environment::Production);
        assert_eq!(creds.base_url(), "https://acme.glassix.com/api/v1.2");
    }

    #[test]
    fn test_base_url_testing() {
        let creds = credentials(Environment::Testing);
        assert_eq!(creds.base_url(), "https://acme.glassix-dev.com/api/v1.2");
    }

    #[test]
    fn test_token_key_combines_identity() {
        let creds = credentials(Environment::Production);
        assert_eq!(
            creds.token_key(),
            "acme:6f1c1a5e-8c1b-4f4e-9a57-3f1d2e4b5c6d:bot@acme.com"
        );
    }

    #[test]
    fn test_rejects_empty_fields() {
        assert!(Credentials::new("", "u", key(), "s", 30, Environment::Production).is_err());
        assert!(Credentials::new("w", " ", key(), "s", 30, Environment::Production).is_err());
        assert!(Credentials::new("w", "u", key(), "", 30, Environment::Production).is_err());
    }

    #[test]
    fn test_rejects_nil_api_key() {
        let err = Credentials::new("w", "u", Uuid::nil(), "s", 30, Environment::Production)
            .unwrap_err();
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = Credentials::new("w", "u", key(), "s", 0, Environment::Production).unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_rejects_workspace_that_changes_host() {
        assert!(Credentials::new("evil.com/x", "u", key(), "s", 30, Environment::Production).is_err());
        assert!(Credentials::new("a b", "u", key(), "s", 30, Environment::Production).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = credentials(Environment::Production);
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("s3cr3t"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_validate_api_secret_rejects_placeholder() {
        assert!(Credentials::validate_api_secret("your_api_secret_here").is_err());
        assert!(Credentials::validate_api_secret("f00ba4").is_ok());
    }

    #[test]
    fn test_parse_flag() {
        assert!(Credentials::parse_flag("true"));
        assert!(Credentials::parse_flag(" 1 "));
        assert!(!Credentials::parse_flag("false"));
        assert!(!Credentials::parse_flag(""));
    }
}
