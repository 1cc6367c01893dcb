//! Client configuration resolved from build-time environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment at runtime, so deploy-specific
//! values are baked in with `option_env!` when the bundle is built. Parsing is
//! kept in `from_values` so defaults and rejections stay unit-testable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "https://company-application-platform-backend.onrender.com/api";
pub const DEFAULT_ROUTER_BASE: &str = "/company_application_platform_frontend";

/// What happens to the registration password field after a successful submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordRetention {
    /// Reset the password together with every other field.
    #[default]
    Clear,
    /// Keep the typed password so a follow-up registration can reuse it.
    Retain,
}

impl PasswordRetention {
    /// Whether a successful registration moves on to the company list. With
    /// [`PasswordRetention::Retain`] the user stays on the emptied form, the
    /// only place the kept password is of use.
    pub fn leaves_form_after_submit(self) -> bool {
        match self {
            Self::Clear => true,
            Self::Retain => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("FIRMEN_API_BASE must not be empty")]
    EmptyApiBase,
    #[error("unsupported FIRMEN_PASSWORD_RETENTION: {0}")]
    InvalidRetention(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL including the `/api` prefix, without trailing slash.
    pub api_base: String,
    /// Router basename the app is served under.
    pub router_base: String,
    pub password_retention: PasswordRetention,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            router_base: DEFAULT_ROUTER_BASE.to_owned(),
            password_retention: PasswordRetention::default(),
        }
    }
}

impl ClientConfig {
    /// Build typed config from variables captured at compile time.
    ///
    /// Optional:
    /// - `FIRMEN_API_BASE`: backend base URL (default [`DEFAULT_API_BASE`])
    /// - `FIRMEN_ROUTER_BASE`: router basename (default [`DEFAULT_ROUTER_BASE`])
    /// - `FIRMEN_PASSWORD_RETENTION`: `clear` (default) or `retain`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a provided value is empty or unknown.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("FIRMEN_API_BASE"),
            option_env!("FIRMEN_ROUTER_BASE"),
            option_env!("FIRMEN_PASSWORD_RETENTION"),
        )
    }

    /// Resolve config, falling back to defaults and logging why.
    pub fn load() -> Self {
        Self::from_build_env().unwrap_or_else(|e| {
            log::warn!("invalid client configuration, using defaults: {e}");
            Self::default()
        })
    }

    /// Build config from raw optional values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a provided value is empty or unknown.
    pub fn from_values(
        api_base: Option<&str>,
        router_base: Option<&str>,
        retention: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base = match api_base {
            Some(raw) => {
                let trimmed = raw.trim().trim_end_matches('/');
                if trimmed.is_empty() {
                    return Err(ConfigError::EmptyApiBase);
                }
                trimmed.to_owned()
            }
            None => DEFAULT_API_BASE.to_owned(),
        };
        let router_base = router_base
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_ROUTER_BASE)
            .trim_end_matches('/')
            .to_owned();
        let password_retention = parse_retention(retention)?;

        Ok(Self { api_base, router_base, password_retention })
    }
}

fn parse_retention(raw: Option<&str>) -> Result<PasswordRetention, ConfigError> {
    match raw.map(str::trim).unwrap_or("clear") {
        "" | "clear" => Ok(PasswordRetention::Clear),
        "retain" => Ok(PasswordRetention::Retain),
        other => Err(ConfigError::InvalidRetention(other.to_owned())),
    }
}
