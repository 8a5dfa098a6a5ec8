use crate::config::Config;
use crate::consts::cli_consts::endpoints::{DIRECTORY_URL, DIRECTORY_URL_ENV};
use std::fmt::{Debug, Display, Formatter};

/// Represents the directory deployments the viewer can read from.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The public JSONPlaceholder directory.
    #[default]
    Production,
    /// Any other directory serving the same user schema.
    Custom { directory_url: String },
}

impl Environment {
    /// Returns the directory URL associated with the environment.
    pub fn directory_url(&self) -> String {
        match self {
            Environment::Production => DIRECTORY_URL.to_string(),
            Environment::Custom { directory_url } => directory_url.clone(),
        }
    }

    /// Picks the environment from, in order: the command line, the
    /// `PROFILE_DIRECTORY_URL` variable, the config file.
    pub fn resolve(cli_url: Option<String>, config: Option<&Config>) -> Self {
        let env_url = std::env::var(DIRECTORY_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty());
        Self::resolve_with(cli_url, env_url, config)
    }

    fn resolve_with(
        cli_url: Option<String>,
        env_url: Option<String>,
        config: Option<&Config>,
    ) -> Self {
        cli_url
            .or(env_url)
            .or_else(|| config.and_then(|c| c.directory_url.clone()))
            .map(Environment::from_url)
            .unwrap_or_default()
    }

    fn from_url(url: String) -> Self {
        if url.trim_end_matches('/') == DIRECTORY_URL {
            Environment::Production
        } else {
            Environment::Custom { directory_url: url }
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.directory_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_production() {
        let env = Environment::resolve_with(None, None, None);
        assert_eq!(env, Environment::Production);
        assert_eq!(env.directory_url(), DIRECTORY_URL);
    }

    #[test]
    // The command line beats the environment variable, which beats the config file.
    fn test_resolution_precedence() {
        let config = Config {
            directory_url: Some("http://config.local/users".to_string()),
            request_timeout_secs: None,
        };

        let env = Environment::resolve_with(
            Some("http://cli.local/users".to_string()),
            Some("http://env.local/users".to_string()),
            Some(&config),
        );
        assert_eq!(env.directory_url(), "http://cli.local/users");

        let env = Environment::resolve_with(
            None,
            Some("http://env.local/users".to_string()),
            Some(&config),
        );
        assert_eq!(env.directory_url(), "http://env.local/users");

        let env = Environment::resolve_with(None, None, Some(&config));
        assert_eq!(env.directory_url(), "http://config.local/users");
    }

    #[test]
    fn test_default_url_maps_back_to_production() {
        let env = Environment::resolve_with(Some(format!("{}/", DIRECTORY_URL)), None, None);
        assert_eq!(env, Environment::Production);
    }
}
