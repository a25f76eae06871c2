use crate::error::ServerError;

const CUSTOM_HANDLER_PORT_VAR: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";
const ROUTE_PREFIX_VAR: &str = "ROUTE_PREFIX";
const DEFAULT_CUSTOM_HANDLER_PREFIX: &str = "/api";

/// Which runtime hands requests to the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    Lambda,
    /// Azure Functions custom handler bound to the port assigned by the host.
    CustomHandler { port: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: Host,
    /// `None` mounts the routes at the root.
    pub route_prefix: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup(CUSTOM_HANDLER_PORT_VAR) {
            Some(raw) => {
                let port: u16 = raw.trim().parse()?;
                if port == 0 {
                    return Err(ServerError::Configuration(format!(
                        "{CUSTOM_HANDLER_PORT_VAR} must not be 0"
                    )));
                }
                Host::CustomHandler { port }
            }
            None => Host::Lambda,
        };

        let route_prefix = match lookup(ROUTE_PREFIX_VAR) {
            Some(raw) => normalize_prefix(&raw)?,
            None => match host {
                Host::CustomHandler { .. } => Some(DEFAULT_CUSTOM_HANDLER_PREFIX.to_string()),
                Host::Lambda => None,
            },
        };

        Ok(Config { host, route_prefix })
    }
}

fn normalize_prefix(raw: &str) -> Result<Option<String>, ServerError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !trimmed.starts_with('/') {
        return Err(ServerError::Configuration(format!(
            "{ROUTE_PREFIX_VAR} must start with '/', got {raw:?}"
        )));
    }
    if trimmed.contains(['{', '}', '*']) {
        return Err(ServerError::Configuration(format!(
            "{ROUTE_PREFIX_VAR} must be a literal path, got {raw:?}"
        )));
    }
    Ok(Some(trimmed.to_string()))
}
