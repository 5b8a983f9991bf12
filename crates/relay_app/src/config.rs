use std::fs;
use std::path::Path;
use std::time::Duration;

use relay_engine::{EngineConfig, FetchSettings};
use relay_logging::{relay_info, relay_warn};
use serde::{Deserialize, Serialize};

/// Default config location, next to where the relay is launched.
pub const CONFIG_FILENAME: &str = ".page_relay.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Full command line of the registered native host.
    pub host_command: Vec<String>,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub user_agent: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            host_command: vec!["page-relay-host".to_string()],
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            redirect_limit: fetch.redirect_limit,
            max_bytes: fetch.max_bytes,
            user_agent: fetch.user_agent,
        }
    }
}

impl RelayConfig {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            fetch: FetchSettings {
                connect_timeout: Duration::from_secs(self.connect_timeout_secs),
                request_timeout: Duration::from_secs(self.request_timeout_secs),
                redirect_limit: self.redirect_limit,
                max_bytes: self.max_bytes,
                user_agent: self.user_agent.clone(),
            },
            host_command: self.host_command.clone(),
        }
    }
}

/// Load the config file, falling back to defaults when it is missing or
/// unreadable. A bad config never stops a click from being handled.
pub fn load(path: &Path) -> RelayConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            relay_info!("No config at {:?}, using defaults", path);
            return RelayConfig::default();
        }
        Err(err) => {
            relay_warn!("Failed to read config from {:?}: {}", path, err);
            return RelayConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            relay_warn!("Failed to parse config from {:?}: {}", path, err);
            RelayConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load(&dir.path().join("absent.ron"));
        assert_eq!(config.host_command, vec!["page-relay-host".to_string()]);
        assert_eq!(config.redirect_limit, 5);
    }

    #[test]
    fn valid_config_overrides_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"(
                host_command: ["python3", "/opt/host/main.py"],
                request_timeout_secs: 5,
            )"#,
        )
        .expect("write config");

        let config = load(&path);
        assert_eq!(
            config.host_command,
            vec!["python3".to_string(), "/opt/host/main.py".to_string()]
        );
        assert_eq!(config.request_timeout_secs, 5);
        // Unspecified fields keep their defaults.
        assert_eq!(config.max_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "not ron at all {").expect("write config");

        let config = load(&path);
        assert_eq!(config.host_command, vec!["page-relay-host".to_string()]);
    }
}
