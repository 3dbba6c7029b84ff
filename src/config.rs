//! Application-level configuration loading: listening address and port.

use std::{
    env, fs,
    io::ErrorKind,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "LEADERBOARD_CONFIG_PATH";
/// Environment variables checked, in order, for a port override.
const PORT_ENVS: [&str; 2] = ["PORT", "SERVER_PORT"];
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 5500;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration read once at startup.
pub struct AppConfig {
    host: IpAddr,
    port: u16,
}

impl AppConfig {
    /// Load the configuration from disk and environment, falling back to `0.0.0.0:5500`.
    pub fn load() -> Self {
        let config = Self::from_file(&resolve_config_path());
        match port_override() {
            Some(port) => Self { port, ..config },
            None => config,
        }
    }

    /// Socket address the HTTP listener binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    fn from_file(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        addr = %app_config.listen_addr(),
                        "loaded listener settings from config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    host: Option<IpAddr>,
    port: Option<u16>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            host: value.host.unwrap_or(DEFAULT_HOST),
            port: value.port.unwrap_or(DEFAULT_PORT),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

fn port_override() -> Option<u16> {
    PORT_ENVS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find_map(|value| value.trim().parse::<u16>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!(
            "leaderboard-config-{}-{name}.json",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_listen_on_every_interface() {
        assert_eq!(
            AppConfig::default().listen_addr(),
            SocketAddr::from(([0, 0, 0, 0], 5500))
        );
    }

    #[test]
    fn missing_file_uses_defaults() {
        let path = Path::new("/nonexistent/leaderboard/app.json");
        assert_eq!(AppConfig::from_file(path), AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let path = temp_config("partial", r#"{"port": 8081}"#);
        let config = AppConfig::from_file(&path);
        fs::remove_file(&path).ok();

        assert_eq!(
            config.listen_addr(),
            SocketAddr::from(([0, 0, 0, 0], 8081))
        );
    }

    #[test]
    fn full_file_overrides_host_and_port() {
        let path = temp_config("full", r#"{"host": "127.0.0.1", "port": 9000}"#);
        let config = AppConfig::from_file(&path);
        fs::remove_file(&path).ok();

        assert_eq!(
            config.listen_addr(),
            SocketAddr::from(([127, 0, 0, 1], 9000))
        );
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let path = temp_config("broken", "{ port: nope");
        let config = AppConfig::from_file(&path);
        fs::remove_file(&path).ok();

        assert_eq!(config, AppConfig::default());
    }
}
