use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding the trunk build output (`index.html`, wasm, css)
    pub site_root: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Absolute paths are kept; relative ones resolve against `base`
    pub fn site_root_in(&self, base: &Path) -> PathBuf {
        let root = Path::new(&self.site_root);
        if root.is_absolute() {
            root.to_path_buf()
        } else {
            base.join(root)
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
site_root = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by the build script)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Site root resolved against the current working directory
pub fn get_site_root(config: &Config) -> anyhow::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(config.server.site_root_in(&cwd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.site_root, "dist");
        assert_eq!(config.server.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_relative_site_root_resolves_against_base() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        let resolved = config.server.site_root_in(Path::new("/srv/hooks"));
        assert_eq!(resolved, PathBuf::from("/srv/hooks/dist"));
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let broken = "[server]\nhost = \"not-an-ip\"\nport = 8080\nsite_root = \"dist\"\n";
        assert!(parse_config(broken).is_err());
    }
}
