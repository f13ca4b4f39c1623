use anyhow::Context;
use serde::Deserialize;

/// Settings for the demo binary. The library itself takes no configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    /// Value of the `Server` header on served responses
    pub server_name: String,
    /// Bytes requested per socket read
    pub read_buffer_size: usize,
    /// Upper bound for one buffered message, headers and body together
    pub max_message_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            server_name: concat!("httpsuite/", env!("CARGO_PKG_VERSION")).to_string(),
            read_buffer_size: 1024,
            max_message_size: 64 * 1024,
        }
    }
}

impl Config {
    /// Reads the YAML file named by `HTTPSUITE_CONFIG` when set, otherwise
    /// starts from defaults. `LISTEN` overrides the listen address either way.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("HTTPSUITE_CONFIG") {
            Ok(path) => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config {path}"))?;
                Self::from_yaml(&content)?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }

        Ok(cfg)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let cfg = serde_yaml::from_str(content).context("invalid YAML config")?;
        Ok(cfg)
    }
}
