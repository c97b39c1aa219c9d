//! Server configuration from environment variables, with `.env` support
//! in development via dotenvy (loaded in `main`).

use std::path::PathBuf;

pub const ENV_BIND_ADDR: &str = "WORTH_BIND_ADDR";
pub const ENV_COUNTRIES_PATH: &str = "WORTH_COUNTRIES_PATH";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_COUNTRIES_PATH: &str = "countries.json";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub countries_path: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let countries_path = std::env::var(ENV_COUNTRIES_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_COUNTRIES_PATH));
        Self {
            bind_addr,
            countries_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_env() {
        // Env vars are process-global; only assert the fallback shape.
        let cfg = ServerConfig::from_env();
        assert!(!cfg.bind_addr.is_empty());
        assert!(cfg.countries_path.as_os_str().len() > 0);
    }
}
