use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MODELS_DIR: &str = "models";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub models_dir: PathBuf,
}

impl Config {
    /// `MOLECULES_ADDR` and `MOLECULES_MODELS_DIR`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let addr = lookup("MOLECULES_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse::<SocketAddr>()
            .map_err(|e| Error::Config(format!("MOLECULES_ADDR {addr:?}: {e}")))?;
        let models_dir = lookup("MOLECULES_MODELS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODELS_DIR));
        Ok(Config { addr, models_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.addr.to_string(), DEFAULT_ADDR);
        assert_eq!(cfg.models_dir, PathBuf::from("models"));
    }

    #[test]
    fn overrides() {
        let cfg = config(&[
            ("MOLECULES_ADDR", "0.0.0.0:8080"),
            ("MOLECULES_MODELS_DIR", "/srv/glb"),
        ])
        .unwrap();
        assert_eq!(cfg.addr.port(), 8080);
        assert_eq!(cfg.models_dir, PathBuf::from("/srv/glb"));
    }

    #[test]
    fn bad_addr_is_config_error() {
        let err = config(&[("MOLECULES_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
