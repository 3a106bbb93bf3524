//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;

use anyhow::Context;

pub const BIND_ENV: &str = "MERCHSTOCK_BIND";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (tests pass a closure).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw = lookup(BIND_ENV).unwrap_or_else(|| {
            tracing::debug!("{BIND_ENV} not set; using {DEFAULT_BIND}");
            DEFAULT_BIND.to_string()
        });
        let bind_addr = raw
            .trim()
            .parse()
            .with_context(|| format!("{BIND_ENV} is not a socket address: {raw:?}"))?;
        Ok(Self { bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_port_5000() {
        let cfg = ApiConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:5000".parse().unwrap());
    }

    #[test]
    fn reads_bind_address() {
        let cfg = ApiConfig::from_lookup(|k| (k == BIND_ENV).then(|| "0.0.0.0:8080".to_string()))
            .unwrap();
        assert_eq!(cfg.bind_addr.port(), 8080);
    }

    #[test]
    fn rejects_garbage_bind_address() {
        let err = ApiConfig::from_lookup(|_| Some("not-an-addr".to_string())).unwrap_err();
        assert!(err.to_string().contains(BIND_ENV));
    }
}
