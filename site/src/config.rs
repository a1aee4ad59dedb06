use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub addr: IpAddr,
    pub port: u16,
    /// Trunk output: `index.html` plus the wasm bundle.
    pub dist: PathBuf,
    /// Images and other files served under `/assets`.
    pub assets: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            dist: PathBuf::from("dist"),
            assets: PathBuf::from("assets"),
        }
    }
}

impl SiteConfig {
    /// Reads `PORTFOLIO_*` variables; anything unset keeps its default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(addr) = get("PORTFOLIO_ADDR") {
            cfg.addr = addr
                .parse()
                .with_context(|| format!("PORTFOLIO_ADDR is not an IP address: {addr:?}"))?;
        }
        if let Some(port) = get("PORTFOLIO_PORT") {
            cfg.port = port
                .parse()
                .with_context(|| format!("PORTFOLIO_PORT is not a port number: {port:?}"))?;
        }
        if let Some(dist) = get("PORTFOLIO_DIST") {
            cfg.dist = dist.into();
        }
        if let Some(assets) = get("PORTFOLIO_ASSETS") {
            cfg.assets = assets.into();
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, SiteConfig::default());
        assert_eq!(cfg.port, 3000);
    }

    #[test]
    fn overrides_from_env() {
        let cfg = SiteConfig::from_lookup(lookup(&[
            ("PORTFOLIO_ADDR", "0.0.0.0"),
            ("PORTFOLIO_PORT", "8080"),
            ("PORTFOLIO_DIST", "/srv/portfolio"),
        ]))
        .unwrap();
        assert_eq!(cfg.addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.dist, PathBuf::from("/srv/portfolio"));
        assert_eq!(cfg.assets, PathBuf::from("assets"));
    }

    #[test]
    fn rejects_bad_port() {
        let err = SiteConfig::from_lookup(lookup(&[("PORTFOLIO_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORTFOLIO_PORT"));

        assert!(SiteConfig::from_lookup(lookup(&[("PORTFOLIO_PORT", "70000")])).is_err());
    }
}
