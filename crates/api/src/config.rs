//! Runtime configuration, read from the environment once at startup.

use std::net::SocketAddr;

/// Listen address used when `TALLY_BIND_ADDR` is unset or invalid.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// `TALLY_BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `TALLY_SEED`: start with the bootstrap accounts.
    pub seed: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            seed: true,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Invalid values fall back to the
    /// defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("TALLY_BIND_ADDR") {
            match raw.trim().parse::<SocketAddr>() {
                Ok(addr) => config.bind_addr = addr,
                Err(e) => tracing::warn!(
                    "TALLY_BIND_ADDR={raw:?} is not a socket address ({e}); using {DEFAULT_BIND_ADDR}"
                ),
            }
        }

        if let Some(raw) = lookup("TALLY_SEED") {
            match parse_flag(&raw) {
                Some(seed) => config.seed = seed,
                None => tracing::warn!("TALLY_SEED={raw:?} is not a boolean; seeding accounts"),
            }
        }

        config
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_listen_on_3000_and_seed() {
        let config = ApiConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert!(config.seed);
    }

    #[test]
    fn reads_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("TALLY_BIND_ADDR", "127.0.0.1:8081"),
            ("TALLY_SEED", "false"),
        ]));
        assert_eq!(config.bind_addr.port(), 8081);
        assert!(!config.seed);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("TALLY_BIND_ADDR", "not-an-addr"),
            ("TALLY_SEED", "maybe"),
        ]));
        assert_eq!(config, ApiConfig::default());
    }
}
