//! Runtime configuration for the registry system.

use std::env;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

pub const DEFAULT_BUFFER_SIZE: usize = 32;
pub const BUFFER_SIZE_ENV: &str = "USER_REGISTRY_BUFFER_SIZE";
pub const ID_PREFIX_ENV: &str = "USER_REGISTRY_ID_PREFIX";

/// How new user ids are generated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Random v4 UUIDs.
    #[default]
    Uuid,
    /// `"{prefix}_{n}"` with `n` counting up from 1.
    Sequential { prefix: String },
}

impl IdStrategy {
    /// Builds a fresh id generator. Sequential generators each start their own count.
    pub fn generator(&self) -> Box<dyn Fn() -> String + Send + Sync> {
        match self {
            IdStrategy::Uuid => Box::new(|| uuid::Uuid::new_v4().to_string()),
            IdStrategy::Sequential { prefix } => {
                let prefix = prefix.clone();
                let counter = AtomicU64::new(1);
                Box::new(move || {
                    let id = counter.fetch_add(1, Ordering::SeqCst);
                    format!("{}_{}", prefix, id)
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Capacity of the actor's request channel.
    pub buffer_size: usize,
    pub id_strategy: IdStrategy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            id_strategy: IdStrategy::default(),
        }
    }
}

impl RegistryConfig {
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_id_strategy(mut self, id_strategy: IdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }

    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(BUFFER_SIZE_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.buffer_size = size,
                _ => warn!(value = %raw, "Ignoring invalid {}", BUFFER_SIZE_ENV),
            }
        }

        if let Some(prefix) = lookup(ID_PREFIX_ENV) {
            let prefix = prefix.trim();
            if prefix.is_empty() {
                warn!("Ignoring empty {}", ID_PREFIX_ENV);
            } else {
                config.id_strategy = IdStrategy::Sequential { prefix: prefix.to_string() };
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_sequential_generator_counts_from_one() {
        let next_id = IdStrategy::Sequential { prefix: "user".into() }.generator();
        assert_eq!(next_id(), "user_1");
        assert_eq!(next_id(), "user_2");
    }

    #[test]
    fn test_uuid_generator_is_unique() {
        let next_id = IdStrategy::Uuid.generator();
        let first = next_id();
        assert_ne!(first, next_id());
        assert!(uuid::Uuid::parse_str(&first).is_ok());
    }

    #[test]
    fn test_from_lookup_applies_overrides() {
        let config = RegistryConfig::from_lookup(lookup_from(&[
            (BUFFER_SIZE_ENV, "8"),
            (ID_PREFIX_ENV, "member"),
        ]));
        assert_eq!(config.buffer_size, 8);
        assert_eq!(config.id_strategy, IdStrategy::Sequential { prefix: "member".into() });
    }

    #[test]
    fn test_from_lookup_ignores_invalid_values() {
        let config = RegistryConfig::from_lookup(lookup_from(&[
            (BUFFER_SIZE_ENV, "zero"),
            (ID_PREFIX_ENV, "  "),
        ]));
        assert_eq!(config, RegistryConfig::default());
    }
}
