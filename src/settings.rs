use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub const DEFAULT_SOURCE: &str = "my_app/offre.csv";
pub const DEFAULT_OUTPUT: &str = "my_app/assets/services.json";

/// Paths for a run. Defaults, then `SALON_SOURCE` / `SALON_OUTPUT`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix("SALON"))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("source", DEFAULT_SOURCE)?
            .set_default("output", DEFAULT_OUTPUT)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("SALON").source(Some(map))
    }

    #[test]
    fn defaults_apply() {
        let s = Settings::from_env(env(&[])).unwrap();
        assert_eq!(s.source, PathBuf::from(DEFAULT_SOURCE));
        assert_eq!(s.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn environment_overrides_defaults() {
        let s = Settings::from_env(env(&[("SALON_OUTPUT", "/tmp/services.json")])).unwrap();
        assert_eq!(s.source, PathBuf::from(DEFAULT_SOURCE));
        assert_eq!(s.output, PathBuf::from("/tmp/services.json"));
    }
}
