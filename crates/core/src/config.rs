//! Simulation configuration
//!
//! Defaults are the classic rules: 5 lines per level, a 1000ms drop
//! interval at level 1 that shrinks by 100ms per level, clamped at 100ms.
//!
//! Sources, later ones winning:
//! 1. [`SimConfig::default`]
//! 2. a JSON file named by `BLOCKFALL_CONFIG` (missing keys keep their defaults)
//! 3. `BLOCKFALL_SEED`, `BLOCKFALL_LINES_PER_LEVEL`, `BLOCKFALL_BASE_DROP_MS`,
//!    `BLOCKFALL_DROP_STEP_MS`, `BLOCKFALL_MIN_DROP_MS`

use std::env;

use serde::Deserialize;

use crate::error::{CoreError, Result};
use crate::types::{BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Level `n` advances once `n * lines_per_level` lines were cleared on it
    pub lines_per_level: u32,
    /// Drop interval at level 1
    pub base_drop_ms: u32,
    /// Interval reduction per level
    pub drop_step_ms: u32,
    /// Lower clamp for the interval
    pub min_drop_ms: u32,
    /// Seed for random pieces; `None` lets the caller pick one
    pub seed: Option<u32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            lines_per_level: LINES_PER_LEVEL,
            base_drop_ms: BASE_DROP_MS,
            drop_step_ms: DROP_STEP_MS,
            min_drop_ms: DROP_INTERVAL_MIN_MS,
            seed: None,
        }
    }
}

fn env_u32(key: &str) -> Option<u32> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

impl SimConfig {
    /// Defaults overridden by environment variables. Unparsable values are ignored.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Full lookup: optional `BLOCKFALL_CONFIG` file, then environment overrides.
    pub fn load() -> Result<Self> {
        let base = match env::var("BLOCKFALL_CONFIG") {
            Ok(path) if !path.trim().is_empty() => {
                let path = path.trim();
                let text = std::fs::read_to_string(path)
                    .map_err(|e| CoreError::Config(format!("{path}: {e}")))?;
                Self::from_json_str(&text)?
            }
            _ => Self::default(),
        };

        let config = base.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn with_env_overrides(mut self) -> Self {
        if let Some(v) = env_u32("BLOCKFALL_SEED") {
            self.seed = Some(v);
        }
        if let Some(v) = env_u32("BLOCKFALL_LINES_PER_LEVEL") {
            self.lines_per_level = v;
        }
        if let Some(v) = env_u32("BLOCKFALL_BASE_DROP_MS") {
            self.base_drop_ms = v;
        }
        if let Some(v) = env_u32("BLOCKFALL_DROP_STEP_MS") {
            self.drop_step_ms = v;
        }
        if let Some(v) = env_u32("BLOCKFALL_MIN_DROP_MS") {
            self.min_drop_ms = v;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.lines_per_level == 0 {
            return Err(CoreError::Config("lines_per_level must be at least 1".into()));
        }
        if self.min_drop_ms == 0 {
            return Err(CoreError::Config("min_drop_ms must be at least 1".into()));
        }
        Ok(())
    }

    /// Drop interval for `level` (1-based), never below `min_drop_ms`
    pub fn drop_interval_ms(&self, level: u32) -> u32 {
        let reduction = level.saturating_sub(1).saturating_mul(self.drop_step_ms);
        self.base_drop_ms
            .saturating_sub(reduction)
            .max(self.min_drop_ms)
            .max(1)
    }

    /// Lines required to leave `level`
    pub fn lines_for_level(&self, level: u32) -> u32 {
        level.saturating_mul(self.lines_per_level.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_rules() {
        let config = SimConfig::default();
        assert_eq!(config.lines_per_level, 5);
        assert_eq!(config.drop_interval_ms(1), 1000);
        assert_eq!(config.drop_interval_ms(2), 900);
        assert_eq!(config.drop_interval_ms(10), 100);
        assert_eq!(config.lines_for_level(1), 5);
        assert_eq!(config.lines_for_level(3), 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn drop_interval_is_clamped_at_high_levels() {
        let config = SimConfig::default();
        assert_eq!(config.drop_interval_ms(11), 100);
        assert_eq!(config.drop_interval_ms(50), 100);
        assert_eq!(config.drop_interval_ms(u32::MAX), 100);
    }

    #[test]
    fn drop_interval_never_zero() {
        let config = SimConfig {
            min_drop_ms: 0,
            ..SimConfig::default()
        };
        assert_eq!(config.drop_interval_ms(1000), 1);
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = SimConfig::from_json_str(r#"{ "lines_per_level": 3, "seed": 7 }"#).unwrap();
        assert_eq!(config.lines_per_level, 3);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.base_drop_ms, 1000);
    }

    const ENV_KEYS: [&str; 6] = [
        "BLOCKFALL_CONFIG",
        "BLOCKFALL_SEED",
        "BLOCKFALL_LINES_PER_LEVEL",
        "BLOCKFALL_BASE_DROP_MS",
        "BLOCKFALL_DROP_STEP_MS",
        "BLOCKFALL_MIN_DROP_MS",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            env::remove_var(key);
        }
    }

    // Environment variables are process-wide, so every env-driven case lives in
    // this one test.
    #[test]
    fn load_layers_file_then_env() {
        clear_env();
        assert_eq!(SimConfig::load().unwrap(), SimConfig::default());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blockfall.json");
        std::fs::write(&path, r#"{ "lines_per_level": 3, "base_drop_ms": 800, "seed": 7 }"#)
            .unwrap();
        env::set_var("BLOCKFALL_CONFIG", &path);

        let from_file = SimConfig::load().unwrap();
        assert_eq!(from_file.lines_per_level, 3);
        assert_eq!(from_file.base_drop_ms, 800);
        assert_eq!(from_file.seed, Some(7));

        // Environment beats the file; junk values are ignored.
        env::set_var("BLOCKFALL_LINES_PER_LEVEL", "9");
        env::set_var("BLOCKFALL_SEED", "not-a-number");
        let layered = SimConfig::load().unwrap();
        assert_eq!(layered.lines_per_level, 9);
        assert_eq!(layered.base_drop_ms, 800);
        assert_eq!(layered.seed, Some(7));
        assert_eq!(SimConfig::from_env().lines_per_level, 9);
        assert_eq!(SimConfig::from_env().base_drop_ms, 1000);

        // An override that breaks validation fails the load.
        env::set_var("BLOCKFALL_LINES_PER_LEVEL", "0");
        assert!(matches!(SimConfig::load(), Err(CoreError::Config(_))));

        env::set_var("BLOCKFALL_LINES_PER_LEVEL", "4");
        env::set_var("BLOCKFALL_CONFIG", dir.path().join("missing.json"));
        let err = SimConfig::load().unwrap_err();
        assert!(matches!(&err, CoreError::Config(msg) if msg.contains("missing.json")), "{err:?}");

        clear_env();
    }

    #[test]
    fn json_rejects_invalid_values() {
        assert!(matches!(
            SimConfig::from_json_str(r#"{ "lines_per_level": 0 }"#),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            SimConfig::from_json_str("not json"),
            Err(CoreError::Config(_))
        ));
    }
}
