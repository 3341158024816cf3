//! Application configuration value object

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default export tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 200;
/// Default progress step per tick, in percent
pub const DEFAULT_STEP: u8 = 5;
/// Default simulated download delay in milliseconds
pub const DEFAULT_DOWNLOAD_DELAY_MS: u64 = 2000;
/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Timing of the simulated export and download jobs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub tick_ms: Option<u64>,
    pub step: Option<u8>,
    pub download_delay_ms: Option<u64>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
/// Recording settings (format, quality, enhancement flags) are not part of it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub notify: Option<bool>,
    pub log_level: Option<String>,
    pub simulation: Option<SimulationConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            notify: Some(false),
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
            simulation: Some(SimulationConfig {
                tick_ms: Some(DEFAULT_TICK_MS),
                step: Some(DEFAULT_STEP),
                download_delay_ms: Some(DEFAULT_DOWNLOAD_DELAY_MS),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            notify: other.notify.or(self.notify),
            log_level: other.log_level.or(self.log_level),
            simulation: Self::merge_simulation(self.simulation, other.simulation),
        }
    }

    fn merge_simulation(
        base: Option<SimulationConfig>,
        other: Option<SimulationConfig>,
    ) -> Option<SimulationConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(SimulationConfig {
                tick_ms: o.tick_ms.or(b.tick_ms),
                step: o.step.or(b.step),
                download_delay_ms: o.download_delay_ms.or(b.download_delay_ms),
            }),
        }
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }

    /// Get log filter, or "warn" if not set
    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Export tick interval, 200ms if not set or zero
    pub fn tick_or_default(&self) -> Duration {
        let ms = self
            .simulation
            .as_ref()
            .and_then(|s| s.tick_ms)
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TICK_MS);
        Duration::from_millis(ms)
    }

    /// Progress step per tick, 5 if not set or outside 1..=100
    pub fn step_or_default(&self) -> u8 {
        self.simulation
            .as_ref()
            .and_then(|s| s.step)
            .filter(|step| (1..=100).contains(step))
            .unwrap_or(DEFAULT_STEP)
    }

    /// Simulated download delay, 2000ms if not set
    pub fn download_delay_or_default(&self) -> Duration {
        let ms = self
            .simulation
            .as_ref()
            .and_then(|s| s.download_delay_ms)
            .unwrap_or(DEFAULT_DOWNLOAD_DELAY_MS);
        Duration::from_millis(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.notify, Some(false));
        assert_eq!(config.log_level, Some("warn".to_string()));
        let sim = config.simulation.as_ref().unwrap();
        assert_eq!(sim.tick_ms, Some(200));
        assert_eq!(sim.step, Some(5));
        assert_eq!(sim.download_delay_ms, Some(2000));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.notify.is_none());
        assert!(config.log_level.is_none());
        assert!(config.simulation.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            notify: Some(false),
            log_level: Some("warn".to_string()),
            ..Default::default()
        };
        let other = AppConfig {
            notify: Some(true),
            log_level: None,
            ..Default::default()
        };

        let merged = base.merge(other);
        assert_eq!(merged.notify, Some(true));
        assert_eq!(merged.log_level, Some("warn".to_string()));
    }

    #[test]
    fn merge_simulation_fields() {
        let base = AppConfig::defaults();
        let other = AppConfig {
            simulation: Some(SimulationConfig {
                tick_ms: Some(10),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = base.merge(other);
        assert_eq!(merged.tick_or_default(), Duration::from_millis(10));
        assert_eq!(merged.step_or_default(), 5);
        assert_eq!(merged.download_delay_or_default(), Duration::from_millis(2000));
    }

    #[test]
    fn merge_preserves_base_when_other_is_empty() {
        let merged = AppConfig::defaults().merge(AppConfig::empty());
        assert_eq!(merged.log_level_or_default(), "warn");
        assert_eq!(merged.tick_or_default(), Duration::from_millis(200));
    }

    #[test]
    fn accessor_defaults_on_empty() {
        let config = AppConfig::empty();
        assert!(!config.notify_or_default());
        assert_eq!(config.log_level_or_default(), "warn");
        assert_eq!(config.tick_or_default(), Duration::from_millis(200));
        assert_eq!(config.step_or_default(), 5);
        assert_eq!(config.download_delay_or_default(), Duration::from_millis(2000));
    }

    #[test]
    fn out_of_range_values_fall_back() {
        let config = AppConfig {
            simulation: Some(SimulationConfig {
                tick_ms: Some(0),
                step: Some(0),
                download_delay_ms: Some(0),
            }),
            ..Default::default()
        };
        assert_eq!(config.tick_or_default(), Duration::from_millis(200));
        assert_eq!(config.step_or_default(), 5);
        // A zero delay is a valid instant download
        assert_eq!(config.download_delay_or_default(), Duration::ZERO);
    }
}
