use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::backend::SimulatedOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccordionPolicy {
    /// Opening one item collapses every other item.
    #[default]
    SingleSelect,
    Independent,
}

/// Timings and policies for the view-state controller. All durations are in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub accordion: AccordionPolicy,
    pub metric_duration_ms: u64,
    pub metric_start_delay_ms: u64,
    pub typing_interval_ms: u64,
    pub submission_latency_ms: u64,
    pub submission_outcome: SimulatedOutcome,
    pub tick_ms: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            accordion: AccordionPolicy::SingleSelect,
            metric_duration_ms: 1000,
            metric_start_delay_ms: 500,
            typing_interval_ms: 30,
            submission_latency_ms: 1500,
            submission_outcome: SimulatedOutcome::Succeed,
            tick_ms: 16,
        }
    }
}

impl ControllerConfig {
    pub fn metric_duration(&self) -> Duration {
        Duration::from_millis(self.metric_duration_ms)
    }

    pub fn metric_start_delay(&self) -> Duration {
        Duration::from_millis(self.metric_start_delay_ms)
    }

    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms)
    }

    pub fn submission_latency(&self) -> Duration {
        Duration::from_millis(self.submission_latency_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ControllerConfig =
            serde_json::from_str(r#"{ "accordion": "independent", "typing_interval_ms": 5 }"#)
                .expect("config should parse");
        assert_eq!(config.accordion, AccordionPolicy::Independent);
        assert_eq!(config.typing_interval(), Duration::from_millis(5));
        assert_eq!(config.submission_latency(), Duration::from_millis(1500));
        assert_eq!(config.submission_outcome, SimulatedOutcome::Succeed);
    }
}
