use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const MAX_TARGET: u8 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatedMetric {
    pub key: String,
    pub target: u8,
    pub current: f64,
}

/// Linear fill from `from` to the metric's target.
#[derive(Debug, Clone)]
struct Schedule {
    from: f64,
    delay: Duration,
    elapsed: Duration,
    duration: Duration,
}

impl Schedule {
    /// Consumes `dt`, returns the fraction of the fill completed.
    fn step(&mut self, dt: Duration) -> f64 {
        let mut dt = dt;
        if !self.delay.is_zero() {
            let waited = dt.min(self.delay);
            self.delay -= waited;
            dt -= waited;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
        if self.duration.is_zero() {
            return if self.delay.is_zero() { 1.0 } else { 0.0 };
        }
        self.elapsed.as_secs_f64() / self.duration.as_secs_f64()
    }
}

/// Progress bars keyed by metric. At most one schedule per metric is ever active.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    metrics: BTreeMap<String, AnimatedMetric>,
    schedules: BTreeMap<String, Schedule>,
}

impl Metrics {
    pub fn new(keys: impl IntoIterator<Item = String>) -> Self {
        let metrics = keys
            .into_iter()
            .map(|key| {
                (
                    key.clone(),
                    AnimatedMetric {
                        key,
                        target: 0,
                        current: 0.0,
                    },
                )
            })
            .collect();
        Self {
            metrics,
            schedules: BTreeMap::new(),
        }
    }

    /// Starts filling `key` towards `target`, replacing any schedule already running for it.
    ///
    /// The fill restarts from the current value. A target below the current value snaps the
    /// bar down immediately, since a bar may never sit above its target.
    pub fn start(&mut self, key: &str, target: u8, delay: Duration, duration: Duration) -> bool {
        let Some(metric) = self.metrics.get_mut(key) else {
            log::debug!("ignoring animation for unknown metric {key}");
            return false;
        };
        let target = target.min(MAX_TARGET);
        self.schedules.remove(key);
        metric.target = target;

        let target = f64::from(target);
        if metric.current >= target {
            metric.current = target;
            return true;
        }
        self.schedules.insert(
            key.to_string(),
            Schedule {
                from: metric.current,
                delay,
                elapsed: Duration::ZERO,
                duration,
            },
        );
        true
    }

    /// Advances every running schedule. Returns true if any bar moved.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let mut changed = false;
        let mut finished = Vec::new();
        for (key, schedule) in self.schedules.iter_mut() {
            let Some(metric) = self.metrics.get_mut(key) else {
                finished.push(key.clone());
                continue;
            };
            let fraction = schedule.step(dt);
            let target = f64::from(metric.target);
            let next = if fraction >= 1.0 {
                finished.push(key.clone());
                target
            } else {
                (schedule.from + (target - schedule.from) * fraction)
                    .clamp(metric.current, target)
            };
            if next != metric.current {
                metric.current = next;
                changed = true;
            }
        }
        for key in finished {
            self.schedules.remove(&key);
        }
        changed
    }

    pub fn is_animating(&self) -> bool {
        !self.schedules.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&AnimatedMetric> {
        self.metrics.get(key)
    }

    pub fn current_values(&self) -> BTreeMap<String, f64> {
        self.metrics
            .iter()
            .map(|(key, m)| (key.clone(), m.current))
            .collect()
    }
}
