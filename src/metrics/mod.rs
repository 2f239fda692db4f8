use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters accumulated across generator calls.
#[derive(Debug, Default, Clone)]
pub struct GenerationMetrics {
    layouts: u64,
    draws: u64,
    rejections: u64,
    conditions: u64,
}

impl GenerationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_layout(&mut self, draws: u64, rejections: u64) {
        self.layouts = self.layouts.saturating_add(1);
        self.draws = self.draws.saturating_add(draws);
        self.rejections = self.rejections.saturating_add(rejections);
    }

    pub fn record_conditions(&mut self, count: usize) {
        self.conditions = self.conditions.saturating_add(count as u64);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            layouts: self.layouts,
            draws: self.draws,
            rejections: self.rejections,
            conditions: self.conditions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub layouts: u64,
    pub draws: u64,
    pub rejections: u64,
    pub conditions: u64,
}

impl MetricSnapshot {
    /// Share of draws rejected as duplicates or excluded cells.
    pub fn rejection_rate(&self) -> f64 {
        if self.draws == 0 {
            0.0
        } else {
            self.rejections as f64 / self.draws as f64
        }
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("layouts".to_string(), json!(self.layouts));
        map.insert("draws".to_string(), json!(self.draws));
        map.insert("rejections".to_string(), json!(self.rejections));
        map.insert("conditions".to_string(), json!(self.conditions));
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "generation_metrics", self.as_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_accumulates_layouts() {
        let mut metrics = GenerationMetrics::new();
        metrics.record_layout(12, 1);
        metrics.record_layout(8, 0);
        metrics.record_conditions(234);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.layouts, 2);
        assert_eq!(snapshot.draws, 20);
        assert_eq!(snapshot.rejections, 1);
        assert_eq!(snapshot.conditions, 234);
        assert!((snapshot.rejection_rate() - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn snapshot_event_carries_counters() {
        let snapshot = GenerationMetrics::new().snapshot();
        let event = snapshot.to_log_event("vizsearch::metrics");
        assert_eq!(event.message, "generation_metrics");
        assert_eq!(event.fields["draws"], 0);
        assert_eq!(snapshot.rejection_rate(), 0.0);
    }
}
