//! Request lifecycle timing.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Timing context for observability.
///
/// Records named marks against the request start; the envelope sink marks
/// the initial flush and each deferred key as it is sent.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<String, Instant>,
}

impl TimingContext {
    /// Create a new timing context.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
        }
    }

    /// Record a timing mark.
    pub fn mark(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Instant::now());
    }

    /// Mark a deferred key as sent.
    pub fn mark_deferred_sent(&mut self, key: &str) {
        self.mark(&format!("deferred_{}_sent", key));
    }

    /// Get elapsed time since request start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time from request start to the initial (critical) chunk flush.
    pub fn time_to_initial(&self) -> Option<Duration> {
        self.marks
            .get("initial_sent")
            .map(|t| t.duration_since(self.start))
    }

    /// Time from request start to a named mark.
    pub fn time_to(&self, name: &str) -> Option<Duration> {
        self.marks.get(name).map(|t| t.duration_since(self.start))
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_are_recorded() {
        let mut timing = TimingContext::new();
        assert!(timing.time_to_initial().is_none());
        timing.mark("initial_sent");
        assert!(timing.time_to_initial().is_some());
    }

    #[test]
    fn test_deferred_mark_key() {
        let mut timing = TimingContext::new();
        timing.mark_deferred_sent("recommendations");
        assert!(timing.time_to("deferred_recommendations_sent").is_some());
    }
}
