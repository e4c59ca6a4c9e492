//! Bounds for exhaustive enumeration and batch sampling.
//!
//! Both types are plain configuration values: they have fluent setters
//! and serialize with serde, so an application can keep them in a JSON
//! config file next to its patterns.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default ceiling on traversal stack frames during enumeration.
pub const DEFAULT_MAX_DEPTH: usize = 100_000;

/// Bounds for [`enumerate`](super::enumerate).
///
/// `None` means unbounded. An unbounded length is only safe for automata
/// accepting a finite language; the depth ceiling still applies and turns
/// runaway traversal into [`GenerateError::CapacityExceeded`](super::GenerateError).
///
/// # Example
///
/// ```rust
/// use regen::generate::Limits;
///
/// let limits = Limits::default().max_length(10).max_count(1000);
/// assert_eq!(limits.length_bound(), 10);
/// assert_eq!(limits.count_bound(), 1000);
///
/// let json = r#"{"max_length": 4}"#;
/// let loaded: Limits = serde_json::from_str(json).unwrap();
/// assert_eq!(loaded.length_bound(), 4);
/// assert_eq!(loaded.count_bound(), usize::MAX);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Longest string to produce
    pub max_length: Option<usize>,
    /// Largest result set to produce
    pub max_count: Option<usize>,
    /// Most traversal frames held at once
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_length: None,
            max_count: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Limits {
    /// No length or count bound.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn max_count(mut self, n: usize) -> Self {
        self.max_count = Some(n);
        self
    }

    pub fn max_depth(mut self, n: usize) -> Self {
        self.max_depth = n;
        self
    }

    pub fn length_bound(&self) -> usize {
        self.max_length.unwrap_or(usize::MAX)
    }

    pub fn count_bound(&self) -> usize {
        self.max_count.unwrap_or(usize::MAX)
    }
}

/// Request for [`sample_many`](super::sample_many).
///
/// A `timeout` of `None` or zero disables the deadline. Without a
/// deadline, asking for more unique strings than the language holds never
/// returns; that risk is the caller's.
///
/// # Example
///
/// ```rust
/// use regen::generate::BatchOptions;
/// use std::time::Duration;
///
/// let options = BatchOptions::new(50)
///     .unique(false)
///     .timeout(Duration::from_secs(2));
/// assert_eq!(options.count, 50);
/// assert!(!options.unique);
/// assert!(options.deadline_enabled());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchOptions {
    /// Number of strings wanted
    pub count: usize,
    /// Reject repeats
    pub unique: bool,
    /// Stop sampling once this much time has passed
    pub timeout: Option<Duration>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            count: 1,
            unique: true,
            timeout: None,
        }
    }
}

impl BatchOptions {
    /// Unique batch of `count` strings without a deadline.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn count(mut self, n: usize) -> Self {
        self.count = n;
        self
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// The timeout that actually applies, if any.
    pub fn effective_timeout(&self) -> Option<Duration> {
        self.timeout.filter(|t| !t.is_zero())
    }

    pub fn deadline_enabled(&self) -> bool {
        self.effective_timeout().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_are_unbounded() {
        let limits = Limits::default();
        assert_eq!(limits.length_bound(), usize::MAX);
        assert_eq!(limits.count_bound(), usize::MAX);
        assert_eq!(limits.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(limits, Limits::unbounded());
    }

    #[test]
    fn zero_timeout_disables_deadline() {
        let options = BatchOptions::new(3).timeout(Duration::ZERO);
        assert!(!options.deadline_enabled());
        assert_eq!(options.effective_timeout(), None);

        let options = options.timeout(Duration::from_millis(5));
        assert_eq!(options.effective_timeout(), Some(Duration::from_millis(5)));
        assert!(!options.without_timeout().deadline_enabled());
    }

    #[test]
    fn batch_defaults_to_unique_single_sample() {
        let options = BatchOptions::default();
        assert_eq!(options.count, 1);
        assert!(options.unique);
        assert_eq!(options.timeout, None);
    }

    #[test]
    fn options_load_from_json() {
        let json = r#"{"count": 20, "unique": false, "timeout": {"secs": 1, "nanos": 500000000}}"#;
        let options: BatchOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.count, 20);
        assert!(!options.unique);
        assert_eq!(options.timeout, Some(Duration::from_millis(1500)));

        let json = serde_json::to_string(&Limits::default().max_length(3)).unwrap();
        let limits: Limits = serde_json::from_str(&json).unwrap();
        assert_eq!(limits.max_length, Some(3));
    }
}
