// Double-click classification from raw click timestamps

/// Default maximum gap between the two clicks of a double-click
pub const DOUBLE_CLICK_THRESHOLD_MS: u64 = 300;

/// How a click should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    /// An ordinary click (possibly the first half of a double-click)
    Single,
    /// The second click of a double-click pair
    DoubleSecond,
}

/// Classifies clicks as single or second-of-double by elapsed time
///
/// Only the timestamp of the last *single* click is remembered. After a
/// double-click the memory is cleared, so a third quick click starts a new
/// pair instead of chaining into a triple-click.
#[derive(Debug, Clone)]
pub struct ClickClassifier {
    threshold_ms: i64,
    last_click_ms: Option<i64>,
}

impl ClickClassifier {
    pub fn new(threshold_ms: u64) -> Self {
        Self {
            threshold_ms: i64::try_from(threshold_ms).unwrap_or(i64::MAX),
            last_click_ms: None,
        }
    }

    pub fn threshold_ms(&self) -> u64 {
        self.threshold_ms as u64
    }

    /// Classify a click at `timestamp_ms` and update the stored timing
    ///
    /// Elapsed time is a signed difference: a timestamp earlier than the
    /// stored one is also treated as the second half of a double-click.
    pub fn classify(&mut self, timestamp_ms: i64) -> ClickKind {
        match self.last_click_ms {
            Some(last) if timestamp_ms.saturating_sub(last) < self.threshold_ms => {
                self.last_click_ms = None;
                ClickKind::DoubleSecond
            }
            _ => {
                self.last_click_ms = Some(timestamp_ms);
                ClickKind::Single
            }
        }
    }

    /// Forget the last click
    pub fn reset(&mut self) {
        self.last_click_ms = None;
    }
}

impl Default for ClickClassifier {
    fn default() -> Self {
        Self::new(DOUBLE_CLICK_THRESHOLD_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_click_is_single() {
        let mut clicks = ClickClassifier::default();
        assert_eq!(clicks.classify(0), ClickKind::Single);
    }

    #[test]
    fn test_quick_second_click_is_double() {
        let mut clicks = ClickClassifier::default();
        clicks.classify(1_000);
        assert_eq!(clicks.classify(1_299), ClickKind::DoubleSecond);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut clicks = ClickClassifier::default();
        clicks.classify(1_000);
        assert_eq!(clicks.classify(1_300), ClickKind::Single);
    }

    #[test]
    fn test_no_triple_click_chaining() {
        let mut clicks = ClickClassifier::default();
        assert_eq!(clicks.classify(1_000), ClickKind::Single);
        assert_eq!(clicks.classify(1_100), ClickKind::DoubleSecond);
        assert_eq!(clicks.classify(1_200), ClickKind::Single);
        assert_eq!(clicks.classify(1_250), ClickKind::DoubleSecond);
    }

    #[test]
    fn test_slow_clicks_stay_single() {
        let mut clicks = ClickClassifier::new(100);
        for t in [0, 150, 300, 450] {
            assert_eq!(clicks.classify(t), ClickKind::Single);
        }
        assert_eq!(clicks.threshold_ms(), 100);
    }

    #[test]
    fn test_reset_forgets_last_click() {
        let mut clicks = ClickClassifier::default();
        clicks.classify(1_000);
        clicks.reset();
        assert_eq!(clicks.classify(1_050), ClickKind::Single);
    }

    #[test]
    fn test_backwards_timestamp_counts_as_double() {
        let mut clicks = ClickClassifier::default();
        clicks.classify(5_000);
        assert_eq!(clicks.classify(4_000), ClickKind::DoubleSecond);
    }
}
