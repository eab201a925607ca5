//! Confidence score module

use std::fmt;

/// Heuristic completeness score in [0.0, 1.0]
///
/// A conversion earns one equal share of the score for every completeness
/// signal present in the source report.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Confidence(f64);

impl Confidence {
    /// Lowest possible score
    pub const NONE: Confidence = Confidence(0.0);

    /// Highest possible score
    pub const FULL: Confidence = Confidence(1.0);

    /// Create a score from a raw value
    ///
    /// # Errors
    /// Returns error if the value is not finite or lies outside [0, 1]
    pub fn new(value: f64) -> Result<Self, String> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(format!("Confidence {} out of range [0.0, 1.0]", value));
        }
        Ok(Self(value))
    }

    /// Score for `present` satisfied signals out of `total`
    ///
    /// The ratio is rounded to four decimal places. A `total` of zero yields
    /// [`Confidence::NONE`]; `present` above `total` saturates at
    /// [`Confidence::FULL`].
    ///
    /// ```
    /// use bug2test_domain::Confidence;
    ///
    /// assert_eq!(Confidence::from_signals(2, 4).value(), 0.5);
    /// assert_eq!(Confidence::from_signals(4, 4), Confidence::FULL);
    /// ```
    pub fn from_signals(present: usize, total: usize) -> Self {
        if total == 0 {
            return Self::NONE;
        }
        let ratio = present.min(total) as f64 / total as f64;
        Self((ratio * 10_000.0).round() / 10_000.0)
    }

    /// Get the raw value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Score as a whole percentage
    pub fn percent(&self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: signal-derived scores always stay within [0, 1]
        #[test]
        fn test_from_signals_in_range(present in 0usize..16, total in 0usize..16) {
            let c = Confidence::from_signals(present, total);
            prop_assert!(Confidence::new(c.value()).is_ok());
        }
    }
}
