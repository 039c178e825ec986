use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::MAX_DISTANCE;
use super::error::{FilterError, FilterResult};

/// Maximum color distance (exclusive) still treated as background.
///
/// Always within `0..=442`. A threshold of 0 matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Threshold(u32);

impl Threshold {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(MAX_DISTANCE);

    pub fn new(value: i64) -> FilterResult<Self> {
        if (0..=MAX_DISTANCE as i64).contains(&value) {
            Ok(Self(value as u32))
        } else {
            Err(FilterError::ThresholdOutOfRange { value })
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Strict comparison: a distance equal to the threshold is foreground.
    #[inline]
    pub const fn matches(self, distance: u32) -> bool {
        distance < self.0
    }
}

impl TryFrom<i64> for Threshold {
    type Error = FilterError;

    fn try_from(value: i64) -> FilterResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<i32> for Threshold {
    type Error = FilterError;

    fn try_from(value: i32) -> FilterResult<Self> {
        Self::new(value.into())
    }
}

impl TryFrom<u32> for Threshold {
    type Error = FilterError;

    fn try_from(value: u32) -> FilterResult<Self> {
        Self::new(value.into())
    }
}

impl From<Threshold> for u32 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        assert_eq!(Threshold::new(0).unwrap(), Threshold::MIN);
        assert_eq!(Threshold::new(442).unwrap(), Threshold::MAX);
        assert_eq!(Threshold::new(10).unwrap().get(), 10);
    }

    #[test]
    fn rejects_boundary_adjacent_values() {
        assert_eq!(
            Threshold::new(-1),
            Err(FilterError::ThresholdOutOfRange { value: -1 })
        );
        assert_eq!(
            Threshold::new(443),
            Err(FilterError::ThresholdOutOfRange { value: 443 })
        );
    }

    #[test]
    fn rejects_far_values() {
        for value in [i64::MIN, -1000, 1000, u32::MAX as i64, i64::MAX] {
            assert!(Threshold::new(value).is_err(), "value={value}");
        }
        assert!(Threshold::try_from(u32::MAX).is_err());
        assert!(Threshold::try_from(i32::MIN).is_err());
    }

    #[test]
    fn strict_matching() {
        let threshold = Threshold::new(10).unwrap();
        assert!(threshold.matches(9));
        assert!(!threshold.matches(10));
        assert!(!Threshold::MIN.matches(0));
        assert!(Threshold::new(1).unwrap().matches(0));
    }

    #[test]
    fn deserializes_with_range_check() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            threshold: Threshold,
        }

        let ok: Wrapper = toml::from_str("threshold = 42").unwrap();
        assert_eq!(ok.threshold.get(), 42);

        let err = toml::from_str::<Wrapper>("threshold = 443").unwrap_err();
        assert!(err.to_string().contains("443"));
    }
}
