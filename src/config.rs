//! Validation bounds applied when a road is built or loaded.

use std::ops::RangeInclusive;

/// Bounds a road description must respect.
///
/// The defaults are the documented limits of the input format; tests and
/// callers with their own formats can tighten or relax them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadLimits {
    /// Smallest accepted road length `T`.
    pub min_length: i64,
    /// Largest accepted road length `T`.
    pub max_length: i64,
    /// Fewest cities a road may hold. Values below one are treated as one.
    pub min_cities: usize,
    /// Most cities a road may hold.
    pub max_cities: usize,
    /// Names longer than this many characters are cut down to it.
    pub max_name_chars: usize,
}

impl RoadLimits {
    pub const DEFAULT_MIN_LENGTH: i64 = 3;
    pub const DEFAULT_MAX_LENGTH: i64 = 1_000_000;
    pub const DEFAULT_MIN_CITIES: usize = 2;
    pub const DEFAULT_MAX_CITIES: usize = 10_000;
    pub const DEFAULT_MAX_NAME_CHARS: usize = 255;

    pub fn length_range(&self) -> RangeInclusive<i64> {
        self.min_length..=self.max_length
    }

    pub fn city_range(&self) -> RangeInclusive<usize> {
        self.min_cities..=self.max_cities
    }
}

impl Default for RoadLimits {
    fn default() -> Self {
        Self {
            min_length: Self::DEFAULT_MIN_LENGTH,
            max_length: Self::DEFAULT_MAX_LENGTH,
            min_cities: Self::DEFAULT_MIN_CITIES,
            max_cities: Self::DEFAULT_MAX_CITIES,
            max_name_chars: Self::DEFAULT_MAX_NAME_CHARS,
        }
    }
}
