use std::collections::HashMap;

use super::city::City;
use crate::config::RoadLimits;
use crate::error::{RoadError, Violation};

/// A validated road of length `T` with its cities in read order.
///
/// # Invariants
///
/// - `length` lies in the configured length range (default `[3, 1_000_000]`)
/// - the city count lies in the configured range (default `[2, 10_000]`)
/// - every position satisfies `0 < position < length`
/// - positions are pairwise distinct
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RoadRepr")
)]
pub struct Road {
    length: i64,
    cities: Vec<City>,
}

impl Road {
    /// Validates `cities` against the default [`RoadLimits`].
    pub fn new(length: i64, cities: Vec<City>) -> Result<Self, RoadError> {
        Self::with_limits(length, cities, &RoadLimits::default())
    }

    /// Validates `cities` against `limits`.
    pub fn with_limits(
        length: i64,
        cities: Vec<City>,
        limits: &RoadLimits,
    ) -> Result<Self, RoadError> {
        check_length(length, limits)?;
        check_city_count(cities.len() as i64, limits)?;

        let mut seen = PositionSet::with_capacity(cities.len());
        for (index, city) in cities.iter().enumerate() {
            seen.accept(index, city.position(), length)?;
        }

        Ok(Self { length, cities })
    }

    /// Wraps cities that were already checked one by one while reading.
    pub(crate) fn from_validated(length: i64, cities: Vec<City>) -> Self {
        Self { length, cities }
    }

    pub const fn length(&self) -> i64 {
        self.length
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Cities in the order they were read.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Cities ordered by ascending position; read order is left untouched.
    pub fn sorted_cities(&self) -> Vec<&City> {
        let mut sorted: Vec<&City> = self.cities.iter().collect();
        sorted.sort_by_key(|c| c.position());
        sorted
    }

    /// First city, in read order, carrying `name`.
    pub fn city_named(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.name() == name)
    }
}

pub(crate) fn check_length(length: i64, limits: &RoadLimits) -> Result<(), Violation> {
    if limits.length_range().contains(&length) {
        Ok(())
    } else {
        Err(Violation::LengthOutOfRange {
            length,
            min: limits.min_length,
            max: limits.max_length,
        })
    }
}

/// A road always carries at least one city, whatever `limits` says.
pub(crate) fn check_city_count(count: i64, limits: &RoadLimits) -> Result<(), Violation> {
    let min = limits.min_cities.max(1);
    let in_range = usize::try_from(count).is_ok_and(|n| (min..=limits.max_cities).contains(&n));
    if in_range {
        Ok(())
    } else {
        Err(Violation::CityCountOutOfRange {
            count,
            min,
            max: limits.max_cities,
        })
    }
}

/// Positions accepted so far, keyed to the index of the city holding them.
#[derive(Debug, Default)]
pub(crate) struct PositionSet(HashMap<i64, usize>);

impl PositionSet {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity(capacity))
    }

    /// Accepts the position of city `index`, or reports why it cannot sit on the road.
    pub(crate) fn accept(
        &mut self,
        index: usize,
        position: i64,
        length: i64,
    ) -> Result<(), Violation> {
        if position <= 0 || position >= length {
            return Err(Violation::PositionOutOfRange {
                index,
                position,
                length,
            });
        }
        if let Some(&first) = self.0.get(&position) {
            return Err(Violation::DuplicatePosition {
                index,
                position,
                first,
            });
        }
        self.0.insert(position, index);
        Ok(())
    }
}

// =============================================================================
// Road Serde Support
// =============================================================================

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RoadRepr {
    length: i64,
    cities: Vec<City>,
}

#[cfg(feature = "serde")]
impl TryFrom<RoadRepr> for Road {
    type Error = RoadError;

    fn try_from(raw: RoadRepr) -> Result<Self, Self::Error> {
        Road::new(raw.length, raw.cities)
    }
}
