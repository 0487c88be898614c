use qtty::{Quantity, Unit};

use super::interval::Interval;
use crate::road::{City, Road};

/// The stretch of road closer to one city than to any other.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighborhood<'r, U: Unit> {
    city: &'r City,
    interval: Interval<U>,
}

impl<'r, U: Unit> Neighborhood<'r, U> {
    pub fn city(&self) -> &'r City {
        self.city
    }

    pub fn interval(&self) -> Interval<U> {
        self.interval
    }

    pub fn width(&self) -> Quantity<U> {
        self.interval.width()
    }
}

/// Midpoint partition of a road into one [`Neighborhood`] per city.
///
/// Cities are ordered by position. The leftmost city owns `[0, m₀)`, the
/// rightmost `[mₙ₋₂, T)`, and every other city the stretch between the
/// midpoints to its two neighbours, where `mᵢ = (xᵢ + xᵢ₊₁) / 2`. The widths
/// therefore always add up to the road length.
///
/// # Example
///
/// ```
/// use qtty::Meter;
/// use roadcity::loader::RoadLoader;
/// use roadcity::neighborhood::Neighborhoods;
///
/// let road = RoadLoader::new().from_str("100 3\n10 A\n50 B\n90 C\n").unwrap();
/// let hoods = Neighborhoods::<Meter>::of(&road);
///
/// assert_eq!(hoods.smallest().city().name(), "A");
/// assert_eq!(hoods.smallest().width().value(), 30.0);
/// assert_eq!(hoods.largest().city().name(), "B");
/// ```
#[derive(Debug, Clone)]
pub struct Neighborhoods<'r, U: Unit> {
    length: f64,
    entries: Vec<Neighborhood<'r, U>>,
    smallest: usize,
    largest: usize,
}

impl<'r, U: Unit> Neighborhoods<'r, U> {
    /// Partitions `road` at the midpoints between adjacent cities.
    pub fn of(road: &'r Road) -> Self {
        let sorted = road.sorted_cities();
        let length = road.length() as f64;

        let midpoints: Vec<f64> = sorted
            .windows(2)
            .map(|pair| midpoint(pair[0].position(), pair[1].position()))
            .collect();

        let entries: Vec<Neighborhood<'r, U>> = sorted
            .iter()
            .enumerate()
            .map(|(i, &city)| {
                let left = if i == 0 { 0.0 } else { midpoints[i - 1] };
                let right = midpoints.get(i).copied().unwrap_or(length);
                Neighborhood {
                    city,
                    interval: Interval::from_f64(left, right),
                }
            })
            .collect();

        // Strict comparisons keep the first extreme in position order.
        let mut smallest = 0;
        let mut largest = 0;
        for (i, hood) in entries.iter().enumerate() {
            let width = hood.width().value();
            if width < entries[smallest].width().value() {
                smallest = i;
            }
            if width > entries[largest].width().value() {
                largest = i;
            }
        }

        log::debug!(
            "partitioned road of length {length} into {} neighborhoods",
            entries.len()
        );

        Self {
            length,
            entries,
            smallest,
            largest,
        }
    }

    /// Neighborhoods in ascending position order.
    pub fn iter(&self) -> std::slice::Iter<'_, Neighborhood<'r, U>> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Neighborhood<'r, U>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Narrowest neighborhood; ties go to the leftmost city.
    pub fn smallest(&self) -> &Neighborhood<'r, U> {
        &self.entries[self.smallest]
    }

    /// Widest neighborhood; ties go to the leftmost city.
    pub fn largest(&self) -> &Neighborhood<'r, U> {
        &self.entries[self.largest]
    }

    /// Sum of all widths. Equals the road length up to rounding.
    pub fn total_width(&self) -> Quantity<U> {
        Quantity::new(self.entries.iter().map(|n| n.width().value()).sum())
    }

    /// City owning road point `at`, or `None` outside `[0, T]`.
    ///
    /// A point on a boundary belongs to the city on its right; `T` itself
    /// belongs to the rightmost city.
    pub fn owner_at(&self, at: Quantity<U>) -> Option<&'r City> {
        let x = at.value();
        if !(0.0..=self.length).contains(&x) {
            return None;
        }
        let i = self
            .entries
            .partition_point(|n| n.interval.end().value() <= x);
        let last = self.entries.len().checked_sub(1)?;
        self.entries.get(i.min(last)).map(|n| n.city)
    }
}

impl<'a, 'r, U: Unit> IntoIterator for &'a Neighborhoods<'r, U> {
    type Item = &'a Neighborhood<'r, U>;
    type IntoIter = std::slice::Iter<'a, Neighborhood<'r, U>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn midpoint(a: i64, b: i64) -> f64 {
    (a as f64 + b as f64) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Meter;

    fn road(length: i64, layout: &[(&str, i64)]) -> Road {
        let cities = layout.iter().map(|&(n, p)| City::new(n, p)).collect();
        Road::new(length, cities).unwrap()
    }

    fn widths(hoods: &Neighborhoods<'_, Meter>) -> Vec<f64> {
        hoods.iter().map(|n| n.width().value()).collect()
    }

    #[test]
    fn test_two_cities_split_at_midpoint() {
        let road = road(10, &[("Alpha", 2), ("Beta", 8)]);
        let hoods = Neighborhoods::<Meter>::of(&road);

        assert_eq!(hoods.len(), 2);
        assert_eq!(hoods.as_slice()[0].interval(), Interval::from_f64(0.0, 5.0));
        assert_eq!(hoods.as_slice()[1].interval(), Interval::from_f64(5.0, 10.0));
        assert_eq!(hoods.smallest().city().name(), "Alpha");
        assert_eq!(hoods.smallest().width().value(), 5.0);
    }

    #[test]
    fn test_three_cities() {
        let road = road(100, &[("A", 10), ("B", 50), ("C", 90)]);
        let hoods = Neighborhoods::<Meter>::of(&road);

        assert_eq!(widths(&hoods), [30.0, 40.0, 30.0]);
        assert_eq!(hoods.smallest().city().name(), "A");
        assert_eq!(hoods.largest().city().name(), "B");
    }

    #[test]
    fn test_unsorted_input_is_partitioned_by_position() {
        let road = road(100, &[("C", 90), ("B", 50), ("A", 10)]);
        let hoods = Neighborhoods::<Meter>::of(&road);

        let order: Vec<&str> = hoods.iter().map(|n| n.city().name()).collect();
        assert_eq!(order, ["A", "B", "C"]);
        assert_eq!(hoods.smallest().city().name(), "A");
        assert_eq!(road.cities()[0].name(), "C");
    }

    #[test]
    fn test_half_unit_midpoints() {
        let road = road(10, &[("A", 1), ("B", 2), ("C", 9)]);
        let hoods = Neighborhoods::<Meter>::of(&road);

        assert_eq!(widths(&hoods), [1.5, 4.0, 4.5]);
        assert_eq!(hoods.smallest().city().name(), "A");
    }

    #[test]
    fn test_interior_minimum() {
        let road = road(20, &[("A", 2), ("B", 9), ("C", 10), ("D", 11), ("E", 18)]);
        let hoods = Neighborhoods::<Meter>::of(&road);

        assert_eq!(widths(&hoods), [5.5, 4.0, 1.0, 4.0, 5.5]);
        assert_eq!(hoods.smallest().city().name(), "C");
        assert_eq!(hoods.largest().city().name(), "A");
    }

    #[test]
    fn test_total_width_equals_length() {
        let road = road(37, &[("A", 3), ("B", 4), ("C", 20), ("D", 36)]);
        let hoods = Neighborhoods::<Meter>::of(&road);
        assert!((hoods.total_width().value() - 37.0).abs() < 1e-9);
    }

    #[test]
    fn test_owner_at() {
        let road = road(100, &[("B", 50), ("A", 10), ("C", 90)]);
        let hoods = Neighborhoods::<Meter>::of(&road);
        let owner = |x: f64| hoods.owner_at(Quantity::new(x)).map(City::name);

        assert_eq!(owner(0.0), Some("A"));
        assert_eq!(owner(29.9), Some("A"));
        assert_eq!(owner(30.0), Some("B"));
        assert_eq!(owner(69.0), Some("B"));
        assert_eq!(owner(70.0), Some("C"));
        assert_eq!(owner(100.0), Some("C"));
        assert_eq!(owner(100.5), None);
        assert_eq!(owner(-1.0), None);
        assert_eq!(owner(f64::NAN), None);
    }

    #[test]
    fn test_into_iterator() {
        let road = road(10, &[("A", 2), ("B", 8)]);
        let hoods = Neighborhoods::<Meter>::of(&road);
        let mut count = 0;
        for hood in &hoods {
            assert!(hood.width().value() > 0.0);
            count += 1;
        }
        assert_eq!(count, 2);
        assert!(!hoods.is_empty());
    }
}
