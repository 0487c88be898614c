//! Half-open stretch of road owned by one city.

use std::fmt::Display;

use qtty::{Quantity, Unit};

/// Half-open range `[start, end)` along the road.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<U: Unit> {
    start: Quantity<U>,
    end: Quantity<U>,
}

impl<U: Unit> Interval<U> {
    /// Creates interval `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub const fn new(start: Quantity<U>, end: Quantity<U>) -> Self {
        assert!(
            start.value() <= end.value(),
            "Interval start must be <= end"
        );
        Self { start, end }
    }

    pub const fn from_f64(start: f64, end: f64) -> Self {
        Self::new(Quantity::<U>::new(start), Quantity::<U>::new(end))
    }

    pub const fn start(&self) -> Quantity<U> {
        self.start
    }

    pub const fn end(&self) -> Quantity<U> {
        self.end
    }

    pub fn width(&self) -> Quantity<U> {
        self.end - self.start
    }

    /// Returns true if `position` ∈ `[start, end)`.
    pub const fn contains(&self, position: Quantity<U>) -> bool {
        self.start.value() <= position.value() && position.value() < self.end.value()
    }
}

impl<U: Unit> Display for Interval<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.1}, {:.1})", self.start.value(), self.end.value())
    }
}

// =============================================================================
// Interval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for Interval<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Interval", 2)?;
        s.serialize_field("start", &self.start.value())?;
        s.serialize_field("end", &self.end.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::Deserialize<'de> for Interval<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            start: f64,
            end: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.start > raw.end {
            return Err(serde::de::Error::custom("interval start must be <= end"));
        }
        Ok(Self::from_f64(raw.start, raw.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Meter;

    #[test]
    fn test_interval_width() {
        let interval = Interval::<Meter>::from_f64(30.0, 70.0);
        assert_eq!(interval.width().value(), 40.0);
        assert_eq!(interval.start().value(), 30.0);
        assert_eq!(interval.end().value(), 70.0);
    }

    #[test]
    fn test_interval_is_half_open() {
        let interval = Interval::<Meter>::from_f64(0.0, 5.0);
        assert!(interval.contains(Quantity::new(0.0)));
        assert!(interval.contains(Quantity::new(4.999)));
        assert!(!interval.contains(Quantity::new(5.0)));
        assert!(!interval.contains(Quantity::new(-0.5)));
    }

    #[test]
    fn test_interval_display() {
        let interval = Interval::<Meter>::from_f64(5.0, 10.0);
        assert_eq!(interval.to_string(), "[5.0, 10.0)");
    }

    #[test]
    #[should_panic(expected = "Interval start must be <= end")]
    fn test_reversed_interval_panics() {
        let _ = Interval::<Meter>::from_f64(2.0, 1.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_interval_serde() {
        let interval = Interval::<Meter>::from_f64(1.5, 4.0);
        let json = serde_json::to_string(&interval).unwrap();
        assert_eq!(json, r#"{"start":1.5,"end":4.0}"#);
        let back: Interval<Meter> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, interval);
        assert!(serde_json::from_str::<Interval<Meter>>(r#"{"start":3.0,"end":1.0}"#).is_err());
    }
}
