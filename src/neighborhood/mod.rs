//! Midpoint partition of a road into per-city neighborhoods.
//!
//! Widths are computed in `f64` and carried as [`qtty::Quantity`] values in a
//! caller-chosen length unit. The unit only tags the values; no conversion
//! is applied to road positions.

mod interval;
mod partition;

pub use interval::Interval;
pub use partition::{Neighborhood, Neighborhoods};
