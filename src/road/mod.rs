//! Road model: cities at integer positions along a road of length `T`.
//!
//! A [`Road`] can only be obtained through validation, either from
//! [`Road::new`] / [`Road::with_limits`] or from the text loader in
//! [`crate::loader`]. Once built it is never mutated.

mod city;
mod road;

pub use city::City;
pub use road::Road;

pub(crate) use road::{check_city_count, check_length, PositionSet};
