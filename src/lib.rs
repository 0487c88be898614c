//! roadcity - neighborhood analysis for cities along a one-dimensional road.
//!
//! A road of length `T` carries `N` cities at distinct integer positions in
//! `(0, T)`. Each city owns the stretch of road closer to it than to any other
//! city, bounded by the midpoints to its neighbours. The crate loads road
//! descriptions from text, validates them, and reports the narrowest
//! neighborhood and the city that owns it.
//!
//! ```
//! use roadcity::{loader::RoadLoader, Summary};
//!
//! let road = RoadLoader::new()
//!     .from_str("100 3\n10 A\n50 B\n90 C\n")
//!     .unwrap();
//! let summary = Summary::of(&road);
//! assert_eq!(summary.width, 30.0);
//! assert_eq!(summary.city, "A");
//! ```
//!
//! Every failure is reported as a [`RoadError`]; no operation falls back to
//! an empty road, a sentinel width or an empty name.

pub mod analysis;
pub mod config;
pub mod error;
pub mod loader;
pub mod neighborhood;
pub mod road;

pub use analysis::{
    analyze, city_with_smallest_neighborhood, parse_road, smallest_neighborhood_width, Summary,
};
pub use config::RoadLimits;
pub use error::{HeaderField, RoadError, Violation};
pub use road::{City, Road};
