//! The two road queries, answered from a single parse.

use std::path::Path;

use qtty::Meter;

use crate::error::RoadError;
use crate::loader::RoadLoader;
use crate::neighborhood::Neighborhoods;
use crate::road::Road;

/// Narrowest neighborhood of a road and the city that owns it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Width of the narrowest neighborhood, in road units.
    pub width: f64,
    /// Name of the owning city. Ties go to the leftmost city.
    pub city: String,
    /// Position of the owning city.
    pub position: i64,
}

impl Summary {
    pub fn of(road: &Road) -> Self {
        // Positions carry no unit; `Meter` only tags the quantities and the
        // reported width is the raw road-unit value.
        let hoods = Neighborhoods::<Meter>::of(road);
        let smallest = hoods.smallest();
        Self {
            width: smallest.width().value(),
            city: smallest.city().name().to_owned(),
            position: smallest.city().position(),
        }
    }
}

/// Loads and validates the road description stored at `path`.
pub fn parse_road<P: AsRef<Path>>(path: P) -> Result<Road, RoadError> {
    RoadLoader::new().from_path(path)
}

/// Answers both queries for the road at `path` with one read of the file.
pub fn analyze<P: AsRef<Path>>(path: P) -> Result<Summary, RoadError> {
    let road = parse_road(path)?;
    let summary = Summary::of(&road);
    log::debug!(
        "smallest neighborhood: {} ({}) at position {}",
        summary.width,
        summary.city,
        summary.position
    );
    Ok(summary)
}

/// Width of the narrowest neighborhood on the road at `path`.
pub fn smallest_neighborhood_width<P: AsRef<Path>>(path: P) -> Result<f64, RoadError> {
    analyze(path).map(|s| s.width)
}

/// Name of the city owning the narrowest neighborhood on the road at `path`.
pub fn city_with_smallest_neighborhood<P: AsRef<Path>>(path: P) -> Result<String, RoadError> {
    analyze(path).map(|s| s.city)
}
