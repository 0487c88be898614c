//! Text loader for road descriptions.
//!
//! [`RoadLoader`] accepts a file path, any `Read`, any `BufRead` or a string
//! slice and yields a validated [`crate::road::Road`].

mod road_loader;
mod scanner;

pub use road_loader::RoadLoader;
