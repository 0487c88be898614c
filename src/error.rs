use thiserror::Error;

/// Header field of a road description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    /// Road length `T`.
    Length,
    /// Number of cities `N`.
    CityCount,
}

impl std::fmt::Display for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderField::Length => write!(f, "road length"),
            HeaderField::CityCount => write!(f, "city count"),
        }
    }
}

/// A road invariant that the input broke.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Road length {length} outside [{min}, {max}]")]
    LengthOutOfRange { length: i64, min: i64, max: i64 },

    #[error("City count {count} outside [{min}, {max}]")]
    CityCountOutOfRange { count: i64, min: usize, max: usize },

    #[error("City #{index} at position {position} is not strictly inside (0, {length})")]
    PositionOutOfRange {
        index: usize,
        position: i64,
        length: i64,
    },

    #[error("City #{index} repeats position {position} already taken by city #{first}")]
    DuplicatePosition {
        index: usize,
        position: i64,
        first: usize,
    },
}

/// Every way loading or analyzing a road can fail.
///
/// Failures are strict: no operation hands back a partial road, a sentinel
/// width or an empty name in place of one of these.
#[derive(Debug, Error)]
pub enum RoadError {
    #[error("Cannot read road description: {0}")]
    SourceUnavailable(#[from] std::io::Error),

    #[error("Malformed header: expected an integer {field}, found {found:?}")]
    MalformedHeader {
        field: HeaderField,
        found: Option<String>,
    },

    #[error("Malformed record #{index}: expected an integer position, found {found:?}")]
    MalformedRecord { index: usize, found: String },

    #[error("Constraint violated: {0}")]
    ConstraintViolation(#[from] Violation),

    #[error("Truncated input: expected {expected} city records, found {found}")]
    TruncatedRecord { expected: usize, found: usize },
}

impl RoadError {
    /// Returns the violated invariant, if this is a constraint failure.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            RoadError::ConstraintViolation(v) => Some(v),
            _ => None,
        }
    }
}
