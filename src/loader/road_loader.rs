use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use super::scanner::{Scanner, Token};
use crate::config::RoadLimits;
use crate::error::{HeaderField, RoadError};
use crate::road::{check_city_count, check_length, City, PositionSet, Road};

/// Characters stripped from both ends of a city name.
const NAME_PADDING: [char; 4] = [' ', '\t', '\r', '\n'];

/// Reads road descriptions into validated [`Road`] values.
///
/// The expected format is:
///
/// ```raw
/// T N
/// X1 Name1
/// ...
/// XN NameN
/// ```
///
/// `T`, `N` and every `Xi` are integers separated by any whitespace. Each
/// name is the remainder of its line with surrounding spaces, tabs and line
/// terminators removed; embedded spaces are kept and an empty name is
/// accepted.
///
/// Loading is all-or-nothing: the first violated rule aborts the load and
/// no partially read road is returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadLoader {
    limits: RoadLimits,
}

impl RoadLoader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the validation bounds.
    #[inline]
    pub fn limits(mut self, limits: RoadLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn road_limits(&self) -> &RoadLimits {
        &self.limits
    }

    /// Loads a road from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Road, RoadError> {
        let mut sc = Scanner::new(rdr);

        let length = read_header(&mut sc, HeaderField::Length)?;
        let count = read_header(&mut sc, HeaderField::CityCount)?;

        check_length(length, &self.limits)
            .and_then(|()| check_city_count(count, &self.limits))
            .inspect_err(|v| log::warn!("rejecting road header: {v}"))?;
        // Range-checked above.
        let count = count as usize;

        let mut positions = PositionSet::with_capacity(count);
        let mut cities = Vec::with_capacity(count);

        for index in 0..count {
            let truncated = RoadError::TruncatedRecord {
                expected: count,
                found: index,
            };

            let position = match sc.next_int()? {
                Token::Int(v) => v,
                Token::Eof => return Err(truncated),
                Token::NotInt(found) => {
                    return Err(RoadError::MalformedRecord { index, found });
                }
            };
            let line = sc.rest_of_line().ok_or(truncated)?;

            positions
                .accept(index, position, length)
                .inspect_err(|v| log::warn!("rejecting road record: {v}"))?;

            let name = line.trim_matches(NAME_PADDING);
            cities.push(City::truncated(name, position, self.limits.max_name_chars));
        }

        log::debug!("loaded road of length {length} with {count} cities");
        Ok(Road::from_validated(length, cities))
    }

    /// Loads a road from a file path. The file is closed before returning.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Road, RoadError> {
        let file = File::open(path.as_ref()).inspect_err(|e| {
            log::warn!("cannot open {}: {e}", path.as_ref().display());
        })?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads a road from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Road, RoadError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads a road from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Road, RoadError> {
        self.from_bufread(s.as_bytes())
    }
}

fn read_header<R: BufRead>(sc: &mut Scanner<R>, field: HeaderField) -> Result<i64, RoadError> {
    match sc.next_int()? {
        Token::Int(v) => Ok(v),
        Token::NotInt(found) => Err(RoadError::MalformedHeader {
            field,
            found: Some(found),
        }),
        Token::Eof => Err(RoadError::MalformedHeader { field, found: None }),
    }
}
