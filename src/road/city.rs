use std::fmt::Display;

/// A named city at an integer position along the road.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    name: String,
    position: i64,
}

impl City {
    pub fn new(name: impl Into<String>, position: i64) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    /// Creates a city whose name is cut to at most `max_chars` characters.
    pub fn truncated(name: &str, position: i64, max_chars: usize) -> Self {
        let name = match name.char_indices().nth(max_chars) {
            Some((cut, _)) => {
                log::warn!(
                    "city name at position {position} exceeds {max_chars} characters, truncating"
                );
                &name[..cut]
            }
            None => name,
        };
        Self::new(name, position)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn position(&self) -> i64 {
        self.position
    }
}

impl Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.name, self.position)
    }
}
