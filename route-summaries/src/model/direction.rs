use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display};

/// travel direction of a route. every route/direction combination is a
/// distinct route in the ridership model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Inbound,
    Outbound,
    Northbound,
    Southbound,
    Eastbound,
    Westbound,
    Loop,
    Unknown,
}

impl Direction {
    /// the two-letter code used in both input workbooks.
    pub fn code(&self) -> &'static str {
        match self {
            Direction::Inbound => "IB",
            Direction::Outbound => "OB",
            Direction::Northbound => "NB",
            Direction::Southbound => "SB",
            Direction::Eastbound => "EB",
            Direction::Westbound => "WB",
            Direction::Loop => "LP",
            Direction::Unknown => "UN",
        }
    }

    /// parses a direction code. anything that is not a known code maps to
    /// [`Direction::Unknown`], which callers treat as a validation failure.
    pub fn from_code(code: &str) -> Direction {
        match code {
            "IB" => Direction::Inbound,
            "OB" => Direction::Outbound,
            "NB" => Direction::Northbound,
            "SB" => Direction::Southbound,
            "EB" => Direction::Eastbound,
            "WB" => Direction::Westbound,
            "LP" => Direction::Loop,
            _ => Direction::Unknown,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// report iteration orders routes by (route number, direction); directions
// sort lexicographically by code so the ordering is stable across runs.
impl Ord for Direction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code().cmp(other.code())
    }
}

impl PartialOrd for Direction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_known_codes() {
        for code in ["IB", "OB", "NB", "SB", "EB", "WB", "LP"] {
            let direction = Direction::from_code(code);
            assert_ne!(direction, Direction::Unknown);
            assert_eq!(direction.code(), code);
        }
    }

    #[test]
    fn unparsable_codes_map_to_unknown() {
        assert_eq!(Direction::from_code("NORTH"), Direction::Unknown);
        assert_eq!(Direction::from_code(""), Direction::Unknown);
        assert_eq!(Direction::from_code("nb"), Direction::Unknown);
    }

    #[test]
    fn orders_lexicographically_by_code() {
        let mut directions = vec![
            Direction::Westbound,
            Direction::Inbound,
            Direction::Northbound,
            Direction::Eastbound,
        ];
        directions.sort();
        assert_eq!(
            directions,
            vec![
                Direction::Eastbound,
                Direction::Inbound,
                Direction::Northbound,
                Direction::Westbound,
            ]
        );
    }
}
