//! The 8 compass octants used to author walkable edges.
//!
//! Map authors tag each edge with the heading a walker holds while
//! traversing it; the engine compares live compass fixes against
//! [`Direction::degrees`] to detect wrong-way travel.

/// One of the 8 compass octants.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Direction {
    /// Compass heading of this octant's center, in degrees (north = 0°).
    #[inline]
    pub fn degrees(self) -> f64 {
        match self {
            Direction::North     => 0.0,
            Direction::Northeast => 45.0,
            Direction::East      => 90.0,
            Direction::Southeast => 135.0,
            Direction::South     => 180.0,
            Direction::Southwest => 225.0,
            Direction::West      => 270.0,
            Direction::Northwest => 315.0,
        }
    }

    /// Human-readable label, used in spoken guidance ("Head North").
    pub fn label(self) -> &'static str {
        match self {
            Direction::North     => "North",
            Direction::Northeast => "Northeast",
            Direction::East      => "East",
            Direction::Southeast => "Southeast",
            Direction::South     => "South",
            Direction::Southwest => "Southwest",
            Direction::West      => "West",
            Direction::Northwest => "Northwest",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
