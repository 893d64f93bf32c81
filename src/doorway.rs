use crate::point::Point;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    pub fn opposite(self) -> Orientation {
        match self {
            Orientation::North => Orientation::South,
            Orientation::East => Orientation::West,
            Orientation::South => Orientation::North,
            Orientation::West => Orientation::East,
        }
    }

    pub fn is_north_south(self) -> bool {
        matches!(self, Orientation::North | Orientation::South)
    }

    /// Unit step out of a room through a doorway with this orientation. North is +Y.
    pub fn outward(self) -> Point {
        match self {
            Orientation::North => Point::new(0, 1),
            Orientation::East => Point::new(1, 0),
            Orientation::South => Point::new(0, -1),
            Orientation::West => Point::new(-1, 0),
        }
    }
}

/// Tiles a renderer copies over an unused doorway to wall it off. Never read by the layout
/// search.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DoorwayCopyRegion {
    pub start: Point,
    pub width: i32,
    pub height: i32,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Doorway {
    /// Relative to the origin of the template the doorway came from.
    pub position: Point,
    pub orientation: Orientation,
    #[serde(default)]
    pub is_connected: bool,
    /// Set once the doorway has been tried, whether or not it ended up connected.
    #[serde(default)]
    pub is_unavailable: bool,
    #[serde(default)]
    pub copy: DoorwayCopyRegion,
}

impl Doorway {
    pub fn new(position: Point, orientation: Orientation) -> Self {
        Doorway {
            position,
            orientation,
            is_connected: false,
            is_unavailable: false,
            copy: DoorwayCopyRegion::default(),
        }
    }

    pub fn is_available(&self) -> bool {
        !self.is_connected && !self.is_unavailable
    }

    pub fn mark_connected(&mut self) {
        self.is_connected = true;
        self.is_unavailable = true;
    }

    pub fn mark_unavailable(&mut self) {
        self.is_unavailable = true;
    }
}

/// Returns the index of the first doorway in `candidates` facing the opposite way of
/// `parent_doorway`.
pub fn opposite_doorway(parent_doorway: &Doorway, candidates: &[Doorway]) -> Option<usize> {
    let wanted = parent_doorway.orientation.opposite();

    candidates.iter().position(|d| d.orientation == wanted)
}
