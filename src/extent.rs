use crate::point::Point;

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle of grid cells. Both corners are inclusive.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Extent {
    pub lower: Point,
    pub upper: Point,
}

impl Extent {
    pub fn new(lower: Point, upper: Point) -> Self {
        Extent { lower, upper }
    }

    /// The offset from `lower` to `upper`. A single cell has size (0, 0).
    pub fn size(&self) -> Point {
        self.upper - self.lower
    }

    /// The extent of the same size whose lower corner is `lower`.
    pub fn with_lower(&self, lower: Point) -> Extent {
        Extent::new(lower, lower + self.size())
    }

    /// Rooms that merely share a boundary line still overlap, otherwise their walls would be
    /// drawn on top of each other.
    pub fn overlaps(&self, other: &Extent) -> bool {
        intervals_overlap(self.lower.x, self.upper.x, other.lower.x, other.upper.x)
            && intervals_overlap(self.lower.y, self.upper.y, other.lower.y, other.upper.y)
    }
}

/// True iff the closed intervals `[min1, max1]` and `[min2, max2]` share at least one value.
pub fn intervals_overlap(min1: i32, max1: i32, min2: i32, max2: i32) -> bool {
    min1.max(min2) <= max1.min(max2)
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
