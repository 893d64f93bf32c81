use crate::doorway::Orientation;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The classification shared by room nodes and room templates.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum RoomType {
    /// Unassigned.
    None,
    Entrance,
    /// A corridor whose axis is decided by the doorway it grows from.
    Corridor,
    CorridorNS,
    CorridorEW,
    BossRoom,
    Named(String),
}

impl RoomType {
    pub fn is_entrance(&self) -> bool {
        *self == RoomType::Entrance
    }

    pub fn is_corridor(&self) -> bool {
        *self == RoomType::Corridor
    }

    pub fn is_corridor_ns(&self) -> bool {
        *self == RoomType::CorridorNS
    }

    pub fn is_corridor_ew(&self) -> bool {
        *self == RoomType::CorridorEW
    }

    pub fn is_any_corridor(&self) -> bool {
        self.is_corridor() || self.is_corridor_ns() || self.is_corridor_ew()
    }

    pub fn is_boss_room(&self) -> bool {
        *self == RoomType::BossRoom
    }

    pub fn is_none(&self) -> bool {
        *self == RoomType::None
    }

    /// The type a template must have to attach a room of this type to a doorway facing
    /// `parent_orientation`. Corridors run straight out of the doorway they extend.
    pub fn resolve_for_doorway(&self, parent_orientation: Orientation) -> RoomType {
        if self.is_corridor() {
            if parent_orientation.is_north_south() {
                RoomType::CorridorNS
            } else {
                RoomType::CorridorEW
            }
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomType::Named(name) => write!(f, "{}", name),
            other => write!(f, "{:?}", other),
        }
    }
}
