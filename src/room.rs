use crate::{
    doorway::Doorway, extent::Extent, graph::RoomNode, point::Point, room_type::RoomType,
    template::RoomTemplate,
};

use serde::{Deserialize, Serialize};

/// A template instantiated for one room node. Owns copies of everything it may mutate, so trying
/// a template never changes the template or any other room.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Room {
    /// Same as the room node's ID.
    pub id: String,
    pub template_id: String,
    pub room_type: RoomType,
    /// World space. Only meaningful once `is_positioned`.
    pub bounds: Extent,
    pub template_bounds: Extent,
    pub doorways: Vec<Doorway>,
    pub spawn_positions: Vec<Point>,
    pub child_ids: Vec<String>,
    /// `None` for the entrance.
    pub parent_id: Option<String>,
    pub is_positioned: bool,
    pub is_lit: bool,
    pub is_cleared_of_enemies: bool,
    pub is_previously_visited: bool,
}

impl Room {
    pub fn from_template(template: &RoomTemplate, node: &RoomNode) -> Self {
        Room {
            id: node.id.clone(),
            template_id: template.id.clone(),
            room_type: template.room_type.clone(),
            bounds: template.bounds,
            template_bounds: template.bounds,
            doorways: template.doorways.clone(),
            spawn_positions: template.spawn_positions.clone(),
            child_ids: node.children.clone(),
            parent_id: node.parent.clone(),
            is_positioned: false,
            is_lit: false,
            is_cleared_of_enemies: false,
            // The player starts in the entrance.
            is_previously_visited: node.parent.is_none(),
        }
    }

    pub fn doorway_world_position(&self, doorway: &Doorway) -> Point {
        self.bounds.lower + doorway.position - self.template_bounds.lower
    }

    /// Indices of the doorways that are neither connected nor ruled out.
    pub fn available_doorways(&self) -> impl Iterator<Item = usize> + '_ {
        self.doorways
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_available())
            .map(|(i, _)| i)
    }

    pub fn connected_doorways(&self) -> impl Iterator<Item = &Doorway> {
        self.doorways.iter().filter(|d| d.is_connected)
    }
}

/// World bounds that put `doorway` of `room` on the tile just outside `parent_doorway` of
/// `parent`. The two doorways must face each other.
pub fn compute_placement(
    parent: &Room,
    parent_doorway: &Doorway,
    room: &Room,
    doorway: &Doorway,
) -> Extent {
    debug_assert_eq!(doorway.orientation, parent_doorway.orientation.opposite());

    let parent_doorway_position = parent.doorway_world_position(parent_doorway);
    // Step away from the parent, i.e. against the direction this doorway faces.
    let adjustment = -doorway.orientation.outward();
    let lower =
        parent_doorway_position + adjustment + room.template_bounds.lower - doorway.position;

    room.template_bounds.with_lower(lower)
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
