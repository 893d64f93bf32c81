//! Attaches one room node to its already placed parent room.

use crate::{
    doorway::{opposite_doorway, Doorway},
    error::BuildError,
    graph::RoomNode,
    map_types::dungeon::Dungeon,
    room::{compute_placement, Room},
    sampling::choose,
    template::TemplateLibrary,
};

use rand::Rng;

/// The outcome of trying one parent doorway with one candidate room.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Placement {
    /// The candidate fits. Holds the index of the candidate's doorway that faces the parent.
    Placed { doorway: usize },
    /// The candidate would overlap the room with this ID.
    Overlapped { room: String },
    /// The candidate has no doorway facing the parent doorway.
    NoOppositeDoorway,
}

/// Positions `room` against `parent_doorway` and checks it against every placed room. On success
/// `room.bounds` holds the final position; nothing is marked.
pub fn try_place(
    dungeon: &Dungeon,
    parent: &Room,
    parent_doorway: &Doorway,
    room: &mut Room,
) -> Placement {
    let doorway = match opposite_doorway(parent_doorway, &room.doorways) {
        Some(i) => i,
        None => return Placement::NoOppositeDoorway,
    };

    room.bounds = compute_placement(parent, parent_doorway, room, &room.doorways[doorway]);

    match dungeon.find_overlapping_room(room) {
        Some(other) => Placement::Overlapped {
            room: other.id.clone(),
        },
        None => Placement::Placed { doorway },
    }
}

/// Tries the free doorways of the parent room in random order until `node` fits against one of
/// them. Each doorway is tried at most once. Fails once the parent runs out of doorways; the node
/// is never placed anywhere else.
pub fn place_node(
    dungeon: &mut Dungeon,
    templates: &TemplateLibrary,
    node: &RoomNode,
    parent_id: &str,
    rng: &mut impl Rng,
) -> Result<(), BuildError> {
    loop {
        let parent = dungeon
            .get(parent_id)
            .ok_or_else(|| BuildError::MissingParentRoom {
                node: node.id.clone(),
                parent: parent_id.to_string(),
            })?;

        let available: Vec<usize> = parent.available_doorways().collect();
        let parent_doorway_index = match choose(rng, &available) {
            Some(i) => *i,
            None => {
                return Err(BuildError::DoorwayExhausted {
                    room: parent_id.to_string(),
                    node: node.id.clone(),
                })
            }
        };
        let parent_doorway = &parent.doorways[parent_doorway_index];

        let template = templates
            .select_for_node(node, parent_doorway.orientation, rng)
            .ok_or_else(|| {
                BuildError::NoTemplateForType(
                    node.room_type.resolve_for_doorway(parent_doorway.orientation),
                )
            })?;
        let mut room = Room::from_template(template, node);

        match try_place(dungeon, parent, parent_doorway, &mut room) {
            Placement::Placed { doorway } => {
                room.doorways[doorway].mark_connected();
                room.is_positioned = true;
                if let Some(parent) = dungeon.get_mut(parent_id) {
                    parent.doorways[parent_doorway_index].mark_connected();
                }
                log::trace!(
                    "Placed room {} ({}) at {:?}",
                    room.id,
                    room.template_id,
                    room.bounds
                );
                dungeon.insert(room);

                return Ok(());
            }
            outcome => {
                log::trace!(
                    "Doorway {} of room {} rejected for {}: {:?}",
                    parent_doorway_index,
                    parent_id,
                    node.id,
                    outcome
                );
                if let Some(parent) = dungeon.get_mut(parent_id) {
                    parent.doorways[parent_doorway_index].mark_unavailable();
                }
            }
        }
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
