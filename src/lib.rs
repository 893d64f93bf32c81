pub mod doorway;
pub mod error;
pub mod extent;
pub mod graph;
pub mod map_types;
pub mod placement;
pub mod point;
pub mod room;
pub mod room_type;
pub mod sampling;
pub mod template;

pub use doorway::{Doorway, Orientation};
pub use error::{BuildError, GraphError, LevelError, LevelIssue};
pub use extent::Extent;
pub use graph::{RoomNode, RoomNodeGraph, RoomNodeGraphSpec};
pub use map_types::dungeon::{BuildSettings, Dungeon, DungeonLevel, DungeonLevelSpec};
pub use point::Point;
pub use room::Room;
pub use room_type::RoomType;
pub use template::{RoomTemplate, TemplateLibrary};

/// Implement this to turn the rooms of a finished dungeon into something renderable.
pub trait RoomEncoder {
    fn encode_room(&mut self, room: &Room);
}
