use crate::room_type::RoomType;

/// A room-node graph that can't be used for building.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("graph {graph} has no entrance node")]
    NoEntranceNode { graph: String },
    #[error("graph {graph} has {count} entrance nodes")]
    MultipleEntranceNodes { graph: String, count: usize },
    #[error("duplicate room node ID {0}")]
    DuplicateNodeId(String),
    #[error("room node {node} references unknown node {reference}")]
    UnknownNode { node: String, reference: String },
    #[error("room node {node} has {count} parents, only trees are supported")]
    MultipleParents { node: String, count: usize },
    #[error("room node {parent} lists child {child} more than once")]
    DuplicateChild { parent: String, child: String },
    #[error("room nodes {parent} and {child} disagree about their parent/child link")]
    LinkMismatch { parent: String, child: String },
    #[error("entrance node {0} has a parent")]
    EntranceHasParent(String),
    #[error("room node {0} has no parent")]
    MissingParent(String),
    #[error("room node {0} is not reachable from the entrance")]
    UnreachableNode(String),
    #[error("room node {0} has no room type")]
    UnassignedRoomType(String),
    #[error("room node {node} has {count} child corridors, at most {max} allowed")]
    TooManyChildCorridors {
        node: String,
        count: usize,
        max: usize,
    },
}

/// Why a dungeon could not be built. Everything except `BuildBudgetExhausted` and
/// `NoRoomNodeGraphs` only ends the current attempt.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("no room node graphs to choose from")]
    NoRoomNodeGraphs,
    #[error("no room template of type {0}")]
    NoTemplateForType(RoomType),
    #[error("room {room} has no free doorway left for room node {node}")]
    DoorwayExhausted { room: String, node: String },
    #[error("parent room {parent} of room node {node} has not been placed")]
    MissingParentRoom { node: String, parent: String },
    #[error("failed to build dungeon after {build_attempts} graph selections of up to {rebuild_attempts} attempts each")]
    BuildBudgetExhausted {
        build_attempts: usize,
        rebuild_attempts: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("failed to parse dungeon level: {0}")]
    Parse(#[from] ron::Error),
    #[error("dungeon level has an invalid room node graph: {0}")]
    Graph(#[from] GraphError),
}

/// A problem with a level's content that makes some builds impossible. Reported, not fatal.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LevelIssue {
    #[error("no {0} room template")]
    MissingTemplateType(RoomType),
    #[error("graph {graph} needs a {room_type} room template but there is none")]
    MissingTemplateForGraph { graph: String, room_type: RoomType },
    #[error("graph {graph}: {error}")]
    Graph { graph: String, error: GraphError },
}
