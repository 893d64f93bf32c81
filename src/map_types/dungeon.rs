use crate::{
    error::{BuildError, GraphError, LevelError, LevelIssue},
    graph::{RoomNodeGraph, RoomNodeGraphSpec},
    placement::place_node,
    room::Room,
    room_type::RoomType,
    sampling::choose,
    template::TemplateLibrary,
    RoomEncoder,
};

use fnv::{FnvHashMap, FnvHashSet};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, convert::TryFrom};

pub const MAX_DUNGEON_BUILD_ATTEMPTS: usize = 10;
pub const MAX_DUNGEON_REBUILD_ATTEMPTS_FOR_ROOM_GRAPH: usize = 1000;
/// More than this and rooms are unlikely to fit together.
pub const MAX_CHILD_CORRIDORS: usize = 3;

/// The rooms placed so far, in the order they were placed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dungeon {
    rooms: Vec<Room>,
    by_id: FnvHashMap<String, usize>,
}

impl Dungeon {
    pub fn new() -> Self {
        Dungeon::default()
    }

    pub fn clear(&mut self) {
        self.rooms.clear();
        self.by_id.clear();
    }

    /// Replaces any room with the same ID.
    pub fn insert(&mut self, room: Room) {
        match self.by_id.get(&room.id) {
            Some(i) => self.rooms[*i] = room,
            None => {
                self.by_id.insert(room.id.clone(), self.rooms.len());
                self.rooms.push(room);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Room> {
        self.by_id.get(id).map(|i| &self.rooms[*i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Room> {
        let rooms = &mut self.rooms;
        self.by_id.get(id).map(move |i| &mut rooms[*i])
    }

    pub fn rooms_with_template<'a>(
        &'a self,
        template_id: &'a str,
    ) -> impl Iterator<Item = &'a Room> + 'a {
        self.rooms.iter().filter(move |r| r.template_id == template_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// The first positioned room, other than `candidate` itself, that `candidate` overlaps.
    pub fn find_overlapping_room(&self, candidate: &Room) -> Option<&Room> {
        self.rooms
            .iter()
            .filter(|r| r.is_positioned && r.id != candidate.id)
            .find(|r| r.bounds.overlaps(&candidate.bounds))
    }

    pub fn encode(&self, encoder: &mut impl RoomEncoder) {
        for r in self.rooms.iter() {
            encoder.encode_room(r);
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct BuildSettings {
    /// How many times a room node graph is chosen.
    pub max_build_attempts: usize,
    /// How many layouts are tried for each chosen graph.
    pub max_rebuild_attempts_for_graph: usize,
    pub max_child_corridors: usize,
}

impl Default for BuildSettings {
    fn default() -> Self {
        BuildSettings {
            max_build_attempts: MAX_DUNGEON_BUILD_ATTEMPTS,
            max_rebuild_attempts_for_graph: MAX_DUNGEON_REBUILD_ATTEMPTS_FOR_ROOM_GRAPH,
            max_child_corridors: MAX_CHILD_CORRIDORS,
        }
    }
}

/// Serialized form of a level, with graphs not yet validated.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DungeonLevelSpec {
    pub name: String,
    pub templates: TemplateLibrary,
    pub graphs: Vec<RoomNodeGraphSpec>,
    #[serde(default)]
    pub settings: BuildSettings,
}

/// Everything needed to build the dungeon for one level.
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "DungeonLevelSpec")]
pub struct DungeonLevel {
    pub name: String,
    pub templates: TemplateLibrary,
    pub graphs: Vec<RoomNodeGraph>,
    pub settings: BuildSettings,
}

impl TryFrom<DungeonLevelSpec> for DungeonLevel {
    type Error = GraphError;

    fn try_from(spec: DungeonLevelSpec) -> Result<Self, Self::Error> {
        let graphs = spec
            .graphs
            .into_iter()
            .map(RoomNodeGraph::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DungeonLevel {
            name: spec.name,
            templates: spec.templates,
            graphs,
            settings: spec.settings,
        })
    }
}

impl DungeonLevel {
    /// Parse errors and invalid graphs are reported separately.
    pub fn from_ron(s: &str) -> Result<Self, LevelError> {
        let spec: DungeonLevelSpec = ron::de::from_str(s)?;

        Ok(DungeonLevel::try_from(spec)?)
    }

    /// Looks for content problems that would make builds fail. Every issue is also logged.
    pub fn validate(&self) -> Vec<LevelIssue> {
        let mut issues = Vec::new();

        for t in [RoomType::Entrance, RoomType::CorridorNS, RoomType::CorridorEW].iter() {
            if !self.templates.has_type(t) {
                issues.push(LevelIssue::MissingTemplateType(t.clone()));
            }
        }

        for g in self.graphs.iter() {
            let mut reported = FnvHashSet::default();
            for n in g.nodes().iter() {
                let t = &n.room_type;
                // Entrance and corridor templates are checked above.
                if t.is_entrance() || t.is_any_corridor() || t.is_none() {
                    continue;
                }
                if !self.templates.has_type(t) && reported.insert(t.clone()) {
                    issues.push(LevelIssue::MissingTemplateForGraph {
                        graph: g.name().to_string(),
                        room_type: t.clone(),
                    });
                }
            }

            if let Err(error) = g.check_child_corridors(self.settings.max_child_corridors) {
                issues.push(LevelIssue::Graph {
                    graph: g.name().to_string(),
                    error,
                });
            }
        }

        for i in issues.iter() {
            log::warn!("In level {}: {}", self.name, i);
        }

        issues
    }

    /// Makes one attempt at laying out every node of `graph`, starting over from an empty
    /// `dungeon`. Nodes are placed breadth-first from the entrance, so a node's parent room always
    /// exists when the node is placed. The first node that can't be placed ends the attempt.
    pub fn try_build_for_graph(
        &self,
        graph: &RoomNodeGraph,
        dungeon: &mut Dungeon,
        rng: &mut impl Rng,
    ) -> Result<(), BuildError> {
        dungeon.clear();

        let mut open = VecDeque::new();
        open.push_back(graph.entrance());

        while let Some(node) = open.pop_front() {
            open.extend(graph.children(node));

            match node.parent.as_deref() {
                None => {
                    let template = self
                        .templates
                        .select(&node.room_type, rng)
                        .ok_or_else(|| BuildError::NoTemplateForType(node.room_type.clone()))?;
                    // The entrance stays where its template is.
                    let mut room = Room::from_template(template, node);
                    room.is_positioned = true;
                    dungeon.insert(room);
                }
                Some(parent_id) => {
                    place_node(dungeon, &self.templates, node, parent_id, rng)?;
                }
            }
        }

        Ok(())
    }

    /// Picks a random graph and tries to lay it out, starting over from scratch until a layout
    /// fits or the attempts for that graph run out. Then picks another graph, until the graph
    /// selections run out too.
    pub fn build(&self, rng: &mut impl Rng) -> Result<Dungeon, BuildError> {
        log::debug!("Building dungeon for level {}", self.name);

        let mut dungeon = Dungeon::new();
        for build_attempt in 1..=self.settings.max_build_attempts {
            let graph = choose(rng, &self.graphs).ok_or(BuildError::NoRoomNodeGraphs)?;
            log::debug!(
                "Build attempt {}: chose room node graph {}",
                build_attempt,
                graph.name()
            );

            for rebuild_attempt in 1..=self.settings.max_rebuild_attempts_for_graph {
                match self.try_build_for_graph(graph, &mut dungeon, rng) {
                    Ok(()) => {
                        log::info!(
                            "Built dungeon with {} rooms from graph {} after {} build attempts and {} rebuild attempts",
                            dungeon.len(),
                            graph.name(),
                            build_attempt,
                            rebuild_attempt
                        );
                        return Ok(dungeon);
                    }
                    Err(e) => log::trace!("Rebuild attempt {} failed: {}", rebuild_attempt, e),
                }
            }
            log::debug!(
                "Gave up on graph {} after {} attempts",
                graph.name(),
                self.settings.max_rebuild_attempts_for_graph
            );
        }

        Err(BuildError::BuildBudgetExhausted {
            build_attempts: self.settings.max_build_attempts,
            rebuild_attempts: self.settings.max_rebuild_attempts_for_graph,
        })
    }

    /// On success, returns the dungeon and hands each of its rooms to `encoder`. Leaves the
    /// encoder untouched on failure.
    pub fn generate(
        &self,
        rng: &mut impl Rng,
        encoder: &mut impl RoomEncoder,
    ) -> Result<Dungeon, BuildError> {
        let dungeon = self.build(rng)?;
        dungeon.encode(encoder);

        Ok(dungeon)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        doorway::{Doorway, Orientation},
        extent::Extent,
        graph::RoomNode,
        point::Point,
        sampling::small_rng,
        template::RoomTemplate,
    };

    fn template(
        id: &str,
        room_type: RoomType,
        upper: [i32; 2],
        doorways: &[([i32; 2], Orientation)],
    ) -> RoomTemplate {
        RoomTemplate {
            id: id.to_string(),
            room_type,
            bounds: Extent::new([0, 0].into(), upper.into()),
            doorways: doorways
                .iter()
                .map(|(p, o)| Doorway::new((*p).into(), *o))
                .collect(),
            spawn_positions: Vec::new(),
        }
    }

    fn small() -> RoomType {
        RoomType::Named("Small".to_string())
    }

    /// Every room type has doorways on all sides (corridors on both ends), so any tree whose
    /// nodes have at most one child per free doorway fits on the first try.
    fn cross_templates() -> Vec<RoomTemplate> {
        use Orientation::*;

        vec![
            template(
                "entrance",
                RoomType::Entrance,
                [10, 10],
                &[([5, 10], North), ([10, 5], East), ([5, 0], South), ([0, 5], West)],
            ),
            template("ns", RoomType::CorridorNS, [2, 5], &[([1, 5], North), ([1, 0], South)]),
            template("ew", RoomType::CorridorEW, [5, 2], &[([0, 1], West), ([5, 1], East)]),
            template(
                "small_a",
                small(),
                [6, 6],
                &[([3, 6], North), ([6, 3], East), ([3, 0], South), ([0, 3], West)],
            ),
            template(
                "small_b",
                small(),
                [6, 6],
                &[([3, 6], North), ([6, 3], East), ([3, 0], South), ([0, 3], West)],
            ),
            template(
                "boss",
                RoomType::BossRoom,
                [8, 8],
                &[([4, 8], North), ([8, 4], East), ([4, 0], South), ([0, 4], West)],
            ),
        ]
    }

    fn three_branch_graph(name: &str) -> RoomNodeGraph {
        RoomNodeGraph::new(
            name,
            vec![
                RoomNode::new("entrance", RoomType::Entrance)
                    .with_child("c1")
                    .with_child("c2")
                    .with_child("c3"),
                RoomNode::new("c1", RoomType::Corridor)
                    .with_parent("entrance")
                    .with_child("boss"),
                RoomNode::new("c2", RoomType::Corridor)
                    .with_parent("entrance")
                    .with_child("r2"),
                RoomNode::new("c3", RoomType::Corridor)
                    .with_parent("entrance")
                    .with_child("r3"),
                RoomNode::new("boss", RoomType::BossRoom).with_parent("c1"),
                RoomNode::new("r2", small()).with_parent("c2"),
                RoomNode::new("r3", small()).with_parent("c3"),
            ],
        )
        .unwrap()
    }

    fn level(templates: Vec<RoomTemplate>, graphs: Vec<RoomNodeGraph>) -> DungeonLevel {
        DungeonLevel {
            name: "test".to_string(),
            templates: TemplateLibrary::new(templates),
            graphs,
            settings: BuildSettings::default(),
        }
    }

    fn assert_layout_invariants(dungeon: &Dungeon) {
        let rooms: Vec<&Room> = dungeon.iter().collect();
        for (i, a) in rooms.iter().enumerate() {
            assert!(a.is_positioned);
            for b in rooms[i + 1..].iter() {
                assert!(
                    !a.bounds.overlaps(&b.bounds),
                    "{} overlaps {}",
                    a.id,
                    b.id
                );
            }
        }

        for room in rooms.iter() {
            let parent = match room.parent_id.as_deref() {
                Some(p) => dungeon.get(p).unwrap(),
                None => {
                    assert!(room.room_type.is_entrance());
                    continue;
                }
            };

            let mut links = 0;
            for d in room.connected_doorways() {
                for pd in parent.connected_doorways() {
                    let adjacent = room.doorway_world_position(d)
                        == parent.doorway_world_position(pd) + pd.orientation.outward();
                    if adjacent {
                        assert_eq!(d.orientation, pd.orientation.opposite());
                        links += 1;
                    }
                }
            }
            assert_eq!(links, 1, "room {} is not linked to {}", room.id, parent.id);
        }
    }

    #[test]
    fn test_entrance_corridor_boss_scenario() {
        use Orientation::*;

        let templates = vec![
            template("entrance", RoomType::Entrance, [9, 9], &[([9, 5], East)]),
            template("ew", RoomType::CorridorEW, [5, 2], &[([0, 1], West), ([5, 1], East)]),
            template("boss", RoomType::BossRoom, [11, 11], &[([0, 6], West)]),
        ];
        let graph = RoomNodeGraph::new(
            "line",
            vec![
                RoomNode::new("e", RoomType::Entrance).with_child("c"),
                RoomNode::new("c", RoomType::CorridorEW)
                    .with_parent("e")
                    .with_child("b"),
                RoomNode::new("b", RoomType::BossRoom).with_parent("c"),
            ],
        )
        .unwrap();
        let level = level(templates, vec![graph]);

        let dungeon = level.build(&mut small_rng([1, 2, 3, 4])).unwrap();

        assert_eq!(dungeon.len(), 3);
        assert_eq!(
            dungeon.get("e").unwrap().bounds,
            Extent::new([0, 0].into(), [9, 9].into())
        );
        assert_eq!(
            dungeon.get("c").unwrap().bounds,
            Extent::new([10, 4].into(), [15, 6].into())
        );
        assert_eq!(
            dungeon.get("b").unwrap().bounds,
            Extent::new([16, -1].into(), [27, 10].into())
        );
        assert_eq!(dungeon.get("b").unwrap().parent_id.as_deref(), Some("c"));
        assert_eq!(dungeon.get("e").unwrap().child_ids, vec!["c".to_string()]);
        assert_layout_invariants(&dungeon);
    }

    #[test]
    fn test_branching_graph_with_generic_corridors() {
        let level = level(cross_templates(), vec![three_branch_graph("cross")]);

        for seed in 0..10 {
            let dungeon = level.build(&mut small_rng([seed, 7, 7, 7])).unwrap();

            assert_eq!(dungeon.len(), 7);
            assert_layout_invariants(&dungeon);
            for id in ["c1", "c2", "c3"].iter() {
                let c = dungeon.get(id).unwrap();
                assert_eq!(c.connected_doorways().count(), 2);
                for d in c.connected_doorways() {
                    match c.room_type {
                        RoomType::CorridorNS => assert!(d.orientation.is_north_south()),
                        RoomType::CorridorEW => assert!(!d.orientation.is_north_south()),
                        ref other => panic!("corridor resolved to {:?}", other),
                    }
                }
            }
            assert_eq!(dungeon.rooms_with_template("boss").count(), 1);
            assert_eq!(
                dungeon.rooms_with_template("small_a").count()
                    + dungeon.rooms_with_template("small_b").count(),
                2
            );
        }
    }

    #[test]
    fn test_same_seed_same_dungeon() {
        let level = level(
            cross_templates(),
            vec![three_branch_graph("a"), three_branch_graph("b")],
        );

        let first = level.build(&mut small_rng([42, 0, 42, 0])).unwrap();
        let second = level.build(&mut small_rng([42, 0, 42, 0])).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_forced_overlap_fails_within_budget() {
        use Orientation::*;

        let cell = RoomType::Named("Cell".to_string());
        let templates = vec![
            template("entrance", RoomType::Entrance, [0, 0], &[([0, 0], East), ([0, 0], East)]),
            template("cell", cell.clone(), [0, 0], &[([0, 0], West)]),
        ];
        let graph = RoomNodeGraph::new(
            "crowded",
            vec![
                RoomNode::new("e", RoomType::Entrance)
                    .with_child("a")
                    .with_child("b"),
                RoomNode::new("a", cell.clone()).with_parent("e"),
                RoomNode::new("b", cell).with_parent("e"),
            ],
        )
        .unwrap();
        let mut level = level(templates, vec![graph]);
        level.settings.max_build_attempts = 2;
        level.settings.max_rebuild_attempts_for_graph = 5;
        let mut rng = small_rng([3, 3, 3, 3]);

        let mut dungeon = Dungeon::new();
        assert_eq!(
            level.try_build_for_graph(&level.graphs[0], &mut dungeon, &mut rng),
            Err(BuildError::DoorwayExhausted {
                room: "e".to_string(),
                node: "b".to_string(),
            })
        );
        assert_eq!(
            level.build(&mut rng),
            Err(BuildError::BuildBudgetExhausted {
                build_attempts: 2,
                rebuild_attempts: 5,
            })
        );
    }

    #[test]
    fn test_missing_template_fails() {
        let templates: Vec<RoomTemplate> = cross_templates()
            .into_iter()
            .filter(|t| !t.room_type.is_boss_room())
            .collect();
        let mut level = level(templates, vec![three_branch_graph("cross")]);
        level.settings.max_build_attempts = 3;
        level.settings.max_rebuild_attempts_for_graph = 10;
        let mut rng = small_rng([5, 5, 5, 5]);

        let mut dungeon = Dungeon::new();
        assert_eq!(
            level.try_build_for_graph(&level.graphs[0], &mut dungeon, &mut rng),
            Err(BuildError::NoTemplateForType(RoomType::BossRoom))
        );
        assert!(level.templates.select(&RoomType::BossRoom, &mut rng).is_none());
        assert_eq!(
            level.build(&mut rng),
            Err(BuildError::BuildBudgetExhausted {
                build_attempts: 3,
                rebuild_attempts: 10,
            })
        );
        assert_eq!(
            level.validate(),
            vec![LevelIssue::MissingTemplateForGraph {
                graph: "cross".to_string(),
                room_type: RoomType::BossRoom,
            }]
        );
    }

    #[test]
    fn test_no_graphs() {
        let level = level(cross_templates(), vec![]);

        assert_eq!(
            level.build(&mut small_rng([1, 1, 1, 1])),
            Err(BuildError::NoRoomNodeGraphs)
        );
    }

    #[test]
    fn test_clear_is_idempotent() {
        let level = level(cross_templates(), vec![three_branch_graph("cross")]);
        let mut dungeon = level.build(&mut small_rng([8, 8, 8, 8])).unwrap();
        assert!(!dungeon.is_empty());

        dungeon.clear();
        assert!(dungeon.is_empty());
        dungeon.clear();
        assert!(dungeon.is_empty());
        assert!(dungeon.get("entrance").is_none());
        assert_eq!(dungeon.iter().count(), 0);
    }

    #[test]
    fn test_rebuild_starts_from_empty_dungeon() {
        let level = level(cross_templates(), vec![three_branch_graph("cross")]);
        let mut rng = small_rng([2, 4, 6, 8]);
        let mut dungeon = Dungeon::new();

        level
            .try_build_for_graph(&level.graphs[0], &mut dungeon, &mut rng)
            .unwrap();
        level
            .try_build_for_graph(&level.graphs[0], &mut dungeon, &mut rng)
            .unwrap();

        assert_eq!(dungeon.len(), 7);
        assert_layout_invariants(&dungeon);
    }

    #[derive(Default)]
    struct RecordingEncoder {
        ids: Vec<String>,
    }

    impl RoomEncoder for RecordingEncoder {
        fn encode_room(&mut self, room: &Room) {
            self.ids.push(room.id.clone());
        }
    }

    #[test]
    fn test_generate_encodes_only_on_success() {
        let level = level(cross_templates(), vec![three_branch_graph("cross")]);
        let mut encoder = RecordingEncoder::default();

        let dungeon = level
            .generate(&mut small_rng([1, 2, 3, 4]), &mut encoder)
            .unwrap();
        let ids: Vec<String> = dungeon.iter().map(|r| r.id.clone()).collect();
        assert_eq!(encoder.ids, ids);
        // Breadth-first from the entrance.
        assert_eq!(encoder.ids[0], "entrance");
        assert_eq!(&encoder.ids[1..4], &["c1", "c2", "c3"]);

        let mut failing = level;
        failing.graphs.clear();
        let mut encoder = RecordingEncoder::default();
        assert!(failing
            .generate(&mut small_rng([1, 2, 3, 4]), &mut encoder)
            .is_err());
        assert!(encoder.ids.is_empty());
    }

    #[test]
    fn test_validate_reports_missing_corridors_and_busy_nodes() {
        let templates: Vec<RoomTemplate> = cross_templates()
            .into_iter()
            .filter(|t| !t.room_type.is_corridor_ns())
            .collect();
        let mut level = level(templates, vec![three_branch_graph("cross")]);
        level.settings.max_child_corridors = 2;

        assert_eq!(
            level.validate(),
            vec![
                LevelIssue::MissingTemplateType(RoomType::CorridorNS),
                LevelIssue::Graph {
                    graph: "cross".to_string(),
                    error: GraphError::TooManyChildCorridors {
                        node: "entrance".to_string(),
                        count: 3,
                        max: 2,
                    },
                },
            ]
        );
    }

    const LEVEL_RON: &str = r#"(
        name: "Level 1",
        templates: [
            (
                id: "entrance",
                room_type: Entrance,
                bounds: (lower: (x: 0, y: 0), upper: (x: 9, y: 9)),
                doorways: [(position: (x: 9, y: 5), orientation: East)],
                spawn_positions: [(x: 4, y: 4)],
            ),
            (
                id: "ew",
                room_type: CorridorEW,
                bounds: (lower: (x: 0, y: 0), upper: (x: 5, y: 2)),
                doorways: [
                    (position: (x: 0, y: 1), orientation: West),
                    (position: (x: 5, y: 1), orientation: East),
                ],
            ),
            (
                id: "vault",
                room_type: Named("Vault"),
                bounds: (lower: (x: 0, y: 0), upper: (x: 4, y: 4)),
                doorways: [(position: (x: 0, y: 2), orientation: West)],
            ),
        ],
        graphs: [
            (
                name: "line",
                nodes: [
                    (id: "e", room_type: Entrance, children: ["c"]),
                    (id: "c", room_type: Corridor, parents: ["e"], children: ["v"]),
                    (id: "v", room_type: Named("Vault"), parents: ["c"]),
                ],
            ),
        ],
        settings: (max_rebuild_attempts_for_graph: 50),
    )"#;

    #[test]
    fn test_load_level_from_ron() {
        let level = DungeonLevel::from_ron(LEVEL_RON).unwrap();

        assert_eq!(level.name, "Level 1");
        assert_eq!(level.templates.len(), 3);
        assert_eq!(level.settings.max_rebuild_attempts_for_graph, 50);
        assert_eq!(level.settings.max_build_attempts, MAX_DUNGEON_BUILD_ATTEMPTS);
        assert_eq!(
            level.templates.get("entrance").unwrap().spawn_positions,
            vec![Point::new(4, 4)]
        );

        let dungeon = level.build(&mut small_rng([0, 1, 2, 3])).unwrap();
        assert_eq!(dungeon.len(), 3);
        assert_eq!(dungeon.get("c").unwrap().template_id, "ew");
        assert_eq!(
            dungeon.get("v").unwrap().bounds,
            Extent::new([16, 3].into(), [20, 7].into())
        );
        assert_layout_invariants(&dungeon);
    }

    #[test]
    fn test_load_level_rejects_bad_graph() {
        let two_entrances = LEVEL_RON.replace("room_type: Corridor,", "room_type: Entrance,");

        match DungeonLevel::from_ron(&two_entrances) {
            Err(LevelError::Graph(e)) => assert_eq!(
                e,
                GraphError::MultipleEntranceNodes {
                    graph: "line".to_string(),
                    count: 2,
                }
            ),
            other => panic!("expected a graph error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_level_reports_syntax_errors() {
        assert!(matches!(
            DungeonLevel::from_ron("(name: \"Level 1\""),
            Err(LevelError::Parse(_))
        ));
    }
}
