//! The room-node graph: an unpositioned tree of room slots rooted at the entrance.

use crate::{error::GraphError, room_type::RoomType};

use fnv::FnvHashMap;
use petgraph::{
    dot::{Config, Dot},
    graph::{DiGraph, NodeIndex},
    visit::Bfs,
};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RoomNode {
    pub id: String,
    pub room_type: RoomType,
    /// `None` only for the entrance.
    pub parent: Option<String>,
    pub children: Vec<String>,
}

impl RoomNode {
    pub fn new(id: impl Into<String>, room_type: RoomType) -> Self {
        RoomNode {
            id: id.into(),
            room_type,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());

        self
    }

    pub fn with_child(mut self, child: impl Into<String>) -> Self {
        self.children.push(child.into());

        self
    }
}

/// Serialized form of a node. Authoring tools store parents as a list, but only trees are
/// supported, so at most one parent is accepted.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RoomNodeSpec {
    pub id: String,
    pub room_type: RoomType,
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(default)]
    pub children: Vec<String>,
}

impl TryFrom<RoomNodeSpec> for RoomNode {
    type Error = GraphError;

    fn try_from(spec: RoomNodeSpec) -> Result<Self, Self::Error> {
        if spec.parents.len() > 1 {
            return Err(GraphError::MultipleParents {
                node: spec.id,
                count: spec.parents.len(),
            });
        }

        Ok(RoomNode {
            id: spec.id,
            room_type: spec.room_type,
            parent: spec.parents.into_iter().next(),
            children: spec.children,
        })
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RoomNodeGraphSpec {
    pub name: String,
    pub nodes: Vec<RoomNodeSpec>,
}

/// A validated room-node tree. Can only be constructed if every node is reachable from a single
/// entrance through consistent parent/child links.
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "RoomNodeGraphSpec")]
pub struct RoomNodeGraph {
    name: String,
    nodes: Vec<RoomNode>,
    by_id: FnvHashMap<String, usize>,
    entrance: usize,
}

impl RoomNodeGraph {
    pub fn new(name: impl Into<String>, nodes: Vec<RoomNode>) -> Result<Self, GraphError> {
        let name = name.into();

        let mut by_id = FnvHashMap::default();
        for (i, n) in nodes.iter().enumerate() {
            if by_id.insert(n.id.clone(), i).is_some() {
                return Err(GraphError::DuplicateNodeId(n.id.clone()));
            }
        }

        let entrances: Vec<usize> = nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.room_type.is_entrance())
            .map(|(i, _)| i)
            .collect();
        let entrance = match entrances.as_slice() {
            [] => return Err(GraphError::NoEntranceNode { graph: name }),
            [e] => *e,
            _ => {
                return Err(GraphError::MultipleEntranceNodes {
                    graph: name,
                    count: entrances.len(),
                })
            }
        };

        for n in nodes.iter() {
            check_links(n, &nodes, &by_id)?;
        }

        let graph = RoomNodeGraph {
            name,
            nodes,
            by_id,
            entrance,
        };
        graph.check_reachable()?;

        Ok(graph)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entrance(&self) -> &RoomNode {
        &self.nodes[self.entrance]
    }

    pub fn get(&self, id: &str) -> Option<&RoomNode> {
        self.by_id.get(id).map(|i| &self.nodes[*i])
    }

    pub fn nodes(&self) -> &[RoomNode] {
        &self.nodes
    }

    /// Children in the order they are listed on `node`.
    pub fn children<'a>(&'a self, node: &'a RoomNode) -> impl Iterator<Item = &'a RoomNode> {
        node.children.iter().filter_map(move |c| self.get(c))
    }

    pub fn count_corridor_children(&self, node: &RoomNode) -> usize {
        self.children(node)
            .filter(|c| c.room_type.is_any_corridor())
            .count()
    }

    /// Authoring rule: rooms with many corridors leading off them rarely fit together.
    pub fn check_child_corridors(&self, max_child_corridors: usize) -> Result<(), GraphError> {
        for n in self.nodes.iter() {
            let count = self.count_corridor_children(n);
            if count > max_child_corridors {
                return Err(GraphError::TooManyChildCorridors {
                    node: n.id.clone(),
                    count,
                    max: max_child_corridors,
                });
            }
        }

        Ok(())
    }

    fn to_petgraph(&self) -> DiGraph<String, ()> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.nodes.len());
        let indices: Vec<NodeIndex> = self
            .nodes
            .iter()
            .map(|n| graph.add_node(format!("{} ({})", n.id, n.room_type)))
            .collect();
        for (i, n) in self.nodes.iter().enumerate() {
            for c in n.children.iter() {
                graph.add_edge(indices[i], indices[self.by_id[c]], ());
            }
        }

        graph
    }

    /// Every node must be reachable from the entrance. With single parents this also rules out
    /// cycles, since a cycle would have no path back to the root.
    fn check_reachable(&self) -> Result<(), GraphError> {
        let graph = self.to_petgraph();
        log::debug!(
            "Room node graph {} = {:?}",
            self.name,
            Dot::with_config(&graph, &[Config::EdgeNoLabel])
        );

        let mut visited = vec![false; self.nodes.len()];
        let mut bfs = Bfs::new(&graph, NodeIndex::new(self.entrance));
        while let Some(n) = bfs.next(&graph) {
            visited[n.index()] = true;
        }

        match visited.iter().position(|v| !v) {
            Some(i) => Err(GraphError::UnreachableNode(self.nodes[i].id.clone())),
            None => Ok(()),
        }
    }
}

impl TryFrom<RoomNodeGraphSpec> for RoomNodeGraph {
    type Error = GraphError;

    fn try_from(spec: RoomNodeGraphSpec) -> Result<Self, Self::Error> {
        let nodes = spec
            .nodes
            .into_iter()
            .map(RoomNode::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        RoomNodeGraph::new(spec.name, nodes)
    }
}

fn check_links(
    node: &RoomNode,
    nodes: &[RoomNode],
    by_id: &FnvHashMap<String, usize>,
) -> Result<(), GraphError> {
    if node.room_type.is_none() {
        return Err(GraphError::UnassignedRoomType(node.id.clone()));
    }

    match (&node.parent, node.room_type.is_entrance()) {
        (Some(_), true) => return Err(GraphError::EntranceHasParent(node.id.clone())),
        (None, false) => return Err(GraphError::MissingParent(node.id.clone())),
        (Some(parent), false) => {
            let p = by_id.get(parent).ok_or_else(|| GraphError::UnknownNode {
                node: node.id.clone(),
                reference: parent.clone(),
            })?;
            if !nodes[*p].children.contains(&node.id) {
                return Err(GraphError::LinkMismatch {
                    parent: parent.clone(),
                    child: node.id.clone(),
                });
            }
        }
        (None, true) => {}
    }

    for (i, c) in node.children.iter().enumerate() {
        if node.children[..i].contains(c) {
            return Err(GraphError::DuplicateChild {
                parent: node.id.clone(),
                child: c.clone(),
            });
        }
        let child = by_id.get(c).ok_or_else(|| GraphError::UnknownNode {
            node: node.id.clone(),
            reference: c.clone(),
        })?;
        if nodes[*child].parent.as_ref() != Some(&node.id) {
            return Err(GraphError::LinkMismatch {
                parent: node.id.clone(),
                child: c.clone(),
            });
        }
    }

    Ok(())
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
