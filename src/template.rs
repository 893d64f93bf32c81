use crate::{
    doorway::{Doorway, Orientation},
    extent::Extent,
    graph::RoomNode,
    point::Point,
    room_type::RoomType,
    sampling::choose,
};

use fnv::FnvHashMap;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A reusable room blueprint. Geometry is in the template's own coordinate space.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoomTemplate {
    pub id: String,
    pub room_type: RoomType,
    pub bounds: Extent,
    pub doorways: Vec<Doorway>,
    #[serde(default)]
    pub spawn_positions: Vec<Point>,
}

/// The templates available to one dungeon level, indexed by ID.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(from = "Vec<RoomTemplate>", into = "Vec<RoomTemplate>")]
pub struct TemplateLibrary {
    templates: Vec<RoomTemplate>,
    by_id: FnvHashMap<String, usize>,
}

impl TemplateLibrary {
    pub fn new(templates: Vec<RoomTemplate>) -> Self {
        let mut library = TemplateLibrary::default();
        for t in templates.into_iter() {
            library.insert(t);
        }

        library
    }

    /// Only the first template with a given ID is kept.
    pub fn insert(&mut self, template: RoomTemplate) -> bool {
        if self.by_id.contains_key(&template.id) {
            log::warn!("Duplicate room template ID {}", template.id);
            return false;
        }

        self.by_id.insert(template.id.clone(), self.templates.len());
        self.templates.push(template);

        true
    }

    pub fn get(&self, id: &str) -> Option<&RoomTemplate> {
        self.by_id.get(id).map(|i| &self.templates[*i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoomTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn has_type(&self, room_type: &RoomType) -> bool {
        self.templates.iter().any(|t| t.room_type == *room_type)
    }

    /// Chooses uniformly among the templates of exactly `room_type`.
    pub fn select(&self, room_type: &RoomType, rng: &mut impl Rng) -> Option<&RoomTemplate> {
        let matching: Vec<&RoomTemplate> = self
            .templates
            .iter()
            .filter(|t| t.room_type == *room_type)
            .collect();

        choose(rng, &matching).copied()
    }

    /// Like `select`, but a generic corridor node gets a corridor template running along the
    /// axis of the parent doorway it will attach to.
    pub fn select_for_node(
        &self,
        node: &RoomNode,
        parent_orientation: Orientation,
        rng: &mut impl Rng,
    ) -> Option<&RoomTemplate> {
        self.select(&node.room_type.resolve_for_doorway(parent_orientation), rng)
    }
}

impl From<Vec<RoomTemplate>> for TemplateLibrary {
    fn from(templates: Vec<RoomTemplate>) -> Self {
        TemplateLibrary::new(templates)
    }
}

impl From<TemplateLibrary> for Vec<RoomTemplate> {
    fn from(library: TemplateLibrary) -> Self {
        library.templates
    }
}
