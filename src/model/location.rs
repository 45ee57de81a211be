use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

/// A node in the town's navigable graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display coordinates, fixed by the layout template.
    pub x: f64,
    pub y: f64,
    /// Symmetric adjacency: if A lists B, B lists A.
    pub connections: Vec<String>,
}

impl Location {
    pub fn is_connected_to(&self, other_id: &str) -> bool {
        self.connections.iter().any(|c| c == other_id)
    }

    pub fn connect(&mut self, other_id: &str) {
        if other_id != self.id && !self.is_connected_to(other_id) {
            self.connections.push(other_id.to_string());
        }
    }
}

/// Ids of every location reachable from `start_id` by following connections.
///
/// Connections naming unknown ids are ignored. Returns an empty set when
/// `start_id` itself is unknown.
pub fn reachable_from<'a>(locations: &'a [Location], start_id: &str) -> HashSet<&'a str> {
    let mut visited: HashSet<&'a str> = HashSet::new();
    let Some(start) = locations.iter().find(|l| l.id == start_id) else {
        return visited;
    };

    let mut queue = VecDeque::new();
    visited.insert(start.id.as_str());
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for conn in &current.connections {
            let Some(next) = locations.iter().find(|l| &l.id == conn) else {
                continue;
            };
            if visited.insert(next.id.as_str()) {
                queue.push_back(next);
            }
        }
    }
    visited
}

/// Coarse archetype of a location, used to match NPCs to places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum LocationType {
    Church,
    Store,
    Office,
    Homestead,
    Gathering,
    Landmark,
    Outskirts,
}

string_enum!(LocationType {
    Church => "church",
    Store => "store",
    Office => "office",
    Homestead => "homestead",
    Gathering => "gathering",
    Landmark => "landmark",
    Outskirts => "outskirts",
});

impl LocationType {
    fn keywords(self) -> &'static [&'static str] {
        match self {
            LocationType::Church => &["church", "chapel", "meetinghouse", "temple", "sanctuary"],
            LocationType::Store => &["store", "mercantile", "shop", "trading", "smithy", "mill"],
            LocationType::Office => &["office", "steward", "jail", "bank", "courthouse", "marshal"],
            LocationType::Homestead => &["homestead", "farm", "ranch", "cabin", "dugout", "orchard"],
            LocationType::Gathering => &["saloon", "square", "hall", "well", "boarding", "livery"],
            LocationType::Landmark => &["cemetery", "graveyard", "spring", "rock", "bridge", "grove"],
            LocationType::Outskirts => &["outskirts", "trail", "ridge", "creek", "camp", "mine"],
        }
    }

    /// Placeholder tag handed out by NPC generation before real locations exist.
    pub fn placeholder(self) -> String {
        format!("loc-{}", self.as_str())
    }

    /// Parse a `loc-{type}` placeholder back into its type.
    pub fn from_placeholder(tag: &str) -> Option<LocationType> {
        tag.strip_prefix("loc-")?.parse().ok()
    }

    /// Infer a location's archetype from keywords in its name, then its description.
    ///
    /// The name is checked across all types before the description is
    /// consulted, so "Chapel by the Mill" is a church, not a store.
    pub fn infer(name: &str, description: &str) -> Option<LocationType> {
        let name = name.to_lowercase();
        let description = description.to_lowercase();
        [name, description].iter().find_map(|text| {
            LocationType::ALL
                .iter()
                .copied()
                .find(|t| t.keywords().iter().any(|k| text.contains(k)))
        })
    }
}
