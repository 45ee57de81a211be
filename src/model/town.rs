use serde::{Deserialize, Serialize};

use super::{Location, Npc, SinNode, TopicRule};

/// Physical evidence of a sin, found by searching a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    pub id: String,
    pub name: String,
    pub description: String,
    pub sin_id: String,
    pub location_id: String,
}

/// A fully assembled town. Built once per generation attempt and treated as
/// read-only afterwards; gameplay works on derived state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TownData {
    pub id: String,
    pub name: String,
    pub description: String,
    pub locations: Vec<Location>,
    pub npcs: Vec<Npc>,
    pub sin_chain: Vec<SinNode>,
    pub clues: Vec<Clue>,
    pub topic_rules: Vec<TopicRule>,
    pub arrival_text: Option<String>,
    pub has_law: bool,
}

impl TownData {
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn npc(&self, id: &str) -> Option<&Npc> {
        self.npcs.iter().find(|n| n.id == id)
    }

    pub fn sin(&self, id: &str) -> Option<&SinNode> {
        self.sin_chain.iter().find(|s| s.id == id)
    }

    pub fn clue(&self, id: &str) -> Option<&Clue> {
        self.clues.iter().find(|c| c.id == id)
    }

    /// NPCs whose home is `location_id`.
    pub fn npcs_at<'a>(&'a self, location_id: &'a str) -> impl Iterator<Item = &'a Npc> {
        self.npcs.iter().filter(move |n| n.location_id == location_id)
    }
}
