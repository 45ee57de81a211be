use serde::{Deserialize, Serialize};

/// A townsperson the player can talk to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub id: String,
    pub name: String,
    pub role: String,
    pub description: String,
    /// Id of the NPC's home location. Holds a `loc-{type}` placeholder until
    /// the town generator resolves it against generated locations.
    pub location_id: String,
    /// `None` marks a mute NPC; validation rejects those.
    pub knowledge: Option<NpcKnowledge>,
    pub conflict_thresholds: Option<ConflictThresholds>,
}

impl Npc {
    /// All facts this NPC holds, empty for NPCs without knowledge.
    pub fn facts(&self) -> &[KnowledgeFact] {
        self.knowledge.as_ref().map(|k| k.facts.as_slice()).unwrap_or_default()
    }

    /// Facts about a particular sin.
    pub fn facts_about<'a>(&'a self, sin_id: &'a str) -> impl Iterator<Item = &'a KnowledgeFact> {
        self.facts()
            .iter()
            .filter(move |f| f.sin_id.as_deref() == Some(sin_id))
    }

    pub fn knows_about(&self, sin_id: &str) -> bool {
        self.facts_about(sin_id).next().is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NpcKnowledge {
    pub facts: Vec<KnowledgeFact>,
}

/// Something an NPC can reveal once the player has earned enough trust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeFact {
    pub id: String,
    pub content: String,
    /// The sin this fact gives away, if any.
    pub sin_id: Option<String>,
    /// Trust (0-100) required before the NPC will share this. 0 is an entry point.
    pub min_trust_level: u8,
}

/// How far an NPC lets a conflict go before escalating or backing down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictThresholds {
    /// Stakes (0-100) at which the NPC escalates to the next arena.
    pub escalate_at: u8,
    /// Stakes at which the NPC gives the conflict up.
    pub give_up_at: u8,
}
