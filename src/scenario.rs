//! Hand-built towns for tests and tooling.
//!
//! [`TownScenario`] assembles a [`TownData`] piece by piece without going
//! through the generators, so validators can be pointed at exactly the shape
//! under test. Methods referring to an unknown id are no-ops; validation is
//! what reports broken references.

use crate::model::*;

pub struct TownScenario {
    town: TownData,
}

impl TownScenario {
    /// An empty town with no locations, people or sins.
    pub fn new(name: &str) -> Self {
        Self {
            town: TownData {
                id: crate::procgen::kebab_id(name),
                name: name.to_string(),
                description: format!("{name}, built by hand."),
                locations: Vec::new(),
                npcs: Vec::new(),
                sin_chain: Vec::new(),
                clues: Vec::new(),
                topic_rules: Vec::new(),
                arrival_text: None,
                has_law: false,
            },
        }
    }

    /// Smallest town every validator accepts: two connected locations, two
    /// NPCs who both know about a two-sin chain, one discovery rule per sin.
    pub fn playable() -> Self {
        let mut s = Self::new("Hollow Rock");
        let square = s.add_location("square");
        let church = s.add_location("church");
        s.connect(&square, &church);

        let pride = s.add_sin("pride-1", SinLevel::Pride);
        let injustice = s.add_sin("injustice-1", SinLevel::Injustice);
        for (id, home) in [("npc-1", square.as_str()), ("npc-2", church.as_str())] {
            let npc = s.add_npc(id, home);
            s.add_fact(&npc, Some(pride.as_str()), 0);
            s.add_fact(&npc, Some(injustice.as_str()), 20);
            s.link(&pride, &npc);
            s.link(&injustice, &npc);
        }
        s.add_discovery_rule(&[pride.as_str()]);
        s.add_discovery_rule(&[injustice.as_str()]);
        s
    }

    pub fn add_location(&mut self, id: &str) -> String {
        self.add_location_with(id, |_| {})
    }

    pub fn add_location_with(&mut self, id: &str, modify: impl FnOnce(&mut Location)) -> String {
        let mut location = Location {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            x: 0.0,
            y: 0.0,
            connections: Vec::new(),
        };
        modify(&mut location);
        self.town.locations.push(location);
        id.to_string()
    }

    /// Connect two locations in both directions.
    pub fn connect(&mut self, a: &str, b: &str) {
        for (from, to) in [(a, b), (b, a)] {
            if let Some(loc) = self.town.locations.iter_mut().find(|l| l.id == from) {
                loc.connect(to);
            }
        }
    }

    /// Add an NPC with empty knowledge living at `location_id`.
    pub fn add_npc(&mut self, id: &str, location_id: &str) -> String {
        self.add_npc_with(id, location_id, |_| {})
    }

    pub fn add_npc_with(&mut self, id: &str, location_id: &str, modify: impl FnOnce(&mut Npc)) -> String {
        let mut npc = Npc {
            id: id.to_string(),
            name: id.to_string(),
            role: "townsfolk".to_string(),
            description: String::new(),
            location_id: location_id.to_string(),
            knowledge: Some(NpcKnowledge::default()),
            conflict_thresholds: None,
        };
        modify(&mut npc);
        self.town.npcs.push(npc);
        id.to_string()
    }

    /// Give an NPC a fact. Creates knowledge if the NPC had none.
    pub fn add_fact(&mut self, npc_id: &str, sin_id: Option<&str>, min_trust_level: u8) {
        let Some(npc) = self.town.npcs.iter_mut().find(|n| n.id == npc_id) else {
            return;
        };
        let knowledge = npc.knowledge.get_or_insert_with(NpcKnowledge::default);
        let n = knowledge.facts.len() + 1;
        knowledge.facts.push(KnowledgeFact {
            id: format!("{npc_id}-fact-{n}"),
            content: match sin_id {
                Some(sin) => format!("Knows something about {sin}."),
                None => "Passes the time of day.".to_string(),
            },
            sin_id: sin_id.map(str::to_string),
            min_trust_level,
        });
    }

    /// Append a sin to the end of the chain.
    pub fn add_sin(&mut self, id: &str, level: SinLevel) -> String {
        self.town.sin_chain.push(SinNode {
            id: id.to_string(),
            level,
            name: format!("{level} at {}", self.town.name),
            description: String::new(),
            discovered: false,
            resolved: false,
            linked_npcs: Vec::new(),
        });
        id.to_string()
    }

    pub fn link(&mut self, sin_id: &str, npc_id: &str) {
        if let Some(sin) = self.town.sin_chain.iter_mut().find(|s| s.id == sin_id) {
            sin.link_npc(npc_id);
        }
    }

    pub fn add_discovery_rule(&mut self, sin_ids: &[&str]) {
        let topic_id = format!("sin-{}", sin_ids.join("-"));
        self.town.topic_rules.push(TopicRule::Discovery {
            label: topic_id.clone(),
            topic_id,
            required_sin_ids: sin_ids.iter().map(|s| s.to_string()).collect(),
            require_all: false,
        });
    }

    pub fn add_location_rule(&mut self, npc_id: &str, location_id: &str) {
        self.town.topic_rules.push(TopicRule::Location {
            topic_id: format!("{npc_id}-at-{location_id}"),
            label: "Local matters".to_string(),
            npc_id: npc_id.to_string(),
            location_id: location_id.to_string(),
        });
    }

    pub fn add_clue(&mut self, id: &str, sin_id: &str, location_id: &str) -> String {
        self.town.clues.push(Clue {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            sin_id: sin_id.to_string(),
            location_id: location_id.to_string(),
        });
        id.to_string()
    }

    /// Escape hatch for shapes the builder methods don't cover.
    pub fn with(mut self, f: impl FnOnce(&mut TownData)) -> Self {
        f(&mut self.town);
        self
    }

    pub fn town(&self) -> &TownData {
        &self.town
    }

    pub fn build(self) -> TownData {
        self.town
    }
}
