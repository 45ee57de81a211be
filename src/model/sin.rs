use serde::{Deserialize, Serialize};

/// Severity tier of a sin. Variants are declared in escalation order, so the
/// derived `Ord` matches how far a town has fallen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SinLevel {
    Pride,
    Injustice,
    Sin,
    DemonicAttacks,
    FalseDoctrine,
    Sorcery,
    HateAndMurder,
}

string_enum!(SinLevel {
    Pride => "pride",
    Injustice => "injustice",
    Sin => "sin",
    DemonicAttacks => "demonic-attacks",
    FalseDoctrine => "false-doctrine",
    Sorcery => "sorcery",
    HateAndMurder => "hate-and-murder",
});

impl SinLevel {
    /// The fixed escalation ladder. Every chain is a prefix of this.
    pub const CANONICAL_ORDER: [SinLevel; 7] = [
        SinLevel::Pride,
        SinLevel::Injustice,
        SinLevel::Sin,
        SinLevel::DemonicAttacks,
        SinLevel::FalseDoctrine,
        SinLevel::Sorcery,
        SinLevel::HateAndMurder,
    ];

    /// Position on the ladder, 0 for pride.
    pub fn rank(self) -> usize {
        self as usize
    }
}

/// One rung of a town's moral-decay ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SinNode {
    pub id: String,
    pub level: SinLevel,
    pub name: String,
    pub description: String,
    pub discovered: bool,
    pub resolved: bool,
    /// NPC ids with stakes in this sin. Order carries no meaning.
    pub linked_npcs: Vec<String>,
}

impl SinNode {
    pub fn is_linked(&self, npc_id: &str) -> bool {
        self.linked_npcs.iter().any(|id| id == npc_id)
    }

    /// Record an NPC against this sin. Linking twice is a no-op.
    pub fn link_npc(&mut self, npc_id: &str) {
        if !self.is_linked(npc_id) {
            self.linked_npcs.push(npc_id.to_string());
        }
    }
}
