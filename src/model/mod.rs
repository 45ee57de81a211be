pub mod location;
pub mod npc;
pub mod sin;
pub mod topic;
pub mod town;

pub use location::{Location, LocationType};
pub use npc::{ConflictThresholds, KnowledgeFact, Npc, NpcKnowledge};
pub use sin::{SinLevel, SinNode};
pub use topic::TopicRule;
pub use town::{Clue, TownData};
