#[macro_use]
mod macros;

pub mod error;
pub mod flush;
pub mod investigation;
pub mod model;
pub mod procgen;
pub mod scenario;
pub mod validate;

pub use error::GenerationError;
pub use investigation::InvestigationState;
pub use model::{
    Clue, ConflictThresholds, KnowledgeFact, Location, LocationType, Npc, NpcKnowledge, SinLevel,
    SinNode, TopicRule, TownData,
};
pub use procgen::{
    Catalog, DEFAULT_MAX_ATTEMPTS, SeededRng, TownConfig, generate_town, generate_valid_town,
};
pub use validate::{ValidationError, ValidationErrorKind, ValidationResult, validate_town};
