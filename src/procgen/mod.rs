//! Seeded generators that assemble a town from the static tables.

pub mod config;
pub mod locations;
pub mod names;
pub mod npcs;
pub mod retry;
pub mod seed;
pub mod sin_chain;
pub mod tables;
pub mod topics;
pub mod town;

pub use config::{DEFAULT_CHAIN_LENGTH, TownConfig};
pub use locations::{generate_locations, generate_locations_with};
pub use names::kebab_id;
pub use npcs::{NpcGeneration, NpcOptions, generate_npcs, generate_npcs_with};
pub use retry::{DEFAULT_MAX_ATTEMPTS, generate_town_pool, generate_valid_town, generate_valid_town_with};
pub use seed::{SeededRng, hash_seed, short_hash};
pub use sin_chain::{generate_sin_chain, generate_sin_chain_with};
pub use tables::Catalog;
pub use topics::generate_topic_rules;
pub use town::{generate_town, generate_town_with};
