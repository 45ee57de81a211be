use tracing::debug;

use crate::model::{SinLevel, SinNode};

use super::names::generate_town_name;
use super::seed::{SeededRng, short_hash};
use super::tables::{AUTHORITIES, Catalog, SINNERS, VICTIMS, fill_template};

pub const MIN_CHAIN_LENGTH: usize = 3;
pub const MAX_CHAIN_LENGTH: usize = 7;

/// The recurring cast named in a chain's prose. Drawn once per chain so the
/// same people show up at every rung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainPersonas {
    pub town: String,
    pub authority: String,
    pub sinner: String,
    pub victim: String,
}

impl ChainPersonas {
    pub fn placeholders(&self) -> [(&str, &str); 4] {
        [
            ("town", self.town.as_str()),
            ("authority", self.authority.as_str()),
            ("sinner", self.sinner.as_str()),
            ("victim", self.victim.as_str()),
        ]
    }
}

pub fn clamp_chain_length(chain_length: usize) -> usize {
    chain_length.clamp(MIN_CHAIN_LENGTH, MAX_CHAIN_LENGTH)
}

/// Stable id for the sin at `index` of the chain generated from `seed`.
pub fn sin_id(seed: &str, index: usize, level: SinLevel) -> String {
    format!("{level}-{}", short_hash(&format!("{seed}:{index}")))
}

fn draw_personas(rng: &mut SeededRng, town_override: Option<&str>) -> ChainPersonas {
    // The name draw happens even when overridden so the rest of the stream
    // does not depend on whether a name was supplied.
    let generated = generate_town_name(rng);
    ChainPersonas {
        town: town_override.map(str::to_string).unwrap_or(generated),
        authority: rng.pick(AUTHORITIES).to_string(),
        sinner: rng.pick(SINNERS).to_string(),
        victim: rng.pick(VICTIMS).to_string(),
    }
}

/// Re-derive the personas a chain generated from `seed` uses.
pub fn chain_personas(seed: &str, town_override: Option<&str>) -> ChainPersonas {
    let mut rng = SeededRng::new(seed);
    draw_personas(&mut rng, town_override)
}

/// Generate a sin chain with the built-in templates.
///
/// `chain_length` is clamped to 3..=7. Levels always follow the canonical
/// ladder from pride; only the length and the prose vary.
pub fn generate_sin_chain(seed: &str, chain_length: usize) -> Vec<SinNode> {
    generate_sin_chain_with(seed, chain_length, &Catalog::default(), None)
}

pub fn generate_sin_chain_with(
    seed: &str,
    chain_length: usize,
    catalog: &Catalog,
    town_override: Option<&str>,
) -> Vec<SinNode> {
    let len = clamp_chain_length(chain_length);
    let mut rng = SeededRng::new(seed);
    let personas = draw_personas(&mut rng, town_override);
    let placeholders = personas.placeholders();

    let chain: Vec<SinNode> = SinLevel::CANONICAL_ORDER[..len]
        .iter()
        .enumerate()
        .map(|(index, &level)| {
            let template = rng.pick(catalog.sin_templates_for(level));
            SinNode {
                id: sin_id(seed, index, level),
                level,
                name: template.name.to_string(),
                description: fill_template(template.description, &placeholders),
                discovered: false,
                resolved: false,
                linked_npcs: Vec::new(),
            }
        })
        .collect();

    debug!(seed, requested = chain_length, length = chain.len(), town = %personas.town, "generated sin chain");
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_canonical_prefix() {
        for len in MIN_CHAIN_LENGTH..=MAX_CHAIN_LENGTH {
            let chain = generate_sin_chain("prefix", len);
            let levels: Vec<SinLevel> = chain.iter().map(|s| s.level).collect();
            assert_eq!(levels, SinLevel::CANONICAL_ORDER[..len].to_vec());
        }
    }

    #[test]
    fn length_is_clamped() {
        assert_eq!(generate_sin_chain("short", 0).len(), 3);
        assert_eq!(generate_sin_chain("short", 2).len(), 3);
        assert_eq!(generate_sin_chain("long", 8).len(), 7);
        assert_eq!(generate_sin_chain("long", 100).len(), 7);
    }

    #[test]
    fn nodes_start_blank() {
        for node in generate_sin_chain("blank", 5) {
            assert!(!node.discovered);
            assert!(!node.resolved);
            assert!(node.linked_npcs.is_empty());
            assert!(!node.description.contains('{'));
        }
    }

    #[test]
    fn ids_unique_and_prefixed_by_level() {
        let chain = generate_sin_chain("ids", 7);
        let mut ids: Vec<&str> = chain.iter().map(|s| s.id.as_str()).collect();
        for node in &chain {
            assert!(node.id.starts_with(node.level.as_str()), "{}", node.id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn deterministic() {
        assert_eq!(generate_sin_chain("bridal-falls", 4), generate_sin_chain("bridal-falls", 4));
        assert_ne!(generate_sin_chain("bridal-falls", 4), generate_sin_chain("other", 4));
    }

    #[test]
    fn personas_recur_across_prose() {
        let personas = chain_personas("recurring", None);
        let chain = generate_sin_chain("recurring", 7);
        let mentions = chain
            .iter()
            .filter(|s| {
                s.description.contains(&personas.town)
                    || s.description.contains(&personas.authority)
                    || s.description.contains(&personas.sinner)
                    || s.description.contains(&personas.victim)
            })
            .count();
        assert_eq!(mentions, chain.len(), "every rung should name the chain's personas");
    }

    #[test]
    fn town_override_keeps_stream() {
        let plain = generate_sin_chain_with("override", 4, &Catalog::default(), None);
        let named = generate_sin_chain_with("override", 4, &Catalog::default(), Some("Zarahemla"));
        let plain_names: Vec<&str> = plain.iter().map(|s| s.name.as_str()).collect();
        let named_names: Vec<&str> = named.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(plain_names, named_names);
    }
}
