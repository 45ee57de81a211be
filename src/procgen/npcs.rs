use rand::Rng;
use tracing::debug;

use crate::model::{ConflictThresholds, KnowledgeFact, Npc, NpcKnowledge, SinNode};

use super::names::generate_person_name;
use super::seed::SeededRng;
use super::sin_chain::{ChainPersonas, chain_personas};
use super::tables::{Catalog, GOSSIP_LINES, LAW_ROLE, RelationshipRole, fill_template};

pub const DEFAULT_MAX_CAST: usize = 10;

/// Highest trust any generated fact requires.
const MAX_FACT_TRUST: u8 = 90;

#[derive(Debug, Clone)]
pub struct NpcOptions {
    /// Add a lawman with stakes in the first and last sins.
    pub has_law: bool,
    /// Soft cap on cast size. Witnesses are always new NPCs; other roles
    /// reuse existing NPCs once the cap is reached.
    pub max_cast: usize,
}

impl Default for NpcOptions {
    fn default() -> Self {
        Self {
            has_law: false,
            max_cast: DEFAULT_MAX_CAST,
        }
    }
}

/// Output of NPC generation: the cast, plus the chain with `linked_npcs` filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct NpcGeneration {
    pub npcs: Vec<Npc>,
    pub sin_chain: Vec<SinNode>,
}

struct CastMember {
    npc: Npc,
    fact_template: &'static str,
}

struct CastBuilder<'a> {
    seed: &'a str,
    rng: SeededRng,
    personas: ChainPersonas,
    cast: Vec<CastMember>,
}

impl CastBuilder<'_> {
    fn recruit(&mut self, role: &RelationshipRole) -> usize {
        let index = self.cast.len();
        let name = generate_person_name(&mut self.rng);
        let gossip = fill_template(*self.rng.pick(GOSSIP_LINES), &[("town", self.personas.town.as_str())]);
        let escalate_at: u8 = self.rng.random_range(20..=70);
        let give_up_at: u8 = self.rng.random_range(escalate_at + 10..=100);
        let id = format!("npc-{}", index + 1);

        self.cast.push(CastMember {
            npc: Npc {
                description: format!("{name}, {} of {}.", role.role, self.personas.town),
                name,
                role: role.role.to_string(),
                location_id: role.location.placeholder(),
                knowledge: Some(NpcKnowledge {
                    facts: vec![KnowledgeFact {
                        id: format!("{id}-gossip"),
                        content: gossip,
                        sin_id: None,
                        min_trust_level: 0,
                    }],
                }),
                conflict_thresholds: Some(ConflictThresholds {
                    escalate_at,
                    give_up_at,
                }),
                id,
            },
            fact_template: role.fact,
        });
        debug!(seed = self.seed, npc = index + 1, role = role.role, "recruited npc");
        index
    }

    /// Give cast member `index` a fact about `sin` and link them to it.
    ///
    /// Per NPC, sin facts never require less trust than the ones handed out
    /// before them, so an NPC never gates an earlier sin behind a later one.
    /// Trust climbs strictly until it reaches [`MAX_FACT_TRUST`].
    ///
    /// `fact_template` is the template of the role being filled, which may
    /// differ from the role the NPC was recruited for.
    fn add_stake(&mut self, index: usize, sin: &mut SinNode, witness: bool, fact_template: &str) {
        let previous = self.cast[index]
            .npc
            .facts()
            .iter()
            .filter(|f| f.sin_id.is_some())
            .map(|f| f.min_trust_level)
            .max();
        let trust = match previous {
            None if witness => 0,
            None => (self.rng.next_int(1, 6) * 5) as u8,
            Some(p) => p.saturating_add(self.rng.next_int(20, 30) as u8).min(MAX_FACT_TRUST),
        };

        let sin_name = sin.name.to_lowercase();
        let mut values = self.personas.placeholders().to_vec();
        values.push(("sin", sin_name.as_str()));
        let content = fill_template(fact_template, &values);
        let npc = &mut self.cast[index].npc;
        let knowledge = npc.knowledge.get_or_insert_with(NpcKnowledge::default);
        knowledge.facts.push(KnowledgeFact {
            id: format!("{}-fact-{}", npc.id, knowledge.facts.len()),
            content,
            sin_id: Some(sin.id.clone()),
            min_trust_level: trust,
        });
        sin.link_npc(&npc.id);
    }

    fn unlinked_to(&self, sin: &SinNode) -> Vec<usize> {
        (0..self.cast.len())
            .filter(|&i| !sin.is_linked(&self.cast[i].npc.id))
            .collect()
    }
}

/// Generate the cast for a sin chain using the built-in relationship patterns.
pub fn generate_npcs(sin_chain: &[SinNode], seed: &str, options: &NpcOptions) -> NpcGeneration {
    generate_npcs_with(sin_chain, seed, options, &Catalog::default(), None)
}

/// Generate the cast for a sin chain.
///
/// Every NPC gets a trust-0 gossip fact and a placeholder `loc-{type}`
/// location. Each sin gets the roles of one relationship pattern for its
/// level, with the pattern's witness always a fresh NPC holding a trust-0
/// fact about it. Every sin after the first also picks up one NPC from the
/// previous sin, which stitches the cast into a single web.
pub fn generate_npcs_with(
    sin_chain: &[SinNode],
    seed: &str,
    options: &NpcOptions,
    catalog: &Catalog,
    town_override: Option<&str>,
) -> NpcGeneration {
    let mut chain = sin_chain.to_vec();
    let mut builder = CastBuilder {
        seed,
        rng: SeededRng::new(&format!("{seed}-npcs")),
        personas: chain_personas(seed, town_override),
        cast: Vec::new(),
    };

    for i in 0..chain.len() {
        let pattern = builder.rng.pick(catalog.relationship_patterns_for(chain[i].level));
        for role in pattern.roles {
            let reuse = !role.witness && builder.cast.len() >= options.max_cast;
            let candidates = if reuse {
                builder.unlinked_to(&chain[i])
            } else {
                Vec::new()
            };
            let index = if candidates.is_empty() {
                builder.recruit(role)
            } else {
                *builder.rng.pick(&candidates)
            };
            builder.add_stake(index, &mut chain[i], role.witness, role.fact);
        }

        if i > 0 {
            let bridges: Vec<usize> = (0..builder.cast.len())
                .filter(|&n| {
                    let id = &builder.cast[n].npc.id;
                    chain[i - 1].is_linked(id) && !chain[i].is_linked(id)
                })
                .collect();
            if !bridges.is_empty() {
                let index = *builder.rng.pick(&bridges);
                let own_fact = builder.cast[index].fact_template;
                builder.add_stake(index, &mut chain[i], false, own_fact);
            }
        }
    }

    if options.has_law && !chain.is_empty() {
        let sheriff = builder.recruit(&LAW_ROLE);
        builder.add_stake(sheriff, &mut chain[0], false, LAW_ROLE.fact);
        let last = chain.len() - 1;
        builder.add_stake(sheriff, &mut chain[last], false, LAW_ROLE.fact);
    }

    let npcs: Vec<Npc> = builder.cast.into_iter().map(|m| m.npc).collect();
    debug!(seed, npcs = npcs.len(), sins = chain.len(), has_law = options.has_law, "generated npcs");
    NpcGeneration {
        npcs,
        sin_chain: chain,
    }
}
