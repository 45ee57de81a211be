use std::collections::{HashMap, HashSet};

use crate::model::TownData;

use super::{ValidationError, ValidationErrorKind, ValidationResult};

/// Sins need at least this many linked NPCs.
pub const MIN_LINKED_NPCS: usize = 2;
/// Facts at or above this trust count as hard to crack.
pub const SECRETIVE_TRUST: u8 = 60;
/// Share of hard facts above which an NPC is flagged as too secretive.
pub const SECRETIVE_FRACTION: f64 = 0.8;

/// Check that every NPC matters to the investigation and can be talked to.
pub fn validate_npc_stakes(town: &TownData) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for npc in &town.npcs {
        let Some(knowledge) = &npc.knowledge else {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::MissingKnowledge,
                    format!("{} ({}) has no knowledge and cannot take part", npc.name, npc.id),
                )
                .with_npc(&npc.id),
            );
            continue;
        };

        if !knowledge.facts.iter().any(|f| f.sin_id.is_some()) {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::NoStakes,
                    format!("{} ({}) knows nothing about any sin", npc.name, npc.id),
                )
                .with_npc(&npc.id),
            );
        }

        if !knowledge.facts.iter().any(|f| f.min_trust_level == 0) {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::NoEntryPoint,
                    format!("{} ({}) has no fact shared without trust", npc.name, npc.id),
                )
                .with_npc(&npc.id),
            );
        }

        let secretive = knowledge
            .facts
            .iter()
            .filter(|f| f.min_trust_level >= SECRETIVE_TRUST)
            .count();
        if !knowledge.facts.is_empty()
            && secretive as f64 / knowledge.facts.len() as f64 > SECRETIVE_FRACTION
        {
            warnings.push(
                ValidationError::new(
                    ValidationErrorKind::TooSecretive,
                    format!(
                        "{} ({}) guards {secretive} of {} facts behind trust {SECRETIVE_TRUST}+",
                        npc.name,
                        npc.id,
                        knowledge.facts.len()
                    ),
                )
                .with_npc(&npc.id),
            );
        }
    }

    // Only ids naming a real NPC count, each once.
    let npc_ids: HashSet<&str> = town.npcs.iter().map(|n| n.id.as_str()).collect();
    let linked: Vec<Vec<&str>> = town
        .sin_chain
        .iter()
        .map(|sin| {
            let mut ids: Vec<&str> = Vec::new();
            for id in sin.linked_npcs.iter().map(String::as_str) {
                if npc_ids.contains(id) && !ids.contains(&id) {
                    ids.push(id);
                }
            }
            ids
        })
        .collect();

    let mut sins_by_npc: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, (sin, ids)) in town.sin_chain.iter().zip(&linked).enumerate() {
        if ids.len() < MIN_LINKED_NPCS {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::InsufficientNpcCoverage,
                    format!(
                        "sin '{}' has {} linked NPC(s), needs {MIN_LINKED_NPCS}",
                        sin.name,
                        ids.len()
                    ),
                )
                .with_sin(&sin.id),
            );
        }
        for &npc_id in ids {
            sins_by_npc.entry(npc_id).or_default().push(i);
        }
    }

    for npc in &town.npcs {
        let shares_a_sin = sins_by_npc.get(npc.id.as_str()).is_some_and(|sins| {
            sins.iter()
                .any(|&i| linked[i].iter().any(|&other| other != npc.id))
        });
        if !shares_a_sin {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::DisconnectedNpc,
                    format!("{} ({}) shares no sin with any other NPC", npc.name, npc.id),
                )
                .with_npc(&npc.id),
            );
        }
    }

    ValidationResult::from_parts(errors, warnings)
}
