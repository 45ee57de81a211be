use std::collections::HashSet;

use crate::model::TopicRule;
use crate::model::TownData;
use crate::model::location::reachable_from;

use super::{ValidationError, ValidationErrorKind, ValidationResult};

/// Check that every reference resolves, every location is reachable and
/// every sin has a discovery rule. Does not assume the town came from this
/// crate's generators.
pub fn validate_playability(town: &TownData) -> ValidationResult {
    let mut errors = Vec::new();
    let location_ids: HashSet<&str> = town.locations.iter().map(|l| l.id.as_str()).collect();

    for npc in &town.npcs {
        if !location_ids.contains(npc.location_id.as_str()) {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::InvalidNpcLocation,
                    format!("{} ({}) lives at unknown location '{}'", npc.name, npc.id, npc.location_id),
                )
                .with_npc(&npc.id),
            );
        }
    }

    for clue in &town.clues {
        if !location_ids.contains(clue.location_id.as_str()) {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::InvalidClueLocation,
                    format!("clue '{}' is hidden at unknown location '{}'", clue.id, clue.location_id),
                )
                .with_sin(&clue.sin_id),
            );
        }
    }

    for rule in &town.topic_rules {
        match rule {
            TopicRule::Location {
                topic_id,
                npc_id,
                location_id,
                ..
            } => {
                if town.npc(npc_id).is_none() {
                    errors.push(
                        ValidationError::new(
                            ValidationErrorKind::InvalidTopicNpc,
                            format!("topic '{topic_id}' names unknown NPC '{npc_id}'"),
                        )
                        .with_npc(npc_id),
                    );
                }
                if !location_ids.contains(location_id.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidTopicLocation,
                        format!("topic '{topic_id}' names unknown location '{location_id}'"),
                    ));
                }
            }
            TopicRule::Clue { topic_id, clue_id, .. } => {
                if town.clue(clue_id).is_none() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidTopicClue,
                        format!("topic '{topic_id}' names unknown clue '{clue_id}'"),
                    ));
                }
            }
            TopicRule::Default { .. } | TopicRule::Discovery { .. } => {}
        }
    }

    if let Some(first) = town.locations.first() {
        let reached = reachable_from(&town.locations, &first.id);
        for location in town.locations.iter().filter(|l| !reached.contains(l.id.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DisconnectedLocation,
                format!("location '{}' cannot be reached from '{}'", location.id, first.id),
            ));
        }
    }

    for sin in &town.sin_chain {
        if !town.topic_rules.iter().any(|r| r.is_discovery_for(&sin.id)) {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::UndiscoverableSin,
                    format!("no discovery topic names sin '{}'", sin.name),
                )
                .with_sin(&sin.id),
            );
        }
    }

    ValidationResult::from_parts(errors, Vec::new())
}
