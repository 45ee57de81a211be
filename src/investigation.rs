//! Read model of an investigation in progress.
//!
//! Holds what the player has uncovered so far and answers which topics are
//! open in a given conversation. The generated [`TownData`] is never mutated.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{SinNode, TopicRule, TownData};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestigationState {
    pub town_id: String,
    pub sin_progression: Vec<SinNode>,
    pub found_clues: BTreeSet<String>,
}

impl InvestigationState {
    /// Fresh state for a town. The first sin is visible on arrival.
    pub fn from_town(town: &TownData) -> Self {
        let mut sin_progression = town.sin_chain.clone();
        if let Some(first) = sin_progression.first_mut() {
            first.discovered = true;
        }
        Self {
            town_id: town.id.clone(),
            sin_progression,
            found_clues: BTreeSet::new(),
        }
    }

    /// Mark a sin discovered. Returns `false` for unknown ids or sins
    /// already discovered.
    pub fn discover_sin(&mut self, sin_id: &str) -> bool {
        match self.sin_progression.iter_mut().find(|s| s.id == sin_id) {
            Some(sin) if !sin.discovered => {
                sin.discovered = true;
                true
            }
            _ => false,
        }
    }

    /// Resolving a sin also discovers it.
    pub fn resolve_sin(&mut self, sin_id: &str) -> bool {
        match self.sin_progression.iter_mut().find(|s| s.id == sin_id) {
            Some(sin) if !sin.resolved => {
                sin.discovered = true;
                sin.resolved = true;
                true
            }
            _ => false,
        }
    }

    pub fn find_clue(&mut self, clue_id: &str) -> bool {
        self.found_clues.insert(clue_id.to_string())
    }

    pub fn is_discovered(&self, sin_id: &str) -> bool {
        self.sin_progression.iter().any(|s| s.id == sin_id && s.discovered)
    }

    pub fn discovered_count(&self) -> usize {
        self.sin_progression.iter().filter(|s| s.discovered).count()
    }

    /// True once every sin in the chain is resolved.
    pub fn is_complete(&self) -> bool {
        self.sin_progression.iter().all(|s| s.resolved)
    }

    pub fn is_unlocked(&self, rule: &TopicRule, npc_id: &str, location_id: &str) -> bool {
        match rule {
            TopicRule::Default { .. } => true,
            TopicRule::Discovery {
                required_sin_ids,
                require_all,
                ..
            } => {
                if *require_all {
                    !required_sin_ids.is_empty() && required_sin_ids.iter().all(|id| self.is_discovered(id))
                } else {
                    required_sin_ids.iter().any(|id| self.is_discovered(id))
                }
            }
            TopicRule::Location {
                npc_id: rule_npc,
                location_id: rule_location,
                ..
            } => rule_npc == npc_id && rule_location == location_id,
            TopicRule::Clue { clue_id, .. } => self.found_clues.contains(clue_id),
        }
    }

    /// Topics open when talking to `npc_id` at `location_id`, in rule order.
    pub fn unlocked_topics<'a>(
        &self,
        rules: &'a [TopicRule],
        npc_id: &str,
        location_id: &str,
    ) -> Vec<&'a TopicRule> {
        rules
            .iter()
            .filter(|r| self.is_unlocked(r, npc_id, location_id))
            .collect()
    }
}
