use std::collections::VecDeque;

use crate::model::{TopicRule, TownData};

use super::{ValidationError, ValidationErrorKind, ValidationResult};

/// Highest trust a fact may require and still count as a starter fact.
pub const STARTER_TRUST_LIMIT: u8 = 30;

/// Directed "discovering A can lead to discovering B" graph over chain indices.
///
/// For each sin named by a discovery rule, an edge A -> B exists when some
/// NPC holds a fact about A and a fact about B that needs strictly more trust
/// than their A fact. This approximates the unlock order from fact placement;
/// it does not simulate dialogue.
pub fn dependency_graph(town: &TownData) -> Vec<Vec<usize>> {
    let index_of = |id: &str| town.sin_chain.iter().position(|s| s.id == id);
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); town.sin_chain.len()];

    let gated = town
        .topic_rules
        .iter()
        .filter(|r| matches!(r, TopicRule::Discovery { .. }))
        .flat_map(|r| r.required_sin_ids());

    for sin_id in gated {
        let Some(from) = index_of(sin_id) else {
            continue;
        };
        for npc in &town.npcs {
            let Some(entry_trust) = npc.facts_about(sin_id).map(|f| f.min_trust_level).min() else {
                continue;
            };
            for fact in npc.facts() {
                let Some(to) = fact.sin_id.as_deref().and_then(index_of) else {
                    continue;
                };
                if to != from && fact.min_trust_level > entry_trust && !adjacency[from].contains(&to) {
                    adjacency[from].push(to);
                }
            }
        }
    }
    adjacency
}

/// Find cycles with an explicit-stack DFS.
///
/// Each returned cycle lists its nodes in path order. A cycle is only
/// reported if it contains a node no earlier cycle contained.
pub fn find_cycles(adjacency: &[Vec<usize>]) -> Vec<Vec<usize>> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Unvisited,
        OnPath,
        Done,
    }

    let mut marks = vec![Mark::Unvisited; adjacency.len()];
    let mut reported = vec![false; adjacency.len()];
    let mut cycles = Vec::new();

    for root in 0..adjacency.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        // (node, index of the next child to visit)
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
        marks[root] = Mark::OnPath;

        while let Some(top) = stack.last_mut() {
            let node = top.0;
            let Some(&child) = adjacency[node].get(top.1) else {
                marks[node] = Mark::Done;
                stack.pop();
                continue;
            };
            top.1 += 1;

            match marks[child] {
                Mark::Unvisited => {
                    marks[child] = Mark::OnPath;
                    stack.push((child, 0));
                }
                Mark::OnPath => {
                    let Some(start) = stack.iter().position(|&(n, _)| n == child) else {
                        continue;
                    };
                    let cycle: Vec<usize> = stack[start..].iter().map(|&(n, _)| n).collect();
                    if cycle.iter().any(|&n| !reported[n]) {
                        for &n in &cycle {
                            reported[n] = true;
                        }
                        cycles.push(cycle);
                    }
                }
                Mark::Done => {}
            }
        }
    }
    cycles
}

/// Check that every sin can be found by a player starting cold.
///
/// Errors: a sin with no starter fact, a cycle in the dependency graph, a sin
/// unreachable from the sins that have trust-0 facts. Warns when only one NPC
/// knows about a sin.
pub fn validate_sin_chain_discoverable(town: &TownData) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for sin in &town.sin_chain {
        let has_starter = town
            .npcs
            .iter()
            .flat_map(|n| n.facts_about(&sin.id))
            .any(|f| f.min_trust_level <= STARTER_TRUST_LIMIT);
        if !has_starter {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::MissingStarterFact,
                    format!(
                        "sin '{}' has no fact requiring trust {STARTER_TRUST_LIMIT} or less",
                        sin.name
                    ),
                )
                .with_sin(&sin.id),
            );
        }

        let informed: Vec<&str> = town
            .npcs
            .iter()
            .filter(|n| n.knows_about(&sin.id))
            .map(|n| n.id.as_str())
            .collect();
        if let [only] = informed.as_slice() {
            warnings.push(
                ValidationError::new(
                    ValidationErrorKind::SingleSourceSin,
                    format!("sin '{}' is only known to {only}", sin.name),
                )
                .with_sin(&sin.id)
                .with_npc(only),
            );
        }
    }

    let adjacency = dependency_graph(town);
    for cycle in find_cycles(&adjacency) {
        let path: Vec<&str> = cycle
            .iter()
            .chain(cycle.first())
            .map(|&i| town.sin_chain[i].id.as_str())
            .collect();
        errors.push(
            ValidationError::new(
                ValidationErrorKind::CircularDependency,
                format!("circular discovery dependency: {}", path.join(" -> ")),
            )
            .with_sin(path[0]),
        );
    }

    let mut reached = vec![false; town.sin_chain.len()];
    let mut queue: VecDeque<usize> = town
        .sin_chain
        .iter()
        .enumerate()
        .filter(|(_, sin)| {
            town.npcs
                .iter()
                .flat_map(|n| n.facts_about(&sin.id))
                .any(|f| f.min_trust_level == 0)
        })
        .map(|(i, _)| i)
        .collect();
    for &i in &queue {
        reached[i] = true;
    }
    while let Some(i) = queue.pop_front() {
        for &next in &adjacency[i] {
            if !reached[next] {
                reached[next] = true;
                queue.push_back(next);
            }
        }
    }
    for (sin, _) in town.sin_chain.iter().zip(&reached).filter(|(_, r)| !**r) {
        errors.push(
            ValidationError::new(
                ValidationErrorKind::IsolatedSin,
                format!("sin '{}' cannot be reached from any trust-0 conversation", sin.name),
            )
            .with_sin(&sin.id),
        );
    }

    ValidationResult::from_parts(errors, warnings)
}
