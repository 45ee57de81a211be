#![allow(dead_code)]

use vineyard_towns::model::*;

pub const SEEDS: &[&str] = &["seed-42", "bridal-falls", "hollow-creek", "tumbleweed", "x"];

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Every NPC id linked to any sin.
pub fn linked_npc_ids(town: &TownData) -> std::collections::BTreeSet<&str> {
    town.sin_chain
        .iter()
        .flat_map(|s| s.linked_npcs.iter().map(String::as_str))
        .collect()
}
