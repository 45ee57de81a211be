mod common;

use vineyard_towns::model::*;
use vineyard_towns::procgen::{TownConfig, generate_town};
use vineyard_towns::scenario::TownScenario;
use vineyard_towns::validate::*;

#[test]
fn generated_towns_pass_every_validator() {
    for seed in common::SEEDS {
        for len in [3, 5, 7] {
            let town = generate_town(&TownConfig::new(*seed).with_chain_length(len));
            let result = validate_town(&town);
            assert!(result.valid, "seed {seed} len {len}: {:?}", result.errors);
        }
    }
}

#[test]
fn npc_with_only_high_trust_facts_has_no_entry_point() {
    let mut s = TownScenario::playable();
    s.add_npc("npc-3", "square");
    s.add_fact("npc-3", Some("pride-1"), 80);
    s.add_fact("npc-3", Some("injustice-1"), 80);
    s.link("pride-1", "npc-3");
    let town = s.build();

    let result = validate_npc_stakes(&town);
    let entry: Vec<_> = result
        .errors
        .iter()
        .filter(|e| e.kind == ValidationErrorKind::NoEntryPoint)
        .collect();
    assert_eq!(entry.len(), 1);
    assert_eq!(entry[0].npc_id.as_deref(), Some("npc-3"));
    assert!(!validate_town(&town).valid);
}

#[test]
fn sin_with_no_linked_npcs_is_rejected() {
    let town = TownScenario::playable()
        .with(|t| t.sin_chain[0].linked_npcs.clear())
        .build();
    let result = validate_town(&town);
    assert!(!result.valid);
    let coverage = result
        .errors
        .iter()
        .find(|e| e.kind == ValidationErrorKind::InsufficientNpcCoverage)
        .unwrap();
    assert_eq!(coverage.sin_id.as_deref(), Some("pride-1"));
}

#[test]
fn unreachable_location_is_rejected() {
    let mut generated = generate_town(&TownConfig::new("island"));
    let stranded = generated.locations.len() - 1;
    let stranded_id = generated.locations[stranded].id.clone();
    generated.locations[stranded].connections.clear();
    for loc in &mut generated.locations {
        loc.connections.retain(|c| c != &stranded_id);
    }

    let result = validate_playability(&generated);
    assert!(result.has_error(ValidationErrorKind::DisconnectedLocation));
    assert!(
        result
            .errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DisconnectedLocation && e.message.contains(&stranded_id))
    );
}

#[test]
fn circular_dependency_is_reported_once() {
    let mut s = TownScenario::playable();
    // npc-3 reverses the order npc-1 and npc-2 reveal the two sins in.
    s.add_npc("npc-3", "church");
    s.add_fact("npc-3", None, 0);
    s.add_fact("npc-3", Some("injustice-1"), 10);
    s.add_fact("npc-3", Some("pride-1"), 40);
    s.link("pride-1", "npc-3");
    s.link("injustice-1", "npc-3");
    let town = s.build();

    let result = validate_sin_chain_discoverable(&town);
    let cycles: Vec<_> = result
        .errors
        .iter()
        .filter(|e| e.kind == ValidationErrorKind::CircularDependency)
        .collect();
    assert_eq!(cycles.len(), 1, "{:?}", result.errors);
    assert!(cycles[0].message.contains("pride-1"));
    assert!(cycles[0].message.contains("injustice-1"));
}

#[test]
fn sin_without_starter_fact_is_rejected() {
    let mut s = TownScenario::playable();
    s.add_sin("sin-1", SinLevel::Sin);
    for npc in ["npc-1", "npc-2"] {
        s.add_fact(npc, Some("sin-1"), 70);
        s.link("sin-1", npc);
    }
    s.add_discovery_rule(&["sin-1"]);
    let result = validate_sin_chain_discoverable(&s.build());
    assert!(result.has_error(ValidationErrorKind::MissingStarterFact));
    assert!(!result.has_error(ValidationErrorKind::IsolatedSin));
}

#[test]
fn sin_out_of_reach_of_trust_zero_facts_is_isolated() {
    let mut s = TownScenario::playable();
    s.add_sin("sin-1", SinLevel::Sin);
    s.add_npc("npc-3", "church");
    s.add_fact("npc-3", None, 0);
    s.add_fact("npc-3", Some("sin-1"), 25);
    s.add_npc("npc-4", "square");
    s.add_fact("npc-4", None, 0);
    s.add_fact("npc-4", Some("sin-1"), 30);
    s.link("sin-1", "npc-3");
    s.link("sin-1", "npc-4");
    s.add_discovery_rule(&["sin-1"]);

    let result = validate_sin_chain_discoverable(&s.build());
    let isolated: Vec<_> = result
        .errors
        .iter()
        .filter(|e| e.kind == ValidationErrorKind::IsolatedSin)
        .collect();
    assert_eq!(isolated.len(), 1);
    assert_eq!(isolated[0].sin_id.as_deref(), Some("sin-1"));
    assert!(!result.has_error(ValidationErrorKind::MissingStarterFact));
}

#[test]
fn single_source_sin_only_warns() {
    let town = TownScenario::playable()
        .with(|t| {
            let knowledge = t.npcs[1].knowledge.as_mut().unwrap();
            knowledge.facts.retain(|f| f.sin_id.as_deref() != Some("injustice-1"));
        })
        .build();
    let result = validate_sin_chain_discoverable(&town);
    assert!(result.valid, "{:?}", result.errors);
    assert!(result.has_warning(ValidationErrorKind::SingleSourceSin));
}

#[test]
fn validation_result_round_trips_through_json() {
    let town = TownScenario::playable()
        .with(|t| t.npcs[0].location_id = "loc-church".to_string())
        .build();
    let result = validate_town(&town);
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"invalid-npc-location\""));
    let back: ValidationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
