mod common;

use vineyard_towns::model::*;
use vineyard_towns::model::location::reachable_from;
use vineyard_towns::procgen::*;
use vineyard_towns::validate::validate_town;

#[test]
fn same_config_same_town() {
    for seed in common::SEEDS {
        let config = TownConfig::new(*seed).with_chain_length(5).with_law(true);
        assert_eq!(generate_town(&config), generate_town(&config), "seed {seed}");
    }
}

#[test]
fn different_seeds_differ() {
    let a = generate_town(&TownConfig::new("seed-a"));
    let b = generate_town(&TownConfig::new("seed-b"));
    assert_ne!(a.id, b.id);
}

#[test]
fn bridal_falls_chain() {
    let chain = generate_sin_chain("bridal-falls", 4);
    let levels: Vec<SinLevel> = chain.iter().map(|s| s.level).collect();
    assert_eq!(
        levels,
        vec![SinLevel::Pride, SinLevel::Injustice, SinLevel::Sin, SinLevel::DemonicAttacks]
    );
    assert!(chain.iter().all(|s| !s.discovered && !s.resolved && s.linked_npcs.is_empty()));

    let town = generate_valid_town(&TownConfig::new("bridal-falls"), DEFAULT_MAX_ATTEMPTS).unwrap();
    let state = vineyard_towns::InvestigationState::from_town(&town);
    assert!(state.sin_progression[0].discovered);
    assert!(state.sin_progression[1..].iter().all(|s| !s.discovered));
}

#[test]
fn chain_length_is_clamped() {
    assert_eq!(generate_town(&TownConfig::new("a").with_chain_length(1)).sin_chain.len(), 3);
    assert_eq!(generate_town(&TownConfig::new("a").with_chain_length(99)).sin_chain.len(), 7);
    assert_eq!(generate_town(&TownConfig::new("a")).sin_chain.len(), DEFAULT_CHAIN_LENGTH);
}

#[test]
fn bridal_falls_locations() {
    let locations = generate_locations(5, "bridal-falls-loc");
    assert!(locations.len() >= 6);

    let mut ids: Vec<&str> = locations.iter().map(|l| l.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), locations.len(), "duplicate location ids");

    assert_eq!(reachable_from(&locations, &locations[0].id).len(), locations.len());
    for loc in &locations {
        for conn in &loc.connections {
            let other = locations.iter().find(|l| &l.id == conn).unwrap();
            assert!(other.is_connected_to(&loc.id), "{} -> {} is one-way", loc.id, conn);
        }
    }
}

#[test]
fn seed_42_is_valid_with_full_coverage() {
    let town = generate_valid_town(&TownConfig::new("seed-42"), DEFAULT_MAX_ATTEMPTS).unwrap();
    let result = validate_town(&town);
    assert!(result.valid, "{:?}", result.errors);
    assert!(town.sin_chain.iter().all(|s| s.linked_npcs.len() >= 2));
}

#[test]
fn generated_towns_resolve_every_reference() {
    for seed in common::SEEDS {
        let town = generate_town(&TownConfig::new(*seed).with_chain_length(7).with_law(true));
        for npc in &town.npcs {
            assert!(town.location(&npc.location_id).is_some(), "{} at {}", npc.id, npc.location_id);
        }
        for clue in &town.clues {
            assert!(town.location(&clue.location_id).is_some());
            assert!(town.sin(&clue.sin_id).is_some());
        }
        assert_eq!(town.clues.len(), town.sin_chain.len() - 1);
        for sin in &town.sin_chain {
            assert!(town.topic_rules.iter().any(|r| r.is_discovery_for(&sin.id)));
            for npc_id in &sin.linked_npcs {
                assert!(town.npc(npc_id).unwrap().knows_about(&sin.id));
            }
        }
        assert_eq!(common::linked_npc_ids(&town).len(), town.npcs.len(), "seed {seed}");
    }
}

#[test]
fn configured_name_is_used_throughout() {
    let town = generate_town(&TownConfig::new("named").with_name("Bishop's Rest"));
    assert_eq!(town.name, "Bishop's Rest");
    assert!(town.id.starts_with("bishops-rest-"));
    assert!(town.arrival_text.as_deref().unwrap().contains("Bishop's Rest"));
}

#[test]
fn lawman_joins_when_requested() {
    let with_law = generate_town(&TownConfig::new("law").with_law(true));
    let without = generate_town(&TownConfig::new("law"));
    assert!(with_law.has_law);
    assert!(!without.has_law);
    assert!(with_law.npcs.iter().any(|n| n.role == "sheriff"));
    assert!(!without.npcs.iter().any(|n| n.role == "sheriff"));
}

#[test]
fn braces_in_configured_name_are_kept_verbatim() {
    let config = TownConfig::new("x").with_name("Fort {North}");
    let town = generate_town(&config);
    assert_eq!(town.name, "Fort {North}");
    assert!(town.id.starts_with("fort-north-"));
    assert!(town.arrival_text.as_deref().unwrap().contains("Fort {North}"));
    assert!(town.description.contains("Fort {North}"));
    assert!(validate_town(&town).valid);
}
