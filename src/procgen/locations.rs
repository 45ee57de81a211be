use std::collections::HashMap;

use tracing::debug;

use crate::model::Location;
use crate::model::location::reachable_from;

use super::names::kebab_id;
use super::seed::SeededRng;
use super::tables::Catalog;

/// Fewest locations a town gets, layout permitting.
pub const MIN_LOCATIONS: usize = 6;

/// Generate a town's location graph with the built-in layouts.
pub fn generate_locations(npc_count: usize, seed: &str) -> Vec<Location> {
    generate_locations_with(npc_count, seed, &Catalog::default())
}

/// Generate a connected, symmetric location graph sized for `npc_count` NPCs.
///
/// One layout template is picked and its first `npc_count + 2` slots are used
/// (at least [`MIN_LOCATIONS`], at most the whole layout). Only names and
/// descriptions are random; coordinates and connections come from the layout.
pub fn generate_locations_with(npc_count: usize, seed: &str, catalog: &Catalog) -> Vec<Location> {
    let mut rng = SeededRng::new(seed);
    let template = rng.pick(catalog.location_templates);
    let target = (npc_count + 2).max(MIN_LOCATIONS).min(template.slots.len());
    let slots = &template.slots[..target];

    let mut ids_by_key: HashMap<&str, String> = HashMap::with_capacity(target);
    let mut locations: Vec<Location> = Vec::with_capacity(target);
    for slot in slots {
        let name = rng.pick(slot.names).to_string();
        let description = rng.pick(slot.descriptions).to_string();
        let mut id = kebab_id(&name);
        if locations.iter().any(|l| l.id == id) {
            id = format!("{id}-{}", slot.key);
        }
        ids_by_key.insert(slot.key, id.clone());
        locations.push(Location {
            id,
            name,
            description,
            x: slot.x,
            y: slot.y,
            connections: Vec::new(),
        });
    }

    // Connections to pruned slots are dropped here.
    for (location, slot) in locations.iter_mut().zip(slots) {
        for key in slot.connections {
            if let Some(target_id) = ids_by_key.get(key) {
                location.connect(target_id);
            }
        }
    }

    make_symmetric(&mut locations);
    let repaired = repair_connectivity(&mut locations);
    debug!(
        seed,
        template = template.name,
        count = locations.len(),
        repaired,
        "generated locations"
    );
    locations
}

/// Add the reverse of every one-way connection.
pub fn make_symmetric(locations: &mut [Location]) {
    let edges: Vec<(String, String)> = locations
        .iter()
        .flat_map(|l| l.connections.iter().map(move |c| (l.id.clone(), c.clone())))
        .collect();
    for (from, to) in edges {
        if let Some(target) = locations.iter_mut().find(|l| l.id == to) {
            target.connect(&from);
        }
    }
}

/// Link every location unreachable from the first one directly to it.
///
/// Layouts are authored connected; this only fires when slot pruning cuts a
/// branch off. Returns the number of locations that needed a forced edge.
pub fn repair_connectivity(locations: &mut [Location]) -> usize {
    let Some(hub_id) = locations.first().map(|l| l.id.clone()) else {
        return 0;
    };
    let reached: Vec<String> = reachable_from(locations, &hub_id)
        .into_iter()
        .map(str::to_string)
        .collect();
    let stranded: Vec<String> = locations
        .iter()
        .filter(|l| !reached.contains(&l.id))
        .map(|l| l.id.clone())
        .collect();

    for id in &stranded {
        locations[0].connect(id);
        if let Some(location) = locations.iter_mut().find(|l| &l.id == id) {
            location.connect(&hub_id);
        }
    }
    stranded.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procgen::tables::{LocationSlot, LocationTemplate};

    fn assert_connected_and_symmetric(locations: &[Location]) {
        let reached = reachable_from(locations, &locations[0].id);
        assert_eq!(reached.len(), locations.len(), "graph is not connected");
        for l in locations {
            for c in &l.connections {
                let other = locations.iter().find(|o| &o.id == c).expect("dangling connection");
                assert!(other.is_connected_to(&l.id), "{} -> {} has no reverse", l.id, c);
            }
        }
    }

    #[test]
    fn at_least_six_locations() {
        for npc_count in [0, 1, 3, 5] {
            let locations = generate_locations(npc_count, "small-town");
            assert!(locations.len() >= MIN_LOCATIONS, "{npc_count} npcs -> {}", locations.len());
        }
    }

    #[test]
    fn grows_with_npc_count_up_to_layout_size() {
        let small = generate_locations(4, "grow");
        let large = generate_locations(100, "grow");
        assert!(large.len() >= small.len());
        assert!(large.len() <= 10);
    }

    #[test]
    fn connected_and_symmetric_for_many_seeds() {
        for i in 0..40 {
            for npc_count in [0, 4, 6, 12] {
                let locations = generate_locations(npc_count, &format!("graph-{i}"));
                assert_connected_and_symmetric(&locations);
            }
        }
    }

    #[test]
    fn ids_are_kebab_case_and_unique() {
        let locations = generate_locations(20, "ids");
        let mut ids: Vec<&str> = locations.iter().map(|l| l.id.as_str()).collect();
        for id in &ids {
            assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), locations.len());
    }

    #[test]
    fn deterministic() {
        assert_eq!(generate_locations(5, "bridal-falls-loc"), generate_locations(5, "bridal-falls-loc"));
    }

    static TWO_SLOTS: &[LocationSlot] = &[
        LocationSlot {
            key: "hub",
            names: &["Town Square"],
            descriptions: &["The middle of town."],
            x: 0.0,
            y: 0.0,
            connections: &["church"],
        },
        LocationSlot {
            key: "church",
            names: &["Chapel"],
            descriptions: &["A chapel."],
            x: 1.0,
            y: 0.0,
            connections: &[],
        },
    ];

    static TWO_SLOT_TEMPLATES: &[LocationTemplate] = &[LocationTemplate {
        name: "two-slot",
        slots: TWO_SLOTS,
    }];

    fn loc(id: &str, connections: &[&str]) -> Location {
        Location {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            x: 0.0,
            y: 0.0,
            connections: connections.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn repair_reconnects_stranded_locations() {
        let mut locations = vec![
            loc("square", &["chapel"]),
            loc("chapel", &["square"]),
            loc("spring", &["ridge"]),
            loc("ridge", &["spring"]),
        ];
        assert_eq!(repair_connectivity(&mut locations), 2);
        assert_connected_and_symmetric(&locations);
        assert!(locations[0].is_connected_to("spring"));
        assert!(locations[0].is_connected_to("ridge"));
    }

    #[test]
    fn repair_on_connected_graph_is_noop() {
        let mut locations = vec![loc("square", &["chapel"]), loc("chapel", &["square"])];
        assert_eq!(repair_connectivity(&mut locations), 0);
        assert_eq!(repair_connectivity(&mut []), 0);
    }

    #[test]
    fn symmetry_pass_adds_reverse_edges() {
        let catalog = Catalog {
            location_templates: TWO_SLOT_TEMPLATES,
            ..Catalog::default()
        };
        let locations = generate_locations_with(0, "symmetry", &catalog);
        assert_eq!(locations.len(), 2, "never more locations than the layout has");
        let chapel = locations.iter().find(|l| l.id == "chapel").unwrap();
        assert!(chapel.is_connected_to("town-square"));
    }
}
