use tracing::debug;

use crate::model::{Clue, Location, LocationType, Npc, SinNode, TownData};

use super::config::TownConfig;
use super::locations::generate_locations_with;
use super::names::{generate_town_name, kebab_id};
use super::npcs::{NpcGeneration, NpcOptions, generate_npcs_with};
use super::seed::{SeededRng, short_hash};
use super::sin_chain::generate_sin_chain_with;
use super::tables::{ARRIVAL_TEXTS, CLUE_TEMPLATES, Catalog, TOWN_DESCRIPTIONS, fill_template};
use super::topics::{clue_topic_rules, generate_topic_rules};

/// Generate a town with the built-in catalog. Performs no validation; see
/// [`crate::validate::validate_town`] and [`super::retry::generate_valid_town`].
pub fn generate_town(config: &TownConfig) -> TownData {
    generate_town_with(config, &Catalog::default())
}

pub fn generate_town_with(config: &TownConfig, catalog: &Catalog) -> TownData {
    let seed = config.seed.as_str();
    let town_override = config.name.as_deref();
    let mut rng = SeededRng::new(seed);

    let generated_name = generate_town_name(&mut rng);
    let name = config.name.clone().unwrap_or(generated_name);
    let town_values = [("town", name.as_str())];
    let description = fill_template(*rng.pick(TOWN_DESCRIPTIONS), &town_values);
    let arrival_text = fill_template(*rng.pick(ARRIVAL_TEXTS), &town_values);

    let raw_chain = generate_sin_chain_with(seed, config.chain_length(), catalog, town_override);
    let options = NpcOptions {
        has_law: config.has_law(),
        ..NpcOptions::default()
    };
    let NpcGeneration { mut npcs, sin_chain } =
        generate_npcs_with(&raw_chain, seed, &options, catalog, town_override);

    let locations = generate_locations_with(npcs.len(), &format!("{seed}-loc"), catalog);
    assign_npc_locations(&mut npcs, &locations);

    let clues = place_clues(&sin_chain, &locations, &npcs, &mut rng);
    let mut topic_rules = generate_topic_rules(&npcs, &sin_chain, &locations);
    topic_rules.extend(clue_topic_rules(&clues));

    debug!(
        seed,
        town = %name,
        sins = sin_chain.len(),
        npcs = npcs.len(),
        locations = locations.len(),
        clues = clues.len(),
        "generated town"
    );

    TownData {
        id: format!("{}-{}", kebab_id(&name), short_hash(seed)),
        name,
        description,
        locations,
        npcs,
        sin_chain,
        clues,
        topic_rules,
        arrival_text: Some(arrival_text),
        has_law: config.has_law(),
    }
}

/// Index of the least-occupied candidate, earliest on ties.
fn least_occupied(candidates: impl Iterator<Item = usize>, occupancy: &[usize]) -> Option<usize> {
    candidates.min_by_key(|&i| occupancy[i])
}

/// Replace each NPC's `loc-{type}` placeholder with a real location id.
///
/// NPCs go to the least-occupied location of their type, inferred from the
/// location's name and description. When no location has that type, they go
/// to the least-occupied location of any type. NPCs already placed at a real
/// location keep it. With no locations at all, placeholders are left for
/// validation to reject.
pub fn assign_npc_locations(npcs: &mut [Npc], locations: &[Location]) {
    let types: Vec<Option<LocationType>> = locations
        .iter()
        .map(|l| LocationType::infer(&l.name, &l.description))
        .collect();
    let mut occupancy = vec![0usize; locations.len()];

    for npc in npcs.iter_mut() {
        if let Some(i) = locations.iter().position(|l| l.id == npc.location_id) {
            occupancy[i] += 1;
            continue;
        }

        let wanted = LocationType::from_placeholder(&npc.location_id);
        let matching = (0..locations.len()).filter(|&i| wanted.is_some() && types[i] == wanted);
        let chosen = least_occupied(matching, &occupancy).or_else(|| {
            debug!(npc = %npc.id, wanted = %npc.location_id, "no matching location type, using least occupied");
            least_occupied(0..locations.len(), &occupancy)
        });

        match chosen {
            Some(i) => {
                npc.location_id = locations[i].id.clone();
                occupancy[i] += 1;
            }
            None => debug!(npc = %npc.id, "no locations to place npc"),
        }
    }
}

/// Hide one clue for every sin past the surface one.
///
/// Clues prefer locations nobody lives at, spreading across them before any
/// location gets a second clue.
fn place_clues(sin_chain: &[SinNode], locations: &[Location], npcs: &[Npc], rng: &mut SeededRng) -> Vec<Clue> {
    if locations.is_empty() {
        return Vec::new();
    }
    let mut clue_counts = vec![0usize; locations.len()];
    let empty: Vec<usize> = (0..locations.len())
        .filter(|&i| !npcs.iter().any(|n| n.location_id == locations[i].id))
        .collect();

    sin_chain
        .iter()
        .skip(1)
        .filter_map(|sin| {
            let pool = CLUE_TEMPLATES.get(sin.level.rank()).copied()?;
            let template = rng.pick(pool);
            let i = least_occupied(empty.iter().copied(), &clue_counts)
                .or_else(|| least_occupied(0..locations.len(), &clue_counts))?;
            clue_counts[i] += 1;
            Some(Clue {
                id: format!("clue-{}", sin.id),
                name: template.name.to_string(),
                description: template.description.to_string(),
                sin_id: sin.id.clone(),
                location_id: locations[i].id.clone(),
            })
        })
        .collect()
}
