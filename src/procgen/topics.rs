use tracing::debug;

use crate::model::{Clue, Location, Npc, SinNode, TopicRule};

/// Conversation label for an NPC's home-turf topic.
pub fn role_topic_label(role: &str) -> &'static str {
    match role {
        "steward" | "elder" => "The branch and its affairs",
        "shopkeeper" | "merchant" | "customer" | "miller" | "apprentice" => "Trade and credit",
        "clerk" => "Records and claims",
        "sheriff" | "deputy" => "Law and order",
        "rancher" | "farmer" | "widow" | "neighbor" | "wife" | "husband" | "brother" => {
            "Land and family"
        }
        "healer" | "herbalist" | "sick child's mother" => "Sickness and remedies",
        "gravedigger" => "The dead",
        "lay preacher" | "deacon" | "convert" | "doubter" => "Doctrine",
        _ => "Local matters",
    }
}

fn discovery(topic_id: String, label: String, required: Vec<String>, require_all: bool) -> TopicRule {
    TopicRule::Discovery {
        topic_id,
        label,
        required_sin_ids: required,
        require_all,
    }
}

/// Derive topic-unlock rules for a town.
///
/// Every sin gets a single-sin discovery rule. Consecutive sins additionally
/// get a "consequence" rule needing both, which never replaces the single-sin
/// rule. Each NPC gets a location rule for their home.
pub fn generate_topic_rules(npcs: &[Npc], sin_chain: &[SinNode], locations: &[Location]) -> Vec<TopicRule> {
    let mut rules = vec![
        TopicRule::Default {
            topic_id: "greeting".to_string(),
            label: "Greetings".to_string(),
        },
        TopicRule::Default {
            topic_id: "town-overview".to_string(),
            label: "How things stand in town".to_string(),
        },
    ];

    for sin in sin_chain {
        rules.push(discovery(
            format!("sin-{}", sin.id),
            sin.name.clone(),
            vec![sin.id.clone()],
            false,
        ));
    }

    for pair in sin_chain.windows(2) {
        let (cause, effect) = (&pair[0], &pair[1]);
        rules.push(discovery(
            format!("consequence-{}-{}", cause.id, effect.id),
            format!("How {} led to {}", cause.name, effect.name),
            vec![cause.id.clone(), effect.id.clone()],
            true,
        ));
    }

    for npc in npcs {
        let role_label = role_topic_label(&npc.role);
        let label = match locations.iter().find(|l| l.id == npc.location_id) {
            Some(home) => format!("{role_label} ({})", home.name),
            None => role_label.to_string(),
        };
        rules.push(TopicRule::Location {
            topic_id: format!("{}-at-home", npc.id),
            label,
            npc_id: npc.id.clone(),
            location_id: npc.location_id.clone(),
        });
    }

    // Coverage sweep: the loop above already covers every sin, but the
    // invariant should not depend on that staying true.
    for sin in sin_chain {
        if !rules.iter().any(|r| r.is_discovery_for(&sin.id)) {
            rules.push(discovery(
                format!("sin-{}-fallback", sin.id),
                sin.name.clone(),
                vec![sin.id.clone()],
                false,
            ));
        }
    }

    debug!(rules = rules.len(), sins = sin_chain.len(), npcs = npcs.len(), "generated topic rules");
    rules
}

/// One rule per clue, unlocked when the clue is found.
pub fn clue_topic_rules(clues: &[Clue]) -> Vec<TopicRule> {
    clues
        .iter()
        .map(|clue| TopicRule::Clue {
            topic_id: format!("clue-{}", clue.id),
            label: clue.name.clone(),
            clue_id: clue.id.clone(),
        })
        .collect()
}
