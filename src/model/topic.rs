use serde::{Deserialize, Serialize};

/// Declarative rule for when a dialogue topic becomes available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopicRule {
    /// Always available.
    Default { topic_id: String, label: String },
    /// Available once any of `required_sin_ids` has been discovered, or all
    /// of them when `require_all` is set.
    Discovery {
        topic_id: String,
        label: String,
        required_sin_ids: Vec<String>,
        #[serde(default)]
        require_all: bool,
    },
    /// Available only when talking to `npc_id` at `location_id`.
    Location {
        topic_id: String,
        label: String,
        npc_id: String,
        location_id: String,
    },
    /// Available once `clue_id` has been found.
    Clue {
        topic_id: String,
        label: String,
        clue_id: String,
    },
}

impl TopicRule {
    pub fn topic_id(&self) -> &str {
        match self {
            TopicRule::Default { topic_id, .. }
            | TopicRule::Discovery { topic_id, .. }
            | TopicRule::Location { topic_id, .. }
            | TopicRule::Clue { topic_id, .. } => topic_id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TopicRule::Default { label, .. }
            | TopicRule::Discovery { label, .. }
            | TopicRule::Location { label, .. }
            | TopicRule::Clue { label, .. } => label,
        }
    }

    /// Sins gating a discovery rule; empty for every other kind.
    pub fn required_sin_ids(&self) -> &[String] {
        match self {
            TopicRule::Discovery { required_sin_ids, .. } => required_sin_ids,
            _ => &[],
        }
    }

    pub fn is_discovery_for(&self, sin_id: &str) -> bool {
        self.required_sin_ids().iter().any(|id| id == sin_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_kind_tag() {
        let rule = TopicRule::Discovery {
            topic_id: "topic-pride".to_string(),
            label: "The steward's pride".to_string(),
            required_sin_ids: vec!["pride-abc".to_string()],
            require_all: false,
        };
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["kind"], "discovery");
        assert_eq!(json["required_sin_ids"][0], "pride-abc");
    }

    #[test]
    fn require_all_defaults_to_false() {
        let json = r#"{"kind":"discovery","topic_id":"t","label":"T","required_sin_ids":["a"]}"#;
        let rule: TopicRule = serde_json::from_str(json).unwrap();
        assert!(matches!(rule, TopicRule::Discovery { require_all: false, .. }));
    }

    #[test]
    fn required_sins_only_for_discovery() {
        let rule = TopicRule::Default {
            topic_id: "greeting".to_string(),
            label: "Greeting".to_string(),
        };
        assert!(rule.required_sin_ids().is_empty());
        assert!(!rule.is_discovery_for("pride-abc"));
    }
}
