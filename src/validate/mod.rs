//! Independent checks that a generated town is actually playable.
//!
//! Validators never panic and never short-circuit: each returns every
//! problem it finds as a structured [`ValidationError`]. Errors block a town,
//! warnings only flag content worth tuning.

pub mod discoverability;
pub mod playability;
pub mod stakes;

use serde::{Deserialize, Serialize};

use crate::model::TownData;

pub use discoverability::validate_sin_chain_discoverable;
pub use playability::validate_playability;
pub use stakes::validate_npc_stakes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ValidationErrorKind {
    MissingStarterFact,
    CircularDependency,
    IsolatedSin,
    SingleSourceSin,
    MissingKnowledge,
    NoStakes,
    InsufficientNpcCoverage,
    DisconnectedNpc,
    NoEntryPoint,
    TooSecretive,
    InvalidNpcLocation,
    InvalidTopicNpc,
    InvalidTopicLocation,
    DisconnectedLocation,
    UndiscoverableSin,
    InvalidClueLocation,
    InvalidTopicClue,
}

string_enum!(ValidationErrorKind {
    MissingStarterFact => "missing-starter-fact",
    CircularDependency => "circular-dependency",
    IsolatedSin => "isolated-sin",
    SingleSourceSin => "single-source-sin",
    MissingKnowledge => "missing-knowledge",
    NoStakes => "no-stakes",
    InsufficientNpcCoverage => "insufficient-npc-coverage",
    DisconnectedNpc => "disconnected-npc",
    NoEntryPoint => "no-entry-point",
    TooSecretive => "too-secretive",
    InvalidNpcLocation => "invalid-npc-location",
    InvalidTopicNpc => "invalid-topic-npc",
    InvalidTopicLocation => "invalid-topic-location",
    DisconnectedLocation => "disconnected-location",
    UndiscoverableSin => "undiscoverable-sin",
    InvalidClueLocation => "invalid-clue-location",
    InvalidTopicClue => "invalid-topic-clue",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
    pub sin_id: Option<String>,
    pub npc_id: Option<String>,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            sin_id: None,
            npc_id: None,
        }
    }

    pub fn with_sin(mut self, sin_id: &str) -> Self {
        self.sin_id = Some(sin_id.to_string());
        self
    }

    pub fn with_npc(mut self, npc_id: &str) -> Self {
        self.npc_id = Some(npc_id.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty.
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_parts(errors: Vec<ValidationError>, warnings: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Combine two results: valid only if both are, problems concatenated.
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.valid = self.valid && other.valid;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self
    }

    pub fn has_error(&self, kind: ValidationErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    pub fn has_warning(&self, kind: ValidationErrorKind) -> bool {
        self.warnings.iter().any(|e| e.kind == kind)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }
}

/// Run all three validators. The town is valid iff none reports an error.
pub fn validate_town(town: &TownData) -> ValidationResult {
    validate_sin_chain_discoverable(town)
        .merge(validate_npc_stakes(town))
        .merge(validate_playability(town))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_ands_validity() {
        let ok = ValidationResult::default();
        let bad = ValidationResult::from_parts(
            vec![ValidationError::new(ValidationErrorKind::NoStakes, "x").with_npc("npc-1")],
            vec![],
        );
        let warned = ValidationResult::from_parts(
            vec![],
            vec![ValidationError::new(ValidationErrorKind::TooSecretive, "y")],
        );
        let merged = ok.clone().merge(warned.clone());
        assert!(merged.valid);
        assert_eq!(merged.warnings.len(), 1);

        let merged = ok.merge(bad).merge(warned);
        assert!(!merged.valid);
        assert!(merged.has_error(ValidationErrorKind::NoStakes));
        assert!(merged.has_warning(ValidationErrorKind::TooSecretive));
        assert_eq!(merged.errors[0].npc_id.as_deref(), Some("npc-1"));
    }

    #[test]
    fn kinds_serialize_kebab_case() {
        let err = ValidationError::new(ValidationErrorKind::InsufficientNpcCoverage, "m").with_sin("pride-x");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "insufficient-npc-coverage");
        assert_eq!(json["sin_id"], "pride-x");
    }
}
