/// Chain length used when a config does not ask for one.
pub const DEFAULT_CHAIN_LENGTH: usize = 4;

/// Configuration for generating one town.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TownConfig {
    /// Seed string; the same config always yields the same town.
    pub seed: String,
    /// Number of sins, clamped to 3..=7. Defaults to [`DEFAULT_CHAIN_LENGTH`].
    pub chain_length: Option<usize>,
    /// Fixed town name instead of a generated one.
    pub name: Option<String>,
    /// Whether the town has a lawman. Defaults to `false`.
    pub has_law: Option<bool>,
}

impl TownConfig {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            ..Self::default()
        }
    }

    pub fn with_chain_length(mut self, chain_length: usize) -> Self {
        self.chain_length = Some(chain_length);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_law(mut self, has_law: bool) -> Self {
        self.has_law = Some(has_law);
        self
    }

    pub fn chain_length(&self) -> usize {
        self.chain_length.unwrap_or(DEFAULT_CHAIN_LENGTH)
    }

    pub fn has_law(&self) -> bool {
        self.has_law.unwrap_or(false)
    }

    /// Same config under a different seed.
    pub fn reseeded(&self, seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TownConfig::new("x");
        assert_eq!(config.chain_length(), DEFAULT_CHAIN_LENGTH);
        assert!(!config.has_law());
        assert_eq!(config.name, None);
    }

    #[test]
    fn reseeded_keeps_other_fields() {
        let config = TownConfig::new("x").with_chain_length(6).with_law(true).with_name("Zion");
        let retry = config.reseeded("x-retry-1");
        assert_eq!(retry.seed, "x-retry-1");
        assert_eq!(retry.chain_length, Some(6));
        assert_eq!(retry.has_law, Some(true));
        assert_eq!(retry.name.as_deref(), Some("Zion"));
    }
}
