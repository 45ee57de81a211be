use crate::error::GenerationError;
use crate::model::TownData;
use crate::validate::validate_town;

use super::config::TownConfig;
use super::tables::Catalog;
use super::town::generate_town_with;

pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Seed used for the given attempt. Attempt 0 keeps the caller's seed.
pub fn attempt_seed(seed: &str, attempt: usize) -> String {
    if attempt == 0 {
        seed.to_string()
    } else {
        format!("{seed}-retry-{attempt}")
    }
}

/// Generate towns until one passes every validator.
///
/// Attempt `i` reseeds to `"{seed}-retry-{i}"`, so the result is a pure
/// function of the config. Fails with the last attempt's errors once
/// `max_attempts` towns have been rejected.
pub fn generate_valid_town(config: &TownConfig, max_attempts: usize) -> Result<TownData, GenerationError> {
    generate_valid_town_with(config, max_attempts, &Catalog::default())
}

pub fn generate_valid_town_with(
    config: &TownConfig,
    max_attempts: usize,
    catalog: &Catalog,
) -> Result<TownData, GenerationError> {
    if max_attempts == 0 {
        return Err(GenerationError::ZeroAttempts);
    }

    let mut last_errors = Vec::new();
    for attempt in 0..max_attempts {
        let attempt_config = config.reseeded(attempt_seed(&config.seed, attempt));
        let town = generate_town_with(&attempt_config, catalog);
        let result = validate_town(&town);

        if result.valid {
            tracing::info!(
                seed = %config.seed,
                attempt = attempt + 1,
                town = %town.name,
                "accepted town"
            );
            for warning in &result.warnings {
                tracing::warn!(town = %town.name, kind = %warning.kind, "{}", warning.message);
            }
            return Ok(town);
        }

        tracing::warn!(
            seed = %attempt_config.seed,
            attempt = attempt + 1,
            errors = result.errors.len(),
            "rejected town"
        );
        last_errors = result.errors;
    }

    Err(GenerationError::Exhausted {
        seed: config.seed.clone(),
        attempts: max_attempts,
        errors: last_errors,
    })
}

/// Generate one valid town per seed, sharing every other config field.
/// Stops at the first seed that exhausts its attempts.
pub fn generate_town_pool<S: AsRef<str>>(
    base: &TownConfig,
    seeds: &[S],
    max_attempts: usize,
) -> Result<Vec<TownData>, GenerationError> {
    seeds
        .iter()
        .map(|seed| generate_valid_town(&base.reseeded(seed.as_ref()), max_attempts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_seeds() {
        assert_eq!(attempt_seed("abc", 0), "abc");
        assert_eq!(attempt_seed("abc", 1), "abc-retry-1");
        assert_eq!(attempt_seed("abc", 9), "abc-retry-9");
    }

    #[test]
    fn zero_attempts_is_an_error() {
        let err = generate_valid_town(&TownConfig::new("x"), 0).unwrap_err();
        assert_eq!(err, GenerationError::ZeroAttempts);
    }

    #[test]
    fn default_catalog_yields_valid_towns() {
        for seed in ["alpha", "bravo", "charlie", "delta", "echo"] {
            let town = generate_valid_town(&TownConfig::new(seed), DEFAULT_MAX_ATTEMPTS).unwrap();
            assert!(validate_town(&town).valid);
        }
    }

    #[test]
    fn pool_keeps_seed_order() {
        let towns = generate_town_pool(&TownConfig::new("").with_law(true), &["one", "two"], 3).unwrap();
        assert_eq!(towns.len(), 2);
        assert!(towns.iter().all(|t| t.has_law));
        assert_ne!(towns[0].id, towns[1].id);
    }
}
