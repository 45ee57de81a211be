use super::seed::SeededRng;
use super::tables::{FIRST_NAMES, SURNAMES, TOWN_PREFIXES, TOWN_SUFFIXES};

/// Generate a town name from prefix/suffix word lists. Always consumes two draws.
pub fn generate_town_name(rng: &mut SeededRng) -> String {
    let prefix = rng.pick(TOWN_PREFIXES);
    let suffix = rng.pick(TOWN_SUFFIXES);
    format!("{prefix}{suffix}")
}

/// Generate a person name (first + surname).
pub fn generate_person_name(rng: &mut SeededRng) -> String {
    let first = rng.pick(FIRST_NAMES);
    let surname = rng.pick(SURNAMES);
    format!("{first} {surname}")
}

/// Lowercase, hyphen-separated id derived from a display name.
///
/// "Bishop's Chapel" becomes "bishops-chapel".
pub fn kebab_id(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_dash = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn town_name_deterministic() {
        let mut a = SeededRng::new("names");
        let mut b = SeededRng::new("names");
        assert_eq!(generate_town_name(&mut a), generate_town_name(&mut b));
    }

    #[test]
    fn person_name_has_two_parts() {
        let mut rng = SeededRng::new("people");
        let name = generate_person_name(&mut rng);
        assert!(name.contains(' '), "name should have first and last: {name}");
    }

    #[test]
    fn kebab_ids() {
        assert_eq!(kebab_id("Bishop's Chapel"), "bishops-chapel");
        assert_eq!(kebab_id("  Town   Square "), "town-square");
        assert_eq!(kebab_id("Well-Worn_Trail"), "well-worn-trail");
    }
}
