use super::data::ALL_RUNES;
use super::types::{Rune, CHASSE_RUNE_KEY};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Lookup maps over `ALL_RUNES`, built on first use.
struct RuneIndex {
    by_key: HashMap<&'static str, &'static Rune>,
    /// Effect id -> runes listing it, in declaration order
    by_effect: HashMap<u32, Vec<&'static Rune>>,
}

static INDEX: OnceLock<RuneIndex> = OnceLock::new();

fn index() -> &'static RuneIndex {
    INDEX.get_or_init(|| {
        let mut by_key = HashMap::with_capacity(ALL_RUNES.len());
        let mut by_effect: HashMap<u32, Vec<&'static Rune>> = HashMap::new();
        for rune in ALL_RUNES {
            by_key.insert(rune.key, rune);
            for &effect_id in rune.effect_ids {
                by_effect.entry(effect_id).or_default().push(rune);
            }
        }
        RuneIndex { by_key, by_effect }
    })
}

/// Look up a rune by its key.
pub fn rune(key: &str) -> Option<&'static Rune> {
    index().by_key.get(key).copied()
}

pub fn is_known_rune(key: &str) -> bool {
    index().by_key.contains_key(key)
}

/// Every rune listing `effect_id`, first-declared first.
pub fn runes_for_effect(effect_id: u32) -> &'static [&'static Rune] {
    index()
        .by_effect
        .get(&effect_id)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Resolve the rune a stat effect maps to.
///
/// The effect id wins; a shared effect id resolves to the first-declared rune.
/// When no rune lists the effect, the characteristic id is tried instead.
pub fn find_rune_for_effect(
    effect_id: u32,
    characteristic_id: Option<i32>,
) -> Option<&'static Rune> {
    if let Some(&first) = runes_for_effect(effect_id).first() {
        return Some(first);
    }

    let characteristic_id = characteristic_id?;
    ALL_RUNES
        .iter()
        .find(|r| r.characteristic_id == Some(characteristic_id))
}

/// Rune keys in presentation order: alphabetical, except `ret_pa`/`ret_pm`
/// sit right before `re_air` and `chasse` comes last.
pub fn sorted_rune_keys() -> Vec<&'static str> {
    const SPECIAL: [&str; 3] = [CHASSE_RUNE_KEY, "ret_pa", "ret_pm"];

    let mut keys: Vec<&'static str> = ALL_RUNES
        .iter()
        .map(|r| r.key)
        .filter(|k| !SPECIAL.contains(k))
        .collect();
    keys.sort_unstable();

    match keys.iter().position(|&k| k == "re_air") {
        Some(pos) => {
            keys.insert(pos, "ret_pm");
            keys.insert(pos, "ret_pa");
        }
        None => keys.extend(["ret_pa", "ret_pm"]),
    }

    keys.push(CHASSE_RUNE_KEY);
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_is_indexed() {
        for r in ALL_RUNES {
            assert_eq!(rune(r.key).map(|x| x.key), Some(r.key));
        }
        assert!(rune("nope").is_none());
    }

    #[test]
    fn test_keys_are_unique() {
        assert_eq!(index().by_key.len(), ALL_RUNES.len());
    }

    #[test]
    fn test_densities_and_effects_positive() {
        for r in ALL_RUNES {
            assert!(r.density > 0.0, "{} density", r.key);
            assert!(r.effect > 0.0, "{} effect", r.key);
        }
    }

    #[test]
    fn test_shared_effect_resolves_to_first_declared() {
        // 418 is listed by do_cri and re_per_me, 420 by re_cri and re_per_di
        assert_eq!(find_rune_for_effect(418, None).unwrap().key, "do_cri");
        assert_eq!(find_rune_for_effect(420, None).unwrap().key, "re_cri");
        assert_eq!(runes_for_effect(418).len(), 2);
    }

    #[test]
    fn test_characteristic_fallback() {
        // Unknown effect id, characteristic 10 is Force
        assert_eq!(find_rune_for_effect(99_999, Some(10)).unwrap().key, "fo");
        assert!(find_rune_for_effect(99_999, Some(-5)).is_none());
        assert!(find_rune_for_effect(99_999, None).is_none());
    }

    #[test]
    fn test_effect_id_beats_characteristic() {
        // 118 is Force; characteristic 11 would be Vitality
        assert_eq!(find_rune_for_effect(118, Some(11)).unwrap().key, "fo");
    }

    #[test]
    fn test_sorted_keys_layout() {
        let keys = sorted_rune_keys();
        assert_eq!(keys.len(), ALL_RUNES.len());
        assert_eq!(*keys.last().unwrap(), CHASSE_RUNE_KEY);
        assert_eq!(keys[0], "age");

        let re_air = keys.iter().position(|&k| k == "re_air").unwrap();
        assert_eq!(keys[re_air - 2], "ret_pa");
        assert_eq!(keys[re_air - 1], "ret_pm");
        assert_eq!(keys[re_air - 3], "pui");
    }
}
