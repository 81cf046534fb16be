//! Curated local quotes used when the remote source is unavailable.
//!
//! The list and the default quote are `'static` constants: they are fixed at
//! build time and never mutated, so they can be shared freely.
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::InspireError;
use crate::result::Result;

/// Built-in fallback quotes, already attributed.
pub const CITATIONS: &[&str] = &[
    "Le succès, c'est se promener d'échec en échec tout en restant motivé. — Winston Churchill",
    "La vie, c'est comme une bicyclette, il faut avancer pour ne pas perdre l'équilibre. — Albert Einstein",
    "Ce n'est pas parce que les choses sont difficiles que nous n'osons pas, c'est parce que nous n'osons pas qu'elles sont difficiles. — Sénèque",
    "Le seul voyage impossible est celui que vous ne commencez jamais. — Tony Robbins",
    "La créativité, c'est l'intelligence qui s'amuse. — Albert Einstein",
];

/// Last resort when the fallback list is empty. Never empty.
pub const CITATION_DEFAUT: &str = "La persévérance est la clé du succès. — Anonyme";

/// Picks one quote uniformly at random from `citations`.
///
/// Returns [`InspireError::EmptySource`] when there is nothing to pick from.
pub fn select<R: Rng + ?Sized>(citations: &[&str], rng: &mut R) -> Result<String> {
    let citation = citations.choose(rng).ok_or(InspireError::EmptySource)?;
    debug!("Local quote selected among {} candidates", citations.len());
    Ok((*citation).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn default_quote_is_not_empty() {
        assert!(!CITATION_DEFAUT.trim().is_empty());
        assert!(!CITATIONS.is_empty());
    }

    #[test]
    fn empty_list_is_an_empty_source() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(select(&[], &mut rng), Err(InspireError::EmptySource)));
    }

    #[test]
    fn same_seed_gives_same_quote() {
        let first = select(CITATIONS, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = select(CITATIONS, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn single_entry_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(select(&["seule"], &mut rng).unwrap(), "seule");
        }
    }

    #[test]
    fn every_entry_is_eventually_selected() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(select(CITATIONS, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), CITATIONS.len());
    }
}
