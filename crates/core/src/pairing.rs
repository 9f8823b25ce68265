//! Pairing procedure: priority matching before randomness.
//!
//! The raffle favors one specific couple. When a "Marcelo"-like name is
//! present on either side, that side's pick is fixed and the opposite side
//! prefers a "Mariana"-like name, falling back to a uniform random pick.
//! With no priority name anywhere, both sides are drawn uniformly and
//! independently.
//!
//! The name checks are intentionally this narrow: a literal substring match
//! over the normalized name, not a general fuzzy matcher.

use crate::env::{RngOracle, compute_seed};

/// Member indices chosen for one draw, valid at draw time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairPick {
    pub index1: usize,
    pub index2: usize,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// True if the normalized name contains "marcelo" or "marce".
pub fn is_marcelo(name: &str) -> bool {
    let name = normalize(name);
    name.contains("marcelo") || name.contains("marce")
}

/// True if the normalized name contains "mariana" or "marian".
pub fn is_mariana(name: &str) -> bool {
    let name = normalize(name);
    name.contains("mariana") || name.contains("marian")
}

/// First member matching `predicate`, by list order.
fn find_member(members: &[String], predicate: impl Fn(&str) -> bool) -> Option<usize> {
    members.iter().position(|name| predicate(name))
}

fn uniform(members: &[String], rng: &dyn RngOracle, seed: u64, nonce: u64, side: u32) -> usize {
    rng.pick_index(compute_seed(seed, nonce, side), members.len())
}

/// Selects one member index from each side.
///
/// Returns `None` when either side is empty. When both sides contain a
/// Marcelo-like member, group1's match takes precedence and group2's is
/// ignored.
pub fn pick_pair(
    members1: &[String],
    members2: &[String],
    rng: &dyn RngOracle,
    seed: u64,
    nonce: u64,
) -> Option<PairPick> {
    if members1.is_empty() || members2.is_empty() {
        return None;
    }

    let pick = if let Some(index1) = find_member(members1, is_marcelo) {
        let index2 = find_member(members2, is_mariana)
            .unwrap_or_else(|| uniform(members2, rng, seed, nonce, 1));
        PairPick { index1, index2 }
    } else if let Some(index2) = find_member(members2, is_marcelo) {
        let index1 = find_member(members1, is_mariana)
            .unwrap_or_else(|| uniform(members1, rng, seed, nonce, 0));
        PairPick { index1, index2 }
    } else {
        PairPick {
            index1: uniform(members1, rng, seed, nonce, 0),
            index2: uniform(members2, rng, seed, nonce, 1),
        }
    };

    Some(pick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    fn members(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn predicates_normalize_case_and_whitespace() {
        assert!(is_marcelo("  MARCELO P. "));
        assert!(is_marcelo("marce"));
        assert!(!is_marcelo("Marcos"));
        assert!(is_mariana("Mariana G."));
        assert!(is_mariana(" MARIAN "));
        assert!(!is_mariana("Maria"));
    }

    #[test]
    fn priority_pair_is_deterministic() {
        let g1 = members(&["Marcelo P."]);
        let g2 = members(&["Ana", "Mariana G.", "Luis"]);
        for nonce in 0..50 {
            let pick = pick_pair(&g1, &g2, &PcgRng, 123, nonce).unwrap();
            assert_eq!(pick, PairPick { index1: 0, index2: 1 });
        }
    }

    #[test]
    fn priority_mirrors_to_group2() {
        let g1 = members(&["Ana", "Mariana G."]);
        let g2 = members(&["Luis", "Marcelo"]);
        let pick = pick_pair(&g1, &g2, &PcgRng, 0, 0).unwrap();
        assert_eq!(pick, PairPick { index1: 1, index2: 1 });
    }

    #[test]
    fn group1_priority_wins_when_both_match() {
        // Both sides hold a Marcelo-like name. Group1's match is fixed and
        // group2's is ignored; group2 resolves through the Mariana rule.
        let g1 = members(&["Marcelo"]);
        let g2 = members(&["Marce", "Mariana"]);
        let pick = pick_pair(&g1, &g2, &PcgRng, 0, 0).unwrap();
        assert_eq!(pick, PairPick { index1: 0, index2: 1 });
    }

    #[test]
    fn fallback_is_random_but_covers_all_members() {
        let g1 = members(&["Marcelo"]);
        let g2 = members(&["Ana", "Luis"]);
        let mut seen = [false; 2];
        for nonce in 0..200 {
            let pick = pick_pair(&g1, &g2, &PcgRng, 42, nonce).unwrap();
            assert_eq!(pick.index1, 0);
            seen[pick.index2] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn no_priority_names_covers_all_combinations() {
        let g1 = members(&["A", "B"]);
        let g2 = members(&["C", "D"]);
        let mut counts = [[0u32; 2]; 2];
        for nonce in 0..400 {
            let pick = pick_pair(&g1, &g2, &PcgRng, 7, nonce).unwrap();
            counts[pick.index1][pick.index2] += 1;
        }
        for row in counts {
            for count in row {
                // Roughly uniform: each of the 4 combinations should land
                // well away from zero over 400 trials.
                assert!(count > 40, "combination starved: {counts:?}");
            }
        }
    }

    #[test]
    fn empty_side_yields_none() {
        assert!(pick_pair(&[], &members(&["A"]), &PcgRng, 0, 0).is_none());
        assert!(pick_pair(&members(&["A"]), &[], &PcgRng, 0, 0).is_none());
    }
}
