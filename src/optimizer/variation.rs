use crate::script::{CandidateId, Mapping};
use fastrand::Rng;

/// Draws a fresh mapping: every symbol slot gets an independent uniform
/// candidate.
pub fn random_mapping(rng: &mut Rng, symbol_count: usize, candidate_count: usize) -> Mapping {
    (0..symbol_count)
        .map(|_| rng.u16(0..candidate_count as CandidateId))
        .collect()
}

/// Two-point segment exchange between a pair of mappings. Both cut points
/// are drawn once for the pair; the half-open segment between them is
/// swapped, so equal cuts leave both parents untouched.
pub fn crossover_segment(a: &mut Mapping, b: &mut Mapping, rng: &mut Rng) {
    let len = a.len();
    if len < 2 {
        return;
    }
    let mut lo = rng.usize(0..len);
    let mut hi = rng.usize(0..len);
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }
    for i in lo..hi {
        std::mem::swap(&mut a[i], &mut b[i]);
    }
}

/// Position-shuffle mutation: sweeps the slots and swaps each with a
/// uniformly drawn partner, each swap taken independently with
/// probability 0.5. Slots keep their meaning; values get permuted.
pub fn mutate_shuffle(mapping: &mut Mapping, rng: &mut Rng) {
    let len = mapping.len();
    if len < 2 {
        return;
    }
    for i in 0..len {
        if rng.bool() {
            let j = rng.usize(0..len);
            mapping.swap(i, j);
        }
    }
}
