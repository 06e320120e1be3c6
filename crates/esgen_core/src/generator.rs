//! Random enumerated-set generation.
//!
//! One uniform draw in `[0, 1)` per key, in ascending key order; the key is a
//! member when the draw is `<=` the membership probability.

use crate::enum_set::EnumSet;
use crate::probability::MembershipProbability;
use crate::render::go_literal;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws a membership flag for every key in `0..max_size`.
pub fn sample_enum_set<R: Rng + ?Sized>(
    rng: &mut R,
    max_size: u64,
    p: MembershipProbability,
) -> EnumSet {
    let mut es = EnumSet::with_max(max_size);
    for i in 0..max_size {
        let r: f64 = rng.random();
        es.set(i, p.admits(r));
    }
    tracing::debug!(
        max_size,
        probability = p.get(),
        members = es.member_count(),
        "sampled enum set"
    );
    es
}

pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    max_size: u64,
    p: MembershipProbability,
) -> String {
    go_literal(&sample_enum_set(rng, max_size, p))
}

/// Go map literal for a fresh random set, drawn from the thread-local RNG.
pub fn generate(max_size: u64, p: MembershipProbability) -> String {
    generate_with_rng(&mut rand::rng(), max_size, p)
}

/// Same output for the same `seed`.
pub fn generate_seeded(seed: u64, max_size: u64, p: MembershipProbability) -> String {
    generate_with_rng(&mut StdRng::seed_from_u64(seed), max_size, p)
}
