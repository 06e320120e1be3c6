// crates/esgen_core/src/consts.rs

/// Opening line of a rendered Go map literal, newline included.
pub const GO_LITERAL_PREFIX: &str = "values :=map[uint64]bool{\n";
/// Closing line of a rendered Go map literal, newline included.
pub const GO_LITERAL_SUFFIX: &str = "}\n";

pub const DEFAULT_MAX_SIZE: u64 = 32;
pub const DEFAULT_MEMBERSHIP_PROBABILITY: f64 = 0.25;

const _: () = { assert!(DEFAULT_MAX_SIZE > 0); };
