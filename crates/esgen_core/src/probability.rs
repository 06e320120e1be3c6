use crate::errors::{EsgenError, Result};
use serde::{Deserialize, Serialize};

/// Per-key likelihood that a value is drawn as a member. Always finite and in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MembershipProbability(f64);

impl MembershipProbability {
    pub const NEVER: Self = Self(0.0);
    pub const ALWAYS: Self = Self(1.0);

    pub fn new(p: f64) -> Result<Self> {
        if p.is_finite() && (0.0..=1.0).contains(&p) {
            Ok(Self(p))
        } else {
            Err(EsgenError::InvalidProbability(p))
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    /// `r` is a uniform draw in `[0, 1)`. Inclusive on the boundary.
    #[inline]
    pub fn admits(self, r: f64) -> bool {
        r <= self.0
    }
}

impl Default for MembershipProbability {
    fn default() -> Self {
        Self(crate::consts::DEFAULT_MEMBERSHIP_PROBABILITY)
    }
}

impl TryFrom<f64> for MembershipProbability {
    type Error = EsgenError;

    fn try_from(p: f64) -> Result<Self> {
        Self::new(p)
    }
}

impl From<MembershipProbability> for f64 {
    fn from(p: MembershipProbability) -> f64 {
        p.0
    }
}

impl std::str::FromStr for MembershipProbability {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let p: f64 = s.trim().parse().map_err(|e| format!("{e}"))?;
        Self::new(p).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_closed_unit_interval() {
        for p in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(MembershipProbability::new(p).unwrap().get(), p);
        }
    }

    #[test]
    fn rejects_out_of_range_and_nan() {
        for p in [-0.01, 1.0001, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                MembershipProbability::new(p),
                Err(EsgenError::InvalidProbability(_))
            ));
        }
    }

    #[test]
    fn boundary_draw_is_admitted() {
        let p = MembershipProbability::new(0.25).unwrap();
        assert!(p.admits(0.25));
        assert!(p.admits(0.0));
        assert!(!p.admits(0.2500001));
        assert!(MembershipProbability::ALWAYS.admits(0.999_999));
    }

    #[test]
    fn parses_from_str() {
        let p: MembershipProbability = " 0.75 ".parse().unwrap();
        assert_eq!(p.get(), 0.75);
        assert!("abc".parse::<MembershipProbability>().is_err());
        assert!("2".parse::<MembershipProbability>().is_err());
    }

    #[test]
    fn serde_rejects_invalid() {
        assert!(serde_json::from_str::<MembershipProbability>("1.5").is_err());
        let p: MembershipProbability = serde_json::from_str("0.5").unwrap();
        assert_eq!(p.get(), 0.5);
    }
}
