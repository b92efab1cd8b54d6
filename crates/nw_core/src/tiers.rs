//! Magnitude tiers: hundred up to quadrillion.
//!
//! Values below 100 are spelled directly from `vocab`; every larger value
//! falls into exactly one tier, chosen as the largest divisor not exceeding
//! it. The table stops at quadrillion because `MAX / 10^15 == 9`.

use crate::input::MAX;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Tier {
    Hundred,
    Thousand,
    Million,
    Billion,
    Trillion,
    Quadrillion,
}

/// Ascending by divisor.
pub const TIERS: [Tier; 6] = [
    Tier::Hundred,
    Tier::Thousand,
    Tier::Million,
    Tier::Billion,
    Tier::Trillion,
    Tier::Quadrillion,
];

impl Tier {
    pub const fn divisor(self) -> u64 {
        match self {
            Tier::Hundred => 100,
            Tier::Thousand => 1_000,
            Tier::Million => 1_000_000,
            Tier::Billion => 1_000_000_000,
            Tier::Trillion => 1_000_000_000_000,
            Tier::Quadrillion => 1_000_000_000_000_000,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Tier::Hundred => "hundred",
            Tier::Thousand => "thousand",
            Tier::Million => "million",
            Tier::Billion => "billion",
            Tier::Trillion => "trillion",
            Tier::Quadrillion => "quadrillion",
        }
    }

    /// Thousand-scale groups take the optional comma; "hundred" never does.
    #[inline]
    pub const fn is_group(self) -> bool {
        !matches!(self, Tier::Hundred)
    }

    /// Tier for `n`, or `None` below 100. `n` must not exceed `MAX`.
    pub fn for_value(n: u64) -> Option<Tier> {
        debug_assert!(n <= MAX);
        TIERS.iter().rev().copied().find(|t| n >= t.divisor())
    }

    /// `(multiplier, remainder)` of `n` at this tier.
    #[inline]
    pub const fn split(self, n: u64) -> (u64, u64) {
        (n / self.divisor(), n % self.divisor())
    }
}
