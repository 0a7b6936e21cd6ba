//! The `Money` value type: an exact-integer advertising price convertible
//! between CPM, dollars per instance, and micros per instance.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::error::ParseMoneyError;

// ─────────────────────────────────────────────────────────────────────────────
// Conversion Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Scales a cost per mille down to dollars per instance.
pub const CPM_TO_DOLLARS_1X: f64 = 1.0 / 1e3; // 0.001
/// Scales dollars per instance up to micros per instance.
pub const DOLLARS_1X_TO_MICROS_1X: f64 = 1e6; // 1_000_000
/// Scales a cost per mille down to micros per instance.
pub const CPM_TO_MICROS_1X: f64 = CPM_TO_DOLLARS_1X * DOLLARS_1X_TO_MICROS_1X; // 1_000

/// Scales dollars per instance up to a cost per mille.
pub const DOLLARS_1X_TO_CPM: f64 = 1e3; // 1_000
/// Scales micros per instance down to dollars per instance.
pub const MICROS_1X_TO_DOLLARS_1X: f64 = 1.0 / 1e6; // 0.000001
/// Scales micros per instance up to a cost per mille.
pub const MICROS_1X_TO_CPM: f64 = DOLLARS_1X_TO_CPM * MICROS_1X_TO_DOLLARS_1X; // 0.001

// ─────────────────────────────────────────────────────────────────────────────
// Money
// ─────────────────────────────────────────────────────────────────────────────

/// An advertising price, stored as an exact count of micro-units per one
/// priced instance (impression, click, item).
///
/// One unit = 1,000,000 micro-units = one dollar-equivalent for a single
/// instance. The stored integer is the single source of truth: the CPM and
/// dollar accessors are lossy views computed on demand, and the only lossy
/// step on the way in is a single truncation at construction time. Keeping
/// the representation integral means repeated conversions never drift.
///
/// Sign is unconstrained: negative prices are representable, and callers
/// that disallow them validate at their own boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    /// Price in micros per instance.
    micros_per_1x: i64,
}

impl Money {
    /// A price of zero micros.
    pub const ZERO: Money = Money { micros_per_1x: 0 };

    /// Creates a `Money` from a cost per mille, the price of one thousand
    /// instances.
    ///
    /// The value is scaled down to dollars per instance and handed to
    /// [`Money::from_dollars_per_1x`], so truncation happens exactly once,
    /// at the dollars→micros step, no matter which entry point is used.
    pub fn from_cost_per_mille(value: f64) -> Self {
        Self::from_dollars_per_1x(value * CPM_TO_DOLLARS_1X)
    }

    /// Pure synonym of [`Money::from_cost_per_mille`], under the name the
    /// advertising world quotes in.
    pub fn from_cpm(value: f64) -> Self {
        Self::from_cost_per_mille(value)
    }

    /// Creates a `Money` from a price in dollars per single instance.
    ///
    /// The scaled value is truncated toward zero, not rounded: `0.9999999`
    /// dollars is `999999` micros. Results beyond the `i64` range saturate
    /// at the bounds and `NaN` becomes zero, following Rust's float-to-int
    /// cast semantics.
    pub fn from_dollars_per_1x(value: f64) -> Self {
        Self::from_micros_per_1x((value * DOLLARS_1X_TO_MICROS_1X) as i64)
    }

    /// Creates a `Money` directly from a count of micros per instance.
    /// No conversion is performed.
    pub fn from_micros_per_1x(micros: i64) -> Self {
        Self {
            micros_per_1x: micros,
        }
    }

    /// Returns the stored micros per instance, unchanged.
    pub fn micros_per_1x(&self) -> i64 {
        self.micros_per_1x
    }

    /// Returns the price as a cost per mille, the per-thousand-impressions
    /// rate used to compare inventory and price campaigns.
    pub fn cost_per_mille(&self) -> f64 {
        self.micros_per_1x as f64 * MICROS_1X_TO_CPM
    }

    /// Pure synonym of [`Money::cost_per_mille`].
    pub fn cpm(&self) -> f64 {
        self.cost_per_mille()
    }

    /// Returns the price in dollars per single instance.
    pub fn dollars_per_1x(&self) -> f64 {
        self.micros_per_1x as f64 * MICROS_1X_TO_DOLLARS_1X
    }

    /// Returns true if the price is exactly zero micros.
    pub fn is_zero(&self) -> bool {
        self.micros_per_1x == 0
    }

    /// Returns true if the price is below zero micros.
    pub fn is_negative(&self) -> bool {
        self.micros_per_1x < 0
    }

    /// Adds two prices, clamping at the `i64` bounds instead of overflowing.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money::from_micros_per_1x(self.micros_per_1x.saturating_add(other.micros_per_1x))
    }

    /// Subtracts a price, clamping at the `i64` bounds instead of
    /// overflowing.
    pub fn saturating_sub(&self, other: Money) -> Money {
        Money::from_micros_per_1x(self.micros_per_1x.saturating_sub(other.micros_per_1x))
    }

    /// Checked addition - returns `None` if the sum leaves the micros range.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.micros_per_1x
            .checked_add(other.micros_per_1x)
            .map(Money::from_micros_per_1x)
    }

    /// Checked subtraction - returns `None` if the difference leaves the
    /// micros range.
    pub fn checked_sub(&self, other: Money) -> Option<Money> {
        self.micros_per_1x
            .checked_sub(other.micros_per_1x)
            .map(Money::from_micros_per_1x)
    }

    /// Formats the price as a cost per mille with six digits after the
    /// decimal point, e.g. `$123456.789000(CPM)`.
    pub fn cost_per_mille_string(&self) -> String {
        format!("${:.6}(CPM)", self.cost_per_mille())
    }

    /// Pure synonym of [`Money::cost_per_mille_string`].
    pub fn cpm_string(&self) -> String {
        self.cost_per_mille_string()
    }

    /// Formats the price in dollars per instance with six digits after the
    /// decimal point, e.g. `$123.456789(1x)`.
    pub fn dollars_per_1x_string(&self) -> String {
        format!("${:.6}(1x)", self.dollars_per_1x())
    }
}

/// The canonical form: the signed micros count, e.g. `µ123456789(1x)`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "µ{}(1x)", self.micros_per_1x)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseMoneyError;

    /// Parses the canonical `µ<micros>(1x)` form produced by
    /// [`fmt::Display`]. The dollar-formatted views are lossy and have no
    /// inverse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let micros = s
            .strip_prefix('µ')
            .and_then(|rest| rest.strip_suffix("(1x)"))
            .ok_or_else(|| ParseMoneyError::UnrecognizedFormat(s.to_string()))?;
        Ok(Money::from_micros_per_1x(micros.parse()?))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money::from_micros_per_1x(self.micros_per_1x + rhs.micros_per_1x)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money::from_micros_per_1x(self.micros_per_1x - rhs.micros_per_1x)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}
