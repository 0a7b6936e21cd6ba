//! # Ad Money
//!
//! Fixed-point money for advertising prices. A price is stored as an exact
//! `i64` count of micros per single priced instance (one impression, click,
//! or item; 1,000,000 micros per unit) and converted on demand to the two
//! floating-point views the ad world quotes in: CPM (cost per mille, the
//! price of a thousand instances) and dollars per instance.
//!
//! This crate has ZERO external IO dependencies - only the value type, its
//! conversion constants, and formatting. No validation layer: negative
//! prices are representable on purpose, and callers decide what signs they
//! accept.
//!
//! # Example
//! ```
//! use ad_money::Money;
//!
//! // A $0.50 CPM bid is half a dollar per thousand instances.
//! let bid = Money::from_cost_per_mille(0.50);
//! assert_eq!(bid.micros_per_1x(), 500);
//! assert_eq!(bid.to_string(), "µ500(1x)");
//!
//! // Construction truncates once; every view after that is exact math
//! // on the stored integer.
//! let price = Money::from_micros_per_1x(123_456_789);
//! assert_eq!(price.dollars_per_1x(), 123.456789);
//! assert_eq!(price.cost_per_mille_string(), "$123456.789000(CPM)");
//! ```

pub mod error;
pub mod money;

// Re-export commonly used types
pub use error::ParseMoneyError;
pub use money::{
    CPM_TO_DOLLARS_1X, CPM_TO_MICROS_1X, DOLLARS_1X_TO_CPM, DOLLARS_1X_TO_MICROS_1X,
    MICROS_1X_TO_CPM, MICROS_1X_TO_DOLLARS_1X, Money,
};
