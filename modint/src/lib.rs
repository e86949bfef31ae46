#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Integers bound to a modular system.
//!
//! A [`ModInt`] pairs a value with a modulus `m ≥ 2` and keeps the value in
//! `[0, m)`. Operations between values of different moduli are refused.
//! Plain integers join an operation according to a [`ConversionPolicy`].
//!
//! ```
//! use modint::ModInt;
//!
//! let a = ModInt::new(7, 10).unwrap();
//!
//! // multiplying by a plain integer scales the modulus too
//! let b = &a * 3;
//! assert_eq!(format!("{b:?}"), "ModInt(21, mod=30)");
//!
//! // and dividing undoes it
//! assert_eq!(b / 3, a);
//! ```

pub mod arith;
pub mod coerce;
pub mod error;
pub mod modulus;
pub mod policy;
pub mod reduce;

mod modint;

pub use coerce::{BinaryOp, Operand, Outcome};
pub use error::ModIntError;
pub use modint::ModInt;
pub use modulus::Modulus;
pub use policy::{
    conversion_allowed, default_policy, set_conversion, toggle_conversion, ConversionPolicy,
    DEFAULT_CONVERSION_POLICY,
};
