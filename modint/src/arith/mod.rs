//! Define arithmetic operations and traits.

mod gcd;

pub use gcd::Xgcd;
