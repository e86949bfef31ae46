//! This module defines the errors that
//! may occur while building or operating on modular integers.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModIntError {
    /// Error that occurs when the given value can not be read as an integer.
    #[error("Value {value} is not an integer!")]
    InvalidValue {
        /// The rejected value, as given.
        value: String,
    },
    /// Error that occurs when the given modulus is less than 2.
    #[error("Modulus must be an integer not less than 2, got {modulus}!")]
    InvalidModulus {
        /// The rejected modulus.
        modulus: BigInt,
    },
    /// Error that occurs when two numbers from different modular systems meet.
    #[error(
        "Cannot {op} numbers from different modular systems (mod {lhs_modulus} and mod {rhs_modulus}) \
         without first aligning them to a common modulus!"
    )]
    IncompatibleModulus {
        /// Operation name.
        op: &'static str,
        /// Modulus of the left operand.
        lhs_modulus: BigInt,
        /// Modulus of the right operand.
        rhs_modulus: BigInt,
    },
    /// Error that occurs when a plain integer would be promoted while conversion is disabled.
    #[error("Cannot {op} plain integer {value} into the modular system mod {modulus}: conversion is disabled!")]
    ConversionDisabled {
        /// Operation name.
        op: &'static str,
        /// The plain integer that would have been promoted.
        value: BigInt,
        /// Modulus of the target system.
        modulus: BigInt,
    },
    /// Error that occurs when a binary operation gets other than one operand.
    #[error("Operation {op} takes exactly {expected} operand, {found} given!")]
    Arity {
        /// Operation name.
        op: &'static str,
        /// Expected operand count.
        expected: usize,
        /// Operand count actually given.
        found: usize,
    },
    /// Error that occurs when the given value has no inverse element with the given modulus.
    #[error("Value {value} has no inverse element with the modulus {modulus}, cannot raise it to {exponent}!")]
    NotInvertible {
        /// The value being inverted.
        value: BigInt,
        /// The modulus.
        modulus: BigInt,
        /// The requested exponent.
        exponent: BigInt,
    },
    /// Error that occurs when dividing by a negative number.
    #[error("Cannot {op} {value} by negative divisor {divisor}!")]
    NegativeDivisor {
        /// Operation name.
        op: &'static str,
        /// The dividend.
        value: BigInt,
        /// The divisor.
        divisor: BigInt,
    },
    /// Error that occurs when dividing by zero.
    #[error("Cannot {op} {value} (mod {modulus}) by zero!")]
    DivideByZero {
        /// Operation name.
        op: &'static str,
        /// The dividend.
        value: BigInt,
        /// Modulus of the dividend.
        modulus: BigInt,
    },
    /// Error that occurs when the dividend is not a multiple of the divisor.
    #[error("Cannot {op} {value} by {divisor}: {value} mod {divisor} = {remainder} != 0!")]
    NotDivisible {
        /// Operation name.
        op: &'static str,
        /// The dividend.
        value: BigInt,
        /// The divisor.
        divisor: BigInt,
        /// The non-zero remainder.
        remainder: BigInt,
    },
    /// Error that occurs when a numeral base is outside `[2, 36]`.
    #[error("Base {base} is not in the range [2, 36]!")]
    InvalidBase {
        /// The rejected base.
        base: u32,
    },
    /// Error that occurs when a parameter name is empty or contains whitespace.
    #[error("Parameter name {name:?} must be a single token without whitespace!")]
    InvalidParamName {
        /// The rejected name.
        name: String,
    },
    /// The operation is not defined for this operand.
    #[error("Operation {op} is not supported with operand {operand}!")]
    Unsupported {
        /// Operation name.
        op: &'static str,
        /// Description of the operand.
        operand: String,
    },
}
