//! This module defines some traits for modular arithmetic.

use crate::ModIntError;

/// The modulo operation.
pub trait Reduce<T> {
    /// Output type.
    type Output;

    /// Calculates `value (mod modulus)` where `self` is modulus.
    ///
    /// The result is in `[0, modulus)` for any sign of `value`.
    fn reduce(self, value: T) -> Self::Output;
}

/// The modular addition.
pub trait ReduceAdd<T, B = T> {
    /// Output type.
    type Output;

    /// Calculates `a + b (mod modulus)` where `self` is modulus.
    fn reduce_add(self, a: T, b: B) -> Self::Output;
}

/// The modular subtraction.
pub trait ReduceSub<T, B = T> {
    /// Output type.
    type Output;

    /// Calculates `a - b (mod modulus)` where `self` is modulus.
    fn reduce_sub(self, a: T, b: B) -> Self::Output;
}

/// The modular negation.
pub trait ReduceNeg<T> {
    /// Output type.
    type Output;

    /// Calculates `-value (mod modulus)` where `self` is modulus.
    fn reduce_neg(self, value: T) -> Self::Output;
}

/// The modular multiplication.
pub trait ReduceMul<T, B = T> {
    /// Output type.
    type Output;

    /// Calculates `a * b (mod modulus)` where `self` is modulus.
    fn reduce_mul(self, a: T, b: B) -> Self::Output;
}

/// The modular exponentiation.
pub trait ReduceExp<T, E> {
    /// Output type.
    type Output;

    /// Calculates `base^exp (mod modulus)` where `self` is modulus.
    fn reduce_exp(self, base: T, exp: E) -> Self::Output;
}

/// Try to calculate the multiplicative inverse.
pub trait TryReduceInv<T> {
    /// Output type.
    type Output;

    /// Try to calculate `value^(-1) (mod modulus)` where `self` is modulus.
    ///
    /// # Errors
    ///
    /// If no such inverse exists, a [`ModIntError::NotInvertible`] will be returned.
    fn try_reduce_inv(self, value: T) -> Result<Self::Output, ModIntError>;
}
