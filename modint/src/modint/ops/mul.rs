use std::ops::Mul;

use num_bigint::BigInt;
use num_traits::Zero;

use crate::coerce::{BinaryOp, Operand, Scalar};
use crate::reduce::ReduceMul;
use crate::{ModInt, ModIntError};

use super::expect_op;

impl ModInt {
    /// Calculates `self * rhs`.
    ///
    /// - With a [`ModInt`] of the same modulus, this is the usual modular product.
    /// - With a plain integer `k != 0`, the value *and* the modulus are scaled
    ///   by `k`: `(v, m) * k = (v * k, m * k)`. With `k == 0` the result is
    ///   zero in the same system.
    ///
    /// Plain integers are never promoted here, so the conversion policy does
    /// not apply.
    ///
    /// # Errors
    ///
    /// - [`ModIntError::IncompatibleModulus`] for a [`ModInt`] of another modulus.
    /// - [`ModIntError::InvalidModulus`] for a negative `k`, as the scaled
    ///   modulus would be negative.
    /// - [`ModIntError::Unsupported`] for an unsupported operand.
    #[inline]
    pub fn try_mul(&self, rhs: impl Into<Operand>) -> Result<ModInt, ModIntError> {
        self.mul_impl(BinaryOp::Mul, rhs.into())
    }

    /// Calculates `lhs * self`, see [`ModInt::try_mul`].
    #[inline]
    pub fn try_rmul(&self, lhs: impl Into<Operand>) -> Result<ModInt, ModIntError> {
        self.mul_impl(BinaryOp::RMul, lhs.into())
    }

    pub(super) fn mul_impl(&self, op: BinaryOp, other: Operand) -> Result<ModInt, ModIntError> {
        let system = self.system();
        match self.coerce_scalar(op.name(), other)? {
            Scalar::Modular(other) => Ok(ModInt::with_modulus(
                system.reduce_mul(self.value(), other.value()),
                system.clone(),
            )),
            Scalar::Plain(k) if k.is_zero() => {
                Ok(ModInt::with_modulus(BigInt::zero(), system.clone()))
            }
            Scalar::Plain(k) => ModInt::new(self.value() * &k, self.modulus() * &k),
        }
    }
}

impl<R: Into<Operand>> Mul<R> for &ModInt {
    type Output = ModInt;

    /// # Panics
    ///
    /// Panics where [`ModInt::try_mul`] fails.
    #[inline]
    #[track_caller]
    fn mul(self, rhs: R) -> Self::Output {
        expect_op(self.try_mul(rhs))
    }
}

impl<R: Into<Operand>> Mul<R> for ModInt {
    type Output = ModInt;

    #[inline]
    #[track_caller]
    fn mul(self, rhs: R) -> Self::Output {
        expect_op(self.try_mul(rhs))
    }
}
