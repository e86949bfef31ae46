use std::ops::Div;

use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::arith::Xgcd;
use crate::coerce::{BinaryOp, Operand};
use crate::{ModInt, ModIntError};

use super::expect_op;

impl ModInt {
    /// Calculates `self / rhs`.
    ///
    /// The division is exact on the stored value: for a divisor `d`
    /// (a plain integer, or the value of a [`ModInt`] of the same modulus)
    /// the result is `(v / d, m / gcd(m, d))`. This undoes the modulus
    /// scaling of [`ModInt::try_mul`].
    ///
    /// # Errors
    ///
    /// - [`ModIntError::NegativeDivisor`] if `d < 0`.
    /// - [`ModIntError::DivideByZero`] if `d == 0`.
    /// - [`ModIntError::NotDivisible`] if `v mod d != 0`.
    /// - [`ModIntError::InvalidModulus`] if the shrunk modulus falls below 2.
    /// - [`ModIntError::IncompatibleModulus`] or [`ModIntError::Unsupported`]
    ///   from the coercion of `rhs`.
    #[inline]
    pub fn try_div(&self, rhs: impl Into<Operand>) -> Result<ModInt, ModIntError> {
        self.div_impl(BinaryOp::TrueDiv, rhs.into())
    }

    /// Calculates `self // rhs`, which is the same as [`ModInt::try_div`].
    #[inline]
    pub fn try_floor_div(&self, rhs: impl Into<Operand>) -> Result<ModInt, ModIntError> {
        self.div_impl(BinaryOp::FloorDiv, rhs.into())
    }

    pub(super) fn div_impl(&self, op: BinaryOp, other: Operand) -> Result<ModInt, ModIntError> {
        let op = op.name();
        let divisor = self.coerce_scalar(op, other)?.into_integer();

        if divisor.is_negative() {
            return Err(ModIntError::NegativeDivisor {
                op,
                value: self.value().clone(),
                divisor,
            });
        }
        if divisor.is_zero() {
            return Err(ModIntError::DivideByZero {
                op,
                value: self.value().clone(),
                modulus: self.modulus().clone(),
            });
        }

        let (quotient, remainder) = self.value().div_mod_floor(&divisor);
        if !remainder.is_zero() {
            return Err(ModIntError::NotDivisible {
                op,
                value: self.value().clone(),
                divisor,
                remainder,
            });
        }

        let modulus = self.modulus() / Xgcd::gcd(self.modulus(), &divisor);
        ModInt::new(quotient, modulus)
    }
}

impl<R: Into<Operand>> Div<R> for &ModInt {
    type Output = ModInt;

    /// # Panics
    ///
    /// Panics where [`ModInt::try_div`] fails.
    #[inline]
    #[track_caller]
    fn div(self, rhs: R) -> Self::Output {
        expect_op(self.try_div(rhs))
    }
}

impl<R: Into<Operand>> Div<R> for ModInt {
    type Output = ModInt;

    #[inline]
    #[track_caller]
    fn div(self, rhs: R) -> Self::Output {
        expect_op(self.try_div(rhs))
    }
}
