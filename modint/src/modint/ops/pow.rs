use num_traits::{Pow, Signed};

use crate::coerce::{BinaryOp, Operand};
use crate::reduce::{ReduceExp, TryReduceInv};
use crate::{ModInt, ModIntError};

use super::expect_op;

impl ModInt {
    /// Calculates `self^exp`.
    ///
    /// The exponent is a plain integer, or the value of a [`ModInt`] of the
    /// same modulus. A negative exponent raises the inverse of `self`, which
    /// only exists if `gcd(value, modulus) == 1`. The modulus never changes.
    ///
    /// # Errors
    ///
    /// - [`ModIntError::NotInvertible`] for a negative exponent on a
    ///   non-invertible value.
    /// - [`ModIntError::IncompatibleModulus`] or [`ModIntError::Unsupported`]
    ///   from the coercion of `exp`.
    #[inline]
    pub fn try_pow(&self, exp: impl Into<Operand>) -> Result<ModInt, ModIntError> {
        self.pow_impl(BinaryOp::Pow, exp.into())
    }

    /// Calculates `base^self` in the modular system of `self`.
    ///
    /// The value of `self` is never negative, so no inverse is involved.
    #[inline]
    pub fn try_rpow(&self, base: impl Into<Operand>) -> Result<ModInt, ModIntError> {
        self.rpow_impl(BinaryOp::RPow, base.into())
    }

    pub(super) fn pow_impl(&self, op: BinaryOp, other: Operand) -> Result<ModInt, ModIntError> {
        let exp = self.coerce_scalar(op.name(), other)?.into_integer();
        let system = self.system();

        let value = if exp.is_negative() {
            if !self.is_invertible() {
                return Err(ModIntError::NotInvertible {
                    value: self.value().clone(),
                    modulus: self.modulus().clone(),
                    exponent: exp,
                });
            }
            let inv = system.try_reduce_inv(self.value())?;
            system.reduce_exp(&inv, exp.magnitude())
        } else {
            system.reduce_exp(self.value(), exp.magnitude())
        };

        Ok(ModInt::with_modulus(value, system.clone()))
    }

    pub(super) fn rpow_impl(&self, op: BinaryOp, other: Operand) -> Result<ModInt, ModIntError> {
        let base = self.coerce_scalar(op.name(), other)?.into_integer();
        let system = self.system();
        Ok(ModInt::with_modulus(
            system.reduce_exp(&base, self.value().magnitude()),
            system.clone(),
        ))
    }
}

impl<R: Into<Operand>> Pow<R> for &ModInt {
    type Output = ModInt;

    /// # Panics
    ///
    /// Panics where [`ModInt::try_pow`] fails.
    #[inline]
    #[track_caller]
    fn pow(self, exp: R) -> Self::Output {
        expect_op(self.try_pow(exp))
    }
}

impl<R: Into<Operand>> Pow<R> for ModInt {
    type Output = ModInt;

    #[inline]
    #[track_caller]
    fn pow(self, exp: R) -> Self::Output {
        expect_op(self.try_pow(exp))
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use num_traits::One;
    use rand::prelude::*;

    use super::*;

    fn mi(value: i64, modulus: i64) -> ModInt {
        ModInt::new(value, modulus).unwrap()
    }

    #[test]
    fn test_pow() {
        assert_eq!(mi(3, 7).try_pow(0).unwrap(), mi(1, 7));
        assert_eq!(mi(3, 7).try_pow(4).unwrap(), mi(81, 7));
        assert_eq!(mi(0, 7).try_pow(0).unwrap(), mi(1, 7));
        assert_eq!(mi(3, 7).try_pow(mi(4, 7)).unwrap(), mi(4, 7));
        assert_eq!(mi(2, 10).pow(10u32), mi(1024, 10));

        let c = mi(5, 13).try_pow(3).unwrap();
        assert_eq!(c.modulus(), &BigInt::from(13));
    }

    #[test]
    fn test_inverse() {
        let mut rng = thread_rng();
        let p: i64 = 1000000007;

        let a = mi(rng.gen_range(1..p), p);
        let inv = a.try_pow(-1).unwrap();
        assert!((a.value() * inv.value() % p).is_one());

        let c = a.try_pow(-3).unwrap();
        assert_eq!(c.try_mul(a.try_pow(3).unwrap()).unwrap(), mi(1, p));

        assert_eq!(mi(3, 10).try_pow(-1).unwrap(), mi(7, 10));
    }

    #[test]
    fn test_not_invertible() {
        assert_eq!(
            mi(4, 10).try_pow(-1),
            Err(ModIntError::NotInvertible {
                value: BigInt::from(4),
                modulus: BigInt::from(10),
                exponent: BigInt::from(-1),
            })
        );
        assert!(matches!(
            mi(0, 10).try_pow(-2),
            Err(ModIntError::NotInvertible { .. })
        ));
        // non-negative exponents do not need an inverse
        assert_eq!(mi(4, 10).try_pow(2).unwrap(), mi(6, 10));
    }

    #[test]
    fn test_rpow() {
        assert_eq!(mi(3, 7).try_rpow(2).unwrap(), mi(1, 7));
        assert_eq!(mi(3, 7).try_rpow(-2).unwrap(), mi(6, 7));
        assert_eq!(mi(2, 7).try_rpow(mi(3, 7)).unwrap(), mi(2, 7));
        assert!(matches!(
            mi(2, 7).try_rpow(mi(3, 8)),
            Err(ModIntError::IncompatibleModulus { op: "rpow", .. })
        ));
    }
}
