//! Arithmetic and relational operations of [`ModInt`].
//!
//! Every operation comes in two flavours. The `try_*` methods return a
//! [`Result`]. The operator traits (`+`, `-`, `*`, `/`, [`Pow`]) call them and
//! panic with the error message on failure.

use std::ops::{Add, Mul, Sub};

use num_bigint::BigInt;
use num_traits::Pow;

use crate::coerce::{BinaryOp, Operand, Outcome};
use crate::policy::default_policy;
use crate::{ConversionPolicy, ModInt, ModIntError};

mod add;
mod cmp;
mod div;
mod mul;
mod neg;
mod pow;

#[inline]
#[track_caller]
fn expect_op(result: Result<ModInt, ModIntError>) -> ModInt {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

impl ModInt {
    /// Applies `op` to `self` and the given operands, with the process-wide
    /// conversion policy.
    ///
    /// See [`ModInt::apply_with`].
    #[inline]
    pub fn apply(&self, op: BinaryOp, operands: &[Operand]) -> Result<Outcome, ModIntError> {
        self.apply_with(op, operands, default_policy())
    }

    /// Applies `op` to `self` and the given operands.
    ///
    /// # Errors
    ///
    /// - [`ModIntError::Arity`] unless exactly one operand is given.
    /// - [`ModIntError::Unsupported`] for the operations the modular system
    ///   leaves undefined: remainder, divmod, bitwise, shifts and the
    ///   reflected division family.
    /// - Whatever the operation itself reports.
    pub fn apply_with(
        &self,
        op: BinaryOp,
        operands: &[Operand],
        policy: &ConversionPolicy,
    ) -> Result<Outcome, ModIntError> {
        let [other] = operands else {
            return Err(ModIntError::Arity {
                op: op.name(),
                expected: 1,
                found: operands.len(),
            });
        };
        let other = other.clone();

        let outcome = match op {
            BinaryOp::Add | BinaryOp::RAdd => Outcome::Value(self.add_impl(op, other, policy)?),
            BinaryOp::Sub => Outcome::Value(self.sub_impl(op, other, policy)?),
            BinaryOp::RSub => Outcome::Value(self.rsub_impl(op, other, policy)?),
            BinaryOp::Mul | BinaryOp::RMul => Outcome::Value(self.mul_impl(op, other)?),
            BinaryOp::Pow => Outcome::Value(self.pow_impl(op, other)?),
            BinaryOp::RPow => Outcome::Value(self.rpow_impl(op, other)?),
            BinaryOp::TrueDiv | BinaryOp::FloorDiv => Outcome::Value(self.div_impl(op, other)?),
            BinaryOp::Eq => Outcome::Truth(self.eq_operand(other, policy)),
            BinaryOp::Ne => Outcome::Truth(!self.eq_operand(other, policy)),
            BinaryOp::Lt => Outcome::Truth(self.cmp_impl(op.name(), other, policy)?.is_lt()),
            BinaryOp::Le => Outcome::Truth(self.cmp_impl(op.name(), other, policy)?.is_le()),
            BinaryOp::Gt => Outcome::Truth(self.cmp_impl(op.name(), other, policy)?.is_gt()),
            BinaryOp::Ge => Outcome::Truth(self.cmp_impl(op.name(), other, policy)?.is_ge()),
            BinaryOp::RTrueDiv
            | BinaryOp::RFloorDiv
            | BinaryOp::Mod
            | BinaryOp::RMod
            | BinaryOp::DivMod
            | BinaryOp::BitAnd
            | BinaryOp::BitOr
            | BinaryOp::BitXor
            | BinaryOp::Shl
            | BinaryOp::Shr => {
                return Err(ModIntError::Unsupported {
                    op: op.name(),
                    operand: other.describe(),
                })
            }
        };
        Ok(outcome)
    }
}

macro_rules! impl_reflected_ops {
    ($($t:ty),*) => {$(
        impl Add<ModInt> for $t {
            type Output = ModInt;

            #[inline]
            fn add(self, rhs: ModInt) -> Self::Output {
                expect_op(rhs.try_radd(self))
            }
        }

        impl Add<&ModInt> for $t {
            type Output = ModInt;

            #[inline]
            fn add(self, rhs: &ModInt) -> Self::Output {
                expect_op(rhs.try_radd(self))
            }
        }

        impl Sub<ModInt> for $t {
            type Output = ModInt;

            #[inline]
            fn sub(self, rhs: ModInt) -> Self::Output {
                expect_op(rhs.try_rsub(self))
            }
        }

        impl Sub<&ModInt> for $t {
            type Output = ModInt;

            #[inline]
            fn sub(self, rhs: &ModInt) -> Self::Output {
                expect_op(rhs.try_rsub(self))
            }
        }

        impl Mul<ModInt> for $t {
            type Output = ModInt;

            #[inline]
            fn mul(self, rhs: ModInt) -> Self::Output {
                expect_op(rhs.try_rmul(self))
            }
        }

        impl Mul<&ModInt> for $t {
            type Output = ModInt;

            #[inline]
            fn mul(self, rhs: &ModInt) -> Self::Output {
                expect_op(rhs.try_rmul(self))
            }
        }

        impl Pow<ModInt> for $t {
            type Output = ModInt;

            #[inline]
            fn pow(self, rhs: ModInt) -> Self::Output {
                expect_op(rhs.try_rpow(self))
            }
        }

        impl Pow<&ModInt> for $t {
            type Output = ModInt;

            #[inline]
            fn pow(self, rhs: &ModInt) -> Self::Output {
                expect_op(rhs.try_rpow(self))
            }
        }
    )*};
}

impl_reflected_ops!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt, f32, f64, bool
);

#[cfg(test)]
mod tests {
    use super::*;

    fn mi(value: i64, modulus: i64) -> ModInt {
        ModInt::new(value, modulus).unwrap()
    }

    #[test]
    fn test_apply() {
        let a = mi(3, 5);
        let allow = ConversionPolicy::new(true);

        let sum = a
            .apply_with(BinaryOp::Add, &[Operand::from(4)], &allow)
            .unwrap();
        assert_eq!(sum, Outcome::Value(mi(2, 5)));

        let diff = a
            .apply_with(BinaryOp::RSub, &[Operand::from(1)], &allow)
            .unwrap();
        assert_eq!(diff.into_value(), Some(mi(3, 5)));

        let eq = a
            .apply_with(BinaryOp::Eq, &[Operand::from(8)], &allow)
            .unwrap();
        assert_eq!(eq.truth(), Some(true));

        let lt = a
            .apply_with(BinaryOp::Lt, &[Operand::from(mi(4, 5))], &allow)
            .unwrap();
        assert_eq!(lt.truth(), Some(true));
    }

    #[test]
    fn test_apply_arity() {
        let a = mi(3, 5);
        assert_eq!(
            a.apply(BinaryOp::Add, &[]),
            Err(ModIntError::Arity {
                op: "add",
                expected: 1,
                found: 0
            })
        );
        assert!(matches!(
            a.apply(BinaryOp::Mul, &[Operand::from(1), Operand::from(2)]),
            Err(ModIntError::Arity { found: 2, .. })
        ));
    }

    #[test]
    fn test_apply_undefined() {
        let a = mi(3, 5);
        for op in [
            BinaryOp::Mod,
            BinaryOp::RMod,
            BinaryOp::DivMod,
            BinaryOp::BitAnd,
            BinaryOp::BitOr,
            BinaryOp::BitXor,
            BinaryOp::Shl,
            BinaryOp::Shr,
            BinaryOp::RTrueDiv,
            BinaryOp::RFloorDiv,
        ] {
            assert!(matches!(
                a.apply(op, &[Operand::from(2)]),
                Err(ModIntError::Unsupported { .. })
            ));
        }
    }

    #[test]
    fn test_reflected() {
        let a = mi(3, 5);
        assert_eq!(2u8 * a.clone(), ModInt::new(6, 10).unwrap());
        assert_eq!(true * &a, a);
        assert_eq!(false * &a, mi(0, 5));
        assert_eq!(2.5 * &a, ModInt::new(6, 10).unwrap());
        assert_eq!(Pow::pow(2i64, &a), mi(3, 5));
        assert_eq!(Pow::pow(2.9f64, a), mi(3, 5));
    }
}
