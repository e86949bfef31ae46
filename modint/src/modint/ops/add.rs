use std::ops::{Add, Sub};

use crate::coerce::{BinaryOp, Operand};
use crate::policy::default_policy;
use crate::reduce::{ReduceAdd, ReduceSub};
use crate::{ConversionPolicy, ModInt, ModIntError};

use super::expect_op;

impl ModInt {
    /// Calculates `self + rhs`.
    ///
    /// Plain integers are promoted into the modular system of `self` when the
    /// process-wide policy allows it.
    ///
    /// # Errors
    ///
    /// [`ModIntError::IncompatibleModulus`], [`ModIntError::ConversionDisabled`]
    /// or [`ModIntError::Unsupported`] from the coercion of `rhs`.
    #[inline]
    pub fn try_add(&self, rhs: impl Into<Operand>) -> Result<ModInt, ModIntError> {
        self.add_impl(BinaryOp::Add, rhs.into(), default_policy())
    }

    /// Calculates `self + rhs` under the given conversion `policy`.
    #[inline]
    pub fn add_with(
        &self,
        rhs: impl Into<Operand>,
        policy: &ConversionPolicy,
    ) -> Result<ModInt, ModIntError> {
        self.add_impl(BinaryOp::Add, rhs.into(), policy)
    }

    /// Calculates `lhs + self`.
    #[inline]
    pub fn try_radd(&self, lhs: impl Into<Operand>) -> Result<ModInt, ModIntError> {
        self.add_impl(BinaryOp::RAdd, lhs.into(), default_policy())
    }

    /// Calculates `self - rhs`.
    ///
    /// # Errors
    ///
    /// Same as [`ModInt::try_add`].
    #[inline]
    pub fn try_sub(&self, rhs: impl Into<Operand>) -> Result<ModInt, ModIntError> {
        self.sub_impl(BinaryOp::Sub, rhs.into(), default_policy())
    }

    /// Calculates `self - rhs` under the given conversion `policy`.
    #[inline]
    pub fn sub_with(
        &self,
        rhs: impl Into<Operand>,
        policy: &ConversionPolicy,
    ) -> Result<ModInt, ModIntError> {
        self.sub_impl(BinaryOp::Sub, rhs.into(), policy)
    }

    /// Calculates `lhs - self`.
    #[inline]
    pub fn try_rsub(&self, lhs: impl Into<Operand>) -> Result<ModInt, ModIntError> {
        self.rsub_impl(BinaryOp::RSub, lhs.into(), default_policy())
    }

    /// Calculates `lhs - self` under the given conversion `policy`.
    #[inline]
    pub fn rsub_with(
        &self,
        lhs: impl Into<Operand>,
        policy: &ConversionPolicy,
    ) -> Result<ModInt, ModIntError> {
        self.rsub_impl(BinaryOp::RSub, lhs.into(), policy)
    }

    pub(super) fn add_impl(
        &self,
        op: BinaryOp,
        other: Operand,
        policy: &ConversionPolicy,
    ) -> Result<ModInt, ModIntError> {
        let other = self.coerce_promote(op.name(), other, policy)?;
        let system = self.system();
        Ok(ModInt::with_modulus(
            system.reduce_add(self.value(), other.value()),
            system.clone(),
        ))
    }

    pub(super) fn sub_impl(
        &self,
        op: BinaryOp,
        other: Operand,
        policy: &ConversionPolicy,
    ) -> Result<ModInt, ModIntError> {
        let other = self.coerce_promote(op.name(), other, policy)?;
        let system = self.system();
        Ok(ModInt::with_modulus(
            system.reduce_sub(self.value(), other.value()),
            system.clone(),
        ))
    }

    pub(super) fn rsub_impl(
        &self,
        op: BinaryOp,
        other: Operand,
        policy: &ConversionPolicy,
    ) -> Result<ModInt, ModIntError> {
        let other = self.coerce_promote(op.name(), other, policy)?;
        let system = self.system();
        Ok(ModInt::with_modulus(
            system.reduce_sub(other.value(), self.value()),
            system.clone(),
        ))
    }
}

impl<R: Into<Operand>> Add<R> for &ModInt {
    type Output = ModInt;

    /// # Panics
    ///
    /// Panics where [`ModInt::try_add`] fails.
    #[inline]
    #[track_caller]
    fn add(self, rhs: R) -> Self::Output {
        expect_op(self.try_add(rhs))
    }
}

impl<R: Into<Operand>> Add<R> for ModInt {
    type Output = ModInt;

    #[inline]
    #[track_caller]
    fn add(self, rhs: R) -> Self::Output {
        expect_op(self.try_add(rhs))
    }
}

impl<R: Into<Operand>> Sub<R> for &ModInt {
    type Output = ModInt;

    /// # Panics
    ///
    /// Panics where [`ModInt::try_sub`] fails.
    #[inline]
    #[track_caller]
    fn sub(self, rhs: R) -> Self::Output {
        expect_op(self.try_sub(rhs))
    }
}

impl<R: Into<Operand>> Sub<R> for ModInt {
    type Output = ModInt;

    #[inline]
    #[track_caller]
    fn sub(self, rhs: R) -> Self::Output {
        expect_op(self.try_sub(rhs))
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::*;

    fn mi(value: i64, modulus: i64) -> ModInt {
        ModInt::new(value, modulus).unwrap()
    }

    #[test]
    fn test_add() {
        let mut rng = thread_rng();
        let m: i64 = rng.gen_range(2..1 << 40);
        let a: i64 = rng.gen_range(0..m);
        let b: i64 = rng.gen_range(0..m);

        let c = mi(a, m).try_add(mi(b, m)).unwrap();
        assert_eq!(c, mi((a + b) % m, m));

        let c = mi(a, m).try_sub(mi(b, m)).unwrap();
        assert_eq!(c, mi((m + a - b) % m, m));

        let c = mi(a, m).try_rsub(mi(b, m)).unwrap();
        assert_eq!(c, mi((m + b - a) % m, m));
    }

    #[test]
    fn test_identity_and_inverse() {
        let a = mi(7, 11);
        assert_eq!(&a + mi(0, 11), a);
        assert_eq!(&a + (-&a), mi(0, 11));
        assert_eq!(&a - &a, mi(0, 11));
    }

    #[test]
    fn test_add_plain() {
        let allow = ConversionPolicy::new(true);
        let deny = ConversionPolicy::new(false);
        let a = mi(3, 5);

        assert_eq!(a.add_with(2, &allow).unwrap(), mi(0, 5));
        assert_eq!(a.sub_with(-2, &allow).unwrap(), mi(0, 5));
        assert_eq!(a.rsub_with(2, &allow).unwrap(), mi(4, 5));
        assert_eq!(a.add_with(true, &allow).unwrap(), mi(4, 5));
        assert_eq!(a.add_with(2.9, &allow).unwrap(), mi(0, 5));

        assert!(matches!(
            a.add_with(2, &deny),
            Err(ModIntError::ConversionDisabled { op: "add", .. })
        ));
        assert!(matches!(
            a.rsub_with(2, &deny),
            Err(ModIntError::ConversionDisabled { op: "rsub", .. })
        ));
        assert_eq!(a.add_with(mi(4, 5), &deny).unwrap(), mi(2, 5));
    }

    #[test]
    fn test_incompatible() {
        assert!(matches!(
            mi(1, 5).try_add(mi(1, 7)),
            Err(ModIntError::IncompatibleModulus { op: "add", .. })
        ));
        assert!(matches!(
            mi(1, 5).try_sub(mi(1, 7)),
            Err(ModIntError::IncompatibleModulus { op: "sub", .. })
        ));
    }

    #[test]
    #[should_panic(expected = "different modular systems")]
    fn test_add_panics() {
        let _ = mi(1, 5) + mi(1, 7);
    }
}
