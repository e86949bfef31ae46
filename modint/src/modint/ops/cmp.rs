use std::cmp::Ordering;

use num_bigint::BigInt;

use crate::coerce::Operand;
use crate::policy::default_policy;
use crate::reduce::Reduce;
use crate::{ConversionPolicy, ModInt, ModIntError};

impl PartialEq for ModInt {
    /// Two values are equal if both value and modulus match.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value() && self.modulus() == other.modulus()
    }
}

impl Eq for ModInt {}

impl PartialOrd for ModInt {
    /// Compares the stored values. Values of different moduli are not comparable.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.modulus() == other.modulus() {
            Some(self.value().cmp(other.value()))
        } else {
            None
        }
    }
}

impl ModInt {
    /// Checks equality against any operand under the given conversion `policy`.
    ///
    /// A plain integer `k` equals `self` iff the policy allows promotion and
    /// `k mod modulus == value`. This never fails: mismatched moduli and
    /// unsupported operands are simply unequal.
    #[inline]
    pub fn eq_with(&self, other: impl Into<Operand>, policy: &ConversionPolicy) -> bool {
        self.eq_operand(other.into(), policy)
    }

    pub(super) fn eq_operand(&self, other: Operand, policy: &ConversionPolicy) -> bool {
        match other {
            Operand::Modular(other) => *self == other,
            Operand::Plain(k) => policy.allowed() && &self.system().reduce(&k) == self.value(),
            Operand::Unsupported(_) => false,
        }
    }

    /// Compares the stored value with `other`.
    ///
    /// A plain integer is first promoted into the modular system, so it is
    /// its residue that is compared.
    ///
    /// # Errors
    ///
    /// [`ModIntError::IncompatibleModulus`], [`ModIntError::ConversionDisabled`]
    /// or [`ModIntError::Unsupported`] from the coercion of `other`.
    #[inline]
    pub fn try_cmp(&self, other: impl Into<Operand>) -> Result<Ordering, ModIntError> {
        self.cmp_impl("cmp", other.into(), default_policy())
    }

    /// Compares the stored value with `other` under the given conversion `policy`.
    #[inline]
    pub fn cmp_with(
        &self,
        other: impl Into<Operand>,
        policy: &ConversionPolicy,
    ) -> Result<Ordering, ModIntError> {
        self.cmp_impl("cmp", other.into(), policy)
    }

    pub(super) fn cmp_impl(
        &self,
        op: &'static str,
        other: Operand,
        policy: &ConversionPolicy,
    ) -> Result<Ordering, ModIntError> {
        let other = self.coerce_promote(op, other, policy)?;
        Ok(self.value().cmp(other.value()))
    }
}

macro_rules! impl_cmp_with_plain {
    ($($t:ty),*) => {$(
        impl PartialEq<$t> for ModInt {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                self.eq_with(other.clone(), default_policy())
            }
        }

        impl PartialEq<ModInt> for $t {
            #[inline]
            fn eq(&self, other: &ModInt) -> bool {
                PartialEq::<$t>::eq(other, self)
            }
        }

        impl PartialOrd<$t> for ModInt {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                self.cmp_with(other.clone(), default_policy()).ok()
            }
        }

        impl PartialOrd<ModInt> for $t {
            #[inline]
            fn partial_cmp(&self, other: &ModInt) -> Option<Ordering> {
                PartialOrd::<$t>::partial_cmp(other, self).map(Ordering::reverse)
            }
        }
    )*};
}

impl_cmp_with_plain!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt, f32, f64, bool
);

#[cfg(test)]
mod tests {
    use super::*;

    fn mi(value: i64, modulus: i64) -> ModInt {
        ModInt::new(value, modulus).unwrap()
    }

    #[test]
    fn test_eq() {
        assert_eq!(mi(3, 5), mi(8, 5));
        assert_ne!(mi(3, 5), mi(3, 7));

        let allow = ConversionPolicy::new(true);
        let deny = ConversionPolicy::new(false);

        assert!(mi(3, 5).eq_with(8, &allow));
        assert!(mi(3, 5).eq_with(-2, &allow));
        assert!(!mi(3, 5).eq_with(8, &deny));
        assert!(!mi(3, 5).eq_with(4, &allow));
        assert!(mi(3, 5).eq_with(mi(3, 5), &deny));
        assert!(!mi(3, 5).eq_with(mi(3, 7), &allow));
        assert!(!mi(3, 5).eq_with(f64::NAN, &allow));
        assert!(mi(1, 5).eq_with(true, &allow));
    }

    #[test]
    fn test_cmp() {
        let allow = ConversionPolicy::new(true);
        let deny = ConversionPolicy::new(false);

        assert!(mi(2, 5) < mi(3, 5));
        assert!(mi(4, 5) >= mi(4, 5));
        assert_eq!(mi(2, 5).partial_cmp(&mi(3, 7)), None);

        // 7 is promoted to 2
        assert_eq!(mi(3, 5).cmp_with(7, &allow), Ok(Ordering::Greater));
        assert_eq!(mi(3, 5).cmp_with(3.5, &allow), Ok(Ordering::Equal));
        assert!(matches!(
            mi(3, 5).cmp_with(7, &deny),
            Err(ModIntError::ConversionDisabled { op: "cmp", .. })
        ));
        assert!(matches!(
            mi(3, 5).cmp_with(mi(1, 6), &allow),
            Err(ModIntError::IncompatibleModulus { .. })
        ));
    }
}
