//! The modular integer.

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Num, One, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::arith::Xgcd;
use crate::reduce::Reduce;
use crate::{ModIntError, Modulus};

mod fmt;
mod ops;

/// An integer number bound to a modular system.
///
/// The value always lies in `[0, modulus)`, and `gcd(value, modulus)`
/// is cached at construction. A [`ModInt`] never changes after it is built,
/// every operation returns a new one.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "RawModInt", into = "RawModInt")]
pub struct ModInt {
    value: BigInt,
    modulus: Modulus,
    gcd: BigInt,
}

/// Serialized form of [`ModInt`].
#[derive(Serialize, Deserialize)]
struct RawModInt {
    value: BigInt,
    modulus: BigInt,
}

impl TryFrom<RawModInt> for ModInt {
    type Error = ModIntError;

    #[inline]
    fn try_from(raw: RawModInt) -> Result<Self, Self::Error> {
        ModInt::new(raw.value, raw.modulus)
    }
}

impl From<ModInt> for RawModInt {
    #[inline]
    fn from(m: ModInt) -> Self {
        RawModInt {
            value: m.value,
            modulus: m.modulus.into_value(),
        }
    }
}

impl ModInt {
    /// Creates a new [`ModInt`], reducing `value` into `[0, modulus)`.
    ///
    /// # Errors
    ///
    /// Returns [`ModIntError::InvalidModulus`] if `modulus < 2`.
    #[inline]
    pub fn new(value: impl Into<BigInt>, modulus: impl Into<BigInt>) -> Result<Self, ModIntError> {
        Ok(Self::with_modulus(value, Modulus::new(modulus)?))
    }

    /// Creates a new [`ModInt`] in an already validated modular system.
    pub fn with_modulus(value: impl Into<BigInt>, modulus: Modulus) -> Self {
        let value: BigInt = value.into();
        let value = modulus.reduce(&value);
        let gcd = Xgcd::gcd(&value, modulus.value());
        Self {
            value,
            modulus,
            gcd,
        }
    }

    /// Creates a new [`ModInt`] from a float holding an integer.
    ///
    /// # Errors
    ///
    /// Returns [`ModIntError::InvalidValue`] if `value` is not finite or has a
    /// fractional part, and [`ModIntError::InvalidModulus`] if `modulus < 2`.
    pub fn from_f64(value: f64, modulus: impl Into<BigInt>) -> Result<Self, ModIntError> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(ModIntError::InvalidValue {
                value: value.to_string(),
            });
        }
        let value: BigInt =
            FromPrimitive::from_f64(value).ok_or_else(|| ModIntError::InvalidValue {
                value: value.to_string(),
            })?;
        Self::new(value, modulus)
    }

    /// Creates a new [`ModInt`] by parsing `text` in the given `radix`.
    ///
    /// # Errors
    ///
    /// Returns [`ModIntError::InvalidBase`] if `radix` is outside `[2, 36]`,
    /// [`ModIntError::InvalidValue`] if `text` is not an integer, and
    /// [`ModIntError::InvalidModulus`] if `modulus < 2`.
    pub fn from_str_radix(
        text: &str,
        radix: u32,
        modulus: impl Into<BigInt>,
    ) -> Result<Self, ModIntError> {
        check_base(radix)?;
        let value =
            BigInt::from_str_radix(text.trim(), radix).map_err(|_| ModIntError::InvalidValue {
                value: text.to_string(),
            })?;
        Self::new(value, modulus)
    }

    /// Returns the value, in `[0, modulus)`.
    #[inline]
    pub const fn value(&self) -> &BigInt {
        &self.value
    }

    /// Returns the modulus.
    #[inline]
    pub const fn modulus(&self) -> &BigInt {
        self.modulus.value()
    }

    /// Returns the modular system this value lives in.
    #[inline]
    pub const fn system(&self) -> &Modulus {
        &self.modulus
    }

    /// Returns the cached `gcd(value, modulus)`.
    #[inline]
    pub const fn gcd(&self) -> &BigInt {
        &self.gcd
    }

    /// Returns `true` if the value has a multiplicative inverse modulo the modulus.
    #[inline]
    pub fn is_invertible(&self) -> bool {
        self.gcd.is_one()
    }

    /// Consumes this [`ModInt`] and returns its value.
    #[inline]
    pub fn into_value(self) -> BigInt {
        self.value
    }

    /// Consumes this [`ModInt`] and returns its value and modulus.
    #[inline]
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.value, self.modulus.into_value())
    }
}

/// Checks that `base` is a valid numeral base.
pub(crate) fn check_base(base: u32) -> Result<(), ModIntError> {
    if (2..=36).contains(&base) {
        Ok(())
    } else {
        Err(ModIntError::InvalidBase { base })
    }
}

impl ToPrimitive for ModInt {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.value.to_i64()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.value.to_u64()
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        self.value.to_i128()
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        self.value.to_u128()
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        self.value.to_f64()
    }
}

impl From<ModInt> for BigInt {
    #[inline]
    fn from(m: ModInt) -> Self {
        m.value
    }
}

impl From<&ModInt> for BigInt {
    #[inline]
    fn from(m: &ModInt) -> Self {
        m.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use num_integer::Integer;
    use num_traits::{Signed, Zero};

    use super::*;

    #[test]
    fn test_new() {
        let a = ModInt::new(17, 5).unwrap();
        assert_eq!(a.value(), &BigInt::from(2));
        assert_eq!(a.modulus(), &BigInt::from(5));
        assert!(a.gcd().is_one());

        let a = ModInt::new(-3, 5).unwrap();
        assert_eq!(a.value(), &BigInt::from(2));

        let a = ModInt::new(10, 4).unwrap();
        assert_eq!(a.value(), &BigInt::from(2));
        assert_eq!(a.gcd(), &BigInt::from(2));
        assert!(!a.is_invertible());

        let zero = ModInt::new(0, 9).unwrap();
        assert_eq!(zero.gcd(), &BigInt::from(9));

        assert!(matches!(
            ModInt::new(3, 1),
            Err(ModIntError::InvalidModulus { .. })
        ));
        assert!(matches!(
            ModInt::new(3, -5),
            Err(ModIntError::InvalidModulus { .. })
        ));
    }

    #[test]
    fn test_normalization() {
        let mut rng = thread_rng();

        for _ in 0..16 {
            let v = rng.gen::<i64>();
            let m = rng.gen_range(2..i64::MAX);
            let a = ModInt::new(v, m).unwrap();

            let (v, m) = (BigInt::from(v), BigInt::from(m));
            assert!(!a.value().is_negative() && a.value() < &m);
            assert!((&v - a.value()).mod_floor(&m).is_zero());
            assert_eq!(a.gcd(), &Xgcd::gcd(a.value(), &m));
        }
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(ModInt::from_f64(12.0, 5).unwrap().to_i64(), Some(2));
        assert!(matches!(
            ModInt::from_f64(1.5, 5),
            Err(ModIntError::InvalidValue { .. })
        ));
        assert!(matches!(
            ModInt::from_f64(f64::NAN, 5),
            Err(ModIntError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_from_str_radix() {
        let a = ModInt::from_str_radix("ff", 16, 1000).unwrap();
        assert_eq!(a.to_u64(), Some(255));
        assert!(matches!(
            ModInt::from_str_radix("12", 37, 1000),
            Err(ModIntError::InvalidBase { base: 37 })
        ));
        assert!(matches!(
            ModInt::from_str_radix("xyz", 10, 1000),
            Err(ModIntError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_conversion() {
        let a = ModInt::new(-1, 7).unwrap();
        assert_eq!(a.to_i64(), Some(6));
        assert_eq!(a.to_f64(), Some(6.0));
        assert_eq!(BigInt::from(&a), BigInt::from(6));
        assert_eq!(a.into_parts(), (BigInt::from(6), BigInt::from(7)));
    }

    #[test]
    fn test_serde() {
        let a = ModInt::new(123456789, 1000003).unwrap();
        let bytes = bincode::serialize(&a).unwrap();
        let b: ModInt = bincode::deserialize(&bytes).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.gcd(), b.gcd());

        let raw = RawModInt {
            value: BigInt::from(4),
            modulus: BigInt::from(1),
        };
        let bytes = bincode::serialize(&raw).unwrap();
        assert!(bincode::deserialize::<ModInt>(&bytes).is_err());
    }
}
