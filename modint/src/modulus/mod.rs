//! Defines the modulus of a modular system.

use std::fmt::Display;

use num_bigint::BigInt;

use crate::ModIntError;

mod ops;

/// The modulus of a modular system.
///
/// The value is always an integer not less than 2.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Modulus {
    value: BigInt,
}

impl Display for Modulus {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Modulus {
    /// Creates a new [`Modulus`].
    ///
    /// # Errors
    ///
    /// Returns [`ModIntError::InvalidModulus`] if `value < 2`.
    pub fn new(value: impl Into<BigInt>) -> Result<Self, ModIntError> {
        let value = value.into();
        if value < BigInt::from(2) {
            return Err(ModIntError::InvalidModulus { modulus: value });
        }
        Ok(Self { value })
    }

    /// Returns the value of this [`Modulus`].
    #[inline]
    pub const fn value(&self) -> &BigInt {
        &self.value
    }

    /// Consumes this [`Modulus`] and returns its value.
    #[inline]
    pub fn into_value(self) -> BigInt {
        self.value
    }
}

impl TryFrom<BigInt> for Modulus {
    type Error = ModIntError;

    #[inline]
    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Modulus> for BigInt {
    #[inline]
    fn from(modulus: Modulus) -> Self {
        modulus.value
    }
}
