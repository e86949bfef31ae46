use std::ops::{Neg, Not};

use num_bigint::BigInt;
use num_traits::One;

use crate::reduce::ReduceNeg;
use crate::ModInt;

impl Neg for &ModInt {
    type Output = ModInt;

    /// Calculates `-self`.
    #[inline]
    fn neg(self) -> Self::Output {
        let system = self.system();
        ModInt::with_modulus(system.reduce_neg(self.value()), system.clone())
    }
}

impl Neg for ModInt {
    type Output = ModInt;

    #[inline]
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Not for &ModInt {
    type Output = ModInt;

    /// Calculates the two's complement `!value = -value - 1`, reduced.
    #[inline]
    fn not(self) -> Self::Output {
        let complement: BigInt = -self.value() - BigInt::one();
        ModInt::with_modulus(complement, self.system().clone())
    }
}

impl Not for ModInt {
    type Output = ModInt;

    #[inline]
    fn not(self) -> Self::Output {
        !&self
    }
}
