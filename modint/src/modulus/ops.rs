use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::One;

use crate::arith::Xgcd;
use crate::reduce::{Reduce, ReduceAdd, ReduceExp, ReduceMul, ReduceNeg, ReduceSub, TryReduceInv};
use crate::ModIntError;

use super::Modulus;

impl Reduce<&BigInt> for &Modulus {
    type Output = BigInt;

    #[inline]
    fn reduce(self, value: &BigInt) -> Self::Output {
        value.mod_floor(&self.value)
    }
}

impl ReduceAdd<&BigInt> for &Modulus {
    type Output = BigInt;

    #[inline]
    fn reduce_add(self, a: &BigInt, b: &BigInt) -> Self::Output {
        (a + b).mod_floor(&self.value)
    }
}

impl ReduceSub<&BigInt> for &Modulus {
    type Output = BigInt;

    #[inline]
    fn reduce_sub(self, a: &BigInt, b: &BigInt) -> Self::Output {
        (a - b).mod_floor(&self.value)
    }
}

impl ReduceNeg<&BigInt> for &Modulus {
    type Output = BigInt;

    #[inline]
    fn reduce_neg(self, value: &BigInt) -> Self::Output {
        (-value).mod_floor(&self.value)
    }
}

impl ReduceMul<&BigInt> for &Modulus {
    type Output = BigInt;

    #[inline]
    fn reduce_mul(self, a: &BigInt, b: &BigInt) -> Self::Output {
        (a * b).mod_floor(&self.value)
    }
}

impl ReduceExp<&BigInt, &BigUint> for &Modulus {
    type Output = BigInt;

    #[inline]
    fn reduce_exp(self, base: &BigInt, exp: &BigUint) -> Self::Output {
        let base = self.reduce(base);
        BigInt::from(base.magnitude().modpow(exp, self.value.magnitude()))
    }
}

impl TryReduceInv<&BigInt> for &Modulus {
    type Output = BigInt;

    fn try_reduce_inv(self, value: &BigInt) -> Result<Self::Output, ModIntError> {
        match BigInt::gcdinv(value, &self.value) {
            Some((inv, gcd)) if gcd.is_one() => Ok(inv),
            _ => Err(ModIntError::NotInvertible {
                value: value.clone(),
                modulus: self.value.clone(),
                exponent: -BigInt::one(),
            }),
        }
    }
}
