use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Greatest common divisor and Bézout coefficients
pub trait Xgcd: Sized {
    /// Calculates the Greatest Common Divisor (GCD) of the number and `other`. The
    /// result is always non-negative.
    fn gcd(&self, other: &Self) -> Self;

    /// Returns the greatest common divisor `g` of `x` and `y` and signed
    /// values `a` and `b` such that `a x + b y = g`.
    ///
    /// `g` is always non-negative.
    fn xgcd(x: &Self, y: &Self) -> (Self, Self, Self);

    /// Returns the greatest common divisor `g` of `x` and `y` and computes
    /// `a` such that `0 ≤ a < y` and `a x = gcd(x, y) mod y`.
    ///
    /// When `y = 1` the greatest common divisor is set to `1` and `a` is
    /// set to `0`. Returns [`None`] unless `y > 0`.
    fn gcdinv(x: &Self, y: &Self) -> Option<(Self, Self)>;
}

impl Xgcd for BigInt {
    #[inline]
    fn gcd(&self, other: &Self) -> Self {
        Integer::gcd(self, other)
    }

    #[inline]
    fn xgcd(x: &Self, y: &Self) -> (Self, Self, Self) {
        let egcd = x.extended_gcd(y);
        (egcd.x, egcd.y, egcd.gcd)
    }

    fn gcdinv(x: &Self, y: &Self) -> Option<(Self, Self)> {
        if !y.is_positive() {
            return None;
        }
        if y.is_one() {
            return Some((BigInt::zero(), BigInt::one()));
        }

        let (a, _, d) = Self::xgcd(x, y);
        Some((a.mod_floor(y), d))
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::*;

    #[test]
    fn test_gcd() {
        let a = BigInt::from(84);
        let b = BigInt::from(-36);
        assert_eq!(Xgcd::gcd(&a, &b), BigInt::from(12));
        assert_eq!(Xgcd::gcd(&BigInt::zero(), &b), BigInt::from(36));
        assert_eq!(Xgcd::gcd(&BigInt::from(9), &BigInt::from(28)), BigInt::one());
    }

    #[test]
    fn test_xgcd() {
        let mut rng = thread_rng();

        for _ in 0..8 {
            let x = BigInt::from(rng.gen_range(0..i64::MAX));
            let y = BigInt::from(rng.gen_range(i64::MIN..i64::MAX));

            let (a, b, d) = BigInt::xgcd(&x, &y);
            assert_eq!(&a * &x + &b * &y, d);
            assert_eq!(d, Xgcd::gcd(&x, &y));
            assert!(!d.is_negative());
        }
    }

    #[test]
    fn test_gcdinv() {
        let mut rng = thread_rng();

        for _ in 0..8 {
            let y = BigInt::from(rng.gen_range(2..i64::MAX));
            let x = BigInt::from(rng.gen_range(i64::MIN..i64::MAX));

            let (a, d) = BigInt::gcdinv(&x, &y).unwrap();
            assert!(!a.is_negative() && a < y);
            assert_eq!((&a * &x).mod_floor(&y), d.mod_floor(&y));
        }

        assert_eq!(
            BigInt::gcdinv(&BigInt::from(5), &BigInt::one()),
            Some((BigInt::zero(), BigInt::one()))
        );
        assert_eq!(BigInt::gcdinv(&BigInt::from(5), &BigInt::zero()), None);
        assert_eq!(BigInt::gcdinv(&BigInt::from(5), &BigInt::from(-7)), None);
    }
}
