// src/integer_math/gcd.rs

use num::{BigInt, Integer, One, Signed, Zero};

pub fn gcd_pair(left: &BigInt, right: &BigInt) -> BigInt {
    left.gcd(right)
}

pub fn lcm_pair(left: &BigInt, right: &BigInt) -> BigInt {
    let abs_left = left.abs();
    let abs_right = right.abs();
    &(&abs_left * &abs_right) / gcd_pair(&abs_left, &abs_right)
}

/// Extended Euclidean algorithm.
/// Returns (g, x, y) such that a*x + b*y = g = gcd(a, b).
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a.clone(), BigInt::one(), BigInt::zero());
    }

    let (g, x1, y1) = extended_gcd(b, &(a % b));
    let y = x1 - (a / b) * &y1;

    (g, y1, y)
}

/// Computes a^(-1) mod m, or None when a is not invertible.
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> Option<BigInt> {
    let (g, x, _) = extended_gcd(a, m);

    if !g.is_one() {
        return None;
    }

    let mut inverse = x % m;
    if inverse.is_negative() {
        inverse += m;
    }
    Some(inverse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_pair() {
        assert_eq!(gcd_pair(&BigInt::from(48), &BigInt::from(18)), BigInt::from(6));
        assert_eq!(gcd_pair(&BigInt::from(17), &BigInt::from(780)), BigInt::from(1));
    }

    #[test]
    fn test_lcm_pair() {
        // lambda(3233) = lcm(60, 52)
        assert_eq!(lcm_pair(&BigInt::from(60), &BigInt::from(52)), BigInt::from(780));
    }

    #[test]
    fn test_extended_gcd_identity() {
        let a = BigInt::from(240);
        let b = BigInt::from(46);
        let (g, x, y) = extended_gcd(&a, &b);
        assert_eq!(g, BigInt::from(2));
        assert_eq!(&a * &x + &b * &y, g);
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 = 15 ≡ 1 mod 7
        let inv = mod_inverse(&BigInt::from(3), &BigInt::from(7)).unwrap();
        assert_eq!(inv, BigInt::from(5));

        // the textbook private exponent reduced mod lambda(n)
        let inv = mod_inverse(&BigInt::from(17), &BigInt::from(780)).unwrap();
        assert_eq!(inv, BigInt::from(413));
    }

    #[test]
    fn test_mod_inverse_not_invertible() {
        assert!(mod_inverse(&BigInt::from(6), &BigInt::from(9)).is_none());
    }
}
