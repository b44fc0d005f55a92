use crate::error::ArithmeticError;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use std::fmt;

/// An element of the prime field `F_prime`, where the prime is only known at runtime.
///
/// Operands of binary operations are checked to belong to the same field, so every
/// operation that takes a second element is fallible.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement {
    num: BigUint,
    prime: BigUint,
}

impl FieldElement {
    /// Fails with [`ArithmeticError::OutOfRange`] unless `0 <= num < prime`.
    ///
    /// The prime is not tested for primality, but it has to be at least 2.
    pub fn new<N, P>(num: N, prime: P) -> Result<Self, ArithmeticError>
    where
        N: Into<BigInt>,
        P: Into<BigInt>,
    {
        let num = num.into();
        let prime = prime.into();
        let prime = match prime.to_biguint() {
            Some(p) if p >= BigUint::from(2u8) => p,
            _ => return Err(ArithmeticError::InvalidModulus(prime)),
        };
        match num.to_biguint() {
            Some(n) if n < prime => Ok(Self { num: n, prime }),
            _ => Err(ArithmeticError::OutOfRange { num, prime }),
        }
    }

    pub(crate) fn from_parts_unchecked(num: BigUint, prime: BigUint) -> Self {
        Self { num, prime }
    }

    pub fn num(&self) -> &BigUint {
        &self.num
    }

    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Additive identity of the same field.
    pub fn zero(&self) -> Self {
        Self::from_parts_unchecked(BigUint::zero(), self.prime.clone())
    }

    /// Multiplicative identity of the same field.
    pub fn one(&self) -> Self {
        Self::from_parts_unchecked(BigUint::one(), self.prime.clone())
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    fn ensure_same_field(&self, other: &Self) -> Result<(), ArithmeticError> {
        if self.prime == other.prime {
            Ok(())
        } else {
            Err(ArithmeticError::IncompatibleFields)
        }
    }

    fn reduced(&self, number: BigUint) -> Self {
        Self::from_parts_unchecked(number % &self.prime, self.prime.clone())
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self, ArithmeticError> {
        self.ensure_same_field(other)?;
        Ok(self.reduced(&self.num + &other.num))
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self, ArithmeticError> {
        self.ensure_same_field(other)?;
        // adding the prime first keeps the intermediate value non-negative
        Ok(self.reduced(&self.num + &self.prime - &other.num))
    }

    pub fn checked_mul(&self, other: &Self) -> Result<Self, ArithmeticError> {
        self.ensure_same_field(other)?;
        Ok(self.reduced(&self.num * &other.num))
    }

    /// Computes `self^exponent`, where the exponent is first reduced modulo `prime - 1`.
    ///
    /// Negative exponents therefore yield powers of the modular inverse.
    pub fn pow<E: Into<BigInt>>(&self, exponent: E) -> Self {
        let order = BigInt::from(&self.prime - 1u32);
        let reduced = exponent.into().mod_floor(&order);
        Self::from_parts_unchecked(
            self.num.modpow(reduced.magnitude(), &self.prime),
            self.prime.clone(),
        )
    }

    /// Multiplicative inverse via Fermat's little theorem.
    pub fn inverse(&self) -> Result<Self, ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let exponent = &self.prime - 2u32;
        Ok(Self::from_parts_unchecked(
            self.num.modpow(&exponent, &self.prime),
            self.prime.clone(),
        ))
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self, ArithmeticError> {
        self.ensure_same_field(other)?;
        self.checked_mul(&other.inverse()?)
    }
}

impl std::ops::Neg for &FieldElement {
    type Output = FieldElement;
    fn neg(self) -> Self::Output {
        self.reduced(&self.prime - &self.num)
    }
}

impl std::ops::Neg for FieldElement {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.prime, self.num)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::Rng;

    fn fe(num: i64, prime: u64) -> FieldElement {
        FieldElement::new(num, prime).unwrap()
    }

    #[test]
    fn construction() {
        let element = fe(7, 13);
        assert_eq!(element.num(), &BigUint::from(7u8));
        assert_eq!(element.prime(), &BigUint::from(13u8));
        assert_eq!(fe(0, 13).num(), &BigUint::zero());

        assert_eq!(
            FieldElement::new(13, 13),
            Err(ArithmeticError::OutOfRange {
                num: BigInt::from(13),
                prime: BigUint::from(13u8)
            })
        );
        assert!(matches!(
            FieldElement::new(-1, 13),
            Err(ArithmeticError::OutOfRange { .. })
        ));
        assert!(matches!(
            FieldElement::new(0, 1),
            Err(ArithmeticError::InvalidModulus(_))
        ));
        assert!(matches!(
            FieldElement::new(0, -7),
            Err(ArithmeticError::InvalidModulus(_))
        ));
    }

    #[test]
    fn equality() {
        assert_eq!(fe(2, 31), fe(2, 31));
        assert_ne!(fe(2, 31), fe(15, 31));
        assert_ne!(fe(2, 31), fe(2, 37));
        assert_ne!(Some(fe(2, 31)), None);
    }

    #[test]
    fn addition_and_subtraction() {
        assert_eq!(fe(44, 57).checked_add(&fe(33, 57)).unwrap(), fe(20, 57));
        assert_eq!(fe(9, 57).checked_sub(&fe(29, 57)).unwrap(), fe(37, 57));
        let sum = fe(17, 57)
            .checked_add(&fe(42, 57))
            .and_then(|s| s.checked_add(&fe(49, 57)))
            .unwrap();
        assert_eq!(sum, fe(51, 57));
        let diff = fe(52, 57)
            .checked_sub(&fe(30, 57))
            .and_then(|d| d.checked_sub(&fe(38, 57)))
            .unwrap();
        assert_eq!(diff, fe(41, 57));
        assert_eq!(-fe(9, 57), fe(48, 57));
        assert_eq!(-fe(0, 57), fe(0, 57));
    }

    #[test]
    fn multiplication_and_power() {
        let product = fe(95, 97)
            .checked_mul(&fe(45, 97))
            .and_then(|p| p.checked_mul(&fe(31, 97)))
            .unwrap();
        assert_eq!(product, fe(23, 97));
        let product = fe(17, 97)
            .checked_mul(&fe(13, 97))
            .and_then(|p| p.checked_mul(&fe(19, 97)))
            .and_then(|p| p.checked_mul(&fe(44, 97)))
            .unwrap();
        assert_eq!(product, fe(68, 97));
        let product = fe(12, 97).pow(7).checked_mul(&fe(77, 97).pow(49)).unwrap();
        assert_eq!(product, fe(63, 97));
    }

    #[test]
    fn division_and_negative_powers() {
        assert_eq!(fe(3, 31).checked_div(&fe(24, 31)).unwrap(), fe(4, 31));
        assert_eq!(fe(17, 31).pow(-3), fe(29, 31));
        assert_eq!(fe(4, 31).pow(-4).checked_mul(&fe(11, 31)).unwrap(), fe(13, 31));
        assert_eq!(fe(17, 31).inverse().unwrap().checked_mul(&fe(17, 31)).unwrap(), fe(1, 31));
    }

    #[test]
    fn rejects_mixed_fields_and_zero_divisor() {
        let a = fe(3, 31);
        let b = fe(3, 37);
        assert_eq!(a.checked_add(&b), Err(ArithmeticError::IncompatibleFields));
        assert_eq!(a.checked_sub(&b), Err(ArithmeticError::IncompatibleFields));
        assert_eq!(a.checked_mul(&b), Err(ArithmeticError::IncompatibleFields));
        assert_eq!(a.checked_div(&b), Err(ArithmeticError::IncompatibleFields));
        assert_eq!(a.checked_div(&a.zero()), Err(ArithmeticError::DivisionByZero));
        assert_eq!(a.zero().inverse(), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn algebraic_properties() {
        let mut rng = rand::thread_rng();
        for prime in [223u64, 31, 1_000_000_007] {
            for _ in 0..50 {
                let x = fe(rng.gen_range(0..prime) as i64, prime);
                let y = fe(rng.gen_range(0..prime) as i64, prime);
                let z = fe(rng.gen_range(0..prime) as i64, prime);

                assert_eq!(x.checked_add(&y).unwrap(), y.checked_add(&x).unwrap());
                assert_eq!(x.checked_mul(&y).unwrap(), y.checked_mul(&x).unwrap());
                assert_eq!(
                    x.checked_add(&y).unwrap().checked_add(&z).unwrap(),
                    x.checked_add(&y.checked_add(&z).unwrap()).unwrap()
                );
                assert_eq!(x.checked_sub(&x).unwrap(), x.zero());
                assert_eq!(x.checked_add(&-&x).unwrap(), x.zero());
                if !x.is_zero() {
                    assert_eq!(x.checked_div(&x).unwrap(), x.one());
                }

                let exponent: i64 = rng.gen_range(-10_000..10_000);
                let reduced = exponent.rem_euclid(prime as i64 - 1);
                assert_eq!(x.pow(exponent), x.pow(reduced));
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(fe(5, 223).to_string(), "FieldElement_223(5)");
    }
}
