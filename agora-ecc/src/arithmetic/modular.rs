use bigint::{Concat, Encoding, NonZero, Split, U256};

pub trait Modular: Sized {
    const MODULUS: U256;

    /// Wraps a number that is already reduced below `MODULUS`.
    fn from_reduced(number: U256) -> Self;

    fn inner(&self) -> &U256;

    fn add(&self, other: &Self) -> Self {
        Self::from_reduced(self.inner().add_mod(other.inner(), &Self::MODULUS))
    }

    fn neg(&self) -> Self {
        Self::from_reduced(self.inner().neg_mod(&Self::MODULUS))
    }

    fn sub(&self, other: &Self) -> Self {
        Self::from_reduced(self.inner().sub_mod(other.inner(), &Self::MODULUS))
    }

    fn mul(&self, other: &Self) -> Self {
        Self::from_reduced(mul_mod_u256(self.inner(), other.inner(), &Self::MODULUS))
    }

    /// Square-and-multiply over the bits of `exponent`, most significant first.
    fn pow_u256(&self, exponent: &U256) -> Self {
        let mut result = Self::from_reduced(U256::ONE);
        for byte in exponent.to_be_bytes() {
            for shift in (0..8).rev() {
                result = result.mul(&result);
                if (byte >> shift) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }
}

pub fn mul_mod_u256(lhs: &U256, rhs: &U256, modulus: &U256) -> U256 {
    // `concat` places `self` in the high half of the wide number
    // NOTE modulus is never zero, so unwrap is fine here
    let mod512 = NonZero::new(U256::ZERO.concat(modulus)).unwrap();
    let (lo, hi) = lhs.mul_wide(rhs);
    let product = hi.concat(&lo);
    // the remainder is below the 256 bit modulus, so the high half is zero
    let (_, rem) = (product % mod512).split();
    rem
}
