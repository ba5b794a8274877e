use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;
use std::{convert::TryFrom, fmt};

use crate::{errors::EncodeError, from_as, from_fn};

/// `Inum`s are either `i64`s or `BigInt`s (i.e., big integers).
///
/// The `Int` variant only ever holds values that do not fit in an `i64`;
/// every conversion below maintains this, so two `Inum`s are equal exactly
/// when they denote the same number.
///
/// The wire format stores sign and magnitude separately, which makes the
/// encodable range `-(2^64 - 1) ..= 2^64 - 1`. `Inum` can hold numbers
/// outside that range, but encoding them fails with
/// [`EncodeError::TooLarge`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug)]
pub enum Inum {
    I64(i64),
    Int(BigInt),
}

use Inum::*;

from_fn!(Inum, i64, I64);
from_fn!(Inum, u64, |u: u64| {
    i64::try_from(u).map_or_else(|_| Int(BigInt::from(u)), I64)
});
from_fn!(Inum, BigInt, |i: BigInt| {
    i.to_i64().map_or_else(|| Int(i), I64)
});

impl From<Inum> for BigInt {
    fn from(i: Inum) -> BigInt {
        match i {
            I64(i) => BigInt::from(i),
            Int(i) => i,
        }
    }
}

impl TryFrom<Inum> for i64 {
    type Error = Inum;

    fn try_from(i: Inum) -> Result<Self, Inum> {
        match i {
            I64(i) => Ok(i),
            Int(i) => Err(Int(i)),
        }
    }
}

impl TryFrom<Inum> for u64 {
    type Error = Inum;

    fn try_from(n: Inum) -> Result<Self, Inum> {
        match &n {
            I64(i) => {
                if *i >= 0 {
                    Ok(*i as u64)
                } else {
                    Err(n)
                }
            }
            Int(i) => i.to_u64().ok_or(n),
        }
    }
}

impl Inum {
    /// Splits the number into the sign and magnitude the wire format stores.
    ///
    /// Fails with [`EncodeError::TooLarge`] when the magnitude needs more
    /// than 64 bits.
    pub(crate) fn sign_and_magnitude(&self) -> Result<(bool, u64), EncodeError> {
        match self {
            I64(i) => Ok((*i >= 0, i.unsigned_abs())),
            Int(i) => {
                let mag = i.magnitude().to_u64().ok_or(EncodeError::TooLarge)?;
                Ok((i.sign() != Sign::Minus, mag))
            }
        }
    }

    /// Rebuilds a number from a decoded sign and magnitude.
    pub(crate) fn from_sign_and_magnitude(pos: bool, mag: u64) -> Inum {
        if pos {
            Inum::from(mag)
        } else if mag <= i64::MAX as u64 {
            I64(-(mag as i64))
        } else {
            Inum::from(-BigInt::from(mag))
        }
    }

    /// Produces an `i64` if `self` is an `I64`, otherwise returns `None`.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            I64(i) => Some(*i),
            _ => None,
        }
    }

    /// Indicates whether the number is strictly below zero.
    pub fn is_negative(&self) -> bool {
        match self {
            I64(i) => *i < 0,
            Int(i) => i.sign() == Sign::Minus,
        }
    }
}

impl fmt::Display for Inum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            I64(i) => write!(f, "{}", i),
            Int(i) => write!(f, "{}", i),
        }
    }
}

#[macro_export]
macro_rules! from_prims {
    ($to:tt) => {
        from_as!($to, i32, i64);
        from_as!($to, i16, i64);
        from_as!($to, i8, i64);

        from_as!($to, u32, i64);
        from_as!($to, u16, i64);
        from_as!($to, u8, i64);
    };
}

from_prims!(Inum);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization() {
        // in-range big ints collapse to the i64 variant
        assert_eq!(Inum::from(BigInt::from(-5)), I64(-5));
        assert_eq!(Inum::from(u64::MAX / 3), I64((u64::MAX / 3) as i64));

        match Inum::from(u64::MAX) {
            Int(_) => {}
            I64(i) => panic!("u64::MAX collapsed to I64({})", i),
        }
    }

    #[test]
    fn magnitude_splits() {
        assert_eq!(Inum::from(42).sign_and_magnitude(), Ok((true, 42)));
        assert_eq!(Inum::from(-42).sign_and_magnitude(), Ok((false, 42)));
        assert_eq!(
            I64(i64::MIN).sign_and_magnitude(),
            Ok((false, 1 << 63))
        );
        assert_eq!(
            Inum::from(-BigInt::from(u64::MAX)).sign_and_magnitude(),
            Ok((false, u64::MAX))
        );
        assert_eq!(
            Inum::from(BigInt::from(u64::MAX) + 1).sign_and_magnitude(),
            Err(EncodeError::TooLarge)
        );
    }

    #[test]
    fn magnitude_rebuilds() {
        assert_eq!(Inum::from_sign_and_magnitude(true, 42), I64(42));
        assert_eq!(Inum::from_sign_and_magnitude(false, 42), I64(-42));
        assert_eq!(Inum::from_sign_and_magnitude(false, 0), I64(0));
        assert_eq!(
            Inum::from_sign_and_magnitude(false, 1 << 63),
            I64(i64::MIN)
        );
        assert_eq!(
            Inum::from_sign_and_magnitude(false, u64::MAX),
            Int(-BigInt::from(u64::MAX))
        );
    }
}
