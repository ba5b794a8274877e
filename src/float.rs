use std::fmt;

/// An IEEE-754 double-precision float stored as its bit pattern.
///
/// Holding the raw bits gives `Float` total equality, ordering, and hashing,
/// which the tree types need; go through [`Float::to_f64`] for arithmetic.
/// Note that the derived ordering is over bit patterns, not numeric order.
///
/// The value model is double-only. Single-precision input exists on the wire
/// (it is widened when read), so `From<f32>` widens at construction.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Debug)]
pub struct Float(u64);

impl Float {
    /// Builds a `Float` from a raw `f64` bit pattern.
    pub fn from_bits(bits: u64) -> Float { Float(bits) }

    /// The raw `f64` bit pattern.
    pub fn to_bits(self) -> u64 { self.0 }

    /// The number itself.
    pub fn to_f64(self) -> f64 { f64::from_bits(self.0) }
}

impl From<f64> for Float {
    fn from(f: f64) -> Float { Float(f.to_bits()) }
}

impl From<f32> for Float {
    fn from(f: f32) -> Float { Float::from(f as f64) }
}

impl From<Float> for f64 {
    fn from(f: Float) -> f64 { f.to_f64() }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening_is_exact() {
        assert_eq!(Float::from(1f32), Float::from(1f64));
        assert_eq!(Float::from(-2.5f32), Float::from(-2.5f64));
        assert_eq!(
            Float::from(f32::INFINITY),
            Float::from(f64::INFINITY)
        );
    }

    #[test]
    fn bits_distinguish_zeroes() {
        assert_ne!(Float::from(0f64), Float::from(-0f64));
        assert_eq!(Float::from(-0f64).to_bits(), 1 << 63);
    }
}
