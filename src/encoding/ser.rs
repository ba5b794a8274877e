use super::*;
use std::convert::TryFrom;

/// Byte sink the encoder writes into.
pub trait Serializer {
    /// The type of the finished output.
    type Out;
    /// Append a byte to the output.
    fn put_u8(&mut self, u: u8);
    /// Append a slice to the output.
    fn put_slice(&mut self, slice: &[u8]);
    /// Return the output value.
    fn finalize(self) -> Self::Out;
}

impl Serializer for Vec<u8> {
    type Out = Self;

    fn put_u8(&mut self, u: u8) { self.push(u) }

    fn put_slice(&mut self, slice: &[u8]) { self.extend_from_slice(slice) }

    fn finalize(self) -> Self::Out { self }
}

/// Wire-format helpers layered over any [`Serializer`].
pub trait SerializerExt: Serializer {
    /// Append an unsigned big-endian field of exactly `width` bytes.
    fn put_uint(&mut self, u: u64, width: Width);

    /// Append a family tag carrying the minimal width class for `n`,
    /// followed by the field itself. This is the standard header shared by
    /// integers, strings, arrays, and maps.
    fn put_tagged(&mut self, family: u8, n: u64);

    /// Append [`Bton::Null`](crate::Bton::Null).
    fn put_null(&mut self);

    /// Append a [`bool`].
    fn put_bool(&mut self, b: bool);

    /// Append an [`Inum`].
    fn put_inum(&mut self, i: &Inum) -> Result<(), EncodeError>;

    /// Append a [`Float`]. Always double precision on the wire.
    fn put_float(&mut self, f: Float);

    /// Append a bytestring, using the dedicated empty-string tag when the
    /// payload has length zero.
    fn put_bytes(&mut self, b: &[u8]) -> Result<(), EncodeError>;

    /// Append an array: the elements are encoded into a payload whose byte
    /// length becomes the header field.
    fn put_arr<T: Ser>(&mut self, v: &[T]) -> Result<(), EncodeError>;

    /// Append a map: each pair is encoded as key then value, and the
    /// concatenated payload's byte length becomes the header field.
    fn put_map<K: Ser, V: Ser>(&mut self, m: &PairMap<K, V>) -> Result<(), EncodeError>;
}

/// Byte lengths travel in the same 64-bit-max fields as magnitudes.
fn byte_len(len: usize) -> Result<u64, EncodeError> {
    u64::try_from(len).map_err(|_| EncodeError::TooLarge)
}

impl<S: Serializer> SerializerExt for S {
    fn put_uint(&mut self, u: u64, width: Width) {
        self.put_slice(&u64::to_be_bytes(u)[8 - width.bytes()..]);
    }

    #[inline]
    fn put_tagged(&mut self, family: u8, n: u64) {
        let width = Width::of(n);
        self.put_u8(family | width.bits());
        self.put_uint(n, width);
    }

    fn put_null(&mut self) { self.put_u8(TAG_NULL) }

    fn put_bool(&mut self, b: bool) {
        if b {
            self.put_u8(TAG_TRUE)
        } else {
            self.put_u8(TAG_FALSE)
        }
    }

    fn put_inum(&mut self, i: &Inum) -> Result<(), EncodeError> {
        let (pos, mag) = i.sign_and_magnitude()?;
        let family = if pos { TAG_POS_INT } else { TAG_NEG_INT };
        self.put_tagged(family, mag);
        Ok(())
    }

    fn put_float(&mut self, f: Float) {
        self.put_u8(TAG_DOUBLE);
        self.put_slice(&u64::to_be_bytes(f.to_bits()));
    }

    fn put_bytes(&mut self, b: &[u8]) -> Result<(), EncodeError> {
        if b.is_empty() {
            self.put_u8(TAG_EMPTY_BYT);
            return Ok(());
        }
        self.put_tagged(TAG_BYT, byte_len(b.len())?);
        self.put_slice(b);
        Ok(())
    }

    fn put_arr<T: Ser>(&mut self, v: &[T]) -> Result<(), EncodeError> {
        let mut body = Vec::new();
        for t in v {
            t.ser(&mut body)?;
        }
        self.put_tagged(TAG_ARR, byte_len(body.len())?);
        self.put_slice(&body);
        Ok(())
    }

    fn put_map<K: Ser, V: Ser>(&mut self, m: &PairMap<K, V>) -> Result<(), EncodeError> {
        let mut body = Vec::new();
        for (k, v) in m.iter() {
            k.ser(&mut body)?;
            v.ser(&mut body)?;
        }
        self.put_tagged(TAG_MAP, byte_len(body.len())?);
        self.put_slice(&body);
        Ok(())
    }
}

/// A value that can be serialized.
pub trait Ser {
    /// Write `self` to a [`Serializer`].
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), EncodeError>;
}

impl Ser for Bton {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), EncodeError> {
        match self {
            Null => Ok(s.put_null()),
            Bool(b) => Ok(s.put_bool(*b)),
            Bint(i) => s.put_inum(i),
            Bfloat(f) => Ok(s.put_float(*f)),
            // symbols have no wire form of their own
            Byt(bs) | Sym(bs) => s.put_bytes(bs),
            Array(a) => s.put_arr(a),
            Map(m) => s.put_map(m),
        }
    }
}
