//! # BTON binary encoder and decoder
//!
//! Encode and decode functions for BTON.
//!
//! # Example
//!
//! ```
//! use bton::prelude::*;
//!
//! let ks = Bton::from(vec![Bton::from(1), Bton::from("two")]);
//!
//! // encode
//! let enc = encode_full(&ks).unwrap();
//!
//! // decoding returns a `Result`
//! let dec: Bton = decode_full(enc).unwrap();
//!
//! assert_eq!(dec, ks);
//! ```

use crate::{
    errors::{DecodeError, EncodeError},
    float::Float,
    inum::Inum,
    pairs::PairMap,
    util::Width,
    Bton::{self, *},
};
use bytes::Bytes;

pub mod ser;
pub use ser::*;
pub mod de;
pub use de::*;
mod constants;
use constants::*;

/// Encode a value into its binary representation, storing output in `out`.
///
/// # Example
///
/// ```
/// use bton::prelude::*;
///
/// let out = &mut Vec::new();
///
/// encode(&Bton::Null, out).unwrap();
///
/// assert_eq!(*out, vec![0]);
/// ```
pub fn encode<T: Ser>(t: &T, out: &mut Vec<u8>) -> Result<(), EncodeError> { t.ser(out) }

/// Encode a value into a fresh vector of bytes.
///
/// # Example
///
/// ```
/// use bton::prelude::*;
///
/// // minimal width: 2000 needs a 16-bit field
/// assert_eq!(encode_full(&Bton::from(2000)).unwrap(), vec![5, 0x07, 0xd0]);
/// ```
pub fn encode_full<T: Ser>(t: &T) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    t.ser(&mut out)?;
    Ok(out)
}

/// Decode a byte sequence holding exactly one value.
///
/// Fails with [`DecodeError::TrailingInput`] if bytes remain after the first
/// value; use [`decode`] to read one value off the front of a longer stream.
///
/// # Example
///
/// ```
/// use bton::prelude::*;
///
/// let bs = encode_full(&Bton::Null).unwrap();
///
/// assert_eq!(decode_full(bs).unwrap(), Bton::Null);
/// ```
pub fn decode_full<B: Into<Bytes>>(bs: B) -> Result<Bton, DecodeError> {
    let mut dat = bs.into();
    let ks = decode(&mut dat)?;
    if dat.is_empty() {
        Ok(ks)
    } else {
        Err(DecodeError::TrailingInput(dat.len()))
    }
}
