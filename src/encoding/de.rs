use super::*;
use bytes::Buf;
use std::convert::TryFrom;

/// A decoded tag byte: the value category plus its declared field width.
#[derive(Copy, Clone, Debug)]
pub(crate) enum BTag {
    /// Constant tag (null, true, false, empty string).
    BCon(u8),
    /// Integer tag; the flag is true for the non-negative family.
    BInt(bool, Width),
    /// Single-precision float tag.
    BSingle,
    /// Double-precision float tag.
    BDouble,
    /// Bytestring tag.
    BByt(Width),
    /// Array tag.
    BArr(Width),
    /// Map tag.
    BMap(Width),
}

use BTag::*;

fn take_byte(dat: &mut Bytes) -> Result<u8, DecodeError> {
    if dat.has_remaining() {
        Ok(dat.get_u8())
    } else {
        Err(DecodeError::Truncated)
    }
}

fn read_many(dat: &mut Bytes, len: usize) -> Result<Bytes, DecodeError> {
    if dat.len() >= len {
        Ok(dat.split_to(len))
    } else {
        Err(DecodeError::Truncated)
    }
}

fn read_uint(dat: &mut Bytes, width: Width) -> Result<u64, DecodeError> {
    if dat.remaining() >= width.bytes() {
        Ok(dat.get_uint(width.bytes()))
    } else {
        Err(DecodeError::Truncated)
    }
}

fn read_len(dat: &mut Bytes, width: Width) -> Result<usize, DecodeError> {
    let len = read_uint(dat, width)?;
    // a length the address space cannot hold cannot have that many bytes
    // behind it either
    usize::try_from(len).map_err(|_| DecodeError::Truncated)
}

fn read_tag(dat: &mut Bytes) -> Result<BTag, DecodeError> {
    let byte = take_byte(dat)?;
    match byte {
        TAG_NULL | TAG_FALSE | TAG_EMPTY_BYT | TAG_TRUE => Ok(BCon(byte)),
        TAG_SINGLE => Ok(BSingle),
        TAG_DOUBLE => Ok(BDouble),
        _ => {
            let width = Width::from_bits(byte & MASK_WIDTH);
            match byte & MASK_FAMILY {
                TAG_POS_INT => Ok(BInt(true, width)),
                TAG_NEG_INT => Ok(BInt(false, width)),
                TAG_BYT => Ok(BByt(width)),
                TAG_ARR => Ok(BArr(width)),
                TAG_MAP => Ok(BMap(width)),
                _ => Err(DecodeError::MalformedTag(byte)),
            }
        }
    }
}

/// Reads exactly one value off the front of `dat`.
///
/// The cursor is left at the first byte after the value, so the remainder
/// stays available to the caller; [`decode_full`](super::decode_full) is the
/// form that insists the input holds exactly one value.
///
/// # Example
///
/// ```
/// use bton::prelude::*;
///
/// let mut dat = Bytes::from(vec![4u8, 42, 0xff]);
///
/// assert_eq!(decode(&mut dat).unwrap(), Bton::from(42));
/// // one byte of remainder, untouched
/// assert_eq!(dat.len(), 1);
/// ```
pub fn decode(dat: &mut Bytes) -> Result<Bton, DecodeError> {
    match read_tag(dat)? {
        BCon(TAG_NULL) => Ok(Null),
        BCon(TAG_TRUE) => Ok(Bool(true)),
        BCon(TAG_FALSE) => Ok(Bool(false)),
        BCon(TAG_EMPTY_BYT) => Ok(Byt(Bytes::new())),
        BCon(other) => Err(DecodeError::MalformedTag(other)),
        BInt(pos, width) => {
            let mag = read_uint(dat, width)?;
            Ok(Bint(Inum::from_sign_and_magnitude(pos, mag)))
        }
        BSingle => {
            let mut bs = read_many(dat, 4)?;
            Ok(Bfloat(Float::from(f32::from_bits(bs.get_u32()))))
        }
        BDouble => {
            let mut bs = read_many(dat, 8)?;
            Ok(Bfloat(Float::from_bits(bs.get_u64())))
        }
        BByt(width) => {
            let len = read_len(dat, width)?;
            Ok(Byt(read_many(dat, len)?))
        }
        BArr(width) => {
            let len = read_len(dat, width)?;
            let mut body = read_many(dat, len)?;
            let mut out = Vec::new();
            while !body.is_empty() {
                out.push(decode(&mut body)?);
            }
            Ok(Array(out))
        }
        BMap(width) => {
            let len = read_len(dat, width)?;
            let mut body = read_many(dat, len)?;
            let mut pairs = PairMap::new();
            while !body.is_empty() {
                let key = decode(&mut body)?;
                let val = decode(&mut body)?;
                pairs.push(key, val);
            }
            Ok(Map(pairs))
        }
    }
}
