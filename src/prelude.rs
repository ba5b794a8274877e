//! A convenience module re-exporting the working set.

pub use crate::{
    encoding::{decode, decode_full, encode, encode_full, Ser, Serializer, SerializerExt},
    errors::{DecodeError, EncodeError},
    float::Float,
    inum::Inum,
    pairs::PairMap,
    Bton,
};
pub use bytes::Bytes;
pub use num_bigint::BigInt;
pub use std::convert::TryFrom;
