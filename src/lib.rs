//! # BTON
//!
//! BTON (Binary Tagged Object Notation) is a compact, self-describing binary
//! encoding for JSON-shaped data: null, booleans, integers, floats, strings,
//! ordered arrays, and ordered key/value maps. Two endpoints exchanging BTON
//! get structural equivalence with a JSON value tree at a fraction of the
//! byte count, and any two conforming implementations produce identical
//! bytes for the same tree.
//!
//! # Usage
//!
//! Build a [`Bton`] tree, then [`encode_full`](encoding::encode_full) it;
//! [`decode_full`](encoding::decode_full) reverses the trip.
//!
//! ```
//! use bton::prelude::*;
//!
//! let tree = Bton::from(vec![
//!     Bton::Null,
//!     Bton::from(2000),
//!     Bton::from("hello"),
//! ]);
//!
//! let bytes = encode_full(&tree).unwrap();
//! assert_eq!(decode_full(bytes).unwrap(), tree);
//! ```
//!
//! Both operations are pure functions with no shared state, so they are
//! safely callable from any number of threads at once. Decoding recurses as
//! deep as the input nests; callers decoding adversarial input should bound
//! nesting before handing bytes to [`decode_full`](encoding::decode_full).
//!
//! # Specification
//!
//! This section describes the BTON binary format.
//!
//! ## Tags
//!
//! The first byte of every encoded value is its *tag*, identifying the value
//! category. Categories with a variable-size field come in *width classes*
//! of 8, 16, 32, and 64 bits, selected by the low two bits of the tag; the
//! field itself is always unsigned and big-endian.
//!
//! | Tag       | Semantics            | Payload after the tag                   |
//! | ---       | ---                  | ---                                     |
//! | `0`       | `null`               | none                                    |
//! | `1`       | `false`              | none                                    |
//! | `2`       | empty string         | none                                    |
//! | `3`       | `true`               | none                                    |
//! | `4..=7`   | non-negative integer | magnitude field                         |
//! | `8..=11`  | negative integer     | magnitude field, sign implied by tag    |
//! | `12`      | single float         | 4 bytes IEEE-754 (read, never written)  |
//! | `13`      | double float         | 8 bytes IEEE-754                        |
//! | `16..=19` | string               | length field, then that many raw bytes  |
//! | `32..=35` | array                | length field, then the encoded elements |
//! | `36..=39` | map                  | length field, then the encoded pairs    |
//!
//! Every other tag byte (including the reserved range `20..=23`) is
//! malformed.
//!
//! ## Width selection
//!
//! Integer magnitudes and all length fields use the smallest width class
//! W such that the value is strictly less than 2^W. Values of 2^64 and
//! above have no encoding and fail with
//! [`TooLarge`](errors::EncodeError::TooLarge).
//!
//! ## Containers
//!
//! Array and map length fields hold the *byte length* of the encoded
//! payload, not the element count. An array payload is the concatenation of
//! its encoded elements; a map payload concatenates `key ++ value` for each
//! pair, where keys are full values themselves. Decoding slices exactly the
//! declared payload and decodes values from the slice until it is empty, so
//! a child can never read past its container.
//!
//! ## Strings
//!
//! Strings are raw byte sequences; there is no separate text/binary
//! distinction. The zero-length string is always written as the single tag
//! byte `2` rather than through the general length-prefixed form.

#![warn(
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    unreachable_pub,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]

pub mod encoding;
pub mod errors;
pub mod float;
pub mod inum;
pub mod pairs;
pub mod prelude;
mod util;

use bytes::Bytes;
use failure::{bail, Error};
use num_bigint::BigInt;
use std::convert::{TryFrom, TryInto};

use crate::{float::Float, inum::Inum, pairs::PairMap};

#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug)]
/// [`Bton`] and its variants.
///
/// # Example
///
/// ```
/// use bton::prelude::*;
///
/// let b = Bton::Bool(true);
///
/// let val = match b {
///     Bton::Bool(b) => b,
///     _ => panic!(),
/// };
///
/// assert!(val);
/// ```
pub enum Bton {
    /// Null. Corresponds to [`None`].
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer, in `-(2^64 - 1) ..= 2^64 - 1` when encodable.
    ///
    /// ```
    /// use bton::prelude::{Bton::Bint, *};
    ///
    /// let k_num = Bint(Inum::I64(1));
    /// ```
    Bint(Inum),
    /// Double-precision float.
    ///
    /// ```
    /// use bton::prelude::{Bton::Bfloat, *};
    ///
    /// let k_float = Bfloat(Float::from(1f64));
    /// ```
    Bfloat(Float),
    /// Bytestring.
    ///
    /// ```
    /// use bton::prelude::{Bton::Byt, *};
    ///
    /// let k_bytes = Byt(Bytes::from_static(b"hello world"));
    /// ```
    Byt(Bytes),
    /// An interned symbolic name.
    ///
    /// Symbols exist only on the encode side: they serialize exactly like
    /// their string form, and decoding always produces [`Bton::Byt`].
    Sym(Bytes),
    /// Array.
    ///
    /// ```
    /// use bton::prelude::{Bton::Array, *};
    ///
    /// let k_array = Array(vec![1, 2, 3].into_iter().map(Bton::from).collect());
    /// ```
    Array(Vec<Bton>),
    /// Map: an ordered pair sequence, not a lookup structure.
    ///
    /// ```
    /// use bton::prelude::{Bton::Map, *};
    ///
    /// let pairs = PairMap::from(vec![(Bton::from("hello world"), Bton::from(1))]);
    ///
    /// let k_map = Map(pairs);
    /// ```
    Map(PairMap<Bton, Bton>),
}

use Bton::*;

impl Bton {
    /// Converts a bytestring literal to [`Bton`].
    ///
    /// # Example
    ///
    /// ```
    /// use bton::prelude::*;
    ///
    /// let ks_foo = Bton::from_static(b"this is an example");
    /// ```
    pub fn from_static(bytes: &'static [u8]) -> Bton { Byt(Bytes::from_static(bytes)) }

    /// Builds a symbol value.
    ///
    /// # Example
    ///
    /// ```
    /// use bton::prelude::*;
    ///
    /// let sym = Bton::sym("ok");
    ///
    /// // a symbol is indistinguishable from its string form on the wire
    /// assert_eq!(
    ///     encode_full(&sym).unwrap(),
    ///     encode_full(&Bton::from("ok")).unwrap(),
    /// );
    /// ```
    pub fn sym(name: &str) -> Bton { Sym(Bytes::from(name.to_string())) }

    /// Indicates whether a value is [`Null`].
    ///
    /// # Example
    ///
    /// ```
    /// use bton::Bton::Null;
    ///
    /// assert!(Null.is_null());
    /// ```
    pub fn is_null(&self) -> bool {
        match self {
            Null => true,
            _ => false,
        }
    }

    /// Tries to convert a value to a [`bool`].
    ///
    /// # Example
    ///
    /// ```
    /// use bton::prelude::*;
    ///
    /// let b = Bton::from(true);
    ///
    /// assert!(b.to_bool().unwrap());
    /// ```
    pub fn to_bool(&self) -> Result<bool, Error> {
        match self {
            Bool(b) => Ok(*b),
            _ => bail!("value is not a `Bool`"),
        }
    }

    /// Tries to convert a value to an [`Inum`].
    ///
    /// # Example
    ///
    /// ```
    /// use bton::prelude::*;
    ///
    /// let ks_num = Bton::from(1);
    ///
    /// assert_eq!(ks_num.to_inum().unwrap(), &Inum::I64(1));
    /// ```
    pub fn to_inum(&self) -> Result<&Inum, Error> {
        match self {
            Bint(i) => Ok(i),
            _ => bail!("value is not a `Bint`, cannot convert to `Inum`"),
        }
    }

    /// Consumes the value, converting it to an [`Inum`].
    pub fn into_inum(self) -> Result<Inum, Error> {
        match self {
            Bint(i) => Ok(i),
            _ => bail!("value is not a `Bint`, cannot convert to `Inum`"),
        }
    }

    /// Tries to convert a value to an `f64`.
    ///
    /// # Example
    ///
    /// ```
    /// use bton::prelude::*;
    ///
    /// let f = Bton::from(1.5f64);
    ///
    /// assert_eq!(f.to_f64().unwrap(), 1.5);
    /// ```
    pub fn to_f64(&self) -> Result<f64, Error> {
        match self {
            Bfloat(f) => Ok(f.to_f64()),
            _ => bail!("value is not a `Bfloat`"),
        }
    }

    /// Tries to convert a value to [`Bytes`].
    ///
    /// # Example
    ///
    /// ```
    /// use bton::Bton;
    ///
    /// let foo = Bton::from_static(b"an example");
    ///
    /// let foo_bytes = foo.to_bytes().unwrap();
    /// ```
    pub fn to_bytes(&self) -> Result<&Bytes, Error> {
        match self {
            Byt(s) => Ok(s),
            _ => bail!("value is not a bytestring"),
        }
    }

    /// Converts a [`Bton`] value to a vector of [`Bton`] values.
    /// This will return an [`Error`] if the value is not a [`Bton::Array`].
    ///
    /// # Example
    ///
    /// ```
    /// use bton::prelude::*;
    ///
    /// let ks = Bton::from(vec![Bton::from(1), Bton::from(2)]);
    ///
    /// let k_numbers = ks.to_vec().unwrap();
    /// ```
    pub fn to_vec(&self) -> Result<&Vec<Bton>, Error> {
        match self {
            Array(a) => Ok(a),
            _ => bail!("value is not an `Array`"),
        }
    }

    /// Consumes a [`Bton`] value, converting it into a vector of [`Bton`]
    /// values.
    pub fn into_vec(self) -> Result<Vec<Bton>, Error> {
        match self.try_into() {
            Ok(v) => Ok(v),
            Err(_e) => bail!("value is not an `Array`"),
        }
    }

    /// Converts a [`Bton`] value to a [`PairMap`].
    /// This will return an [`Error`] if the value is not a [`Bton::Map`].
    ///
    /// # Example
    ///
    /// ```
    /// use bton::prelude::*;
    ///
    /// let k_map = Bton::from(PairMap::from(vec![(Bton::from("foo"), Bton::from(1))]));
    ///
    /// let pairs = k_map.to_pairs().unwrap();
    /// assert_eq!(pairs.len(), 1);
    /// ```
    pub fn to_pairs(&self) -> Result<&PairMap<Bton, Bton>, Error> {
        match self {
            Map(m) => Ok(m),
            _ => bail!("value is not a `Map`"),
        }
    }

    /// Consumes a [`Bton`] value, converting it into a [`PairMap`].
    pub fn into_pairs(self) -> Result<PairMap<Bton, Bton>, Error> {
        match self.try_into() {
            Ok(m) => Ok(m),
            Err(_e) => bail!("value is not a `Map`"),
        }
    }
}

fn fmt_bytes(bytes: &Bytes) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => format!("\"{}\"", s),
        Err(_) => {
            let mut bytes_string: String = "b\"".to_owned();
            bytes
                .iter()
                .for_each(|c| bytes_string.push_str(&format!("{:02x}", c)));
            bytes_string.push('"');

            bytes_string
        }
    }
}

impl std::fmt::Display for Bton {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        fn fmt_map(m: &PairMap<Bton, Bton>, indent: usize) -> String {
            let mut map_string: String = "{".to_owned();
            for (i, (k, v)) in m.iter().enumerate() {
                if i == 0 {
                    map_string.push_str(&format!("\n{:indent$}", "", indent = indent + 2));
                } else {
                    map_string.push_str(&format!(",\n{:indent$}", "", indent = indent + 2));
                }

                map_string.push_str(&format!(
                    "{key}: {value}",
                    key = fmt_helper(k, indent + 2),
                    value = fmt_helper(v, indent + 2),
                ));

                // check if we're at last element
                if i == m.len() - 1 {
                    map_string.push_str(&format!("\n{:indent$}", "", indent = indent));
                }
            }
            map_string.push('}');

            map_string
        }

        fn fmt_helper(ks: &Bton, indent: usize) -> String {
            match ks {
                Null => "null".to_owned(),
                Bool(b) => if *b { "true" } else { "false" }.to_owned(),
                Bint(i) => format!("{}", i),
                Bfloat(fl) => format!("{}", fl),
                Byt(bytes) => fmt_bytes(bytes),
                Sym(bytes) => String::from_utf8_lossy(bytes).into_owned(),
                Array(a) => {
                    let mut arr_string: String = "[".to_owned();
                    for (i, ks) in a.iter().enumerate() {
                        if i != 0 {
                            arr_string.push_str(", ");
                        }
                        arr_string.push_str(&fmt_helper(ks, indent));
                    }
                    arr_string.push(']');

                    arr_string
                }
                Map(m) => fmt_map(m, indent),
            }
        }

        write!(f, "{}", fmt_helper(self, 0))
    }
}

impl From<&str> for Bton {
    fn from(s: &str) -> Bton { Byt(Bytes::from(s.to_string())) }
}

impl From<String> for Bton {
    fn from(s: String) -> Bton { Byt(Bytes::from(s)) }
}

impl<T: Into<Bton>> From<Vec<T>> for Bton {
    fn from(v: Vec<T>) -> Bton { Array(v.into_iter().map(T::into).collect()) }
}

impl<K: Into<Bton>, V: Into<Bton>> From<PairMap<K, V>> for Bton {
    fn from(m: PairMap<K, V>) -> Bton {
        Map(m.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// bool -> Bton, From
from_fn!(Bton, bool, Bool);
// bool -> Bton, TryFrom
try_from_ctor!(Bton, bool, Bool);

// Inum -> Bton, From
from_fn!(Bton, Inum, Bint);
// Inum -> Bton, TryFrom
try_from_ctor!(Bton, Inum, Bint);

// Bytes -> Bton, From
from_fn!(Bton, Bytes, Byt);
// Bytes -> Bton, TryFrom
try_from_ctor!(Bton, Bytes, Byt);

// Float -> Bton, From
from_fn!(Bton, Float, Bfloat);
// Float -> Bton, TryFrom
try_from_ctor!(Bton, Float, Bfloat);

try_from_ctor!(Bton, Vec<Bton>, Array);
try_from_ctor!(Bton, PairMap<Bton, Bton>, Map);

// Integers
compose_from!(Bton, Inum, BigInt);
compose_from!(Bton, Inum, i64);
compose_from!(Bton, Inum, u64);
from_prims!(Bton);

// Floats
compose_from!(Bton, Float, f32);
compose_from!(Bton, Float, f64);
