/// `null`, 0x00
pub(crate) const TAG_NULL: u8 = 0x00;
/// `false`, 0x01
pub(crate) const TAG_FALSE: u8 = 0x01;
/// The empty string, 0x02
pub(crate) const TAG_EMPTY_BYT: u8 = 0x02;
/// `true`, 0x03
pub(crate) const TAG_TRUE: u8 = 0x03;

/// Non-negative integer family, 0x04..=0x07
pub(crate) const TAG_POS_INT: u8 = 0x04;
/// Negative integer family, 0x08..=0x0b
pub(crate) const TAG_NEG_INT: u8 = 0x08;

/// Single-precision float, 0x0c. Read but never written.
pub(crate) const TAG_SINGLE: u8 = 0x0c;
/// Double-precision float, 0x0d
pub(crate) const TAG_DOUBLE: u8 = 0x0d;

/// Bytestring family, 0x10..=0x13
pub(crate) const TAG_BYT: u8 = 0x10;
/// Array family, 0x20..=0x23
pub(crate) const TAG_ARR: u8 = 0x20;
/// Map family, 0x24..=0x27
pub(crate) const TAG_MAP: u8 = 0x24;

/// Low two bits of a family tag select the field width.
pub(crate) const MASK_WIDTH: u8 = 0b0000_0011;
/// High six bits of a family tag identify the family.
pub(crate) const MASK_FAMILY: u8 = !MASK_WIDTH;
