//! Basic types for interpreting DICOM data elements:
//! the attribute tag, the value representation code,
//! the value length, and the element header composites.

use snafu::{Backtrace, OptionExt, Snafu};
use std::fmt;
use std::str::{from_utf8, FromStr};

use crate::value::{CastValueError, Value};

/// Error type for issues constructing a sequence item header.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SequenceItemHeaderError {
    /// Unexpected header tag.
    /// Only Item (FFFE,E000),
    /// Item Delimitation Item (FFFE,E00D),
    /// or Sequence Delimitation Item (FFFE,E0DD)
    /// are admitted.
    #[snafu(display("unexpected item header tag {}", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },
    /// Unexpected delimiter value length.
    /// Must be zero for item delimiters.
    #[snafu(display("unexpected delimiter length {}", len))]
    UnexpectedDelimiterLength { len: Length, backtrace: Backtrace },
}

type Result<T, E = SequenceItemHeaderError> = std::result::Result<T, E>;

/// Trait for any DICOM entity (element or item) which may have a length.
pub trait HasLength {
    /// Retrieve the value data's length as specified by the data element or
    /// item header, in bytes.
    ///
    /// The concrete value size may be undefined,
    /// in which case the real extent is only known
    /// after walking the value up to its delimiter.
    fn length(&self) -> Length;

    /// Check whether the value is empty (zero length).
    fn is_empty(&self) -> bool {
        self.length() == Length(0)
    }
}

/// A trait for a data type containing a DICOM header.
pub trait Header: HasLength {
    /// Retrieve the element's tag as a `(group, element)` pair.
    fn tag(&self) -> Tag;

    /// Check whether this is the header of a data set item.
    fn is_item(&self) -> bool {
        self.tag() == Tag(0xFFFE, 0xE000)
    }

    /// Check whether this is the header of an item delimiter.
    fn is_item_delimiter(&self) -> bool {
        self.tag() == Tag(0xFFFE, 0xE00D)
    }

    /// Check whether this is the header of a sequence delimiter.
    fn is_sequence_delimiter(&self) -> bool {
        self.tag() == Tag(0xFFFE, 0xE0DD)
    }

    /// Check whether this is the header of an encapsulated pixel data element.
    fn is_encapsulated_pixeldata(&self) -> bool {
        self.tag() == Tag(0x7FE0, 0x0010) && self.length().is_undefined()
    }
}

/// A data type that represents and owns a DICOM data element,
/// whether it holds a primitive value,
/// a sequence of nested data sets (items of type `I`),
/// or an encapsulated pixel data sequence.
#[derive(Debug, PartialEq, Clone)]
pub struct DataElement<I> {
    header: DataElementHeader,
    value: Value<I>,
}

impl<I> HasLength for DataElement<I> {
    #[inline]
    fn length(&self) -> Length {
        self.header.length()
    }
}

impl<I> Header for DataElement<I> {
    #[inline]
    fn tag(&self) -> Tag {
        self.header.tag()
    }
}

impl<I> DataElement<I> {
    /// Create an empty data element.
    pub fn empty(tag: Tag, vr: VR) -> Self {
        DataElement {
            header: DataElementHeader {
                tag,
                vr,
                len: Length(0),
            },
            value: Value::Empty,
        }
    }

    /// Create a data element from the given parts.
    ///
    /// This method will not check
    /// whether the length accurately represents the given value's byte length,
    /// nor whether the value representation is compatible with the value.
    pub fn new(tag: Tag, vr: VR, len: Length, value: Value<I>) -> Self {
        DataElement {
            header: DataElementHeader { tag, vr, len },
            value,
        }
    }

    /// Retrieve the element header.
    pub fn header(&self) -> &DataElementHeader {
        &self.header
    }

    /// Retrieve the value representation.
    pub fn vr(&self) -> VR {
        self.header.vr()
    }

    /// Retrieve the data value.
    pub fn value(&self) -> &Value<I> {
        &self.value
    }

    /// Move the data value out of the element, discarding the header.
    pub fn into_value(self) -> Value<I> {
        self.value
    }

    /// Retrieve the element's value as a single cleaned string:
    /// a one-component textual value
    /// with trailing space, NUL and zero-width space padding removed.
    ///
    /// Returns an error if the value is not a single textual component.
    pub fn to_str(&self) -> Result<String, CastValueError> {
        self.value.to_str()
    }
}

/// A data structure for a data element header, containing
/// a tag, value representation and specified length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DataElementHeader {
    /// DICOM tag
    pub tag: Tag,
    /// Value Representation
    pub vr: VR,
    /// Element length
    pub len: Length,
}

impl HasLength for DataElementHeader {
    #[inline]
    fn length(&self) -> Length {
        self.len
    }
}

impl Header for DataElementHeader {
    #[inline]
    fn tag(&self) -> Tag {
        self.tag
    }
}

impl DataElementHeader {
    /// Create a new data element header with the given properties.
    /// This is just a trivial constructor.
    #[inline]
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// Retrieve the element's value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Check whether the header suggests the value to be a sequence value:
    /// if the value representation is SQ or the length is undefined.
    #[inline]
    pub fn is_non_primitive(&self) -> bool {
        self.vr == VR::SQ || self.length().is_undefined()
    }
}

impl From<SequenceItemHeader> for DataElementHeader {
    fn from(value: SequenceItemHeader) -> DataElementHeader {
        DataElementHeader {
            tag: value.tag(),
            vr: VR::UN,
            len: value.length(),
        }
    }
}

/// Data type for describing a sequence item data element.
/// If the element represents an item, it will also contain
/// the specified length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SequenceItemHeader {
    /// The cursor contains an item.
    Item {
        /// the length of the item in bytes (can be undefined)
        len: Length,
    },
    /// The cursor read an item delimiter.
    /// The element ends here and should not be read any further.
    ItemDelimiter,
    /// The cursor read a sequence delimiter.
    /// The element ends here and should not be read any further.
    SequenceDelimiter,
}

impl SequenceItemHeader {
    /// Create a sequence item header using the element's raw properties.
    /// An error can be raised if the given properties do not relate to a
    /// sequence item, an item delimiter or a sequence delimiter.
    pub fn new<T: Into<Tag>>(tag: T, len: Length) -> Result<SequenceItemHeader> {
        match tag.into() {
            Tag(0xFFFE, 0xE000) => Ok(SequenceItemHeader::Item { len }),
            Tag(0xFFFE, 0xE00D) => {
                // delimiters should not have a positive length
                if len != Length(0) {
                    UnexpectedDelimiterLengthSnafu { len }.fail()
                } else {
                    Ok(SequenceItemHeader::ItemDelimiter)
                }
            }
            Tag(0xFFFE, 0xE0DD) => Ok(SequenceItemHeader::SequenceDelimiter),
            tag => UnexpectedTagSnafu { tag }.fail(),
        }
    }
}

impl HasLength for SequenceItemHeader {
    #[inline]
    fn length(&self) -> Length {
        match *self {
            SequenceItemHeader::Item { len } => len,
            SequenceItemHeader::ItemDelimiter | SequenceItemHeader::SequenceDelimiter => Length(0),
        }
    }
}

impl Header for SequenceItemHeader {
    #[inline]
    fn tag(&self) -> Tag {
        match *self {
            SequenceItemHeader::Item { .. } => Tag(0xFFFE, 0xE000),
            SequenceItemHeader::ItemDelimiter => Tag(0xFFFE, 0xE00D),
            SequenceItemHeader::SequenceDelimiter => Tag(0xFFFE, 0xE0DD),
        }
    }
}

/// An enum type for a DICOM value representation.
///
/// This is the set of VR codes that the supported transfer syntaxes
/// can carry on the wire.
/// Unrecognized codes are decoded as [`UN`](VR::UN).
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Time
    TM,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            TM => "TM",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            US => "US",
            UT => "UT",
        }
    }

    /// Check whether an explicit encoding of this VR
    /// uses a 32-bit value length field,
    /// preceded by two reserved bytes on the wire.
    /// All other VRs take a 16-bit value length when explicit.
    ///
    /// Note that this decoder keeps UT and OD in the short-length class.
    #[inline]
    pub fn has_32bit_length(self) -> bool {
        matches!(self, VR::OB | VR::OW | VR::OF | VR::SQ | VR::UN)
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> std::result::Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "TM" => Ok(TM),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "US" => Ok(US),
            "UT" => Ok(UT),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// An error returned when parsing an invalid tag key.
#[derive(Debug, Snafu)]
#[snafu(display("invalid tag key `{}`, expected `xGGGGEEEE`", key))]
pub struct InvalidTagKey {
    key: String,
    backtrace: Backtrace,
}

/// The data type for DICOM data element tags.
///
/// Tags are a `(group, element)` pair of 16-bit unsigned integers.
/// Equality and ordering are by the numeric pair.
/// Both `(u16, u16)` and `[u16; 2]` can be
/// efficiently converted to this type.
///
/// The canonical textual key of a tag
/// is a lowercase `x` followed by the group and element parts
/// in uppercase 4-digit hexadecimal (e.g. `x7FE00010`),
/// produced by [`key`](Tag::key) and parsed by [`from_key`](Tag::from_key).
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Produce the canonical textual key of this tag.
    pub fn key(self) -> String {
        format!("x{:04X}{:04X}", self.0, self.1)
    }

    /// Parse a tag from its canonical textual key form.
    pub fn from_key(key: &str) -> Result<Tag, InvalidTagKey> {
        let rest = key
            .strip_prefix('x')
            .filter(|r| r.len() == 8 && r.bytes().all(|b| b.is_ascii_hexdigit()))
            .context(InvalidTagKeySnafu { key })?;
        let group = u16::from_str_radix(&rest[..4], 16)
            .ok()
            .context(InvalidTagKeySnafu { key })?;
        let element = u16::from_str_radix(&rest[4..], 16)
            .ok()
            .context(InvalidTagKeySnafu { key })?;
        Ok(Tag(group, element))
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

/// A type for representing data set content length, in bytes.
/// An internal value of `0xFFFF_FFFF` represents an undefined
/// (unspecified) length, which has to be determined
/// with a traversal based on the content's encoding.
///
/// This also means that numeric comparisons and arithmetic
/// do not function the same way as primitive number types:
/// two undefined lengths are not equal,
/// any arithmetic involving an undefined length is undefined,
/// and comparing against an undefined length is always `false`.
#[derive(Clone, Copy)]
pub struct Length(pub u32);

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Create a new length value from its internal representation.
    /// This is equivalent to `Length(len)`.
    #[inline]
    pub fn new(len: u32) -> Self {
        Length(len)
    }

    /// Create a new length value with the given number of bytes.
    ///
    /// # Panics
    ///
    /// This function panics if `len` is the undefined length sentinel.
    #[inline]
    pub fn defined(len: u32) -> Self {
        assert_ne!(len, UNDEFINED_LEN);
        Length(len)
    }

    /// Check whether this length is undefined (unknown a priori).
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Check whether this length is well defined (not undefined).
    #[inline]
    pub fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    /// Fetch the concrete length value, if defined.
    #[inline]
    pub fn get(self) -> Option<u32> {
        if self.is_undefined() {
            None
        } else {
            Some(self.0)
        }
    }
}

impl PartialEq<Length> for Length {
    fn eq(&self, other: &Length) -> bool {
        self.is_defined() && other.is_defined() && self.0 == other.0
    }
}

impl PartialEq<u32> for Length {
    fn eq(&self, other: &u32) -> bool {
        self.is_defined() && self.0 == *other
    }
}

impl PartialOrd<Length> for Length {
    fn partial_cmp(&self, other: &Length) -> Option<std::cmp::Ordering> {
        if self.is_undefined() || other.is_undefined() {
            None
        } else {
            self.0.partial_cmp(&other.0)
        }
    }
}

impl std::ops::Add<Length> for Length {
    type Output = Self;

    fn add(self, rhs: Length) -> Self::Output {
        if self.is_undefined() || rhs.is_undefined() {
            Length::UNDEFINED
        } else {
            Length(self.0 + rhs.0)
        }
    }
}

impl std::ops::Add<u32> for Length {
    type Output = Self;

    fn add(self, rhs: u32) -> Self::Output {
        if self.is_undefined() {
            Length::UNDEFINED
        } else {
            Length(self.0 + rhs)
        }
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_undefined() {
            f.write_str("Length(Undefined)")
        } else {
            write!(f, "Length({})", self.0)
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_undefined() {
            f.write_str("u/l")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_key_round_trip() {
        let tag = Tag(0x7FE0, 0x0010);
        assert_eq!(tag.key(), "x7FE00010");
        assert_eq!(Tag::from_key("x7FE00010").unwrap(), tag);
        assert_eq!(Tag::from_key("x0008103F").unwrap(), Tag(0x0008, 0x103F));
        assert!(Tag::from_key("7FE00010").is_err());
        assert!(Tag::from_key("x7FE0001").is_err());
        assert!(Tag::from_key("xZZZZ0010").is_err());
    }

    #[test]
    fn tag_displays_as_group_element() {
        assert_eq!(Tag(0x0028, 0x0100).to_string(), "(0028,0100)");
        assert_eq!(Tag(0xFFFE, 0xE0DD).to_string(), "(FFFE,E0DD)");
    }

    #[test]
    fn vr_from_binary() {
        assert_eq!(VR::from_binary([b'P', b'N']), Some(VR::PN));
        assert_eq!(VR::from_binary([b'S', b'Q']), Some(VR::SQ));
        assert_eq!(VR::from_binary([b'z', b'z']), None);
        assert_eq!(VR::from_binary([0x00, 0x01]), None);
    }

    #[test]
    fn vr_length_encoding_class() {
        assert!(VR::OB.has_32bit_length());
        assert!(VR::OW.has_32bit_length());
        assert!(VR::OF.has_32bit_length());
        assert!(VR::SQ.has_32bit_length());
        assert!(VR::UN.has_32bit_length());
        assert!(!VR::UT.has_32bit_length());
        assert!(!VR::OD.has_32bit_length());
        assert!(!VR::US.has_32bit_length());
        assert!(!VR::PN.has_32bit_length());
    }

    #[test]
    fn undefined_length_semantics() {
        assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
        assert_eq!(Length(8), Length(8));
        assert!((Length::defined(64) + Length::UNDEFINED).is_undefined());
        assert!((Length::UNDEFINED + 8).is_undefined());
        assert!(Length::defined(16) < Length::defined(64));
        assert!(!(Length::UNDEFINED < Length::defined(64)));
        assert!(!(Length::UNDEFINED > Length::defined(64)));
        assert_eq!(Length::UNDEFINED.to_string(), "u/l");
        assert_eq!(Length(42).to_string(), "42");
    }

    #[test]
    fn item_header_validation() {
        let item = SequenceItemHeader::new((0xFFFE, 0xE000), Length::UNDEFINED).unwrap();
        assert!(item.is_item());
        let delim = SequenceItemHeader::new((0xFFFE, 0xE00D), Length(0)).unwrap();
        assert!(delim.is_item_delimiter());
        assert!(SequenceItemHeader::new((0xFFFE, 0xE00D), Length(4)).is_err());
        assert!(SequenceItemHeader::new((0x0008, 0x0018), Length(0)).is_err());
    }
}
