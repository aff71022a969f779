//! Declaration and implementation of the DICOM element value variant.
//!
//! The value of a data element is polymorphic over its value representation:
//! character strings split into components, fixed-width numeric arrays,
//! attribute tag lists, nested data set sequences,
//! and encapsulated pixel data sequences.
//! [`Value`] is the tagged union of those shapes,
//! generic over the nested item type `I`
//! so that this crate does not need to know
//! how a data set container is implemented.

use smallvec::SmallVec;
use snafu::{Backtrace, Snafu};
use std::fmt;

use crate::header::{Length, Tag};

/// An aggregation of one or more components in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// The fragments of an encapsulated pixel data element:
/// each fragment is a contiguous run of compressed bytes.
pub type Fragments = C<Vec<u8>>;

/// An enum representing an abstraction of a DICOM value's shape,
/// without the concrete payload.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum ValueType {
    /// No data. Used for zero-length values.
    Empty,
    /// A sequence of strings.
    Strs,
    /// A sequence of attribute tags.
    Tags,
    /// A sequence of unsigned 8-bit integers.
    U8,
    /// A sequence of signed 16-bit integers.
    I16,
    /// A sequence of unsigned 16-bit integers.
    U16,
    /// A sequence of signed 32-bit integers.
    I32,
    /// A sequence of unsigned 32-bit integers.
    U32,
    /// A sequence of 32-bit floating point numbers.
    F32,
    /// A sequence of 64-bit floating point numbers.
    F64,
    /// A nested sequence of items.
    Sequence,
    /// An encapsulated pixel data sequence.
    PixelSequence,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// An error raised when retrieving a value of one shape
/// from an element holding another.
#[derive(Debug, Snafu)]
#[snafu(display("bad value cast: requested {} but value is {}", requested, got))]
pub struct CastValueError {
    /// The value shape requested by the caller.
    pub requested: &'static str,
    /// The shape of the value actually present.
    pub got: ValueType,
    backtrace: Backtrace,
}

/// Strip the trailing padding that DICOM string values may carry:
/// ASCII space, NUL bytes, and the U+200B zero-width space.
///
/// Stored value components keep their raw characters;
/// cleaning is applied only at comparison and display time.
pub fn clean_str(s: &str) -> &str {
    s.trim_end_matches(|c: char| c == ' ' || c == '\0' || c == '\u{200B}')
}

/// A DICOM element value,
/// discriminated by the shape that its value representation dictates.
///
/// `I` is the data set type held by sequence items.
#[derive(Debug, PartialEq, Clone)]
pub enum Value<I> {
    /// No data. Used for zero-length values.
    Empty,

    /// The backslash-separated components of a character-string value.
    /// Used for all string-class VRs (AE, AS, CS, DA, DS, DT, IS, LO,
    /// LT, PN, SH, ST, TM, UI, UT and any other VR without a dedicated
    /// binary decoding).
    Strs(C<String>),

    /// A sequence of attribute tags. Used for AT.
    Tags(C<Tag>),

    /// A sequence of unsigned 8-bit integers.
    /// Used for OB and UN, and for 8-bit bulk data.
    U8(C<u8>),

    /// A sequence of signed 16-bit integers. Used for SS.
    I16(C<i16>),

    /// A sequence of unsigned 16-bit integers.
    /// Used for US and for 16-bit bulk data (OW, OF).
    U16(C<u16>),

    /// A sequence of signed 32-bit integers. Used for SL.
    I32(C<i32>),

    /// A sequence of unsigned 32-bit integers. Used for UL.
    U32(C<u32>),

    /// A sequence of 32-bit floating point numbers. Used for FL.
    F32(C<f32>),

    /// A sequence of 64-bit floating point numbers. Used for FD.
    F64(C<f64>),

    /// A sequence of nested data set items.
    Sequence {
        /// Item collection.
        items: C<I>,
        /// The byte length declared by the sequence header
        /// (may be undefined).
        length: Length,
    },

    /// An encapsulated pixel data sequence:
    /// the decoded Basic Offset Table followed by the compressed fragments.
    PixelSequence {
        /// The offsets in the Basic Offset Table item.
        offset_table: C<u32>,
        /// The sequence of compressed fragments.
        fragments: Fragments,
    },
}

impl<I> Value<I> {
    /// Create a sequence value from the given items,
    /// with the declared sequence length.
    pub fn new_sequence<T>(items: T, length: Length) -> Self
    where
        T: Into<C<I>>,
    {
        Value::Sequence {
            items: items.into(),
            length,
        }
    }

    /// Create an encapsulated pixel data sequence value
    /// from an offset table and a list of fragments.
    pub fn new_pixel_sequence<T>(offset_table: C<u32>, fragments: T) -> Self
    where
        T: Into<Fragments>,
    {
        Value::PixelSequence {
            offset_table,
            fragments: fragments.into(),
        }
    }

    /// Retrieve the shape of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Empty => ValueType::Empty,
            Value::Strs(_) => ValueType::Strs,
            Value::Tags(_) => ValueType::Tags,
            Value::U8(_) => ValueType::U8,
            Value::I16(_) => ValueType::I16,
            Value::U16(_) => ValueType::U16,
            Value::I32(_) => ValueType::I32,
            Value::U32(_) => ValueType::U32,
            Value::F32(_) => ValueType::F32,
            Value::F64(_) => ValueType::F64,
            Value::Sequence { .. } => ValueType::Sequence,
            Value::PixelSequence { .. } => ValueType::PixelSequence,
        }
    }

    /// Retrieve the number of components in the value:
    /// string or numeric components, tags, sequence items,
    /// or pixel sequence items (the offset table counts as one).
    pub fn multiplicity(&self) -> usize {
        match self {
            Value::Empty => 0,
            Value::Strs(values) => values.len(),
            Value::Tags(values) => values.len(),
            Value::U8(values) => values.len(),
            Value::I16(values) => values.len(),
            Value::U16(values) => values.len(),
            Value::I32(values) => values.len(),
            Value::U32(values) => values.len(),
            Value::F32(values) => values.len(),
            Value::F64(values) => values.len(),
            Value::Sequence { items, .. } => items.len(),
            Value::PixelSequence { fragments, .. } => 1 + fragments.len(),
        }
    }

    /// Get the raw string components of this value,
    /// if it is a character-string value.
    pub fn strings(&self) -> Result<&[String], CastValueError> {
        match self {
            Value::Strs(values) => Ok(values),
            other => CastValueSnafu {
                requested: "strings",
                got: other.value_type(),
            }
            .fail(),
        }
    }

    /// Get this value as a single cleaned string:
    /// the sole component with trailing space, NUL
    /// and zero-width space padding removed.
    /// An empty value yields an empty string.
    ///
    /// Returns an error for multi-component or non-string values.
    pub fn to_str(&self) -> Result<String, CastValueError> {
        match self {
            Value::Empty => Ok(String::new()),
            Value::Strs(values) if values.len() == 1 => Ok(clean_str(&values[0]).to_owned()),
            other => CastValueSnafu {
                requested: "str",
                got: other.value_type(),
            }
            .fail(),
        }
    }

    /// Get the attribute tags of this value, if it is an AT value.
    pub fn tags(&self) -> Result<&[Tag], CastValueError> {
        match self {
            Value::Tags(values) => Ok(values),
            other => CastValueSnafu {
                requested: "tags",
                got: other.value_type(),
            }
            .fail(),
        }
    }

    /// Get the nested items of this value, if it is a sequence.
    pub fn items(&self) -> Result<&[I], CastValueError> {
        match self {
            Value::Sequence { items, .. } => Ok(items),
            other => CastValueSnafu {
                requested: "items",
                got: other.value_type(),
            }
            .fail(),
        }
    }

    /// Get the Basic Offset Table of this value,
    /// if it is an encapsulated pixel data sequence.
    pub fn offset_table(&self) -> Result<&[u32], CastValueError> {
        match self {
            Value::PixelSequence { offset_table, .. } => Ok(offset_table),
            other => CastValueSnafu {
                requested: "offset table",
                got: other.value_type(),
            }
            .fail(),
        }
    }

    /// Get the compressed fragments of this value,
    /// if it is an encapsulated pixel data sequence.
    pub fn fragments(&self) -> Result<&[Vec<u8>], CastValueError> {
        match self {
            Value::PixelSequence { fragments, .. } => Ok(fragments),
            other => CastValueSnafu {
                requested: "fragments",
                got: other.value_type(),
            }
            .fail(),
        }
    }
}

macro_rules! impl_value_getter {
    ($name: ident, $variant: ident, $ret: ty, $req: literal) => {
        impl<I> Value<I> {
            /// Get the numeric components of this value
            /// if they are stored with the matching element width,
            /// or an error otherwise.
            pub fn $name(&self) -> Result<&[$ret], CastValueError> {
                match self {
                    Value::$variant(values) => Ok(values),
                    other => CastValueSnafu {
                        requested: $req,
                        got: other.value_type(),
                    }
                    .fail(),
                }
            }
        }
    };
}

impl_value_getter!(uint8s, U8, u8, "uint8s");
impl_value_getter!(int16s, I16, i16, "int16s");
impl_value_getter!(uint16s, U16, u16, "uint16s");
impl_value_getter!(int32s, I32, i32, "int32s");
impl_value_getter!(uint32s, U32, u32, "uint32s");
impl_value_getter!(float32s, F32, f32, "float32s");
impl_value_getter!(float64s, F64, f64, "float64s");
