//! This crate contains the DICOM data model
//! on which the rest of the `dcmbuf` project is built:
//! attribute tags, value representations, value lengths,
//! element headers, the polymorphic element value,
//! and the attribute dictionary traits.
//!
//! No decoding lives here; see the `dcmbuf-parser` crate
//! for the Part-10 byte-level decoder.

pub mod dictionary;
pub mod header;
pub mod value;

pub use crate::dictionary::DataDictionary;
pub use crate::header::{DataElement, DataElementHeader, HasLength, Header, Length, Tag, VR};
pub use crate::value::{Value, C};
