//! This crate implements the byte-level decoder of the `dcmbuf` project:
//! a single-pass walk over an in-memory DICOM Part-10 buffer,
//! producing a wire-ordered collection of decoded data elements
//! and a view of the pixel payload.
//!
//! The decoding entry point is [`DicomFile::from_bytes`]:
//!
//! ```no_run
//! use dcmbuf_parser::DicomFile;
//!
//! let data = std::fs::read("image.dcm")?;
//! let obj = DicomFile::from_bytes(&data)?;
//! if let Some(elem) = obj.element_by_name("PatientName") {
//!     println!("{}", elem.to_str()?);
//! }
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```

pub mod cursor;
pub mod dataset;
pub mod decode;
pub mod error;
pub mod file;
pub mod transfer_syntax;

pub use crate::cursor::ByteCursor;
pub use crate::dataset::{DataSet, DataSetElement};
pub use crate::decode::ElementDecoder;
pub use crate::error::{Error, Result};
pub use crate::file::{DicomFile, PixelData, PREAMBLE_LENGTH};
pub use crate::transfer_syntax::{Codec, TransferSyntax};
