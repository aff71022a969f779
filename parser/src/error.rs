//! The error types raised while decoding a Part-10 stream.
//!
//! All errors abort the parse; there is no partial-result mode.
//! Each variant carries the offending buffer offset
//! and, where applicable, the tag and VR of the element being read.

use dcmbuf_core::{Tag, VR};
use snafu::{Backtrace, Snafu};

/// The main error type of the decoding process.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
#[non_exhaustive]
pub enum Error {
    /// The buffer does not start with a 128-byte preamble
    /// followed by the `DICM` magic code.
    #[snafu(display("not a DICOM file: no `DICM` magic code at offset 128"))]
    NotDicom { backtrace: Backtrace },

    /// A primitive read ran past the end of the buffer.
    #[snafu(display("buffer too short: needed {} more bytes at offset {}", needed, offset))]
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        backtrace: Backtrace,
    },

    /// An element declared more value bytes than the buffer holds.
    #[snafu(display(
        "element {} {} at offset {} declares {} value bytes past the end of the buffer",
        tag,
        vr,
        offset,
        len
    ))]
    TruncatedElement {
        tag: Tag,
        vr: VR,
        len: u32,
        offset: usize,
        backtrace: Backtrace,
    },

    /// Item and delimiter tags were found outside their expected nesting,
    /// an explicit-length container was overrun,
    /// or sequences were nested beyond the supported depth.
    #[snafu(display("malformed framing: unexpected {} at offset {}", tag, offset))]
    MalformedFraming {
        tag: Tag,
        offset: usize,
        backtrace: Backtrace,
    },

    /// The declared transfer syntax is known but not decodable,
    /// or not known at all.
    #[snafu(display("unsupported transfer syntax {} ({})", uid, name))]
    UnsupportedTransferSyntax {
        uid: String,
        name: &'static str,
        backtrace: Backtrace,
    },

    /// The file meta group carries no Transfer Syntax UID (0002,0010).
    #[snafu(display("transfer syntax UID (0002,0010) is missing from the file meta group"))]
    MissingTransferSyntax { backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
