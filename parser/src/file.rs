//! The top-level Part-10 file parser.
//!
//! [`DicomFile::from_bytes`] drives the whole decoding process:
//! preamble and magic code verification,
//! the file meta group (always Explicit VR Little Endian),
//! transfer syntax selection,
//! and the data set walk to the end of the buffer.
//! Meta and data set elements land in one wire-ordered [`DataSet`].

use byteordered::Endianness;
use dcmbuf_core::dictionary::DataDictionary;
use dcmbuf_core::{Header, Tag, Value};
use dcmbuf_dictionary_std::tags::{
    FILE_META_INFORMATION_GROUP_LENGTH, PIXEL_DATA, TRANSFER_SYNTAX_UID,
};
use dcmbuf_dictionary_std::StandardDataDictionary;
use snafu::{ensure, OptionExt};

use crate::cursor::ByteCursor;
use crate::dataset::{DataSet, DataSetElement};
use crate::decode::ElementDecoder;
use crate::error::{
    MalformedFramingSnafu, MissingTransferSyntaxSnafu, NotDicomSnafu, Result,
    UnsupportedTransferSyntaxSnafu,
};
use crate::transfer_syntax::{Codec, TransferSyntax};

/// The length of the DICOM file preamble, in bytes.
pub const PREAMBLE_LENGTH: usize = 128;

const DICM_MAGIC_CODE: [u8; 4] = *b"DICM";

/// A fully parsed DICOM Part-10 file.
///
/// Holds the decoded elements of both the file meta group
/// and the main data set, in wire order,
/// plus the classified transfer syntax.
#[derive(Debug, Clone)]
pub struct DicomFile<D = StandardDataDictionary> {
    elements: DataSet,
    transfer_syntax: &'static TransferSyntax,
    dict: D,
}

/// A view of the parsed pixel payload.
///
/// Encapsulated (compressed) pixel data is never concatenated:
/// the fragments are handed to the caller as decoded,
/// ready for an image decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelData<'a> {
    /// No pixel data element is present (valid for non-image objects).
    Absent,
    /// Native pixel data with 8 bits allocated per sample.
    Bytes(&'a [u8]),
    /// Native pixel data with 16 bits allocated per sample.
    Words(&'a [u16]),
    /// Encapsulated pixel data: the Basic Offset Table
    /// and the compressed fragments, in wire order.
    Encapsulated {
        /// The offsets declared in the Basic Offset Table (may be empty).
        offset_table: &'a [u32],
        /// The compressed fragments.
        fragments: &'a [Vec<u8>],
    },
}

impl DicomFile<StandardDataDictionary> {
    /// Parse a Part-10 file from an in-memory buffer,
    /// consulting the standard attribute dictionary.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        DicomFile::from_bytes_with_dict(data, StandardDataDictionary)
    }
}

impl<D> DicomFile<D>
where
    D: DataDictionary,
{
    /// Parse a Part-10 file from an in-memory buffer
    /// with the given attribute dictionary.
    pub fn from_bytes_with_dict(data: &[u8], dict: D) -> Result<Self> {
        ensure!(
            data.len() >= PREAMBLE_LENGTH + DICM_MAGIC_CODE.len()
                && data[PREAMBLE_LENGTH..PREAMBLE_LENGTH + 4] == DICM_MAGIC_CODE,
            NotDicomSnafu
        );

        let mut elements = DataSet::new();

        // the file meta group is always Explicit VR Little Endian
        let meta_cursor = ByteCursor::new(data, Endianness::Little);
        let mut meta_decoder = ElementDecoder::new(meta_cursor, &dict, true, PREAMBLE_LENGTH + 4);

        let group_length_elem = meta_decoder.read_element()?;
        let meta_start = meta_decoder.position();
        let group_length = read_group_length(&group_length_elem)?;
        elements.put(group_length_elem);

        let meta_end = meta_start + group_length as usize;
        while meta_decoder.position() < meta_end {
            let elem = meta_decoder.read_element()?;
            elements.put(elem);
        }

        let transfer_syntax = classify_transfer_syntax(&elements)?;

        let mut decoder = ElementDecoder::new(
            ByteCursor::new(data, transfer_syntax.endianness()),
            &dict,
            transfer_syntax.explicit_vr(),
            meta_end,
        );
        while !decoder.is_at_end() {
            let elem = decoder.read_element()?;
            elements.put(elem);
        }

        if transfer_syntax.codec() == Codec::None {
            if let Some(elem) = elements.element(PIXEL_DATA) {
                if matches!(elem.value(), Value::PixelSequence { .. }) {
                    tracing::warn!(
                        "undefined-length pixel data under uncompressed transfer syntax {}",
                        transfer_syntax.uid(),
                    );
                }
            }
        }

        Ok(DicomFile {
            elements,
            transfer_syntax,
            dict,
        })
    }

    /// The decoded elements, in wire order.
    pub fn elements(&self) -> &DataSet {
        &self.elements
    }

    /// The transfer syntax the data set was decoded with.
    pub fn transfer_syntax(&self) -> &'static TransferSyntax {
        self.transfer_syntax
    }

    /// The attribute dictionary used for this file.
    pub fn dictionary(&self) -> &D {
        &self.dict
    }

    /// Retrieve the element with the given tag, if present.
    pub fn element(&self, tag: Tag) -> Option<&DataSetElement> {
        self.elements.element(tag)
    }

    /// Retrieve the element addressed by the canonical textual key form
    /// (e.g. `x7FE00010`), if present.
    pub fn element_by_key(&self, key: &str) -> Option<&DataSetElement> {
        self.elements.element_by_key(key)
    }

    /// Retrieve the element with the given attribute keyword
    /// (e.g. `"PatientName"`), if present.
    pub fn element_by_name(&self, name: &str) -> Option<&DataSetElement> {
        self.elements.element_by_name(&self.dict, name)
    }

    /// A view of the pixel payload, ready to hand to an image decoder.
    ///
    /// Native pixel data is returned as the element's own sample array;
    /// encapsulated pixel data keeps its fragment structure.
    pub fn pixel_data(&self) -> PixelData<'_> {
        match self.elements.element(PIXEL_DATA).map(|e| e.value()) {
            Some(Value::U8(samples)) => PixelData::Bytes(samples),
            Some(Value::U16(samples)) => PixelData::Words(samples),
            Some(Value::PixelSequence {
                offset_table,
                fragments,
            }) => PixelData::Encapsulated {
                offset_table,
                fragments,
            },
            _ => PixelData::Absent,
        }
    }
}

/// Fetch the value of the File Meta Information Group Length element,
/// which must lead the meta group.
fn read_group_length(elem: &DataSetElement) -> Result<u32> {
    ensure!(
        elem.tag() == FILE_META_INFORMATION_GROUP_LENGTH,
        MalformedFramingSnafu {
            tag: elem.tag(),
            offset: PREAMBLE_LENGTH + 4,
        }
    );
    let value = match elem.value() {
        Value::U32(v) if !v.is_empty() => Some(v[0]),
        _ => None,
    };
    value.context(MalformedFramingSnafu {
        tag: elem.tag(),
        offset: PREAMBLE_LENGTH + 4,
    })
}

/// Resolve and classify the Transfer Syntax UID from the meta group.
fn classify_transfer_syntax(elements: &DataSet) -> Result<&'static TransferSyntax> {
    let uid = elements
        .element(TRANSFER_SYNTAX_UID)
        .and_then(|e| e.to_str().ok())
        .context(MissingTransferSyntaxSnafu)?;
    let ts = TransferSyntax::from_uid(&uid).context(UnsupportedTransferSyntaxSnafu {
        uid: uid.clone(),
        name: "«unknown»",
    })?;
    ensure!(
        ts.is_supported(),
        UnsupportedTransferSyntaxSnafu {
            uid: ts.uid(),
            name: ts.name(),
        }
    );
    Ok(ts)
}
