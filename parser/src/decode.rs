//! The stateful data element decoder.
//!
//! [`ElementDecoder`] performs a single forward walk over the buffer,
//! reading one data element per call:
//! tag, value representation, value length, and the decoded value,
//! recursing into sequence items and pixel data fragments.
//! The walk is stateful in two ways:
//! the current buffer position,
//! and the _Bits Allocated_ value seen so far,
//! which resolves the OB/OW ambiguity of bulk data attributes.
//!
//! The decoder preserves the length-encoding table of its lineage:
//! the 32-bit value length class is exactly `{OB, OW, OF, SQ, UN}`,
//! and VRs without a dedicated binary decoding (including OD)
//! are read as backslash-separated Latin-1 strings.

use dcmbuf_core::dictionary::{DataDictionary, VirtualVr};
use dcmbuf_core::header::SequenceItemHeader;
use dcmbuf_core::value::{Fragments, Value, C};
use dcmbuf_core::{DataElement, Header, Length, Tag, VR};
use dcmbuf_dictionary_std::tags::{BITS_ALLOCATED, PIXEL_DATA};
use smallvec::smallvec;
use snafu::{ensure, OptionExt};

use crate::cursor::ByteCursor;
use crate::dataset::{DataSet, DataSetElement};
use crate::error::{MalformedFramingSnafu, Result, TruncatedElementSnafu};

/// The maximum admitted sequence nesting depth.
/// Deeper nesting aborts the parse with a framing error,
/// capping stack use on hostile inputs.
pub const MAX_SEQUENCE_DEPTH: u32 = 64;

/// A stateful decoder of data elements over a byte cursor.
///
/// `D` is the attribute dictionary used to recover value representations
/// under implicit VR encoding.
#[derive(Debug)]
pub struct ElementDecoder<'a, D> {
    cursor: ByteCursor<'a>,
    dict: D,
    explicit_vr: bool,
    position: usize,
    bits_allocated: Option<u16>,
}

impl<'a, D> ElementDecoder<'a, D>
where
    D: DataDictionary,
{
    /// Create a new decoder over the given cursor,
    /// starting its walk at `position`.
    pub fn new(cursor: ByteCursor<'a>, dict: D, explicit_vr: bool, position: usize) -> Self {
        ElementDecoder {
            cursor,
            dict,
            explicit_vr,
            position,
            bits_allocated: None,
        }
    }

    /// The current position of the walk:
    /// the offset one past the end of the last decoded element.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the walk has reached the end of the buffer.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.cursor.len()
    }

    fn read_tag(&mut self) -> Result<Tag> {
        let group = self.cursor.read_u16(self.position)?;
        let element = self.cursor.read_u16(self.position + 2)?;
        self.position += 4;
        Ok(Tag(group, element))
    }

    fn peek_tag(&self) -> Result<Tag> {
        let group = self.cursor.read_u16(self.position)?;
        let element = self.cursor.read_u16(self.position + 2)?;
        Ok(Tag(group, element))
    }

    /// Read one data element at the current position.
    ///
    /// Item and delimiter tags are not data elements;
    /// meeting one here means the stream's nesting is broken.
    pub fn read_element(&mut self) -> Result<DataSetElement> {
        self.read_element_impl(0)
    }

    fn read_element_impl(&mut self, depth: u32) -> Result<DataSetElement> {
        let start = self.position;
        let tag = self.read_tag()?;
        ensure!(
            !is_framing_tag(tag),
            MalformedFramingSnafu { tag, offset: start }
        );

        let (virtual_vr, raw_len) = self.read_vr_and_length(tag)?;
        let declared = Length(raw_len);

        // materialize the OB/OW ambiguity before the element is stored
        let vr = match virtual_vr {
            VirtualVr::Exact(vr) => vr,
            VirtualVr::Ox => match self.bits_allocated {
                Some(8) => VR::OB,
                _ => VR::OW,
            },
        };

        let value = if tag == PIXEL_DATA && declared.is_undefined() {
            self.read_pixel_sequence(start)?
        } else if vr == VR::SQ {
            self.read_sequence(tag, start, declared, depth)?
        } else {
            // an undefined length outside SQ and pixel data frames no bytes
            let len = declared.get().unwrap_or(0) as usize;
            self.read_primitive(tag, vr, len, start)?
        };

        if tag == BITS_ALLOCATED {
            if let Value::U16(v) = &value {
                if let Some(&bits) = v.first() {
                    self.bits_allocated = Some(bits);
                }
            }
        }

        Ok(DataElement::new(tag, vr, declared, value))
    }

    /// Acquire the VR and the raw 32-bit length field for the given tag,
    /// per the active encoding.
    fn read_vr_and_length(&mut self, tag: Tag) -> Result<(VirtualVr, u32)> {
        if !self.explicit_vr {
            let virtual_vr = self
                .dict
                .vr_of(tag)
                .unwrap_or(VirtualVr::Exact(VR::UN));
            let len = self.cursor.read_u32(self.position)?;
            self.position += 4;
            return Ok((virtual_vr, len));
        }

        let code = self.cursor.read_u8_slice(self.position, 2)?;
        let code = [code[0], code[1]];
        self.position += 2;
        let vr = match VR::from_binary(code) {
            Some(vr) => vr,
            None => {
                tracing::warn!(
                    "unknown VR code {:?} for {} at offset {}, decoding as UN",
                    code.escape_ascii().to_string(),
                    tag,
                    self.position - 2,
                );
                VR::UN
            }
        };

        let len = if vr.has_32bit_length() {
            // skip 2 reserved bytes, then a 32-bit length
            let len = self.cursor.read_u32(self.position + 2)?;
            self.position += 6;
            len
        } else {
            let len = self.cursor.read_u16(self.position)?;
            self.position += 2;
            u32::from(len)
        };
        Ok((VirtualVr::Exact(vr), len))
    }

    /// Read a primitive value of `len` bytes with the given VR
    /// and advance past it.
    fn read_primitive(
        &mut self,
        tag: Tag,
        vr: VR,
        len: usize,
        elem_start: usize,
    ) -> Result<Value<DataSet>> {
        ensure!(
            self.cursor.remaining(self.position) >= len,
            TruncatedElementSnafu {
                tag,
                vr,
                len: len as u32,
                offset: elem_start,
            }
        );
        let offset = self.position;
        let value = if len == 0 {
            Value::Empty
        } else {
            match vr {
                VR::OB | VR::UN => Value::U8(self.cursor.read_u8_array(offset, len)?),
                VR::OW | VR::OF => match self.bits_allocated {
                    Some(8) => Value::U8(self.cursor.read_u8_array(offset, len)?),
                    _ => Value::U16(self.cursor.read_u16_array(offset, len)?),
                },
                VR::US => Value::U16(self.cursor.read_u16_array(offset, len)?),
                VR::UL => Value::U32(self.cursor.read_u32_array(offset, len)?),
                VR::SS => Value::I16(self.cursor.read_i16_array(offset, len)?),
                VR::SL => Value::I32(self.cursor.read_i32_array(offset, len)?),
                VR::FL => Value::F32(self.cursor.read_f32_array(offset, len)?),
                VR::FD => Value::F64(self.cursor.read_f64_array(offset, len)?),
                VR::AT => {
                    let words = self.cursor.read_u16_array(offset, len)?;
                    Value::Tags(
                        words
                            .chunks_exact(2)
                            .map(|pair| Tag(pair[0], pair[1]))
                            .collect(),
                    )
                }
                VR::SQ => unreachable!("sequence values are read by read_sequence"),
                _ => {
                    let text = self.cursor.read_string(offset, len)?;
                    Value::Strs(text.split('\\').map(str::to_owned).collect())
                }
            }
        };
        self.position += len;
        Ok(value)
    }

    /// Read an item or delimiter header (tag plus 32-bit length, no VR).
    fn read_item_header(&mut self) -> Result<(SequenceItemHeader, usize)> {
        let offset = self.position;
        let tag = self.read_tag()?;
        let len = self.cursor.read_u32(self.position)?;
        self.position += 4;
        let header = SequenceItemHeader::new(tag, Length(len))
            .ok()
            .context(MalformedFramingSnafu { tag, offset })?;
        Ok((header, offset))
    }

    /// Read the item list of a sequence element.
    fn read_sequence(
        &mut self,
        tag: Tag,
        elem_start: usize,
        declared: Length,
        depth: u32,
    ) -> Result<Value<DataSet>> {
        ensure!(
            depth < MAX_SEQUENCE_DEPTH,
            MalformedFramingSnafu {
                tag,
                offset: elem_start,
            }
        );
        let mut items: C<DataSet> = smallvec![];
        if let Some(len) = declared.get() {
            let end = self.position + len as usize;
            ensure!(
                end <= self.cursor.len(),
                TruncatedElementSnafu {
                    tag,
                    vr: VR::SQ,
                    len,
                    offset: elem_start,
                }
            );
            while self.position < end {
                let (header, offset) = self.read_item_header()?;
                match header {
                    SequenceItemHeader::Item { len } => {
                        items.push(self.read_item(len, depth + 1)?);
                    }
                    other => {
                        return MalformedFramingSnafu {
                            tag: other.tag(),
                            offset,
                        }
                        .fail()
                    }
                }
            }
            ensure!(
                self.position == end,
                MalformedFramingSnafu {
                    tag,
                    offset: elem_start,
                }
            );
        } else {
            loop {
                let (header, offset) = self.read_item_header()?;
                match header {
                    SequenceItemHeader::Item { len } => {
                        items.push(self.read_item(len, depth + 1)?);
                    }
                    SequenceItemHeader::SequenceDelimiter => break,
                    SequenceItemHeader::ItemDelimiter => {
                        return MalformedFramingSnafu {
                            tag: Tag(0xFFFE, 0xE00D),
                            offset,
                        }
                        .fail()
                    }
                }
            }
        }
        Ok(Value::new_sequence(items, declared))
    }

    /// Read the contents of one sequence item whose header was just
    /// consumed. The item's own record is stored under its tag key,
    /// followed by the child elements.
    fn read_item(&mut self, len: Length, depth: u32) -> Result<DataSet> {
        let item_tag = Tag(0xFFFE, 0xE000);
        let mut data = DataSet::new();
        data.put(DataElement::new(item_tag, VR::UN, len, Value::Empty));
        if let Some(len) = len.get() {
            let end = self.position + len as usize;
            ensure!(
                end <= self.cursor.len(),
                TruncatedElementSnafu {
                    tag: item_tag,
                    vr: VR::UN,
                    len,
                    offset: end - len as usize - 8,
                }
            );
            while self.position < end {
                let elem = self.read_element_impl(depth)?;
                data.put(elem);
            }
            ensure!(
                self.position == end,
                MalformedFramingSnafu {
                    tag: item_tag,
                    offset: end,
                }
            );
        } else {
            loop {
                if self.peek_tag()? == Tag(0xFFFE, 0xE00D) {
                    // consume the delimiter; it is not stored
                    self.read_item_header()?;
                    break;
                }
                let elem = self.read_element_impl(depth)?;
                data.put(elem);
            }
        }
        Ok(data)
    }

    /// Read the item stream of an undefined-length pixel data element:
    /// the Basic Offset Table item first,
    /// then one fragment per item until the sequence delimiter.
    fn read_pixel_sequence(&mut self, elem_start: usize) -> Result<Value<DataSet>> {
        let (header, offset) = self.read_item_header()?;
        let bot_len = match header {
            SequenceItemHeader::Item { len } => len.get().context(MalformedFramingSnafu {
                tag: Tag(0xFFFE, 0xE000),
                offset,
            })? as usize,
            other => {
                return MalformedFramingSnafu {
                    tag: other.tag(),
                    offset,
                }
                .fail()
            }
        };
        ensure!(
            self.cursor.remaining(self.position) >= bot_len,
            TruncatedElementSnafu {
                tag: PIXEL_DATA,
                vr: VR::OB,
                len: bot_len as u32,
                offset: elem_start,
            }
        );
        let offset_table = self.cursor.read_u32_array(self.position, bot_len)?;
        self.position += bot_len;

        let mut fragments: Fragments = smallvec![];
        loop {
            let (header, offset) = self.read_item_header()?;
            match header {
                SequenceItemHeader::Item { len } => {
                    let len = len.get().context(MalformedFramingSnafu {
                        tag: Tag(0xFFFE, 0xE000),
                        offset,
                    })? as usize;
                    ensure!(
                        self.cursor.remaining(self.position) >= len,
                        TruncatedElementSnafu {
                            tag: PIXEL_DATA,
                            vr: VR::OB,
                            len: len as u32,
                            offset,
                        }
                    );
                    fragments.push(self.cursor.read_u8_slice(self.position, len)?.to_vec());
                    self.position += len;
                }
                SequenceItemHeader::SequenceDelimiter => break,
                SequenceItemHeader::ItemDelimiter => {
                    return MalformedFramingSnafu {
                        tag: Tag(0xFFFE, 0xE00D),
                        offset,
                    }
                    .fail()
                }
            }
        }
        Ok(Value::new_pixel_sequence(offset_table, fragments))
    }
}

#[inline]
fn is_framing_tag(tag: Tag) -> bool {
    tag.group() == 0xFFFE && matches!(tag.element(), 0xE000 | 0xE00D | 0xE0DD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use byteordered::Endianness;
    use dcmbuf_core::{HasLength, Header};
    use dcmbuf_dictionary_std::StandardDataDictionary;

    fn explicit_le(data: &[u8]) -> ElementDecoder<'_, StandardDataDictionary> {
        ElementDecoder::new(
            ByteCursor::new(data, Endianness::Little),
            StandardDataDictionary,
            true,
            0,
        )
    }

    fn implicit_le(data: &[u8]) -> ElementDecoder<'_, StandardDataDictionary> {
        ElementDecoder::new(
            ByteCursor::new(data, Endianness::Little),
            StandardDataDictionary,
            false,
            0,
        )
    }

    // manually crafting two DICOM data elements
    //  Tag: (0002,0010) Transfer Syntax UID, VR: UI, Length: 20
    //  Value: "1.2.840.10008.1.2.1\0"
    // --
    //  Tag: (0010,0010) Patient's Name, VR: PN, Length: 8
    //  Value: "DOE^JOHN"
    const RAW_EXPLICIT: &[u8] = &[
        0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00, b'1', b'.', b'2', b'.', b'8', b'4', b'0',
        b'.', b'1', b'0', b'0', b'0', b'8', b'.', b'1', b'.', b'2', b'.', b'1', 0x00, 0x10, 0x00,
        0x10, 0x00, b'P', b'N', 0x08, 0x00, b'D', b'O', b'E', b'^', b'J', b'O', b'H', b'N',
    ];

    #[test]
    fn decode_explicit_vr_elements() {
        let mut dec = explicit_le(RAW_EXPLICIT);
        let elem = dec.read_element().unwrap();
        assert_eq!(elem.tag(), Tag(0x0002, 0x0010));
        assert_eq!(elem.vr(), VR::UI);
        assert_eq!(elem.length(), Length(20));
        // stored raw, cleaned on retrieval
        assert_eq!(elem.value().strings().unwrap()[0], "1.2.840.10008.1.2.1\0");
        assert_eq!(elem.to_str().unwrap(), "1.2.840.10008.1.2.1");
        assert_eq!(dec.position(), 28);

        let elem = dec.read_element().unwrap();
        assert_eq!(elem.tag(), Tag(0x0010, 0x0010));
        assert_eq!(elem.vr(), VR::PN);
        assert_eq!(elem.to_str().unwrap(), "DOE^JOHN");
        assert_eq!(dec.position(), RAW_EXPLICIT.len());
        assert!(dec.is_at_end());
    }

    #[test]
    fn decode_implicit_vr_resolves_through_dictionary() {
        //  (0010,0020) Patient ID, length 6, "ID0001"
        let raw: &[u8] = &[
            0x10, 0x00, 0x20, 0x00, 0x06, 0x00, 0x00, 0x00, b'I', b'D', b'0', b'0', b'0', b'1',
        ];
        let mut dec = implicit_le(raw);
        let elem = dec.read_element().unwrap();
        assert_eq!(elem.tag(), Tag(0x0010, 0x0020));
        assert_eq!(elem.vr(), VR::LO);
        assert_eq!(elem.to_str().unwrap(), "ID0001");
        assert_eq!(dec.position(), 14);
    }

    #[test]
    fn decode_implicit_vr_unknown_tag_as_un() {
        let raw: &[u8] = &[0x09, 0x00, 0x01, 0x10, 0x02, 0x00, 0x00, 0x00, 0xAB, 0xCD];
        let mut dec = implicit_le(raw);
        let elem = dec.read_element().unwrap();
        assert_eq!(elem.vr(), VR::UN);
        assert_eq!(elem.value().uint8s().unwrap(), &[0xAB, 0xCD]);
    }

    #[test]
    fn decode_big_endian_numbers() {
        //  (0028,0010) Rows, US, length 2, value 512
        let raw: &[u8] = &[0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02, 0x02, 0x00];
        let mut dec = ElementDecoder::new(
            ByteCursor::new(raw, Endianness::Big),
            StandardDataDictionary,
            true,
            0,
        );
        let elem = dec.read_element().unwrap();
        assert_eq!(elem.tag(), Tag(0x0028, 0x0010));
        assert_eq!(elem.value().uint16s().unwrap(), &[512]);
    }

    #[test]
    fn decode_unknown_explicit_vr_as_un_with_32bit_length() {
        // bogus VR "zz" takes the reserved + 32-bit length path
        let raw: &[u8] = &[
            0x09, 0x00, 0x01, 0x10, b'z', b'z', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0xAB, 0xCD,
        ];
        let mut dec = explicit_le(raw);
        let elem = dec.read_element().unwrap();
        assert_eq!(elem.vr(), VR::UN);
        assert_eq!(elem.length(), Length(2));
        assert_eq!(elem.value().uint8s().unwrap(), &[0xAB, 0xCD]);
        assert_eq!(dec.position(), raw.len());
    }

    #[test]
    fn decode_at_value_pairs() {
        // explicit AT with two tag values, grouped into pairs
        let raw: &[u8] = &[
            0x09, 0x00, 0x10, 0x00, b'A', b'T', 0x08, 0x00, // AT, 8 bytes
            0x08, 0x00, 0x18, 0x00, // (0008,0018)
            0xE0, 0x7F, 0x10, 0x00, // (7FE0,0010)
        ];
        let mut dec = explicit_le(raw);
        let elem = dec.read_element().unwrap();
        assert_eq!(
            elem.value().tags().unwrap(),
            &[Tag(0x0008, 0x0018), Tag(0x7FE0, 0x0010)]
        );
    }

    #[test]
    fn decode_zero_length_value_is_empty() {
        let raw: &[u8] = &[0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x00, 0x00];
        let mut dec = explicit_le(raw);
        let elem = dec.read_element().unwrap();
        assert_eq!(elem.value(), &Value::Empty);
        assert!(elem.is_empty());
    }

    // (0008,103F) SQ with undefined length, containing
    // one undefined-length item with (0008,0060) CS "MR",
    // closed by item and sequence delimiters
    const RAW_SEQ_UNDEFINED: &[u8] = &[
        0x08, 0x00, 0x3F, 0x10, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, // SQ u/l
        0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF, // item u/l
        0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'M', b'R', // (0008,0060)
        0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00, // item delim
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00, // sequence delim
    ];

    #[test]
    fn decode_undefined_length_sequence() {
        let mut dec = explicit_le(RAW_SEQ_UNDEFINED);
        let elem = dec.read_element().unwrap();
        assert_eq!(elem.tag(), Tag(0x0008, 0x103F));
        assert_eq!(elem.vr(), VR::SQ);
        assert!(elem.length().is_undefined());
        let items = elem.value().items().unwrap();
        assert_eq!(items.len(), 1);
        // the item's own record, then the child; no delimiter entries
        assert_eq!(items[0].len(), 2);
        let own = items[0].element(Tag(0xFFFE, 0xE000)).unwrap();
        assert!(own.length().is_undefined());
        let child = items[0].element(Tag(0x0008, 0x0060)).unwrap();
        assert_eq!(child.to_str().unwrap(), "MR");
        assert!(items[0].element(Tag(0xFFFE, 0xE00D)).is_none());
        // everything was consumed, including the sequence delimiter
        assert_eq!(dec.position(), RAW_SEQ_UNDEFINED.len());
    }

    #[test]
    fn decode_explicit_length_sequence() {
        // (0008,1110) SQ, explicit length 18: one item of explicit length 10
        let raw: &[u8] = &[
            0x08, 0x00, 0x10, 0x11, b'S', b'Q', 0x00, 0x00, 0x12, 0x00, 0x00, 0x00, // SQ 18
            0xFE, 0xFF, 0x00, 0xE0, 0x0A, 0x00, 0x00, 0x00, // item, length 10
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'C', b'T', // (0008,0060)
        ];
        let mut dec = explicit_le(raw);
        let elem = dec.read_element().unwrap();
        assert_eq!(elem.length(), Length(18));
        let items = elem.value().items().unwrap();
        assert_eq!(items.len(), 1);
        let own = items[0].element(Tag(0xFFFE, 0xE000)).unwrap();
        assert_eq!(own.length(), Length(10));
        assert_eq!(
            items[0].element(Tag(0x0008, 0x0060)).unwrap().to_str().unwrap(),
            "CT"
        );
        assert_eq!(dec.position(), raw.len());
    }

    #[test]
    fn decode_pixel_sequence() {
        // (7FE0,0010) OB u/l: empty offset table, two fragments
        let raw: &[u8] = &[
            0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00, // offset table, empty
            0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04,
            0xFE, 0xFF, 0x00, 0xE0, 0x02, 0x00, 0x00, 0x00, 0x05, 0x06,
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        let mut dec = explicit_le(raw);
        let elem = dec.read_element().unwrap();
        assert_eq!(elem.tag(), Tag(0x7FE0, 0x0010));
        assert!(elem.length().is_undefined());
        assert!(elem.value().offset_table().unwrap().is_empty());
        let fragments = elem.value().fragments().unwrap();
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0], vec![1, 2, 3, 4]);
        assert_eq!(fragments[1], vec![5, 6]);
        assert_eq!(elem.value().multiplicity(), 3);
        assert_eq!(dec.position(), raw.len());
    }

    #[test]
    fn implicit_pixel_data_width_follows_bits_allocated() {
        // (0028,0100) Bits Allocated = 8, then (7FE0,0010) with 4 bytes
        let raw: &[u8] = &[
            0x28, 0x00, 0x00, 0x01, 0x02, 0x00, 0x00, 0x00, 0x08, 0x00, // BitsAllocated 8
            0xE0, 0x7F, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04,
        ];
        let mut dec = implicit_le(raw);
        dec.read_element().unwrap();
        let elem = dec.read_element().unwrap();
        assert_eq!(elem.vr(), VR::OB);
        assert_eq!(elem.value().uint8s().unwrap(), &[1, 2, 3, 4]);

        // without Bits Allocated 8, pixel data decodes as 16-bit words
        let raw: &[u8] = &[
            0xE0, 0x7F, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04,
        ];
        let mut dec = implicit_le(raw);
        let elem = dec.read_element().unwrap();
        assert_eq!(elem.vr(), VR::OW);
        assert_eq!(elem.value().uint16s().unwrap(), &[0x0201, 0x0403]);
    }

    #[test]
    fn stray_delimiter_is_malformed_framing() {
        let raw: &[u8] = &[0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00];
        let mut dec = explicit_le(raw);
        assert!(matches!(
            dec.read_element(),
            Err(Error::MalformedFraming {
                tag: Tag(0xFFFE, 0xE0DD),
                offset: 0,
                ..
            })
        ));
    }

    #[test]
    fn overlong_value_is_truncated_element() {
        // declares 64 value bytes, provides none
        let raw: &[u8] = &[0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x40, 0x00];
        let mut dec = explicit_le(raw);
        assert!(matches!(
            dec.read_element(),
            Err(Error::TruncatedElement {
                tag: Tag(0x0010, 0x0010),
                vr: VR::PN,
                len: 64,
                ..
            })
        ));
    }

    #[test]
    fn header_cut_short_is_truncated_buffer() {
        let raw: &[u8] = &[0x10, 0x00, 0x10, 0x00, b'P'];
        let mut dec = explicit_le(raw);
        assert!(matches!(
            dec.read_element(),
            Err(Error::TruncatedBuffer { .. })
        ));
    }
}
