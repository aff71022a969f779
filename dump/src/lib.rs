//! DICOM data dumping library.
//!
//! This is a helper library for rendering parsed DICOM files
//! in a human readable, line-oriented format:
//! one line per element,
//! with the tag, VR, a value summary,
//! and a trailing `# VL, multiplicity keyword` column.
//! Sequences and pixel data sequences recurse with a 2-space indent
//! per nesting level,
//! synthesizing item and delimiter pseudo-rows
//! the way the framing would appear on the wire.

use dcmbuf_core::dictionary::DataDictionary;
use dcmbuf_core::value::{clean_str, Value};
use dcmbuf_core::{HasLength, Header, Length, Tag};
use dcmbuf_dictionary_std::tags::{ITEM, PIXEL_DATA};
use dcmbuf_dictionary_std::StandardDataDictionary;
use dcmbuf_parser::{DataSet, DataSetElement, DicomFile};
use itertools::Itertools;
use std::io::{Result as IoResult, Write};

/// The column width reserved for the value summary;
/// with the tag and VR prefix this lands the `#` column at 55.
const VALUE_WIDTH: usize = 39;

/// The longest rendered value summary before elision.
const MAX_VALUE_CHARACTERS: usize = 66;

/// One line of the dump: an element or a framing pseudo-row.
#[derive(Debug, Clone, PartialEq)]
pub struct DumpRow {
    /// The tag group part.
    pub group: u16,
    /// The tag element part.
    pub element: u16,
    /// The VR code, or `na` for framing rows, or `pi` for pixel fragments.
    pub vr: String,
    /// The rendered value or summary.
    pub value: String,
    /// The declared value length, or `u/l` when undefined.
    pub vl: String,
    /// The number of value components.
    pub multiplicity: usize,
    /// The attribute keyword, if known.
    pub keyword: String,
    /// The nesting level (2 spaces of indent each).
    pub level: usize,
}

impl DumpRow {
    /// Render this row as one dump line.
    pub fn to_line(&self) -> String {
        format!(
            "{}({:04x},{:04x}) {} {:<width$} # {:>3},{:>2} {}",
            "  ".repeat(self.level),
            self.group,
            self.element,
            self.vr,
            self.value,
            self.vl,
            self.multiplicity,
            self.keyword,
            width = VALUE_WIDTH,
        )
    }
}

/// Produce the dump rows of a parsed file, in wire order,
/// with sequence contents recursed into indented rows.
pub fn dump_rows<D>(obj: &DicomFile<D>) -> Vec<DumpRow>
where
    D: DataDictionary,
{
    let mut rows = Vec::new();
    for elem in obj.elements() {
        push_element_rows(&mut rows, elem, 0);
    }
    rows
}

/// Render the full textual dump of a parsed file,
/// with the section headers in front.
pub fn dump_file<D>(obj: &DicomFile<D>) -> String
where
    D: DataDictionary,
{
    let mut out = String::new();
    for line in dump_lines(obj) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Write the full textual dump of a parsed file to the given writer.
pub fn dump_file_to<W, D>(mut to: W, obj: &DicomFile<D>) -> IoResult<()>
where
    W: Write,
    D: DataDictionary,
{
    for line in dump_lines(obj) {
        writeln!(to, "{}", line)?;
    }
    Ok(())
}

fn dump_lines<D>(obj: &DicomFile<D>) -> Vec<String>
where
    D: DataDictionary,
{
    let mut lines = vec![
        String::new(),
        "# Dicom-File-Format".to_owned(),
        String::new(),
        "# Dicom-Meta-Information-Header".to_owned(),
        "# Used TransferSyntax: Explicit VR Little Endian".to_owned(),
    ];
    let mut in_meta = true;
    for row in dump_rows(obj) {
        if in_meta && row.level == 0 && row.group > 0x0002 {
            in_meta = false;
            lines.push(String::new());
            lines.push("# Dicom-Data-Set".to_owned());
            lines.push(format!(
                "# Used TransferSyntax: {}",
                obj.transfer_syntax().name()
            ));
        }
        lines.push(row.to_line());
    }
    lines
}

fn keyword_of(tag: Tag) -> String {
    StandardDataDictionary
        .by_tag(tag)
        .map(|e| e.alias.to_owned())
        .unwrap_or_else(|| "«Unknown Attribute»".to_owned())
}

fn push_element_rows(rows: &mut Vec<DumpRow>, elem: &DataSetElement, level: usize) {
    let tag = elem.tag();
    match elem.value() {
        Value::Sequence { items, .. } => {
            let framing = if elem.length().is_undefined() {
                "undefined"
            } else {
                "explicit"
            };
            rows.push(DumpRow {
                group: tag.group(),
                element: tag.element(),
                vr: elem.vr().to_string().to_owned(),
                value: format!("(Sequence with {} length #={})", framing, items.len()),
                vl: elem.length().to_string(),
                multiplicity: 1,
                keyword: keyword_of(tag),
                level,
            });
            for item in items {
                push_item_rows(rows, item, level + 1);
            }
            rows.push(delimiter_row(
                0xE0DD,
                "SequenceDelimitationItem",
                elem.length().is_defined(),
                level,
            ));
        }
        Value::PixelSequence {
            offset_table,
            fragments,
        } => {
            rows.push(DumpRow {
                group: tag.group(),
                element: tag.element(),
                vr: elem.vr().to_string().to_owned(),
                value: format!("(PixelSequence #={})", 1 + fragments.len()),
                vl: elem.length().to_string(),
                multiplicity: 1 + fragments.len(),
                keyword: keyword_of(tag),
                level,
            });
            rows.push(DumpRow {
                group: 0xFFFE,
                element: 0xE000,
                vr: "pi".to_owned(),
                value: format!("(BasicOffsetTable with {} entries)", offset_table.len()),
                vl: (offset_table.len() * 4).to_string(),
                multiplicity: 1,
                keyword: "Item".to_owned(),
                level: level + 1,
            });
            for fragment in fragments {
                rows.push(DumpRow {
                    group: 0xFFFE,
                    element: 0xE000,
                    vr: "pi".to_owned(),
                    value: format!("(Fragment with {} bytes)", fragment.len()),
                    vl: fragment.len().to_string(),
                    multiplicity: 1,
                    keyword: "Item".to_owned(),
                    level: level + 1,
                });
            }
            rows.push(delimiter_row(0xE0DD, "SequenceDelimitationItem", false, level));
        }
        value => {
            let multiplicity = value.multiplicity();
            let summary = if tag == PIXEL_DATA {
                "...".to_owned()
            } else {
                value_summary(value)
            };
            rows.push(DumpRow {
                group: tag.group(),
                element: tag.element(),
                vr: elem.vr().to_string().to_owned(),
                value: summary,
                vl: elem.length().to_string(),
                multiplicity,
                keyword: keyword_of(tag),
                level,
            });
        }
    }
}

fn push_item_rows(rows: &mut Vec<DumpRow>, item: &DataSet, level: usize) {
    // the item's own record leads its data set
    let own_length = item
        .element(ITEM)
        .map(|e| e.length())
        .unwrap_or(Length::UNDEFINED);
    let framing = if own_length.is_undefined() {
        "undefined"
    } else {
        "explicit"
    };
    let children = item.len().saturating_sub(1);
    rows.push(DumpRow {
        group: 0xFFFE,
        element: 0xE000,
        vr: "na".to_owned(),
        value: format!("(Item with {} length #={})", framing, children),
        vl: own_length.to_string(),
        multiplicity: 1,
        keyword: "Item".to_owned(),
        level,
    });
    for elem in item {
        if elem.tag() == ITEM {
            continue;
        }
        push_element_rows(rows, elem, level + 1);
    }
    rows.push(delimiter_row(
        0xE00D,
        "ItemDelimitationItem",
        own_length.is_defined(),
        level,
    ));
}

fn delimiter_row(element: u16, keyword: &str, synthesized: bool, level: usize) -> DumpRow {
    let value = if synthesized {
        format!("({} for re-encoding)", keyword)
    } else {
        format!("({})", keyword)
    };
    DumpRow {
        group: 0xFFFE,
        element,
        vr: "na".to_owned(),
        value,
        vl: "0".to_owned(),
        multiplicity: 0,
        keyword: keyword.to_owned(),
        level,
    }
}

fn value_summary(value: &Value<DataSet>) -> String {
    match value {
        Value::Empty => "(no value available)".to_owned(),
        Value::Strs(components) => {
            let joined = components.iter().map(|s| clean_str(s)).join("\\");
            format!("[{}]", cut_str(&joined))
        }
        Value::Tags(tags) => {
            let joined = tags.iter().map(Tag::to_string).join("\\");
            format!("[{}]", cut_str(&joined))
        }
        Value::U8(values) => cut_str(&values.iter().join("\\")),
        Value::I16(values) => cut_str(&values.iter().join("\\")),
        Value::U16(values) => cut_str(&values.iter().join("\\")),
        Value::I32(values) => cut_str(&values.iter().join("\\")),
        Value::U32(values) => cut_str(&values.iter().join("\\")),
        Value::F32(values) => cut_str(&values.iter().join("\\")),
        Value::F64(values) => cut_str(&values.iter().join("\\")),
        Value::Sequence { .. } | Value::PixelSequence { .. } => String::new(),
    }
}

fn cut_str(s: &str) -> String {
    let len = s.chars().count();
    if len > MAX_VALUE_CHARACTERS {
        s.chars()
            .take(MAX_VALUE_CHARACTERS - 3)
            .chain("...".chars())
            .collect()
    } else {
        s.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmbuf_parser::DicomFile;

    fn push_element_le(buf: &mut Vec<u8>, tag: (u16, u16), vr: &str, value: &[u8]) {
        buf.extend(tag.0.to_le_bytes());
        buf.extend(tag.1.to_le_bytes());
        buf.extend(vr.as_bytes());
        if matches!(vr, "OB" | "OW" | "OF" | "SQ" | "UN") {
            buf.extend([0, 0]);
            buf.extend((value.len() as u32).to_le_bytes());
        } else {
            buf.extend((value.len() as u16).to_le_bytes());
        }
        buf.extend(value);
    }

    fn minimal_file(data_set: &[u8]) -> Vec<u8> {
        let mut meta = Vec::new();
        push_element_le(&mut meta, (0x0002, 0x0010), "UI", b"1.2.840.10008.1.2.1\0");
        let mut buf = vec![0u8; 128];
        buf.extend(b"DICM");
        push_element_le(
            &mut buf,
            (0x0002, 0x0000),
            "UL",
            &(meta.len() as u32).to_le_bytes(),
        );
        buf.extend(meta);
        buf.extend(data_set);
        buf
    }

    #[test]
    fn element_lines_have_the_comment_column_at_55() {
        let mut data = Vec::new();
        push_element_le(&mut data, (0x0010, 0x0010), "PN", b"DOE^JOHN");
        let obj = DicomFile::from_bytes(&minimal_file(&data)).unwrap();
        let dump = dump_file(&obj);
        let line = dump
            .lines()
            .find(|l| l.starts_with("(0010,0010)"))
            .expect("patient name line");
        assert!(line.starts_with("(0010,0010) PN [DOE^JOHN]"));
        assert!(line.ends_with("#   8, 1 PatientName"));
        assert_eq!(line.find('#'), Some(55));
    }

    #[test]
    fn dump_carries_section_headers() {
        let mut data = Vec::new();
        push_element_le(&mut data, (0x0008, 0x0060), "CS", b"MR");
        let obj = DicomFile::from_bytes(&minimal_file(&data)).unwrap();
        let dump = dump_file(&obj);
        assert!(dump.contains("# Dicom-File-Format\n"));
        assert!(dump.contains("# Dicom-Meta-Information-Header\n"));
        assert!(dump.contains("# Dicom-Data-Set\n"));
        assert!(dump.contains("# Used TransferSyntax: Explicit VR Little Endian\n"));
        // meta rows come before the data set header
        let meta_pos = dump.find("(0002,0010)").unwrap();
        let header_pos = dump.find("# Dicom-Data-Set").unwrap();
        let data_pos = dump.find("(0008,0060)").unwrap();
        assert!(meta_pos < header_pos && header_pos < data_pos);
    }

    #[test]
    fn sequences_recurse_with_item_pseudo_rows() {
        let mut inner = Vec::new();
        push_element_le(&mut inner, (0x0008, 0x0060), "CS", b"MR");
        let mut item = Vec::new();
        item.extend(0xFFFEu16.to_le_bytes());
        item.extend(0xE000u16.to_le_bytes());
        item.extend((inner.len() as u32).to_le_bytes());
        item.extend(&inner);
        let mut data = Vec::new();
        push_element_le(&mut data, (0x0008, 0x1110), "SQ", &item);

        let obj = DicomFile::from_bytes(&minimal_file(&data)).unwrap();
        let rows = dump_rows(&obj);
        let seq_at = rows
            .iter()
            .position(|r| (r.group, r.element) == (0x0008, 0x1110))
            .unwrap();
        assert_eq!(
            rows[seq_at].value,
            "(Sequence with explicit length #=1)".to_owned()
        );
        assert_eq!(rows[seq_at + 1].value, "(Item with explicit length #=1)");
        assert_eq!(rows[seq_at + 1].vr, "na");
        assert_eq!(rows[seq_at + 1].level, 1);
        assert_eq!((rows[seq_at + 2].group, rows[seq_at + 2].element), (0x0008, 0x0060));
        assert_eq!(rows[seq_at + 2].level, 2);
        assert_eq!(rows[seq_at + 3].value, "(ItemDelimitationItem for re-encoding)");
        assert_eq!(rows[seq_at + 4].value, "(SequenceDelimitationItem for re-encoding)");
        assert_eq!(rows[seq_at + 4].level, 0);
    }

    #[test]
    fn pixel_sequence_rows_use_the_pi_marker() {
        let mut data = Vec::new();
        data.extend(0x7FE0u16.to_le_bytes());
        data.extend(0x0010u16.to_le_bytes());
        data.extend(b"OB");
        data.extend([0, 0]);
        data.extend(0xFFFF_FFFFu32.to_le_bytes());
        // empty offset table, one fragment, delimiter
        for (tag, len) in [
            ((0xFFFEu16, 0xE000u16), 0u32),
            ((0xFFFE, 0xE000), 2),
        ] {
            data.extend(tag.0.to_le_bytes());
            data.extend(tag.1.to_le_bytes());
            data.extend(len.to_le_bytes());
            data.extend(std::iter::repeat(0xAB).take(len as usize));
        }
        data.extend(0xFFFEu16.to_le_bytes());
        data.extend(0xE0DDu16.to_le_bytes());
        data.extend(0u32.to_le_bytes());

        let mut meta = Vec::new();
        push_element_le(&mut meta, (0x0002, 0x0010), "UI", b"1.2.840.10008.1.2.4.50");
        let mut buf = vec![0u8; 128];
        buf.extend(b"DICM");
        push_element_le(
            &mut buf,
            (0x0002, 0x0000),
            "UL",
            &(meta.len() as u32).to_le_bytes(),
        );
        buf.extend(meta);
        buf.extend(data);

        let obj = DicomFile::from_bytes(&buf).unwrap();
        let rows = dump_rows(&obj);
        let px_at = rows
            .iter()
            .position(|r| (r.group, r.element) == (0x7FE0, 0x0010))
            .unwrap();
        assert_eq!(rows[px_at].value, "(PixelSequence #=2)");
        assert_eq!(rows[px_at].vl, "u/l");
        assert_eq!(rows[px_at + 1].vr, "pi");
        assert_eq!(rows[px_at + 1].value, "(BasicOffsetTable with 0 entries)");
        assert_eq!(rows[px_at + 2].vr, "pi");
        assert_eq!(rows[px_at + 2].value, "(Fragment with 2 bytes)");
        assert_eq!(rows[px_at + 3].value, "(SequenceDelimitationItem)");
    }

    #[test]
    fn pixel_data_value_is_elided() {
        let mut data = Vec::new();
        push_element_le(&mut data, (0x0028, 0x0100), "US", &8u16.to_le_bytes());
        push_element_le(&mut data, (0x7FE0, 0x0010), "OB", &[1, 2, 3, 4]);
        let obj = DicomFile::from_bytes(&minimal_file(&data)).unwrap();
        let rows = dump_rows(&obj);
        let px = rows
            .iter()
            .find(|r| (r.group, r.element) == (0x7FE0, 0x0010))
            .unwrap();
        assert_eq!(px.value, "...");
        assert_eq!(px.vl, "4");
    }

    #[test]
    fn long_values_are_cut() {
        let long = "A".repeat(100);
        let mut data = Vec::new();
        push_element_le(&mut data, (0x0010, 0x4000), "LT", long.as_bytes());
        let obj = DicomFile::from_bytes(&minimal_file(&data)).unwrap();
        let rows = dump_rows(&obj);
        let row = rows
            .iter()
            .find(|r| (r.group, r.element) == (0x0010, 0x4000))
            .unwrap();
        assert!(row.value.ends_with("...]"));
        assert!(row.value.chars().count() <= MAX_VALUE_CHARACTERS + 2);
    }
}
