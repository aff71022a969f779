//! Transfer syntax descriptors and UID classification.
//!
//! A transfer syntax determines how the data set after the file meta
//! group is encoded: byte order, VR explicitness, and whether the pixel
//! data payload is encapsulated.
//! The compiled registry below covers the syntaxes this decoder can walk,
//! plus known syntaxes it deliberately rejects.

use byteordered::Endianness;
use dcmbuf_core::value::clean_str;

/// The pixel data coding regime of a transfer syntax.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Codec {
    /// Native (uncompressed) pixel data.
    None,
    /// Compressed pixel data, encapsulated in a fragment sequence.
    /// The data set itself is still decodable;
    /// decompressing the fragments is a concern of image decoders.
    Encapsulated,
    /// The data set is not decodable by this crate.
    Unsupported,
}

/// A transfer syntax descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferSyntax {
    uid: &'static str,
    name: &'static str,
    endianness: Endianness,
    explicit_vr: bool,
    codec: Codec,
}

impl TransferSyntax {
    /// Create a new descriptor. Used by the registry entries below.
    pub const fn new(
        uid: &'static str,
        name: &'static str,
        endianness: Endianness,
        explicit_vr: bool,
        codec: Codec,
    ) -> Self {
        TransferSyntax {
            uid,
            name,
            endianness,
            explicit_vr,
            codec,
        }
    }

    /// The UID proper of this transfer syntax.
    pub fn uid(&self) -> &'static str {
        self.uid
    }

    /// The announced name of this transfer syntax.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The byte order of the data set.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Whether value representations appear on the wire.
    pub fn explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// The pixel data coding regime.
    pub fn codec(&self) -> Codec {
        self.codec
    }

    /// Whether this decoder can walk a data set in this syntax.
    pub fn is_supported(&self) -> bool {
        self.codec != Codec::Unsupported
    }

    /// Whether pixel data under this syntax is compressed
    /// and carried in an encapsulated fragment sequence.
    pub fn is_encapsulated(&self) -> bool {
        self.codec == Codec::Encapsulated
    }

    /// Classify a transfer syntax UID string.
    ///
    /// Trailing space, NUL and zero-width space padding is stripped
    /// before the lookup (UI values are NUL-padded on the wire).
    /// Returns `None` for UIDs not in the registry.
    pub fn from_uid(uid: &str) -> Option<&'static TransferSyntax> {
        let uid = clean_str(uid);
        ENTRIES.iter().find(|ts| ts.uid == uid)
    }
}

/// Implicit VR Little Endian: Default Transfer Syntax for DICOM
pub const IMPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2",
    "Implicit VR Little Endian",
    Endianness::Little,
    false,
    Codec::None,
);

/// Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.1",
    "Explicit VR Little Endian",
    Endianness::Little,
    true,
    Codec::None,
);

/// Explicit VR Big Endian
pub const EXPLICIT_VR_BIG_ENDIAN: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.2",
    "Explicit VR Big Endian",
    Endianness::Big,
    true,
    Codec::None,
);

/// **Rejected:** Deflated Explicit VR Little Endian
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.1.99",
    "Deflated Explicit VR Little Endian",
    Endianness::Little,
    true,
    Codec::Unsupported,
);

/// JPEG Baseline (Process 1)
pub const JPEG_BASELINE: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.4.50",
    "JPEG Baseline (Process 1)",
    Endianness::Little,
    true,
    Codec::Encapsulated,
);

/// JPEG Extended (Process 2 & 4)
pub const JPEG_EXTENDED: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.4.51",
    "JPEG Extended (Process 2 & 4)",
    Endianness::Little,
    true,
    Codec::Encapsulated,
);

/// JPEG Lossless, Non-Hierarchical (Process 14)
pub const JPEG_LOSSLESS_NON_HIERARCHICAL: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.4.57",
    "JPEG Lossless, Non-Hierarchical (Process 14)",
    Endianness::Little,
    true,
    Codec::Encapsulated,
);

/// JPEG Lossless, Non-Hierarchical, First-Order Prediction
/// (Process 14 [Selection Value 1])
pub const JPEG_LOSSLESS_FIRST_ORDER_PREDICTION: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.4.70",
    "JPEG Lossless, Non-Hierarchical, First-Order Prediction",
    Endianness::Little,
    true,
    Codec::Encapsulated,
);

/// **Rejected:** JPEG-LS Lossless Image Compression
pub const JPEG_LS_LOSSLESS: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.4.80",
    "JPEG-LS Lossless Image Compression",
    Endianness::Little,
    true,
    Codec::Unsupported,
);

/// **Rejected:** JPEG-LS Lossy (Near-Lossless) Image Compression
pub const JPEG_LS_LOSSY: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.4.81",
    "JPEG-LS Lossy (Near-Lossless) Image Compression",
    Endianness::Little,
    true,
    Codec::Unsupported,
);

/// JPEG 2000 Image Compression (Lossless Only)
pub const JPEG_2000_LOSSLESS_ONLY: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.4.90",
    "JPEG 2000 Image Compression (Lossless Only)",
    Endianness::Little,
    true,
    Codec::Encapsulated,
);

/// JPEG 2000 Image Compression
pub const JPEG_2000: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.4.91",
    "JPEG 2000 Image Compression",
    Endianness::Little,
    true,
    Codec::Encapsulated,
);

/// JPEG 2000 Part 2 Multi-component Image Compression (Lossless Only)
pub const JPEG_2000_PART2_LOSSLESS_ONLY: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.4.92",
    "JPEG 2000 Part 2 Multi-component Image Compression (Lossless Only)",
    Endianness::Little,
    true,
    Codec::Encapsulated,
);

/// JPEG 2000 Part 2 Multi-component Image Compression
pub const JPEG_2000_PART2: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.4.93",
    "JPEG 2000 Part 2 Multi-component Image Compression",
    Endianness::Little,
    true,
    Codec::Encapsulated,
);

/// **Rejected:** MPEG2 Main Profile / Main Level
pub const MPEG2_MAIN_PROFILE_MAIN_LEVEL: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.4.100",
    "MPEG2 Main Profile / Main Level",
    Endianness::Little,
    true,
    Codec::Unsupported,
);

/// **Rejected:** MPEG2 Main Profile / High Level
pub const MPEG2_MAIN_PROFILE_HIGH_LEVEL: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.4.101",
    "MPEG2 Main Profile / High Level",
    Endianness::Little,
    true,
    Codec::Unsupported,
);

/// **Rejected:** RLE Lossless
pub const RLE_LOSSLESS: TransferSyntax = TransferSyntax::new(
    "1.2.840.10008.1.2.5",
    "RLE Lossless",
    Endianness::Little,
    true,
    Codec::Unsupported,
);

/// The compiled registry, in UID order.
static ENTRIES: &[TransferSyntax] = &[
    IMPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_LITTLE_ENDIAN,
    DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_BIG_ENDIAN,
    JPEG_BASELINE,
    JPEG_EXTENDED,
    JPEG_LOSSLESS_NON_HIERARCHICAL,
    JPEG_LOSSLESS_FIRST_ORDER_PREDICTION,
    JPEG_LS_LOSSLESS,
    JPEG_LS_LOSSY,
    JPEG_2000_LOSSLESS_ONLY,
    JPEG_2000,
    JPEG_2000_PART2_LOSSLESS_ONLY,
    JPEG_2000_PART2,
    MPEG2_MAIN_PROFILE_MAIN_LEVEL,
    MPEG2_MAIN_PROFILE_HIGH_LEVEL,
    RLE_LOSSLESS,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_base_syntaxes() {
        let ts = TransferSyntax::from_uid("1.2.840.10008.1.2").unwrap();
        assert!(!ts.explicit_vr());
        assert_eq!(ts.endianness(), Endianness::Little);
        assert!(ts.is_supported());

        let ts = TransferSyntax::from_uid("1.2.840.10008.1.2.1").unwrap();
        assert!(ts.explicit_vr());
        assert_eq!(ts.endianness(), Endianness::Little);

        let ts = TransferSyntax::from_uid("1.2.840.10008.1.2.2").unwrap();
        assert!(ts.explicit_vr());
        assert_eq!(ts.endianness(), Endianness::Big);
    }

    #[test]
    fn classify_strips_value_padding() {
        let ts = TransferSyntax::from_uid("1.2.840.10008.1.2.1\0").unwrap();
        assert_eq!(ts.uid(), "1.2.840.10008.1.2.1");
        let ts = TransferSyntax::from_uid("1.2.840.10008.1.2.4.50 \u{200B}").unwrap();
        assert_eq!(ts.uid(), "1.2.840.10008.1.2.4.50");
    }

    #[test]
    fn jpeg_families() {
        // baseline, lossless and JPEG 2000 walk as encapsulated
        for uid in [
            "1.2.840.10008.1.2.4.50",
            "1.2.840.10008.1.2.4.51",
            "1.2.840.10008.1.2.4.57",
            "1.2.840.10008.1.2.4.70",
            "1.2.840.10008.1.2.4.90",
            "1.2.840.10008.1.2.4.91",
        ] {
            let ts = TransferSyntax::from_uid(uid).unwrap();
            assert!(ts.is_supported(), "{} should be supported", uid);
            assert!(ts.is_encapsulated(), "{} should be encapsulated", uid);
        }
        // JPEG-LS is known but rejected
        for uid in ["1.2.840.10008.1.2.4.80", "1.2.840.10008.1.2.4.81"] {
            let ts = TransferSyntax::from_uid(uid).unwrap();
            assert!(!ts.is_supported(), "{} should be rejected", uid);
        }
        // other JPEG processes are not registered at all
        assert!(TransferSyntax::from_uid("1.2.840.10008.1.2.4.53").is_none());
    }

    #[test]
    fn rejected_syntaxes() {
        for uid in [
            "1.2.840.10008.1.2.1.99",
            "1.2.840.10008.1.2.4.100",
            "1.2.840.10008.1.2.5",
        ] {
            let ts = TransferSyntax::from_uid(uid).unwrap();
            assert!(!ts.is_supported(), "{} should be rejected", uid);
        }
        assert!(TransferSyntax::from_uid("1.2.840.113619.5.2").is_none());
    }
}
