//! Core types for the DICOM attribute dictionary:
//! the lookup trait and the entry descriptor.
//!
//! The dictionary is a read-only dependency of the decoder,
//! used to recover value representations under implicit VR encoding
//! and to resolve attribute keywords for lookup and display.

use crate::header::{Tag, VR};

/// A "virtual" value representation descriptor
/// for dictionary entries whose real VR depends on context.
///
/// The only context-dependent case this decoder distinguishes is
/// bulk data that may be either OB or OW
/// (e.g. _Pixel Data_ under implicit VR encoding),
/// which is resolved through the data set's _Bits Allocated_ value.
/// This marker never reaches a decoded element:
/// it is materialized into a concrete VR before the element is stored.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum VirtualVr {
    /// The value representation is exactly known
    /// and does not depend on context.
    Exact(VR),
    /// Either OB or OW, depending on the sample width in use.
    Ox,
}

impl VirtualVr {
    /// Return the underlying value representation
    /// in the general case, without considering any context.
    /// The ambiguous OB/OW case falls back to [`OW`](VR::OW).
    pub fn relaxed(self) -> VR {
        match self {
            VirtualVr::Exact(vr) => vr,
            VirtualVr::Ox => VR::OW,
        }
    }
}

impl From<VR> for VirtualVr {
    fn from(vr: VR) -> Self {
        VirtualVr::Exact(vr)
    }
}

/// A data element dictionary entry with a static string keyword.
#[derive(Debug, PartialEq, Clone)]
pub struct DictionaryEntryRef<'a> {
    /// The attribute tag.
    pub tag: Tag,
    /// The keyword of the attribute (e.g. "PatientName").
    pub alias: &'a str,
    /// The virtual value representation declared for the attribute.
    pub vr: VirtualVr,
}

impl DictionaryEntryRef<'_> {
    /// The attribute tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The keyword of the attribute.
    #[inline]
    pub fn alias(&self) -> &str {
        self.alias
    }
}

/// A read-only mapping from attribute tags and keywords
/// to dictionary entries.
///
/// Lookups that miss return `None`;
/// the decoder treats misses as VR [`UN`](VR::UN).
/// Implementations are expected to be cheap to share
/// (the standard dictionary is a process-lifetime singleton).
pub trait DataDictionary {
    /// Fetch the entry for the given attribute tag.
    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntryRef<'static>>;

    /// Fetch the entry with the given attribute keyword.
    fn by_name(&self, name: &str) -> Option<&DictionaryEntryRef<'static>>;

    /// Fetch the virtual VR declared for the given tag, if any.
    fn vr_of(&self, tag: Tag) -> Option<VirtualVr> {
        self.by_tag(tag).map(|e| e.vr)
    }
}

impl<T> DataDictionary for &T
where
    T: DataDictionary,
{
    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntryRef<'static>> {
        (**self).by_tag(tag)
    }

    fn by_name(&self, name: &str) -> Option<&DictionaryEntryRef<'static>> {
        (**self).by_name(name)
    }
}
