//! This crate implements an abridged standard attribute dictionary.
//!
//! The dictionary is a process-lifetime singleton
//! holding the DICOM attributes that this project decodes by name:
//! the file meta group and the common patient, study, series,
//! equipment and image module attributes.
//! It is freely shareable across threads
//! and is the default dictionary of the parser.

pub mod entries;
pub mod tags;

use crate::entries::ENTRIES;
use dcmbuf_core::dictionary::{DataDictionary, DictionaryEntryRef};
use dcmbuf_core::Tag;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

static DICT: Lazy<StandardDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard dictionary registry.
///
/// One does not generally have to call this:
/// the unit type [`StandardDataDictionary`]
/// already provides a lazily loaded singleton
/// implementing the necessary traits.
#[inline]
pub fn registry() -> &'static StandardDictionaryRegistry {
    &DICT
}

/// The data struct actually containing the attribute dictionary.
///
/// This structure is made opaque via the unit type
/// [`StandardDataDictionary`].
#[derive(Debug)]
pub struct StandardDictionaryRegistry {
    /// mapping: keyword → entry
    by_name: HashMap<&'static str, &'static DictionaryEntryRef<'static>>,
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DictionaryEntryRef<'static>>,
}

impl StandardDictionaryRegistry {
    fn new() -> StandardDictionaryRegistry {
        StandardDictionaryRegistry {
            by_name: HashMap::with_capacity(ENTRIES.len()),
            by_tag: HashMap::with_capacity(ENTRIES.len()),
        }
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static DictionaryEntryRef<'static>) -> &mut Self {
        self.by_name.insert(entry.alias, entry);
        self.by_tag.insert(entry.tag, entry);
        self
    }
}

fn init_dictionary() -> StandardDictionaryRegistry {
    let mut d = StandardDictionaryRegistry::new();
    for entry in ENTRIES {
        d.index(entry);
    }
    d
}

/// An attribute dictionary which consults
/// the library's abridged standard attribute registry.
///
/// This is the default dictionary of the parser.
/// The singleton registry is initialized on first use.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntryRef<'static>> {
        registry().by_tag.get(&tag).copied()
    }

    fn by_name(&self, name: &str) -> Option<&DictionaryEntryRef<'static>> {
        registry().by_name.get(name).copied()
    }
}

impl fmt::Display for StandardDataDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Standard attribute dictionary (abridged)")
    }
}
