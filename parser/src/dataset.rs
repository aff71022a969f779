//! The in-memory data set container.
//!
//! A [`DataSet`] maps attribute tags to decoded data elements,
//! iterating in wire order (the order the tags appear in the file).
//! Sequence items nest further data sets through the element value.

use dcmbuf_core::dictionary::DataDictionary;
use dcmbuf_core::{DataElement, Header, Tag};
use indexmap::IndexMap;

/// A fully decoded data element, with sequence items
/// represented as nested data sets.
pub type DataSetElement = DataElement<DataSet>;

/// An ordered collection of decoded data elements, keyed by tag.
///
/// Iteration yields elements in insertion (wire) order.
/// Inserting a duplicate tag replaces the stored element
/// while keeping its original position.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DataSet {
    entries: IndexMap<Tag, DataSetElement>,
}

impl DataSet {
    /// Create a new empty data set.
    pub fn new() -> Self {
        DataSet {
            entries: IndexMap::new(),
        }
    }

    /// Create a new empty data set with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        DataSet {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert a data element into the set, replacing (and returning)
    /// the previous element of the same tag if there was one.
    pub fn put(&mut self, elem: DataSetElement) -> Option<DataSetElement> {
        self.entries.insert(elem.tag(), elem)
    }

    /// Retrieve the element with the given tag, if present.
    pub fn element(&self, tag: Tag) -> Option<&DataSetElement> {
        self.entries.get(&tag)
    }

    /// Retrieve the element addressed by the canonical textual key form
    /// (e.g. `x7FE00010`), if the key is well formed and present.
    pub fn element_by_key(&self, key: &str) -> Option<&DataSetElement> {
        Tag::from_key(key).ok().and_then(|tag| self.element(tag))
    }

    /// Retrieve the element whose attribute keyword resolves through the
    /// given dictionary (e.g. `"PatientName"`), if present.
    pub fn element_by_name<D>(&self, dict: D, name: &str) -> Option<&DataSetElement>
    where
        D: DataDictionary,
    {
        dict.by_name(name).and_then(|e| self.element(e.tag))
    }

    /// The number of elements in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the elements in wire order.
    pub fn iter(&self) -> impl Iterator<Item = &DataSetElement> {
        self.entries.values()
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a DataSetElement;
    type IntoIter = indexmap::map::Values<'a, Tag, DataSetElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl FromIterator<DataSetElement> for DataSet {
    fn from_iter<T: IntoIterator<Item = DataSetElement>>(iter: T) -> Self {
        let mut ds = DataSet::new();
        for elem in iter {
            ds.put(elem);
        }
        ds
    }
}
