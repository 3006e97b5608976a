//! SWbemObjectSet

use std::iter::FusedIterator;
use std::ops::Range;

use automation::{RemoteHandle, Variant};

use crate::bridge::{call_object, required_text};
use crate::error::{Result, WbemError};

use super::{Object, SecurityCapable, WbemSet};

/// A read-only collection of objects returned by a query or enumeration
///
/// Elements are fetched one call at a time. The collection cannot be
/// modified from here.
#[derive(Debug)]
pub struct ObjectSet {
    handle: RemoteHandle,
}

scripting_object!(ObjectSet);

impl SecurityCapable for ObjectSet {}

impl WbemSet for ObjectSet {}

impl ObjectSet {
    /// The element with the given relative path
    pub fn item(&self, path: &str) -> Result<Object> {
        let args = [required_text(path, "Object path")?, Variant::Omitted];
        call_object(&self.handle, "Item", &args)
    }

    /// The element at `index`, counting from zero
    ///
    /// Not every enumeration supports positional access; the service then
    /// fails the call.
    pub fn item_index(&self, index: i32) -> Result<Object> {
        if index < 0 {
            return Err(WbemError::invalid("Index starts with zero."));
        }
        call_object(&self.handle, "ItemIndex", &[Variant::I4(index)])
    }

    /// Iterate the elements by position
    ///
    /// The count is read once, up front. Each element is then fetched with
    /// `ItemIndex`, which only newer service versions provide. On older
    /// services every element comes back as the service's "not supported"
    /// failure; use [`item`](Self::item) with known paths there.
    pub fn iter(&self) -> Result<ObjectSetIter<'_>> {
        let count = self.count()?;
        Ok(ObjectSetIter {
            set: self,
            range: 0..count,
        })
    }
}

/// Positional iterator over an [`ObjectSet`]
#[derive(Debug)]
pub struct ObjectSetIter<'a> {
    set: &'a ObjectSet,
    range: Range<usize>,
}

impl Iterator for ObjectSetIter<'_> {
    type Item = Result<Object>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.range.next()?;
        Some(match i32::try_from(index) {
            Ok(index) => self.set.item_index(index),
            Err(_) => Err(WbemError::invalid("Index out of range.")),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for ObjectSetIter<'_> {}

impl FusedIterator for ObjectSetIter<'_> {}
