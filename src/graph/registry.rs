use crate::{graph::*, GraphError, Result};
use ahash::RandomState;
use bimap::BiHashMap;
use std::hash::Hash;

/// A 1-1 mapping between caller values and dense vertex ids.
///
/// Ids are assigned from zero in registration order and are never reused.
/// Removing a value leaves a gap: its id stops resolving but still counts toward [`size`](Self::size).
#[derive(Clone)]
pub struct VertexRegistry<T>
where
    T: Hash + Eq,
{
    vid_factory: VertexIdFactory,
    vertices: BiHashMap<VertexId, T, RandomState, RandomState>,
}

impl<T> Default for VertexRegistry<T>
where
    T: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VertexRegistry<T>
where
    T: Hash + Eq,
{
    pub fn new() -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            vertices: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
        }
    }

    /// Registers `value` and reports whether it was new.
    pub fn register(&mut self, value: T) -> (VertexId, bool) {
        if let Some(vid) = self.vertices.get_by_right(&value) {
            (*vid, false)
        } else {
            let vid = self.vid_factory.one_more();
            self.vertices.insert(vid, value);
            (vid, true)
        }
    }

    /// Registers every value in order. Duplicates collapse onto the first occurrence.
    pub fn register_all<I>(&mut self, values: I) -> Vec<VertexId>
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().map(|v| self.register(v).0).collect()
    }

    /// Returns the id of `value`, registering it under the next id if unseen.
    pub fn index_of(&mut self, value: &T) -> VertexId
    where
        T: Clone,
    {
        match self.get_index(value) {
            Some(vid) => vid,
            None => self.register(value.clone()).0,
        }
    }

    pub fn get_index(&self, value: &T) -> Option<VertexId> {
        self.vertices.get_by_right(value).copied()
    }

    pub fn value_of(&self, vid: &VertexId) -> Result<&T> {
        self.vertices
            .get_by_left(vid)
            .ok_or(GraphError::OutOfRange {
                index: vid.to_raw(),
                size: self.size(),
            })
    }

    /// Stops tracking `vid` and hands its value back.
    pub fn remove(&mut self, vid: &VertexId) -> Option<T> {
        self.vertices.remove_by_left(vid).map(|(_, value)| value)
    }

    /// Number of ids ever assigned, including removed ones.
    pub fn size(&self) -> usize {
        self.vid_factory.issued()
    }

    /// Number of values currently tracked.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_value(&self, value: &T) -> bool {
        self.vertices.contains_right(value)
    }

    pub fn contains_index(&self, vid: &VertexId) -> bool {
        self.vertices.contains_left(vid)
    }
}
