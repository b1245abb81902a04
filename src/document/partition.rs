//! The partitioned-document contract the resolver reads through.

use crate::error::ResolveError;

/// A borrowed view of one partition: its content-type tag and `[offset, offset + length)` extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedRegion<'a> {
    pub content_type: &'a str,
    pub offset: usize,
    pub length: usize,
}

impl TypedRegion<'_> {
    /// One past the last offset of the region.
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.offset && offset < self.end()
    }
}

/// An owned partition, as produced by an external partitioner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub content_type: String,
    pub offset: usize,
    pub length: usize,
}

impl Partition {
    pub fn new(content_type: impl Into<String>, offset: usize, length: usize) -> Self {
        Self {
            content_type: content_type.into(),
            offset,
            length,
        }
    }

    /// One past the last offset, or `None` if that does not fit in `usize`.
    pub fn end(&self) -> Option<usize> {
        self.offset.checked_add(self.length)
    }

    pub fn as_region(&self) -> TypedRegion<'_> {
        TypedRegion {
            content_type: &self.content_type,
            offset: self.offset,
            length: self.length,
        }
    }
}

/// A character sequence with a partition map over it.
///
/// Offsets are zero-based character offsets. Every read may fail with
/// [`ResolveError::InvalidOffset`] when the offset is out of range or the
/// partition map is stale.
pub trait PartitionedDocument {
    /// Number of characters in the document.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn char_at(&self, offset: usize) -> Result<char, ResolveError>;

    /// The partition containing `offset`.
    fn partition_at(&self, offset: usize) -> Result<TypedRegion<'_>, ResolveError>;

    fn content_type_at(&self, offset: usize) -> Result<&str, ResolveError> {
        Ok(self.partition_at(offset)?.content_type)
    }

    /// The `length` characters starting at `offset`.
    fn text(&self, offset: usize, length: usize) -> Result<String, ResolveError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_bounds() {
        let partition = Partition::new("command", 4, 3);
        let region = partition.as_region();
        assert_eq!(region.end(), 7);
        assert!(!region.contains(3));
        assert!(region.contains(4));
        assert!(region.contains(6));
        assert!(!region.contains(7));
    }
}
