//! In-memory partitioned document.

use tower_lsp::lsp_types::Position;

use crate::error::{PartitionMapError, ResolveError};

use super::partition::{Partition, PartitionedDocument, TypedRegion};
use super::text::LineIndex;

/// Document text together with the partition map an external partitioner produced for it.
#[derive(Debug, Clone)]
pub struct PartitionedText {
    line_index: LineIndex,
    /// Sorted by offset, contiguous, covering the whole text.
    partitions: Vec<Partition>,
}

impl PartitionedText {
    /// Build a document, validating that `partitions` tile the text exactly.
    pub fn new(source: &str, partitions: Vec<Partition>) -> Result<Self, PartitionMapError> {
        let line_index = LineIndex::new(source);
        let length = line_index.chars().len();

        let mut expected = 0;
        for (index, partition) in partitions.iter().enumerate() {
            if partition.length == 0 {
                return Err(PartitionMapError::EmptyPartition { index });
            }
            if partition.offset != expected {
                return Err(PartitionMapError::Gap {
                    index,
                    expected,
                    found: partition.offset,
                });
            }
            expected = partition
                .end()
                .ok_or(PartitionMapError::Overflow { index })?;
        }
        if expected != length {
            return Err(PartitionMapError::Coverage {
                covered: expected,
                length,
            });
        }

        Ok(Self {
            line_index,
            partitions,
        })
    }

    /// Build a document from consecutive `(content_type, length)` spans.
    pub fn from_spans<'a>(
        source: &str,
        spans: impl IntoIterator<Item = (&'a str, usize)>,
    ) -> Result<Self, PartitionMapError> {
        let mut offset = 0usize;
        let mut partitions = Vec::new();
        for (index, (content_type, length)) in spans.into_iter().enumerate() {
            partitions.push(Partition::new(content_type, offset, length));
            offset = offset
                .checked_add(length)
                .ok_or(PartitionMapError::Overflow { index })?;
        }
        Self::new(source, partitions)
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Character offset of an LSP position.
    pub fn offset_at(&self, position: Position) -> Option<usize> {
        self.line_index.position_to_offset(position)
    }

    /// LSP position of a character offset.
    pub fn position_at(&self, offset: usize) -> Position {
        self.line_index.offset_to_position(offset)
    }

    fn invalid(&self, offset: usize) -> ResolveError {
        ResolveError::InvalidOffset {
            offset,
            length: self.len(),
        }
    }
}

impl PartitionedDocument for PartitionedText {
    fn len(&self) -> usize {
        self.line_index.chars().len()
    }

    fn char_at(&self, offset: usize) -> Result<char, ResolveError> {
        self.line_index
            .chars()
            .get(offset)
            .copied()
            .ok_or_else(|| self.invalid(offset))
    }

    /// The partition containing `offset`. An offset at the very end of the
    /// document belongs to the last partition; an empty document has a single
    /// empty, unclassified region at offset 0.
    fn partition_at(&self, offset: usize) -> Result<TypedRegion<'_>, ResolveError> {
        if offset > self.len() {
            return Err(self.invalid(offset));
        }
        if self.partitions.is_empty() {
            return Ok(TypedRegion {
                content_type: "",
                offset: 0,
                length: 0,
            });
        }
        let index = self.partitions.partition_point(|p| p.offset <= offset);
        index
            .checked_sub(1)
            .and_then(|i| self.partitions.get(i))
            .map(Partition::as_region)
            .ok_or_else(|| self.invalid(offset))
    }

    fn text(&self, offset: usize, length: usize) -> Result<String, ResolveError> {
        let end = offset.checked_add(length).ok_or_else(|| self.invalid(offset))?;
        self.line_index
            .chars()
            .get(offset..end)
            .map(|chars| chars.iter().collect())
            .ok_or_else(|| self.invalid(end))
    }
}
