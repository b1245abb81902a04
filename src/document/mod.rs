//! Document access for offset resolution.
//!
//! This module provides:
//! - `PartitionedDocument`, the contract a host document fulfils
//! - `PartitionedText`, an in-memory document with a validated partition map
//! - `LineIndex` for character offset <-> LSP position conversion

mod partition;
mod state;
mod text;

pub use partition::{Partition, PartitionedDocument, TypedRegion};
pub use state::PartitionedText;
pub use text::LineIndex;
