//! Offset resolution for CMake editor tooling.
//!
//! Given a cursor offset in a document that an external partitioner has
//! already split into typed regions, find the command invocation, property
//! reference or variable reference that owns the offset.
//!
//! ```
//! use cmake_resolve::{ContentTypes, OffsetResolver, PartitionedText, Registries};
//!
//! let doc = PartitionedText::from_spans(
//!     "message(STATUS hi)",
//!     [("command", 7), ("default", 10), ("args-close", 1)],
//! )
//! .unwrap();
//! let registries = Registries::builtin();
//! let types = ContentTypes::default();
//! let resolver = OffsetResolver::new(&registries, &types);
//!
//! assert!(resolver.in_arguments(&doc, 10));
//! assert_eq!(resolver.find_containing_command(&doc, 10).unwrap().name, "message");
//! ```

mod classifier;
mod diagnostics;
mod document;
mod error;
pub mod registry;
mod resolve;
pub mod scanner;
pub mod settings;

pub use classifier::{ContentTypes, PartitionClassifier};
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use document::{LineIndex, Partition, PartitionedDocument, PartitionedText, TypedRegion};
pub use error::{PartitionMapError, RegistryError, ResolveError};
pub use registry::{CommandDef, PropertyDef, PropertyScope, Registries, Registry, VariableDef};
pub use resolve::{OffsetResolver, END_ARGS, START_ARGS};
pub use settings::{build_classifier, build_registries, discover_settings, load_settings, Settings};
