//! Offset-to-construct resolution.
//!
//! Given a cursor offset in a partitioned document, find the command, property
//! or variable reference it belongs to. Every read failure is reported to the
//! diagnostic sink and turned into an empty answer; nothing here returns an error.

use crate::classifier::PartitionClassifier;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::document::PartitionedDocument;
use crate::error::ResolveError;
use crate::registry::{CommandDef, PropertyDef, Registries, VariableDef};

/// Command arguments opening delimiter.
pub const START_ARGS: char = '(';
/// Command arguments closing delimiter.
pub const END_ARGS: char = ')';

static TRACING_SINK: TracingSink = TracingSink;

#[derive(Debug, Clone, Copy)]
enum Construct {
    Command,
    Property,
    Variable,
}

impl Construct {
    fn matches(self, classifier: &dyn PartitionClassifier, content_type: &str) -> bool {
        match self {
            Construct::Command => classifier.is_any_command(content_type),
            Construct::Property => classifier.is_property(content_type),
            Construct::Variable => classifier.is_variable(content_type),
        }
    }
}

/// Resolves document offsets against a set of registries.
///
/// Holds only borrowed, read-only collaborators, so one resolver can serve any
/// number of documents.
#[derive(Clone, Copy)]
pub struct OffsetResolver<'a> {
    registries: &'a Registries,
    classifier: &'a dyn PartitionClassifier,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> OffsetResolver<'a> {
    /// A resolver that reports read failures through `tracing`.
    pub fn new(registries: &'a Registries, classifier: &'a dyn PartitionClassifier) -> Self {
        Self {
            registries,
            classifier,
            sink: &TRACING_SINK,
        }
    }

    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    /// Whether `offset` is inside a command's argument list.
    ///
    /// Scans backward one character at a time: an opening parenthesis means
    /// yes, a closing one means no. Nesting is not tracked, so the nearest
    /// delimiter wins.
    pub fn in_arguments<D>(&self, doc: &D, offset: usize) -> bool
    where
        D: PartitionedDocument + ?Sized,
    {
        self.recover(scan_arguments(doc, offset)).unwrap_or(false)
    }

    /// Text of the command or deprecated-command partition at `offset`.
    pub fn command_name<D>(&self, doc: &D, offset: usize) -> Option<String>
    where
        D: PartitionedDocument + ?Sized,
    {
        self.recover(self.name_at(doc, offset, Construct::Command))
            .flatten()
    }

    /// Text of the property partition at `offset`.
    pub fn property_name<D>(&self, doc: &D, offset: usize) -> Option<String>
    where
        D: PartitionedDocument + ?Sized,
    {
        self.recover(self.name_at(doc, offset, Construct::Property))
            .flatten()
    }

    /// Text of the variable partition at `offset`.
    pub fn variable_name<D>(&self, doc: &D, offset: usize) -> Option<String>
    where
        D: PartitionedDocument + ?Sized,
    {
        self.recover(self.name_at(doc, offset, Construct::Variable))
            .flatten()
    }

    pub fn command<D>(&self, doc: &D, offset: usize) -> Option<&'a CommandDef>
    where
        D: PartitionedDocument + ?Sized,
    {
        let registries = self.registries;
        self.command_name(doc, offset)
            .and_then(|name| registries.commands.lookup(&name))
    }

    pub fn property<D>(&self, doc: &D, offset: usize) -> Option<&'a PropertyDef>
    where
        D: PartitionedDocument + ?Sized,
    {
        let registries = self.registries;
        self.property_name(doc, offset)
            .and_then(|name| registries.properties.lookup(&name))
    }

    pub fn variable<D>(&self, doc: &D, offset: usize) -> Option<&'a VariableDef>
    where
        D: PartitionedDocument + ?Sized,
    {
        let registries = self.registries;
        self.variable_name(doc, offset)
            .and_then(|name| registries.variables.lookup(&name))
    }

    /// The nearest registered command at or before `offset`, stopping at
    /// comments and closing parentheses.
    ///
    /// `offset` may be in the command name, its arguments, or whitespace
    /// between them.
    pub fn find_containing_command<D>(&self, doc: &D, offset: usize) -> Option<&'a CommandDef>
    where
        D: PartitionedDocument + ?Sized,
    {
        let registries = self.registries;
        self.recover(self.walk_back(doc, offset, Construct::Command, |name| {
            registries.commands.lookup(name)
        }))
        .flatten()
    }

    /// The nearest registered property at or before `offset`, stopping at
    /// comments and closing parentheses.
    pub fn find_containing_property<D>(&self, doc: &D, offset: usize) -> Option<&'a PropertyDef>
    where
        D: PartitionedDocument + ?Sized,
    {
        let registries = self.registries;
        self.recover(self.walk_back(doc, offset, Construct::Property, |name| {
            registries.properties.lookup(name)
        }))
        .flatten()
    }

    /// The nearest registered variable at or before `offset`, stopping at
    /// comments and closing parentheses.
    pub fn find_containing_variable<D>(&self, doc: &D, offset: usize) -> Option<&'a VariableDef>
    where
        D: PartitionedDocument + ?Sized,
    {
        let registries = self.registries;
        self.recover(self.walk_back(doc, offset, Construct::Variable, |name| {
            registries.variables.lookup(name)
        }))
        .flatten()
    }

    fn name_at<D>(
        &self,
        doc: &D,
        offset: usize,
        construct: Construct,
    ) -> Result<Option<String>, ResolveError>
    where
        D: PartitionedDocument + ?Sized,
    {
        let region = doc.partition_at(offset)?;
        if !construct.matches(self.classifier, region.content_type) {
            return Ok(None);
        }
        doc.text(region.offset, region.length).map(Some)
    }

    /// Walk partitions backward from `offset` until `lookup` accepts one.
    fn walk_back<D, T>(
        &self,
        doc: &D,
        offset: usize,
        construct: Construct,
        lookup: impl Fn(&str) -> Option<&'a T>,
    ) -> Result<Option<&'a T>, ResolveError>
    where
        D: PartitionedDocument + ?Sized,
        T: 'a,
    {
        let mut pos = offset;
        loop {
            let region = doc.partition_at(pos)?;
            // A region starting after `pos` means the map no longer matches the text.
            if region.offset > pos {
                return Err(ResolveError::InvalidOffset {
                    offset: pos,
                    length: doc.len(),
                });
            }
            if self.classifier.is_comment(region.content_type)
                || self.classifier.is_args_close(region.content_type)
            {
                return Ok(None);
            }

            if construct.matches(self.classifier, region.content_type) {
                let name = doc.text(region.offset, region.length)?;
                if let Some(found) = lookup(&name) {
                    return Ok(Some(found));
                }
            }

            match region.offset.checked_sub(1) {
                Some(previous) => pos = previous,
                None => return Ok(None),
            }
        }
    }

    fn recover<T>(&self, result: Result<T, ResolveError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.sink.log_error(module_path!(), &error);
                None
            }
        }
    }
}

fn scan_arguments<D>(doc: &D, offset: usize) -> Result<bool, ResolveError>
where
    D: PartitionedDocument + ?Sized,
{
    for off in (0..=offset).rev() {
        match doc.char_at(off)? {
            START_ARGS => return Ok(true),
            END_ARGS => return Ok(false),
            _ => {}
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ContentTypes;
    use crate::diagnostics::testing::RecordingSink;
    use crate::document::{PartitionedText, TypedRegion};

    fn doc(source: &str, spans: &[(&'static str, usize)]) -> PartitionedText {
        PartitionedText::from_spans(source, spans.iter().copied()).unwrap()
    }

    #[test]
    fn in_arguments_nearest_delimiter_wins() {
        let registries = Registries::empty();
        let types = ContentTypes::default();
        let resolver = OffsetResolver::new(&registries, &types);
        let d = doc("f(a) g b(c", &[("default", 10)]);

        assert!(!resolver.in_arguments(&d, 0));
        assert!(resolver.in_arguments(&d, 1));
        assert!(resolver.in_arguments(&d, 2));
        assert!(!resolver.in_arguments(&d, 3));
        assert!(!resolver.in_arguments(&d, 5));
        assert!(!resolver.in_arguments(&d, 7));
        assert!(resolver.in_arguments(&d, 8));
        assert!(resolver.in_arguments(&d, 9));
    }

    #[test]
    fn in_arguments_is_not_balanced() {
        let registries = Registries::empty();
        let types = ContentTypes::default();
        let resolver = OffsetResolver::new(&registries, &types);
        // Inner ")" masks the outer "(".
        let d = doc("if((a) b)", &[("default", 9)]);
        assert!(resolver.in_arguments(&d, 4));
        assert!(!resolver.in_arguments(&d, 7));
    }

    #[test]
    fn out_of_range_reads_are_reported_not_raised() {
        let registries = Registries::builtin();
        let types = ContentTypes::default();
        let sink = RecordingSink::default();
        let resolver = OffsetResolver::new(&registries, &types).with_sink(&sink);
        let d = doc("set(A)", &[("command", 3), ("default", 2), ("args-close", 1)]);

        assert!(!resolver.in_arguments(&d, 6));
        assert_eq!(resolver.command_name(&d, 7), None);
        assert_eq!(resolver.find_containing_command(&d, 40), None);

        let errors = sink.errors.borrow();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].0, "cmake_resolve::resolve");
        assert_eq!(
            errors[0].1,
            ResolveError::InvalidOffset {
                offset: 6,
                length: 6
            }
        );
        assert_eq!(
            errors[2].1,
            ResolveError::InvalidOffset {
                offset: 40,
                length: 6
            }
        );
    }

    #[test]
    fn names_require_matching_partition() {
        let registries = Registries::builtin();
        let types = ContentTypes::default();
        let resolver = OffsetResolver::new(&registries, &types);
        let d = doc(
            "subdirs(a) # x",
            &[
                ("deprecated-command", 7),
                ("default", 2),
                ("args-close", 1),
                ("default", 1),
                ("comment", 3),
            ],
        );

        assert_eq!(resolver.command_name(&d, 0).as_deref(), Some("subdirs"));
        assert_eq!(resolver.command_name(&d, 6).as_deref(), Some("subdirs"));
        assert_eq!(resolver.command_name(&d, 7), None);
        assert_eq!(resolver.command_name(&d, 12), None);
        assert_eq!(resolver.property_name(&d, 0), None);
        assert_eq!(resolver.variable_name(&d, 0), None);
        assert!(resolver.command(&d, 3).unwrap().deprecated);
    }

    #[test]
    fn unknown_name_is_absent() {
        let registries = Registries::builtin();
        let types = ContentTypes::default();
        let resolver = OffsetResolver::new(&registries, &types);
        let d = doc("frobnicate()", &[("command", 10), ("default", 1), ("args-close", 1)]);

        assert_eq!(resolver.command_name(&d, 2).as_deref(), Some("frobnicate"));
        assert!(resolver.command(&d, 2).is_none());
        assert!(resolver.find_containing_command(&d, 10).is_none());
    }

    #[test]
    fn walk_stops_at_comment() {
        let registries = Registries::builtin();
        let types = ContentTypes::default();
        let resolver = OffsetResolver::new(&registries, &types);
        // message(\n# note\n a)
        let d = doc(
            "message(\n# note\n a)",
            &[("command", 7), ("default", 2), ("comment", 7), ("default", 2), ("args-close", 1)],
        );

        assert_eq!(resolver.find_containing_command(&d, 8).unwrap().name, "message");
        assert!(resolver.find_containing_command(&d, 12).is_none());
        assert!(resolver.find_containing_command(&d, 17).is_none());
    }

    #[test]
    fn property_walk_stops_at_boundaries() {
        let registries = Registries::builtin();
        let types = ContentTypes::default();
        let sink = RecordingSink::default();
        let resolver = OffsetResolver::new(&registries, &types).with_sink(&sink);

        let closed = doc(
            "OUTPUT_NAME) a",
            &[("property", 11), ("args-close", 1), ("default", 2)],
        );
        assert_eq!(resolver.find_containing_property(&closed, 5).unwrap().name, "OUTPUT_NAME");
        assert!(resolver.find_containing_property(&closed, 13).is_none());

        let commented = doc(
            "OUTPUT_NAME #c\nx",
            &[("property", 11), ("default", 1), ("comment", 3), ("default", 1)],
        );
        assert_eq!(resolver.find_containing_property(&commented, 11).unwrap().name, "OUTPUT_NAME");
        assert!(resolver.find_containing_property(&commented, 15).is_none());

        assert!(sink.errors.borrow().is_empty());
    }

    #[test]
    fn variable_walk_stops_at_boundaries() {
        let registries = Registries::builtin();
        let types = ContentTypes::default();
        let sink = RecordingSink::default();
        let resolver = OffsetResolver::new(&registries, &types).with_sink(&sink);

        let closed = doc(
            "PROJECT_NAME) a",
            &[("variable", 12), ("args-close", 1), ("default", 2)],
        );
        assert_eq!(resolver.find_containing_variable(&closed, 3).unwrap().name, "PROJECT_NAME");
        assert!(resolver.find_containing_variable(&closed, 14).is_none());

        let commented = doc(
            "PROJECT_NAME #c\nx",
            &[("variable", 12), ("default", 1), ("comment", 3), ("default", 1)],
        );
        assert_eq!(resolver.find_containing_variable(&commented, 12).unwrap().name, "PROJECT_NAME");
        assert!(resolver.find_containing_variable(&commented, 16).is_none());

        assert!(sink.errors.borrow().is_empty());
    }

    #[test]
    fn empty_document_resolves_nothing_quietly() {
        let registries = Registries::builtin();
        let types = ContentTypes::default();
        let sink = RecordingSink::default();
        let resolver = OffsetResolver::new(&registries, &types).with_sink(&sink);
        let d = PartitionedText::new("", Vec::new()).unwrap();

        assert_eq!(resolver.command_name(&d, 0), None);
        assert_eq!(resolver.property_name(&d, 0), None);
        assert_eq!(resolver.variable_name(&d, 0), None);
        assert!(resolver.command(&d, 0).is_none());
        assert!(resolver.find_containing_command(&d, 0).is_none());
        assert!(resolver.find_containing_property(&d, 0).is_none());
        assert!(resolver.find_containing_variable(&d, 0).is_none());
        assert!(sink.errors.borrow().is_empty());

        // No character to read at the end of the document.
        assert!(!resolver.in_arguments(&d, 0));
        assert_eq!(sink.errors.borrow().len(), 1);
    }

    #[test]
    fn stale_partition_map_is_an_invalid_offset() {
        struct Skewed;

        impl PartitionedDocument for Skewed {
            fn len(&self) -> usize {
                4
            }

            fn char_at(&self, offset: usize) -> Result<char, ResolveError> {
                Ok(if offset < 4 { 'x' } else { ' ' })
            }

            fn partition_at(&self, _offset: usize) -> Result<TypedRegion<'_>, ResolveError> {
                Ok(TypedRegion {
                    content_type: "default",
                    offset: 3,
                    length: 1,
                })
            }

            fn text(&self, _offset: usize, _length: usize) -> Result<String, ResolveError> {
                Ok(String::new())
            }
        }

        let registries = Registries::builtin();
        let types = ContentTypes::default();
        let sink = RecordingSink::default();
        let resolver = OffsetResolver::new(&registries, &types).with_sink(&sink);

        assert!(resolver.find_containing_command(&Skewed, 1).is_none());
        assert_eq!(
            sink.errors.borrow()[0].1,
            ResolveError::InvalidOffset {
                offset: 1,
                length: 4
            }
        );
    }
}
