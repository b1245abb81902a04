//! Where the resolver reports read failures.

use crate::error::ResolveError;

/// Fire-and-forget error reporting.
///
/// The resolver never surfaces a [`ResolveError`] to its caller; it hands it to
/// a sink and carries on with an empty result.
pub trait DiagnosticSink {
    fn log_error(&self, source: &str, error: &ResolveError);
}

/// Sink that forwards to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log_error(&self, source: &str, error: &ResolveError) {
        tracing::error!(source, %error, "document read failed");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Collects everything reported to it.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSink {
        pub(crate) errors: RefCell<Vec<(String, ResolveError)>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn log_error(&self, source: &str, error: &ResolveError) {
            self.errors
                .borrow_mut()
                .push((source.to_string(), error.clone()));
        }
    }
}
