//! Partition content-type classification.

use serde::Deserialize;

/// Answers which kind of construct a partition's content-type tag denotes.
pub trait PartitionClassifier {
    fn is_command(&self, content_type: &str) -> bool;

    fn is_deprecated_command(&self, content_type: &str) -> bool;

    fn is_any_command(&self, content_type: &str) -> bool {
        self.is_command(content_type) || self.is_deprecated_command(content_type)
    }

    fn is_property(&self, content_type: &str) -> bool;

    fn is_variable(&self, content_type: &str) -> bool;

    fn is_comment(&self, content_type: &str) -> bool;

    /// Tag of the partition holding a command's closing parenthesis.
    fn is_args_close(&self, content_type: &str) -> bool;
}

/// Tag names used by the host partitioner.
///
/// Every field can be overridden from the `[partitions]` table of the settings
/// file; missing fields keep their default. Any other tag is unclassified text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ContentTypes {
    pub command: String,
    pub deprecated_command: String,
    pub property: String,
    pub variable: String,
    pub comment: String,
    pub args_close: String,
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self {
            command: "command".to_string(),
            deprecated_command: "deprecated-command".to_string(),
            property: "property".to_string(),
            variable: "variable".to_string(),
            comment: "comment".to_string(),
            args_close: "args-close".to_string(),
        }
    }
}

impl PartitionClassifier for ContentTypes {
    fn is_command(&self, content_type: &str) -> bool {
        content_type == self.command
    }

    fn is_deprecated_command(&self, content_type: &str) -> bool {
        content_type == self.deprecated_command
    }

    fn is_property(&self, content_type: &str) -> bool {
        content_type == self.property
    }

    fn is_variable(&self, content_type: &str) -> bool {
        content_type == self.variable
    }

    fn is_comment(&self, content_type: &str) -> bool {
        content_type == self.comment
    }

    fn is_args_close(&self, content_type: &str) -> bool {
        content_type == self.args_close
    }
}
