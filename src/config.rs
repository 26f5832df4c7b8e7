//! Front-end configuration for the `vbfront` driver
//!
//! The library itself is configured per parse through [`ParseContext`]; this struct carries the driver-level
//! knobs and knows how to build that context.

use vbfront_syntax::parser::ParseContext;

/// Default maximum source file size (100 MB).
///
/// Files larger than this are rejected before they are read.
pub const DEFAULT_MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Driver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Largest source file accepted, in bytes
    pub max_source_size: u64,
    /// Names treated as already declared by the shape classifier
    pub declared_names: Vec<String>,
    /// Whether the summary lists forward declarations
    pub report_forward_declarations: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            max_source_size: DEFAULT_MAX_SOURCE_SIZE,
            declared_names: Vec::new(),
            report_forward_declarations: true,
        }
    }
}

impl FrontendConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum accepted source size in bytes
    pub fn with_max_source_size(mut self, bytes: u64) -> Self {
        self.max_source_size = bytes;
        self
    }

    /// Add one pre-declared name
    pub fn with_declared_name(mut self, name: impl Into<String>) -> Self {
        self.declared_names.push(name.into());
        self
    }

    /// Add several pre-declared names
    pub fn with_declared_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declared_names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_report_forward_declarations(mut self, report: bool) -> Self {
        self.report_forward_declarations = report;
        self
    }

    /// A fresh per-parse context seeded with the configured declared names.
    pub fn parse_context(&self) -> ParseContext {
        ParseContext::with_declared_names(self.declared_names.iter().cloned())
    }
}
