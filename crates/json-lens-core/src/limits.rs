//! Resource limits for parsing.

/// Default maximum container nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Limits applied by the `parse_*_with` entry points.
///
/// Input that exceeds a limit is rejected like any other malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    /// Maximum nesting of objects and arrays. A scalar document has depth 0.
    pub max_depth: usize,
    /// Maximum input length in bytes.
    pub max_input_size: usize,
}

impl ParseLimits {
    /// Depth 128, no input size limit.
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_size: usize::MAX,
        }
    }

    /// Tight limits for untrusted input.
    pub const fn strict() -> Self {
        Self {
            max_depth: 32,
            max_input_size: 1024 * 1024, // 1 MiB
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_max_input_size(mut self, max_input_size: usize) -> Self {
        self.max_input_size = max_input_size;
        self
    }
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self::new()
    }
}
