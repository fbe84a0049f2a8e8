//! Limits applied to a layout run.

/// Number of placements echoed into `shapes_used`.
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// Grid size cap used by [`LayoutConfig::guarded`].
pub const GUARDED_MAX_PLACEMENTS: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// How many leading placements the report previews.
    pub preview_limit: usize,
    /// Runs whose estimated grid exceeds this are rejected up front.
    /// `usize::MAX` disables the check.
    pub max_placements: usize,
}

/// No cap on grid size. The step must still advance.
impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            max_placements: usize::MAX,
        }
    }
}

impl LayoutConfig {
    /// Cap the grid at [`GUARDED_MAX_PLACEMENTS`] cells, for callers serving
    /// untrusted requests.
    pub fn guarded() -> Self {
        Self {
            max_placements: GUARDED_MAX_PLACEMENTS,
            ..Self::default()
        }
    }

    pub fn with_preview_limit(mut self, preview_limit: usize) -> Self {
        self.preview_limit = preview_limit;
        self
    }

    pub fn with_max_placements(mut self, max_placements: usize) -> Self {
        self.max_placements = max_placements;
        self
    }
}
