/// Errors from stone layout generation.
///
/// Every variant describes input the generator refuses to lay out. The
/// computation is deterministic, so the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("region mesh is empty")]
    EmptyRegion,

    #[error("{field} must be finite")]
    NonFiniteInput { field: &'static str },

    #[error("stone_size must be positive, got {stone_size}")]
    NonPositiveStoneSize { stone_size: f64 },

    #[error("spacing must not be negative, got {spacing}")]
    NegativeSpacing { spacing: f64 },

    #[error("padding must not be negative, got {padding}")]
    NegativePadding { padding: f64 },

    #[error("grid step {step} does not advance across the region")]
    NonAdvancingStep { step: f64 },

    #[error("layout would place about {estimated} stones, limit is {limit}")]
    TooManyPlacements { estimated: f64, limit: usize },
}
