//! Deterministic stone layout on a rectangular grid.
//!
//! A region mesh is reduced to its axis-aligned bounding box, inset by the
//! padding, and swept row-major with a fixed step of `stone_size + spacing`.
//! Every stone sits on the base plane of the region (its minimum z).

pub mod config;
pub mod error;
pub mod generate;
pub mod geometry;
pub mod grid;
pub mod region;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use generate::{
    build_report, generate_layout, generate_layout_with, LayoutOutput, LayoutPlan, Placements,
};
pub use geometry::{BoundingBox, Point3d};
pub use grid::{GridPositions, StoneGrid};
pub use region::Region;

pub use gem_types::{DiamondReport, LayoutParams, Placement, ShapePolicy, StoneShape};
