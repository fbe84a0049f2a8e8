use tracing::debug;

use crate::error::LayoutError;
use crate::geometry::{BoundingBox, Point3d};
use crate::grid::StoneGrid;

/// The bounding volume of a region mesh.
///
/// Only the box is kept; the mesh itself is never inspected again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    bounds: BoundingBox,
}

impl Region {
    /// Reduce a point cloud to its component-wise min and max corners.
    pub fn from_mesh(mesh: &[Point3d]) -> Result<Self, LayoutError> {
        if mesh.iter().any(|p| !p.is_finite()) {
            return Err(LayoutError::NonFiniteInput {
                field: "region_mesh",
            });
        }
        let bounds = BoundingBox::from_points(mesh).ok_or(LayoutError::EmptyRegion)?;
        debug!(min = ?bounds.min, max = ?bounds.max, points = mesh.len(), "region bounds");
        Ok(Self { bounds })
    }

    /// Height of the plane all stones are placed on.
    pub fn base_z(&self) -> f64 {
        self.bounds.min.z
    }

    /// Grid of stone centers inset by `padding` on every side of the base plane.
    pub fn grid(&self, padding: f64, step: f64) -> StoneGrid {
        StoneGrid {
            x_start: self.bounds.min.x + padding,
            x_end: self.bounds.max.x - padding,
            y_start: self.bounds.min.y + padding,
            y_end: self.bounds.max.y - padding,
            z: self.base_z(),
            step,
        }
    }
}
