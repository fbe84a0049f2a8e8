use tracing::{debug, info, instrument};

use gem_types::{DiamondReport, LayoutParams, Placement, ShapePolicy};

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::geometry::Point3d;
use crate::grid::{GridPositions, StoneGrid};
use crate::region::Region;

/// Result of a layout run.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOutput {
    /// The input mesh, unchanged. Stones are reported, never merged into it.
    pub modified_mesh: Vec<Point3d>,
    /// Every placement in generation order.
    pub placements: Vec<Placement>,
    pub report: DiamondReport,
}

/// A validated layout whose placements can be walked lazily.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    grid: StoneGrid,
    policy: ShapePolicy,
}

impl LayoutPlan {
    /// Validate `params` against `mesh` and fix the grid.
    pub fn new(
        mesh: &[Point3d],
        params: &LayoutParams,
        config: &LayoutConfig,
    ) -> Result<Self, LayoutError> {
        validate_params(params)?;
        let region = Region::from_mesh(mesh)?;
        let grid = region.grid(params.padding, params.step());

        if !grid.is_empty() && !grid.step_advances() {
            return Err(LayoutError::NonAdvancingStep { step: grid.step });
        }

        let estimated = grid.estimated_len();
        if config.max_placements != usize::MAX && estimated > config.max_placements as f64 {
            return Err(LayoutError::TooManyPlacements {
                estimated,
                limit: config.max_placements,
            });
        }
        debug!(?grid, estimated, "layout grid fixed");

        Ok(Self {
            grid,
            policy: params.stone_shape,
        })
    }

    /// Walk the placements without collecting them.
    pub fn placements(&self) -> Placements {
        Placements {
            positions: self.grid.positions(),
            policy: self.policy,
            count: 0,
        }
    }
}

/// Iterator over the placements of a [`LayoutPlan`].
#[derive(Debug, Clone)]
pub struct Placements {
    positions: GridPositions,
    policy: ShapePolicy,
    count: usize,
}

impl Iterator for Placements {
    type Item = Placement;

    fn next(&mut self) -> Option<Self::Item> {
        let [x, y, z] = self.positions.next()?;
        self.count += 1;
        Some(Placement::new(x, y, z, self.policy.resolve(self.count)))
    }
}

impl std::iter::FusedIterator for Placements {}

fn validate_params(params: &LayoutParams) -> Result<(), LayoutError> {
    for (field, value) in [
        ("stone_size", params.stone_size),
        ("spacing", params.spacing),
        ("padding", params.padding),
    ] {
        if !value.is_finite() {
            return Err(LayoutError::NonFiniteInput { field });
        }
    }
    if params.stone_size <= 0.0 {
        return Err(LayoutError::NonPositiveStoneSize {
            stone_size: params.stone_size,
        });
    }
    if params.spacing < 0.0 {
        return Err(LayoutError::NegativeSpacing {
            spacing: params.spacing,
        });
    }
    if params.padding < 0.0 {
        return Err(LayoutError::NegativePadding {
            padding: params.padding,
        });
    }
    if params.step() <= 0.0 {
        return Err(LayoutError::NonAdvancingStep {
            step: params.step(),
        });
    }
    Ok(())
}

/// Lay stones out over `mesh` with the default [`LayoutConfig`], which
/// places no cap on the grid size.
pub fn generate_layout(
    mesh: &[Point3d],
    params: &LayoutParams,
) -> Result<LayoutOutput, LayoutError> {
    generate_layout_with(mesh, params, &LayoutConfig::default())
}

/// Lay stones out over `mesh`.
///
/// The mesh is reduced to its bounding box, inset by `padding`, and swept
/// with step `stone_size + spacing`, x outer and y inner. All stones sit at
/// the minimum z of the mesh.
#[instrument(skip(mesh, params, config), fields(points = mesh.len(), grid_type = %params.grid_type))]
pub fn generate_layout_with(
    mesh: &[Point3d],
    params: &LayoutParams,
    config: &LayoutConfig,
) -> Result<LayoutOutput, LayoutError> {
    let plan = LayoutPlan::new(mesh, params, config)?;
    let placements: Vec<Placement> = plan.placements().collect();
    let report = build_report(params, &placements, config.preview_limit);

    info!(
        total_diamonds = report.total_diamonds,
        step = params.step(),
        stone_shape = %params.stone_shape,
        "stone layout generated"
    );

    Ok(LayoutOutput {
        modified_mesh: mesh.to_vec(),
        placements,
        report,
    })
}

/// Summarize `placements`, previewing at most `preview_limit` of them.
pub fn build_report(
    params: &LayoutParams,
    placements: &[Placement],
    preview_limit: usize,
) -> DiamondReport {
    DiamondReport {
        total_diamonds: placements.len(),
        stone_size: params.stone_size,
        grid_type: params.grid_type.clone(),
        spacing: params.spacing,
        padding: params.padding,
        stone_shape: params.stone_shape,
        shapes_used: placements.iter().take(preview_limit).copied().collect(),
    }
}
