use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::shape::{ShapePolicy, StoneShape};

/// Label used when a request does not name a grid type.
pub const DEFAULT_GRID_TYPE: &str = "square";

/// Parameters for a single stone layout run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Diameter (or edge length) of one stone footprint.
    pub stone_size: f64,
    /// Free-form label echoed into the report. Does not affect placement.
    #[serde(default = "default_grid_type")]
    pub grid_type: String,
    /// Gap between adjacent stones on top of `stone_size`.
    #[serde(default)]
    pub spacing: f64,
    /// Inset from the region boundary kept clear of stones.
    #[serde(default)]
    pub padding: f64,
    /// Fixed shape or the mixed rotation.
    #[serde(default)]
    pub stone_shape: ShapePolicy,
}

fn default_grid_type() -> String {
    DEFAULT_GRID_TYPE.to_string()
}

impl LayoutParams {
    pub fn new(stone_size: f64) -> Self {
        Self {
            stone_size,
            grid_type: default_grid_type(),
            spacing: 0.0,
            padding: 0.0,
            stone_shape: ShapePolicy::default(),
        }
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_shape(mut self, stone_shape: impl Into<ShapePolicy>) -> Self {
        self.stone_shape = stone_shape.into();
        self
    }

    pub fn with_grid_type(mut self, grid_type: impl Into<String>) -> Self {
        self.grid_type = grid_type.into();
        self
    }

    /// Distance between neighbouring stone centers along x and y.
    pub fn step(&self) -> f64 {
        self.stone_size + self.spacing
    }
}

/// One generated stone position.
///
/// Serialized as an `[x, y, z, shape]` tuple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub shape: StoneShape,
}

impl Placement {
    pub fn new(x: f64, y: f64, z: f64, shape: StoneShape) -> Self {
        Self { x, y, z, shape }
    }
}

impl Serialize for Placement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.x, self.y, self.z, self.shape).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Placement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x, y, z, shape) = <(f64, f64, f64, StoneShape)>::deserialize(deserializer)?;
        Ok(Placement { x, y, z, shape })
    }
}

/// Summary of a layout run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiamondReport {
    /// Number of placements generated (uncapped).
    pub total_diamonds: usize,
    pub stone_size: f64,
    pub grid_type: String,
    pub spacing: f64,
    pub padding: f64,
    pub stone_shape: ShapePolicy,
    /// The first placements in generation order, capped at the preview limit.
    pub shapes_used: Vec<Placement>,
}
