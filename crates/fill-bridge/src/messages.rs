use serde::{Deserialize, Serialize};

use gem_types::{DiamondReport, LayoutParams, StoneShape};

use crate::error::ErrorKind;

/// Body of an `AutoDiamondFill` request.
///
/// The layout parameters sit flat next to `region_mesh` on the wire and take
/// their defaults from [`LayoutParams`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillRequest {
    pub region_mesh: Vec<[f64; 3]>,
    #[serde(flatten)]
    pub params: LayoutParams,
}

/// Messages from a client to the layout service.
/// Serialized as JSON with a `type` tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Tile the bounding box of `region_mesh` with stones.
    AutoDiamondFill(FillRequest),

    /// List the known shape identifiers and the mixed rotation order.
    ListShapes,

    /// Liveness check.
    Ping,
}

impl Request {
    /// Build an `AutoDiamondFill` request from typed parameters.
    pub fn auto_diamond_fill(region_mesh: Vec<[f64; 3]>, params: LayoutParams) -> Self {
        Request::AutoDiamondFill(FillRequest {
            region_mesh,
            params,
        })
    }
}

/// Messages from the layout service back to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    /// Layout generated. `modified_mesh` is the request mesh, unchanged.
    DiamondFilled {
        modified_mesh: Vec<[f64; 3]>,
        diamond_report: DiamondReport,
    },

    Shapes {
        shapes: Vec<StoneShape>,
        mixed_rotation: Vec<StoneShape>,
    },

    Pong { ok: bool },

    /// The request was rejected. No layout data accompanies an error.
    Error { kind: ErrorKind, message: String },
}

impl Response {
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}
