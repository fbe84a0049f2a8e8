use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Cut of a single stone footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoneShape {
    Round,
    Princess,
    Oval,
    Emerald,
    Cushion,
    Marquise,
    Pear,
    Heart,
    Asscher,
    Radiant,
    Baguette,
    Trillion,
}

/// Round-robin order used by [`ShapePolicy::Mixed`].
pub const MIXED_ROTATION: [StoneShape; 4] = [
    StoneShape::Round,
    StoneShape::Princess,
    StoneShape::Oval,
    StoneShape::Emerald,
];

/// Sentinel identifier selecting the mixed rotation.
pub const MIXED: &str = "mixed";

impl StoneShape {
    pub const ALL: [StoneShape; 12] = [
        StoneShape::Round,
        StoneShape::Princess,
        StoneShape::Oval,
        StoneShape::Emerald,
        StoneShape::Cushion,
        StoneShape::Marquise,
        StoneShape::Pear,
        StoneShape::Heart,
        StoneShape::Asscher,
        StoneShape::Radiant,
        StoneShape::Baguette,
        StoneShape::Trillion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoneShape::Round => "round",
            StoneShape::Princess => "princess",
            StoneShape::Oval => "oval",
            StoneShape::Emerald => "emerald",
            StoneShape::Cushion => "cushion",
            StoneShape::Marquise => "marquise",
            StoneShape::Pear => "pear",
            StoneShape::Heart => "heart",
            StoneShape::Asscher => "asscher",
            StoneShape::Radiant => "radiant",
            StoneShape::Baguette => "baguette",
            StoneShape::Trillion => "trillion",
        }
    }
}

impl fmt::Display for StoneShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoneShape {
    type Err = ShapeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StoneShape::ALL
            .iter()
            .copied()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| ShapeParseError::UnknownShape {
                identifier: s.to_string(),
            })
    }
}

/// How shapes are assigned to generated placements.
///
/// On the wire this is a single string: either a shape identifier or `"mixed"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ShapePolicy {
    /// Every placement gets the same shape.
    Fixed(StoneShape),
    /// Placements cycle through [`MIXED_ROTATION`].
    Mixed,
}

impl ShapePolicy {
    /// Shape for the placement whose 1-based running count is `count`.
    ///
    /// The mixed rotation is indexed with the count after it has been
    /// incremented for the current placement, so the first placement
    /// (`count == 1`) is a princess, not a round.
    pub fn resolve(&self, count: usize) -> StoneShape {
        match self {
            ShapePolicy::Fixed(shape) => *shape,
            ShapePolicy::Mixed => MIXED_ROTATION[count % MIXED_ROTATION.len()],
        }
    }
}

impl Default for ShapePolicy {
    fn default() -> Self {
        ShapePolicy::Fixed(StoneShape::Round)
    }
}

impl From<StoneShape> for ShapePolicy {
    fn from(shape: StoneShape) -> Self {
        ShapePolicy::Fixed(shape)
    }
}

impl fmt::Display for ShapePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapePolicy::Fixed(shape) => fmt::Display::fmt(shape, f),
            ShapePolicy::Mixed => f.write_str(MIXED),
        }
    }
}

impl FromStr for ShapePolicy {
    type Err = ShapeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == MIXED {
            Ok(ShapePolicy::Mixed)
        } else {
            s.parse().map(ShapePolicy::Fixed)
        }
    }
}

impl TryFrom<String> for ShapePolicy {
    type Error = ShapeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShapePolicy> for String {
    fn from(policy: ShapePolicy) -> Self {
        policy.to_string()
    }
}

/// Errors from parsing shape identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeParseError {
    #[error("unknown stone shape '{identifier}' (expected a known cut or \"mixed\")")]
    UnknownShape { identifier: String },
}
