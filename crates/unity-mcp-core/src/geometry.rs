//! Geometry types for scene coordinates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A 3-component vector, serialized as `[x, y, z]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Vector3([f64; 3]);

impl Vector3 {
    /// Create a new vector.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self([0.0; 3])
    }

    /// X component.
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    /// Y component.
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// Z component.
    pub fn z(&self) -> f64 {
        self.0[2]
    }

    /// Components as an array.
    pub fn to_array(self) -> [f64; 3] {
        self.0
    }

    /// Interpret an optional list of numbers as a position.
    ///
    /// `None` and an empty list both mean "no position". Any other list must
    /// hold exactly three components; the zero vector is a valid position.
    pub fn from_optional_slice(values: Option<&[f64]>) -> Result<Option<Self>> {
        match values {
            None | Some([]) => Ok(None),
            Some(components) => Self::try_from(components).map(Some),
        }
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(components: [f64; 3]) -> Self {
        Self(components)
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = Error;

    fn try_from(components: &[f64]) -> Result<Self> {
        match components {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            other => Err(Error::InvalidInput(format!(
                "position must have exactly 3 components, got {}",
                other.len()
            ))),
        }
    }
}

impl std::fmt::Display for Vector3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}
