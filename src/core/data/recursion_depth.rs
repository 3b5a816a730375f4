use thiserror::Error;

use crate::core::fractals::fractal_kinds::FractalKinds;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("{kind} depth must be between {min} and {max} inclusive, got {depth}")]
pub struct DepthRangeError {
    pub kind: FractalKinds,
    pub depth: u32,
    pub min: u32,
    pub max: u32,
}

/// Closed interval of depths a fractal accepts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DepthBounds {
    pub min: u32,
    pub max: u32,
}

impl DepthBounds {
    #[must_use]
    pub const fn contains(&self, depth: u32) -> bool {
        self.min <= depth && depth <= self.max
    }
}

/// A recursion depth already checked against its fractal's bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RecursionDepth {
    kind: FractalKinds,
    value: u32,
}

impl RecursionDepth {
    pub fn new(kind: FractalKinds, depth: u32) -> Result<Self, DepthRangeError> {
        let bounds = kind.depth_bounds();

        if !bounds.contains(depth) {
            return Err(DepthRangeError {
                kind,
                depth,
                min: bounds.min,
                max: bounds.max,
            });
        }

        Ok(Self { kind, value: depth })
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        self.kind
    }

    #[must_use]
    pub fn get(&self) -> u32 {
        self.value
    }
}
