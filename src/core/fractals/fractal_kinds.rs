use std::str::FromStr;

use thiserror::Error;

use crate::core::data::recursion_depth::DepthBounds;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fractal '{0}', expected one of: koch, carpet, triangle")]
pub struct UnknownFractalKind(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FractalKinds {
    KochCurve,
    SierpinskiCarpet,
    SierpinskiTriangle,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[
        Self::KochCurve,
        Self::SierpinskiCarpet,
        Self::SierpinskiTriangle,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::KochCurve => "Koch curve",
            Self::SierpinskiCarpet => "Sierpinski carpet",
            Self::SierpinskiTriangle => "Sierpinski triangle",
        }
    }

    /// Short name used on the command line and in output file names.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::KochCurve => "koch",
            Self::SierpinskiCarpet => "carpet",
            Self::SierpinskiTriangle => "triangle",
        }
    }

    /// Command counts grow as 4^n, 8^n and 3^n.
    #[must_use]
    pub const fn depth_bounds(self) -> DepthBounds {
        match self {
            Self::KochCurve => DepthBounds { min: 1, max: 7 },
            Self::SierpinskiCarpet => DepthBounds { min: 1, max: 5 },
            Self::SierpinskiTriangle => DepthBounds { min: 1, max: 8 },
        }
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FractalKinds {
    type Err = UnknownFractalKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "koch" | "koch-curve" => Ok(Self::KochCurve),
            "carpet" | "sierpinski-carpet" => Ok(Self::SierpinskiCarpet),
            "triangle" | "sierpinski-triangle" => Ok(Self::SierpinskiTriangle),
            _ => Err(UnknownFractalKind(s.to_owned())),
        }
    }
}
