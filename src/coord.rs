use std::fmt;

/// Which ordinates a coordinate carries beyond X and Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dimension {
    /// `2D`: X and Y only.
    #[default]
    Xy,
    /// `3DZ`: X, Y and elevation.
    Xyz,
    /// `3DM`: X, Y and measure.
    Xym,
    /// `4D`: X, Y, elevation and measure.
    Xyzm,
}

impl Dimension {
    #[must_use]
    pub const fn has_z(self) -> bool {
        matches!(self, Self::Xyz | Self::Xyzm)
    }

    #[must_use]
    pub const fn has_m(self) -> bool {
        matches!(self, Self::Xym | Self::Xyzm)
    }

    /// Conventional name: `2D`, `3DZ`, `3DM` or `4D`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xy => "2D",
            Self::Xyz => "3DZ",
            Self::Xym => "3DM",
            Self::Xyzm => "4D",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single coordinate tuple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coordinates {
    #[must_use]
    pub const fn xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    #[must_use]
    pub const fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    #[must_use]
    pub const fn with_m(mut self, m: f64) -> Self {
        self.m = Some(m);
        self
    }
}
