use std::{f64::consts::PI, fmt};

use crate::support::constraint::{Constrained, Finite, StrictlyPositive};

/// Whether a record holds liquid or displaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    /// A liquid-holding cylinder; its filled volume is added.
    #[default]
    Vessel,

    /// A submerged solid; its filled volume is subtracted.
    Displacer,
}

impl Role {
    /// Returns `true` for [`Role::Displacer`].
    #[must_use]
    pub fn is_displacing(self) -> bool {
        matches!(self, Self::Displacer)
    }

    fn sign(self) -> f64 {
        match self {
            Self::Vessel => 1.0,
            Self::Displacer => -1.0,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vessel => f.write_str("vessel"),
            Self::Displacer => f.write_str("displacer"),
        }
    }
}

/// One fully-resolved cylinder in a stack.
///
/// All values are in the owning model's length unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderRecord {
    radius: Constrained<f64, StrictlyPositive>,
    height: Constrained<f64, StrictlyPositive>,
    z: Constrained<f64, Finite>,
    role: Role,
}

impl CylinderRecord {
    pub(super) fn new(
        radius: Constrained<f64, StrictlyPositive>,
        height: Constrained<f64, StrictlyPositive>,
        z: Constrained<f64, Finite>,
        role: Role,
    ) -> Self {
        Self {
            radius,
            height,
            z,
            role,
        }
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius.get()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height.get()
    }

    /// Base elevation along the stacking axis.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.z.get()
    }

    /// Top elevation, `z + height`.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.z() + self.height()
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn is_displacing(&self) -> bool {
        self.role.is_displacing()
    }

    /// Cross-sectional area, `π r²`, in square model units.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius() * self.radius()
    }

    /// Volume of the whole cylinder, in cubic model units.
    #[must_use]
    pub fn full_volume(&self) -> f64 {
        self.height() * self.area()
    }

    /// Volume of this cylinder lying below `zfill`, in cubic model units.
    ///
    /// Zero below the base, linear in `zfill` across the cylinder, and capped
    /// at the full volume above the top.
    #[must_use]
    pub fn filled_volume(&self, zfill: f64) -> f64 {
        if zfill < self.z() {
            0.0
        } else if zfill <= self.top() {
            (zfill - self.z()) * self.area()
        } else {
            self.full_volume()
        }
    }

    /// Filled volume with the sign of its contribution to the liquid total.
    pub(super) fn contribution(&self, zfill: f64) -> f64 {
        self.role.sign() * self.filled_volume(zfill)
    }
}
