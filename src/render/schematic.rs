use crate::{
    models::storage::stacked_cylinders::{Extent, Role, StackedCylinders},
    support::units::LengthUnit,
};

use super::RenderError;

/// Side view of one record: a rectangle centred on the stacking axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// Horizontal span, `-radius..=radius`.
    pub x: Extent,

    /// Vertical span, `z..=z + height`.
    pub z: Extent,

    pub role: Role,
}

/// Cross-section of a whole stack, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Schematic {
    /// One shape per record, in insertion order.
    pub shapes: Vec<Shape>,

    /// Horizontal plot limits, symmetric about the axis.
    pub x_limits: Extent,

    /// Vertical plot limits.
    pub z_limits: Extent,

    pub unit: LengthUnit,
}

impl Schematic {
    /// Builds the cross-section of `stack`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Stack`] if the stack is empty.
    pub fn new(stack: &StackedCylinders) -> Result<Self, RenderError> {
        let radius = stack.radius_range()?;
        let z_limits = stack.z_range()?;

        let shapes = stack
            .records()
            .iter()
            .map(|r| Shape {
                x: Extent {
                    min: -r.radius(),
                    max: r.radius(),
                },
                z: Extent {
                    min: r.z(),
                    max: r.top(),
                },
                role: r.role(),
            })
            .collect();

        Ok(Self {
            shapes,
            x_limits: Extent {
                min: -radius.max,
                max: radius.max,
            },
            z_limits,
            unit: stack.unit(),
        })
    }
}
