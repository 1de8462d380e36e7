use uom::si::f64::{Mass, MassDensity, Volume};

use crate::{
    models::storage::stacked_cylinders::{Extent, StackedCylinders},
    support::units::LengthUnit,
};

use super::RenderError;

/// Sampling options for a [`VolumeCurve`].
#[derive(Debug, Clone, Copy)]
pub struct CurveConfig {
    /// Number of evenly spaced fill heights, ends included.
    pub samples: usize,

    /// Liquid density; when set, every point also carries the liquid mass.
    pub density: Option<MassDensity>,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            samples: 100,
            density: None,
        }
    }
}

/// One sample of a [`VolumeCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Fill height in the stack's length unit.
    pub height: f64,
    pub volume: Volume,
    pub mass: Option<Mass>,
}

/// Liquid volume sampled over the full height of a stack.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeCurve {
    pub points: Vec<CurvePoint>,

    /// Base and top elevations of every displacer.
    pub markers: Vec<f64>,

    /// Span of the sampled heights.
    pub heights: Extent,

    pub unit: LengthUnit,
}

impl VolumeCurve {
    /// Samples `stack` from its lowest base to its highest top.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the stack is empty or fewer than two
    /// samples are requested.
    pub fn new(stack: &StackedCylinders, config: &CurveConfig) -> Result<Self, RenderError> {
        let samples = config.samples;
        if samples < 2 {
            return Err(RenderError::TooFewSamples { samples });
        }

        let heights = stack.z_range()?;
        let step = heights.span() / (samples - 1) as f64;

        let points = (0..samples)
            .map(|i| {
                let height = if i + 1 == samples {
                    heights.max
                } else {
                    heights.min + step * i as f64
                };
                let volume = stack.filled_volume(height);
                CurvePoint {
                    height,
                    volume,
                    mass: config.density.map(|density| volume * density),
                }
            })
            .collect();

        let markers = stack
            .records()
            .iter()
            .filter(|r| r.is_displacing())
            .flat_map(|r| [r.z(), r.top()])
            .collect();

        Ok(Self {
            points,
            markers,
            heights,
            unit: stack.unit(),
        })
    }
}
