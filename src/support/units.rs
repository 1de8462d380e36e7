//! Length units for tank geometry.
//!
//! Record dimensions are plain `f64` values in a single [`LengthUnit`] chosen
//! when a model is built. Volumes leave the model as [`uom`] quantities, so
//! the caller picks the output unit:
//!
//! ```
//! use tank_stack::support::units::LengthUnit;
//! use uom::si::volume::{cubic_centimeter, liter};
//!
//! let volume = LengthUnit::Centimeter.volume(1000.0);
//! assert!((volume.get::<liter>() - 1.0).abs() < 1e-12);
//! assert!((volume.get::<cubic_centimeter>() - 1000.0).abs() < 1e-9);
//! ```

use std::fmt;

use uom::si::{
    f64::{Length, Volume},
    length,
};

/// The unit in which record radii, heights, and elevations are expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    #[default]
    Inch,
    Foot,
    Millimeter,
    Centimeter,
    Meter,
}

impl LengthUnit {
    /// One of this unit as a [`Length`].
    ///
    /// uom's length units are exact (1 in = 2.54 cm), unlike its rounded
    /// cubic units, so volumes are built from these.
    #[must_use]
    pub fn length(self) -> Length {
        match self {
            Self::Inch => Length::new::<length::inch>(1.0),
            Self::Foot => Length::new::<length::foot>(1.0),
            Self::Millimeter => Length::new::<length::millimeter>(1.0),
            Self::Centimeter => Length::new::<length::centimeter>(1.0),
            Self::Meter => Length::new::<length::meter>(1.0),
        }
    }

    /// Converts a value in cubic units of this unit into a [`Volume`].
    #[must_use]
    pub fn volume(self, cubic: f64) -> Volume {
        let unit = self.length();
        unit * unit * unit * cubic
    }

    /// Short symbol used on plot axes.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Inch => "in",
            Self::Foot => "ft",
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Meter => "m",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Inch => "inches",
            Self::Foot => "feet",
            Self::Millimeter => "millimeters",
            Self::Centimeter => "centimeters",
            Self::Meter => "meters",
        };
        f.write_str(name)
    }
}
