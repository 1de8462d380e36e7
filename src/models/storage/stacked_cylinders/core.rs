//! Record bookkeeping and the volume-accumulation algorithm.

mod error;
mod record;

pub use error::StackError;
pub use record::{CylinderRecord, Role};

use uom::si::f64::Volume;

use crate::support::{
    constraint::{Constrained, ConstraintError, Finite, StrictlyPositive},
    units::LengthUnit,
};

/// Closed interval `[min, max]` along one axis, in model units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Returns `max - min`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Smallest extent enclosing every value.
    fn enclosing(values: impl IntoIterator<Item = f64>) -> Result<Self, StackError> {
        let mut values = values.into_iter();
        let first = values.next().ok_or(StackError::EmptyModel)?;
        Ok(values.fold(
            Self {
                min: first,
                max: first,
            },
            |extent, value| Self {
                min: extent.min.min(value),
                max: extent.max.max(value),
            },
        ))
    }
}

/// A radius or height: finite and strictly positive.
fn dimension(value: f64) -> Result<Constrained<f64, StrictlyPositive>, ConstraintError> {
    StrictlyPositive::new(Finite::new(value)?.into_inner())
}

/// An ordered stack of coaxial cylinders measured in one [`LengthUnit`].
///
/// Records are append-only. Their order only matters when a vessel is added
/// without an explicit `z` (see [`StackedCylinders::add_record`]); otherwise
/// geometry is fully determined by each record's radius, height, and `z`.
///
/// The model is a plain value: share it freely by reference, and mutate it
/// only through `&mut`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackedCylinders {
    unit: LengthUnit,
    records: Vec<CylinderRecord>,
}

impl StackedCylinders {
    /// Creates an empty stack whose dimensions are given in `unit`.
    #[must_use]
    pub fn new(unit: LengthUnit) -> Self {
        Self {
            unit,
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[CylinderRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a cylinder to the stack and returns the resolved record.
    ///
    /// When `z` is `None` a vessel is stacked on the most recently added
    /// record: at `z = 0` if the stack is empty, otherwise at
    /// `previous.z + previous.height`. "Previous" is the last record in
    /// insertion order, whatever its role.
    ///
    /// # Errors
    ///
    /// Returns a [`StackError`] and leaves the stack unchanged if
    ///
    /// - `role` is [`Role::Displacer`] and `z` is `None`,
    /// - `radius` or `height` is not finite and strictly positive,
    /// - `z` or the resolved top is not finite,
    /// - the full volume of the cylinder overflows.
    pub fn add_record(
        &mut self,
        radius: f64,
        height: f64,
        role: Role,
        z: Option<f64>,
    ) -> Result<&CylinderRecord, StackError> {
        let record = self
            .resolve(radius, height, role, z)
            .inspect_err(|err| log::warn!("not adding {role} record: {err}"))?;

        if z.is_none() {
            log::debug!("stacked {record:?}");
        }

        let index = self.records.len();
        self.records.push(record);
        Ok(&self.records[index])
    }

    /// Appends a liquid-holding vessel.
    ///
    /// See [`StackedCylinders::add_record`] for how an omitted `z` is resolved.
    ///
    /// # Errors
    ///
    /// Returns a [`StackError`] for invalid dimensions or a non-finite `z`.
    pub fn add_vessel(
        &mut self,
        radius: f64,
        height: f64,
        z: Option<f64>,
    ) -> Result<&CylinderRecord, StackError> {
        self.add_record(radius, height, Role::Vessel, z)
    }

    /// Appends a submerged solid with base elevation `z`.
    ///
    /// # Errors
    ///
    /// Returns a [`StackError`] for invalid dimensions or a non-finite `z`.
    pub fn add_displacer(
        &mut self,
        radius: f64,
        height: f64,
        z: f64,
    ) -> Result<&CylinderRecord, StackError> {
        self.add_record(radius, height, Role::Displacer, Some(z))
    }

    fn resolve(
        &self,
        radius: f64,
        height: f64,
        role: Role,
        z: Option<f64>,
    ) -> Result<CylinderRecord, StackError> {
        let z = match (z, role) {
            (Some(z), _) => z,
            (None, Role::Displacer) => return Err(StackError::MissingElevation),
            (None, Role::Vessel) => self.records.last().map_or(0.0, CylinderRecord::top),
        };

        let record = CylinderRecord::new(
            dimension(radius).map_err(StackError::InvalidRadius)?,
            dimension(height).map_err(StackError::InvalidHeight)?,
            Finite::new(z).map_err(StackError::InvalidElevation)?,
            role,
        );

        // Finite inputs can still overflow once combined.
        Finite::new(record.top()).map_err(StackError::InvalidElevation)?;
        Finite::new(record.full_volume()).map_err(StackError::InvalidVolume)?;

        Ok(record)
    }

    /// Lowest base and highest top over all records.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::EmptyModel`] if there are no records.
    pub fn z_range(&self) -> Result<Extent, StackError> {
        Extent::enclosing(self.records.iter().flat_map(|r| [r.z(), r.top()]))
    }

    /// Smallest and largest radius over all records.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::EmptyModel`] if there are no records.
    pub fn radius_range(&self) -> Result<Extent, StackError> {
        Extent::enclosing(self.records.iter().map(CylinderRecord::radius))
    }

    /// Net liquid volume below `zfill`, in cubic model units.
    ///
    /// Vessels add their filled volume and displacers subtract theirs, whether
    /// or not a displacer actually sits inside a vessel.
    #[must_use]
    pub fn filled_volume_raw(&self, zfill: f64) -> f64 {
        self.records.iter().map(|r| r.contribution(zfill)).sum()
    }

    /// Net liquid volume below `zfill`.
    ///
    /// Defined for every `zfill`, including heights below or above the stack.
    #[must_use]
    pub fn filled_volume(&self, zfill: f64) -> Volume {
        self.unit.volume(self.filled_volume_raw(zfill))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use uom::si::volume::{cubic_centimeter, cubic_inch, liter};

    fn liters(stack: &StackedCylinders, zfill: f64) -> f64 {
        stack.filled_volume(zfill).get::<liter>()
    }

    #[test]
    fn first_vessel_sits_at_zero() {
        let mut stack = StackedCylinders::default();
        let record = stack.add_vessel(3.0, 4.0, None).unwrap();
        assert_relative_eq!(record.z(), 0.0);
        assert_eq!(stack.unit(), LengthUnit::Inch);
    }

    #[test]
    fn vessels_stack_on_previous_record() {
        let mut stack = StackedCylinders::new(LengthUnit::Inch);
        stack.add_vessel(1.0, 2.0, None).unwrap();
        stack.add_vessel(1.0, 3.0, None).unwrap();
        stack.add_vessel(0.5, 1.0, None).unwrap();

        let zs: Vec<f64> = stack.records().iter().map(CylinderRecord::z).collect();
        assert_eq!(zs, [0.0, 2.0, 5.0]);
    }

    #[test]
    fn auto_stacking_follows_last_record_even_if_displacer() {
        let mut stack = StackedCylinders::new(LengthUnit::Inch);
        stack.add_vessel(2.0, 10.0, None).unwrap();
        stack.add_displacer(1.0, 3.0, 2.0).unwrap();
        let record = stack.add_vessel(2.0, 4.0, None).unwrap();

        assert_relative_eq!(record.z(), 5.0);
    }

    #[test]
    fn auto_stacking_follows_explicit_z() {
        let mut stack = StackedCylinders::new(LengthUnit::Inch);
        stack.add_vessel(1.0, 2.0, Some(-4.0)).unwrap();
        let record = stack.add_vessel(1.0, 2.0, None).unwrap();

        assert_relative_eq!(record.z(), -2.0);
    }

    #[test]
    fn displacer_without_z_is_rejected() {
        let mut stack = StackedCylinders::new(LengthUnit::Inch);
        stack.add_vessel(2.0, 10.0, None).unwrap();

        let result = stack.add_record(1.0, 3.0, Role::Displacer, None);

        assert_eq!(result.unwrap_err(), StackError::MissingElevation);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        let mut stack = StackedCylinders::new(LengthUnit::Inch);

        assert_eq!(
            stack.add_vessel(0.0, 1.0, None).unwrap_err(),
            StackError::InvalidRadius(ConstraintError::Zero)
        );
        assert_eq!(
            stack.add_vessel(1.0, -1.0, None).unwrap_err(),
            StackError::InvalidHeight(ConstraintError::Negative)
        );
        assert_eq!(
            stack.add_displacer(1.0, 1.0, f64::NAN).unwrap_err(),
            StackError::InvalidElevation(ConstraintError::NotANumber)
        );
        assert!(stack.is_empty());
    }

    #[test]
    fn non_finite_dimensions_are_rejected() {
        let mut stack = StackedCylinders::new(LengthUnit::Inch);

        assert_eq!(
            stack.add_vessel(f64::INFINITY, 1.0, None).unwrap_err(),
            StackError::InvalidRadius(ConstraintError::Infinite)
        );
        assert_eq!(
            stack.add_vessel(1.0, f64::INFINITY, None).unwrap_err(),
            StackError::InvalidHeight(ConstraintError::Infinite)
        );
        assert_eq!(
            stack.add_displacer(1.0, 1.0, f64::NEG_INFINITY).unwrap_err(),
            StackError::InvalidElevation(ConstraintError::Infinite)
        );
        assert!(stack.is_empty());
    }

    #[test]
    fn overflowing_records_are_rejected() {
        let mut stack = StackedCylinders::new(LengthUnit::Inch);

        assert_eq!(
            stack.add_vessel(1e200, 1.0, None).unwrap_err(),
            StackError::InvalidVolume(ConstraintError::Infinite)
        );
        assert_eq!(
            stack.add_vessel(1.0, f64::MAX, Some(f64::MAX)).unwrap_err(),
            StackError::InvalidElevation(ConstraintError::Infinite)
        );
        assert!(stack.is_empty());

        // The stack stays usable and well-defined afterwards.
        stack.add_vessel(1.0, 1.0, None).unwrap();
        assert_eq!(stack.filled_volume_raw(-1.0), 0.0);
        assert_relative_eq!(stack.filled_volume_raw(2.0), PI, epsilon = 1e-12);
    }

    #[test]
    fn ranges_fail_on_empty_model() {
        let stack = StackedCylinders::new(LengthUnit::Inch);
        assert_eq!(stack.z_range(), Err(StackError::EmptyModel));
        assert_eq!(stack.radius_range(), Err(StackError::EmptyModel));
    }

    #[test]
    fn ranges_cover_bases_and_tops() {
        let mut stack = StackedCylinders::new(LengthUnit::Inch);
        stack.add_vessel(2.0, 10.0, None).unwrap();
        stack.add_vessel(3.0, 5.0, None).unwrap();
        stack.add_displacer(0.5, 2.0, -1.0).unwrap();

        let z = stack.z_range().unwrap();
        assert_relative_eq!(z.min, -1.0);
        assert_relative_eq!(z.max, 15.0);
        assert_relative_eq!(z.span(), 16.0);

        let r = stack.radius_range().unwrap();
        assert_relative_eq!(r.min, 0.5);
        assert_relative_eq!(r.max, 3.0);
    }

    #[test]
    fn single_vessel_caps_at_full_volume() {
        let mut stack = StackedCylinders::new(LengthUnit::Inch);
        stack.add_vessel(2.0, 10.0, None).unwrap();

        let full = stack.filled_volume(10.0);
        assert_relative_eq!(full.get::<cubic_inch>(), 40.0 * PI, epsilon = 1e-9);
        for eps in [1e-6, 1.0, 1e3] {
            assert_relative_eq!(liters(&stack, 10.0 + eps), full.get::<liter>());
        }
    }

    #[test]
    fn vessel_in_inches() {
        let mut stack = StackedCylinders::new(LengthUnit::Inch);
        stack.add_vessel(2.0, 10.0, Some(0.0)).unwrap();

        assert_relative_eq!(stack.filled_volume_raw(5.0), 20.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(liters(&stack, 5.0), 1.0296, epsilon = 1e-4);
    }

    #[test]
    fn submerged_displacer_is_subtracted() {
        let mut stack = StackedCylinders::new(LengthUnit::Inch);
        stack.add_vessel(2.0, 10.0, Some(0.0)).unwrap();
        stack.add_displacer(1.0, 3.0, 2.0).unwrap();

        assert_relative_eq!(stack.filled_volume_raw(5.0), 17.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(liters(&stack, 5.0), 0.8752, epsilon = 1e-4);

        // Partly submerged.
        assert_relative_eq!(stack.filled_volume_raw(3.0), 11.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn displacer_outside_vessels_still_subtracts() {
        let mut stack = StackedCylinders::new(LengthUnit::Inch);
        stack.add_vessel(1.0, 1.0, None).unwrap();
        stack.add_displacer(1.0, 1.0, 5.0).unwrap();

        assert_relative_eq!(stack.filled_volume_raw(10.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn volume_is_zero_below_the_stack() {
        let mut stack = StackedCylinders::new(LengthUnit::Inch);
        stack.add_vessel(1.0, 1.0, None).unwrap();

        assert_relative_eq!(liters(&stack, -100.0), 0.0);
    }

    #[test]
    fn vessels_only_volume_is_monotone() {
        let mut stack = StackedCylinders::new(LengthUnit::Inch);
        stack.add_vessel(2.0, 3.0, None).unwrap();
        stack.add_vessel(1.0, 2.0, None).unwrap();
        stack.add_vessel(4.0, 1.5, Some(1.0)).unwrap();

        let mut previous = f64::NEG_INFINITY;
        for i in 0..=200 {
            let zfill = -1.0 + f64::from(i) * 0.05;
            let volume = liters(&stack, zfill);
            assert!(volume >= previous, "volume dropped at zfill = {zfill}");
            previous = volume;
        }
    }

    #[test]
    fn filled_volume_is_repeatable() {
        let mut stack = StackedCylinders::new(LengthUnit::Inch);
        stack.add_vessel(2.0, 10.0, None).unwrap();
        stack.add_displacer(1.0, 3.0, 2.0).unwrap();

        let first = stack.filled_volume(4.2);
        let second = stack.filled_volume(4.2);
        assert_eq!(first, second);
    }

    #[test]
    fn metric_units_convert() {
        let mut stack = StackedCylinders::new(LengthUnit::Centimeter);
        stack.add_vessel(10.0, 20.0, None).unwrap();

        let volume = stack.filled_volume(20.0);
        assert_relative_eq!(volume.get::<cubic_centimeter>(), 2000.0 * PI, max_relative = 1e-12);
        assert_relative_eq!(volume.get::<liter>(), 2.0 * PI, max_relative = 1e-12);
    }
}
