//! Physical units and unit-carrying quantities.

use crate::constants::{ANGSTROM_TO_CM, KM_TO_CM, MICRON_TO_CM, M_TO_CM, NM_TO_CM};

/// Floating-point precision to use for units.
#[allow(non_camel_case_types)]
pub type fun = f64;

/// Length unit of a wavelength value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WavelengthUnit {
    Angstrom,
    Nanometer,
    Micron,
    Centimeter,
}

impl WavelengthUnit {
    /// Returns the conversion factor from this unit to centimeters.
    pub fn to_centimeters(&self) -> fun {
        match self {
            Self::Angstrom => ANGSTROM_TO_CM,
            Self::Nanometer => NM_TO_CM,
            Self::Micron => MICRON_TO_CM,
            Self::Centimeter => 1.0,
        }
    }
}

/// Unit of a velocity value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VelocityUnit {
    CentimeterPerSecond,
    MeterPerSecond,
    KilometerPerSecond,
}

impl VelocityUnit {
    /// Returns the conversion factor from this unit to centimeters per second.
    pub fn to_centimeters_per_second(&self) -> fun {
        match self {
            Self::CentimeterPerSecond => 1.0,
            Self::MeterPerSecond => M_TO_CM,
            Self::KilometerPerSecond => KM_TO_CM,
        }
    }
}

/// A scalar wavelength carrying an explicit length unit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Wavelength {
    value: fun,
    unit: WavelengthUnit,
}

impl Wavelength {
    pub fn new(value: fun, unit: WavelengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn value(&self) -> fun {
        self.value
    }

    pub fn unit(&self) -> WavelengthUnit {
        self.unit
    }

    /// Returns the wavelength converted to centimeters.
    pub fn in_centimeters(&self) -> fun {
        self.value * self.unit.to_centimeters()
    }
}

/// A scalar velocity carrying an explicit unit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Velocity {
    value: fun,
    unit: VelocityUnit,
}

impl Velocity {
    pub fn new(value: fun, unit: VelocityUnit) -> Self {
        Self { value, unit }
    }

    pub fn value(&self) -> fun {
        self.value
    }

    pub fn unit(&self) -> VelocityUnit {
        self.unit
    }

    /// Returns the velocity converted to centimeters per second.
    pub fn in_centimeters_per_second(&self) -> fun {
        self.value * self.unit.to_centimeters_per_second()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn wavelength_conversion_to_centimeters_works() {
        assert_relative_eq!(
            Wavelength::new(1215.67, WavelengthUnit::Angstrom).in_centimeters(),
            1.21567e-5
        );
        assert_relative_eq!(
            Wavelength::new(121.567, WavelengthUnit::Nanometer).in_centimeters(),
            1.21567e-5
        );
        assert_relative_eq!(
            Wavelength::new(0.5, WavelengthUnit::Micron).in_centimeters(),
            5e-5
        );
    }

    #[test]
    fn velocity_conversion_to_centimeters_per_second_works() {
        assert_relative_eq!(
            Velocity::new(20.0, VelocityUnit::KilometerPerSecond).in_centimeters_per_second(),
            2e6
        );
        assert_relative_eq!(
            Velocity::new(3.0, VelocityUnit::MeterPerSecond).in_centimeters_per_second(),
            300.0
        );
    }
}
