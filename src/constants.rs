//! Physical and mathematical constants.

/// Floating-point precision to use for constants.
#[allow(non_camel_case_types)]
pub type fcn = f64;

// Mathematical constants

pub const PI: fcn = std::f64::consts::PI;

// Physical constants

/// Speed of light in vacuum [cm/s].
pub const CLIGHT: fcn = 2.997_924_58e10;
/// pi e^2 / m_e c [cm^2 Hz].
pub const PIE2_MEC: fcn = 0.02654;
/// pi e^2 / (m_e c sqrt(pi)) [cm^2 Hz], the absorption cross-section scale
/// per absorber for unit oscillator strength.
pub const PIE2_MEC_SQRTPI: fcn = 0.014971475;

// Unit conversion factors

/// Conversion factor from angstroms to centimeters.
pub const ANGSTROM_TO_CM: fcn = 1e-8;
/// Conversion factor from nanometers to centimeters.
pub const NM_TO_CM: fcn = 1e-7;
/// Conversion factor from microns to centimeters.
pub const MICRON_TO_CM: fcn = 1e-4;
/// Conversion factor from meters to centimeters.
pub const M_TO_CM: fcn = 1e2;
/// Conversion factor from kilometers to centimeters.
pub const KM_TO_CM: fcn = 1e5;
/// Full width at half maximum of a Gaussian in units of its standard
/// deviation, 2*sqrt(2*ln(2)).
pub const FWHM_PER_SIGMA: fcn = 2.354_820_045_030_949;
