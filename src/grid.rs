//! Wavelength grids for spectral synthesis.

use crate::{constants::CLIGHT, spectrum::fsd, units::Velocity, units::WavelengthUnit};
use ndarray::Array1;
use ndarray_stats::{interpolate::Linear, Quantile1dExt};
use noisy_float::types::{n64, N64};
use std::io;

/// Fixed log10 wavelength step used when generating evaluation subgrids,
/// chosen so that the narrowest expected line is resolved by at least ten
/// samples per Doppler width.
pub const LOG10_SUBGRID_STEP: fsd = 1.449e-6;

/// An ordered array of wavelength values with an explicit length unit.
///
/// The values are strictly increasing; strictly decreasing input is
/// normalized by reversal at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct WavelengthGrid {
    values: Array1<fsd>,
    unit: WavelengthUnit,
}

impl WavelengthGrid {
    /// Creates a new wavelength grid from the given values and unit.
    ///
    /// Input that is empty, non-finite, non-positive or not strictly
    /// monotonic is rejected.
    pub fn new(values: Array1<fsd>, unit: WavelengthUnit) -> io::Result<Self> {
        if values.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Wavelength grid is empty",
            ));
        }
        if values.iter().any(|wavelength| {
            !wavelength.is_finite() || *wavelength <= 0.0
        }) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Wavelength grid contains non-finite or non-positive values",
            ));
        }
        if values.len() == 1 {
            return Ok(Self { values, unit });
        }
        let increasing = values
            .windows(2)
            .into_iter()
            .all(|pair| pair[1] > pair[0]);
        if increasing {
            return Ok(Self { values, unit });
        }
        let decreasing = values
            .windows(2)
            .into_iter()
            .all(|pair| pair[1] < pair[0]);
        if decreasing {
            let mut reversed = values.to_vec();
            reversed.reverse();
            return Ok(Self {
                values: Array1::from_vec(reversed),
                unit,
            });
        }
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Wavelength grid values are not strictly monotonic",
        ))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn unit(&self) -> WavelengthUnit {
        self.unit
    }

    pub fn values(&self) -> &Array1<fsd> {
        &self.values
    }

    /// Returns the wavelength values converted to centimeters.
    pub fn values_in_centimeters(&self) -> Array1<fsd> {
        let factor = self.unit.to_centimeters();
        self.values.mapv(|wavelength| wavelength * factor)
    }

    /// Returns the smallest wavelength of the grid, in the grid unit.
    pub fn min_wavelength(&self) -> fsd {
        self.values[0]
    }

    /// Returns the largest wavelength of the grid, in the grid unit.
    pub fn max_wavelength(&self) -> fsd {
        self.values[self.values.len() - 1]
    }

    /// Computes the median absolute spacing between adjacent samples,
    /// in the grid unit.
    pub fn median_spacing(&self) -> io::Result<fsd> {
        if self.values.len() < 2 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Wavelength grid has too few samples to measure spacing",
            ));
        }
        median(Array1::from_iter(
            self.values
                .windows(2)
                .into_iter()
                .map(|pair| fsd::abs(pair[1] - pair[0])),
        ))
    }

    /// Computes the median wavelength of the grid, in the grid unit.
    pub fn median_wavelength(&self) -> io::Result<fsd> {
        median(self.values.clone())
    }

    /// Whether the grid samples a line with the given Doppler parameter by
    /// at least ten samples per Doppler width.
    ///
    /// A single-sample grid has no spacing to check and is considered
    /// adequate.
    pub fn resolves_doppler_parameter(&self, doppler_parameter: &Velocity) -> io::Result<bool> {
        if self.values.len() < 2 {
            return Ok(true);
        }
        let spacing_velocity = CLIGHT * self.median_spacing()? / self.median_wavelength()?;
        Ok(spacing_velocity <= doppler_parameter.in_centimeters_per_second() / 10.0)
    }

    /// Generates a uniform-in-log10 grid with step `LOG10_SUBGRID_STEP`
    /// spanning the same wavelength range as this grid.
    pub fn log_subgrid(&self) -> Self {
        let log_min = fsd::log10(self.min_wavelength());
        let log_max = fsd::log10(self.max_wavelength());
        let n_samples = ((log_max - log_min) / LOG10_SUBGRID_STEP).round() as usize + 1;
        let values = Array1::from_iter((0..n_samples).map(|i| {
            fsd::powf(10.0, log_min + (i as fsd) * LOG10_SUBGRID_STEP)
        }));
        Self {
            values,
            unit: self.unit,
        }
    }
}

fn median(values: Array1<fsd>) -> io::Result<fsd> {
    let mut values = values.mapv(n64);
    values
        .quantile_mut(n64(0.5), &Linear)
        .map(N64::raw)
        .map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Could not compute median: {}", err),
            )
        })
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::units::VelocityUnit;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn angstrom_grid(values: Array1<fsd>) -> WavelengthGrid {
        WavelengthGrid::new(values, WavelengthUnit::Angstrom).unwrap()
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert!(WavelengthGrid::new(Array1::zeros(0), WavelengthUnit::Angstrom).is_err());
    }

    #[test]
    fn non_monotonic_grid_is_rejected() {
        assert!(
            WavelengthGrid::new(array![1.0, 3.0, 2.0], WavelengthUnit::Angstrom).is_err()
        );
        assert!(
            WavelengthGrid::new(array![1.0, 1.0, 2.0], WavelengthUnit::Angstrom).is_err()
        );
    }

    #[test]
    fn decreasing_grid_is_normalized_by_reversal() {
        let grid = angstrom_grid(array![3.0, 2.0, 1.0]);
        assert_eq!(grid.values(), &array![1.0, 2.0, 3.0]);
    }

    #[test]
    fn median_spacing_and_wavelength_are_computed() {
        let grid = angstrom_grid(array![1000.0, 1001.0, 1002.0, 1004.0, 1006.0]);
        assert_relative_eq!(grid.median_spacing().unwrap(), 1.5);
        assert_relative_eq!(grid.median_wavelength().unwrap(), 1002.0);
    }

    #[test]
    fn adequacy_check_compares_pixel_velocity_to_doppler_parameter() {
        // 0.001 AA pixels at 1215 AA correspond to ~0.25 km/s.
        let fine = angstrom_grid(Array1::linspace(1215.0, 1216.0, 1001));
        // 1 AA pixels correspond to ~250 km/s.
        let coarse = angstrom_grid(Array1::linspace(1000.0, 1400.0, 401));
        let b = Velocity::new(20.0, VelocityUnit::KilometerPerSecond);
        assert!(fine.resolves_doppler_parameter(&b).unwrap());
        assert!(!coarse.resolves_doppler_parameter(&b).unwrap());
    }

    #[test]
    fn log_subgrid_spans_the_original_range_with_fixed_step() {
        let grid = angstrom_grid(array![1210.0, 1215.0, 1220.0]);
        let subgrid = grid.log_subgrid();
        assert_relative_eq!(subgrid.min_wavelength(), 1210.0, max_relative = 1e-10);
        assert_relative_eq!(subgrid.max_wavelength(), 1220.0, max_relative = 1e-4);
        let expected_samples = ((fsd::log10(1220.0) - fsd::log10(1210.0))
            / LOG10_SUBGRID_STEP)
            .round() as usize
            + 1;
        assert_eq!(subgrid.len(), expected_samples);
        let log_step =
            fsd::log10(subgrid.values()[1]) - fsd::log10(subgrid.values()[0]);
        assert_relative_eq!(log_step, LOG10_SUBGRID_STEP, max_relative = 1e-6);
    }
}
