//! Flux spectra and the resampling and smoothing operations applied to them.

use crate::{constants::FWHM_PER_SIGMA, grid::WavelengthGrid};
use ndarray::Array1;
use std::io;

/// Floating-point precision to use for spectral data.
#[allow(non_camel_case_types)]
pub type fsd = f64;

/// A flux spectrum sampled on a wavelength grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    wavelengths: WavelengthGrid,
    flux: Array1<fsd>,
}

impl Spectrum {
    /// Creates a new spectrum from the given wavelength grid and flux values.
    pub fn new(wavelengths: WavelengthGrid, flux: Array1<fsd>) -> io::Result<Self> {
        if wavelengths.len() != flux.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "Flux array length ({}) does not match wavelength grid length ({})",
                    flux.len(),
                    wavelengths.len()
                ),
            ));
        }
        Ok(Self { wavelengths, flux })
    }

    pub fn wavelengths(&self) -> &WavelengthGrid {
        &self.wavelengths
    }

    pub fn flux(&self) -> &Array1<fsd> {
        &self.flux
    }

    pub fn len(&self) -> usize {
        self.flux.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flux.is_empty()
    }
}

/// Defines the properties of a resampler that can move a spectrum onto a
/// different wavelength grid while preserving flux normalization.
pub trait Resampler {
    /// Resamples the given spectrum onto the target wavelength grid.
    fn resample(&self, spectrum: &Spectrum, target: &WavelengthGrid) -> io::Result<Spectrum>;
}

/// Defines the properties of a smoother that applies instrumental Gaussian
/// broadening to the flux of a spectrum.
pub trait GaussianSmoother {
    /// Smooths the flux of the given spectrum in place with a Gaussian of
    /// the given full width at half maximum, in pixel units.
    fn gaussian_smooth(&self, spectrum: &mut Spectrum, fwhm_pixels: fsd) -> io::Result<()>;
}

/// Resampler treating each sample as a pixel with edges halfway to its
/// neighbors, averaging the piecewise-constant flux over each target pixel.
///
/// Constant flux is mapped to constant flux, so a normalized absorption
/// spectrum stays normalized.
#[derive(Debug, Copy, Clone)]
pub struct FluxConservingResampler;

impl Resampler for FluxConservingResampler {
    fn resample(&self, spectrum: &Spectrum, target: &WavelengthGrid) -> io::Result<Spectrum> {
        if spectrum.len() < 2 || target.len() < 2 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Resampling requires at least two samples in both grids",
            ));
        }
        let source_edges = pixel_edges(&spectrum.wavelengths().values_in_centimeters());
        let target_edges = pixel_edges(&target.values_in_centimeters());
        let flux = spectrum.flux();
        let n_source = spectrum.len();

        let mut resampled = Array1::zeros(target.len());
        let mut i = 0;
        for (j, resampled_value) in resampled.iter_mut().enumerate() {
            let target_lower = target_edges[j];
            let target_upper = target_edges[j + 1];
            while i + 1 < n_source && source_edges[i + 1] <= target_lower {
                i += 1;
            }
            let mut weighted_flux = 0.0;
            let mut covered_width = 0.0;
            let mut k = i;
            while k < n_source && source_edges[k] < target_upper {
                let lower = fsd::max(source_edges[k], target_lower);
                let upper = fsd::min(source_edges[k + 1], target_upper);
                if upper > lower {
                    weighted_flux += flux[k] * (upper - lower);
                    covered_width += upper - lower;
                }
                k += 1;
            }
            *resampled_value = if covered_width > 0.0 {
                weighted_flux / covered_width
            } else if target_upper <= source_edges[0] {
                // Target pixel entirely outside the source coverage.
                flux[0]
            } else {
                flux[n_source - 1]
            };
        }
        Spectrum::new(target.clone(), resampled)
    }
}

/// Smoother convolving the flux with a discrete Gaussian kernel truncated
/// at four standard deviations, renormalized near the spectrum edges.
#[derive(Debug, Copy, Clone)]
pub struct GaussianKernelSmoother;

impl GaussianSmoother for GaussianKernelSmoother {
    fn gaussian_smooth(&self, spectrum: &mut Spectrum, fwhm_pixels: fsd) -> io::Result<()> {
        if !fwhm_pixels.is_finite() || fwhm_pixels <= 0.0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Smoothing FWHM must be positive, got {}", fwhm_pixels),
            ));
        }
        let sigma = fwhm_pixels / FWHM_PER_SIGMA;
        let half_width = usize::max(fsd::ceil(4.0 * sigma) as usize, 1);
        let kernel: Vec<fsd> = (0..=2 * half_width)
            .map(|tap| {
                let offset = (tap as fsd - half_width as fsd) / sigma;
                fsd::exp(-0.5 * offset * offset)
            })
            .collect();

        let flux = &spectrum.flux;
        let n = flux.len();
        let mut smoothed = Array1::zeros(n);
        for (j, smoothed_value) in smoothed.iter_mut().enumerate() {
            let mut weighted_flux = 0.0;
            let mut weight_sum = 0.0;
            for (tap, &weight) in kernel.iter().enumerate() {
                let idx = j as isize + tap as isize - half_width as isize;
                if idx >= 0 && (idx as usize) < n {
                    weighted_flux += weight * flux[idx as usize];
                    weight_sum += weight;
                }
            }
            *smoothed_value = weighted_flux / weight_sum;
        }
        spectrum.flux = smoothed;
        Ok(())
    }
}

/// Computes the pixel edge positions for the given sample positions, with
/// edges halfway between adjacent samples and extrapolated at the ends.
fn pixel_edges(samples: &Array1<fsd>) -> Vec<fsd> {
    let n = samples.len();
    let mut edges = Vec::with_capacity(n + 1);
    edges.push(samples[0] - 0.5 * (samples[1] - samples[0]));
    for i in 1..n {
        edges.push(0.5 * (samples[i - 1] + samples[i]));
    }
    edges.push(samples[n - 1] + 0.5 * (samples[n - 1] - samples[n - 2]));
    edges
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::units::WavelengthUnit;
    use approx::assert_relative_eq;
    use ndarray::{array, Array1};

    fn angstrom_grid(values: Array1<fsd>) -> WavelengthGrid {
        WavelengthGrid::new(values, WavelengthUnit::Angstrom).unwrap()
    }

    #[test]
    fn mismatched_flux_length_is_rejected() {
        let grid = angstrom_grid(array![1.0, 2.0, 3.0]);
        assert!(Spectrum::new(grid, array![1.0, 1.0]).is_err());
    }

    #[test]
    fn resampling_preserves_constant_flux() {
        let source = angstrom_grid(Array1::linspace(1200.0, 1230.0, 3001));
        let target = angstrom_grid(Array1::linspace(1201.0, 1229.0, 57));
        let spectrum = Spectrum::new(source, Array1::ones(3001)).unwrap();
        let resampled = FluxConservingResampler
            .resample(&spectrum, &target)
            .unwrap();
        assert_eq!(resampled.len(), 57);
        for &flux in resampled.flux() {
            assert_relative_eq!(flux, 1.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn resampling_onto_the_same_grid_is_the_identity() {
        let grid = angstrom_grid(Array1::linspace(1000.0, 1010.0, 11));
        let flux = Array1::linspace(0.2, 1.0, 11);
        let spectrum = Spectrum::new(grid.clone(), flux.clone()).unwrap();
        let resampled = FluxConservingResampler.resample(&spectrum, &grid).unwrap();
        for (&resampled_flux, &original_flux) in resampled.flux().iter().zip(flux.iter()) {
            assert_relative_eq!(resampled_flux, original_flux, max_relative = 1e-10);
        }
    }

    #[test]
    fn resampling_averages_an_absorption_dip() {
        // Two unit-width pixels of zero flux inside a pair of aligned
        // double-width target pixels average to half depth each.
        let source = angstrom_grid(array![1000.5, 1001.5, 1002.5, 1003.5]);
        let flux = array![1.0, 0.0, 0.0, 1.0];
        let spectrum = Spectrum::new(source, flux).unwrap();
        let target = angstrom_grid(array![1001.0, 1003.0]);
        let resampled = FluxConservingResampler
            .resample(&spectrum, &target)
            .unwrap();
        assert_relative_eq!(resampled.flux()[0], 0.5, max_relative = 1e-12);
        assert_relative_eq!(resampled.flux()[1], 0.5, max_relative = 1e-12);
    }

    #[test]
    fn smoothing_preserves_constant_flux() {
        let grid = angstrom_grid(Array1::linspace(1000.0, 1010.0, 101));
        let mut spectrum = Spectrum::new(grid, Array1::ones(101)).unwrap();
        GaussianKernelSmoother
            .gaussian_smooth(&mut spectrum, 4.0)
            .unwrap();
        for &flux in spectrum.flux() {
            assert_relative_eq!(flux, 1.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn smoothing_broadens_a_spike() {
        let grid = angstrom_grid(Array1::linspace(1000.0, 1010.0, 101));
        let mut flux = Array1::zeros(101);
        flux[50] = 1.0;
        let mut spectrum = Spectrum::new(grid, flux).unwrap();
        GaussianKernelSmoother
            .gaussian_smooth(&mut spectrum, 3.0)
            .unwrap();
        let smoothed = spectrum.flux();
        assert!(smoothed[50] < 1.0);
        assert!(smoothed[48] > 0.0 && smoothed[52] > 0.0);
        // Symmetric kernel, symmetric result.
        assert_relative_eq!(smoothed[49], smoothed[51], max_relative = 1e-12);
    }

    #[test]
    fn non_positive_fwhm_is_rejected() {
        let grid = angstrom_grid(array![1.0, 2.0, 3.0]);
        let mut spectrum = Spectrum::new(grid, Array1::ones(3)).unwrap();
        assert!(GaussianKernelSmoother
            .gaussian_smooth(&mut spectrum, 0.0)
            .is_err());
    }
}
