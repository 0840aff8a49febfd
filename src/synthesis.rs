//! Synthesis of Voigt absorption-line spectra.

use crate::{
    constants::{CLIGHT, PI, PIE2_MEC_SQRTPI},
    grid::WavelengthGrid,
    spectrum::{
        fsd, FluxConservingResampler, GaussianKernelSmoother, GaussianSmoother, Resampler,
        Spectrum,
    },
    units::{Velocity, VelocityUnit, Wavelength},
    voigt,
};
use ndarray::Array1;
use rayon::prelude::*;
use std::{fmt, io};

/// Whether or not to print non-critical status messages.
#[derive(Debug, Copy, Clone)]
pub enum Verbosity {
    Quiet,
    Messages,
}

impl Verbosity {
    pub fn print_messages(&self) -> bool {
        matches!(self, Self::Messages)
    }
}

/// Parameters of a single spectral transition of an absorber.
///
/// Immutable value type; the synthesizer only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralLine {
    log_column_density: fsd,
    redshift: fsd,
    doppler_parameter: Velocity,
    rest_wavelength: Wavelength,
    oscillator_strength: fsd,
    damping_rate: fsd,
}

impl SpectralLine {
    /// Creates a new spectral line from the given parameters.
    ///
    /// # Parameters
    ///
    /// - `log_column_density`: Base-10 logarithm of the column density [cm^-2].
    /// - `redshift`: Redshift of the absorber.
    /// - `doppler_parameter`: Doppler broadening parameter of the line.
    /// - `rest_wavelength`: Rest-frame wavelength of the transition.
    /// - `oscillator_strength`: Oscillator strength of the transition.
    /// - `damping_rate`: Natural damping rate of the transition [1/s].
    pub fn new(
        log_column_density: fsd,
        redshift: fsd,
        doppler_parameter: Velocity,
        rest_wavelength: Wavelength,
        oscillator_strength: fsd,
        damping_rate: fsd,
    ) -> Self {
        Self {
            log_column_density,
            redshift,
            doppler_parameter,
            rest_wavelength,
            oscillator_strength,
            damping_rate,
        }
    }

    pub fn log_column_density(&self) -> fsd {
        self.log_column_density
    }

    pub fn redshift(&self) -> fsd {
        self.redshift
    }

    pub fn doppler_parameter(&self) -> Velocity {
        self.doppler_parameter
    }

    pub fn rest_wavelength(&self) -> Wavelength {
        self.rest_wavelength
    }

    pub fn oscillator_strength(&self) -> fsd {
        self.oscillator_strength
    }

    pub fn damping_rate(&self) -> fsd {
        self.damping_rate
    }

    /// Computes the Doppler width of the line in frequency units [Hz].
    pub fn doppler_frequency_width(&self) -> fsd {
        self.doppler_parameter.in_centimeters_per_second() / self.rest_wavelength.in_centimeters()
    }

    /// Computes the dimensionless damping parameter fed to the Voigt function.
    pub fn damping_parameter(&self) -> fsd {
        self.damping_rate / (4.0 * PI * self.doppler_frequency_width())
    }
}

/// A non-fatal condition encountered during synthesis.
#[derive(Debug, Clone, PartialEq)]
pub enum SynthesisWarning {
    /// The input grid under-resolves the narrowest line, so a finer
    /// evaluation subgrid was used and the result rebinned back.
    CoarseGrid,
    /// A line has a zero damping rate, making its strength unreliable.
    ZeroDamping { rest_wavelength: Wavelength },
    /// No smoothing FWHM was given, so the result assumes infinite
    /// spectral resolution.
    NoSmoothing,
}

impl fmt::Display for SynthesisWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::CoarseGrid => write!(
                f,
                "Using a sub-grid wavelength array because the input array is too coarse"
            ),
            Self::ZeroDamping { rest_wavelength } => write!(
                f,
                "Damping rate is zero for the line at {} {:?}, its strength is unreliable",
                rest_wavelength.value(),
                rest_wavelength.unit()
            ),
            Self::NoSmoothing => write!(
                f,
                "Assuming infinite spectral resolution since no smoothing FWHM was given"
            ),
        }
    }
}

/// Selection of the outputs a synthesis call should produce.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OutputSelection {
    pub spectrum: bool,
    pub optical_depth: bool,
    pub flux: bool,
}

impl OutputSelection {
    pub fn spectrum_only() -> Self {
        Self {
            spectrum: true,
            optical_depth: false,
            flux: false,
        }
    }

    pub fn optical_depth_only() -> Self {
        Self {
            spectrum: false,
            optical_depth: true,
            flux: false,
        }
    }

    pub fn all() -> Self {
        Self {
            spectrum: true,
            optical_depth: true,
            flux: true,
        }
    }

    fn selects_any(&self) -> bool {
        self.spectrum || self.optical_depth || self.flux
    }
}

impl Default for OutputSelection {
    fn default() -> Self {
        Self::spectrum_only()
    }
}

/// Configuration for a synthesis call.
#[derive(Debug, Clone, Default)]
pub struct SynthesisConfig {
    /// FWHM of the instrumental Gaussian to apply, in pixel units.
    pub smoothing_fwhm: Option<fsd>,
    /// Which outputs to produce.
    pub selection: OutputSelection,
    /// Skip the check that the grid resolves the narrowest line.
    pub skip_grid_check: bool,
}

/// Outputs of a synthesis call, populated according to the requested
/// selection.
#[derive(Debug, Clone)]
pub struct SynthesisOutput {
    /// The absorption spectrum, on the caller's grid.
    pub spectrum: Option<Spectrum>,
    /// Optical depth on the evaluation grid (the subgrid if one was used).
    pub optical_depth: Option<Array1<fsd>>,
    /// Absorbed flux on the evaluation grid, before smoothing.
    pub flux: Option<Array1<fsd>>,
    /// Non-fatal conditions encountered during synthesis.
    pub warnings: Vec<SynthesisWarning>,
}

/// Synthesizes Voigt absorption profiles of one or more spectral lines
/// over a wavelength grid.
#[derive(Debug, Clone)]
pub struct ProfileSynthesizer<R, S> {
    resampler: R,
    smoother: S,
    verbosity: Verbosity,
}

impl ProfileSynthesizer<FluxConservingResampler, GaussianKernelSmoother> {
    /// Creates a synthesizer with the default resampling and smoothing
    /// collaborators.
    pub fn new(verbosity: Verbosity) -> Self {
        Self::with_collaborators(FluxConservingResampler, GaussianKernelSmoother, verbosity)
    }
}

impl<R, S> ProfileSynthesizer<R, S>
where
    R: Resampler,
    S: GaussianSmoother,
{
    /// Creates a synthesizer using the given resampling and smoothing
    /// collaborators.
    pub fn with_collaborators(resampler: R, smoother: S, verbosity: Verbosity) -> Self {
        Self {
            resampler,
            smoother,
            verbosity,
        }
    }

    /// Synthesizes the combined absorption spectrum of the given lines on
    /// the given wavelength grid.
    ///
    /// Unless the grid check is skipped, a grid that under-resolves the
    /// narrowest line is replaced by a finer uniform-in-log10 subgrid for
    /// evaluation, and the resulting spectrum is resampled back onto the
    /// caller's grid. Optical depth is additive across lines, and the
    /// per-line contributions are computed in parallel.
    pub fn synthesize(
        &self,
        wavelengths: &WavelengthGrid,
        lines: &[SpectralLine],
        config: &SynthesisConfig,
    ) -> io::Result<SynthesisOutput> {
        if lines.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "No spectral lines to synthesize",
            ));
        }
        if !config.selection.selects_any() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "No synthesis output selected",
            ));
        }

        let mut warnings = Vec::new();
        for line in lines {
            if line.damping_rate() == 0.0 {
                warnings.push(SynthesisWarning::ZeroDamping {
                    rest_wavelength: line.rest_wavelength(),
                });
            }
        }

        let mut rebin_to_input = false;
        let evaluation_grid = if config.skip_grid_check {
            wavelengths.clone()
        } else {
            let min_doppler_parameter = Velocity::new(
                lines
                    .iter()
                    .map(|line| line.doppler_parameter().in_centimeters_per_second())
                    .fold(fsd::INFINITY, fsd::min),
                VelocityUnit::CentimeterPerSecond,
            );
            if wavelengths.resolves_doppler_parameter(&min_doppler_parameter)? {
                wavelengths.clone()
            } else {
                warnings.push(SynthesisWarning::CoarseGrid);
                rebin_to_input = true;
                wavelengths.log_subgrid()
            }
        };

        if self.verbosity.print_messages() {
            println!(
                "Synthesizing {} line(s) on {} wavelength samples",
                lines.len(),
                evaluation_grid.len()
            );
        }

        let wavelengths_cm = evaluation_grid.values_in_centimeters();
        let optical_depth = lines
            .par_iter()
            .map(|line| line_optical_depth(&wavelengths_cm, line))
            .reduce_with(|total, tau| total + tau)
            .unwrap_or_else(|| Array1::zeros(evaluation_grid.len()));

        if config.selection == OutputSelection::optical_depth_only() {
            // No spectrum is assembled, so neither rebinning nor smoothing
            // applies.
            self.print_warnings(&warnings);
            return Ok(SynthesisOutput {
                spectrum: None,
                optical_depth: Some(optical_depth),
                flux: None,
                warnings,
            });
        }

        let flux = optical_depth.mapv(|tau| fsd::exp(-tau));
        let mut spectrum = Spectrum::new(evaluation_grid, flux.clone())?;
        if rebin_to_input {
            spectrum = self.resampler.resample(&spectrum, wavelengths)?;
        }
        match config.smoothing_fwhm {
            Some(fwhm) => self.smoother.gaussian_smooth(&mut spectrum, fwhm)?,
            None => warnings.push(SynthesisWarning::NoSmoothing),
        }

        self.print_warnings(&warnings);
        Ok(SynthesisOutput {
            spectrum: config.selection.spectrum.then_some(spectrum),
            optical_depth: config.selection.optical_depth.then_some(optical_depth),
            flux: config.selection.flux.then_some(flux),
            warnings,
        })
    }

    /// Synthesizes the absorption spectrum of a single line.
    pub fn synthesize_line(
        &self,
        wavelengths: &WavelengthGrid,
        line: &SpectralLine,
        config: &SynthesisConfig,
    ) -> io::Result<SynthesisOutput> {
        self.synthesize(wavelengths, std::slice::from_ref(line), config)
    }

    fn print_warnings(&self, warnings: &[SynthesisWarning]) {
        if self.verbosity.print_messages() {
            for warning in warnings {
                eprintln!("Warning: {}", warning);
            }
        }
    }
}

/// Computes the optical depth contribution of a single line at the given
/// wavelengths [cm].
fn line_optical_depth(wavelengths_cm: &Array1<fsd>, line: &SpectralLine) -> Array1<fsd> {
    let column_density = fsd::powf(10.0, line.log_column_density());
    let redshift_factor = line.redshift() + 1.0;
    let rest_frequency = CLIGHT / line.rest_wavelength().in_centimeters();
    let doppler_width = line.doppler_frequency_width();
    let damping_parameter = line.damping_parameter();
    let offsets = wavelengths_cm.mapv(|wavelength| {
        (CLIGHT / (wavelength / redshift_factor) - rest_frequency) / doppler_width
    });
    let cross_section_scale =
        PIE2_MEC_SQRTPI * column_density * line.oscillator_strength() / doppler_width;
    voigt::voigt(damping_parameter, &offsets).mapv(|profile| cross_section_scale * profile)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::units::WavelengthUnit;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::Array1;

    fn lyman_alpha(log_column_density: fsd, doppler_km_per_s: fsd) -> SpectralLine {
        SpectralLine::new(
            log_column_density,
            0.0,
            Velocity::new(doppler_km_per_s, VelocityUnit::KilometerPerSecond),
            Wavelength::new(1215.67, WavelengthUnit::Angstrom),
            0.4164,
            6.265e8,
        )
    }

    fn fine_grid_around_line_center() -> WavelengthGrid {
        WavelengthGrid::new(
            Array1::linspace(1213.67, 1217.67, 801),
            WavelengthUnit::Angstrom,
        )
        .unwrap()
    }

    fn tau_only_config() -> SynthesisConfig {
        SynthesisConfig {
            smoothing_fwhm: None,
            selection: OutputSelection::optical_depth_only(),
            skip_grid_check: true,
        }
    }

    #[test]
    fn derived_line_quantities_match_expected_magnitudes() {
        let line = lyman_alpha(13.0, 20.0);
        assert_relative_eq!(
            line.doppler_frequency_width(),
            1.645e11,
            max_relative = 1e-3
        );
        assert_relative_eq!(line.damping_parameter(), 3.03e-4, max_relative = 1e-2);
    }

    #[test]
    fn empty_line_list_is_rejected() {
        let synthesizer = ProfileSynthesizer::new(Verbosity::Quiet);
        assert!(synthesizer
            .synthesize(&fine_grid_around_line_center(), &[], &tau_only_config())
            .is_err());
    }

    #[test]
    fn empty_output_selection_is_rejected() {
        let synthesizer = ProfileSynthesizer::new(Verbosity::Quiet);
        let config = SynthesisConfig {
            selection: OutputSelection {
                spectrum: false,
                optical_depth: false,
                flux: false,
            },
            ..Default::default()
        };
        assert!(synthesizer
            .synthesize_line(
                &fine_grid_around_line_center(),
                &lyman_alpha(13.0, 20.0),
                &config
            )
            .is_err());
    }

    #[test]
    fn optical_depth_is_additive_across_lines() {
        let grid = fine_grid_around_line_center();
        let synthesizer = ProfileSynthesizer::new(Verbosity::Quiet);
        let config = tau_only_config();
        let lines = [lyman_alpha(13.0, 20.0), lyman_alpha(13.5, 30.0)];

        let combined = synthesizer
            .synthesize(&grid, &lines, &config)
            .unwrap()
            .optical_depth
            .unwrap();
        let separate: Vec<_> = lines
            .iter()
            .map(|line| {
                synthesizer
                    .synthesize_line(&grid, line, &config)
                    .unwrap()
                    .optical_depth
                    .unwrap()
            })
            .collect();
        for i in 0..grid.len() {
            assert_relative_eq!(
                combined[i],
                separate[0][i] + separate[1][i],
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn flux_is_bounded_by_zero_and_one() {
        let synthesizer = ProfileSynthesizer::new(Verbosity::Quiet);
        let config = SynthesisConfig {
            selection: OutputSelection::all(),
            skip_grid_check: true,
            ..Default::default()
        };
        let output = synthesizer
            .synthesize_line(
                &fine_grid_around_line_center(),
                &lyman_alpha(15.0, 20.0),
                &config,
            )
            .unwrap();
        for &flux in output.flux.as_ref().unwrap() {
            assert!(flux > 0.0 && flux <= 1.0);
        }
    }

    #[test]
    fn output_selection_controls_populated_fields() {
        let synthesizer = ProfileSynthesizer::new(Verbosity::Quiet);
        let grid = fine_grid_around_line_center();
        let line = lyman_alpha(13.0, 20.0);

        let spectrum_only = synthesizer
            .synthesize_line(
                &grid,
                &line,
                &SynthesisConfig {
                    skip_grid_check: true,
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(spectrum_only.spectrum.is_some());
        assert!(spectrum_only.optical_depth.is_none());
        assert!(spectrum_only.flux.is_none());

        let everything = synthesizer
            .synthesize_line(
                &grid,
                &line,
                &SynthesisConfig {
                    selection: OutputSelection::all(),
                    skip_grid_check: true,
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(everything.spectrum.is_some());
        assert!(everything.optical_depth.is_some());
        assert!(everything.flux.is_some());
    }

    #[test]
    fn zero_damping_rate_emits_a_warning() {
        let line = SpectralLine::new(
            13.0,
            0.0,
            Velocity::new(20.0, VelocityUnit::KilometerPerSecond),
            Wavelength::new(1215.67, WavelengthUnit::Angstrom),
            0.4164,
            0.0,
        );
        let synthesizer = ProfileSynthesizer::new(Verbosity::Quiet);
        let output = synthesizer
            .synthesize_line(&fine_grid_around_line_center(), &line, &tau_only_config())
            .unwrap();
        assert!(output
            .warnings
            .iter()
            .any(|warning| matches!(warning, SynthesisWarning::ZeroDamping { .. })));
    }

    #[test]
    fn missing_smoothing_fwhm_emits_a_warning() {
        let synthesizer = ProfileSynthesizer::new(Verbosity::Quiet);
        let output = synthesizer
            .synthesize_line(
                &fine_grid_around_line_center(),
                &lyman_alpha(13.0, 20.0),
                &SynthesisConfig {
                    skip_grid_check: true,
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(output.warnings.contains(&SynthesisWarning::NoSmoothing));
    }

    #[test]
    fn zero_damping_line_still_produces_a_gaussian_profile() {
        let line = SpectralLine::new(
            13.0,
            0.0,
            Velocity::new(20.0, VelocityUnit::KilometerPerSecond),
            Wavelength::new(1215.67, WavelengthUnit::Angstrom),
            0.4164,
            0.0,
        );
        let grid = fine_grid_around_line_center();
        let synthesizer = ProfileSynthesizer::new(Verbosity::Quiet);
        let tau = synthesizer
            .synthesize_line(&grid, &line, &tau_only_config())
            .unwrap()
            .optical_depth
            .unwrap();
        // Center sample sits at the rest wavelength, where H(0, 0) = 1.
        let center = grid.len() / 2;
        assert!(tau[center] > 0.0);
        assert_abs_diff_eq!(tau[0], 0.0, epsilon = 1e-12);
    }
}
