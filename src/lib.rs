//! The `linesynth` crate provides tools for synthesizing Voigt absorption-line spectra.
pub mod constants;
pub mod grid;
pub mod spectrum;
pub mod synthesis;
pub mod units;
pub mod voigt;
