//! # Constants and type definitions for umbra
//!
//! This module centralizes the **physical constants**, **survey reference
//! values**, and **common type definitions** used throughout the `umbra`
//! library.
//!
//! ## Overview
//!
//! - Astronomical and radiometric constants
//! - Reference values of the host survey's instrument (aperture, bandpass,
//!   photometric zero point, noise floor)
//! - Core type aliases used across the crate
//!
//! These definitions are used by all pipeline stages, from shadow-plane
//! sizing to photon-noise injection.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Astronomical Unit in meters, as used by the survey's shadow-plane model
pub const AU_M: f64 = 1.496e11;

/// Solar radius in meters (IAU nominal)
pub const SOLAR_RADIUS_M: f64 = 6.957e8;

/// Parsec in meters
pub const PARSEC_M: f64 = 3.0857e16;

/// Planck constant [J·s]
pub const PLANCK_H: f64 = 6.62607015e-34;

/// Speed of light [m/s]
pub const LIGHT_SPEED: f64 = 2.99792458e8;

/// Boltzmann constant [J/K]
pub const BOLTZMANN_K: f64 = 1.380649e-23;

// -------------------------------------------------------------------------------------------------
// Survey reference values
// -------------------------------------------------------------------------------------------------

/// Reference wavelength for the monochromatic stage and plane sizing [m]
pub const REFERENCE_WAVELENGTH: f64 = 600e-9;

/// Blue edge of the survey bandpass [m]
pub const BAND_MIN_WAVELENGTH: f64 = 500e-9;

/// Red edge of the survey bandpass [m]
pub const BAND_MAX_WAVELENGTH: f64 = 850e-9;

/// Photon flux of a magnitude-zero source over the survey bandpass [photons/s/m²]
pub const ZERO_POINT_FLUX: f64 = 3.5e9;

/// Telescope aperture diameter [m]
pub const APERTURE_DIAMETER: f64 = 1.3;

/// Sky background per pixel per frame [photons]
pub const SKY_BACKGROUND: f64 = 40.0;

/// Detector read noise [e⁻ rms]
pub const READ_NOISE: f64 = 4.0;

/// Number of pixels in the photometric aperture
pub const APERTURE_PIXELS: f64 = 9.0;

/// Reference camera cadence of the survey [frames/s]
pub const REFERENCE_FRAME_RATE: f64 = 20.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in meters
pub type Meter = f64;
/// Distance in astronomical units
pub type Au = f64;
/// Apparent or absolute magnitude
pub type Magnitude = f64;
/// Effective temperature in Kelvin
pub type Kelvin = f64;
/// Time in seconds
pub type Second = f64;
