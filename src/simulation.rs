//! # Simulation pipeline
//!
//! The orchestration layer: one immutable [`SimulationParameters`] record
//! in, one immutable [`SimulationResult`] record out. Stages run strictly
//! in dependency order; the first error aborts the run with no partial
//! output. Requests are independent; callers may run several on separate
//! threads with no shared state.
//!
//! ```text
//! validate → plane → pupil → fresnel ┐
//!                           → spectra → stellar radius → extended source
//!                                       → noise → profiles → sampling
//! ```
//!
//! The expected per-frame SNR is computed independently from the magnitude
//! alone and reported alongside the pipeline products.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::constants::{
    Au, Degree, Magnitude, Meter, Second, REFERENCE_WAVELENGTH,
};
use crate::diffraction::{extended, fresnel, noise, spectra, DiffractionField};
use crate::lightcurve::{self, SampledCurves};
use crate::photometry;
use crate::plane::{check_finite, check_positive, compute_plane, PlaneGeometry};
use crate::profile::{self, Profile};
use crate::pupil::{ObjectShape, Pupil};
use crate::stellar::{self, SpectralClass, StellarProperties};
use crate::umbra_errors::UmbraError;

/// Immutable input record of one simulation request.
///
/// Created once per request and never mutated; [`validate`](Self::validate)
/// enforces the per-field constraints before the pipeline runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Mesh edge length in samples.
    pub mesh_size: usize,

    /// Earth translation speed [m/s].
    pub earth_speed: f64,

    /// Tangential speed of the occulting body [m/s], signed.
    pub object_speed: f64,

    /// Angle from opposition [deg].
    pub opposition_angle: Degree,

    /// Camera frame rate [frames/s].
    pub fps: u32,

    /// Apparent magnitude of the target star in the survey band.
    pub apparent_magnitude: Magnitude,

    /// Spectral classification of the target star.
    pub spectral_class: SpectralClass,

    /// Diameter of the occulting body [m].
    pub object_diameter: Meter,

    /// Distance of the occulting body [AU].
    pub object_distance: Au,

    /// Number of spectral samples for the chromatic stage.
    pub n_wavelengths: usize,

    /// Time shift applied to the sampled curves [s].
    pub time_offset: Second,

    /// Reading direction of the profile cut [deg], `0..=360`.
    pub reading_angle: Degree,

    /// Impact parameter as a fraction of the object diameter.
    pub impact_parameter: f64,

    /// Silhouette of the occulting body.
    pub shape: ObjectShape,
}

impl Default for SimulationParameters {
    /// The survey demo's reference configuration.
    fn default() -> Self {
        SimulationParameters {
            mesh_size: 2048,
            earth_speed: 29_800.0,
            object_speed: 5_000.0,
            opposition_angle: 30.0,
            fps: 20,
            apparent_magnitude: 12.0,
            spectral_class: SpectralClass::M4,
            object_diameter: 3_000.0,
            object_distance: 45.0,
            n_wavelengths: 10,
            time_offset: 0.0,
            reading_angle: 0.0,
            impact_parameter: 0.0,
            shape: ObjectShape::Disk,
        }
    }
}

impl SimulationParameters {
    /// Check every field against its constraints.
    ///
    /// Return
    /// ----------
    /// * `Ok(())` when the record is runnable, or the first
    ///   [`UmbraError::InvalidParameter`] encountered.
    pub fn validate(&self) -> Result<(), UmbraError> {
        if self.mesh_size < 2 {
            return Err(UmbraError::InvalidParameter {
                name: "mesh_size",
                value: self.mesh_size as f64,
            });
        }
        check_finite("earth_speed", self.earth_speed)?;
        check_finite("object_speed", self.object_speed)?;
        check_finite("opposition_angle", self.opposition_angle)?;
        if self.fps == 0 {
            return Err(UmbraError::InvalidParameter {
                name: "fps",
                value: 0.0,
            });
        }
        check_finite("apparent_magnitude", self.apparent_magnitude)?;
        check_positive("object_diameter", self.object_diameter)?;
        check_positive("object_distance", self.object_distance)?;
        if self.n_wavelengths < 1 {
            return Err(UmbraError::InvalidParameter {
                name: "n_wavelengths",
                value: self.n_wavelengths as f64,
            });
        }
        check_finite("time_offset", self.time_offset)?;
        if self.time_offset < 0.0 {
            return Err(UmbraError::InvalidParameter {
                name: "time_offset",
                value: self.time_offset,
            });
        }
        check_finite("reading_angle", self.reading_angle)?;
        if !(0.0..=360.0).contains(&self.reading_angle) {
            return Err(UmbraError::InvalidParameter {
                name: "reading_angle",
                value: self.reading_angle,
            });
        }
        check_finite("impact_parameter", self.impact_parameter)?;
        Ok(())
    }

    /// Perpendicular track offset in plane meters.
    fn impact_offset(&self) -> Meter {
        self.impact_parameter * self.object_diameter
    }
}

/// Complete output record of one simulation request.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Shadow-plane geometry of the event.
    pub geometry: PlaneGeometry,

    /// Derived properties of the target star.
    pub star: StellarProperties,

    /// Rasterized occulting silhouette.
    pub pupil: Pupil,

    /// Monochromatic point-source pattern.
    pub monochromatic: DiffractionField,

    /// Spectrally integrated point-source pattern.
    pub chromatic: DiffractionField,

    /// Finite-source pattern.
    pub extended: DiffractionField,

    /// Finite-source pattern with photon noise.
    pub noisy: DiffractionField,

    /// Noiseless profile along the observer's track.
    pub clean_profile: Profile,

    /// Noisy profile along the same track.
    pub noisy_profile: Profile,

    /// Ideal and camera-cadence light curves.
    pub curves: SampledCurves,

    /// Expected per-frame signal-to-noise ratio at the target magnitude.
    pub snr: f64,
}

impl SimulationResult {
    /// Structured summary of the event for the presentation layer.
    pub fn summary(&self) -> [(&'static str, String); 5] {
        [
            ("plane_width_m", format!("{:.1}", self.geometry.plane_width)),
            (
                "propagation_distance_m",
                format!("{:.3e}", self.geometry.propagation_distance),
            ),
            (
                "projected_stellar_radius_m",
                format!("{:.1}", self.star.projected_radius),
            ),
            ("spectral_type", self.star.class.to_string()),
            ("snr", format!("{:.1}", self.snr)),
        ]
    }
}

/// Run the full synthesis pipeline with an explicit random source.
///
/// Arguments
/// -----------------
/// * `params`: validated-on-entry input record.
/// * `rng`: random source for the photon-noise stage; seed it for
///   reproducible runs.
///
/// Return
/// ----------
/// * A complete [`SimulationResult`], or the first error raised by a stage.
pub fn run<R: Rng + ?Sized>(
    params: &SimulationParameters,
    rng: &mut R,
) -> Result<SimulationResult, UmbraError> {
    params.validate()?;

    let geometry = compute_plane(
        params.object_diameter,
        REFERENCE_WAVELENGTH,
        params.object_distance,
    )?;
    let plane_width = geometry.plane_width;
    let z = geometry.propagation_distance;

    let pupil = match params.shape {
        ObjectShape::Disk => {
            Pupil::occulting_disk(params.mesh_size, plane_width, params.object_diameter)?
        }
    };

    let monochromatic = fresnel::propagate(&pupil, plane_width, z, REFERENCE_WAVELENGTH)?;
    let chromatic = spectra::integrate(
        &pupil,
        plane_width,
        z,
        params.spectral_class,
        params.n_wavelengths,
    )?;

    let star = stellar::estimate(
        params.apparent_magnitude,
        params.spectral_class,
        params.object_distance,
    )?;
    let extended = extended::convolve_source(&chromatic, star.projected_radius, plane_width)?;
    let noisy = noise::add_noise(&extended, params.apparent_magnitude, rng)?;

    let impact_offset = params.impact_offset();
    let clean_profile = profile::extract(&extended, plane_width, params.reading_angle, impact_offset)?;
    let noisy_profile = profile::extract(&noisy, plane_width, params.reading_angle, impact_offset)?;

    let curves = lightcurve::sample(
        &clean_profile,
        plane_width,
        params.object_speed,
        params.fps,
        params.time_offset,
        params.earth_speed,
        params.opposition_angle,
        params.object_distance,
    )?;

    let snr = photometry::snr(params.apparent_magnitude);

    Ok(SimulationResult {
        geometry,
        star,
        pupil,
        monochromatic,
        chromatic,
        extended,
        noisy,
        clean_profile,
        noisy_profile,
        curves,
        snr,
    })
}

/// Run the full synthesis pipeline from a fixed seed.
pub fn run_seeded(params: &SimulationParameters, seed: u64) -> Result<SimulationResult, UmbraError> {
    run(params, &mut StdRng::seed_from_u64(seed))
}
