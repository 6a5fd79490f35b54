//! # Stellar classification and radius estimation
//!
//! Maps a target star's apparent magnitude and spectral classification to
//! the physical quantities the diffraction pipeline needs:
//!
//! - the **effective temperature** that weights the spectral integration,
//! - the **stellar radius projected onto the shadow plane**, which sets the
//!   finite-source smoothing kernel.
//!
//! The mapping is a pure lookup/derivation against the survey's fixed
//! 35-entry reference table (see [`catalog`]): the spectral class fixes an
//! absolute magnitude and a physical radius, the distance modulus places the
//! star, and the resulting angular radius is projected to the object's
//! distance. Same inputs, same outputs.

pub mod catalog;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{Au, Kelvin, Magnitude, Meter, AU_M, PARSEC_M, SOLAR_RADIUS_M};
use crate::plane::check_finite;
use crate::umbra_errors::UmbraError;

use catalog::{ClassProperties, CATALOG};

/// Spectral classification of the target star.
///
/// The 35 classes span A0 through M8 with the survey catalog's stable
/// integer indices (`A0 = 0`, …, `M4 = 30`, …, `M8 = 34`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[rustfmt::skip]
pub enum SpectralClass {
    A0, A1, A2, A3, A4, A5, A7,
    F0, F2, F3, F5, F6, F7, F8,
    G0, G1, G2, G5, G8,
    K0, K1, K2, K3, K4, K5, K7,
    M0, M1, M2, M3, M4, M5, M6, M7, M8,
}

#[rustfmt::skip]
const ALL_CLASSES: [SpectralClass; 35] = [
    SpectralClass::A0, SpectralClass::A1, SpectralClass::A2, SpectralClass::A3,
    SpectralClass::A4, SpectralClass::A5, SpectralClass::A7,
    SpectralClass::F0, SpectralClass::F2, SpectralClass::F3, SpectralClass::F5,
    SpectralClass::F6, SpectralClass::F7, SpectralClass::F8,
    SpectralClass::G0, SpectralClass::G1, SpectralClass::G2, SpectralClass::G5,
    SpectralClass::G8,
    SpectralClass::K0, SpectralClass::K1, SpectralClass::K2, SpectralClass::K3,
    SpectralClass::K4, SpectralClass::K5, SpectralClass::K7,
    SpectralClass::M0, SpectralClass::M1, SpectralClass::M2, SpectralClass::M3,
    SpectralClass::M4, SpectralClass::M5, SpectralClass::M6, SpectralClass::M7,
    SpectralClass::M8,
];

impl SpectralClass {
    /// All classes, ordered by catalog index.
    pub fn all() -> &'static [SpectralClass; 35] {
        &ALL_CLASSES
    }

    /// Stable catalog index of this class (`A0 = 0` … `M8 = 34`).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Resolve a class from its stable catalog index.
    ///
    /// Return
    /// ----------
    /// * The class, or [`UmbraError::UnknownSpectralClass`] for indices
    ///   outside `0..35`.
    pub fn from_index(index: usize) -> Result<Self, UmbraError> {
        ALL_CLASSES
            .get(index)
            .copied()
            .ok_or_else(|| UmbraError::UnknownSpectralClass(format!("index {index}")))
    }

    /// Class label, e.g. `"M4"`.
    pub fn as_str(&self) -> &'static str {
        self.properties().label
    }

    pub(crate) fn properties(&self) -> &'static ClassProperties {
        &CATALOG[self.index()]
    }

    /// Effective temperature of the class [K].
    pub fn effective_temperature(&self) -> Kelvin {
        self.properties().effective_temperature
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpectralClass {
    type Err = UmbraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CLASSES
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UmbraError::UnknownSpectralClass(s.to_string()))
    }
}

/// Stellar quantities derived from (magnitude, class, object distance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StellarProperties {
    /// Spectral classification of the star.
    pub class: SpectralClass,

    /// Physical stellar radius [m].
    pub physical_radius: Meter,

    /// Distance of the star implied by the distance modulus [m].
    pub star_distance: Meter,

    /// Stellar radius projected onto the shadow plane at the object's
    /// distance [m]. This is the length scale that smooths the diffraction
    /// fringes.
    pub projected_radius: Meter,
}

impl StellarProperties {
    /// Angular radius of the star as seen from the observer [rad].
    pub fn angular_radius(&self) -> f64 {
        self.physical_radius / self.star_distance
    }
}

/// Estimate the target star's radius as projected onto the shadow plane.
///
/// The class's reference row fixes the absolute magnitude and physical
/// radius; the apparent magnitude places the star via the distance modulus
/// (inverse-square law), and the angular radius is projected to the
/// occulting object's distance, where the diffraction pattern is evaluated.
///
/// Arguments
/// -----------------
/// * `apparent_magnitude`: apparent magnitude of the target in the survey band.
/// * `class`: spectral classification of the target.
/// * `distance_au`: distance of the occulting object [AU].
///
/// Return
/// ----------
/// * The derived [`StellarProperties`], or
///   [`UmbraError::InvalidParameter`] for non-finite magnitudes or
///   non-positive distances.
pub fn estimate(
    apparent_magnitude: Magnitude,
    class: SpectralClass,
    distance_au: Au,
) -> Result<StellarProperties, UmbraError> {
    check_finite("apparent_magnitude", apparent_magnitude)?;
    crate::plane::check_positive("distance_au", distance_au)?;

    let props = class.properties();
    let physical_radius = props.radius_solar * SOLAR_RADIUS_M;

    // Distance modulus: m - M = 5 log10(d / 10 pc)
    let distance_pc = 10f64.powf((apparent_magnitude - props.absolute_magnitude + 5.0) / 5.0);
    let star_distance = distance_pc * PARSEC_M;

    let angular_radius = physical_radius / star_distance;
    let projected_radius = angular_radius * AU_M * distance_au;

    Ok(StellarProperties {
        class,
        physical_radius,
        star_distance,
        projected_radius,
    })
}
