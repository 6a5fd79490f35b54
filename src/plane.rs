//! # Shadow-plane geometry
//!
//! Derives the physical extent of the simulated diffraction plane from the
//! occulting object's diameter, the working wavelength, and the object's
//! distance.
//!
//! The plane must be wide enough that several diffraction fringes beyond the
//! geometric shadow fall inside the mesh (undersizing aliases the fringes),
//! while staying as small as possible so the fixed mesh resolution is spent
//! on the event itself. Both regimes are driven by the **Fresnel scale**
//! `F = √(λz/2)`:
//!
//! - diffraction-dominated events (`d/2 ≲ F`) need a plane proportional to
//!   `F` itself,
//! - geometric-regime events (`d/2 ≫ F`) need a plane proportional to the
//!   object diameter.

use serde::{Deserialize, Serialize};

use crate::constants::{Au, Meter, AU_M};
use crate::umbra_errors::UmbraError;

/// Physical geometry of the simulated shadow plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneGeometry {
    /// Physical width of the square simulated plane [m].
    pub plane_width: Meter,

    /// Propagation distance from the occulting object to the observer [m].
    pub propagation_distance: Meter,
}

impl PlaneGeometry {
    /// Fresnel diffraction scale `√(λz/2)` for this plane [m].
    pub fn fresnel_scale(&self, wavelength: Meter) -> Meter {
        (wavelength * self.propagation_distance / 2.0).sqrt()
    }
}

/// Compute the shadow-plane geometry for an occultation event.
///
/// The propagation distance is the straight unit conversion of the object's
/// distance to meters. The plane width is `50·F·max(1, ρ)` where `F` is the
/// Fresnel scale at the given wavelength and `ρ = (d/2)/F` the object radius
/// in Fresnel units; this keeps tens of fringes inside the mesh in the
/// diffractive regime and fixes the plane at 25 object diameters in the
/// geometric regime.
///
/// Arguments
/// -----------------
/// * `object_diameter`: diameter of the occulting body [m], strictly positive.
/// * `wavelength`: working wavelength [m], strictly positive.
/// * `distance_au`: object distance [AU], strictly positive.
///
/// Return
/// ----------
/// * The [`PlaneGeometry`] of the event, or
///   [`UmbraError::InvalidParameter`] when an input is not a positive finite
///   number.
pub fn compute_plane(
    object_diameter: Meter,
    wavelength: Meter,
    distance_au: Au,
) -> Result<PlaneGeometry, UmbraError> {
    check_positive("object_diameter", object_diameter)?;
    check_positive("wavelength", wavelength)?;
    check_positive("distance_au", distance_au)?;

    let z = AU_M * distance_au;
    let fresnel_scale = (wavelength * z / 2.0).sqrt();
    let rho = (object_diameter / 2.0) / fresnel_scale;
    let plane_width = 50.0 * fresnel_scale * rho.max(1.0);

    Ok(PlaneGeometry {
        plane_width,
        propagation_distance: z,
    })
}

pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<(), UmbraError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(UmbraError::InvalidParameter { name, value });
    }
    Ok(())
}

pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<(), UmbraError> {
    if !value.is_finite() {
        return Err(UmbraError::InvalidParameter { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod plane_test {
    use super::*;
    use crate::constants::REFERENCE_WAVELENGTH;

    #[test]
    fn test_propagation_distance_is_exact_unit_conversion() {
        let geom = compute_plane(3000.0, REFERENCE_WAVELENGTH, 45.0).unwrap();
        assert_eq!(geom.propagation_distance, 1.496e11 * 45.0);

        let geom = compute_plane(500.0, REFERENCE_WAVELENGTH, 0.5).unwrap();
        assert_eq!(geom.propagation_distance, 1.496e11 * 0.5);
    }

    #[test]
    fn test_plane_wider_than_object() {
        for d in [10.0, 300.0, 3000.0, 50_000.0] {
            for ua in [1.0, 45.0, 500.0] {
                let geom = compute_plane(d, REFERENCE_WAVELENGTH, ua).unwrap();
                assert!(
                    geom.plane_width > d,
                    "plane {} not wider than object {}",
                    geom.plane_width,
                    d
                );
            }
        }
    }

    #[test]
    fn test_geometric_regime_scales_with_diameter() {
        // A 3 km object at 45 AU is just past the Fresnel scale: the plane
        // collapses to 25 object diameters.
        let geom = compute_plane(3000.0, REFERENCE_WAVELENGTH, 45.0).unwrap();
        assert!((geom.plane_width - 25.0 * 3000.0).abs() < 1e-6);
    }

    #[test]
    fn test_diffractive_regime_scales_with_fresnel_scale() {
        let geom = compute_plane(300.0, REFERENCE_WAVELENGTH, 45.0).unwrap();
        let fresnel = geom.fresnel_scale(REFERENCE_WAVELENGTH);
        assert!((geom.plane_width - 50.0 * fresnel).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert!(matches!(
            compute_plane(0.0, REFERENCE_WAVELENGTH, 45.0),
            Err(UmbraError::InvalidParameter {
                name: "object_diameter",
                ..
            })
        ));
        assert!(matches!(
            compute_plane(3000.0, -1e-9, 45.0),
            Err(UmbraError::InvalidParameter {
                name: "wavelength",
                ..
            })
        ));
        assert!(matches!(
            compute_plane(3000.0, REFERENCE_WAVELENGTH, f64::NAN),
            Err(UmbraError::InvalidParameter {
                name: "distance_au",
                ..
            })
        ));
    }
}
