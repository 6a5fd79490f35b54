//! # Aperture pupil generation
//!
//! Rasterizes the occulting body's silhouette onto the square simulation
//! mesh. Transmission values live in `[0, 1]`: `0` is fully occulting, `1`
//! fully transmissive. Pixels straddling the silhouette boundary carry a
//! partial transmission from an analytic edge ramp, so the same inputs
//! always produce the same pixel pattern.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::constants::Meter;
use crate::plane::check_positive;
use crate::umbra_errors::UmbraError;

/// Silhouette of the occulting body.
///
/// The survey's reference pipeline models a single circular disk; the enum
/// leaves room for the irregular silhouettes of the upstream shape editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ObjectShape {
    /// Opaque circular disk.
    #[default]
    Disk,
}

/// Transmission mesh of the occulting silhouette.
#[derive(Debug, Clone, PartialEq)]
pub struct Pupil {
    /// `M×M` transmission values in `[0, 1]`.
    pub transmission: DMatrix<f64>,

    /// Silhouette radius in mesh pixels.
    pub disk_radius_px: f64,
}

impl Pupil {
    /// Rasterize a centered occulting disk onto an `M×M` mesh.
    ///
    /// The disk radius in mesh units is `object_diameter / plane_width · M/2`.
    /// Boundary pixels get a linear transmission ramp over one pixel, keyed
    /// to the distance between the pixel center and the disk edge.
    ///
    /// Arguments
    /// -----------------
    /// * `mesh_size`: mesh edge length `M` in samples.
    /// * `plane_width`: physical width of the simulated plane [m].
    /// * `object_diameter`: diameter of the occulting body [m].
    ///
    /// Return
    /// ----------
    /// * The rasterized [`Pupil`], or [`UmbraError::GeometryOverflow`] when
    ///   the disk does not fit strictly inside the mesh.
    pub fn occulting_disk(
        mesh_size: usize,
        plane_width: Meter,
        object_diameter: Meter,
    ) -> Result<Self, UmbraError> {
        check_positive("plane_width", plane_width)?;
        check_positive("object_diameter", object_diameter)?;
        if mesh_size < 2 {
            return Err(UmbraError::InvalidParameter {
                name: "mesh_size",
                value: mesh_size as f64,
            });
        }

        let m = mesh_size;
        let radius_px = object_diameter / plane_width * m as f64 / 2.0;
        if radius_px >= m as f64 / 2.0 - 1.0 {
            return Err(UmbraError::GeometryOverflow(format!(
                "occulting disk radius {radius_px:.1} px does not fit in a {m}x{m} mesh"
            )));
        }

        let center = m as f64 / 2.0;
        let transmission = DMatrix::from_fn(m, m, |i, j| {
            let dx = i as f64 + 0.5 - center;
            let dy = j as f64 + 0.5 - center;
            let r = dx.hypot(dy);
            (r - radius_px + 0.5).clamp(0.0, 1.0)
        });

        Ok(Pupil {
            transmission,
            disk_radius_px: radius_px,
        })
    }

    /// Mesh edge length in samples.
    pub fn mesh_size(&self) -> usize {
        self.transmission.nrows()
    }
}

#[cfg(test)]
mod pupil_test {
    use super::*;

    #[test]
    fn test_disk_is_centered_and_opaque() {
        let pupil = Pupil::occulting_disk(128, 75_000.0, 3000.0).unwrap();
        let m = pupil.mesh_size();
        // Center is fully occulting, corners fully transmissive.
        assert_eq!(pupil.transmission[(m / 2, m / 2)], 0.0);
        assert_eq!(pupil.transmission[(0, 0)], 1.0);
        assert_eq!(pupil.transmission[(m - 1, m - 1)], 1.0);
    }

    #[test]
    fn test_transmission_bounded() {
        let pupil = Pupil::occulting_disk(64, 10_000.0, 2000.0).unwrap();
        assert!(pupil
            .transmission
            .iter()
            .all(|&t| (0.0..=1.0).contains(&t)));
    }

    #[test]
    fn test_deterministic_rasterization() {
        let a = Pupil::occulting_disk(64, 75_000.0, 3000.0).unwrap();
        let b = Pupil::occulting_disk(64, 75_000.0, 3000.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_occulted_area_matches_disk_area() {
        let pupil = Pupil::occulting_disk(256, 75_000.0, 3000.0).unwrap();
        let blocked: f64 = pupil.transmission.iter().map(|t| 1.0 - t).sum();
        let expected = std::f64::consts::PI * pupil.disk_radius_px.powi(2);
        let rel = (blocked - expected).abs() / expected;
        assert!(rel < 0.05, "blocked {blocked} vs disk area {expected}");
    }

    #[test]
    fn test_oversized_disk_rejected() {
        let err = Pupil::occulting_disk(64, 3000.0, 3000.0).unwrap_err();
        assert!(matches!(err, UmbraError::GeometryOverflow(_)));
    }
}
