//! # Diffraction-field computation
//!
//! The wave-optics stages of the pipeline, in dependency order:
//!
//! 1. [`fresnel`] – monochromatic Fresnel propagation of the pupil.
//! 2. [`spectra`] – flux-weighted integration over the stellar spectrum.
//! 3. [`extended`] – convolution with the star's projected disk.
//! 4. [`noise`] – photon-counting noise injection.
//!
//! Every stage consumes and produces a [`DiffractionField`], an `M×M`
//! intensity mesh normalized so the unocculted baseline is `1`. Fields are
//! tagged with the stage that produced them; intensities are non-negative
//! and approach the baseline far from the shadow.

pub mod extended;
pub mod fresnel;
pub mod noise;
pub mod spectra;

mod fft2;

use nalgebra::DMatrix;

/// Pipeline stage that produced a [`DiffractionField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffractionStage {
    /// Single-wavelength, point-source pattern.
    Monochromatic,
    /// Spectrally integrated, point-source pattern.
    Chromatic,
    /// Finite-source (stellar disk) pattern.
    ExtendedSource,
    /// Extended-source pattern with photon noise.
    Noisy,
}

/// A normalized `M×M` intensity mesh in the shadow plane.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffractionField {
    /// Stage that produced this field.
    pub stage: DiffractionStage,

    /// Intensity values, unocculted baseline at `1`.
    pub intensity: DMatrix<f64>,
}

impl DiffractionField {
    /// Mesh edge length in samples.
    pub fn mesh_size(&self) -> usize {
        self.intensity.nrows()
    }
}
