//! # umbra
//!
//! Synthesis of the light curve produced when a trans-Neptunian object (TNO)
//! occults a star, as observed by a high-speed photometric survey.
//!
//! The crate models the Fresnel diffraction pattern cast by the occulting
//! body's silhouette in the shadow plane, integrates it over the star's
//! spectral energy distribution, smooths it by the star's finite angular
//! size, injects photon noise, and resamples the resulting spatial profile
//! into a time-series light curve consistent with the observing geometry.
//!
//! ## Pipeline
//!
//! ```text
//! plane sizing → pupil → Fresnel (mono) ┐
//!                      → spectral integration → finite-source convolution
//!                                              → photon noise
//! stellar radius estimate ┘                    → profile extraction (×2)
//!                                              → temporal sampling
//! ```
//!
//! One call drives the whole chain:
//!
//! ```rust,no_run
//! use umbra::simulation::{SimulationParameters, run_seeded};
//!
//! let params = SimulationParameters::default();
//! let result = run_seeded(&params, 0xca11ab1e).unwrap();
//! println!("SNR = {:.1}", result.snr);
//! ```
//!
//! Each stage is also exposed individually (see the module list) so callers
//! can run partial chains or inspect intermediate fields.

pub mod constants;
pub mod diffraction;
pub mod lightcurve;
pub mod photometry;
pub mod plane;
pub mod profile;
pub mod pupil;
pub mod simulation;
pub mod stellar;
pub mod umbra_errors;

#[doc(inline)]
pub use crate::simulation::{run, run_seeded, SimulationParameters, SimulationResult};
#[doc(inline)]
pub use crate::stellar::SpectralClass;
#[doc(inline)]
pub use crate::umbra_errors::UmbraError;
