//! Sampled geometry for NACA 4-digit airfoil sections.
//!
//! The entry point is [`airfoil::generate::generate`], which turns an [`airfoil::spec::AirfoilSpec`]
//! into an [`airfoil::AirfoilProfile`] of upper and lower surface points, camber line and
//! half-thickness at each chordwise station.

pub mod airfoil;
pub mod algorithms;
pub mod errors;
pub mod form;
pub mod plot;
pub mod serialize;
