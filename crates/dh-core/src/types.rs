//! Common data types for the dihadron analysis.

use serde::{Deserialize, Serialize};

/// Particle identification codes used by the reference trigger selection.
pub mod pid {
    /// Neutral pion.
    pub const PI0: i32 = 113;
    /// Photon.
    pub const GAMMA: i32 = 22;
    /// Charged pion.
    pub const PI_PLUS: i32 = 211;
}

/// A final-state particle as consumed by the analysis.
///
/// Only the attributes the selections and the correlation read are carried:
/// transverse momentum, pseudorapidity, azimuth, identity, and charge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Transverse momentum in GeV.
    pub pt: f64,
    /// Pseudorapidity.
    pub eta: f64,
    /// Azimuthal angle in radians.
    pub phi: f64,
    /// Particle identification code.
    pub pid: i32,
    /// Electric charge in units of e.
    pub charge: i32,
}

impl Particle {
    /// Create a particle from its full attribute set.
    pub fn new(pid: i32, charge: i32, pt: f64, eta: f64, phi: f64) -> Self {
        Self { pt, eta, phi, pid, charge }
    }

    /// Convenience constructor for a neutral particle of the given identity.
    pub fn neutral(pid: i32, pt: f64, eta: f64, phi: f64) -> Self {
        Self::new(pid, 0, pt, eta, phi)
    }

    /// Convenience constructor for a positively charged hadron.
    pub fn charged_hadron(pt: f64, eta: f64, phi: f64) -> Self {
        Self::new(pid::PI_PLUS, 1, pt, eta, phi)
    }

    /// Whether the particle carries electric charge.
    pub fn is_charged(&self) -> bool {
        self.charge != 0
    }
}
