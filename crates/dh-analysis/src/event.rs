//! Event record and the declared particle selections.
//!
//! The host framework's generic "all particles passing predicate P"
//! projection surface is reduced here to the two selections this analysis
//! declares: a trigger cut and an associated-particle cut.

use dh_core::Particle;
use serde::{Deserialize, Serialize};

/// One `(pid, pT-window)` trigger channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerChannel {
    /// Particle identification code accepted by this channel.
    pub pid: i32,
    /// Exclusive lower pT bound in GeV.
    pub pt_min: f64,
    /// Exclusive upper pT bound in GeV.
    pub pt_max: f64,
}

impl TriggerChannel {
    /// Create a channel accepting `pid` with `pt_min < pT < pt_max`.
    pub fn new(pid: i32, pt_min: f64, pt_max: f64) -> Self {
        Self { pid, pt_min, pt_max }
    }
}

/// Trigger selection: an `|eta|` window and a disjunction of channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerCut {
    /// Exclusive bound on `|eta|` for all trigger candidates.
    pub abs_eta_max: f64,
    /// Accepted `(pid, pT-window)` combinations; any one suffices.
    pub channels: Vec<TriggerChannel>,
}

impl TriggerCut {
    /// Whether `p` passes this trigger selection.
    pub fn accepts(&self, p: &Particle) -> bool {
        p.eta.abs() < self.abs_eta_max
            && self
                .channels
                .iter()
                .any(|ch| p.pid == ch.pid && p.pt > ch.pt_min && p.pt < ch.pt_max)
    }
}

/// Associated-particle selection: charged particles in an `|eta|` and pT window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssocCut {
    /// Exclusive bound on `|eta|`.
    pub abs_eta_max: f64,
    /// Exclusive lower pT bound in GeV.
    pub pt_min: f64,
    /// Exclusive upper pT bound in GeV. The effective upper bound is further
    /// limited per pair by the trigger pT during accumulation.
    pub pt_max: f64,
}

impl AssocCut {
    /// Whether `p` passes this associated-particle selection.
    pub fn accepts(&self, p: &Particle) -> bool {
        p.is_charged()
            && p.eta.abs() < self.abs_eta_max
            && p.pt > self.pt_min
            && p.pt < self.pt_max
    }
}

/// An immutable collision event: final-state particles plus the impact
/// parameter reported by the event source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    impact_parameter: f64,
    particles: Vec<Particle>,
}

impl Event {
    /// Create an event from its impact parameter (fm) and particle list.
    pub fn new(impact_parameter: f64, particles: Vec<Particle>) -> Self {
        Self { impact_parameter, particles }
    }

    /// Impact parameter of the collision in fm.
    pub fn impact_parameter(&self) -> f64 {
        self.impact_parameter
    }

    /// All final-state particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particles passing `pred`, sorted by descending pT.
    pub fn select_by_pt(&self, pred: impl Fn(&Particle) -> bool) -> Vec<Particle> {
        let mut out: Vec<Particle> = self.particles.iter().copied().filter(|p| pred(p)).collect();
        out.sort_by(|a, b| b.pt.partial_cmp(&a.pt).unwrap_or(std::cmp::Ordering::Equal));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dh_core::pid;

    fn reference_trigger() -> TriggerCut {
        TriggerCut {
            abs_eta_max: 1.0,
            channels: vec![
                TriggerChannel::new(pid::PI0, 13.0, 20.0),
                TriggerChannel::new(pid::GAMMA, 8.0, 20.0),
            ],
        }
    }

    #[test]
    fn trigger_cut_is_disjunction_of_channels() {
        let cut = reference_trigger();

        // pi0 inside its window
        assert!(cut.accepts(&Particle::neutral(pid::PI0, 15.0, 0.5, 0.0)));
        // gamma below the pi0 threshold but inside the gamma window
        assert!(cut.accepts(&Particle::neutral(pid::GAMMA, 9.0, -0.5, 0.0)));
        // pi0 in the gamma-only window is rejected
        assert!(!cut.accepts(&Particle::neutral(pid::PI0, 9.0, 0.5, 0.0)));
        // eta window applies to every channel
        assert!(!cut.accepts(&Particle::neutral(pid::GAMMA, 9.0, 1.5, 0.0)));
        // window bounds are exclusive
        assert!(!cut.accepts(&Particle::neutral(pid::PI0, 13.0, 0.0, 0.0)));
        assert!(!cut.accepts(&Particle::neutral(pid::PI0, 20.0, 0.0, 0.0)));
    }

    #[test]
    fn assoc_cut_requires_charge() {
        let cut = AssocCut { abs_eta_max: 1.0, pt_min: 1.2, pt_max: 20.0 };

        assert!(cut.accepts(&Particle::charged_hadron(2.0, 0.0, 0.0)));
        assert!(!cut.accepts(&Particle::neutral(pid::GAMMA, 2.0, 0.0, 0.0)));
        assert!(!cut.accepts(&Particle::charged_hadron(1.0, 0.0, 0.0)));
        assert!(!cut.accepts(&Particle::charged_hadron(2.0, -1.2, 0.0)));
    }

    #[test]
    fn select_by_pt_sorts_descending() {
        let event = Event::new(
            3.0,
            vec![
                Particle::charged_hadron(2.0, 0.0, 0.0),
                Particle::charged_hadron(5.0, 0.1, 0.0),
                Particle::charged_hadron(3.0, -0.1, 0.0),
            ],
        );
        let selected = event.select_by_pt(|p| p.pt > 2.5);
        let pts: Vec<f64> = selected.iter().map(|p| p.pt).collect();
        assert_eq!(pts, vec![5.0, 3.0]);
    }
}
