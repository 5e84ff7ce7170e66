//! Injectable analysis configuration: kinematic cuts, centrality classes,
//! and Δφ binning.

use dh_core::{Error, Result, pid};
use serde::{Deserialize, Serialize};

use crate::event::{AssocCut, TriggerChannel, TriggerCut};

/// One centrality class: a percentile window `[low, high)` with a label
/// used to name the class histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralityRange {
    /// Inclusive lower percentile bound.
    pub low: f64,
    /// Exclusive upper percentile bound.
    pub high: f64,
    /// Human-readable class label, e.g. `"10-30"`.
    pub label: String,
}

impl CentralityRange {
    /// Create a `[low, high)` class with the given label.
    pub fn new(low: f64, high: f64, label: impl Into<String>) -> Self {
        Self { low, high, label: label.into() }
    }

    /// Whether `c` falls inside this class (half-open on the upper edge).
    pub fn contains(&self, c: f64) -> bool {
        c >= self.low && c < self.high
    }
}

/// Full configuration of the correlation analysis.
///
/// The default carries the reference selection: π⁰ triggers with
/// 13 < pT < 20 GeV or γ triggers with 8 < pT < 20 GeV inside `|eta| < 1`,
/// charged associates with 1.2 < pT < 20 GeV inside `|eta| < 1`, and the
/// 10–30 / 50–80 centrality classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Trigger-particle selection.
    pub trigger: TriggerCut,
    /// Associated-particle selection.
    pub assoc: AssocCut,
    /// Ordered, non-overlapping centrality classes.
    pub centrality: Vec<CentralityRange>,
    /// Number of Δφ buckets over `[0, 2π)`.
    pub dphi_bins: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            trigger: TriggerCut {
                abs_eta_max: 1.0,
                channels: vec![
                    TriggerChannel::new(pid::PI0, 13.0, 20.0),
                    TriggerChannel::new(pid::GAMMA, 8.0, 20.0),
                ],
            },
            assoc: AssocCut { abs_eta_max: 1.0, pt_min: 1.2, pt_max: 20.0 },
            centrality: vec![
                CentralityRange::new(10.0, 30.0, "10-30"),
                CentralityRange::new(50.0, 80.0, "50-80"),
            ],
            dphi_bins: 36,
        }
    }
}

impl AnalysisConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        if !(self.trigger.abs_eta_max.is_finite() && self.trigger.abs_eta_max > 0.0) {
            return Err(Error::Validation(format!(
                "trigger abs_eta_max must be finite and >0, got {}",
                self.trigger.abs_eta_max
            )));
        }
        if self.trigger.channels.is_empty() {
            return Err(Error::Validation("trigger cut requires at least one channel".into()));
        }
        for (i, ch) in self.trigger.channels.iter().enumerate() {
            if !(ch.pt_min.is_finite() && ch.pt_max.is_finite() && ch.pt_min < ch.pt_max) {
                return Err(Error::Validation(format!(
                    "trigger channel {i} requires pt_min < pt_max, got ({}, {})",
                    ch.pt_min, ch.pt_max
                )));
            }
        }
        if !(self.assoc.abs_eta_max.is_finite() && self.assoc.abs_eta_max > 0.0) {
            return Err(Error::Validation(format!(
                "assoc abs_eta_max must be finite and >0, got {}",
                self.assoc.abs_eta_max
            )));
        }
        if !(self.assoc.pt_min.is_finite()
            && self.assoc.pt_max.is_finite()
            && self.assoc.pt_min < self.assoc.pt_max)
        {
            return Err(Error::Validation(format!(
                "assoc cut requires pt_min < pt_max, got ({}, {})",
                self.assoc.pt_min, self.assoc.pt_max
            )));
        }
        if self.centrality.is_empty() {
            return Err(Error::Validation("at least one centrality class is required".into()));
        }
        for r in &self.centrality {
            if !(r.low.is_finite() && r.high.is_finite() && r.low < r.high) {
                return Err(Error::Validation(format!(
                    "centrality class '{}' requires low < high, got [{}, {})",
                    r.label, r.low, r.high
                )));
            }
            if r.low < 0.0 || r.high > 100.0 {
                return Err(Error::Validation(format!(
                    "centrality class '{}' must lie within [0, 100], got [{}, {})",
                    r.label, r.low, r.high
                )));
            }
        }
        for (i, a) in self.centrality.iter().enumerate() {
            for b in &self.centrality[i + 1..] {
                if a.low < b.high && b.low < a.high {
                    return Err(Error::Validation(format!(
                        "centrality classes '{}' and '{}' overlap",
                        a.label, b.label
                    )));
                }
            }
        }
        if self.dphi_bins == 0 {
            return Err(Error::Validation("dphi_bins must be >0".into()));
        }
        Ok(())
    }

    /// Index of the centrality class containing `c`, if any.
    pub fn bin_index(&self, c: f64) -> Option<usize> {
        self.centrality.iter().position(|r| r.contains(c))
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
