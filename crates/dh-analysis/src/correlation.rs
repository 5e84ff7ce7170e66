//! Per-event Δφ accumulation and end-of-run normalization.

use std::f64::consts::PI;

use dh_core::{Error, Result};
use dh_hist::Histo1D;
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::event::Event;

const TWO_PI: f64 = 2.0 * PI;

/// Outcome of feeding one event to the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// Centrality outside `[0, 100]`; expected while the estimator is still
    /// inside its calibration window.
    VetoedCalibration,
    /// Centrality valid but not inside any configured class.
    VetoedClass,
    /// Event accepted into a centrality class.
    Accepted {
        /// Index of the class the event fell into.
        bin: usize,
        /// Trigger particles found in this event.
        n_trigger: usize,
        /// Histogram fills this event produced.
        n_fill: usize,
    },
}

/// One normalized per-class result.
#[derive(Debug, Clone, Serialize)]
pub struct BinResult {
    /// Centrality class label.
    pub label: String,
    /// Trigger count the histogram was normalized by.
    pub n_trigger: u64,
    /// Δφ histogram, scaled by `1 / n_trigger`.
    pub histogram: Histo1D,
}

/// The correlation accumulator: one Δφ histogram and one trigger counter
/// per centrality class, owned exclusively by this instance.
///
/// Feed events with [`accumulate`](Self::accumulate) (or through
/// [`DihadronRun`](crate::run::DihadronRun), which pairs the accumulator
/// with a centrality estimator), then call
/// [`finalize`](Self::finalize) exactly once.
#[derive(Debug, Clone)]
pub struct DihadronCorrelation {
    cfg: AnalysisConfig,
    hists: Vec<Histo1D>,
    n_trigger: Vec<u64>,
}

impl DihadronCorrelation {
    /// Create an accumulator for `cfg`, booking one empty histogram and one
    /// zeroed trigger counter per centrality class.
    pub fn new(cfg: AnalysisConfig) -> Result<Self> {
        cfg.validate()?;
        let hists = cfg
            .centrality
            .iter()
            .map(|r| Histo1D::uniform(format!("dphi_{}", r.label), cfg.dphi_bins, 0.0, TWO_PI))
            .collect::<Result<Vec<_>>>()?;
        let n_trigger = vec![0u64; cfg.centrality.len()];
        Ok(Self { cfg, hists, n_trigger })
    }

    /// The configuration this accumulator was built from.
    pub fn config(&self) -> &AnalysisConfig {
        &self.cfg
    }

    /// Pre-normalization histogram for class `bin`.
    pub fn histogram(&self, bin: usize) -> Option<&Histo1D> {
        self.hists.get(bin)
    }

    /// Accumulated trigger count for class `bin`.
    pub fn n_trigger(&self, bin: usize) -> Option<u64> {
        self.n_trigger.get(bin).copied()
    }

    /// Process one event whose centrality has already been estimated.
    ///
    /// Events with centrality outside `[0, 100]` or outside every configured
    /// class are discarded; side effects are confined to the matched class's
    /// histogram and trigger counter.
    pub fn accumulate(&mut self, event: &Event, centrality: f64) -> EventDisposition {
        if !(0.0..=100.0).contains(&centrality) {
            log::debug!("event vetoed: centrality {centrality} outside [0, 100]");
            return EventDisposition::VetoedCalibration;
        }
        let Some(bin) = self.cfg.bin_index(centrality) else {
            log::debug!("event vetoed: centrality {centrality} outside configured classes");
            return EventDisposition::VetoedClass;
        };

        let triggers = event.select_by_pt(|p| self.cfg.trigger.accepts(p));
        let assocs = event.select_by_pt(|p| self.cfg.assoc.accepts(p));

        self.n_trigger[bin] += triggers.len() as u64;

        let mut n_fill = 0usize;
        for trig in &triggers {
            for assoc in &assocs {
                // Associates must be strictly softer than the trigger.
                if assoc.pt < trig.pt {
                    let mut dphi = assoc.phi - trig.phi;
                    // The plots run over [0, 2π); lift negative differences
                    // only. Inputs outside [-2π, 2π) can produce values ≥ 2π,
                    // which land in the histogram overflow.
                    while dphi < 0.0 {
                        dphi += TWO_PI;
                    }
                    self.hists[bin].fill(dphi, 1.0);
                    n_fill += 1;
                }
            }
        }

        EventDisposition::Accepted { bin, n_trigger: triggers.len(), n_fill }
    }

    /// Fold another accumulator's contents into this one.
    ///
    /// Used to reduce per-worker accumulators after parallel event
    /// processing; both sides must share the same configuration.
    pub fn merge(&mut self, other: &DihadronCorrelation) -> Result<()> {
        if other.cfg != self.cfg {
            return Err(Error::Validation(
                "cannot merge accumulators with different configurations".into(),
            ));
        }
        for (h, o) in self.hists.iter_mut().zip(&other.hists) {
            h.merge(o)?;
        }
        for (n, o) in self.n_trigger.iter_mut().zip(&other.n_trigger) {
            *n += o;
        }
        Ok(())
    }

    /// Normalize every class histogram by its accumulated trigger count.
    ///
    /// Any class with a zero trigger counter is reported as
    /// [`Error::EmptyBin`] before anything is scaled; histograms are never
    /// left with non-finite contents.
    pub fn finalize(mut self) -> Result<Vec<BinResult>> {
        for (i, &n) in self.n_trigger.iter().enumerate() {
            if n == 0 {
                return Err(Error::EmptyBin { label: self.cfg.centrality[i].label.clone() });
            }
        }

        let mut out = Vec::with_capacity(self.hists.len());
        for (i, mut h) in self.hists.drain(..).enumerate() {
            let n = self.n_trigger[i];
            h.scale(1.0 / n as f64);
            out.push(BinResult {
                label: self.cfg.centrality[i].label.clone(),
                n_trigger: n,
                histogram: h,
            });
        }
        Ok(out)
    }
}
