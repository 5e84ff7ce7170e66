//! Sequential and parallel run drivers.

use dh_core::{EventAnalysis, Result};
use rayon::prelude::*;

use crate::centrality::CentralityEstimator;
use crate::config::AnalysisConfig;
use crate::correlation::{BinResult, DihadronCorrelation, EventDisposition};
use crate::event::Event;

/// The correlation accumulator paired with its centrality estimator.
///
/// This is the plain constructor/factory replacement for a host framework's
/// plugin hook: build one, feed it events, finalize it.
#[derive(Debug)]
pub struct DihadronRun<E: CentralityEstimator> {
    correlation: DihadronCorrelation,
    estimator: E,
}

impl<E: CentralityEstimator> DihadronRun<E> {
    /// Create a run from a validated configuration and an estimator.
    pub fn new(cfg: AnalysisConfig, estimator: E) -> Result<Self> {
        Ok(Self { correlation: DihadronCorrelation::new(cfg)?, estimator })
    }

    /// The underlying accumulator (pre-normalization state).
    pub fn correlation(&self) -> &DihadronCorrelation {
        &self.correlation
    }
}

impl<E: CentralityEstimator> EventAnalysis for DihadronRun<E> {
    type Event = Event;
    type Disposition = EventDisposition;
    type Output = Vec<BinResult>;

    fn process_event(&mut self, event: &Event) -> EventDisposition {
        let c = self.estimator.centrality(event);
        self.correlation.accumulate(event, c)
    }

    fn finalize(self) -> Result<Vec<BinResult>> {
        self.correlation.finalize()
    }
}

/// Tallies from a pass over an event sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Events accepted into some centrality class.
    pub accepted: usize,
    /// Events vetoed with centrality outside `[0, 100]`.
    pub vetoed_calibration: usize,
    /// Events vetoed with centrality outside every configured class.
    pub vetoed_class: usize,
}

impl RunSummary {
    fn record(&mut self, d: EventDisposition) {
        match d {
            EventDisposition::Accepted { .. } => self.accepted += 1,
            EventDisposition::VetoedCalibration => self.vetoed_calibration += 1,
            EventDisposition::VetoedClass => self.vetoed_class += 1,
        }
    }
}

/// Feed `events` through `analysis` strictly sequentially: one event is
/// fully processed before the next begins.
pub fn run_events<A>(analysis: &mut A, events: &[Event]) -> RunSummary
where
    A: EventAnalysis<Event = Event, Disposition = EventDisposition>,
{
    let mut summary = RunSummary::default();
    for event in events {
        summary.record(analysis.process_event(event));
    }
    log::debug!(
        "run: {} accepted, {} vetoed in calibration, {} outside classes",
        summary.accepted,
        summary.vetoed_calibration,
        summary.vetoed_class
    );
    summary
}

/// Accumulate pre-estimated `(event, centrality)` pairs across rayon workers.
///
/// Each worker owns an independent accumulator; the partials are merged into
/// a single accumulator before any normalization, so the result matches a
/// sequential pass over the same pairs. Centrality must be estimated up
/// front because the warm-up estimator is inherently sequential.
pub fn accumulate_parallel(
    cfg: &AnalysisConfig,
    pairs: &[(Event, f64)],
) -> Result<DihadronCorrelation> {
    let n_workers = rayon::current_num_threads().max(1);
    let chunk = pairs.len().div_ceil(n_workers).max(1);

    let partials: Vec<Result<DihadronCorrelation>> = pairs
        .par_chunks(chunk)
        .map(|chunk| {
            let mut acc = DihadronCorrelation::new(cfg.clone())?;
            for (event, c) in chunk {
                acc.accumulate(event, *c);
            }
            Ok(acc)
        })
        .collect();

    let mut merged = DihadronCorrelation::new(cfg.clone())?;
    for partial in partials {
        merged.merge(&partial?)?;
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::centrality::ImpactParameterEstimator;
    use dh_core::{Particle, pid};

    fn toy_event(b: f64) -> Event {
        Event::new(
            b,
            vec![
                Particle::neutral(pid::PI0, 15.0, 0.0, 0.0),
                Particle::charged_hadron(2.0, 0.1, 1.0),
            ],
        )
    }

    #[test]
    fn calibration_events_are_vetoed() {
        let mut run =
            DihadronRun::new(AnalysisConfig::default(), ImpactParameterEstimator::new(4)).unwrap();
        let events: Vec<Event> = (0..4).map(|i| toy_event(1.0 + i as f64)).collect();
        let summary = run_events(&mut run, &events);
        assert_eq!(summary.vetoed_calibration, 4);
        assert_eq!(summary.accepted, 0);
    }

    #[test]
    fn parallel_matches_sequential() {
        let cfg = AnalysisConfig::default();
        let pairs: Vec<(Event, f64)> =
            (0..40).map(|i| (toy_event(3.0), (i * 3) as f64)).collect();

        let mut sequential = DihadronCorrelation::new(cfg.clone()).unwrap();
        for (event, c) in &pairs {
            sequential.accumulate(event, *c);
        }

        let parallel = accumulate_parallel(&cfg, &pairs).unwrap();

        for bin in 0..cfg.centrality.len() {
            assert_eq!(parallel.n_trigger(bin), sequential.n_trigger(bin));
            assert_eq!(
                parallel.histogram(bin).unwrap().bin_content(),
                sequential.histogram(bin).unwrap().bin_content()
            );
        }
    }

    #[test]
    fn parallel_on_empty_sample_is_empty() {
        let cfg = AnalysisConfig::default();
        let acc = accumulate_parallel(&cfg, &[]).unwrap();
        assert_eq!(acc.n_trigger(0), Some(0));
    }
}
