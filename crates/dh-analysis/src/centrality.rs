//! Centrality estimation from the event impact parameter.

use crate::event::Event;

/// Value reported while an estimator is still calibrating.
pub const CALIBRATION_SENTINEL: f64 = -1.0;

/// Maps an event to a centrality percentile in `[0, 100]`, or a negative
/// sentinel while the estimator is still calibrating.
///
/// Estimators may be stateful (the impact-parameter method builds its
/// calibration sample from the events it is asked about), hence `&mut self`.
pub trait CentralityEstimator {
    /// Centrality percentile for `event`, or [`CALIBRATION_SENTINEL`].
    fn centrality(&mut self, event: &Event) -> f64;
}

/// Impact-parameter percentile estimator with a warm-up calibration window.
///
/// The first `calibration_events` events only feed the calibration sample
/// and estimate to [`CALIBRATION_SENTINEL`]. Afterwards the centrality of an
/// event is the fraction of the calibration sample with a smaller impact
/// parameter, in percent: a small impact parameter means a central (head-on)
/// collision and a low percentile. Percentiles are only as fine-grained as
/// the calibration window is large.
#[derive(Debug, Clone)]
pub struct ImpactParameterEstimator {
    calibration_events: usize,
    /// Sorted once the calibration window is complete.
    sample: Vec<f64>,
}

impl ImpactParameterEstimator {
    /// Create an estimator that calibrates on the first `calibration_events`
    /// events it sees.
    pub fn new(calibration_events: usize) -> Self {
        Self { calibration_events, sample: Vec::with_capacity(calibration_events) }
    }

    /// Whether the calibration window has been filled.
    pub fn is_calibrated(&self) -> bool {
        self.sample.len() >= self.calibration_events
    }

    fn percentile(&self, b: f64) -> f64 {
        if self.sample.is_empty() {
            return CALIBRATION_SENTINEL;
        }
        let below = self.sample.partition_point(|x| *x < b);
        100.0 * below as f64 / self.sample.len() as f64
    }
}

impl CentralityEstimator for ImpactParameterEstimator {
    fn centrality(&mut self, event: &Event) -> f64 {
        if !self.is_calibrated() {
            self.sample.push(event.impact_parameter());
            if self.is_calibrated() {
                self.sample.sort_by(|a, b| a.total_cmp(b));
                log::debug!(
                    "centrality calibration complete after {} events",
                    self.sample.len()
                );
            }
            return CALIBRATION_SENTINEL;
        }
        self.percentile(event.impact_parameter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn event_with_b(b: f64) -> Event {
        Event::new(b, Vec::new())
    }

    #[test]
    fn warm_up_yields_sentinel() {
        let mut est = ImpactParameterEstimator::new(3);
        for b in [4.0, 2.0, 8.0] {
            assert_eq!(est.centrality(&event_with_b(b)), CALIBRATION_SENTINEL);
        }
        assert!(est.is_calibrated());
    }

    #[test]
    fn percentile_of_calibration_sample() {
        let mut est = ImpactParameterEstimator::new(4);
        for b in [1.0, 2.0, 3.0, 4.0] {
            est.centrality(&event_with_b(b));
        }

        // smaller b than any calibration event: fully central
        assert_relative_eq!(est.centrality(&event_with_b(0.5)), 0.0);
        // larger b than any calibration event: fully peripheral
        assert_relative_eq!(est.centrality(&event_with_b(9.0)), 100.0);
        // half the sample below
        assert_relative_eq!(est.centrality(&event_with_b(2.5)), 50.0);
    }

    #[test]
    fn zero_window_estimator_never_calibrates_meaningfully() {
        let mut est = ImpactParameterEstimator::new(0);
        assert_eq!(est.centrality(&event_with_b(3.0)), CALIBRATION_SENTINEL);
    }
}
