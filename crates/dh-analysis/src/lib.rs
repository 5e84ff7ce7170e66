//! # dh-analysis
//!
//! A standalone dihadron azimuthal-correlation analysis for heavy-ion
//! collision events: select trigger and associated particles with static
//! kinematic cuts, accumulate a Δφ histogram per centrality class, and
//! normalize each histogram by its accumulated trigger count at end of run.
//!
//! ## Example
//!
//! ```
//! use dh_analysis::{AnalysisConfig, DihadronCorrelation};
//! use dh_analysis::event::Event;
//! use dh_core::Particle;
//! use dh_core::pid;
//!
//! let mut analysis = DihadronCorrelation::new(AnalysisConfig::default()).unwrap();
//! let event = Event::new(
//!     5.0,
//!     vec![
//!         Particle::neutral(pid::PI0, 15.0, 0.0, 0.0),
//!         Particle::charged_hadron(2.0, 0.2, 1.5),
//!     ],
//! );
//! analysis.accumulate(&event, 20.0); // central class
//! analysis.accumulate(&event, 60.0); // peripheral class
//! let results = analysis.finalize().unwrap();
//! assert_eq!(results[0].n_trigger, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod centrality;
pub mod config;
pub mod correlation;
pub mod event;
pub mod run;

pub use centrality::{CALIBRATION_SENTINEL, CentralityEstimator, ImpactParameterEstimator};
pub use config::{AnalysisConfig, CentralityRange};
pub use correlation::{BinResult, DihadronCorrelation, EventDisposition};
pub use event::{AssocCut, Event, TriggerChannel, TriggerCut};
pub use run::{DihadronRun, RunSummary, accumulate_parallel, run_events};
