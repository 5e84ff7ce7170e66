//! # dh-core
//!
//! Core types for the dihadron correlation analysis: the shared error type,
//! the particle record consumed by selections, and the capability traits
//! that decouple run drivers from concrete analyses.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::EventAnalysis;
pub use types::{Particle, pid};
