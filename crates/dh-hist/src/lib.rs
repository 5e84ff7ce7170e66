//! # dh-hist
//!
//! Weighted 1D histogram accumulation: uniform binning, `fill`/`scale`
//! mutation, under/overflow tracking. Persistence is out of scope; the
//! histogram is an in-memory accumulator only.
//!
//! ## Example
//!
//! ```
//! use dh_hist::Histo1D;
//!
//! let mut h = Histo1D::uniform("dphi", 4, 0.0, 2.0).unwrap();
//! h.fill(0.3, 1.0);
//! h.fill(1.7, 1.0);
//! h.scale(0.5);
//! assert_eq!(h.integral(), 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod histogram;

pub use histogram::Histo1D;
