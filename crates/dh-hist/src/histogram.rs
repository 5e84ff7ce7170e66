//! Uniform-bin weighted 1D histogram with fill/scale accumulation.

use dh_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// A 1D histogram with fixed-width bins over `[lo, hi)`.
///
/// Entries below `lo` accumulate into `underflow`, entries at or above `hi`
/// into `overflow`. Per-bin sums of squared weights are kept for statistical
/// errors, as is the total in-range entry count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histo1D {
    name: String,
    lo: f64,
    hi: f64,
    bin_content: Vec<f64>,
    sumw2: Vec<f64>,
    underflow: f64,
    overflow: f64,
    entries: u64,
}

impl Histo1D {
    /// Create a histogram with `n_bins` equal-width bins over `[lo, hi)`.
    pub fn uniform(name: impl Into<String>, n_bins: usize, lo: f64, hi: f64) -> Result<Self> {
        if n_bins == 0 {
            return Err(Error::Validation("Histo1D requires at least 1 bin".into()));
        }
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(Error::Validation(format!(
                "Histo1D requires finite lo < hi, got ({lo}, {hi})"
            )));
        }
        Ok(Self {
            name: name.into(),
            lo,
            hi,
            bin_content: vec![0.0; n_bins],
            sumw2: vec![0.0; n_bins],
            underflow: 0.0,
            overflow: 0.0,
            entries: 0,
        })
    }

    /// Histogram name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of bins (excluding under/overflow).
    pub fn n_bins(&self) -> usize {
        self.bin_content.len()
    }

    /// Lower edge of the first bin.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper edge of the last bin.
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Width of one bin.
    pub fn bin_width(&self) -> f64 {
        (self.hi - self.lo) / self.bin_content.len() as f64
    }

    /// Bin edges (length = `n_bins` + 1).
    pub fn bin_edges(&self) -> Vec<f64> {
        let w = self.bin_width();
        (0..=self.bin_content.len()).map(|i| self.lo + w * i as f64).collect()
    }

    /// Bin contents (sum of weights per bin).
    pub fn bin_content(&self) -> &[f64] {
        &self.bin_content
    }

    /// Sum of squared weights per bin.
    pub fn sumw2(&self) -> &[f64] {
        &self.sumw2
    }

    /// Sum of weights below the first bin.
    pub fn underflow(&self) -> f64 {
        self.underflow
    }

    /// Sum of weights at or above the last bin edge.
    pub fn overflow(&self) -> f64 {
        self.overflow
    }

    /// Number of in-range fills.
    pub fn entries(&self) -> u64 {
        self.entries
    }

    /// Bin index for an in-range value, `None` for under/overflow.
    pub fn bin_index(&self, x: f64) -> Option<usize> {
        if !(x >= self.lo && x < self.hi) {
            return None;
        }
        let idx = ((x - self.lo) / self.bin_width()) as usize;
        // Float division can round up onto the upper edge.
        Some(idx.min(self.bin_content.len() - 1))
    }

    /// Deposit `weight` at `x`. Out-of-range values go to under/overflow.
    pub fn fill(&mut self, x: f64, weight: f64) {
        match self.bin_index(x) {
            Some(i) => {
                self.bin_content[i] += weight;
                self.sumw2[i] += weight * weight;
                self.entries += 1;
            }
            None => {
                if x < self.lo {
                    self.underflow += weight;
                } else {
                    self.overflow += weight;
                }
            }
        }
    }

    /// Multiply all accumulated weights (including flows) by `factor`.
    pub fn scale(&mut self, factor: f64) {
        let f2 = factor * factor;
        for c in &mut self.bin_content {
            *c *= factor;
        }
        for s in &mut self.sumw2 {
            *s *= f2;
        }
        self.underflow *= factor;
        self.overflow *= factor;
    }

    /// Sum of in-range bin contents.
    pub fn integral(&self) -> f64 {
        self.bin_content.iter().sum()
    }

    /// Add the contents of `other` into `self`.
    ///
    /// The histograms must share the same binning; names may differ.
    pub fn merge(&mut self, other: &Histo1D) -> Result<()> {
        if other.bin_content.len() != self.bin_content.len()
            || other.lo != self.lo
            || other.hi != self.hi
        {
            return Err(Error::Validation(format!(
                "cannot merge histograms with different binning: \
                 {} bins over [{}, {}) vs {} bins over [{}, {})",
                self.bin_content.len(),
                self.lo,
                self.hi,
                other.bin_content.len(),
                other.lo,
                other.hi
            )));
        }
        for (c, o) in self.bin_content.iter_mut().zip(&other.bin_content) {
            *c += o;
        }
        for (s, o) in self.sumw2.iter_mut().zip(&other.sumw2) {
            *s += o;
        }
        self.underflow += other.underflow;
        self.overflow += other.overflow;
        self.entries += other.entries;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn uniform_rejects_bad_ranges() {
        assert!(Histo1D::uniform("h", 0, 0.0, 1.0).is_err());
        assert!(Histo1D::uniform("h", 4, 1.0, 1.0).is_err());
        assert!(Histo1D::uniform("h", 4, 2.0, 1.0).is_err());
        assert!(Histo1D::uniform("h", 4, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn fill_in_range_and_flows() {
        let mut h = Histo1D::uniform("h", 4, 0.0, 4.0).unwrap();
        h.fill(0.5, 1.0);
        h.fill(3.5, 2.0);
        h.fill(-1.0, 1.0);
        h.fill(4.0, 1.0);
        h.fill(9.0, 3.0);

        assert_eq!(h.bin_content(), &[1.0, 0.0, 0.0, 2.0]);
        assert_eq!(h.sumw2(), &[1.0, 0.0, 0.0, 4.0]);
        assert_eq!(h.underflow(), 1.0);
        assert_eq!(h.overflow(), 4.0);
        assert_eq!(h.entries(), 2);
    }

    #[test]
    fn bin_index_edges() {
        let h = Histo1D::uniform("h", 4, 0.0, 4.0).unwrap();
        assert_eq!(h.bin_index(-0.1), None);
        assert_eq!(h.bin_index(0.0), Some(0));
        assert_eq!(h.bin_index(1.0), Some(1));
        assert_eq!(h.bin_index(3.999), Some(3));
        assert_eq!(h.bin_index(4.0), None);
    }

    #[test]
    fn bin_edges_cover_range() {
        let h = Histo1D::uniform("h", 8, 0.0, 2.0).unwrap();
        let edges = h.bin_edges();
        assert_eq!(edges.len(), 9);
        assert_relative_eq!(edges[0], 0.0);
        assert_relative_eq!(edges[8], 2.0);
        assert_relative_eq!(edges[4], 1.0);
    }

    #[test]
    fn scale_rescales_contents_and_sumw2() {
        let mut h = Histo1D::uniform("h", 2, 0.0, 2.0).unwrap();
        h.fill(0.5, 2.0);
        h.fill(1.5, 2.0);
        h.fill(1.5, 2.0);
        h.scale(0.5);

        assert_eq!(h.bin_content(), &[1.0, 2.0]);
        assert_eq!(h.sumw2(), &[1.0, 2.0]);
        // entries are counts, not weights; scaling leaves them alone
        assert_eq!(h.entries(), 3);
    }

    #[test]
    fn merge_sums_everything() {
        let mut a = Histo1D::uniform("a", 2, 0.0, 2.0).unwrap();
        let mut b = Histo1D::uniform("b", 2, 0.0, 2.0).unwrap();
        a.fill(0.5, 1.0);
        b.fill(0.5, 2.0);
        b.fill(-1.0, 1.0);

        a.merge(&b).unwrap();
        assert_eq!(a.bin_content(), &[3.0, 0.0]);
        assert_eq!(a.sumw2(), &[5.0, 0.0]);
        assert_eq!(a.underflow(), 1.0);
        assert_eq!(a.entries(), 2);
    }

    #[test]
    fn merge_rejects_binning_mismatch() {
        let mut a = Histo1D::uniform("a", 2, 0.0, 2.0).unwrap();
        let b = Histo1D::uniform("b", 4, 0.0, 2.0).unwrap();
        let err = a.merge(&b).unwrap_err();
        assert!(err.to_string().contains("different binning"));
    }
}
