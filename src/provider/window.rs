//! Analysis window bounds.

use std::ops::Range;

use crate::error::{Error, Result};

/// Contiguous sub-range of samples, `[start, start + length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnalysisWindow {
    start: usize,
    length: usize,
}

impl AnalysisWindow {
    /// Create a window; `length` must be at least one sample.
    pub fn new(start: usize, length: usize) -> Result<Self> {
        if length == 0 {
            return Err(Error::EmptyAnalysisWindow);
        }
        Ok(Self { start, length })
    }

    /// First sample of the window.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of samples in the window.
    pub fn length(&self) -> usize {
        self.length
    }

    /// One past the last sample, saturating at `usize::MAX`.
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.length)
    }

    /// Sample indices covered by the window.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Check the window lies within a mix of `available` samples.
    pub fn check_bounds(&self, available: usize) -> Result<()> {
        match self.start.checked_add(self.length) {
            Some(end) if end <= available => Ok(()),
            _ => Err(Error::AnalysisWindowOutOfRange {
                start: self.start,
                length: self.length,
                available,
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_rejected() {
        assert!(matches!(
            AnalysisWindow::new(10, 0),
            Err(Error::EmptyAnalysisWindow)
        ));
    }

    #[test]
    fn test_range() {
        let window = AnalysisWindow::new(32_000, 16_000).unwrap();
        assert_eq!(window.range(), 32_000..48_000);
        assert_eq!(window.end(), 48_000);
    }

    #[test]
    fn test_check_bounds_exact_fit() {
        let window = AnalysisWindow::new(32_000, 16_000).unwrap();
        assert!(window.check_bounds(48_000).is_ok());
        assert!(window.check_bounds(47_999).is_err());
    }

    #[test]
    fn test_check_bounds_overflow() {
        let window = AnalysisWindow::new(usize::MAX, 2).unwrap();
        assert_eq!(window.end(), usize::MAX);
        assert!(matches!(
            window.check_bounds(usize::MAX),
            Err(Error::AnalysisWindowOutOfRange { .. })
        ));
    }
}
