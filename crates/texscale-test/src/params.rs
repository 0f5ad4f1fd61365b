//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use texscale_core::PixelGrid;

/// Regression test parameters
///
/// Tracks the state of a regression test: its name, the index of the
/// current comparison, and every failure recorded so far. Comparisons never
/// panic, so one run reports all mismatches at once.
pub struct RegParams {
    /// Name of the test (e.g., "scale")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "scale")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.record_failure(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two grids for exact equality
    ///
    /// Reports the first differing pixel on mismatch.
    ///
    /// # Returns
    ///
    /// `true` if the grids have equal dimensions and pixels.
    pub fn compare_grids(&mut self, expected: &PixelGrid<'_>, actual: &PixelGrid<'_>) -> bool {
        self.index += 1;

        if expected.dimensions() != actual.dimensions() {
            self.record_failure(format!(
                "Failure in {}_reg: grid comparison for index {} - dimension mismatch {:?} vs {:?}",
                self.test_name,
                self.index,
                expected.dimensions(),
                actual.dimensions()
            ));
            return false;
        }

        let width = expected.width() as usize;
        let mismatch = expected
            .pixels()
            .iter()
            .zip(actual.pixels())
            .position(|(a, b)| a != b);

        if let Some(i) = mismatch {
            self.record_failure(format!(
                "Failure in {}_reg: grid comparison for index {} - pixel mismatch at ({}, {}): \
                 {:#010x} vs {:#010x}",
                self.test_name,
                self.index,
                i % width,
                i / width,
                expected.pixels()[i],
                actual.pixels()[i]
            ));
            return false;
        }

        true
    }

    /// Check that every pixel of `grid` equals `color`
    pub fn compare_uniform(&mut self, grid: &PixelGrid<'_>, color: u32) -> bool {
        self.index += 1;

        let width = grid.width() as usize;
        if let Some(i) = grid.pixels().iter().position(|&p| p != color) {
            self.record_failure(format!(
                "Failure in {}_reg: uniform comparison for index {} - pixel ({}, {}) is \
                 {:#010x}, expected {:#010x}",
                self.test_name,
                self.index,
                i % width,
                i / width,
                grid.pixels()[i],
                color
            ));
            return false;
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Like [`RegParams::cleanup`], but as a `Result` for `?`-style tests.
    pub fn finish(self) -> TestResult<()> {
        let test_name = self.test_name.clone();
        let count = self.failures.len();
        if self.cleanup() {
            Ok(())
        } else {
            Err(TestError::Failed { test_name, count })
        }
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_grids() {
        let a = PixelGrid::filled(3, 2, 1).unwrap();
        let mut b = a.clone();
        let mut rp = RegParams::new("test");
        assert!(rp.compare_grids(&a, &b));

        b.set(2, 1, 9);
        assert!(!rp.compare_grids(&a, &b));
        assert!(rp.failures()[0].contains("(2, 1)"));

        let c = PixelGrid::filled(2, 3, 1).unwrap();
        assert!(!rp.compare_grids(&a, &c));
        assert_eq!(rp.index(), 3);
    }

    #[test]
    fn test_compare_uniform() {
        let mut grid = PixelGrid::filled(4, 4, 7).unwrap();
        let mut rp = RegParams::new("test");
        assert!(rp.compare_uniform(&grid, 7));
        grid.set(3, 3, 8);
        assert!(!rp.compare_uniform(&grid, 7));
    }

    #[test]
    fn test_finish_reports_count() {
        let mut rp = RegParams::new("test");
        rp.compare_values(1.0, 2.0, 0.0);
        rp.compare_values(1.0, 3.0, 0.0);
        match rp.finish() {
            Err(TestError::Failed { count, .. }) => assert_eq!(count, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
