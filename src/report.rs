//! Before/after size statistics for an optimization run

use std::fmt;

/// Sizes of the input and output files of one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeReport {
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub pages: usize,
}

impl SizeReport {
    pub fn new(input_bytes: u64, output_bytes: u64, pages: usize) -> Self {
        Self {
            input_bytes,
            output_bytes,
            pages,
        }
    }

    pub fn input_kb(&self) -> f64 {
        self.input_bytes as f64 / 1024.0
    }

    pub fn output_kb(&self) -> f64 {
        self.output_bytes as f64 / 1024.0
    }

    /// Percentage by which the output is smaller than the input.
    ///
    /// Negative when the output grew. `None` for an empty input, where the
    /// ratio is undefined.
    pub fn reduction_percent(&self) -> Option<f64> {
        let input = self.input_kb();
        if input == 0.0 {
            return None;
        }
        Some((input - self.output_kb()) / input * 100.0)
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Optimization complete!")?;
        writeln!(f, "Input file size: {:.2} KB", self.input_kb())?;
        writeln!(f, "Output file size: {:.2} KB", self.output_kb())?;
        match self.reduction_percent() {
            Some(pct) => write!(f, "Size reduction: {:.2}%", pct),
            None => write!(f, "Size reduction: n/a"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_formula() {
        let report = SizeReport::new(200 * 1024, 150 * 1024, 3);
        assert!((report.input_kb() - 200.0).abs() < 1e-9);
        assert!((report.output_kb() - 150.0).abs() < 1e-9);
        assert!((report.reduction_percent().unwrap() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_growth_is_negative() {
        let report = SizeReport::new(1000, 1500, 1);
        assert!((report.reduction_percent().unwrap() + 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_has_no_percentage() {
        let report = SizeReport::new(0, 512, 0);
        assert_eq!(report.reduction_percent(), None);
        assert!(report.to_string().ends_with("Size reduction: n/a"));
    }

    #[test]
    fn test_display() {
        let report = SizeReport::new(2048, 1024, 1);
        let text = report.to_string();
        assert_eq!(
            text,
            "Optimization complete!\n\
             Input file size: 2.00 KB\n\
             Output file size: 1.00 KB\n\
             Size reduction: 50.00%"
        );
    }
}
