use std::fmt;

use crate::sample::Sample;
use crate::stats::Summary;

/// A parsed sample together with its statistics, rendered as the console
/// report.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    sample: Sample,
    summary: Summary,
}

impl Report {
    pub fn new(sample: Sample) -> Self {
        let summary = Summary::compute(sample.as_slice());
        Report { sample, summary }
    }

    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input data: {}", self.sample)?;
        writeln!(f)?;
        writeln!(f, "Mean: {:.2}", self.summary.mean)?;
        writeln!(f, "Median: {:.2}", self.summary.median)?;
        write!(f, "Mode: {}", self.summary.modes)
    }
}
