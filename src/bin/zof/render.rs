use std::fmt;

use zof::root_finding::{Algorithm, RootFindingReport};


/// Trace table followed by the summary lines.
pub(crate) fn report(algorithm: Algorithm, report: &RootFindingReport) -> String {
    Table { algorithm, report }.to_string()
}

struct Table<'r> {
    algorithm: Algorithm,
    report:    &'r RootFindingReport,
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;

        writeln!(f, "{}", self.algorithm.trace_columns().join(" | "))?;
        for record in &report.trace {
            writeln!(f, "{record}")?;
        }

        writeln!(f)?;
        writeln!(f, "Estimated root: {}", report.root)?;
        writeln!(f, "Final estimated error: {}", report.error)?;
        writeln!(f, "Iterations: {}", report.iterations())?;
        if !report.converged() {
            writeln!(f, "Warning: iteration limit reached before the tolerance was met")?;
        }

        Ok(())
    }
}
