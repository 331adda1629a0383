use super::domain::{AvailabilityReport, Heuristic, PageContent};
use tracing::debug;

/// Runs every check against the page and folds the matches into one verdict.
///
/// Pure: the same markup always yields the same report. Positive checks all
/// run regardless of earlier matches; the coming-soon check only records its
/// note when nothing positive has fired by the time it runs.
pub fn detect(page: &PageContent) -> AvailabilityReport {
    let mut report = AvailabilityReport::default();

    for heuristic in Heuristic::ordered() {
        if !heuristic.is_positive() && report.available {
            continue;
        }

        if let Some(evidence) = heuristic.evaluate(page.as_str()) {
            debug!(check = heuristic.label(), %evidence, "check matched");
            if heuristic.is_positive() {
                report.available = true;
            }
            report.evidence.push(evidence);
        }
    }

    report
}
