mod detector;
pub mod domain;
mod heuristics;

pub use detector::detect;
pub use domain::{AvailabilityReport, Heuristic, PageContent};
