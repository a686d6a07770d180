pub mod excerpt;
pub mod marker;
pub mod report_extractor;

pub use marker::{MarkerPair, RegionMatch};
pub use report_extractor::{ReportBlock, ReportExtractor, RunSummary};
