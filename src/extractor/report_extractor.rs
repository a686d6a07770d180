use crate::config::{Config, TrimConfig};
use crate::error::{PvReportError, Result};
use crate::extractor::excerpt;
use crate::extractor::marker::{MarkerPair, RegionMatch};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// One unit of output: a qualifying file and its trimmed excerpt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportBlock {
    pub path: PathBuf,
    pub excerpt: String,
}

impl ReportBlock {
    /// The header line identifying the source file, without a terminator.
    pub fn header(&self) -> String {
        format!("== {}", self.path.display())
    }
}

/// Counters for one extraction run. Diagnostic only; never part of the
/// block output.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub files_examined: usize,
    pub files_matched: usize,
    pub start_time: Instant,
}

impl RunSummary {
    pub fn new(files_examined: usize) -> Self {
        Self {
            files_examined,
            files_matched: 0,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Extracts marker-delimited p-value excerpts from report files.
pub struct ReportExtractor {
    markers: MarkerPair,
    trim: TrimConfig,
}

impl ReportExtractor {
    pub fn new(config: &Config) -> Self {
        Self {
            markers: MarkerPair::new(&config.markers),
            trim: config.trim.clone(),
        }
    }

    pub fn with_markers(mut self, markers: MarkerPair) -> Self {
        self.markers = markers;
        self
    }

    /// Extract blocks from a batch of report files.
    ///
    /// Paths are sorted lexicographically (byte order) before processing,
    /// independent of argument order, so output is deterministic. Files
    /// without the marker pair contribute nothing. The first unreadable
    /// file aborts the whole batch.
    pub fn extract_all(&self, paths: &[PathBuf]) -> Result<Vec<ReportBlock>> {
        let mut sorted: Vec<PathBuf> = paths.to_vec();
        sorted.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

        let mut blocks = Vec::new();
        for path in &sorted {
            if let Some(block) = self.extract_file(path)? {
                blocks.push(block);
            }
        }

        Ok(blocks)
    }

    /// Extract a block from a single report file, or `None` when the file
    /// lacks the marker pair.
    pub fn extract_file(&self, path: &Path) -> Result<Option<ReportBlock>> {
        let content = fs::read_to_string(path).map_err(|source| PvReportError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(self.extract_content(&content).map(|excerpt| ReportBlock {
            path: path.to_path_buf(),
            excerpt,
        }))
    }

    /// The pure per-file pipeline: locate the region, trim its edges.
    pub fn extract_content(&self, content: &str) -> Option<String> {
        match self.markers.find_region(content) {
            RegionMatch::Found { span } => Some(excerpt::trim_region(span, &self.trim)),
            RegionMatch::Absent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_BEGIN_MARKER, DEFAULT_END_MARKER};
    use std::fs;
    use tempfile::TempDir;

    fn extractor() -> ReportExtractor {
        ReportExtractor::new(&Config::default())
    }

    /// A minimal TestU01-shaped summary with the given table rows.
    fn summary_report(rows: &[&str]) -> String {
        let mut report = String::from(
            "========= Summary results of Crush =========\n\
             \n\
             Generator:        xorshift128plus\n\
             Number of statistics:  144\n\
             The following tests gave p-values outside [0.001, 0.9990]:\n\
             \n",
        );
        report.push_str("       ");
        report.push_str(DEFAULT_BEGIN_MARKER);
        report.push('\n');
        report.push_str(" ----------------------------------------------\n");
        for row in rows {
            report.push_str(row);
            report.push('\n');
        }
        report.push_str(" ----------------------------------------------\n ");
        report.push_str(DEFAULT_END_MARKER);
        report.push('\n');
        report
    }

    #[test]
    fn test_extract_content_keeps_table_rows_only() {
        let report = summary_report(&[
            " 11  BirthdaySpacings, t = 2          eps",
            " 45  Gap, r = 0                      1 - eps1",
        ]);

        let excerpt = extractor().extract_content(&report).unwrap();
        assert_eq!(
            excerpt,
            " 11  BirthdaySpacings, t = 2          eps\n \
             45  Gap, r = 0                      1 - eps1\n"
        );
    }

    #[test]
    fn test_extract_content_without_markers() {
        assert!(extractor().extract_content("plain log output\n").is_none());
    }

    #[test]
    fn test_extract_content_end_marker_first() {
        let content = format!("{}\nthen later\n{}\n", DEFAULT_END_MARKER, DEFAULT_BEGIN_MARKER);
        assert!(extractor().extract_content(&content).is_none());
    }

    #[test]
    fn test_extract_content_short_region_is_empty_excerpt() {
        let content = format!("{}\nonly line\n{}", DEFAULT_BEGIN_MARKER, DEFAULT_END_MARKER);
        assert_eq!(extractor().extract_content(&content), Some(String::new()));
    }

    #[test]
    fn test_extract_all_sorts_paths() {
        let temp_dir = TempDir::new().unwrap();
        let report = summary_report(&[" 11  BirthdaySpacings, t = 2          eps"]);

        let z_path = temp_dir.path().join("z.txt");
        let a_path = temp_dir.path().join("a.txt");
        fs::write(&z_path, &report).unwrap();
        fs::write(&a_path, &report).unwrap();

        let blocks = extractor()
            .extract_all(&[z_path.clone(), a_path.clone()])
            .unwrap();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].path, a_path);
        assert_eq!(blocks[1].path, z_path);
    }

    #[test]
    fn test_extract_all_skips_unmatched_files() {
        let temp_dir = TempDir::new().unwrap();

        let matched = temp_dir.path().join("crush.txt");
        let unmatched = temp_dir.path().join("notes.txt");
        fs::write(&matched, summary_report(&[" 74  RandomWalk1 H (L=90)            eps"])).unwrap();
        fs::write(&unmatched, "no summary table here\n").unwrap();

        let blocks = extractor().extract_all(&[matched.clone(), unmatched]).unwrap();

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].path, matched);
    }

    #[test]
    fn test_extract_all_missing_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");

        let result = extractor().extract_all(&[missing.clone()]);
        match result {
            Err(PvReportError::FileRead { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected FileRead error, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_all_empty_batch() {
        assert!(extractor().extract_all(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_block_header() {
        let block = ReportBlock {
            path: PathBuf::from("results/crush.txt"),
            excerpt: String::new(),
        };
        assert_eq!(block.header(), "== results/crush.txt");
    }

    #[test]
    fn test_run_summary_elapsed() {
        let summary = RunSummary::new(3);
        assert_eq!(summary.files_examined, 3);
        assert_eq!(summary.files_matched, 0);
        assert!(summary.elapsed() < Duration::from_secs(5));
    }
}
