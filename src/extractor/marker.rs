use crate::config::MarkerConfig;

/// Result of searching a report for the marker-delimited region.
///
/// Absence of the pair is a normal outcome, not an error; files without a
/// summary table are skipped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionMatch<'a> {
    Found { span: &'a str },
    Absent,
}

impl<'a> RegionMatch<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, RegionMatch::Found { .. })
    }
}

/// The two literal strings delimiting the region of interest.
#[derive(Debug, Clone)]
pub struct MarkerPair {
    begin: String,
    end: String,
}

impl MarkerPair {
    pub fn new(config: &MarkerConfig) -> Self {
        Self {
            begin: config.begin.clone(),
            end: config.end.clone(),
        }
    }

    pub fn begin(&self) -> &str {
        &self.begin
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Locate the text strictly between the first occurrence of the begin
    /// marker and the first occurrence of the end marker after it.
    ///
    /// The search spans the whole content; the markers may be separated by
    /// any characters, including line breaks. An end marker that only
    /// appears before the begin marker does not count.
    pub fn find_region<'a>(&self, content: &'a str) -> RegionMatch<'a> {
        let begin_at = match content.find(&self.begin) {
            Some(offset) => offset,
            None => return RegionMatch::Absent,
        };

        let span_start = begin_at + self.begin.len();
        let end_at = match content[span_start..].find(&self.end) {
            Some(offset) => span_start + offset,
            None => return RegionMatch::Absent,
        };

        RegionMatch::Found {
            span: &content[span_start..end_at],
        }
    }
}

impl Default for MarkerPair {
    fn default() -> Self {
        Self::new(&MarkerConfig::default())
    }
}
