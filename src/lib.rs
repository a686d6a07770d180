pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, MarkerConfig, TrimConfig};
pub use config::{DEFAULT_BEGIN_MARKER, DEFAULT_END_MARKER};
pub use error::{PvReportError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{MarkerPair, RegionMatch, ReportBlock, ReportExtractor, RunSummary};
pub use ui::{OutputFormatter, OutputMode};

use std::path::{Path, PathBuf};

/// Main library interface for pvreport functionality
pub struct PvReport {
    config: Config,
    output_formatter: OutputFormatter,
}

impl PvReport {
    /// Create a new PvReport instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);

        Self {
            config,
            output_formatter,
        }
    }

    /// Create PvReport instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbose,
            cli_args.quiet,
        ))
    }

    /// Run the extraction over a batch of report files and print every
    /// qualifying block to stdout in sorted path order.
    pub fn run(&self, paths: &[PathBuf]) -> Result<RunSummary> {
        let mut summary = RunSummary::new(paths.len());

        self.output_formatter
            .info(&format!("Processing {} report files", paths.len()));

        let extractor = ReportExtractor::new(&self.config);
        let blocks = extractor.extract_all(paths)?;
        summary.files_matched = blocks.len();

        for block in &blocks {
            self.output_formatter.debug(&format!(
                "Matched region in {}",
                block.path.display()
            ));
            self.output_formatter.print_block(block);
        }

        self.output_formatter.print_run_summary(&summary);

        Ok(summary)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(PvReportError::Io)?;
        Ok(())
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &PvReportError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convenience function to extract blocks with default configuration,
/// without printing anything.
pub fn extract_reports_simple(paths: &[PathBuf]) -> Result<Vec<ReportBlock>> {
    let extractor = ReportExtractor::new(&Config::default());
    extractor.extract_all(paths)
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get build information
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        build_date: option_env!("BUILD_DATE").unwrap_or("unknown"),
        target: std::env::consts::ARCH.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub build_date: &'static str,
    pub target: String,
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pvreport {} ({}) built on {} for {}",
            self.version, self.git_hash, self.build_date, self.target
        )
    }
}
