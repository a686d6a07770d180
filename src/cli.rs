use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pvreport")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract p-value summary excerpts from statistical test-suite logs")]
#[command(
    long_about = "pvreport scans TestU01-style test-suite output files for the p-value \
                  summary table and prints the failing-test rows of each matching file, \
                  prefixed by the file name. Files without a summary table are skipped."
)]
#[command(after_help = "EXAMPLES:\n  \
    pvreport results/crush-*.txt\n  \
    pvreport results/bigcrush-xorshift128plus.txt --verbose\n  \
    pvreport logs/*.out --marker-begin 'BEGIN SECTION' --marker-end 'END SECTION'\n  \
    pvreport results/*.txt --config my-config.toml\n\n\
    Shell glob expansion supplies the file list; pvreport sorts whatever paths it receives.")]
pub struct Cli {
    /// Report files to process (zero or more)
    pub paths: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Text that opens the report section
    #[arg(long, value_name = "TEXT")]
    pub marker_begin: Option<String>,

    /// Text that closes the report section
    #[arg(long, value_name = "TEXT")]
    pub marker_end: Option<String>,

    /// Output format for diagnostics (report blocks are always plain text)
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored diagnostics
    Human,
    /// Plain text diagnostics
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_marker_begin(self.marker_begin.clone())
            .with_marker_end(self.marker_end.clone())
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
