use clap::Parser;
use pvreport::{Cli, OutputFormatter, OutputMode, PvReport, PvReportError, UserFriendlyError};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    // Create PvReport instance
    let pvreport = match PvReport::from_cli(&cli) {
        Ok(pvreport) => pvreport,
        Err(e) => {
            print_startup_error(&e);
            return exit_code_for(&e);
        }
    };

    // Execute the extraction over the supplied report files
    match pvreport.run(&cli.paths) {
        Ok(_summary) => 0,
        Err(e) => {
            pvreport.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &PvReportError) -> i32 {
    match error {
        PvReportError::Config { .. } => 2,
        PvReportError::FileRead { .. } => 3,
        _ => 1,
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "pvreport.toml".to_string());

    match PvReport::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  pvreport <report-files> --config {}", config_path);
            println!("\nEdit the file to customize the markers for your report format.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn print_startup_error(error: &PvReportError) {
    // Create a basic formatter for startup errors
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
