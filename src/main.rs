mod cli;

use clap::error::ErrorKind;
use cli::Args;
use owo_colors::{OwoColorize, Stream};
use sbom_license_check::application::read_models::LicenseReportReadModelBuilder;
use sbom_license_check::prelude::*;
use sbom_license_check::shared::error::ExitCode;
use sbom_license_check::shared::security::validate_input_file;
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            let exit_code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::Failure,
            };
            // clap prints help/version to stdout and everything else to stderr;
            // nothing is left to report to if that write fails
            e.print().ok();
            process::exit(exit_code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!(
            "\n{}\n",
            "❌ An error occurred:".if_supports_color(Stream::Stderr, |text| text.red())
        );
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::Failure.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let request = args.into_request()?;

    // Every input must exist before any of them is parsed
    validate_inputs(&request)?;

    // Create adapters (Dependency Injection)
    let use_case = CheckLicensesUseCase::new(
        FileSystemReader::new(),
        BundledAllowList::new(),
        StderrProgressReporter::new(),
    );

    let response = use_case.check(request)?;

    let read_model = LicenseReportReadModelBuilder::build(&response.violations);
    let output = TableFormatter::new().format(&read_model)?;

    StdoutPresenter::new().present(&output)?;

    Ok(())
}

fn validate_inputs(request: &CheckRequest) -> Result<()> {
    request
        .input_paths()
        .try_for_each(|path| validate_input_file(path))
}
