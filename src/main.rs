use clap::error::ErrorKind;
use clap::Parser;
use imgclamp::cli::Cli;
use imgclamp::commands::resize;
use imgclamp::config::ResizeConfig;
use imgclamp::core::Error;
use imgclamp::magick::MagickToolkit;
use std::process::ExitCode;

// Main orchestrator function
fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(err),
    };

    let config = match ResizeConfig::from_cli(cli) {
        Ok(config) => config,
        Err(err) => return report_failure(&err),
    };

    let toolkit = MagickToolkit::new();
    let result = {
        let mut stdout = std::io::stdout().lock();
        resize::run(&config, &toolkit, &mut stdout)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err),
    }
}

// Missing arguments get the fixed diagnostic instead of clap's usage text;
// help and version keep clap's behavior
fn handle_parse_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => report_failure(&Error::MissingArguments),
    }
}

// Every failure path writes its diagnostic to stdout and exits 1
fn report_failure(err: &Error) -> ExitCode {
    log::debug!("run failed: {err:?}");
    if err.is_usage_error() {
        println!("{err}");
    } else {
        println!("Error: {err}");
    }
    ExitCode::FAILURE
}
