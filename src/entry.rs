use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;

use crate::args::TesterArgs;
use crate::client::DeviceClient;
use crate::config::{PatchSource, load_patch};
use crate::error::{AppError, AppResult};
use crate::runner::{RunPlan, Runner, RunSummary};

const EXIT_FAILED: u8 = 1;
const EXIT_USAGE: u8 = 2;

/// Parses the command line, runs the smoke test and maps the outcome to a
/// process exit code: 0 all passed, 1 a step failed, 2 usage error.
#[must_use]
pub fn run() -> ExitCode {
    let args = match parse_args(std::env::args_os()) {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => return report_error(&err),
    };
    crate::logger::init_logging(args.verbose, args.no_color);

    match execute(&args) {
        Ok(summary) => ExitCode::from(summary),
        Err(err) => report_error(&err),
    }
}

/// Returns `Ok(None)` when clap already printed help or version output.
fn parse_args<I, T>(raw_args: I) -> AppResult<Option<TesterArgs>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match TesterArgs::try_parse_from(raw_args) {
        Ok(args) => Ok(Some(args)),
        Err(err) if !err.use_stderr() => {
            err.print()?;
            Ok(None)
        }
        Err(err) => Err(AppError::from(err)),
    }
}

fn report_error(err: &AppError) -> ExitCode {
    match err {
        AppError::Clap { source } => {
            drop(source.print());
        }
        AppError::Io { .. } | AppError::Config(_) | AppError::Client(_) => {
            eprintln!("{}", err);
        }
    }
    ExitCode::from(exit_code_for(err))
}

const fn exit_code_for(err: &AppError) -> u8 {
    if err.is_usage() { EXIT_USAGE } else { EXIT_FAILED }
}

/// Validates inputs and runs the script against the device.
///
/// # Errors
///
/// Returns a usage error for a bad config patch, base URL or API key (before
/// any request is sent), or an I/O error if the report cannot be written.
pub fn execute(args: &TesterArgs) -> AppResult<RunSummary> {
    let source = PatchSource::from_args(args.config_json.as_deref(), args.config_inline.as_deref());
    let patch = load_patch(source)?;
    let client = DeviceClient::new(&args.base_url, args.api_key.as_deref(), args.timeout)
        .map_err(AppError::client)?;
    let plan = RunPlan::from_args(args, patch);

    tracing::info!(
        base_url = %client.base_url(),
        timeout_ms = args.timeout.as_millis(),
        patch = plan.config_patch.is_some(),
        task_tests = plan.task_tests,
        "Starting smoke test"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let stdout = std::io::stdout();
    let mut runner = Runner::new(&client, stdout.lock());
    let summary = runtime.block_on(runner.run(&plan))?;

    tracing::info!(
        steps = summary.steps,
        failures = summary.failures,
        "Smoke test finished"
    );
    Ok(summary)
}
