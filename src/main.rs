// SPDX-License-Identifier: MPL-2.0
use geo_lens::app::{self, Args};
use geo_lens::config::defaults::DEFAULT_LOG_FILTER;
use geo_lens::error::Error;
use std::panic;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Reader panics are caught per file; log them instead of printing the
    // default banner into the middle of the report.
    panic::set_hook(Box::new(|info| tracing::error!("{info}")));

    let args = match Args::from_env() {
        Ok(args) => args,
        Err(err) => return report_error(&err, &Args::default()),
    };

    let mut stdout = std::io::stdout().lock();
    match app::run(args.clone(), &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_error(&err, &args),
    }
}

fn report_error(err: &Error, args: &Args) -> ExitCode {
    tracing::debug!(error = ?err, "exiting with error");
    eprintln!("{}", app::error_message(err, args));
    if matches!(err, Error::Cli(_)) {
        eprintln!("{}", app::args::HELP);
    }
    ExitCode::from(err.exit_code())
}
