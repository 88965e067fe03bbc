//! Discover command implementation.

use std::time::Duration;

use ssdp_scout_core::{collect, send_search, CollectorOptions, SearchRequest};

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::output::{get_formatter, OutputFormatter};

/// Run the discovery session.
///
/// Exit behavior: finding no devices is still a success; only validation
/// and transmit failures are errors.
pub async fn run_discover(cli: Cli) -> Result<()> {
    let socket_timeout = validate_args(&cli)?;

    let formatter: Box<dyn OutputFormatter> = get_formatter(cli.json);

    let request = SearchRequest {
        search_target: cli.search_target.clone(),
        mx: cli.mx,
        max_wait: Duration::from_secs(cli.max_wait),
        retries: cli.retries,
        socket_timeout,
    };

    if !cli.json {
        println!(
            "Searching for '{}' ({} second window)...",
            request.search_target, cli.max_wait
        );
    }

    let socket = send_search(&request).await?;

    let options = CollectorOptions {
        max_wait: request.max_wait,
        socket_timeout: request.socket_timeout,
        fetch_descriptions: !cli.no_fetch,
        stop_on_first_timeout: !cli.keep_listening,
    };
    let devices = collect(socket, options).await;

    println!("{}", formatter.format_devices(&devices));

    Ok(())
}

/// Validate numeric arguments before invoking the core.
///
/// Returns the socket timeout as a `Duration` so conversion failures
/// (infinite or overflowing values) surface here as argument errors
/// instead of panicking later.
fn validate_args(cli: &Cli) -> Result<Duration> {
    if cli.max_wait == 0 {
        return Err(CliError::InvalidArgument(
            "max wait time must be a positive integer".to_string(),
        ));
    }
    if !(cli.timeout > 0.0) {
        return Err(CliError::InvalidArgument(
            "timeout must be a positive number".to_string(),
        ));
    }
    let socket_timeout = Duration::try_from_secs_f64(cli.timeout).map_err(|_| {
        CliError::InvalidArgument("timeout must be a finite number of seconds".to_string())
    })?;
    if cli.retries == 0 {
        return Err(CliError::InvalidArgument(
            "number of retries must be a positive integer".to_string(),
        ));
    }
    if cli.mx == 0 {
        return Err(CliError::InvalidArgument(
            "MX value must be a positive integer".to_string(),
        ));
    }
    Ok(socket_timeout)
}
