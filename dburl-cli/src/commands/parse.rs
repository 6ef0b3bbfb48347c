//! `dburl parse` command - Decompose connection URLs.

use dburl_parser::{ConnectionInfo, DialectKind, UrlParseError};
use serde::Serialize;
use tracing::error;

use crate::cli::{OutputFormat, ParseArgs};
use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::output;

/// Run the parse command
pub fn run(args: ParseArgs, config: &Config) -> CliResult<()> {
    let urls = collect_urls(&args, config)?;
    if urls.is_empty() {
        return Err(CliError::Command(
            "No URL given (pass URLs, --name or --env)".to_string(),
        ));
    }

    let format = args.format.unwrap_or(config.output.format);
    let failures = report(&urls, format, config.output.show_properties)?;

    if args.strict && failures > 0 {
        return Err(CliError::Command(format!(
            "{} of {} URLs failed to parse",
            failures,
            urls.len()
        )));
    }

    Ok(())
}

/// Gather URLs from positional arguments, config names and the environment
fn collect_urls(args: &ParseArgs, config: &Config) -> CliResult<Vec<String>> {
    let mut urls = args.urls.clone();

    for name in &args.names {
        urls.push(config.url(name)?.to_string());
    }

    if let Some(var) = &args.env {
        let url = std::env::var(var)
            .map_err(|_| CliError::Config(format!("Environment variable not found: {}", var)))?;
        urls.push(url);
    }

    Ok(urls)
}

/// Parse every URL and print the results. Returns the number of failures.
pub fn report(urls: &[String], format: OutputFormat, show_properties: bool) -> CliResult<usize> {
    let results: Vec<_> = urls
        .iter()
        .map(|url| {
            let result = dburl_parser::parse(url);
            if let Err(e) = &result {
                error!(
                    dialect = %DialectKind::detect(url),
                    code = e.code(),
                    error = %e,
                    "Failed to parse URL"
                );
            }
            (url.as_str(), result)
        })
        .collect();

    let failures = results.iter().filter(|(_, r)| r.is_err()).count();

    match format {
        OutputFormat::Text => {
            print_text(&results, show_properties);
            output::newline();
            let parsed = results.len() - failures;
            if failures == 0 {
                output::success(&format!("Parsed {} URL(s)", parsed));
            } else {
                output::warn(&format!("Parsed {} URL(s), {} failed", parsed, failures));
            }
        }
        OutputFormat::Json => print_json(&results)?,
    }

    Ok(failures)
}

type ParseOutcome<'a> = (&'a str, Result<ConnectionInfo, UrlParseError>);

fn print_text(results: &[ParseOutcome<'_>], show_properties: bool) {
    for (url, result) in results {
        output::header(url);
        match result {
            Ok(info) => print_info(info, show_properties),
            Err(e) => output::error(&describe_error(e)),
        }
    }
}

fn print_info(info: &ConnectionInfo, show_properties: bool) {
    output::kv("Dialect", info.dialect().name());
    output::kv("Database", info.database());
    output::newline();

    output::section("Hosts");
    for host in info.hosts() {
        output::list_item(&host.to_string());
    }

    if show_properties && !info.properties().is_empty() {
        output::newline();
        output::section("Properties");
        for (key, value) in info.properties() {
            output::list_item(&format!("{}={}", key, value));
        }
    }
}

/// Error message with its cause chain, e.g. "Invalid Oracle TNS URL: empty HOST value"
pub fn describe_error(err: &UrlParseError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[derive(Serialize)]
struct JsonReport<'a> {
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    connection: Option<&'a ConnectionInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError>,
}

#[derive(Serialize)]
struct JsonError {
    code: &'static str,
    message: String,
}

fn print_json(results: &[ParseOutcome<'_>]) -> CliResult<()> {
    let reports: Vec<_> = results
        .iter()
        .map(|(url, result)| JsonReport {
            url: *url,
            connection: result.as_ref().ok(),
            error: result.as_ref().err().map(|e| JsonError {
                code: e.code(),
                message: describe_error(e),
            }),
        })
        .collect();

    output::raw(&serde_json::to_string_pretty(&reports)?);
    Ok(())
}
