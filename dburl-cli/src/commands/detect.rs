//! `dburl detect` command - Show the dialect of each URL.

use dburl_parser::{DialectKind, OracleFormat};

use crate::cli::DetectArgs;
use crate::error::CliResult;
use crate::output::{self, kv};

/// Run the detect command
pub fn run(args: DetectArgs) -> CliResult<()> {
    output::header("Detect Dialect");

    for url in &args.urls {
        kv(url, &describe(url));
    }

    Ok(())
}

/// Dialect name, plus the addressing syntax for Oracle URLs
fn describe(url: &str) -> String {
    let dialect = DialectKind::detect(url);
    match dialect {
        DialectKind::Oracle => {
            let raw = url.strip_prefix(dialect.prefix()).unwrap_or(url).trim();
            let format = match OracleFormat::detect(raw) {
                OracleFormat::Tns => "tns",
                OracleFormat::ServiceName => "service-name",
                OracleFormat::Sid => "sid",
            };
            format!("{} ({})", dialect, format)
        }
        _ => dialect.to_string(),
    }
}
