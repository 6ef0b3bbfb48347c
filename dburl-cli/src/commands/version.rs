//! `dburl version` command - Display version information.

use dburl_parser::DialectKind;

use crate::error::CliResult;
use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub fn run() -> CliResult<()> {
    output::header("dburl");

    kv("Version", VERSION);
    kv("Binary", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);

    output::newline();

    output::section("Dialects");
    for dialect in [DialectKind::MySql, DialectKind::Cassandra, DialectKind::Oracle] {
        let default_port = dialect
            .default_port()
            .map(|p| p.to_string())
            .unwrap_or_default();
        output::list_item(&format!(
            "{:<10} {:<20} default port {}",
            dialect.name(),
            dialect.prefix(),
            default_port
        ));
    }

    output::newline();
    output::dim("https://github.com/pegasusheavy/dburl");

    Ok(())
}
