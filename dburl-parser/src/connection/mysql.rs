//! MySQL-style URL parser.
//!
//! ```text
//! jdbc:mysql://host1[:port1][,host2[:port2]...]/database[?key=value[&...]]
//! ```

use super::dialect::{DialectKind, UrlParser, strip_dialect_prefix};
use super::extract::{main_and_properties, split_hosts};
use super::info::ConnectionInfo;
use crate::error::{ParseResult, UrlParseError};
use tracing::trace;

const DEFAULT_PORT: u16 = 3306;

/// Parser for `jdbc:mysql://` URLs.
///
/// The database name after the first `/` may be empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MySqlParser;

impl UrlParser for MySqlParser {
    fn parse(&self, url: &str) -> ParseResult<ConnectionInfo> {
        trace!("Parsing MySQL URL");
        let raw = strip_dialect_prefix(url, DialectKind::MySql);
        let (main, properties) = main_and_properties(raw);

        let (hosts_part, database) = main
            .split_once('/')
            .ok_or(UrlParseError::MissingDatabase)?;

        let hosts = split_hosts(hosts_part, DEFAULT_PORT)?;
        Ok(ConnectionInfo::new(DialectKind::MySql, hosts, database, properties))
    }
}
