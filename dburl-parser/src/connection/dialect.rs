//! Dialect detection and parser dispatch.

use super::cassandra::CassandraParser;
use super::info::ConnectionInfo;
use super::mysql::MySqlParser;
use super::oracle::OracleParser;
use crate::error::{ParseResult, UrlParseError};
use serde::Serialize;
use tracing::debug;

/// Database URL family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// Generic SQL (MySQL-style) URLs.
    MySql,
    /// Cassandra URLs.
    Cassandra,
    /// Oracle thin-driver URLs (SID, service name or TNS descriptor).
    Oracle,
    /// Fallback for URLs matching no known prefix.
    Unknown,
}

/// Known prefixes, tested in this order by [`DialectKind::detect`].
const DIALECT_PREFIXES: [(DialectKind, &str); 3] = [
    (DialectKind::MySql, "jdbc:mysql://"),
    (DialectKind::Cassandra, "jdbc:cassandra://"),
    (DialectKind::Oracle, "jdbc:oracle:thin:@"),
];

impl DialectKind {
    /// Detect the dialect of a URL by its prefix.
    ///
    /// ```rust
    /// use dburl_parser::DialectKind;
    ///
    /// assert_eq!(DialectKind::detect("jdbc:oracle:thin:@//h/svc"), DialectKind::Oracle);
    /// assert_eq!(DialectKind::detect("postgres://h/db"), DialectKind::Unknown);
    /// ```
    pub fn detect(url: &str) -> Self {
        DIALECT_PREFIXES
            .iter()
            .find(|(_, prefix)| url.starts_with(prefix))
            .map_or(Self::Unknown, |(kind, _)| *kind)
    }

    /// Get the URL prefix bound to this dialect (empty for `Unknown`).
    pub fn prefix(&self) -> &'static str {
        DIALECT_PREFIXES
            .iter()
            .find(|(kind, _)| kind == self)
            .map_or("", |(_, prefix)| prefix)
    }

    /// Get the port used for hosts that do not specify one.
    pub fn default_port(&self) -> Option<u16> {
        match self {
            Self::MySql => Some(3306),
            Self::Cassandra => Some(9042),
            Self::Oracle => Some(1521),
            Self::Unknown => None,
        }
    }

    /// Get the dialect name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Cassandra => "cassandra",
            Self::Oracle => "oracle",
            Self::Unknown => "unknown",
        }
    }

    /// Get the upper-case label used in textual summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MySql => "MYSQL",
            Self::Cassandra => "CASSANDRA",
            Self::Oracle => "ORACLE",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Select the parser for this dialect.
    pub fn parser(&self) -> Option<DialectParser> {
        match self {
            Self::MySql => Some(DialectParser::MySql(MySqlParser)),
            Self::Cassandra => Some(DialectParser::Cassandra(CassandraParser)),
            Self::Oracle => Some(DialectParser::Oracle(OracleParser)),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for DialectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A dialect-specific URL parser.
///
/// Implementations assume the URL already carries their prefix; the
/// dispatcher in [`parse`] guarantees this. Parsers hold no state, so one
/// instance can serve any number of threads.
pub trait UrlParser {
    /// Decompose a URL into a [`ConnectionInfo`].
    fn parse(&self, url: &str) -> ParseResult<ConnectionInfo>;
}

/// The parser selected for a detected dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialectParser {
    /// MySQL parser.
    MySql(MySqlParser),
    /// Cassandra parser.
    Cassandra(CassandraParser),
    /// Oracle parser.
    Oracle(OracleParser),
}

impl UrlParser for DialectParser {
    fn parse(&self, url: &str) -> ParseResult<ConnectionInfo> {
        match self {
            Self::MySql(parser) => parser.parse(url),
            Self::Cassandra(parser) => parser.parse(url),
            Self::Oracle(parser) => parser.parse(url),
        }
    }
}

/// Parse a URL of any supported dialect.
///
/// Fails with [`UrlParseError::UnsupportedDialect`] before any parser runs
/// when the prefix is not recognized.
///
/// ```rust
/// use dburl_parser::parse;
///
/// let info = parse("jdbc:cassandra://node1,node2:9043/ks?consistency=QUORUM").unwrap();
/// assert_eq!(info.hosts()[0].port(), 9042);
/// assert_eq!(info.hosts()[1].port(), 9043);
/// assert_eq!(info.database(), "ks");
/// ```
pub fn parse(url: &str) -> ParseResult<ConnectionInfo> {
    let dialect = DialectKind::detect(url);
    debug!(url_len = url.len(), %dialect, "dburl::parse()");
    let parser = dialect.parser().ok_or(UrlParseError::UnsupportedDialect)?;
    let info = parser.parse(url)?;
    debug!(%dialect, hosts = info.hosts().len(), database = info.database(), "URL parsed");
    Ok(info)
}

/// Strip the dialect prefix and surrounding whitespace.
///
/// A URL without the prefix is passed through as-is.
pub(crate) fn strip_dialect_prefix(url: &str, dialect: DialectKind) -> &str {
    url.strip_prefix(dialect.prefix()).unwrap_or(url).trim()
}
