//! # dburl-parser
//!
//! Decomposes JDBC-style database connection URLs for three families:
//! - MySQL (`jdbc:mysql://`)
//! - Cassandra (`jdbc:cassandra://`)
//! - Oracle thin driver (`jdbc:oracle:thin:@`) in SID, service-name and
//!   TNS-descriptor syntax
//!
//! Every successful parse yields an owned, immutable [`ConnectionInfo`];
//! every failure a [`UrlParseError`].
//!
//! ## Parsing
//!
//! ```rust
//! use dburl_parser::{parse, DialectKind, HostEndpoint};
//!
//! let info = parse(
//!     "jdbc:oracle:thin:@(DESCRIPTION=(ADDRESS_LIST=\
//!      (ADDRESS=(PROTOCOL=TCP)(HOST=h1)(PORT=1521))\
//!      (ADDRESS=(PROTOCOL=TCP)(HOST=h2)(PORT=1521)))\
//!      (CONNECT_DATA=(SERVICE_NAME=svc)))",
//! )
//! .unwrap();
//!
//! assert_eq!(info.dialect(), DialectKind::Oracle);
//! assert_eq!(info.hosts(), &[HostEndpoint::new("h1", 1521), HostEndpoint::new("h2", 1521)]);
//! assert_eq!(info.database(), "svc");
//! ```
//!
//! ## Errors
//!
//! ```rust
//! use dburl_parser::{parse, UrlParseError};
//!
//! assert_eq!(parse("jdbc:cassandra://host/"), Err(UrlParseError::MissingKeyspace));
//! assert_eq!(parse("jdbc:mysql://host/").unwrap().database(), "");
//! ```
//!
//! ## Logging
//!
//! Parsers emit `tracing` events. Nothing is printed unless a subscriber is
//! installed, for example with [`logging::init`] (feature `tracing-subscriber`).

pub mod connection;
pub mod error;
pub mod logging;

pub use connection::{
    CassandraParser, ConnectionInfo, DialectKind, DialectParser, HostEndpoint, MySqlParser,
    OracleFormat, OracleParser, Properties, UrlParser, parse,
};
pub use error::{ParseResult, TnsScanError, UrlParseError};
