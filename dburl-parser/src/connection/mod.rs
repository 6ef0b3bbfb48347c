//! Connection URL parsing.
//!
//! This module decomposes JDBC-style database URLs into a [`ConnectionInfo`]:
//! the dialect, an ordered list of hosts, the database name and the query
//! properties.
//!
//! # Supported URL Formats
//!
//! ## MySQL
//! ```text
//! jdbc:mysql://host1[:port][,host2[:port]...]/database?options
//! ```
//!
//! ## Cassandra
//! ```text
//! jdbc:cassandra://[user:password@]host1[:port][,host2[:port]...]/keyspace?options
//! ```
//!
//! ## Oracle
//! ```text
//! jdbc:oracle:thin:@host:port:SID?options
//! jdbc:oracle:thin:@//host1[:port][,host2[:port]...]/service?options
//! jdbc:oracle:thin:@(DESCRIPTION=(ADDRESS=(HOST=h)(PORT=p))(CONNECT_DATA=(SERVICE_NAME=s)))?options
//! ```
//!
//! # Parsing Connection URLs
//!
//! ```rust
//! use dburl_parser::connection::{parse, DialectKind, HostEndpoint};
//!
//! let info = parse("jdbc:oracle:thin:@//h1:1521,h2:1522/svc?a=1").unwrap();
//! assert_eq!(info.dialect(), DialectKind::Oracle);
//! assert_eq!(info.hosts(), &[HostEndpoint::new("h1", 1521), HostEndpoint::new("h2", 1522)]);
//! assert_eq!(info.database(), "svc");
//! assert_eq!(info.property("a"), Some("1"));
//! ```
//!
//! # Selecting a Parser Directly
//!
//! ```rust
//! use dburl_parser::connection::{CassandraParser, UrlParser};
//!
//! let info = CassandraParser.parse("jdbc:cassandra://user:pw@node1/ks").unwrap();
//! assert_eq!(info.hosts()[0].host(), "node1");
//! ```

mod cassandra;
mod dialect;
mod extract;
mod info;
mod mysql;
mod oracle;
mod tns;

pub use cassandra::CassandraParser;
pub use dialect::{DialectKind, DialectParser, UrlParser, parse};
pub use extract::{split_hosts, split_main_and_query, split_query_params};
pub use info::{ConnectionInfo, HostEndpoint, Properties};
pub use mysql::MySqlParser;
pub use oracle::{OracleFormat, OracleParser};
