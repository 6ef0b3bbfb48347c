//! # dburl
//!
//! Decompose JDBC-style database connection URLs.
//!
//! dburl provides:
//! - Dialect detection for MySQL, Cassandra and Oracle thin-driver URLs
//! - Multi-host lists with per-host ports and dialect default ports
//! - Oracle SID, service-name and TNS-descriptor syntaxes
//! - Query-string properties
//!
//! ## Quick Start
//!
//! ```rust
//! use dburl::prelude::*;
//!
//! fn main() -> Result<(), UrlParseError> {
//!     let info = parse("jdbc:mysql://db1:3306,db2:3307/mydb?useSSL=true")?;
//!
//!     assert_eq!(info.dialect(), DialectKind::MySql);
//!     assert_eq!(info.hosts(), &[HostEndpoint::new("db1", 3306), HostEndpoint::new("db2", 3307)]);
//!     assert_eq!(info.database(), "mydb");
//!     assert_eq!(info.property("useSSL"), Some("true"));
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Connection URL parsing.
pub mod connection {
    pub use dburl_parser::connection::*;
}

/// Logging setup.
pub mod logging {
    pub use dburl_parser::logging::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{ConnectionInfo, DialectKind, HostEndpoint, UrlParseError, UrlParser, parse};
}

// Re-export key types at the crate root
pub use dburl_parser::{
    CassandraParser, ConnectionInfo, DialectKind, DialectParser, HostEndpoint, MySqlParser,
    OracleFormat, OracleParser, ParseResult, Properties, TnsScanError, UrlParseError, UrlParser,
    parse,
};
