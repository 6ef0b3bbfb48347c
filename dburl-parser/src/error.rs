//! Error types for connection URL parsing.
//!
//! Every failure is terminal: a malformed URL cannot be fixed by retrying, so
//! the parsers raise the error at the point of detection and propagate it
//! unchanged. No partially parsed [`ConnectionInfo`](crate::ConnectionInfo) is
//! ever returned.
//!
//! # Error Codes
//!
//! Each variant carries a stable code of the form `D{category}{number}`:
//! - 1xxx: dispatch errors (unknown prefix)
//! - 2xxx: missing mandatory name components
//! - 3xxx: host list errors
//! - 4xxx: Oracle grammar errors
//!
//! ```rust
//! use dburl_parser::{parse, UrlParseError};
//!
//! let err = parse("jdbc:postgresql://localhost/db").unwrap_err();
//! assert_eq!(err, UrlParseError::UnsupportedDialect);
//! assert_eq!(err.code(), "D1001");
//! assert_eq!(err.to_string(), "Unsupported database type.");
//! ```

use std::num::ParseIntError;
use thiserror::Error;

/// Result type for URL parsing operations.
pub type ParseResult<T> = Result<T, UrlParseError>;

/// Errors that can occur while decomposing a connection URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlParseError {
    /// The URL prefix matches no known dialect.
    #[error("Unsupported database type.")]
    UnsupportedDialect,

    /// A MySQL URL without a `/` separating hosts from the database.
    #[error("Invalid MySQL URL: Missing database name")]
    MissingDatabase,

    /// A Cassandra URL without a keyspace.
    #[error("Invalid Cassandra URL: Missing keyspace")]
    MissingKeyspace,

    /// An Oracle service-name URL without a service segment.
    #[error("Invalid Oracle Service Name URL")]
    MissingServiceName,

    /// An Oracle TNS descriptor with neither `SERVICE_NAME` nor `SID`.
    #[error("Invalid Oracle TNS URL: Missing SERVICE_NAME or SID")]
    MissingServiceOrSid,

    /// An empty host token in a host list.
    #[error("Invalid host in URL: {0}")]
    MalformedHost(String),

    /// A port token that is not a 16-bit unsigned integer.
    #[error("Invalid port number: {0}")]
    InvalidPort(String),

    /// An Oracle SID URL with fewer than three colon-separated segments.
    #[error("Invalid Oracle SID URL")]
    InvalidSidUrl,

    /// The host/port scan of a TNS descriptor failed.
    #[error("Invalid Oracle TNS URL")]
    InvalidTnsUrl(#[source] TnsScanError),
}

impl UrlParseError {
    /// Get the stable error code (e.g., "D2002").
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedDialect => "D1001",
            Self::MissingDatabase => "D2001",
            Self::MissingKeyspace => "D2002",
            Self::MissingServiceName => "D2003",
            Self::MissingServiceOrSid => "D2004",
            Self::MalformedHost(_) => "D3001",
            Self::InvalidPort(_) => "D3002",
            Self::InvalidSidUrl => "D4001",
            Self::InvalidTnsUrl(_) => "D4002",
        }
    }

    /// Check if the error is caused by a missing database, keyspace or service name.
    pub fn is_missing_name(&self) -> bool {
        matches!(
            self,
            Self::MissingDatabase
                | Self::MissingKeyspace
                | Self::MissingServiceName
                | Self::MissingServiceOrSid
        )
    }
}

/// Underlying cause of an [`UrlParseError::InvalidTnsUrl`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TnsScanError {
    /// A `(KEY=` group has no closing parenthesis.
    #[error("unterminated ({0}= group")]
    Unterminated(&'static str),

    /// A `(HOST=)` group with an empty value.
    #[error("empty HOST value")]
    EmptyHost,

    /// A `(PORT=...)` value that is not a valid port number.
    #[error("invalid PORT value '{value}': {source}")]
    Port {
        /// The offending text.
        value: String,
        /// The integer conversion failure.
        #[source]
        source: ParseIntError,
    },

    /// The descriptor contains no `(HOST=...)` group at all.
    #[error("no HOST found in descriptor")]
    NoAddress,
}
