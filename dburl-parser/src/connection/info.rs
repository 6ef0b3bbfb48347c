//! The parse result model.

use super::dialect::DialectKind;
use crate::error::ParseResult;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Query string properties, keyed by parameter name.
///
/// Iteration follows first-insertion order; equality ignores order.
pub type Properties = IndexMap<String, String>;

/// A single `(host, port)` pair from a host list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HostEndpoint {
    host: String,
    port: u16,
}

impl HostEndpoint {
    /// Create a new endpoint.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the host name.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the port.
    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for HostEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// A decomposed connection URL.
///
/// Produced only by a successful parse and never mutated afterwards. All
/// text is owned, so the input string can be dropped once parsing returns.
///
/// ```rust
/// use dburl_parser::{ConnectionInfo, DialectKind};
///
/// let info: ConnectionInfo = "jdbc:mysql://db1:3306,db2/app?useSSL=true".parse().unwrap();
/// assert_eq!(info.dialect(), DialectKind::MySql);
/// assert_eq!(info.hosts().len(), 2);
/// assert_eq!(info.hosts()[1].port(), 3306);
/// assert_eq!(info.database(), "app");
/// assert_eq!(info.property("useSSL"), Some("true"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionInfo {
    dialect: DialectKind,
    hosts: Vec<HostEndpoint>,
    database: String,
    properties: Properties,
}

impl ConnectionInfo {
    /// Assemble a connection info from its parts.
    pub fn new(
        dialect: DialectKind,
        hosts: Vec<HostEndpoint>,
        database: impl Into<String>,
        properties: Properties,
    ) -> Self {
        Self {
            dialect,
            hosts,
            database: database.into(),
            properties,
        }
    }

    /// Parse a URL of any supported dialect.
    pub fn parse(url: &str) -> ParseResult<Self> {
        super::dialect::parse(url)
    }

    /// Get the database dialect.
    pub fn dialect(&self) -> DialectKind {
        self.dialect
    }

    /// Get the hosts in order of appearance.
    pub fn hosts(&self) -> &[HostEndpoint] {
        &self.hosts
    }

    /// Get the first host, if any.
    pub fn primary_host(&self) -> Option<&HostEndpoint> {
        self.hosts.first()
    }

    /// Get the database, keyspace, service or SID name.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Get a query property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(|s| s.as_str())
    }

    /// Get all query properties.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

impl FromStr for ConnectionInfo {
    type Err = crate::error::UrlParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConnectionInfo[type={}, hosts=[", self.dialect.label())?;
        for (i, host) in self.hosts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", host)?;
        }
        write!(f, "], database={}, properties={{", self.database)?;
        for (i, (key, value)) in self.properties.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        f.write_str("}]")
    }
}
