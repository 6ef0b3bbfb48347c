//! Oracle thin-driver URL parser.
//!
//! Three addressing syntaxes follow the `jdbc:oracle:thin:@` prefix:
//!
//! ```text
//! host[:port]:<ignored>:SID[?props]                      SID
//! //host1[:port1][,host2[:port2]...]/service[?props]     Service name
//! (DESCRIPTION=...(HOST=h)(PORT=p)...(SERVICE_NAME=s))   TNS descriptor
//! ```

use super::dialect::{DialectKind, UrlParser, strip_dialect_prefix};
use super::extract::{main_and_properties, split_hosts};
use super::info::ConnectionInfo;
use super::tns;
use crate::error::{ParseResult, UrlParseError};
use tracing::trace;

const DEFAULT_PORT: u16 = 1521;

/// Oracle URL syntax, chosen by the leading characters after the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleFormat {
    /// `(DESCRIPTION=...)` descriptor.
    Tns,
    /// `//hosts/service`.
    ServiceName,
    /// `host:port:sid`.
    Sid,
}

impl OracleFormat {
    /// Classify the text following the Oracle prefix.
    pub fn detect(raw: &str) -> Self {
        if raw.starts_with('(') {
            Self::Tns
        } else if raw.starts_with("//") {
            Self::ServiceName
        } else {
            Self::Sid
        }
    }
}

/// Parser for `jdbc:oracle:thin:@` URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OracleParser;

impl UrlParser for OracleParser {
    fn parse(&self, url: &str) -> ParseResult<ConnectionInfo> {
        let raw = strip_dialect_prefix(url, DialectKind::Oracle);
        let format = OracleFormat::detect(raw);
        trace!(?format, "Parsing Oracle URL");

        match format {
            OracleFormat::Tns => tns::parse_descriptor(raw),
            OracleFormat::ServiceName => parse_service_name(raw),
            OracleFormat::Sid => parse_sid(raw),
        }
    }
}

fn parse_service_name(raw: &str) -> ParseResult<ConnectionInfo> {
    let (main, properties) = main_and_properties(raw);

    // ["", "", hosts, service, ...]
    let parts: Vec<&str> = main.split('/').collect();
    let (hosts_part, service) = match parts.as_slice() {
        [_, _, hosts, service, ..] if !service.is_empty() => (*hosts, *service),
        _ => return Err(UrlParseError::MissingServiceName),
    };

    let hosts = split_hosts(hosts_part, DEFAULT_PORT)?;
    Ok(ConnectionInfo::new(DialectKind::Oracle, hosts, service, properties))
}

fn parse_sid(raw: &str) -> ParseResult<ConnectionInfo> {
    let (main, properties) = main_and_properties(raw);

    // The middle segment is skipped.
    let parts: Vec<&str> = main.split(':').collect();
    let (hosts_part, sid) = match parts.as_slice() {
        [hosts, _, sid, ..] if !sid.is_empty() => (*hosts, *sid),
        _ => return Err(UrlParseError::InvalidSidUrl),
    };

    let hosts = split_hosts(hosts_part, DEFAULT_PORT)?;
    Ok(ConnectionInfo::new(DialectKind::Oracle, hosts, sid, properties))
}
