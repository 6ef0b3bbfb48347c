//! Oracle TNS descriptor scanning.
//!
//! A descriptor is a tree of `(KEY=VALUE)` groups:
//!
//! ```text
//! (DESCRIPTION=
//!   (ADDRESS_LIST=
//!     (ADDRESS=(PROTOCOL=TCP)(HOST=host1)(PORT=1521))
//!     (ADDRESS=(PROTOCOL=TCP)(HOST=host2)(PORT=1521)))
//!   (CONNECT_DATA=(SERVICE_NAME=myservice)))
//! ```
//!
//! Only the groups that matter are located by substring search, at any
//! depth. The nesting itself is not validated.

use super::dialect::DialectKind;
use super::extract::main_and_properties;
use super::info::{ConnectionInfo, HostEndpoint};
use crate::error::{ParseResult, TnsScanError, UrlParseError};
use tracing::trace;

const DEFAULT_PORT: u16 = 1521;

const HOST_KEY: &str = "(HOST=";
const PORT_KEY: &str = "(PORT=";
const SERVICE_NAME_KEY: &str = "(SERVICE_NAME=";
const SID_KEY: &str = "(SID=";

/// Parse a TNS descriptor (prefix already stripped).
pub(crate) fn parse_descriptor(raw: &str) -> ParseResult<ConnectionInfo> {
    let (descriptor, properties) = main_and_properties(raw);

    let hosts = scan_addresses(descriptor).map_err(UrlParseError::InvalidTnsUrl)?;
    let database = resolve_database(descriptor)?;
    if hosts.is_empty() {
        return Err(UrlParseError::InvalidTnsUrl(TnsScanError::NoAddress));
    }

    trace!(hosts = hosts.len(), database, "TNS descriptor scanned");
    Ok(ConnectionInfo::new(DialectKind::Oracle, hosts, database, properties))
}

/// Collect every `(HOST=..)` group with the `(PORT=..)` that follows it.
///
/// A port is only taken from the text before the next `(HOST=`; a host
/// without one gets the default port.
fn scan_addresses(descriptor: &str) -> Result<Vec<HostEndpoint>, TnsScanError> {
    let mut hosts = Vec::new();
    let mut rest = descriptor;

    while let Some((host, after_host)) = take_value(rest, HOST_KEY)? {
        if host.is_empty() {
            return Err(TnsScanError::EmptyHost);
        }

        let window_end = after_host.find(HOST_KEY).unwrap_or(after_host.len());
        let port = match take_value(&after_host[..window_end], PORT_KEY)? {
            Some((value, _)) => value.parse::<u16>().map_err(|source| TnsScanError::Port {
                value: value.to_string(),
                source,
            })?,
            None => DEFAULT_PORT,
        };

        hosts.push(HostEndpoint::new(host, port));
        rest = &after_host[window_end..];
    }

    Ok(hosts)
}

/// `SERVICE_NAME` takes precedence over `SID`.
fn resolve_database(descriptor: &str) -> ParseResult<&str> {
    for key in [SERVICE_NAME_KEY, SID_KEY] {
        if let Some((value, _)) = take_value(descriptor, key).map_err(UrlParseError::InvalidTnsUrl)? {
            if value.is_empty() {
                break;
            }
            return Ok(value);
        }
    }
    Err(UrlParseError::MissingServiceOrSid)
}

/// Find the first `key` group and return its trimmed value and the text after
/// its closing parenthesis.
fn take_value<'a>(
    text: &'a str,
    key: &'static str,
) -> Result<Option<(&'a str, &'a str)>, TnsScanError> {
    let Some(start) = text.find(key) else {
        return Ok(None);
    };
    let value_start = start + key.len();
    let len = text[value_start..]
        .find(')')
        .ok_or(TnsScanError::Unterminated(&key[1..key.len() - 1]))?;
    let value = text[value_start..value_start + len].trim();
    Ok(Some((value, &text[value_start + len + 1..])))
}
