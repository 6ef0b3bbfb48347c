//! Low-level extractors shared by all dialect parsers.

use super::info::{HostEndpoint, Properties};
use crate::error::{ParseResult, UrlParseError};

/// Split a comma-separated host list into endpoints.
///
/// Each token is split on its last `:`. A token without a port (or with an
/// empty one) gets `default_port`. IPv6 literals are not supported.
///
/// ```rust
/// use dburl_parser::connection::split_hosts;
///
/// let hosts = split_hosts("h1:3307,h2", 3306).unwrap();
/// assert_eq!(hosts[0].port(), 3307);
/// assert_eq!(hosts[1].port(), 3306);
/// ```
pub fn split_hosts(host_list: &str, default_port: u16) -> ParseResult<Vec<HostEndpoint>> {
    host_list
        .split(',')
        .map(|token| {
            let (host, port) = match token.rsplit_once(':') {
                Some((host, port)) => (host, Some(port)),
                None => (token, None),
            };

            if host.is_empty() {
                return Err(UrlParseError::MalformedHost(host_list.to_string()));
            }

            let port = match port {
                Some(port) if !port.is_empty() => port
                    .parse::<u16>()
                    .map_err(|_| UrlParseError::InvalidPort(port.to_string()))?,
                _ => default_port,
            };

            Ok(HostEndpoint::new(host, port))
        })
        .collect()
}

/// Split a query string into properties.
///
/// Segments without `=` are dropped; the last value wins for repeated keys.
pub fn split_query_params(query: &str) -> Properties {
    let mut params = Properties::new();
    for (key, value) in query.split('&').filter_map(|pair| pair.split_once('=')) {
        params.insert(key.to_string(), value.to_string());
    }
    params
}

/// Split a URL into its main part and optional query part at the first `?`.
pub fn split_main_and_query(url: &str) -> (&str, Option<&str>) {
    match url.split_once('?') {
        Some((main, query)) => (main, Some(query)),
        None => (url, None),
    }
}

/// Split off and parse the query string in one step.
pub(crate) fn main_and_properties(url: &str) -> (&str, Properties) {
    let (main, query) = split_main_and_query(url);
    (main, query.map(split_query_params).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_hosts_preserves_order_and_duplicates() {
        let hosts = split_hosts("b:1,a,b:1,c:3", 9).unwrap();
        assert_eq!(
            hosts,
            vec![
                HostEndpoint::new("b", 1),
                HostEndpoint::new("a", 9),
                HostEndpoint::new("b", 1),
                HostEndpoint::new("c", 3),
            ]
        );
    }

    #[test]
    fn test_split_hosts_uses_last_colon() {
        let hosts = split_hosts("weird:name:1522", 1521).unwrap();
        assert_eq!(hosts, vec![HostEndpoint::new("weird:name", 1522)]);
    }

    #[test]
    fn test_split_hosts_empty_port_defaults() {
        let hosts = split_hosts("h1:", 1521).unwrap();
        assert_eq!(hosts, vec![HostEndpoint::new("h1", 1521)]);
    }

    #[test]
    fn test_split_hosts_empty_host() {
        assert_eq!(
            split_hosts("", 3306),
            Err(UrlParseError::MalformedHost(String::new()))
        );
        assert_eq!(
            split_hosts("h1,,h2", 3306),
            Err(UrlParseError::MalformedHost("h1,,h2".into()))
        );
        assert!(matches!(
            split_hosts(":3306", 3306),
            Err(UrlParseError::MalformedHost(_))
        ));
    }

    #[test]
    fn test_split_hosts_invalid_port() {
        assert_eq!(
            split_hosts("host:notanumber", 3306),
            Err(UrlParseError::InvalidPort("notanumber".into()))
        );
        assert_eq!(
            split_hosts("host:70000", 3306),
            Err(UrlParseError::InvalidPort("70000".into()))
        );
    }

    #[test]
    fn test_split_query_params() {
        let params = split_query_params("a=1&b");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_split_query_params_edge_cases() {
        assert!(split_query_params("").is_empty());

        let params = split_query_params("empty=&x=a=b&&dup=1&dup=2");
        assert_eq!(params.get("empty").map(String::as_str), Some(""));
        assert_eq!(params.get("x").map(String::as_str), Some("a=b"));
        assert_eq!(params.get("dup").map(String::as_str), Some("2"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_split_main_and_query() {
        assert_eq!(split_main_and_query("h/db?a=1?b"), ("h/db", Some("a=1?b")));
        assert_eq!(split_main_and_query("h/db"), ("h/db", None));
        assert_eq!(split_main_and_query("h/db?"), ("h/db", Some("")));
    }
}
