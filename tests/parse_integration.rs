//! Integration tests for URL parsing across all dialects.
//!
//! These tests exercise the public API end to end:
//! - Dialect dispatch
//! - Host lists and default ports
//! - Oracle grammars
//! - Error propagation

use dburl::prelude::*;
use dburl::{OracleParser, Properties, TnsScanError};
use pretty_assertions::assert_eq;

fn info(
    dialect: DialectKind,
    hosts: &[(&str, u16)],
    database: &str,
    props: &[(&str, &str)],
) -> ConnectionInfo {
    ConnectionInfo::new(
        dialect,
        hosts.iter().map(|(h, p)| HostEndpoint::new(*h, *p)).collect(),
        database,
        props
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Properties>(),
    )
}

#[test]
fn test_parse_is_idempotent() {
    let urls = [
        "jdbc:mysql://h1,h2:3307/db?a=1",
        "jdbc:cassandra://u:p@n1/ks",
        "jdbc:oracle:thin:@localhost:1521:orcl",
        "jdbc:oracle:thin:@//h1/svc",
        "jdbc:oracle:thin:@(DESCRIPTION=(ADDRESS=(HOST=h1)(PORT=1))(CONNECT_DATA=(SID=s)))",
    ];
    for url in urls {
        assert_eq!(parse(url).unwrap(), parse(url).unwrap(), "{url}");
    }
}

#[test]
fn test_mysql_all_parameters() {
    let url = "jdbc:mysql://host1:3306,host2:3306,host3:3306/mydatabase\
               ?user=myuser&password=mypassword&useSSL=true&requireSSL=true\
               &serverTimezone=UTC&characterEncoding=UTF-8&connectTimeout=5000\
               &zeroDateTimeBehavior=CONVERT_TO_NULL";
    assert_eq!(
        parse(url).unwrap(),
        info(
            DialectKind::MySql,
            &[("host1", 3306), ("host2", 3306), ("host3", 3306)],
            "mydatabase",
            &[
                ("user", "myuser"),
                ("password", "mypassword"),
                ("useSSL", "true"),
                ("requireSSL", "true"),
                ("serverTimezone", "UTC"),
                ("characterEncoding", "UTF-8"),
                ("connectTimeout", "5000"),
                ("zeroDateTimeBehavior", "CONVERT_TO_NULL"),
            ],
        )
    );
}

#[test]
fn test_empty_database_asymmetry() {
    assert_eq!(parse("jdbc:mysql://host/").unwrap().database(), "");
    assert_eq!(parse("jdbc:cassandra://host/"), Err(UrlParseError::MissingKeyspace));
}

#[test]
fn test_cassandra_many_params() {
    let url = "jdbc:cassandra://host1,host2,host3:9042/mykeyspace\
               ?consistency=QUORUM&localDatacenter=datacenter1&readTimeoutMillis=5000\
               &loadBalancing.localDc=datacenter1&compression=SNAPPY&fetchSize=5000";
    let parsed = parse(url).unwrap();
    assert_eq!(
        parsed.hosts(),
        &[
            HostEndpoint::new("host1", 9042),
            HostEndpoint::new("host2", 9042),
            HostEndpoint::new("host3", 9042),
        ]
    );
    assert_eq!(parsed.database(), "mykeyspace");
    assert_eq!(parsed.properties().len(), 6);
    assert_eq!(parsed.property("loadBalancing.localDc"), Some("datacenter1"));
}

#[test]
fn test_oracle_tns_multi_host() {
    let url = "jdbc:oracle:thin:@(DESCRIPTION=(ADDRESS_LIST=\
               (ADDRESS=(PROTOCOL=TCP)(HOST=h1)(PORT=1521))\
               (ADDRESS=(PROTOCOL=TCP)(HOST=h2)(PORT=1521)))\
               (CONNECT_DATA=(SERVICE_NAME=svc)))";
    assert_eq!(
        parse(url).unwrap(),
        info(DialectKind::Oracle, &[("h1", 1521), ("h2", 1521)], "svc", &[])
    );
}

#[test]
fn test_oracle_tns_missing_port() {
    assert_eq!(
        parse("jdbc:oracle:thin:@(DESCRIPTION=(ADDRESS=(HOST=h1))(CONNECT_DATA=(SID=s)))").unwrap(),
        info(DialectKind::Oracle, &[("h1", 1521)], "s", &[])
    );
}

#[test]
fn test_oracle_sid_and_service_name() {
    assert_eq!(
        parse("jdbc:oracle:thin:@localhost:1521:orcl").unwrap(),
        info(DialectKind::Oracle, &[("localhost", 1521)], "orcl", &[])
    );
    assert_eq!(parse("jdbc:oracle:thin:@localhost"), Err(UrlParseError::InvalidSidUrl));
    assert_eq!(
        parse("jdbc:oracle:thin:@//h1:1521,h2:1522/svc?a=1").unwrap(),
        info(DialectKind::Oracle, &[("h1", 1521), ("h2", 1522)], "svc", &[("a", "1")])
    );
}

#[test]
fn test_invalid_port_for_every_dialect() {
    let urls = [
        "jdbc:mysql://host:notanumber/db",
        "jdbc:cassandra://host:notanumber/ks",
        "jdbc:oracle:thin:@//host:notanumber/svc",
    ];
    for url in urls {
        assert_eq!(
            parse(url),
            Err(UrlParseError::InvalidPort("notanumber".into())),
            "{url}"
        );
    }
    assert!(matches!(
        parse("jdbc:oracle:thin:@(ADDRESS=(HOST=host)(PORT=notanumber))(SID=s)"),
        Err(UrlParseError::InvalidTnsUrl(TnsScanError::Port { .. }))
    ));
}

#[test]
fn test_unsupported_dialect() {
    for url in ["", "jdbc:postgresql://h/db", "mysql://h/db", "jdbc:oracle:oci:@h:1:s"] {
        assert_eq!(parse(url), Err(UrlParseError::UnsupportedDialect), "{url:?}");
    }
}

#[test]
fn test_from_str() {
    let parsed: ConnectionInfo = "jdbc:cassandra://n1:9043/ks".parse().unwrap();
    assert_eq!(parsed.primary_host(), Some(&HostEndpoint::new("n1", 9043)));
}

#[test]
fn test_parser_shared_across_threads() {
    let parser = OracleParser;
    let handles: Vec<_> = (0..4u16)
        .map(|i| {
            std::thread::spawn(move || {
                parser
                    .parse(&format!("jdbc:oracle:thin:@//h{i}:{}/svc", 1521 + i))
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let parsed = handle.join().unwrap();
        assert_eq!(parsed.hosts()[0].port(), 1521 + i as u16);
    }
}

#[test]
fn test_result_outlives_input() {
    let parsed = {
        let url = String::from("jdbc:mysql://owned-host/owned-db?k=v");
        parse(&url).unwrap()
    };
    assert_eq!(parsed.hosts()[0].host(), "owned-host");
    assert_eq!(parsed.database(), "owned-db");
}

#[test]
fn test_json_shape() {
    let parsed = parse("jdbc:mysql://h/db?b=2&a=1").unwrap();
    let json = serde_json::to_string(&parsed).unwrap();
    assert_eq!(
        json,
        r#"{"dialect":"mysql","hosts":[{"host":"h","port":3306}],"database":"db","properties":{"b":"2","a":"1"}}"#
    );
}
