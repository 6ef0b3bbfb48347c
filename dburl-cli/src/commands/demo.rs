//! `dburl demo` command - Parse the built-in sample URLs.

use crate::cli::DemoArgs;
use crate::commands::parse::report;
use crate::config::Config;
use crate::error::CliResult;

/// Sample URLs, one per dialect
pub const SAMPLE_URLS: [&str; 3] = [
    "jdbc:mysql://db1.example.com:3306,db2.example.com:3307/mydb\
     ?useSSL=true&serverTimezone=UTC&autoReconnect=true",
    "jdbc:oracle:thin:@(DESCRIPTION=(ADDRESS_LIST=\
     (ADDRESS=(PROTOCOL=TCP)(HOST=host1)(PORT=1521))\
     (ADDRESS=(PROTOCOL=TCP)(HOST=host2)(PORT=1521)))\
     (CONNECT_DATA=(SERVICE_NAME=myservice)))\
     ?user=myuser&password=mypassword&ReadTimeout=30000&V8Compatible=true\
     &oracle.net.CONNECT_TIMEOUT=5000&TcpNoDelay=true&useFetchSizeWithLongColumn=true\
     &autoCommitSpecCompliant=false&defaultRowPrefetch=100",
    "jdbc:cassandra://node1.example.com,node2.example.com:9043/keyspace1\
     ?consistency=QUORUM&loadBalancing=RoundRobin",
];

/// Run the demo command
pub fn run(args: DemoArgs, config: &Config) -> CliResult<()> {
    let urls: Vec<String> = SAMPLE_URLS.iter().map(|u| u.to_string()).collect();
    let format = args.format.unwrap_or(config.output.format);
    report(&urls, format, config.output.show_properties)?;
    Ok(())
}
