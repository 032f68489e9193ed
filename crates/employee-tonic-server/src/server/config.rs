use anyhow::bail;
use clap::{Parser, ValueEnum};
use core::time::Duration;

/// Runtime configuration for the `employee-tonic-server` binary.
///
/// All values are parsed from CLI arguments or environment variables (a
/// `.env` file in the working directory is loaded first), with defaults
/// suitable for local use.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "employee-tonic-server",
    version,
    about = "A gRPC service for an in-memory employee registry"
)]
pub struct CliArgs {
    /// Address to listen on (TCP or Unix socket path; use --uds for Unix socket).
    ///
    /// Example: "0.0.0.0:6565" or "/tmp/employee-registry.sock"
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:6565"))]
    pub server_addr: String,

    /// Listen on a Unix socket instead of TCP. If set, `SERVER_ADDR` must be a file path.
    #[arg(short, long, default_value_t = false)]
    pub uds: bool,

    /// Seconds to wait for in-flight requests to finish after a shutdown
    /// signal before the server stops.
    ///
    /// Environment variable: `SHUTDOWN_TIMEOUT`
    #[arg(long, env = "SHUTDOWN_TIMEOUT", default_value_t = 3)]
    pub shutdown_timeout: u64,

    /// Start without the four seed employees. Seed departments are always
    /// present.
    ///
    /// Environment variable: `EMPTY_STORE`
    #[arg(long, env = "EMPTY_STORE", default_value_t = false)]
    pub empty_store: bool,

    /// Log output format.
    ///
    /// Environment variable: `LOG_FORMAT`
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Output format of the console log layer.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human readable.
    Pretty,
    /// One JSON object per event.
    Json,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: String,
    pub uds: bool,
    pub shutdown_timeout: Duration,
    pub empty_store: bool,
    pub log_format: LogFormat,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let server_addr = args.server_addr.trim().to_string();
        if server_addr.is_empty() {
            bail!("SERVER_ADDR must not be empty");
        }

        if args.shutdown_timeout == 0 {
            bail!("SHUTDOWN_TIMEOUT must be greater than 0");
        }

        if args.uds && cfg!(not(unix)) {
            bail!("Unix domain sockets are not supported on this platform");
        }

        Ok(Self {
            server_addr,
            uds: args.uds,
            shutdown_timeout: Duration::from_secs(args.shutdown_timeout),
            empty_store: args.empty_store,
            log_format: args.log_format,
        })
    }
}
