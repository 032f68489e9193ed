use anyhow::Context;
use clap::Parser;
use employee_tonic_server::server::{
    config::{CliArgs, ServerConfig},
    serve_with_incoming,
    service::handler::EmployeeServiceImpl,
    store::EmployeeStore,
    telemetry::init_telemetry,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_stream::wrappers::TcpListenerStream;

// mimalloc for musl builds.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = ServerConfig::try_from(args)?;

    let providers = init_telemetry(config.log_format)?;

    let store = if config.empty_store {
        EmployeeStore::empty()
    } else {
        EmployeeStore::seeded()
    };
    let service = EmployeeServiceImpl::new(Arc::new(store));

    let res = if config.uds {
        run_uds(service, &config).await
    } else {
        let tcp = TcpListener::bind(&config.server_addr)
            .await
            .with_context(|| format!("failed to bind {}", config.server_addr))?;
        let incoming = TcpListenerStream::new(tcp);
        log_startup_info(&config, &service);
        serve_with_incoming(incoming, service, config.shutdown_timeout, shutdown_signal()).await
    };

    providers.shutdown();
    res
}

#[cfg(unix)]
async fn run_uds(service: EmployeeServiceImpl, config: &ServerConfig) -> anyhow::Result<()> {
    use tokio::net::UnixListener;
    use tokio_stream::wrappers::UnixListenerStream;

    let uds_path = config.server_addr.clone();
    let uds = UnixListener::bind(&uds_path)
        .with_context(|| format!("failed to bind unix socket {uds_path}"))?;
    let incoming = UnixListenerStream::new(uds);
    log_startup_info(config, &service);
    let res = serve_with_incoming(incoming, service, config.shutdown_timeout, shutdown_signal()).await;
    // Best effort: a panic can still leave the socket file behind.
    let _ = std::fs::remove_file(&uds_path);
    res
}

#[cfg(not(unix))]
async fn run_uds(_service: EmployeeServiceImpl, _config: &ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!("Unix domain sockets are not supported on this platform");
}

fn log_startup_info(config: &ServerConfig, service: &EmployeeServiceImpl) {
    if cfg!(debug_assertions) {
        tracing::info!(
            "Starting employee service on {} with full config: {:#?}",
            config.server_addr,
            config
        );
    } else {
        tracing::info!(
            "Starting employee service on {} with {} seeded employees",
            config.server_addr,
            service.store().len()
        );
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C signal"),
        () = terminate => tracing::info!("Received SIGTERM signal"),
    }
}
