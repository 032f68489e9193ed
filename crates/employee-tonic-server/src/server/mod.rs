//! Server-side components of the employee registry.
//!
//! ## Submodules
//!
//! - [`config`] - CLI and environment configuration.
//! - [`service`] - gRPC handler and shutdown admission.
//! - [`store`] - In-memory employee store.
//! - [`telemetry`] - Logging, tracing, and metrics initialization.
//!
//! [`serve_with_incoming`] wires these together with health checking,
//! reflection, gRPC-Web, and compression.

pub mod config;
pub mod service;
pub mod store;
pub mod telemetry;

use core::time::Duration;
use employee_tonic_core::proto::{
    FILE_DESCRIPTOR_SET, employee_service_server::EmployeeServiceServer,
};
use futures::Stream;
use service::handler::EmployeeServiceImpl;
use tokio::io::{AsyncRead, AsyncWrite};
use tonic::transport::server::Connected;
use tonic::{codec::CompressionEncoding, transport::Server};
use tonic_reflection::server::Builder;
use tonic_web::GrpcWebLayer;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

/// Serves the registry on `incoming` until `signal` resolves.
///
/// On shutdown the health status flips to `NOT_SERVING`, new calls are
/// refused, and admitted calls get up to `drain_timeout` to finish before
/// the transport stops.
pub async fn serve_with_incoming<I, IO, IE, F>(
    incoming: I,
    service: EmployeeServiceImpl,
    drain_timeout: Duration,
    signal: F,
) -> anyhow::Result<()>
where
    I: Stream<Item = Result<IO, IE>>,
    IO: AsyncRead + AsyncWrite + Connected + Unpin + Send + 'static,
    IE: Into<tower::BoxError>,
    F: Future<Output = ()>,
{
    let (health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<EmployeeServiceServer<EmployeeServiceImpl>>()
        .await;

    let reflection = Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    let draining = service.clone();
    let shutdown = async move {
        signal.await;
        tracing::info!("Shutdown signal received, terminating gracefully...");

        // 1. Publish the status
        health_reporter
            .set_not_serving::<EmployeeServiceServer<EmployeeServiceImpl>>()
            .await;

        // 2. Refuse new calls and drain the rest
        draining.shutdown(drain_timeout).await;
    };

    Server::builder()
        .accept_http1(true)
        .http2_adaptive_window(Some(true))
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(GrpcWebLayer::new()),
        )
        .add_service(health_service)
        .add_service(reflection)
        .add_service(build_employee_service(service))
        .serve_with_incoming_shutdown(incoming, shutdown)
        .await?;

    tracing::info!("Service shut down successfully");
    Ok(())
}

/// Wraps the handler in the generated tonic server with compression enabled
/// in both directions.
pub fn build_employee_service(
    service: EmployeeServiceImpl,
) -> EmployeeServiceServer<EmployeeServiceImpl> {
    EmployeeServiceServer::new(service)
        .send_compressed(CompressionEncoding::Zstd)
        .send_compressed(CompressionEncoding::Gzip)
        .send_compressed(CompressionEncoding::Deflate)
        .accept_compressed(CompressionEncoding::Zstd)
        .accept_compressed(CompressionEncoding::Gzip)
        .accept_compressed(CompressionEncoding::Deflate)
}
