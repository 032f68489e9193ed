use core::{fmt, hint::black_box};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use employee_tonic_core::proto::{
    AddEmployeeRequest, EmployeeFilterRequest, employee_service_client::EmployeeServiceClient,
};
use employee_tonic_server::server::{
    serve_with_incoming, service::handler::EmployeeServiceImpl, store::EmployeeStore,
};
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::{net::TcpListener, runtime::Builder, task::JoinSet};
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{codec::CompressionEncoding, transport::Channel};

/// Employees added before measuring so list calls return realistic payloads.
const PRELOADED_EMPLOYEES: usize = 10_000;

#[derive(Clone, Copy, Debug)]
enum Compression {
    None,
    Deflate,
    Gzip,
    Zstd,
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compression::None => write!(f, "none"),
            Compression::Deflate => write!(f, "deflate"),
            Compression::Gzip => write!(f, "gzip"),
            Compression::Zstd => write!(f, "zstd"),
        }
    }
}

impl From<Compression> for Option<CompressionEncoding> {
    fn from(value: Compression) -> Self {
        match value {
            Compression::None => None,
            Compression::Deflate => Some(CompressionEncoding::Deflate),
            Compression::Gzip => Some(CompressionEncoding::Gzip),
            Compression::Zstd => Some(CompressionEncoding::Zstd),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Call {
    GetAll,
    FilterByDepartment,
    Add,
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Call::GetAll => write!(f, "get_all"),
            Call::FilterByDepartment => write!(f, "filter_department"),
            Call::Add => write!(f, "add"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct GrpcBenchParams {
    call: Call,
    concurrency: usize,
    compression: Compression,
}

fn preload(store: &EmployeeStore) {
    let departments = ["IT", "HR", "Marketing", "Finance"];
    for i in 0..PRELOADED_EMPLOYEES {
        let candidate = employee_tonic_core::types::NewEmployee {
            name: format!("Employee {i}"),
            age: 18 + (i % 43) as i32,
            department: departments[i % departments.len()].into(),
            position: "Analyst".into(),
            hiring_year: 2000 + (i % 25) as i32,
            salary: 1000.0 + i as f64,
        };
        store.save(candidate).expect("preload save failed");
    }
}

fn grpc_bench(c: &mut Criterion) {
    let rt = Builder::new_multi_thread().enable_all().build().unwrap();

    // Serve in-process on an ephemeral port for the whole run.
    let endpoint = rt.block_on(async {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind");
        let endpoint = format!("http://{}", listener.local_addr().unwrap());
        let store = Arc::new(EmployeeStore::seeded());
        preload(&store);
        let service = EmployeeServiceImpl::new(store);
        tokio::spawn(serve_with_incoming(
            TcpListenerStream::new(listener),
            service,
            Duration::from_secs(1),
            std::future::pending::<()>(),
        ));
        endpoint
    });

    let call_cases = [Call::GetAll, Call::FilterByDepartment, Call::Add];
    let concurrency_cases = [1, 4, 16];
    let compression_cases = [
        Compression::None,
        Compression::Deflate,
        Compression::Gzip,
        Compression::Zstd,
    ];

    // Generate cartesian product of all param combinations
    let mut cases = Vec::new();
    for &call in &call_cases {
        for &concurrency in &concurrency_cases {
            for &compression in &compression_cases {
                cases.push(GrpcBenchParams {
                    call,
                    concurrency,
                    compression,
                });
            }
        }
    }

    for params in &cases {
        let mut group = c.benchmark_group(format!("grpc/{}", params.call));
        group.throughput(Throughput::Elements(params.concurrency as u64));

        group.bench_function(
            format!(
                "conc/{}/comp/{}",
                params.concurrency, params.compression
            ),
            |b| {
                b.to_async(&rt).iter_custom(|iters| {
                    let endpoint = endpoint.clone();
                    async move {
                        let channel = Channel::from_shared(endpoint)
                            .expect("invalid endpoint")
                            .connect()
                            .await
                            .expect("Failed to connect to server");

                        let start = Instant::now();

                        for _ in 0..iters {
                            run_grpc_bench(&channel, params).await;
                        }

                        start.elapsed()
                    }
                });
            },
        );

        group.finish();
    }
}

async fn run_grpc_bench(channel: &Channel, params: &GrpcBenchParams) {
    let mut tasks = JoinSet::new();

    for _ in 0..params.concurrency {
        let channel = channel.clone();
        let params = *params;

        tasks.spawn(async move {
            let mut client = EmployeeServiceClient::new(channel);
            if let Some(encoding) = params.compression.into() {
                client = client.accept_compressed(encoding).send_compressed(encoding)
            }

            match params.call {
                Call::GetAll => {
                    let resp = client.get_all_employees(()).await.expect("get_all failed");
                    black_box(resp.into_inner().employees.len());
                }
                Call::FilterByDepartment => {
                    let resp = client
                        .filter_employees(EmployeeFilterRequest {
                            department: Some("IT".into()),
                            min_age: Some(25),
                            ..Default::default()
                        })
                        .await
                        .expect("filter failed");
                    black_box(resp.into_inner().employees.len());
                }
                Call::Add => {
                    let resp = client
                        .add_employee(AddEmployeeRequest {
                            name: "Bench Person".into(),
                            age: 30,
                            department: "Benchmarks".into(),
                            position: "Load".into(),
                            hiring_year: 2024,
                            salary: 1500.0,
                        })
                        .await
                        .expect("add failed");
                    black_box(resp.into_inner().employee_id);
                }
            }
        });
    }

    // Wait for all tasks to complete
    while let Some(res) = tasks.join_next().await {
        res.unwrap();
    }
}

criterion_group!(grpc_benches, grpc_bench);
criterion_main!(grpc_benches);
